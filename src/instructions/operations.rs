use anchor_client::solana_sdk::instruction::Instruction;

use super::{assemble, data::*, layout::OperationKind};
use crate::{errors::AssemblyError, resolver::*};

/// Auction timing and bidding rules attached to a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingTerms {
    pub start_time: i64,
    pub end_time: i64,
    pub time_ext_period: u32,
    pub time_ext_delta: u32,
    pub allow_high_bid_cancel: bool,
}

pub fn authorize(accounts: &AuthorizeAccounts) -> Result<Instruction, AssemblyError> {
    assemble(
        OperationKind::Authorize,
        &accounts.account_set(),
        &AuthorizeData {},
    )
}

/// `update` replaces the scopes of an auctioneer that is already delegated.
pub fn delegate_auctioneer(
    accounts: &DelegateAccounts,
    scopes: Vec<AuthorityScope>,
    update: bool,
) -> Result<Instruction, AssemblyError> {
    let kind = if update {
        OperationKind::UpdateAuctioneer
    } else {
        OperationKind::DelegateAuctioneer
    };

    assemble(
        kind,
        &accounts.account_set(),
        &DelegateAuctioneerData { scopes },
    )
}

pub fn sell(accounts: &SellAccounts, terms: &ListingTerms) -> Result<Instruction, AssemblyError> {
    assemble(
        OperationKind::Sell,
        &accounts.account_set(),
        &SellData {
            trade_state_bump: accounts.seller_trade_state.1,
            free_trade_state_bump: accounts.free_seller_trade_state.1,
            program_as_signer_bump: accounts.program_as_signer.1,
            auctioneer_authority_bump: accounts.auctioneer.authority.1,
            token_size: accounts.token_size,
            start_time: terms.start_time,
            end_time: terms.end_time,
            reserve_price: Some(accounts.reserve_price),
            min_bid_increment: Some(accounts.min_bid_increment),
            time_ext_period: Some(terms.time_ext_period),
            time_ext_delta: Some(terms.time_ext_delta),
            allow_high_bid_cancel: Some(terms.allow_high_bid_cancel),
        },
    )
}

pub fn cancel(accounts: &CancelAccounts) -> Result<Instruction, AssemblyError> {
    assemble(
        OperationKind::Cancel,
        &accounts.account_set(),
        &CancelData {
            auctioneer_authority_bump: accounts.auctioneer.authority.1,
            buyer_price: accounts.price,
            token_size: accounts.token_size,
        },
    )
}

pub fn buy(accounts: &BuyAccounts) -> Result<Instruction, AssemblyError> {
    assemble(
        OperationKind::Buy,
        &accounts.account_set(),
        &BuyData {
            trade_state_bump: accounts.buyer_trade_state.1,
            escrow_payment_bump: accounts.escrow_payment_account.1,
            auctioneer_authority_bump: accounts.auctioneer.authority.1,
            buyer_price: accounts.price,
            token_size: accounts.token_size,
        },
    )
}

pub fn execute_sale(accounts: &ExecuteSaleAccounts) -> Result<Instruction, AssemblyError> {
    assemble(
        OperationKind::ExecuteSale,
        &accounts.account_set(),
        &ExecuteSaleData {
            escrow_payment_bump: accounts.escrow_payment_account.1,
            free_trade_state_bump: accounts.free_trade_state.1,
            program_as_signer_bump: accounts.program_as_signer.1,
            auctioneer_authority_bump: accounts.auctioneer.authority.1,
            buyer_price: accounts.price,
            token_size: accounts.token_size,
        },
    )
}

fn escrow_transfer(
    kind: OperationKind,
    accounts: &EscrowAccounts,
) -> Result<Instruction, AssemblyError> {
    assemble(
        kind,
        &accounts.account_set(),
        &EscrowTransferData {
            escrow_payment_bump: accounts.escrow_payment_account.1,
            auctioneer_authority_bump: accounts.auctioneer.authority.1,
            amount: accounts.amount,
        },
    )
}

pub fn deposit(accounts: &EscrowAccounts) -> Result<Instruction, AssemblyError> {
    escrow_transfer(OperationKind::Deposit, accounts)
}

pub fn withdraw(accounts: &EscrowAccounts) -> Result<Instruction, AssemblyError> {
    escrow_transfer(OperationKind::Withdraw, accounts)
}

pub fn close_escrow_account(accounts: &CloseEscrowAccounts) -> Result<Instruction, AssemblyError> {
    assemble(
        OperationKind::CloseEscrowAccount,
        &accounts.account_set(),
        &CloseEscrowAccountData {
            escrow_payment_bump: accounts.escrow_payment_account.1,
        },
    )
}
