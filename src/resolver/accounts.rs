use anchor_client::solana_sdk::pubkey::Pubkey;

use crate::{
    errors::DerivationError,
    instructions::{AccountRole, AccountSet},
    pdas::*,
    resolver::AuctionHouseRecord,
};

/// Delegated authority of an auction house and its auction house scoped PDA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuctioneerAccounts {
    pub authority: PdaInfo<u8>,
    pub pda: PdaInfo<u8>,
}

impl AuctioneerAccounts {
    pub fn derive(auction_house: &Pubkey) -> Result<Self, DerivationError> {
        let authority = find_auctioneer_authority_address(auction_house)?;
        let pda = find_auctioneer_pda(auction_house, &authority.0)?;

        Ok(AuctioneerAccounts { authority, pda })
    }

    fn add_to(&self, accounts: &mut AccountSet) {
        accounts.insert(AccountRole::AuctioneerAuthority, self.authority.0);
        accounts.insert(AccountRole::AhAuctioneerPda, self.pda.0);
    }
}

/// Stored addresses of an auction house the instructions need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketplaceAccounts {
    pub address: Pubkey,
    pub authority: Pubkey,
    pub treasury_mint: Pubkey,
    pub fee_account: Pubkey,
    pub treasury: Pubkey,
}

impl MarketplaceAccounts {
    pub fn new(address: Pubkey, record: &AuctionHouseRecord) -> Self {
        MarketplaceAccounts {
            address,
            authority: record.authority,
            treasury_mint: record.treasury_mint,
            fee_account: record.auction_house_fee_account,
            treasury: record.auction_house_treasury,
        }
    }

    fn add_to(&self, accounts: &mut AccountSet) {
        accounts.insert(AccountRole::AuctionHouse, self.address);
        accounts.insert(AccountRole::Authority, self.authority);
        accounts.insert(AccountRole::TreasuryMint, self.treasury_mint);
        accounts.insert(AccountRole::AuctionHouseFeeAccount, self.fee_account);
        accounts.insert(AccountRole::AuctionHouseTreasury, self.treasury);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthorizeAccounts {
    pub wallet: Pubkey,
    pub auction_house: Pubkey,
    pub auctioneer: AuctioneerAccounts,
}

impl AuthorizeAccounts {
    pub fn account_set(&self) -> AccountSet {
        let mut accounts = AccountSet::new()
            .with(AccountRole::Wallet, self.wallet)
            .with(AccountRole::AuctionHouse, self.auction_house);
        self.auctioneer.add_to(&mut accounts);
        accounts
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelegateAccounts {
    pub auction_house: Pubkey,
    pub authority: Pubkey,
    pub auctioneer: AuctioneerAccounts,
}

impl DelegateAccounts {
    pub fn account_set(&self) -> AccountSet {
        let mut accounts = AccountSet::new()
            .with(AccountRole::AuctionHouse, self.auction_house)
            .with(AccountRole::Authority, self.authority);
        self.auctioneer.add_to(&mut accounts);
        accounts
    }
}

/// Accounts and scaled amounts for listing a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SellAccounts {
    pub wallet: Pubkey,
    pub marketplace: MarketplaceAccounts,
    pub token_mint: Pubkey,
    pub token_account: Pubkey,
    pub metadata: Pubkey,
    pub listing_config: PdaInfo<u8>,
    pub seller_trade_state: PdaInfo<u8>,
    pub free_seller_trade_state: PdaInfo<u8>,
    pub program_as_signer: PdaInfo<u8>,
    pub auctioneer: AuctioneerAccounts,
    pub token_size: u64,
    pub reserve_price: u64,
    pub min_bid_increment: u64,
}

impl SellAccounts {
    pub fn account_set(&self) -> AccountSet {
        let mut accounts = AccountSet::new()
            .with(AccountRole::Wallet, self.wallet)
            .with(AccountRole::TokenAccount, self.token_account)
            .with(AccountRole::Metadata, self.metadata)
            .with(AccountRole::ListingConfig, self.listing_config.0)
            .with(AccountRole::SellerTradeState, self.seller_trade_state.0)
            .with(
                AccountRole::FreeSellerTradeState,
                self.free_seller_trade_state.0,
            )
            .with(AccountRole::ProgramAsSigner, self.program_as_signer.0);
        self.marketplace.add_to(&mut accounts);
        self.auctioneer.add_to(&mut accounts);
        accounts
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CancelAccounts {
    pub wallet: Pubkey,
    pub seller: Pubkey,
    pub marketplace: MarketplaceAccounts,
    pub token_mint: Pubkey,
    pub token_account: Pubkey,
    pub listing_config: PdaInfo<u8>,
    pub trade_state: PdaInfo<u8>,
    pub auctioneer: AuctioneerAccounts,
    /// Raw price seed of the cancelled trade state.
    pub price: u64,
    pub token_size: u64,
}

impl CancelAccounts {
    pub fn account_set(&self) -> AccountSet {
        let mut accounts = AccountSet::new()
            .with(AccountRole::Wallet, self.wallet)
            .with(AccountRole::Seller, self.seller)
            .with(AccountRole::TokenMint, self.token_mint)
            .with(AccountRole::TokenAccount, self.token_account)
            .with(AccountRole::ListingConfig, self.listing_config.0)
            .with(AccountRole::TradeState, self.trade_state.0);
        self.marketplace.add_to(&mut accounts);
        self.auctioneer.add_to(&mut accounts);
        accounts
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuyAccounts {
    pub wallet: Pubkey,
    pub seller: Pubkey,
    pub marketplace: MarketplaceAccounts,
    pub token_mint: Pubkey,
    pub token_account: Pubkey,
    pub metadata: Pubkey,
    pub payment_account: Pubkey,
    pub listing_config: PdaInfo<u8>,
    pub escrow_payment_account: PdaInfo<u8>,
    pub buyer_trade_state: PdaInfo<u8>,
    pub auctioneer: AuctioneerAccounts,
    pub price: u64,
    pub token_size: u64,
}

impl BuyAccounts {
    pub fn account_set(&self) -> AccountSet {
        let mut accounts = AccountSet::new()
            .with(AccountRole::Wallet, self.wallet)
            .with(AccountRole::Seller, self.seller)
            .with(AccountRole::PaymentAccount, self.payment_account)
            .with(AccountRole::TransferAuthority, self.wallet)
            .with(AccountRole::TokenAccount, self.token_account)
            .with(AccountRole::Metadata, self.metadata)
            .with(AccountRole::ListingConfig, self.listing_config.0)
            .with(
                AccountRole::EscrowPaymentAccount,
                self.escrow_payment_account.0,
            )
            .with(AccountRole::BuyerTradeState, self.buyer_trade_state.0);
        self.marketplace.add_to(&mut accounts);
        self.auctioneer.add_to(&mut accounts);
        accounts
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecuteSaleAccounts {
    pub buyer: Pubkey,
    pub seller: Pubkey,
    pub marketplace: MarketplaceAccounts,
    pub token_mint: Pubkey,
    pub token_account: Pubkey,
    pub metadata: Pubkey,
    pub seller_payment_receipt_account: Pubkey,
    pub buyer_receipt_token_account: Pubkey,
    pub listing_config: PdaInfo<u8>,
    pub escrow_payment_account: PdaInfo<u8>,
    pub buyer_trade_state: PdaInfo<u8>,
    pub seller_trade_state: PdaInfo<u8>,
    pub free_trade_state: PdaInfo<u8>,
    pub program_as_signer: PdaInfo<u8>,
    pub auctioneer: AuctioneerAccounts,
    pub price: u64,
    pub token_size: u64,
}

impl ExecuteSaleAccounts {
    pub fn account_set(&self) -> AccountSet {
        let mut accounts = AccountSet::new()
            .with(AccountRole::Buyer, self.buyer)
            .with(AccountRole::Seller, self.seller)
            .with(AccountRole::TokenMint, self.token_mint)
            .with(AccountRole::TokenAccount, self.token_account)
            .with(AccountRole::Metadata, self.metadata)
            .with(
                AccountRole::SellerPaymentReceiptAccount,
                self.seller_payment_receipt_account,
            )
            .with(
                AccountRole::BuyerReceiptTokenAccount,
                self.buyer_receipt_token_account,
            )
            .with(AccountRole::ListingConfig, self.listing_config.0)
            .with(
                AccountRole::EscrowPaymentAccount,
                self.escrow_payment_account.0,
            )
            .with(AccountRole::BuyerTradeState, self.buyer_trade_state.0)
            .with(AccountRole::SellerTradeState, self.seller_trade_state.0)
            .with(AccountRole::FreeTradeState, self.free_trade_state.0)
            .with(AccountRole::ProgramAsSigner, self.program_as_signer.0);
        self.marketplace.add_to(&mut accounts);
        self.auctioneer.add_to(&mut accounts);
        accounts
    }
}

/// Accounts for deposit and withdraw. `payment_account` is the source of a
/// deposit or the receipt account of a withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscrowAccounts {
    pub wallet: Pubkey,
    pub marketplace: MarketplaceAccounts,
    pub payment_account: Pubkey,
    pub escrow_payment_account: PdaInfo<u8>,
    pub auctioneer: AuctioneerAccounts,
    pub amount: u64,
}

impl EscrowAccounts {
    pub fn account_set(&self) -> AccountSet {
        let mut accounts = AccountSet::new()
            .with(AccountRole::Wallet, self.wallet)
            .with(AccountRole::PaymentAccount, self.payment_account)
            .with(AccountRole::ReceiptAccount, self.payment_account)
            .with(AccountRole::TransferAuthority, self.wallet)
            .with(
                AccountRole::EscrowPaymentAccount,
                self.escrow_payment_account.0,
            );
        self.marketplace.add_to(&mut accounts);
        self.auctioneer.add_to(&mut accounts);
        accounts
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseEscrowAccounts {
    pub wallet: Pubkey,
    pub auction_house: Pubkey,
    pub escrow_payment_account: PdaInfo<u8>,
}

impl CloseEscrowAccounts {
    pub fn account_set(&self) -> AccountSet {
        AccountSet::new()
            .with(AccountRole::Wallet, self.wallet)
            .with(AccountRole::AuctionHouse, self.auction_house)
            .with(
                AccountRole::EscrowPaymentAccount,
                self.escrow_payment_account.0,
            )
    }
}
