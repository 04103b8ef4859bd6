use std::fmt::{self, Display};

use anchor_client::solana_sdk::{pubkey::Pubkey, system_program, sysvar};
use anchor_lang::solana_program::hash::hash;

use crate::constants::{AUCTIONEER_PROGRAM_ID, AUCTION_HOUSE_PROGRAM_ID};

/// Position-independent name of an account slot in an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountRole {
    AuctionHouseProgram,
    ListingConfig,
    Wallet,
    Seller,
    Buyer,
    PaymentAccount,
    ReceiptAccount,
    TransferAuthority,
    TreasuryMint,
    TokenAccount,
    TokenMint,
    Metadata,
    EscrowPaymentAccount,
    SellerPaymentReceiptAccount,
    BuyerReceiptTokenAccount,
    Authority,
    AuctionHouse,
    AuctionHouseFeeAccount,
    AuctionHouseTreasury,
    TradeState,
    SellerTradeState,
    FreeSellerTradeState,
    BuyerTradeState,
    FreeTradeState,
    AuctioneerAuthority,
    AhAuctioneerPda,
    ProgramAsSigner,
    TokenProgram,
    SystemProgram,
    AtaProgram,
    Rent,
}

impl AccountRole {
    /// Program and sysvar accounts have well-known addresses.
    pub fn fixed_address(self) -> Option<Pubkey> {
        match self {
            AccountRole::AuctionHouseProgram => Some(AUCTION_HOUSE_PROGRAM_ID),
            AccountRole::TokenProgram => Some(spl_token::id()),
            AccountRole::SystemProgram => Some(system_program::id()),
            AccountRole::AtaProgram => Some(spl_associated_token_account::id()),
            AccountRole::Rent => Some(sysvar::rent::id()),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountSpec {
    pub role: AccountRole,
    pub writable: bool,
    pub signer: bool,
}

const fn read(role: AccountRole) -> AccountSpec {
    AccountSpec {
        role,
        writable: false,
        signer: false,
    }
}

const fn write(role: AccountRole) -> AccountSpec {
    AccountSpec {
        role,
        writable: true,
        signer: false,
    }
}

const fn sign(role: AccountRole) -> AccountSpec {
    AccountSpec {
        role,
        writable: false,
        signer: true,
    }
}

const fn write_sign(role: AccountRole) -> AccountSpec {
    AccountSpec {
        role,
        writable: true,
        signer: true,
    }
}

use AccountRole::*;

const AUTHORIZE: &[AccountSpec] = &[
    write_sign(Wallet),
    read(AuctionHouse),
    write(AuctioneerAuthority),
    read(SystemProgram),
];

const DELEGATE_AUCTIONEER: &[AccountSpec] = &[
    write(AuctionHouse),
    write_sign(Authority),
    read(AuctioneerAuthority),
    write(AhAuctioneerPda),
    read(SystemProgram),
];

const SELL: &[AccountSpec] = &[
    read(AuctionHouseProgram),
    write(ListingConfig),
    write_sign(Wallet),
    write(TokenAccount),
    read(Metadata),
    read(Authority),
    read(AuctionHouse),
    write(AuctionHouseFeeAccount),
    write(SellerTradeState),
    write(FreeSellerTradeState),
    read(AuctioneerAuthority),
    read(AhAuctioneerPda),
    read(ProgramAsSigner),
    read(TokenProgram),
    read(SystemProgram),
    read(Rent),
];

const CANCEL: &[AccountSpec] = &[
    read(AuctionHouseProgram),
    write(ListingConfig),
    read(Seller),
    write_sign(Wallet),
    write(TokenAccount),
    read(TokenMint),
    read(Authority),
    read(AuctionHouse),
    write(AuctionHouseFeeAccount),
    write(TradeState),
    read(AuctioneerAuthority),
    read(AhAuctioneerPda),
    read(TokenProgram),
];

const BUY: &[AccountSpec] = &[
    read(AuctionHouseProgram),
    write(ListingConfig),
    read(Seller),
    sign(Wallet),
    write(PaymentAccount),
    read(TransferAuthority),
    read(TreasuryMint),
    read(TokenAccount),
    read(Metadata),
    write(EscrowPaymentAccount),
    read(Authority),
    read(AuctionHouse),
    write(AuctionHouseFeeAccount),
    write(BuyerTradeState),
    read(AuctioneerAuthority),
    read(AhAuctioneerPda),
    read(TokenProgram),
    read(SystemProgram),
    read(Rent),
];

const EXECUTE_SALE: &[AccountSpec] = &[
    read(AuctionHouseProgram),
    write(ListingConfig),
    write(Buyer),
    write(Seller),
    write(TokenAccount),
    read(TokenMint),
    read(Metadata),
    read(TreasuryMint),
    write(EscrowPaymentAccount),
    write(SellerPaymentReceiptAccount),
    write(BuyerReceiptTokenAccount),
    read(Authority),
    read(AuctionHouse),
    write(AuctionHouseFeeAccount),
    write(AuctionHouseTreasury),
    write(BuyerTradeState),
    write(SellerTradeState),
    write(FreeTradeState),
    read(AuctioneerAuthority),
    read(AhAuctioneerPda),
    read(TokenProgram),
    read(SystemProgram),
    read(AtaProgram),
    read(ProgramAsSigner),
    read(Rent),
];

const DEPOSIT: &[AccountSpec] = &[
    read(AuctionHouseProgram),
    sign(Wallet),
    write(PaymentAccount),
    read(TransferAuthority),
    write(EscrowPaymentAccount),
    read(TreasuryMint),
    read(Authority),
    read(AuctionHouse),
    write(AuctionHouseFeeAccount),
    read(AuctioneerAuthority),
    read(AhAuctioneerPda),
    read(TokenProgram),
    read(SystemProgram),
    read(Rent),
];

const WITHDRAW: &[AccountSpec] = &[
    read(AuctionHouseProgram),
    read(Wallet),
    write(ReceiptAccount),
    write(EscrowPaymentAccount),
    read(TreasuryMint),
    read(Authority),
    read(AuctionHouse),
    write(AuctionHouseFeeAccount),
    read(AuctioneerAuthority),
    read(AhAuctioneerPda),
    read(TokenProgram),
    read(SystemProgram),
    read(AtaProgram),
    read(Rent),
];

const CLOSE_ESCROW_ACCOUNT: &[AccountSpec] = &[
    sign(Wallet),
    write(EscrowPaymentAccount),
    read(AuctionHouse),
    read(SystemProgram),
];

/// Every instruction this client can build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Authorize,
    DelegateAuctioneer,
    UpdateAuctioneer,
    Sell,
    Cancel,
    Buy,
    ExecuteSale,
    Deposit,
    Withdraw,
    CloseEscrowAccount,
}

impl OperationKind {
    pub const ALL: [OperationKind; 10] = [
        OperationKind::Authorize,
        OperationKind::DelegateAuctioneer,
        OperationKind::UpdateAuctioneer,
        OperationKind::Sell,
        OperationKind::Cancel,
        OperationKind::Buy,
        OperationKind::ExecuteSale,
        OperationKind::Deposit,
        OperationKind::Withdraw,
        OperationKind::CloseEscrowAccount,
    ];

    /// Instruction name as declared by the program.
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Authorize => "authorize",
            OperationKind::DelegateAuctioneer => "delegate_auctioneer",
            OperationKind::UpdateAuctioneer => "update_auctioneer",
            OperationKind::Sell => "sell",
            OperationKind::Cancel => "cancel",
            OperationKind::Buy => "buy",
            OperationKind::ExecuteSale => "execute_sale",
            OperationKind::Deposit => "deposit",
            OperationKind::Withdraw => "withdraw",
            OperationKind::CloseEscrowAccount => "close_escrow_account",
        }
    }

    pub fn program_id(self) -> Pubkey {
        match self {
            OperationKind::DelegateAuctioneer
            | OperationKind::UpdateAuctioneer
            | OperationKind::CloseEscrowAccount => AUCTION_HOUSE_PROGRAM_ID,
            _ => AUCTIONEER_PROGRAM_ID,
        }
    }

    pub fn accounts(self) -> &'static [AccountSpec] {
        match self {
            OperationKind::Authorize => AUTHORIZE,
            OperationKind::DelegateAuctioneer | OperationKind::UpdateAuctioneer => {
                DELEGATE_AUCTIONEER
            }
            OperationKind::Sell => SELL,
            OperationKind::Cancel => CANCEL,
            OperationKind::Buy => BUY,
            OperationKind::ExecuteSale => EXECUTE_SALE,
            OperationKind::Deposit => DEPOSIT,
            OperationKind::Withdraw => WITHDRAW,
            OperationKind::CloseEscrowAccount => CLOSE_ESCROW_ACCOUNT,
        }
    }

    /// First 8 bytes of `sha256("global:<name>")`.
    pub fn discriminator(self) -> [u8; 8] {
        let preimage = format!("global:{}", self.name());
        let mut discriminator = [0u8; 8];
        discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
        discriminator
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn roles_are_unique_per_operation() {
        for kind in OperationKind::ALL {
            let roles: HashSet<_> = kind.accounts().iter().map(|spec| spec.role).collect();
            assert_eq!(roles.len(), kind.accounts().len(), "{} repeats a role", kind);
        }
    }

    #[test]
    fn account_counts_match_program() {
        let counts: Vec<(OperationKind, usize)> = OperationKind::ALL
            .iter()
            .map(|kind| (*kind, kind.accounts().len()))
            .collect();

        assert_eq!(
            counts,
            vec![
                (OperationKind::Authorize, 4),
                (OperationKind::DelegateAuctioneer, 5),
                (OperationKind::UpdateAuctioneer, 5),
                (OperationKind::Sell, 16),
                (OperationKind::Cancel, 13),
                (OperationKind::Buy, 19),
                (OperationKind::ExecuteSale, 25),
                (OperationKind::Deposit, 14),
                (OperationKind::Withdraw, 14),
                (OperationKind::CloseEscrowAccount, 4),
            ]
        );
    }

    #[test]
    fn auctioneer_gated_operations_go_through_the_auctioneer() {
        for kind in [
            OperationKind::Sell,
            OperationKind::Cancel,
            OperationKind::Buy,
            OperationKind::ExecuteSale,
            OperationKind::Deposit,
            OperationKind::Withdraw,
        ] {
            assert_eq!(kind.program_id(), AUCTIONEER_PROGRAM_ID);
            assert_eq!(kind.accounts()[0].role, AuctionHouseProgram);
        }
        assert_eq!(
            OperationKind::CloseEscrowAccount.program_id(),
            AUCTION_HOUSE_PROGRAM_ID
        );
    }

    #[test]
    fn discriminators_are_distinct() {
        let discriminators: HashSet<_> = OperationKind::ALL
            .iter()
            .map(|kind| kind.discriminator())
            .collect();

        assert_eq!(discriminators.len(), OperationKind::ALL.len());
        assert_eq!(
            OperationKind::Sell.discriminator(),
            hash(b"global:sell").to_bytes()[..8]
        );
    }
}
