use std::str::FromStr;

use anchor_lang::{AnchorDeserialize, AnchorSerialize};

use crate::config::ConfigError;

/// Operations an auction house can delegate to an auctioneer. The variant
/// order is the program's wire encoding.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthorityScope {
    Deposit,
    Buy,
    PublicBuy,
    ExecuteSale,
    Sell,
    Cancel,
    Withdraw,
}

impl AuthorityScope {
    pub const ALL: [AuthorityScope; 7] = [
        AuthorityScope::Deposit,
        AuthorityScope::Buy,
        AuthorityScope::PublicBuy,
        AuthorityScope::ExecuteSale,
        AuthorityScope::Sell,
        AuthorityScope::Cancel,
        AuthorityScope::Withdraw,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for AuthorityScope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "deposit" | "0" => Ok(AuthorityScope::Deposit),
            "buy" | "1" => Ok(AuthorityScope::Buy),
            "public-buy" | "2" => Ok(AuthorityScope::PublicBuy),
            "execute-sale" | "3" => Ok(AuthorityScope::ExecuteSale),
            "sell" | "4" => Ok(AuthorityScope::Sell),
            "cancel" | "5" => Ok(AuthorityScope::Cancel),
            "withdraw" | "6" => Ok(AuthorityScope::Withdraw),
            _ => Err(ConfigError::InvalidScope(s.to_string())),
        }
    }
}

#[derive(AnchorSerialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizeData {}

#[derive(AnchorSerialize, Clone, Debug, PartialEq, Eq)]
pub struct DelegateAuctioneerData {
    pub scopes: Vec<AuthorityScope>,
}

#[derive(AnchorSerialize, Clone, Debug, PartialEq, Eq)]
pub struct SellData {
    pub trade_state_bump: u8,
    pub free_trade_state_bump: u8,
    pub program_as_signer_bump: u8,
    pub auctioneer_authority_bump: u8,
    pub token_size: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub reserve_price: Option<u64>,
    pub min_bid_increment: Option<u64>,
    pub time_ext_period: Option<u32>,
    pub time_ext_delta: Option<u32>,
    pub allow_high_bid_cancel: Option<bool>,
}

#[derive(AnchorSerialize, Clone, Debug, PartialEq, Eq)]
pub struct CancelData {
    pub auctioneer_authority_bump: u8,
    pub buyer_price: u64,
    pub token_size: u64,
}

#[derive(AnchorSerialize, Clone, Debug, PartialEq, Eq)]
pub struct BuyData {
    pub trade_state_bump: u8,
    pub escrow_payment_bump: u8,
    pub auctioneer_authority_bump: u8,
    pub buyer_price: u64,
    pub token_size: u64,
}

#[derive(AnchorSerialize, Clone, Debug, PartialEq, Eq)]
pub struct ExecuteSaleData {
    pub escrow_payment_bump: u8,
    pub free_trade_state_bump: u8,
    pub program_as_signer_bump: u8,
    pub auctioneer_authority_bump: u8,
    pub buyer_price: u64,
    pub token_size: u64,
}

/// Shared by deposit and withdraw.
#[derive(AnchorSerialize, Clone, Debug, PartialEq, Eq)]
pub struct EscrowTransferData {
    pub escrow_payment_bump: u8,
    pub auctioneer_authority_bump: u8,
    pub amount: u64,
}

#[derive(AnchorSerialize, Clone, Debug, PartialEq, Eq)]
pub struct CloseEscrowAccountData {
    pub escrow_payment_bump: u8,
}
