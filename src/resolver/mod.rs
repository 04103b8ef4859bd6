//! Derivation of every account an operation touches.
//!
//! The resolver is the only component that reads the ledger before
//! submission: the auction house record and mint decimals. Both are cached
//! for the lifetime of the resolver.

pub mod accounts;
pub mod auction_house;

use std::collections::HashMap;

use anchor_client::solana_sdk::{account::Account, program_pack::Pack, pubkey::Pubkey};
use spl_token::state::{Account as TokenAccount, Mint};
use tracing::debug;

pub use accounts::*;
pub use auction_house::*;

use crate::{
    amount::{scale, UiAmount},
    errors::{RemoteReadError, ResolveError},
    ledger::LedgerClient,
    pdas::*,
    trade_state::TradePrice,
};

pub struct SellRequest {
    pub wallet: Pubkey,
    pub auction_house: Pubkey,
    pub token_mint: Pubkey,
    pub price: UiAmount,
    pub token_size: UiAmount,
    pub min_bid_increment: UiAmount,
}

/// Which trade state a cancel closes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CancelTarget {
    /// The seller's open listing.
    Listing,
    /// A bid or ask at a concrete price.
    Price(UiAmount),
}

pub struct CancelRequest {
    pub wallet: Pubkey,
    pub seller: Pubkey,
    pub auction_house: Pubkey,
    pub token_mint: Pubkey,
    pub target: CancelTarget,
    pub token_size: UiAmount,
}

pub struct BuyRequest {
    pub wallet: Pubkey,
    pub seller: Pubkey,
    pub auction_house: Pubkey,
    pub token_mint: Pubkey,
    pub price: UiAmount,
    pub token_size: UiAmount,
}

pub struct ExecuteSaleRequest {
    pub buyer: Pubkey,
    pub seller: Pubkey,
    pub auction_house: Pubkey,
    pub token_mint: Pubkey,
    pub price: UiAmount,
    pub token_size: UiAmount,
}

pub struct EscrowRequest {
    pub wallet: Pubkey,
    pub auction_house: Pubkey,
    pub amount: UiAmount,
}

pub struct TradeStateResolver<'a, C: LedgerClient + ?Sized> {
    client: &'a C,
    auction_houses: HashMap<Pubkey, AuctionHouseRecord>,
    mint_decimals: HashMap<Pubkey, u8>,
}

impl<'a, C: LedgerClient + ?Sized> TradeStateResolver<'a, C> {
    pub fn new(client: &'a C) -> Self {
        TradeStateResolver {
            client,
            auction_houses: HashMap::new(),
            mint_decimals: HashMap::new(),
        }
    }

    fn fetch_account(&self, address: &Pubkey) -> Result<Option<Account>, RemoteReadError> {
        self.client
            .get_account(address)
            .map_err(|err| RemoteReadError::Rpc {
                address: *address,
                message: err.to_string(),
            })
    }

    /// Read and decode the auction house record at `address`.
    pub fn auction_house(
        &mut self,
        address: &Pubkey,
    ) -> Result<AuctionHouseRecord, RemoteReadError> {
        if let Some(record) = self.auction_houses.get(address) {
            return Ok(record.clone());
        }

        let account = self
            .fetch_account(address)?
            .ok_or(RemoteReadError::AccountNotFound(*address))?;
        let record = AuctionHouseRecord::from_account(address, &account)?;
        debug!("Loaded auction house {}", address);

        self.auction_houses.insert(*address, record.clone());
        Ok(record)
    }

    /// Number of decimals of `mint`.
    pub fn mint_decimals(&mut self, mint: &Pubkey) -> Result<u8, RemoteReadError> {
        if let Some(decimals) = self.mint_decimals.get(mint) {
            return Ok(*decimals);
        }

        let account = self
            .fetch_account(mint)?
            .ok_or(RemoteReadError::AccountNotFound(*mint))?;
        if account.data.len() != Mint::LEN {
            return Err(RemoteReadError::InvalidMint(*mint));
        }
        let token_mint =
            Mint::unpack_unchecked(&account.data).map_err(|_| RemoteReadError::InvalidMint(*mint))?;
        if !token_mint.is_initialized {
            return Err(RemoteReadError::UninitializedMint(*mint));
        }

        self.mint_decimals.insert(*mint, token_mint.decimals);
        Ok(token_mint.decimals)
    }

    /// Scale `amount` against `mint`.
    pub fn scale(&mut self, amount: &UiAmount, mint: &Pubkey) -> Result<u64, ResolveError> {
        let decimals = self.mint_decimals(mint)?;
        Ok(scale(amount, decimals)?)
    }

    /// Escrow balance in treasury base units. A missing SPL escrow holds
    /// nothing.
    pub fn escrow_balance(
        &mut self,
        record: &AuctionHouseRecord,
        escrow: &Pubkey,
    ) -> Result<u64, RemoteReadError> {
        if record.treasury_mint == spl_token::native_mint::id() {
            return self
                .client
                .get_balance(escrow)
                .map_err(|err| RemoteReadError::Rpc {
                    address: *escrow,
                    message: err.to_string(),
                });
        }

        match self.fetch_account(escrow)? {
            Some(account) => TokenAccount::unpack(&account.data)
                .map(|token_account| token_account.amount)
                .map_err(|err| RemoteReadError::Rpc {
                    address: *escrow,
                    message: err.to_string(),
                }),
            None => Ok(0),
        }
    }

    /// Accounts for binding the auctioneer to an auction house.
    ///
    /// Without an explicit auction house the caller is assumed to be its
    /// creator. That holds only when the auction house owner authorizes its
    /// own auctioneer; no other operation derives the auction house this way.
    pub fn resolve_authorize(
        &self,
        wallet: &Pubkey,
        auction_house: Option<Pubkey>,
        treasury_mint: &Pubkey,
    ) -> Result<AuthorizeAccounts, ResolveError> {
        let auction_house = match auction_house {
            Some(auction_house) => auction_house,
            None => find_auction_house_address(wallet, treasury_mint)?.0,
        };

        Ok(AuthorizeAccounts {
            wallet: *wallet,
            auction_house,
            auctioneer: AuctioneerAccounts::derive(&auction_house)?,
        })
    }

    pub fn resolve_delegate(
        &self,
        authority: &Pubkey,
        auction_house: &Pubkey,
    ) -> Result<DelegateAccounts, ResolveError> {
        Ok(DelegateAccounts {
            auction_house: *auction_house,
            authority: *authority,
            auctioneer: AuctioneerAccounts::derive(auction_house)?,
        })
    }

    pub fn resolve_sell(&mut self, request: &SellRequest) -> Result<SellAccounts, ResolveError> {
        let record = self.auction_house(&request.auction_house)?;
        let marketplace = MarketplaceAccounts::new(request.auction_house, &record);

        let token_size = self.scale(&request.token_size, &request.token_mint)?;
        let reserve_price = self.scale(&request.price, &marketplace.treasury_mint)?;
        let min_bid_increment = self.scale(&request.min_bid_increment, &marketplace.treasury_mint)?;

        let token_account = find_token_account(&request.wallet, &request.token_mint);
        let trade_state = |price| TradeStateSeeds {
            wallet: &request.wallet,
            auction_house: &request.auction_house,
            token_account: &token_account,
            treasury_mint: &marketplace.treasury_mint,
            token_mint: &request.token_mint,
            price,
            token_size,
        };

        Ok(SellAccounts {
            wallet: request.wallet,
            marketplace,
            token_mint: request.token_mint,
            token_account,
            metadata: find_metadata_pda(&request.token_mint),
            listing_config: find_listing_config_address(
                &request.wallet,
                &request.auction_house,
                &token_account,
                &marketplace.treasury_mint,
                &request.token_mint,
                token_size,
            )?,
            seller_trade_state: find_trade_state_address(&trade_state(TradePrice::Open))?,
            free_seller_trade_state: find_trade_state_address(&trade_state(TradePrice::Settled))?,
            program_as_signer: find_program_as_signer_address()?,
            auctioneer: AuctioneerAccounts::derive(&request.auction_house)?,
            token_size,
            reserve_price,
            min_bid_increment,
        })
    }

    pub fn resolve_cancel(
        &mut self,
        request: &CancelRequest,
    ) -> Result<CancelAccounts, ResolveError> {
        let record = self.auction_house(&request.auction_house)?;
        let marketplace = MarketplaceAccounts::new(request.auction_house, &record);

        let token_size = self.scale(&request.token_size, &request.token_mint)?;
        let price = match &request.target {
            CancelTarget::Listing => TradePrice::Open,
            CancelTarget::Price(amount) => {
                TradePrice::from_raw(self.scale(amount, &marketplace.treasury_mint)?)
            }
        };

        let token_account = find_token_account(&request.seller, &request.token_mint);

        Ok(CancelAccounts {
            wallet: request.wallet,
            seller: request.seller,
            marketplace,
            token_mint: request.token_mint,
            token_account,
            listing_config: find_listing_config_address(
                &request.seller,
                &request.auction_house,
                &token_account,
                &marketplace.treasury_mint,
                &request.token_mint,
                token_size,
            )?,
            trade_state: find_trade_state_address(&TradeStateSeeds {
                wallet: &request.wallet,
                auction_house: &request.auction_house,
                token_account: &token_account,
                treasury_mint: &marketplace.treasury_mint,
                token_mint: &request.token_mint,
                price,
                token_size,
            })?,
            auctioneer: AuctioneerAccounts::derive(&request.auction_house)?,
            price: price.raw(),
            token_size,
        })
    }

    /// Bids are placed against state owned by the seller: the listing config
    /// and the seller's token account.
    pub fn resolve_buy(&mut self, request: &BuyRequest) -> Result<BuyAccounts, ResolveError> {
        let record = self.auction_house(&request.auction_house)?;
        let marketplace = MarketplaceAccounts::new(request.auction_house, &record);

        let price = self.scale(&request.price, &marketplace.treasury_mint)?;
        let token_size = self.scale(&request.token_size, &request.token_mint)?;
        let token_account = find_token_account(&request.seller, &request.token_mint);

        Ok(BuyAccounts {
            wallet: request.wallet,
            seller: request.seller,
            marketplace,
            token_mint: request.token_mint,
            token_account,
            metadata: find_metadata_pda(&request.token_mint),
            payment_account: find_payment_account(&request.wallet, &marketplace.treasury_mint),
            listing_config: find_listing_config_address(
                &request.seller,
                &request.auction_house,
                &token_account,
                &marketplace.treasury_mint,
                &request.token_mint,
                token_size,
            )?,
            escrow_payment_account: find_escrow_payment_address(
                &request.auction_house,
                &request.wallet,
            )?,
            buyer_trade_state: find_trade_state_address(&TradeStateSeeds {
                wallet: &request.wallet,
                auction_house: &request.auction_house,
                token_account: &token_account,
                treasury_mint: &marketplace.treasury_mint,
                token_mint: &request.token_mint,
                price: TradePrice::from_raw(price),
                token_size,
            })?,
            auctioneer: AuctioneerAccounts::derive(&request.auction_house)?,
            price,
            token_size,
        })
    }

    /// The seller's open and free trade states are both keyed by the seller
    /// wallet, in the same seed order as every other trade state.
    pub fn resolve_execute_sale(
        &mut self,
        request: &ExecuteSaleRequest,
    ) -> Result<ExecuteSaleAccounts, ResolveError> {
        let record = self.auction_house(&request.auction_house)?;
        let marketplace = MarketplaceAccounts::new(request.auction_house, &record);

        let price = self.scale(&request.price, &marketplace.treasury_mint)?;
        let token_size = self.scale(&request.token_size, &request.token_mint)?;
        let token_account = find_token_account(&request.seller, &request.token_mint);

        let trade_state = |wallet, price| TradeStateSeeds {
            wallet,
            auction_house: &request.auction_house,
            token_account: &token_account,
            treasury_mint: &marketplace.treasury_mint,
            token_mint: &request.token_mint,
            price,
            token_size,
        };

        Ok(ExecuteSaleAccounts {
            buyer: request.buyer,
            seller: request.seller,
            marketplace,
            token_mint: request.token_mint,
            token_account,
            metadata: find_metadata_pda(&request.token_mint),
            seller_payment_receipt_account: find_payment_account(
                &request.seller,
                &marketplace.treasury_mint,
            ),
            buyer_receipt_token_account: find_token_account(&request.buyer, &request.token_mint),
            listing_config: find_listing_config_address(
                &request.seller,
                &request.auction_house,
                &token_account,
                &marketplace.treasury_mint,
                &request.token_mint,
                token_size,
            )?,
            escrow_payment_account: find_escrow_payment_address(
                &request.auction_house,
                &request.buyer,
            )?,
            buyer_trade_state: find_trade_state_address(&trade_state(
                &request.buyer,
                TradePrice::from_raw(price),
            ))?,
            seller_trade_state: find_trade_state_address(&trade_state(
                &request.seller,
                TradePrice::Open,
            ))?,
            free_trade_state: find_trade_state_address(&trade_state(
                &request.seller,
                TradePrice::Settled,
            ))?,
            program_as_signer: find_program_as_signer_address()?,
            auctioneer: AuctioneerAccounts::derive(&request.auction_house)?,
            price,
            token_size,
        })
    }

    /// Shared by deposit and withdraw.
    pub fn resolve_escrow(&mut self, request: &EscrowRequest) -> Result<EscrowAccounts, ResolveError> {
        let record = self.auction_house(&request.auction_house)?;
        let marketplace = MarketplaceAccounts::new(request.auction_house, &record);

        Ok(EscrowAccounts {
            wallet: request.wallet,
            marketplace,
            payment_account: find_payment_account(&request.wallet, &marketplace.treasury_mint),
            escrow_payment_account: find_escrow_payment_address(
                &request.auction_house,
                &request.wallet,
            )?,
            auctioneer: AuctioneerAccounts::derive(&request.auction_house)?,
            amount: self.scale(&request.amount, &marketplace.treasury_mint)?,
        })
    }

    /// Needs neither the auction house record nor any price or mint.
    pub fn resolve_close_escrow(
        &self,
        wallet: &Pubkey,
        auction_house: &Pubkey,
    ) -> Result<CloseEscrowAccounts, ResolveError> {
        Ok(CloseEscrowAccounts {
            wallet: *wallet,
            auction_house: *auction_house,
            escrow_payment_account: find_escrow_payment_address(auction_house, wallet)?,
        })
    }
}
