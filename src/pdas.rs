use anchor_client::solana_sdk::pubkey::Pubkey;
use mpl_token_metadata::pda::find_metadata_account;
use spl_associated_token_account::get_associated_token_address;

use crate::{constants::*, errors::DerivationError, trade_state::TradePrice};

pub type PdaInfo<T> = (Pubkey, T);

pub type DerivationResult = Result<PdaInfo<u8>, DerivationError>;

/// Derive a program address and its canonical bump from an ordered seed list.
pub fn derive_address(program_id: &Pubkey, seeds: &[&[u8]]) -> DerivationResult {
    Pubkey::try_find_program_address(seeds, program_id).ok_or(DerivationError::NoViableBump {
        program_id: *program_id,
        seeds: seeds.len(),
    })
}

/// Return auction house address and bump seed.
pub fn find_auction_house_address(creator: &Pubkey, treasury_mint: &Pubkey) -> DerivationResult {
    derive_address(
        &AUCTION_HOUSE_PROGRAM_ID,
        &[
            AUCTION_HOUSE.as_bytes(),
            creator.as_ref(),
            treasury_mint.as_ref(),
        ],
    )
}

/// Return auction house fee account address and bump seed.
pub fn find_auction_house_fee_account_address(auction_house: &Pubkey) -> DerivationResult {
    derive_address(
        &AUCTION_HOUSE_PROGRAM_ID,
        &[
            AUCTION_HOUSE.as_bytes(),
            auction_house.as_ref(),
            FEE_PAYER.as_bytes(),
        ],
    )
}

/// Return auction house treasury address and bump seed.
pub fn find_auction_house_treasury_address(auction_house: &Pubkey) -> DerivationResult {
    derive_address(
        &AUCTION_HOUSE_PROGRAM_ID,
        &[
            AUCTION_HOUSE.as_bytes(),
            auction_house.as_ref(),
            TREASURY.as_bytes(),
        ],
    )
}

/// Return program as signer address and bump seed.
pub fn find_program_as_signer_address() -> DerivationResult {
    derive_address(
        &AUCTION_HOUSE_PROGRAM_ID,
        &[AUCTION_HOUSE.as_bytes(), SIGNER.as_bytes()],
    )
}

/// Return escrow payment address and bump seed.
///
/// Only the auction house and the depositor take part, so the escrow is
/// shared by every order a wallet places in one auction house.
pub fn find_escrow_payment_address(auction_house: &Pubkey, wallet: &Pubkey) -> DerivationResult {
    derive_address(
        &AUCTION_HOUSE_PROGRAM_ID,
        &[
            AUCTION_HOUSE.as_bytes(),
            auction_house.as_ref(),
            wallet.as_ref(),
        ],
    )
}

/// Seeds identifying one order. The derived address is a pure function of
/// these seven values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeStateSeeds<'a> {
    pub wallet: &'a Pubkey,
    pub auction_house: &'a Pubkey,
    pub token_account: &'a Pubkey,
    pub treasury_mint: &'a Pubkey,
    pub token_mint: &'a Pubkey,
    pub price: TradePrice,
    pub token_size: u64,
}

/// Return trade state address and bump seed.
pub fn find_trade_state_address(seeds: &TradeStateSeeds) -> DerivationResult {
    let price = seeds.price.to_seed();
    let size = seeds.token_size.to_le_bytes();

    derive_address(
        &AUCTION_HOUSE_PROGRAM_ID,
        &[
            AUCTION_HOUSE.as_bytes(),
            seeds.wallet.as_ref(),
            seeds.auction_house.as_ref(),
            seeds.token_account.as_ref(),
            seeds.treasury_mint.as_ref(),
            seeds.token_mint.as_ref(),
            &price,
            &size,
        ],
    )
}

/// Return auctioneer authority address and bump seed. Owned by the
/// Auctioneer program.
pub fn find_auctioneer_authority_address(auction_house: &Pubkey) -> DerivationResult {
    derive_address(
        &AUCTIONEER_PROGRAM_ID,
        &[AUCTIONEER.as_bytes(), auction_house.as_ref()],
    )
}

/// Return the auction house scoped auctioneer PDA and bump seed.
pub fn find_auctioneer_pda(
    auction_house: &Pubkey,
    auctioneer_authority: &Pubkey,
) -> DerivationResult {
    derive_address(
        &AUCTION_HOUSE_PROGRAM_ID,
        &[
            AUCTIONEER.as_bytes(),
            auction_house.as_ref(),
            auctioneer_authority.as_ref(),
        ],
    )
}

/// Return listing config address and bump seed. Unlike trade states the
/// listing config does not depend on price.
pub fn find_listing_config_address(
    seller: &Pubkey,
    auction_house: &Pubkey,
    token_account: &Pubkey,
    treasury_mint: &Pubkey,
    token_mint: &Pubkey,
    token_size: u64,
) -> DerivationResult {
    let size = token_size.to_le_bytes();

    derive_address(
        &AUCTIONEER_PROGRAM_ID,
        &[
            LISTING_CONFIG.as_bytes(),
            seller.as_ref(),
            auction_house.as_ref(),
            token_account.as_ref(),
            treasury_mint.as_ref(),
            token_mint.as_ref(),
            &size,
        ],
    )
}

pub fn find_metadata_pda(mint: &Pubkey) -> Pubkey {
    let (pda, _bump) = find_metadata_account(mint);

    pda
}

pub fn find_token_account(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(wallet, mint)
}

/// Account that pays into, or receives from, the auction house for `wallet`.
/// Native SOL moves through the wallet itself; SPL treasuries use the
/// wallet's associated token account.
pub fn find_payment_account(wallet: &Pubkey, treasury_mint: &Pubkey) -> Pubkey {
    if *treasury_mint == spl_token::native_mint::id() {
        *wallet
    } else {
        find_token_account(wallet, treasury_mint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds<'a>(keys: &'a [Pubkey; 5], price: TradePrice) -> TradeStateSeeds<'a> {
        TradeStateSeeds {
            wallet: &keys[0],
            auction_house: &keys[1],
            token_account: &keys[2],
            treasury_mint: &keys[3],
            token_mint: &keys[4],
            price,
            token_size: 1,
        }
    }

    #[test]
    fn open_trade_state_is_deterministic() {
        let keys = [
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            spl_token::native_mint::id(),
            Pubkey::new_unique(),
        ];

        let first = find_trade_state_address(&seeds(&keys, TradePrice::Open)).unwrap();
        let second = find_trade_state_address(&seeds(&keys, TradePrice::Open)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn sentinel_trade_states_differ() {
        let keys = [
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        ];

        let (open, _) = find_trade_state_address(&seeds(&keys, TradePrice::Open)).unwrap();
        let (settled, _) = find_trade_state_address(&seeds(&keys, TradePrice::Settled)).unwrap();
        let (bid, _) = find_trade_state_address(&seeds(&keys, TradePrice::Bid(42))).unwrap();

        assert_ne!(open, settled);
        assert_ne!(open, bid);
        assert_ne!(settled, bid);
    }

    #[test]
    fn trade_state_matches_raw_seed_layout() {
        let keys = [
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        ];
        let expected = Pubkey::find_program_address(
            &[
                b"auction_house",
                keys[0].as_ref(),
                keys[1].as_ref(),
                keys[2].as_ref(),
                keys[3].as_ref(),
                keys[4].as_ref(),
                &7u64.to_le_bytes(),
                &1u64.to_le_bytes(),
            ],
            &AUCTION_HOUSE_PROGRAM_ID,
        );

        assert_eq!(
            find_trade_state_address(&seeds(&keys, TradePrice::Bid(7))).unwrap(),
            expected
        );
    }

    #[test]
    fn auctioneer_addresses_use_their_own_programs() {
        let auction_house = Pubkey::new_unique();

        let (authority, bump) = find_auctioneer_authority_address(&auction_house).unwrap();
        assert_eq!(
            (authority, bump),
            Pubkey::find_program_address(
                &[b"auctioneer", auction_house.as_ref()],
                &AUCTIONEER_PROGRAM_ID
            )
        );

        let (pda, _) = find_auctioneer_pda(&auction_house, &authority).unwrap();
        assert_eq!(
            pda,
            Pubkey::find_program_address(
                &[b"auctioneer", auction_house.as_ref(), authority.as_ref()],
                &AUCTION_HOUSE_PROGRAM_ID
            )
            .0
        );
    }

    #[test]
    fn listing_config_depends_on_token_size() {
        let seller = Pubkey::new_unique();
        let auction_house = Pubkey::new_unique();
        let token_account = Pubkey::new_unique();
        let treasury_mint = spl_token::native_mint::id();
        let token_mint = Pubkey::new_unique();

        let single = find_listing_config_address(
            &seller,
            &auction_house,
            &token_account,
            &treasury_mint,
            &token_mint,
            1,
        )
        .unwrap();
        let double = find_listing_config_address(
            &seller,
            &auction_house,
            &token_account,
            &treasury_mint,
            &token_mint,
            2,
        )
        .unwrap();

        assert_ne!(single.0, double.0);
    }

    #[test]
    fn native_payments_go_through_the_wallet() {
        let wallet = Pubkey::new_unique();
        let usdc = Pubkey::new_unique();

        assert_eq!(
            find_payment_account(&wallet, &spl_token::native_mint::id()),
            wallet
        );
        assert_eq!(
            find_payment_account(&wallet, &usdc),
            get_associated_token_address(&wallet, &usdc)
        );
    }
}
