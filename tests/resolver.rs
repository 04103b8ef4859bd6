mod utils;

use anchor_client::solana_sdk::pubkey::Pubkey;
use auctioneer_cli::{
    constants::{AUCTIONEER_PROGRAM_ID, AUCTION_HOUSE_PROGRAM_ID},
    errors::{RemoteReadError, ResolveError},
    instructions::{self, ListingTerms, OperationKind},
    pdas::*,
    resolver::*,
    trade_state::TradePrice,
};
use utils::*;

fn amount(value: &str) -> auctioneer_cli::amount::UiAmount {
    value.parse().unwrap()
}

fn sell_request(market: &Market, seller: Pubkey, price: &str) -> SellRequest {
    SellRequest {
        wallet: seller,
        auction_house: market.auction_house,
        token_mint: market.token_mint,
        price: amount(price),
        token_size: amount("1"),
        min_bid_increment: amount("0.1"),
    }
}

#[test]
fn sell_derives_seller_trade_states() {
    let market = native_market();
    let seller = Pubkey::new_unique();
    let mut resolver = TradeStateResolver::new(&market.ledger);

    let accounts = resolver
        .resolve_sell(&sell_request(&market, seller, "2.5"))
        .unwrap();

    let token_account = find_token_account(&seller, &market.token_mint);
    let seeds = |price| TradeStateSeeds {
        wallet: &seller,
        auction_house: &market.auction_house,
        token_account: &token_account,
        treasury_mint: &market.record.treasury_mint,
        token_mint: &market.token_mint,
        price,
        token_size: 1,
    };

    assert_eq!(accounts.token_account, token_account);
    assert_eq!(
        accounts.seller_trade_state,
        find_trade_state_address(&seeds(TradePrice::Open)).unwrap()
    );
    assert_eq!(
        accounts.free_seller_trade_state,
        find_trade_state_address(&seeds(TradePrice::Settled)).unwrap()
    );
    assert_ne!(accounts.seller_trade_state, accounts.free_seller_trade_state);
    assert_eq!(accounts.reserve_price, 2_500_000_000);
    assert_eq!(accounts.min_bid_increment, 100_000_000);
    assert_eq!(accounts.token_size, 1);
    assert_eq!(accounts.marketplace.authority, market.record.authority);
}

#[test]
fn buy_uses_state_owned_by_the_seller() {
    let market = native_market();
    let seller = Pubkey::new_unique();
    let buyer = Pubkey::new_unique();
    let mut resolver = TradeStateResolver::new(&market.ledger);

    let sell = resolver
        .resolve_sell(&sell_request(&market, seller, "1"))
        .unwrap();
    let buy = resolver
        .resolve_buy(&BuyRequest {
            wallet: buyer,
            seller,
            auction_house: market.auction_house,
            token_mint: market.token_mint,
            price: amount("1.5"),
            token_size: amount("1"),
        })
        .unwrap();

    assert_eq!(buy.listing_config, sell.listing_config);
    assert_eq!(buy.token_account, sell.token_account);
    assert_eq!(buy.price, 1_500_000_000);
    assert_eq!(
        buy.escrow_payment_account,
        find_escrow_payment_address(&market.auction_house, &buyer).unwrap()
    );
    // wrapped SOL escrows are funded straight from the wallet
    assert_eq!(buy.payment_account, buyer);
    assert_eq!(
        buy.buyer_trade_state,
        find_trade_state_address(&TradeStateSeeds {
            wallet: &buyer,
            auction_house: &market.auction_house,
            token_account: &sell.token_account,
            treasury_mint: &market.record.treasury_mint,
            token_mint: &market.token_mint,
            price: TradePrice::Bid(1_500_000_000),
            token_size: 1,
        })
        .unwrap()
    );
}

#[test]
fn execute_sale_matches_listing_and_bid() {
    let market = native_market();
    let seller = Pubkey::new_unique();
    let buyer = Pubkey::new_unique();
    let mut resolver = TradeStateResolver::new(&market.ledger);

    let sell = resolver
        .resolve_sell(&sell_request(&market, seller, "1"))
        .unwrap();
    let buy = resolver
        .resolve_buy(&BuyRequest {
            wallet: buyer,
            seller,
            auction_house: market.auction_house,
            token_mint: market.token_mint,
            price: amount("3"),
            token_size: amount("1"),
        })
        .unwrap();
    let sale = resolver
        .resolve_execute_sale(&ExecuteSaleRequest {
            buyer,
            seller,
            auction_house: market.auction_house,
            token_mint: market.token_mint,
            price: amount("3"),
            token_size: amount("1"),
        })
        .unwrap();

    assert_eq!(sale.seller_trade_state, sell.seller_trade_state);
    assert_eq!(sale.free_trade_state, sell.free_seller_trade_state);
    assert_eq!(sale.buyer_trade_state, buy.buyer_trade_state);
    assert_eq!(sale.escrow_payment_account, buy.escrow_payment_account);
    assert_eq!(sale.listing_config, sell.listing_config);
    assert_eq!(
        sale.buyer_receipt_token_account,
        find_token_account(&buyer, &market.token_mint)
    );
    assert_eq!(sale.seller_payment_receipt_account, seller);
}

#[test]
fn cancel_targets_listing_or_bid() {
    let market = native_market();
    let seller = Pubkey::new_unique();
    let buyer = Pubkey::new_unique();
    let mut resolver = TradeStateResolver::new(&market.ledger);

    let sell = resolver
        .resolve_sell(&sell_request(&market, seller, "1"))
        .unwrap();
    let listing = resolver
        .resolve_cancel(&CancelRequest {
            wallet: seller,
            seller,
            auction_house: market.auction_house,
            token_mint: market.token_mint,
            target: CancelTarget::Listing,
            token_size: amount("1"),
        })
        .unwrap();

    assert_eq!(listing.trade_state, sell.seller_trade_state);
    assert_eq!(listing.price, u64::MAX);

    let buy = resolver
        .resolve_buy(&BuyRequest {
            wallet: buyer,
            seller,
            auction_house: market.auction_house,
            token_mint: market.token_mint,
            price: amount("2"),
            token_size: amount("1"),
        })
        .unwrap();
    let bid = resolver
        .resolve_cancel(&CancelRequest {
            wallet: buyer,
            seller,
            auction_house: market.auction_house,
            token_mint: market.token_mint,
            target: CancelTarget::Price(amount("2")),
            token_size: amount("1"),
        })
        .unwrap();

    assert_eq!(bid.trade_state, buy.buyer_trade_state);
    assert_eq!(bid.price, 2_000_000_000);
    assert_eq!(bid.listing_config, sell.listing_config);
}

#[test]
fn spl_treasury_pays_from_token_accounts() {
    let treasury_mint = Pubkey::new_unique();
    let market = market_with_treasury(treasury_mint, 6);
    let wallet = Pubkey::new_unique();
    let mut resolver = TradeStateResolver::new(&market.ledger);

    let escrow = resolver
        .resolve_escrow(&EscrowRequest {
            wallet,
            auction_house: market.auction_house,
            amount: amount("12.25"),
        })
        .unwrap();

    assert_eq!(escrow.amount, 12_250_000);
    assert_eq!(
        escrow.payment_account,
        find_token_account(&wallet, &treasury_mint)
    );
    assert_eq!(
        resolver
            .escrow_balance(&market.record, &escrow.escrow_payment_account.0)
            .unwrap(),
        0
    );
}

#[test]
fn close_escrow_reads_nothing() {
    let ledger = FakeLedger::new();
    let resolver = TradeStateResolver::new(&ledger);
    let wallet = Pubkey::new_unique();
    let auction_house = Pubkey::new_unique();

    let accounts = resolver
        .resolve_close_escrow(&wallet, &auction_house)
        .unwrap();

    assert_eq!(
        accounts.escrow_payment_account,
        find_escrow_payment_address(&auction_house, &wallet).unwrap()
    );
    assert!(ledger.account_reads.borrow().is_empty());
}

#[test]
fn missing_auction_house_is_reported() {
    let ledger = FakeLedger::new();
    let mut resolver = TradeStateResolver::new(&ledger);
    let auction_house = Pubkey::new_unique();

    let result = resolver.resolve_escrow(&EscrowRequest {
        wallet: Pubkey::new_unique(),
        auction_house,
        amount: amount("1"),
    });

    assert!(matches!(
        result,
        Err(ResolveError::RemoteRead(RemoteReadError::AccountNotFound(address)))
            if address == auction_house
    ));
}

#[test]
fn remote_reads_are_cached() {
    let market = native_market();
    let seller = Pubkey::new_unique();
    let mut resolver = TradeStateResolver::new(&market.ledger);

    for price in ["1", "2", "3"] {
        resolver
            .resolve_sell(&sell_request(&market, seller, price))
            .unwrap();
    }

    assert_eq!(market.ledger.reads_of(&market.auction_house), 1);
    assert_eq!(market.ledger.reads_of(&market.record.treasury_mint), 1);
    assert_eq!(market.ledger.reads_of(&market.token_mint), 1);
}

#[test]
fn authorize_derives_auction_house_from_creator() {
    let ledger = FakeLedger::new();
    let resolver = TradeStateResolver::new(&ledger);
    let creator = Pubkey::new_unique();
    let treasury_mint = spl_token::native_mint::id();

    let accounts = resolver
        .resolve_authorize(&creator, None, &treasury_mint)
        .unwrap();
    let (auction_house, _) = find_auction_house_address(&creator, &treasury_mint).unwrap();

    assert_eq!(accounts.auction_house, auction_house);
    assert_eq!(
        accounts.auctioneer.authority,
        find_auctioneer_authority_address(&auction_house).unwrap()
    );
    assert!(ledger.account_reads.borrow().is_empty());
}

#[test]
fn sell_instruction_follows_account_table() {
    let market = native_market();
    let seller = Pubkey::new_unique();
    let mut resolver = TradeStateResolver::new(&market.ledger);
    let accounts = resolver
        .resolve_sell(&sell_request(&market, seller, "2.5"))
        .unwrap();
    let terms = ListingTerms {
        start_time: 1_645_794_000,
        end_time: 1_646_053_200,
        time_ext_period: 1,
        time_ext_delta: 1,
        allow_high_bid_cancel: true,
    };

    let instruction = instructions::sell(&accounts, &terms).unwrap();
    let again = instructions::sell(&accounts, &terms).unwrap();

    assert_eq!(instruction, again);
    assert_eq!(instruction.program_id, AUCTIONEER_PROGRAM_ID);
    assert_eq!(
        instruction.accounts.len(),
        OperationKind::Sell.accounts().len()
    );
    assert_eq!(instruction.accounts[0].pubkey, AUCTION_HOUSE_PROGRAM_ID);
    assert_eq!(instruction.accounts[1].pubkey, accounts.listing_config.0);
    assert_eq!(instruction.accounts[2].pubkey, seller);
    assert!(instruction.accounts[2].is_signer);
    assert_eq!(instruction.accounts[8].pubkey, accounts.seller_trade_state.0);
    assert_eq!(
        instruction.accounts[9].pubkey,
        accounts.free_seller_trade_state.0
    );
    assert_eq!(
        &instruction.data[..8],
        &OperationKind::Sell.discriminator()[..]
    );
    // trade state, free trade state, program as signer, auctioneer authority bumps
    assert_eq!(
        &instruction.data[8..12],
        &[
            accounts.seller_trade_state.1,
            accounts.free_seller_trade_state.1,
            accounts.program_as_signer.1,
            accounts.auctioneer.authority.1,
        ]
    );
}

#[test]
fn execute_sale_instruction_follows_account_table() {
    let market = native_market();
    let seller = Pubkey::new_unique();
    let buyer = Pubkey::new_unique();
    let mut resolver = TradeStateResolver::new(&market.ledger);
    let accounts = resolver
        .resolve_execute_sale(&ExecuteSaleRequest {
            buyer,
            seller,
            auction_house: market.auction_house,
            token_mint: market.token_mint,
            price: amount("3"),
            token_size: amount("1"),
        })
        .unwrap();

    let instruction = instructions::execute_sale(&accounts).unwrap();

    assert_eq!(instruction.accounts.len(), 25);
    assert_eq!(instruction.accounts[2].pubkey, buyer);
    assert_eq!(instruction.accounts[3].pubkey, seller);
    assert_eq!(instruction.accounts[15].pubkey, accounts.buyer_trade_state.0);
    assert_eq!(instruction.accounts[16].pubkey, accounts.seller_trade_state.0);
    assert_eq!(instruction.accounts[17].pubkey, accounts.free_trade_state.0);
    assert!(instruction.accounts.iter().all(|meta| !meta.is_signer));
}
