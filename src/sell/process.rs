use chrono::{Duration, Utc};

use crate::{config::parse_timestamp, common::*, instructions::ListingTerms};

pub struct SellArgs {
    pub connection: ConnectionArgs,
    pub auction_house: String,
    pub mint: String,
    pub price: UiAmount,
    pub token_size: UiAmount,
    pub min_bid_increment: UiAmount,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub time_ext_period: u32,
    pub time_ext_delta: u32,
    pub allow_high_bid_cancel: bool,
}

/// Start and end of the auction. The end defaults to three days after the
/// start.
fn auction_window(start: Option<&str>, end: Option<&str>) -> Result<(i64, i64), ConfigError> {
    let start_time = match start {
        Some(date) => parse_timestamp(date)?,
        None => Utc::now().timestamp(),
    };
    let end_time = match end {
        Some(date) => parse_timestamp(date)?,
        None => start_time + Duration::days(DEFAULT_LISTING_DAYS).num_seconds(),
    };

    if end_time <= start_time {
        return Err(ConfigError::InvalidAuctionWindow {
            start: start_time,
            end: end_time,
        });
    }

    Ok((start_time, end_time))
}

pub fn process_sell(args: SellArgs) -> Result<()> {
    let auction_house = parse_pubkey("auction house", &args.auction_house)?;
    let token_mint = parse_pubkey("mint", &args.mint)?;
    let (start_time, end_time) =
        auction_window(args.start_time.as_deref(), args.end_time.as_deref())?;

    println!(
        "{} {}Initializing connection",
        style("[1/3]").bold().dim(),
        COMPUTER_EMOJI
    );
    let config = auctioneer_setup(args.connection)?;
    let client = setup_client(&config);
    let wallet = config.keypair.pubkey();

    println!(
        "\n{} {}Resolving listing accounts",
        style("[2/3]").bold().dim(),
        LOOKING_GLASS_EMOJI
    );
    let mut resolver = TradeStateResolver::new(&client);
    let accounts = resolver.resolve_sell(&SellRequest {
        wallet,
        auction_house,
        token_mint,
        price: args.price.clone(),
        token_size: args.token_size.clone(),
        min_bid_increment: args.min_bid_increment,
    })?;
    debug!("Listing accounts: {:?}", accounts);

    let terms = ListingTerms {
        start_time,
        end_time,
        time_ext_period: args.time_ext_period,
        time_ext_delta: args.time_ext_delta,
        allow_high_bid_cancel: args.allow_high_bid_cancel,
    };
    let instruction = instructions::sell(&accounts, &terms)?;

    println!(
        "\n{} {}Listing token",
        style("[3/3]").bold().dim(),
        HAMMER_EMOJI
    );
    let signature = send_with_spinner(&config, &client, instruction)?;

    println!("{} {}", style("Signature:").bold(), signature);
    println!(
        "Listed {} of {} for a reserve price of {}",
        args.token_size, token_mint, args.price
    );
    print_with_style(
        "",
        "listing config",
        accounts.listing_config.0.to_string(),
    );
    print_with_style(
        "",
        "seller trade state",
        accounts.seller_trade_state.0.to_string(),
    );
    print_with_style("", "start", start_time.to_string());
    print_with_style("", "end", end_time.to_string());

    Ok(())
}
