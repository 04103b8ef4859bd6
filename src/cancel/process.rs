use crate::{common::*, trade_state::TradePrice};

pub struct CancelArgs {
    pub connection: ConnectionArgs,
    pub auction_house: String,
    pub mint: String,
    pub price: Option<UiAmount>,
    pub cancel_price: Option<UiAmount>,
    pub listing: bool,
    pub seller: Option<String>,
    pub token_size: UiAmount,
}

fn cancel_target(args: &CancelArgs) -> Result<CancelTarget> {
    if args.listing {
        return Ok(CancelTarget::Listing);
    }

    match (&args.price, &args.cancel_price) {
        (Some(price), Some(cancel_price)) if price != cancel_price => Err(anyhow!(
            "--price {} and --cancel-price {} name different trade states",
            price,
            cancel_price
        )),
        (_, Some(price)) | (Some(price), None) => Ok(CancelTarget::Price(price.clone())),
        (None, None) => Err(anyhow!("Either --price or --listing is required")),
    }
}

/// A listing trade state is keyed by its seller, so only the seller can name
/// it.
fn check_listing_owner(target: &CancelTarget, seller: &Pubkey, wallet: &Pubkey) -> Result<()> {
    if *target == CancelTarget::Listing && seller != wallet {
        return Err(anyhow!(
            "Only the seller {} can cancel its listing, the keypair wallet is {}",
            seller,
            wallet
        ));
    }

    Ok(())
}

pub fn process_cancel(args: CancelArgs) -> Result<()> {
    let auction_house = parse_pubkey("auction house", &args.auction_house)?;
    let token_mint = parse_pubkey("mint", &args.mint)?;
    let seller = args
        .seller
        .as_deref()
        .map(|seller| parse_pubkey("seller", seller))
        .transpose()?;
    let target = cancel_target(&args)?;

    println!(
        "{} {}Initializing connection",
        style("[1/3]").bold().dim(),
        COMPUTER_EMOJI
    );
    let config = auctioneer_setup(args.connection)?;
    let client = setup_client(&config);
    let wallet = config.keypair.pubkey();
    let seller = seller.unwrap_or(wallet);
    check_listing_owner(&target, &seller, &wallet)?;

    println!(
        "\n{} {}Resolving trade state",
        style("[2/3]").bold().dim(),
        LOOKING_GLASS_EMOJI
    );
    let mut resolver = TradeStateResolver::new(&client);
    let accounts = resolver.resolve_cancel(&CancelRequest {
        wallet,
        seller,
        auction_house,
        token_mint,
        target,
        token_size: args.token_size,
    })?;
    let instruction = instructions::cancel(&accounts)?;

    println!(
        "\n{} {}Cancelling order",
        style("[3/3]").bold().dim(),
        SIGNING_EMOJI
    );
    let signature = send_with_spinner(&config, &client, instruction)?;

    println!("{} {}", style("Signature:").bold(), signature);
    print_with_style("", "trade state", accounts.trade_state.0.to_string());
    print_with_style(
        "",
        "price",
        TradePrice::from_raw(accounts.price).to_string(),
    );

    Ok(())
}
