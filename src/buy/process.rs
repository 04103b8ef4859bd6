use crate::common::*;

pub struct BuyArgs {
    pub connection: ConnectionArgs,
    pub auction_house: String,
    pub mint: String,
    pub price: UiAmount,
    pub seller: String,
    pub token_size: UiAmount,
}

pub fn process_buy(args: BuyArgs) -> Result<()> {
    let auction_house = parse_pubkey("auction house", &args.auction_house)?;
    let token_mint = parse_pubkey("mint", &args.mint)?;
    let seller = parse_pubkey("seller", &args.seller)?;

    println!(
        "{} {}Initializing connection",
        style("[1/3]").bold().dim(),
        COMPUTER_EMOJI
    );
    let config = auctioneer_setup(args.connection)?;
    let client = setup_client(&config);
    let wallet = config.keypair.pubkey();

    println!(
        "\n{} {}Resolving bid accounts",
        style("[2/3]").bold().dim(),
        LOOKING_GLASS_EMOJI
    );
    let mut resolver = TradeStateResolver::new(&client);
    let accounts = resolver.resolve_buy(&BuyRequest {
        wallet,
        seller,
        auction_house,
        token_mint,
        price: args.price.clone(),
        token_size: args.token_size,
    })?;
    let instruction = instructions::buy(&accounts)?;

    println!(
        "\n{} {}Placing bid",
        style("[3/3]").bold().dim(),
        MONEY_BAG_EMOJI
    );
    let signature = send_with_spinner(&config, &client, instruction)?;

    println!("{} {}", style("Signature:").bold(), signature);
    println!("Bid {} on {} listed by {}", args.price, token_mint, seller);
    print_with_style(
        "",
        "buyer trade state",
        accounts.buyer_trade_state.0.to_string(),
    );
    print_with_style(
        "",
        "escrow",
        accounts.escrow_payment_account.0.to_string(),
    );

    Ok(())
}
