use crate::common::*;

pub struct ExecuteSaleArgs {
    pub connection: ConnectionArgs,
    pub auction_house: String,
    pub mint: String,
    pub price: UiAmount,
    pub buyer: String,
    pub seller: String,
    pub token_size: UiAmount,
}

pub fn process_execute_sale(args: ExecuteSaleArgs) -> Result<()> {
    let auction_house = parse_pubkey("auction house", &args.auction_house)?;
    let token_mint = parse_pubkey("mint", &args.mint)?;
    let buyer = parse_pubkey("buyer", &args.buyer)?;
    let seller = parse_pubkey("seller", &args.seller)?;

    println!(
        "{} {}Initializing connection",
        style("[1/3]").bold().dim(),
        COMPUTER_EMOJI
    );
    let config = auctioneer_setup(args.connection)?;
    let client = setup_client(&config);

    println!(
        "\n{} {}Resolving sale accounts",
        style("[2/3]").bold().dim(),
        LOOKING_GLASS_EMOJI
    );
    let mut resolver = TradeStateResolver::new(&client);
    let accounts = resolver.resolve_execute_sale(&ExecuteSaleRequest {
        buyer,
        seller,
        auction_house,
        token_mint,
        price: args.price.clone(),
        token_size: args.token_size,
    })?;
    debug!("Sale accounts: {:?}", accounts);
    let instruction = instructions::execute_sale(&accounts)?;

    println!(
        "\n{} {}Executing sale",
        style("[3/3]").bold().dim(),
        HAMMER_EMOJI
    );
    let signature = send_with_spinner(&config, &client, instruction)?;

    println!("{} {}", style("Signature:").bold(), signature);
    println!(
        "Sold {} from {} to {} for {}",
        token_mint, seller, buyer, args.price
    );

    Ok(())
}
