use crate::common::*;

pub struct AuthorizeArgs {
    pub connection: ConnectionArgs,
    pub auction_house: Option<String>,
    pub treasury_mint: Option<String>,
}

pub fn process_authorize(args: AuthorizeArgs) -> Result<()> {
    let auction_house = args
        .auction_house
        .as_deref()
        .map(|address| parse_pubkey("auction house", address))
        .transpose()?;
    let treasury_mint = match args.treasury_mint.as_deref() {
        Some(mint) => parse_pubkey("treasury mint", mint)?,
        None => spl_token::native_mint::id(),
    };

    println!(
        "{} {}Initializing connection",
        style("[1/3]").bold().dim(),
        COMPUTER_EMOJI
    );
    let config = auctioneer_setup(args.connection)?;
    let client = setup_client(&config);
    let wallet = config.keypair.pubkey();

    println!(
        "\n{} {}Deriving auctioneer authority",
        style("[2/3]").bold().dim(),
        KEY_EMOJI
    );
    if auction_house.is_none() {
        info!(
            "No auction house given, deriving it from creator {} and treasury mint {}",
            wallet, treasury_mint
        );
    }
    let resolver = TradeStateResolver::new(&client);
    let accounts = resolver.resolve_authorize(&wallet, auction_house, &treasury_mint)?;
    let instruction = instructions::authorize(&accounts)?;

    println!(
        "\n{} {}Authorizing auctioneer",
        style("[3/3]").bold().dim(),
        SIGNING_EMOJI
    );
    let signature = send_with_spinner(&config, &client, instruction)?;

    println!("{} {}", style("Signature:").bold(), signature);
    print_with_style("", "auction house", accounts.auction_house.to_string());
    print_with_style(
        "",
        "auctioneer authority",
        accounts.auctioneer.authority.0.to_string(),
    );

    Ok(())
}
