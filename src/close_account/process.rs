use crate::common::*;

pub struct CloseAccountArgs {
    pub connection: ConnectionArgs,
    pub auction_house: String,
}

pub fn process_close_account(args: CloseAccountArgs) -> Result<()> {
    let auction_house = parse_pubkey("auction house", &args.auction_house)?;

    println!(
        "{} {}Initializing connection",
        style("[1/2]").bold().dim(),
        COMPUTER_EMOJI
    );
    let config = auctioneer_setup(args.connection)?;
    let client = setup_client(&config);
    let wallet = config.keypair.pubkey();

    let resolver = TradeStateResolver::new(&client);
    let accounts = resolver.resolve_close_escrow(&wallet, &auction_house)?;
    let instruction = instructions::close_escrow_account(&accounts)?;

    println!(
        "\n{} {}Closing escrow account",
        style("[2/2]").bold().dim(),
        SIGNING_EMOJI
    );
    let signature = send_with_spinner(&config, &client, instruction)?;

    println!("{} {}", style("Signature:").bold(), signature);
    print_with_style(
        "",
        "closed escrow",
        accounts.escrow_payment_account.0.to_string(),
    );

    Ok(())
}
