use crate::{common::*, instructions::AuthorityScope};

pub struct DelegateArgs {
    pub connection: ConnectionArgs,
    pub auction_house: String,
    pub update: bool,
    pub scopes: Vec<AuthorityScope>,
}

pub fn process_delegate(args: DelegateArgs) -> Result<()> {
    let auction_house = parse_pubkey("auction house", &args.auction_house)?;
    let scopes = if args.scopes.is_empty() {
        AuthorityScope::ALL.to_vec()
    } else {
        args.scopes
    };

    println!(
        "{} {}Initializing connection",
        style("[1/2]").bold().dim(),
        COMPUTER_EMOJI
    );
    let config = auctioneer_setup(args.connection)?;
    let client = setup_client(&config);
    let authority = config.keypair.pubkey();

    let resolver = TradeStateResolver::new(&client);
    let accounts = resolver.resolve_delegate(&authority, &auction_house)?;
    let instruction = instructions::delegate_auctioneer(&accounts, scopes.clone(), args.update)?;

    let action = if args.update { "Updating" } else { "Delegating" };
    println!(
        "\n{} {}{} auctioneer scopes",
        style("[2/2]").bold().dim(),
        KEY_EMOJI,
        action
    );
    let signature = send_with_spinner(&config, &client, instruction)?;

    println!("{} {}", style("Signature:").bold(), signature);
    print_with_style("", "auctioneer pda", accounts.auctioneer.pda.0.to_string());
    print_with_style("", "scopes", format!("{:?}", scopes));

    Ok(())
}
