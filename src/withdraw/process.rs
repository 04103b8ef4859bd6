use crate::{common::*, deposit::print_escrow_balance};

pub struct WithdrawArgs {
    pub connection: ConnectionArgs,
    pub auction_house: String,
    pub amount: UiAmount,
}

pub fn process_withdraw(args: WithdrawArgs) -> Result<()> {
    let auction_house = parse_pubkey("auction house", &args.auction_house)?;

    println!(
        "{} {}Initializing connection",
        style("[1/3]").bold().dim(),
        COMPUTER_EMOJI
    );
    let config = auctioneer_setup(args.connection)?;
    let client = setup_client(&config);
    let wallet = config.keypair.pubkey();

    println!(
        "\n{} {}Resolving escrow",
        style("[2/3]").bold().dim(),
        LOOKING_GLASS_EMOJI
    );
    let mut resolver = TradeStateResolver::new(&client);
    let accounts = resolver.resolve_escrow(&EscrowRequest {
        wallet,
        auction_house,
        amount: args.amount,
    })?;
    let instruction = instructions::withdraw(&accounts)?;

    println!(
        "\n{} {}Withdrawing funds",
        style("[3/3]").bold().dim(),
        MONEY_BAG_EMOJI
    );
    let signature = send_with_spinner(&config, &client, instruction)?;
    println!("{} {}", style("Signature:").bold(), signature);

    print_escrow_balance(&mut resolver, &auction_house, &accounts);

    Ok(())
}
