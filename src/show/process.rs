use crate::common::*;

pub struct ShowArgs {
    pub connection: ConnectionArgs,
    pub auction_house: String,
    pub wallet: Option<String>,
}

pub fn process_show(args: ShowArgs) -> Result<()> {
    let auction_house = parse_pubkey("auction house", &args.auction_house)?;
    let wallet = args
        .wallet
        .as_deref()
        .map(|wallet| parse_pubkey("wallet", wallet))
        .transpose()?;

    println!(
        "{} {}Looking up auction house",
        style("[1/1]").bold().dim(),
        LOOKING_GLASS_EMOJI
    );

    let pb = spinner_with_style();
    pb.set_message("Connecting...");

    let config = auctioneer_setup(args.connection)?;
    let client = setup_client(&config);
    let wallet = wallet.unwrap_or_else(|| config.keypair.pubkey());

    let mut resolver = TradeStateResolver::new(&client);
    let record = resolver.auction_house(&auction_house)?;
    let decimals = resolver.mint_decimals(&record.treasury_mint)?;
    let auctioneer = AuctioneerAccounts::derive(&auction_house)?;
    let escrow = resolver
        .resolve_close_escrow(&wallet, &auction_house)?
        .escrow_payment_account;
    let balance = resolver.escrow_balance(&record, &escrow.0)?;

    pb.finish_and_clear();

    println!(
        "\n{}{} {}",
        HAMMER_EMOJI,
        style("Auction house:").dim(),
        &auction_house
    );
    println!(" {}", style(":").dim());
    print_with_style("", "authority", record.authority.to_string());
    print_with_style("", "creator", record.creator.to_string());
    print_with_style("", "treasury mint", record.treasury_mint.to_string());
    print_with_style(
        "",
        "fee account",
        record.auction_house_fee_account.to_string(),
    );
    print_with_style("", "treasury", record.auction_house_treasury.to_string());
    print_with_style(
        "",
        "seller fee basis points",
        format!(
            "{}% ({})",
            record.seller_fee_basis_points as f64 / 100.0,
            record.seller_fee_basis_points
        ),
    );
    print_with_style("", "requires sign off", record.requires_sign_off.to_string());
    print_with_style(
        "",
        "can change sale price",
        record.can_change_sale_price.to_string(),
    );
    print_with_style("", "has auctioneer", record.has_auctioneer.to_string());
    if record.has_auctioneer {
        print_with_style("", "auctioneer", record.auctioneer_address.to_string());
        print_with_style(":", "scopes", format!("{:?}", record.scopes));
    }

    println!(
        "\n{}{} {}",
        KEY_EMOJI,
        style("Auctioneer authority:").dim(),
        auctioneer.authority.0
    );
    print_with_style("", "auction house pda", auctioneer.pda.0.to_string());
    let delegated_here = record.auctioneer_address == auctioneer.pda.0
        || record.auctioneer_address == auctioneer.authority.0;
    if record.has_auctioneer && !delegated_here {
        warn!(
            "Delegated auctioneer {} does not match {}",
            record.auctioneer_address, auctioneer.authority.0
        );
        println!(
            "{}",
            style("The delegated auctioneer is not this auctioneer program").yellow()
        );
    }

    println!(
        "\n{}{} {}",
        MONEY_BAG_EMOJI,
        style("Escrow:").dim(),
        escrow.0
    );
    print_with_style("", "wallet", wallet.to_string());
    print_with_style("", "balance", format_base_units(balance, decimals));

    Ok(())
}
