use crate::{common::*, ledger::LedgerClient};

pub struct DepositArgs {
    pub connection: ConnectionArgs,
    pub auction_house: String,
    pub amount: UiAmount,
}

pub fn process_deposit(args: DepositArgs) -> Result<()> {
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
    let instruction = instructions::deposit(&accounts)?;

    println!(
        "\n{} {}Depositing funds",
        style("[3/3]").bold().dim(),
        MONEY_BAG_EMOJI
    );
    let signature = send_with_spinner(&config, &client, instruction)?;
    println!("{} {}", style("Signature:").bold(), signature);

    print_escrow_balance(&mut resolver, &auction_house, &accounts);

    Ok(())
}

/// Read back the escrow after a deposit or withdrawal.
///
/// The transaction is already confirmed at this point, so a failed read is
/// reported but never turned into a command failure. Returns the balance when
/// it could be read.
pub fn print_escrow_balance<C: LedgerClient + ?Sized>(
    resolver: &mut TradeStateResolver<C>,
    auction_house: &Pubkey,
    accounts: &EscrowAccounts,
) -> Option<u64> {
    let escrow = accounts.escrow_payment_account.0;
    print_with_style("", "escrow", escrow.to_string());

    let read_balance = |resolver: &mut TradeStateResolver<C>| -> Result<(u64, u8)> {
        let record = resolver.auction_house(auction_house)?;
        let decimals = resolver.mint_decimals(&record.treasury_mint)?;
        let balance = resolver.escrow_balance(&record, &escrow)?;
        Ok((balance, decimals))
    };

    match read_balance(resolver) {
        Ok((balance, decimals)) => {
            print_with_style("", "balance", format_base_units(balance, decimals));
            Some(balance)
        }
        Err(err) => {
            warn!("Could not read escrow balance of {}: {}", escrow, err);
            println!(
                "{}",
                style("The transaction succeeded but the escrow balance could not be read")
                    .yellow()
            );
            None
        }
    }
}
