use std::{
    fs::OpenOptions,
    path::PathBuf,
    str::FromStr,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use anyhow::{anyhow, Result};
use auctioneer_cli::{
    authorize::{process_authorize, AuthorizeArgs},
    buy::{process_buy, BuyArgs},
    cancel::{process_cancel, CancelArgs},
    cli::{Cli, Commands},
    close_account::{process_close_account, CloseAccountArgs},
    constants::{COMPLETE_EMOJI, ERROR_EMOJI},
    delegate::{process_delegate, DelegateArgs},
    deposit::{process_deposit, DepositArgs},
    execute_sale::{process_execute_sale, ExecuteSaleArgs},
    sell::{process_sell, SellArgs},
    show::{process_show, ShowArgs},
    withdraw::{process_withdraw, WithdrawArgs},
};
use clap::Parser;
use console::style;
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{self, filter::LevelFilter, prelude::*, EnvFilter};

fn setup_logging(level: Option<EnvFilter>) -> Result<()> {
    // Log in the current directory for now.
    let log_path = PathBuf::from("auctioneer.log");

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(true)
        .open(&log_path)?;

    // User-provided level first, then RUST_LOG, then "trace".
    let env_filter = if let Some(filter) = level {
        filter
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"))
    };

    let formatting_layer = BunyanFormattingLayer::new("auctioneer".into(), file);
    let level_filter = LevelFilter::from_str(&env_filter.to_string())?;

    let subscriber = tracing_subscriber::registry()
        .with(formatting_layer.with_filter(level_filter))
        .with(JsonStorageLayer);

    set_global_default(subscriber)
        .map_err(|err| anyhow!("Failed to set global default subscriber: {}", err))?;

    Ok(())
}

#[tokio::main(worker_threads = 4)]
async fn main() {
    match run().await {
        Ok(()) => {
            println!(
                "\n{}{}",
                COMPLETE_EMOJI,
                style("Command successful.").green().bold().dim()
            );
        }
        Err(err) => {
            println!(
                "\n{}{} {}",
                ERROR_EMOJI,
                style("Error running command (re-run needed):").red(),
                err,
            );
            // finished the program with an error code to the OS
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<()> {
    solana_logger::setup_with_default("solana=off");

    let cli = Cli::parse();

    if let Some(user_filter) = cli.log_level {
        let filter = EnvFilter::from_str(&user_filter).map_err(|_| {
            anyhow!(
                "Invalid log level: {:?}.\n Valid levels are: trace, debug, info, warn, error.",
                user_filter
            )
        })?;
        setup_logging(Some(filter))?;
    } else {
        setup_logging(None)?;
    }

    tracing::info!("Auctioneer client started.");

    let interrupted = Arc::new(AtomicBool::new(true));
    let ctrl_handler = interrupted.clone();

    ctrlc::set_handler(move || {
        if ctrl_handler.load(Ordering::SeqCst) {
            println!(
                "\n\n{}{} Operation aborted.",
                ERROR_EMOJI,
                style("Error running command (re-run needed):").red(),
            );
            std::process::exit(1);
        }
        ctrl_handler.store(true, Ordering::SeqCst);
    })?;

    match cli.command {
        Commands::Authorize {
            connection,
            auction_house,
            treasury_mint,
        } => process_authorize(AuthorizeArgs {
            connection: connection.into(),
            auction_house,
            treasury_mint,
        })?,
        Commands::Delegate {
            connection,
            auction_house,
            update,
            scopes,
        } => process_delegate(DelegateArgs {
            connection: connection.into(),
            auction_house,
            update,
            scopes,
        })?,
        Commands::Sell {
            connection,
            auction_house,
            mint,
            price,
            token_size,
            min_bid_increment,
            start_time,
            end_time,
            time_ext_period,
            time_ext_delta,
            no_high_bid_cancel,
        } => process_sell(SellArgs {
            connection: connection.into(),
            auction_house,
            mint,
            price,
            token_size,
            min_bid_increment,
            start_time,
            end_time,
            time_ext_period,
            time_ext_delta,
            allow_high_bid_cancel: !no_high_bid_cancel,
        })?,
        Commands::Cancel {
            connection,
            auction_house,
            mint,
            price,
            cancel_price,
            listing,
            seller,
            token_size,
        } => process_cancel(CancelArgs {
            connection: connection.into(),
            auction_house,
            mint,
            price,
            cancel_price,
            listing,
            seller,
            token_size,
        })?,
        Commands::Buy {
            connection,
            auction_house,
            mint,
            price,
            seller,
            token_size,
        } => process_buy(BuyArgs {
            connection: connection.into(),
            auction_house,
            mint,
            price,
            seller,
            token_size,
        })?,
        Commands::ExecuteSale {
            connection,
            auction_house,
            mint,
            price,
            buyer,
            seller,
            token_size,
        } => process_execute_sale(ExecuteSaleArgs {
            connection: connection.into(),
            auction_house,
            mint,
            price,
            buyer,
            seller,
            token_size,
        })?,
        Commands::Deposit {
            connection,
            auction_house,
            amount,
        } => process_deposit(DepositArgs {
            connection: connection.into(),
            auction_house,
            amount,
        })?,
        Commands::Withdraw {
            connection,
            auction_house,
            amount,
        } => process_withdraw(WithdrawArgs {
            connection: connection.into(),
            auction_house,
            amount,
        })?,
        Commands::CloseAccount {
            connection,
            auction_house,
        } => process_close_account(CloseAccountArgs {
            connection: connection.into(),
            auction_house,
        })?,
        Commands::Show {
            connection,
            auction_house,
            wallet,
        } => process_show(ShowArgs {
            connection: connection.into(),
            auction_house,
            wallet,
        })?,
    }

    Ok(())
}
