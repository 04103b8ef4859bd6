use anchor_client::solana_sdk::{instruction::Instruction, signature::Signature, signer::Signer};
use anyhow::Result;
use console::style;
pub use indicatif::{ProgressBar, ProgressStyle};
use solana_client::rpc_client::RpcClient;

use crate::{config::AuctioneerConfig, submit::TransactionSubmitter};

pub fn spinner_with_style() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(120);
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "▹▹▹▹▹",
                "▸▹▹▹▹",
                "▹▸▹▹▹",
                "▹▹▸▹▹",
                "▹▹▹▸▹",
                "▹▹▹▹▸",
                "▪▪▪▪▪",
            ])
            .template("{spinner:.dim} {msg}"),
    );
    pb
}

pub fn print_with_style(indent: &str, key: &str, value: String) {
    println!(
        " {} {}",
        style(format!("{}:.. {}:", indent, key)).dim(),
        value
    );
}

/// Submit one instruction signed by the configured keypair, with a spinner
/// while the transaction is in flight.
pub fn send_with_spinner(
    config: &AuctioneerConfig,
    client: &RpcClient,
    instruction: Instruction,
) -> Result<Signature> {
    let pb = spinner_with_style();
    pb.set_message(format!(
        "Sending transaction (retry tier: {})...",
        config.retry_tier
    ));

    let submitter = TransactionSubmitter::new(client, config.retry_policy());
    let result = submitter.submit(
        &[instruction],
        &config.keypair.pubkey(),
        &[&config.keypair],
    );

    pb.finish_and_clear();
    Ok(result?)
}
