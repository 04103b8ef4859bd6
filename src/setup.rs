use anchor_client::solana_sdk::{
    commitment_config::CommitmentConfig,
    signature::{read_keypair_file, Keypair},
};
use solana_client::rpc_client::RpcClient;
use tracing::info;

use crate::{
    config::{data::*, errors::ConfigError, parser::parse_solana_config},
    constants::{DEFAULT_KEYPATH, DEFAULT_RPC_TIMEOUT},
    submit::RetryTier,
};

/// Connection options every command accepts.
#[derive(Clone, Debug, Default)]
pub struct ConnectionArgs {
    pub keypair: Option<String>,
    pub rpc_url: Option<String>,
    pub env: Option<String>,
    pub retry_tier: RetryTier,
}

pub fn setup_client(config: &AuctioneerConfig) -> RpcClient {
    RpcClient::new_with_timeout_and_commitment(
        config.rpc_url.clone(),
        DEFAULT_RPC_TIMEOUT,
        config.commitment,
    )
}

fn read_keypair(path: &str) -> Result<Keypair, ConfigError> {
    let path = shellexpand::tilde(path).to_string();

    read_keypair_file(&path).map_err(|err| ConfigError::InvalidKeypair {
        path,
        reason: err.to_string(),
    })
}

/// Resolve keypair and RPC endpoint from the command line, then the Solana
/// CLI config, then the defaults. Fails before any network access.
pub fn auctioneer_setup(args: ConnectionArgs) -> Result<AuctioneerConfig, ConfigError> {
    let sol_config_option = parse_solana_config();

    let rpc_url = match (args.rpc_url, args.env) {
        (Some(rpc_url), _) => rpc_url,
        (None, Some(env)) if !env.is_empty() => env.parse::<Cluster>()?.url().to_string(),
        (None, _) => match sol_config_option {
            Some(ref sol_config) => sol_config.json_rpc_url.clone(),
            None => Cluster::default().url().to_string(),
        },
    };

    let keypair = match args.keypair {
        Some(keypair_path) => read_keypair(&keypair_path)?,
        None => match sol_config_option {
            Some(ref sol_config) => read_keypair(&sol_config.keypair_path)?,
            None => read_keypair(DEFAULT_KEYPATH)?,
        },
    };

    info!("Using RPC endpoint {}", rpc_url);

    Ok(AuctioneerConfig {
        keypair,
        rpc_url,
        commitment: CommitmentConfig::confirmed(),
        retry_tier: args.retry_tier,
    })
}
