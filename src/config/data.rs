use std::{
    fmt::{self, Display},
    str::FromStr,
};

use anchor_client::solana_sdk::{commitment_config::CommitmentConfig, signature::Keypair};
use serde::{Deserialize, Serialize};

use crate::{
    config::errors::ConfigError,
    constants::*,
    submit::{RetryPolicy, RetryTier},
};

/// Settings shared by every command, resolved once at startup.
pub struct AuctioneerConfig {
    pub keypair: Keypair,
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub retry_tier: RetryTier,
}

impl AuctioneerConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::for_tier(self.retry_tier)
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SolanaConfig {
    pub json_rpc_url: String,
    pub keypair_path: String,
    pub commitment: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cluster {
    MainnetBeta,
    Testnet,
    Devnet,
    Localnet,
}

impl Cluster {
    pub fn url(self) -> &'static str {
        match self {
            Cluster::MainnetBeta => MAINNET_BETA_URL,
            Cluster::Testnet => TESTNET_URL,
            Cluster::Devnet => DEVNET_URL,
            Cluster::Localnet => LOCALNET_URL,
        }
    }
}

impl Default for Cluster {
    fn default() -> Self {
        Cluster::Devnet
    }
}

impl FromStr for Cluster {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            "testnet" => Ok(Cluster::Testnet),
            "devnet" => Ok(Cluster::Devnet),
            "localnet" | "localhost" => Ok(Cluster::Localnet),
            _ => Err(ConfigError::InvalidCluster(s.to_string())),
        }
    }
}

impl Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Testnet => "testnet",
            Cluster::Devnet => "devnet",
            Cluster::Localnet => "localnet",
        };
        f.write_str(name)
    }
}
