use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid cluster: {0}. Valid clusters are: mainnet-beta, testnet, devnet, localnet")]
    InvalidCluster(String),

    #[error("Failed to read keypair file '{path}': {reason}")]
    InvalidKeypair { path: String, reason: String },

    #[error("Invalid {field} address: {value}")]
    InvalidPubkey { field: String, value: String },

    #[error("Invalid date '{0}'. Format must be: RFC2822(Fri, 14 Jul 2022 02:40:00 -0400), RFC3339(2022-02-25T13:00:00Z), 25-Feb-2022 13:00:00 (UTC) or UNIX timestamp")]
    InvalidDate(String),

    #[error("Invalid auction window: end time {end} is not after start time {start}")]
    InvalidAuctionWindow { start: i64, end: i64 },

    #[error("Invalid authority scope: {0}")]
    InvalidScope(String),

    #[error("Invalid retry tier: {0}. Valid tiers are: single, standard, max")]
    InvalidRetryTier(String),
}
