use std::{fs::File, str::FromStr};

use anchor_client::solana_sdk::pubkey::Pubkey;
use chrono::{DateTime, NaiveDateTime};

use crate::{
    config::{data::*, errors::ConfigError},
    constants::SOLANA_CONFIG_PATH,
};

/// Solana CLI config, if one exists and parses.
pub fn parse_solana_config() -> Option<SolanaConfig> {
    let config_path = shellexpand::tilde(SOLANA_CONFIG_PATH);
    let conf_file = File::open(config_path.as_ref()).ok()?;

    serde_yaml::from_reader(&conf_file).ok()
}

pub fn parse_pubkey(field: &str, value: &str) -> Result<Pubkey, ConfigError> {
    Pubkey::from_str(value).map_err(|_| ConfigError::InvalidPubkey {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Unix timestamp of a user supplied date.
pub fn parse_timestamp(date: &str) -> Result<i64, ConfigError> {
    if let Ok(date) = DateTime::parse_from_rfc2822(date) {
        Ok(date.timestamp())
    } else if let Ok(date) = DateTime::parse_from_rfc3339(date) {
        Ok(date.timestamp())
    } else if let Ok(date) = NaiveDateTime::parse_from_str(date, "%d-%b-%Y %H:%M:%S") {
        Ok(date.timestamp())
    } else if let Ok(timestamp) = date.parse::<i64>() {
        Ok(timestamp)
    } else {
        Err(ConfigError::InvalidDate(date.to_string()))
    }
}
