pub use anchor_client::solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};
pub use anyhow::{anyhow, Result};
pub use console::style;
pub use std::str::FromStr;
pub use tracing::{debug, error, info, warn};

pub use crate::amount::{format_base_units, UiAmount};
pub use crate::config::{parse_pubkey, AuctioneerConfig, ConfigError};
pub use crate::constants::*;
pub use crate::errors::*;
pub use crate::instructions;
pub use crate::resolver::*;
pub use crate::setup::{auctioneer_setup, setup_client, ConnectionArgs};
pub use crate::utils::*;
