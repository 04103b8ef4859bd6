use std::time::Duration;

use anchor_lang::solana_program::{pubkey, pubkey::Pubkey};
use console::Emoji;

pub const AUCTION_HOUSE_PROGRAM_ID: Pubkey = pubkey!("hausS13jsjafwWwGqZTUQRmWyvyxn9EQpqMwV1PBBmk");
pub const AUCTIONEER_PROGRAM_ID: Pubkey = pubkey!("neer8g6yJq2mQM6KbnViEDAD4gr3gRZyMMf4F2p3MEh");

// seed tags
pub const AUCTION_HOUSE: &str = "auction_house";
pub const AUCTIONEER: &str = "auctioneer";
pub const FEE_PAYER: &str = "fee_payer";
pub const TREASURY: &str = "treasury";
pub const SIGNER: &str = "signer";
pub const LISTING_CONFIG: &str = "listing_config";

/// Number of delegable authority scopes known to the Auction House program.
pub const MAX_NUM_SCOPES: usize = 7;

pub const DEFAULT_KEYPATH: &str = "~/.config/solana/id.json";
pub const SOLANA_CONFIG_PATH: &str = "~/.config/solana/cli/config.yml";
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

pub const MAINNET_BETA_URL: &str = "https://api.metaplex.solana.com/";
pub const TESTNET_URL: &str = "https://api.testnet.solana.com";
pub const DEVNET_URL: &str = "https://api.devnet.solana.com";
pub const LOCALNET_URL: &str = "http://127.0.0.1:8899";

/// Default auction length when no end date is given.
pub const DEFAULT_LISTING_DAYS: i64 = 3;

pub const CONFIRMATION_POLLS: usize = 30;
pub const CONFIRMATION_POLL_INTERVAL: Duration = Duration::from_millis(500);
pub const RETRY_BASE_DELAY_MS: u64 = 250;
pub const RETRY_BACKOFF_FACTOR: f64 = 2.0;

pub const COMPUTER_EMOJI: Emoji<'static, 'static> = Emoji("🖥  ", "");
pub const LOOKING_GLASS_EMOJI: Emoji<'static, 'static> = Emoji("🔍 ", "");
pub const HAMMER_EMOJI: Emoji<'static, 'static> = Emoji("🔨 ", "");
pub const SIGNING_EMOJI: Emoji<'static, 'static> = Emoji("✍️  ", "");
pub const MONEY_BAG_EMOJI: Emoji<'static, 'static> = Emoji("💰 ", "");
pub const KEY_EMOJI: Emoji<'static, 'static> = Emoji("🔑 ", "");
pub const COMPLETE_EMOJI: Emoji<'static, 'static> = Emoji("✅ ", "");
pub const ERROR_EMOJI: Emoji<'static, 'static> = Emoji("🛑 ", "");
