use clap::{AppSettings, Args, Parser, Subcommand};

use crate::{
    amount::UiAmount, instructions::AuthorityScope, setup::ConnectionArgs, submit::RetryTier,
};

#[derive(Parser)]
#[clap(author, version, about)]
#[clap(setting(AppSettings::SubcommandRequiredElseHelp))]
pub struct Cli {
    /// Log level: trace, debug, info, warn, error, off
    #[clap(short, long, global = true)]
    pub log_level: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct ConnectionOpts {
    /// Path to the keypair file, uses Sol config or defaults to "~/.config/solana/id.json"
    #[clap(short, long)]
    pub keypair: Option<String>,

    /// RPC Url, takes precedence over --env
    #[clap(short, long)]
    pub rpc_url: Option<String>,

    /// Solana cluster: mainnet-beta, testnet, devnet or localnet
    #[clap(short, long)]
    pub env: Option<String>,

    /// Submission retry tier: single, standard or max
    #[clap(long, default_value = "max")]
    pub retry_tier: RetryTier,
}

impl From<ConnectionOpts> for ConnectionArgs {
    fn from(opts: ConnectionOpts) -> Self {
        ConnectionArgs {
            keypair: opts.keypair,
            rpc_url: opts.rpc_url,
            env: opts.env,
            retry_tier: opts.retry_tier,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bind the auctioneer program to an auction house
    Authorize {
        #[clap(flatten)]
        connection: ConnectionOpts,

        /// Auction house address, derived from the wallet and treasury mint when omitted
        #[clap(long)]
        auction_house: Option<String>,

        /// Treasury mint used to derive the auction house, defaults to wrapped SOL
        #[clap(short, long)]
        treasury_mint: Option<String>,
    },

    /// Delegate authority scopes of an auction house to the auctioneer
    Delegate {
        #[clap(flatten)]
        connection: ConnectionOpts,

        /// Auction house address
        #[clap(long)]
        auction_house: String,

        /// Replace the scopes of an existing delegation
        #[clap(short, long)]
        update: bool,

        /// Scopes to grant, defaults to all of them
        #[clap(short, long, multiple_values = true)]
        scopes: Vec<AuthorityScope>,
    },

    /// List a token for auction
    Sell {
        #[clap(flatten)]
        connection: ConnectionOpts,

        /// Auction house address
        #[clap(long)]
        auction_house: String,

        /// Mint of the token to sell
        #[clap(short, long)]
        mint: String,

        /// Reserve price in treasury mint units
        #[clap(short, long)]
        price: UiAmount,

        /// Amount of tokens to sell
        #[clap(long, default_value = "1")]
        token_size: UiAmount,

        /// Minimum bid increment in treasury mint units
        #[clap(long, default_value = "1")]
        min_bid_increment: UiAmount,

        /// Auction start date, defaults to now
        #[clap(long)]
        start_time: Option<String>,

        /// Auction end date, defaults to three days after the start
        #[clap(long)]
        end_time: Option<String>,

        /// Seconds before the end in which a bid extends the auction
        #[clap(long, default_value = "1")]
        time_ext_period: u32,

        /// Seconds added to the auction by a late bid
        #[clap(long, default_value = "1")]
        time_ext_delta: u32,

        /// Forbid the highest bidder from cancelling
        #[clap(long)]
        no_high_bid_cancel: bool,
    },

    /// Cancel a listing or a bid
    Cancel {
        #[clap(flatten)]
        connection: ConnectionOpts,

        /// Auction house address
        #[clap(long)]
        auction_house: String,

        /// Mint of the listed token
        #[clap(short, long)]
        mint: String,

        /// Price of the bid to cancel, in treasury mint units
        #[clap(short, long, required_unless_present = "listing")]
        price: Option<UiAmount>,

        /// Price of the trade state to cancel when it differs from --price
        #[clap(long)]
        cancel_price: Option<UiAmount>,

        /// Cancel the open listing instead of a bid
        #[clap(long, conflicts_with = "price")]
        listing: bool,

        /// Seller wallet, defaults to the keypair wallet
        #[clap(long)]
        seller: Option<String>,

        /// Amount of tokens in the order
        #[clap(long, default_value = "1")]
        token_size: UiAmount,
    },

    /// Place a bid on a listed token
    Buy {
        #[clap(flatten)]
        connection: ConnectionOpts,

        /// Auction house address
        #[clap(long)]
        auction_house: String,

        /// Mint of the listed token
        #[clap(short, long)]
        mint: String,

        /// Bid price in treasury mint units
        #[clap(short, long)]
        price: UiAmount,

        /// Seller wallet
        #[clap(short, long)]
        seller: String,

        /// Amount of tokens to buy
        #[clap(long, default_value = "1")]
        token_size: UiAmount,
    },

    /// Settle a finished auction between a buyer and a seller
    ExecuteSale {
        #[clap(flatten)]
        connection: ConnectionOpts,

        /// Auction house address
        #[clap(long)]
        auction_house: String,

        /// Mint of the sold token
        #[clap(short, long)]
        mint: String,

        /// Agreed price in treasury mint units
        #[clap(short, long)]
        price: UiAmount,

        /// Buyer wallet
        #[clap(short, long)]
        buyer: String,

        /// Seller wallet
        #[clap(short, long)]
        seller: String,

        /// Amount of tokens sold
        #[clap(long, default_value = "1")]
        token_size: UiAmount,
    },

    /// Deposit funds into the wallet's escrow account
    Deposit {
        #[clap(flatten)]
        connection: ConnectionOpts,

        /// Auction house address
        #[clap(long)]
        auction_house: String,

        /// Amount in treasury mint units
        #[clap(short, long)]
        amount: UiAmount,
    },

    /// Withdraw funds from the wallet's escrow account
    Withdraw {
        #[clap(flatten)]
        connection: ConnectionOpts,

        /// Auction house address
        #[clap(long)]
        auction_house: String,

        /// Amount in treasury mint units
        #[clap(short, long)]
        amount: UiAmount,
    },

    /// Close the wallet's escrow account
    CloseAccount {
        #[clap(flatten)]
        connection: ConnectionOpts,

        /// Auction house address
        #[clap(long)]
        auction_house: String,
    },

    /// Show an auction house, its auctioneer and the wallet's escrow
    Show {
        #[clap(flatten)]
        connection: ConnectionOpts,

        /// Auction house address
        #[clap(long)]
        auction_house: String,

        /// Wallet whose escrow to show, defaults to the keypair wallet
        #[clap(short, long)]
        wallet: Option<String>,
    },
}
