pub mod amount;
pub mod authorize;
pub mod buy;
pub mod cancel;
pub mod cli;
pub mod close_account;
pub mod common;
pub mod config;
pub mod constants;
pub mod delegate;
pub mod deposit;
pub mod errors;
pub mod execute_sale;
pub mod instructions;
pub mod ledger;
pub mod pdas;
pub mod resolver;
pub mod sell;
pub mod setup;
pub mod show;
pub mod submit;
pub mod trade_state;
pub mod utils;
pub mod withdraw;
