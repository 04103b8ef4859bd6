use anchor_client::solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::TransactionError};
use thiserror::Error;

use crate::instructions::{AccountRole, OperationKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerivationError {
    #[error("No viable bump seed for a {seeds}-seed address under program {program_id}")]
    NoViableBump { program_id: Pubkey, seeds: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount '{0}': expected a non-negative decimal number")]
    InvalidAmount(String),

    #[error("Amount '{amount}' does not fit in 64 bits at {decimals} decimals")]
    Overflow { amount: String, decimals: u8 },
}

#[derive(Debug, Error)]
pub enum RemoteReadError {
    #[error("Account {0} not found")]
    AccountNotFound(Pubkey),

    #[error("Failed to read account {address}: {message}")]
    Rpc { address: Pubkey, message: String },

    #[error("Account {0} is not a valid spl-token mint")]
    InvalidMint(Pubkey),

    #[error("The spl-token mint {0} is not initialized")]
    UninitializedMint(Pubkey),

    #[error("Account {address} is not an auction house: {reason}")]
    InvalidAuctionHouse { address: Pubkey, reason: String },
}

/// Failure while turning an operation request into concrete accounts.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Derivation(#[from] DerivationError),

    #[error(transparent)]
    RemoteRead(#[from] RemoteReadError),

    #[error(transparent)]
    Amount(#[from] AmountError),
}

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("Missing account '{role:?}' for {operation} instruction")]
    MissingAccount {
        operation: OperationKind,
        role: AccountRole,
    },

    #[error("Failed to serialize {operation} arguments: {message}")]
    Serialization {
        operation: OperationKind,
        message: String,
    },
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The program rejected the transaction. The ledger error is kept verbatim.
    #[error("Transaction rejected by the program: {0:?}")]
    ProgramRejected(TransactionError),

    #[error("Failed to sign transaction: {0}")]
    Signing(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Transaction {0} was not confirmed in time")]
    ConfirmationTimeout(Signature),

    #[error("Transaction failed after {attempts} attempt(s); last error: {last_error}")]
    Exhausted { attempts: u64, last_error: String },

    #[error("Retry loop failed: {0}")]
    Internal(String),
}

impl SubmissionError {
    /// Whether another attempt may succeed without changing the transaction.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SubmissionError::Transport(_) | SubmissionError::ConfirmationTimeout(_)
        )
    }
}
