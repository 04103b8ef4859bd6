use std::{fmt, str::FromStr, thread, time::Duration};

use anchor_client::solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::{Transaction, TransactionError},
};
use retry::{delay::Exponential, retry_with_index, OperationResult};
use solana_client::client_error::ClientError;
use tracing::{debug, info, warn};

use crate::{config::ConfigError, constants::*, errors::SubmissionError, ledger::LedgerClient};

/// How persistently a submission is retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryTier {
    Single,
    Standard,
    Max,
}

impl RetryTier {
    pub fn attempts(self) -> usize {
        match self {
            RetryTier::Single => 1,
            RetryTier::Standard => 3,
            RetryTier::Max => 6,
        }
    }
}

impl Default for RetryTier {
    fn default() -> Self {
        RetryTier::Max
    }
}

impl FromStr for RetryTier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(RetryTier::Single),
            "standard" => Ok(RetryTier::Standard),
            "max" => Ok(RetryTier::Max),
            _ => Err(ConfigError::InvalidRetryTier(s.to_string())),
        }
    }
}

impl fmt::Display for RetryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RetryTier::Single => "single",
            RetryTier::Standard => "standard",
            RetryTier::Max => "max",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Total number of send attempts, including the first one.
    pub attempts: usize,
    pub base_delay_ms: u64,
    pub backoff_factor: f64,
    /// Status polls per attempt before the attempt counts as timed out.
    pub confirmation_polls: usize,
    pub poll_interval: Duration,
}

impl RetryPolicy {
    pub fn for_tier(tier: RetryTier) -> Self {
        RetryPolicy {
            attempts: tier.attempts(),
            base_delay_ms: RETRY_BASE_DELAY_MS,
            backoff_factor: RETRY_BACKOFF_FACTOR,
            confirmation_polls: CONFIRMATION_POLLS,
            poll_interval: CONFIRMATION_POLL_INTERVAL,
        }
    }

    fn delays(&self) -> impl Iterator<Item = Duration> {
        Exponential::from_millis_with_factor(self.base_delay_ms, self.backoff_factor)
            .take(self.attempts.saturating_sub(1))
    }
}

impl From<RetryTier> for RetryPolicy {
    fn from(tier: RetryTier) -> Self {
        RetryPolicy::for_tier(tier)
    }
}

/// Signs, sends and confirms transactions, one attempt at a time.
pub struct TransactionSubmitter<'a, C: LedgerClient + ?Sized> {
    client: &'a C,
    policy: RetryPolicy,
}

impl<'a, C: LedgerClient + ?Sized> TransactionSubmitter<'a, C> {
    pub fn new(client: &'a C, policy: RetryPolicy) -> Self {
        TransactionSubmitter { client, policy }
    }

    /// Submit `instructions` paid by `payer` and return the confirmed
    /// signature.
    ///
    /// Transport failures and confirmation timeouts are retried until the
    /// policy's attempt budget is spent. Program errors are returned at once.
    pub fn submit(
        &self,
        instructions: &[Instruction],
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> Result<Signature, SubmissionError> {
        let mut blockhash: Option<Hash> = None;

        let result = retry_with_index(self.policy.delays(), |attempt| {
            match self.attempt(instructions, payer, signers, &mut blockhash) {
                Ok(signature) => OperationResult::Ok(signature),
                Err(err) if err.is_transient() => {
                    warn!("Attempt {} failed: {}", attempt, err);
                    OperationResult::Retry(err)
                }
                Err(err) => OperationResult::Err(err),
            }
        });

        match result {
            Ok(signature) => {
                info!("Transaction {} confirmed", signature);
                Ok(signature)
            }
            Err(retry::Error::Operation { error, tries, .. }) => {
                if error.is_transient() {
                    Err(SubmissionError::Exhausted {
                        attempts: tries,
                        last_error: error.to_string(),
                    })
                } else {
                    Err(error)
                }
            }
            Err(retry::Error::Internal(message)) => Err(SubmissionError::Internal(message)),
        }
    }

    fn attempt(
        &self,
        instructions: &[Instruction],
        payer: &Pubkey,
        signers: &[&Keypair],
        blockhash: &mut Option<Hash>,
    ) -> Result<Signature, SubmissionError> {
        let recent_blockhash = self.current_blockhash(blockhash)?;

        let signers: Vec<&Keypair> = signers.to_vec();
        let mut transaction = Transaction::new_with_payer(instructions, Some(payer));
        transaction
            .try_sign(&signers, recent_blockhash)
            .map_err(|err| SubmissionError::Signing(err.to_string()))?;

        let signature = self
            .client
            .send_transaction(&transaction)
            .map_err(|err| classify_send_error(err, blockhash))?;
        debug!("Sent transaction {}", signature);

        self.confirm(&signature)
    }

    /// Reuse the cached blockhash while the cluster still accepts it;
    /// otherwise fetch a new one, which forces a fresh signature.
    fn current_blockhash(&self, cached: &mut Option<Hash>) -> Result<Hash, SubmissionError> {
        if let Some(hash) = *cached {
            if self.client.is_blockhash_valid(&hash).map_err(transport)? {
                return Ok(hash);
            }
            debug!("Blockhash {} expired", hash);
        }

        let fresh = self.client.get_latest_blockhash().map_err(transport)?;
        *cached = Some(fresh);
        Ok(fresh)
    }

    fn confirm(&self, signature: &Signature) -> Result<Signature, SubmissionError> {
        for _ in 0..self.policy.confirmation_polls {
            match self.client.get_signature_status(signature) {
                Ok(Some(Ok(()))) => return Ok(*signature),
                Ok(Some(Err(err))) => return Err(SubmissionError::ProgramRejected(err)),
                Ok(None) => {}
                Err(err) => debug!("Status poll for {} failed: {}", signature, err),
            }
            thread::sleep(self.policy.poll_interval);
        }

        Err(SubmissionError::ConfirmationTimeout(*signature))
    }
}

fn transport(err: ClientError) -> SubmissionError {
    SubmissionError::Transport(err.to_string())
}

fn classify_send_error(err: ClientError, blockhash: &mut Option<Hash>) -> SubmissionError {
    match err.get_transaction_error() {
        Some(TransactionError::BlockhashNotFound) => {
            *blockhash = None;
            SubmissionError::Transport(TransactionError::BlockhashNotFound.to_string())
        }
        Some(err) => SubmissionError::ProgramRejected(err),
        None => transport(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_map_to_attempt_budgets() {
        assert_eq!("single".parse::<RetryTier>().unwrap().attempts(), 1);
        assert_eq!("standard".parse::<RetryTier>().unwrap().attempts(), 3);
        assert_eq!(RetryTier::default().attempts(), 6);
        assert!("forever".parse::<RetryTier>().is_err());
    }

    #[test]
    fn delays_leave_room_for_every_attempt() {
        let policy = RetryPolicy::for_tier(RetryTier::Standard);
        let delays: Vec<Duration> = policy.delays().collect();

        assert_eq!(delays.len(), 2);
        assert!(delays[0] < delays[1]);
        assert_eq!(RetryPolicy::for_tier(RetryTier::Single).delays().count(), 0);
    }
}
