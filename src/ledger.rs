use anchor_client::solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{self, Transaction},
};
use solana_client::{client_error::Result as ClientResult, rpc_client::RpcClient};

/// Ledger access needed to resolve and submit operations.
///
/// Implemented for the RPC client; tests provide in-memory ledgers.
pub trait LedgerClient {
    /// `None` when the account does not exist.
    fn get_account(&self, address: &Pubkey) -> ClientResult<Option<Account>>;

    fn get_balance(&self, address: &Pubkey) -> ClientResult<u64>;

    fn get_latest_blockhash(&self) -> ClientResult<Hash>;

    fn is_blockhash_valid(&self, blockhash: &Hash) -> ClientResult<bool>;

    fn send_transaction(&self, transaction: &Transaction) -> ClientResult<Signature>;

    /// `None` while the signature is unknown to the cluster.
    fn get_signature_status(
        &self,
        signature: &Signature,
    ) -> ClientResult<Option<transaction::Result<()>>>;
}

impl LedgerClient for RpcClient {
    fn get_account(&self, address: &Pubkey) -> ClientResult<Option<Account>> {
        Ok(RpcClient::get_account_with_commitment(self, address, self.commitment())?.value)
    }

    fn get_balance(&self, address: &Pubkey) -> ClientResult<u64> {
        RpcClient::get_balance(self, address)
    }

    fn get_latest_blockhash(&self) -> ClientResult<Hash> {
        RpcClient::get_latest_blockhash(self)
    }

    fn is_blockhash_valid(&self, blockhash: &Hash) -> ClientResult<bool> {
        RpcClient::is_blockhash_valid(self, blockhash, CommitmentConfig::processed())
    }

    fn send_transaction(&self, transaction: &Transaction) -> ClientResult<Signature> {
        RpcClient::send_transaction(self, transaction)
    }

    fn get_signature_status(
        &self,
        signature: &Signature,
    ) -> ClientResult<Option<transaction::Result<()>>> {
        RpcClient::get_signature_status_with_commitment(self, signature, self.commitment())
    }
}
