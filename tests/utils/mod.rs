//! In-memory ledger and account builders shared by the integration tests.

#![allow(unused)]

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, VecDeque},
};

use anchor_client::solana_sdk::{
    account::Account,
    hash::Hash,
    program_option::COption,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{self, Transaction, TransactionError},
};
use auctioneer_cli::{
    constants::{AUCTION_HOUSE_PROGRAM_ID, MAX_NUM_SCOPES},
    ledger::LedgerClient,
    pdas::*,
    resolver::AuctionHouseRecord,
    submit::RetryPolicy,
};
use solana_client::client_error::{ClientError, ClientErrorKind, Result as ClientResult};
use spl_token::state::Mint;

/// Outcome of a single `send_transaction` call.
#[derive(Clone, Debug)]
pub enum SendOutcome {
    Accept,
    Transport,
    BlockhashNotFound,
    Reject(TransactionError),
}

pub struct FakeLedger {
    pub accounts: HashMap<Pubkey, Account>,
    pub balances: HashMap<Pubkey, u64>,
    pub account_reads: RefCell<HashMap<Pubkey, usize>>,

    pub send_script: RefCell<VecDeque<SendOutcome>>,
    pub default_send: SendOutcome,
    pub sent: RefCell<Vec<Transaction>>,

    /// Status reported for every confirmation poll.
    pub status: Option<transaction::Result<()>>,
    pub blockhash_valid: Cell<bool>,
    pub blockhash_fetches: Cell<usize>,
}

impl Default for FakeLedger {
    fn default() -> Self {
        FakeLedger {
            accounts: HashMap::new(),
            balances: HashMap::new(),
            account_reads: RefCell::new(HashMap::new()),
            send_script: RefCell::new(VecDeque::new()),
            default_send: SendOutcome::Accept,
            sent: RefCell::new(Vec::new()),
            status: Some(Ok(())),
            blockhash_valid: Cell::new(true),
            blockhash_fetches: Cell::new(0),
        }
    }
}

impl FakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sends(self, outcomes: Vec<SendOutcome>) -> Self {
        *self.send_script.borrow_mut() = outcomes.into();
        self
    }

    pub fn reads_of(&self, address: &Pubkey) -> usize {
        self.account_reads
            .borrow()
            .get(address)
            .copied()
            .unwrap_or_default()
    }

    pub fn send_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl LedgerClient for FakeLedger {
    fn get_account(&self, address: &Pubkey) -> ClientResult<Option<Account>> {
        *self
            .account_reads
            .borrow_mut()
            .entry(*address)
            .or_default() += 1;
        Ok(self.accounts.get(address).cloned())
    }

    fn get_balance(&self, address: &Pubkey) -> ClientResult<u64> {
        Ok(self.balances.get(address).copied().unwrap_or_default())
    }

    fn get_latest_blockhash(&self) -> ClientResult<Hash> {
        self.blockhash_fetches.set(self.blockhash_fetches.get() + 1);
        Ok(Hash::new_unique())
    }

    fn is_blockhash_valid(&self, _blockhash: &Hash) -> ClientResult<bool> {
        Ok(self.blockhash_valid.get())
    }

    fn send_transaction(&self, transaction: &Transaction) -> ClientResult<Signature> {
        self.sent.borrow_mut().push(transaction.clone());

        let outcome = self
            .send_script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.default_send.clone());

        match outcome {
            SendOutcome::Accept => Ok(transaction.signatures[0]),
            SendOutcome::Transport => Err(ClientError::from(ClientErrorKind::Custom(
                "connection reset".to_string(),
            ))),
            SendOutcome::BlockhashNotFound => {
                Err(ClientError::from(TransactionError::BlockhashNotFound))
            }
            SendOutcome::Reject(err) => Err(ClientError::from(err)),
        }
    }

    fn get_signature_status(
        &self,
        _signature: &Signature,
    ) -> ClientResult<Option<transaction::Result<()>>> {
        Ok(self.status.clone())
    }
}

/// Retry policy without any waiting.
pub fn instant_policy(attempts: usize) -> RetryPolicy {
    RetryPolicy {
        attempts,
        base_delay_ms: 0,
        backoff_factor: 2.0,
        confirmation_polls: 2,
        poll_interval: std::time::Duration::ZERO,
    }
}

pub fn mint_account(decimals: u8) -> Account {
    let mint = Mint {
        mint_authority: COption::None,
        supply: 0,
        decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut data = vec![0u8; Mint::LEN];
    Mint::pack(mint, &mut data).unwrap();

    Account {
        lamports: 1_461_600,
        data,
        owner: spl_token::id(),
        executable: false,
        rent_epoch: 0,
    }
}

/// Auction house record as the program would create it for `creator`.
pub fn auction_house_record(creator: &Pubkey, treasury_mint: &Pubkey) -> AuctionHouseRecord {
    let (auction_house, bump) = find_auction_house_address(creator, treasury_mint).unwrap();
    let (fee_account, fee_payer_bump) =
        find_auction_house_fee_account_address(&auction_house).unwrap();
    let (treasury, treasury_bump) = find_auction_house_treasury_address(&auction_house).unwrap();

    AuctionHouseRecord {
        auction_house_fee_account: fee_account,
        auction_house_treasury: treasury,
        treasury_withdrawal_destination: *creator,
        fee_withdrawal_destination: *creator,
        treasury_mint: *treasury_mint,
        authority: *creator,
        creator: *creator,
        bump,
        treasury_bump,
        fee_payer_bump,
        seller_fee_basis_points: 200,
        requires_sign_off: false,
        can_change_sale_price: false,
        escrow_payment_bump: 0,
        has_auctioneer: true,
        auctioneer_address: Pubkey::new_unique(),
        scopes: [true; MAX_NUM_SCOPES],
    }
}

pub fn auction_house_account(record: &AuctionHouseRecord) -> Account {
    let mut data = record.to_account_data();
    data.resize(data.len() + 128, 0);

    Account {
        lamports: 1,
        data,
        owner: AUCTION_HOUSE_PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    }
}

/// A marketplace paying in wrapped SOL, plus an NFT mint.
pub struct Market {
    pub ledger: FakeLedger,
    pub auction_house: Pubkey,
    pub record: AuctionHouseRecord,
    pub token_mint: Pubkey,
}

pub fn native_market() -> Market {
    market_with_treasury(spl_token::native_mint::id(), 9)
}

pub fn market_with_treasury(treasury_mint: Pubkey, treasury_decimals: u8) -> Market {
    let creator = Pubkey::new_unique();
    let token_mint = Pubkey::new_unique();
    let record = auction_house_record(&creator, &treasury_mint);
    let (auction_house, _) = find_auction_house_address(&creator, &treasury_mint).unwrap();

    let mut ledger = FakeLedger::new();
    ledger
        .accounts
        .insert(auction_house, auction_house_account(&record));
    ledger
        .accounts
        .insert(treasury_mint, mint_account(treasury_decimals));
    ledger.accounts.insert(token_mint, mint_account(0));

    Market {
        ledger,
        auction_house,
        record,
        token_mint,
    }
}
