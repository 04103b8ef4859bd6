//! Instruction assembly for the Auction House and Auctioneer programs.
//!
//! Account order and flags for every instruction live in [`layout`], so the
//! program ABI can be checked without touching the network. Builders in
//! [`operations`] pair resolved accounts with the Borsh argument structs from
//! [`data`].

pub mod data;
pub mod layout;
pub mod operations;

use std::collections::BTreeMap;

use anchor_client::solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use anchor_lang::AnchorSerialize;

pub use data::*;
pub use layout::*;
pub use operations::*;

use crate::errors::AssemblyError;

/// Addresses keyed by the role they play in an instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountSet(BTreeMap<AccountRole, Pubkey>);

impl AccountSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, role: AccountRole, address: Pubkey) -> Self {
        self.0.insert(role, address);
        self
    }

    pub fn insert(&mut self, role: AccountRole, address: Pubkey) {
        self.0.insert(role, address);
    }

    /// Address for `role`, falling back to the well-known program addresses.
    pub fn get(&self, role: AccountRole) -> Option<Pubkey> {
        self.0.get(&role).copied().or_else(|| role.fixed_address())
    }
}

/// Build the instruction for `kind` from the resolved accounts and arguments.
pub fn assemble<A: AnchorSerialize>(
    kind: OperationKind,
    accounts: &AccountSet,
    args: &A,
) -> Result<Instruction, AssemblyError> {
    let metas = kind
        .accounts()
        .iter()
        .map(|spec| {
            let address = accounts
                .get(spec.role)
                .ok_or(AssemblyError::MissingAccount {
                    operation: kind,
                    role: spec.role,
                })?;

            Ok(if spec.writable {
                AccountMeta::new(address, spec.signer)
            } else {
                AccountMeta::new_readonly(address, spec.signer)
            })
        })
        .collect::<Result<Vec<_>, AssemblyError>>()?;

    let mut data = kind.discriminator().to_vec();
    args.serialize(&mut data)
        .map_err(|err| AssemblyError::Serialization {
            operation: kind,
            message: err.to_string(),
        })?;

    Ok(Instruction {
        program_id: kind.program_id(),
        accounts: metas,
        data,
    })
}
