use anchor_client::solana_sdk::{account::Account, pubkey::Pubkey};
use anchor_lang::{solana_program::hash::hash, AnchorDeserialize, AnchorSerialize};

use crate::{
    constants::{AUCTION_HOUSE_PROGRAM_ID, MAX_NUM_SCOPES},
    errors::RemoteReadError,
};

/// On-chain auction house configuration, as stored by the Auction House
/// program after its 8-byte account discriminator.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AuctionHouseRecord {
    pub auction_house_fee_account: Pubkey,
    pub auction_house_treasury: Pubkey,
    pub treasury_withdrawal_destination: Pubkey,
    pub fee_withdrawal_destination: Pubkey,
    pub treasury_mint: Pubkey,
    pub authority: Pubkey,
    pub creator: Pubkey,
    pub bump: u8,
    pub treasury_bump: u8,
    pub fee_payer_bump: u8,
    pub seller_fee_basis_points: u16,
    pub requires_sign_off: bool,
    pub can_change_sale_price: bool,
    pub escrow_payment_bump: u8,
    pub has_auctioneer: bool,
    pub auctioneer_address: Pubkey,
    pub scopes: [bool; MAX_NUM_SCOPES],
}

impl AuctionHouseRecord {
    pub fn discriminator() -> [u8; 8] {
        let mut discriminator = [0u8; 8];
        discriminator.copy_from_slice(&hash(b"account:AuctionHouse").to_bytes()[..8]);
        discriminator
    }

    pub fn from_account(address: &Pubkey, account: &Account) -> Result<Self, RemoteReadError> {
        let invalid = |reason: String| RemoteReadError::InvalidAuctionHouse {
            address: *address,
            reason,
        };

        if account.owner != AUCTION_HOUSE_PROGRAM_ID {
            return Err(invalid(format!("owned by {}", account.owner)));
        }

        let data = account.data.as_slice();
        if data.len() < 8 || data[..8] != Self::discriminator() {
            return Err(invalid("account discriminator mismatch".to_string()));
        }

        // accounts are allocated with padding; read only what the record needs
        let mut body = &data[8..];
        AuctionHouseRecord::deserialize(&mut body).map_err(|err| invalid(err.to_string()))
    }

    /// Encode as account data, the inverse of [`AuctionHouseRecord::from_account`].
    pub fn to_account_data(&self) -> Vec<u8> {
        let mut data = Self::discriminator().to_vec();
        // writing into a Vec cannot fail
        let _ = self.serialize(&mut data);
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AuctionHouseRecord {
        AuctionHouseRecord {
            auction_house_fee_account: Pubkey::new_unique(),
            auction_house_treasury: Pubkey::new_unique(),
            treasury_withdrawal_destination: Pubkey::new_unique(),
            fee_withdrawal_destination: Pubkey::new_unique(),
            treasury_mint: spl_token::native_mint::id(),
            authority: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            bump: 255,
            treasury_bump: 254,
            fee_payer_bump: 253,
            seller_fee_basis_points: 250,
            requires_sign_off: false,
            can_change_sale_price: false,
            escrow_payment_bump: 0,
            has_auctioneer: true,
            auctioneer_address: Pubkey::new_unique(),
            scopes: [true; MAX_NUM_SCOPES],
        }
    }

    fn account(data: Vec<u8>, owner: Pubkey) -> Account {
        Account {
            lamports: 1,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        }
    }

    #[test]
    fn reads_padded_account() {
        let address = Pubkey::new_unique();
        let expected = record();
        let mut data = expected.to_account_data();
        data.resize(data.len() + 204, 0);

        let decoded =
            AuctionHouseRecord::from_account(&address, &account(data, AUCTION_HOUSE_PROGRAM_ID))
                .unwrap();

        assert_eq!(decoded, expected);
    }

    #[test]
    fn rejects_foreign_accounts() {
        let address = Pubkey::new_unique();
        let data = record().to_account_data();

        let wrong_owner =
            AuctionHouseRecord::from_account(&address, &account(data.clone(), spl_token::id()));
        assert!(matches!(
            wrong_owner,
            Err(RemoteReadError::InvalidAuctionHouse { .. })
        ));

        let mut tampered = data;
        tampered[0] ^= 0xff;
        let wrong_discriminator = AuctionHouseRecord::from_account(
            &address,
            &account(tampered, AUCTION_HOUSE_PROGRAM_ID),
        );
        assert!(matches!(
            wrong_discriminator,
            Err(RemoteReadError::InvalidAuctionHouse { .. })
        ));

        let short = AuctionHouseRecord::from_account(
            &address,
            &account(
                AuctionHouseRecord::discriminator()[..6].to_vec(),
                AUCTION_HOUSE_PROGRAM_ID,
            ),
        );
        assert!(short.is_err());
    }
}
