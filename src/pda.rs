use solana_program::pubkey::Pubkey;
use crate::id;

pub const VAULT_SEED: &[u8] = b"VAULT";
pub const METADATA_SEED: &[u8] = b"METADATA";
pub const OWNER_CAP_SEED: &[u8] = b"OWNER_CAP";
pub const AUTHORITY_SEED: &[u8] = b"AUTHORITY";

/// Every account of one vault, derived from its input and output mints.
#[derive(Debug, Clone)]
pub struct Pda {
    pub vault: (Pubkey, u8),
    pub metadata: (Pubkey, u8),
    pub owner_cap: (Pubkey, u8),
    /// Mint authority of the output mint and owner of the reserve.
    pub authority: (Pubkey, u8),
    pub reserve_pk: Pubkey,
}

impl Pda {
    pub fn generate(input_mint_pk: &Pubkey, output_mint_pk: &Pubkey) -> Pda {
        let vault = find_vault(input_mint_pk, output_mint_pk);
        let metadata = find_pk_and_bump(METADATA_SEED, &vault.0);
        let owner_cap = find_pk_and_bump(OWNER_CAP_SEED, &vault.0);
        let authority = find_authority(&vault.0, &metadata.0);
        let reserve_pk = spl_associated_token_account::get_associated_token_address(
            &authority.0,
            input_mint_pk,
        );

        Pda { vault, metadata, owner_cap, authority, reserve_pk }
    }
}

pub fn find_vault(input_mint_pk: &Pubkey, output_mint_pk: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            VAULT_SEED,
            &input_mint_pk.to_bytes(),
            &output_mint_pk.to_bytes(),
            &spl_token::id().to_bytes(),
        ],
        &id()
    )
}

pub fn find_authority(vault_pk: &Pubkey, metadata_pk: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            AUTHORITY_SEED,
            &vault_pk.to_bytes(),
            &metadata_pk.to_bytes(),
        ],
        &id()
    )
}

pub fn find_pk_and_bump(key_name: &[u8], vault_pk: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            key_name,
            &vault_pk.to_bytes(),
        ],
        &id()
    )
}
