use borsh::BorshSerialize;
use borsh::BorshDeserialize;
use solana_program::pubkey::Pubkey;
use crate::error::VaultError;
use crate::rate::{input_amount, output_amount};

/// Issuance authority over the output mint.
/// The mint authority lives at a PDA keyed by the vault and its metadata,
/// so the record below only makes sense inside the vault that owns it.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq)]
pub struct Issuer {
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub authority_bump: u8,
}

/// Exchange vault for one input/output mint pair.
/// `reserve` is the authoritative balance: tokens sent straight to the
/// reserve account are not counted, otherwise anyone could skew redemptions.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Vault {
    rate: u64,
    rate_decimals: u8,
    reserve: u64,
    input_mint: Pubkey,
    reserve_account: Pubkey,
    issuer: Issuer,
    bump: u8,
}

impl Vault {
    pub fn new(
        rate: u64,
        rate_decimals: u8,
        input_mint: Pubkey,
        reserve_account: Pubkey,
        issuer: Issuer,
        bump: u8,
    ) -> Result<Vault, VaultError> {
        if rate == 0 {
            return Err(VaultError::InvalidRate);
        }
        Ok(Vault { rate, rate_decimals, reserve: 0, input_mint, reserve_account, issuer, bump })
    }

    pub fn rate(&self) -> u64 {
        self.rate
    }

    pub fn rate_decimals(&self) -> u8 {
        self.rate_decimals
    }

    pub fn reserve(&self) -> u64 {
        self.reserve
    }

    pub fn input_mint(&self) -> &Pubkey {
        &self.input_mint
    }

    pub fn reserve_account(&self) -> &Pubkey {
        &self.reserve_account
    }

    pub fn issuer(&self) -> &Issuer {
        &self.issuer
    }

    pub fn bump(&self) -> u8 {
        self.bump
    }

    /// Output units `mint` would issue for `input` at the current rate.
    pub fn quote_mint(&self, input: u64) -> Result<u64, VaultError> {
        output_amount(self.rate, input, self.rate_decimals)
    }

    /// Input units `redeem` would release for `output` at the current rate.
    pub fn quote_redeem(&self, output: u64) -> Result<u64, VaultError> {
        input_amount(self.rate, output, self.rate_decimals)
    }

    /// Fails with `InvalidMetadata` unless `metadata` at `metadata_pk` is the
    /// record created together with the vault at `vault_pk`.
    pub fn check_metadata(
        &self,
        vault_pk: &Pubkey,
        metadata_pk: &Pubkey,
        metadata: &Metadata,
    ) -> Result<(), VaultError> {
        if self.issuer.metadata != *metadata_pk {
            return Err(VaultError::InvalidMetadata);
        }
        metadata.authorize(vault_pk)
    }

    pub fn deposit(&mut self, amount: u64) -> Result<(), VaultError> {
        self.reserve = self.reserve.checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: u64) -> Result<(), VaultError> {
        if amount > self.reserve {
            return Err(VaultError::InsufficientReserves);
        }
        self.reserve -= amount;
        Ok(())
    }

    /// Replaces the rate for every later mint and redeem.
    /// Collateralisation of already issued output is not re-checked.
    pub fn set_rate(&mut self, rate: u64) -> Result<(), VaultError> {
        if rate == 0 {
            return Err(VaultError::InvalidRate);
        }
        self.rate = rate;
        Ok(())
    }

    /// Takes `input` into the reserve and returns the output units to issue.
    pub fn mint(&mut self, input: u64) -> Result<u64, VaultError> {
        let output = self.quote_mint(input)?;
        let reserve = self.reserve.checked_add(input)
            .ok_or(VaultError::ArithmeticOverflow)?;

        self.reserve = reserve;
        Ok(output)
    }

    /// Retires `output` and returns the input units to release from the reserve.
    pub fn redeem(&mut self, output: u64) -> Result<u64, VaultError> {
        let input = self.quote_redeem(output)?;
        if input > self.reserve {
            return Err(VaultError::InsufficientReserves);
        }

        self.reserve -= input;
        Ok(input)
    }
}

/// Descriptive record of the output asset.
/// Written once when the vault is created; there is no setter and no
/// instruction that rewrites the account afterwards.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Metadata {
    vault: Pubkey,
    name: String,
    symbol: String,
    description: String,
    icon_url: Option<String>,
}

impl Metadata {
    pub fn new(
        vault: Pubkey,
        name: String,
        symbol: String,
        description: String,
        icon_url: Option<String>,
    ) -> Metadata {
        Metadata { vault, name, symbol, description, icon_url }
    }

    pub fn vault(&self) -> &Pubkey {
        &self.vault
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }

    pub fn authorize(&self, vault_pk: &Pubkey) -> Result<(), VaultError> {
        if self.vault != *vault_pk {
            return Err(VaultError::InvalidMetadata);
        }
        Ok(())
    }
}

/// Administrative capability over exactly one vault.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct OwnerCap {
    vault: Pubkey,
    holder: Pubkey,
}

impl OwnerCap {
    pub fn new(vault: Pubkey, holder: Pubkey) -> OwnerCap {
        OwnerCap { vault, holder }
    }

    pub fn vault(&self) -> &Pubkey {
        &self.vault
    }

    pub fn holder(&self) -> &Pubkey {
        &self.holder
    }

    /// The capability must be bound to `vault_pk` and held by `signer_pk`.
    pub fn authorize(&self, vault_pk: &Pubkey, signer_pk: &Pubkey) -> Result<(), VaultError> {
        if self.vault != *vault_pk {
            return Err(VaultError::WrongOwnerCap);
        }
        if self.holder != *signer_pk {
            return Err(VaultError::WrongHolder);
        }
        Ok(())
    }

    pub fn transfer(&mut self, signer_pk: &Pubkey, new_holder: Pubkey) -> Result<(), VaultError> {
        if self.holder != *signer_pk {
            return Err(VaultError::WrongHolder);
        }
        self.holder = new_holder;
        Ok(())
    }
}
