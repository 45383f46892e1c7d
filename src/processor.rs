use solana_program::account_info::{AccountInfo, next_account_info};
use solana_program::entrypoint::ProgramResult;
use solana_program::{msg, system_instruction, system_program};
use solana_program::pubkey::Pubkey;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::program::{invoke, invoke_signed};
use solana_program::program_error::ProgramError;
use solana_program::rent::Rent;
use solana_program::sysvar::Sysvar;
use spl_token::instruction::AuthorityType;
use crate::error::VaultError;
use crate::state::{Issuer, Metadata, OwnerCap, Vault};
use crate::instruction::VaultInstruction;
use crate::pda::{AUTHORITY_SEED, METADATA_SEED, OWNER_CAP_SEED, VAULT_SEED, Pda, find_pk_and_bump};

pub struct Processor;

impl Processor {
    pub fn process(program_id: &Pubkey,
                   accounts: &[AccountInfo],
                   instruction_data: &[u8]) -> ProgramResult {
        let ix = VaultInstruction::try_from_slice(instruction_data)?;
        match ix {
            VaultInstruction::Create { rate, rate_decimals, symbol, name, description, icon_url } => {
                msg!("VaultInstruction: Create");
                Self::process_create(
                    program_id,
                    rate,
                    rate_decimals,
                    symbol,
                    name,
                    description,
                    icon_url,
                    accounts,
                )
            }
            VaultInstruction::Deposit { amount } => {
                msg!("VaultInstruction: Deposit");
                Self::process_deposit(program_id, amount, accounts)
            }
            VaultInstruction::Withdraw { amount } => {
                msg!("VaultInstruction: Withdraw");
                Self::process_withdraw(program_id, amount, accounts)
            }
            VaultInstruction::SetRate { rate } => {
                msg!("VaultInstruction: SetRate");
                Self::process_set_rate(program_id, rate, accounts)
            }
            VaultInstruction::Mint { amount } => {
                msg!("VaultInstruction: Mint");
                Self::process_mint(program_id, amount, accounts)
            }
            VaultInstruction::Redeem { amount } => {
                msg!("VaultInstruction: Redeem");
                Self::process_redeem(program_id, amount, accounts)
            }
            VaultInstruction::TransferOwnerCap { new_holder } => {
                msg!("VaultInstruction: TransferOwnerCap");
                Self::process_transfer_owner_cap(program_id, new_holder, accounts)
            }
        }
    }

    fn process_create(
        program_id: &Pubkey,
        rate: u64,
        rate_decimals: u8,
        symbol: String,
        name: String,
        description: String,
        icon_url: Option<String>,
        accounts: &[AccountInfo],
    ) -> ProgramResult {
        msg!("process_create: Reading accounts");
        let acc_iter = &mut accounts.iter();

        // user accounts
        let creator_info = next_account_info(acc_iter)?;
        let minter_input_info = next_account_info(acc_iter)?;
        let minter_output_info = next_account_info(acc_iter)?;

        // contract accounts
        let pda_vault_info = next_account_info(acc_iter)?;
        let pda_metadata_info = next_account_info(acc_iter)?;
        let pda_owner_cap_info = next_account_info(acc_iter)?;
        let pda_authority_info = next_account_info(acc_iter)?;
        let pda_reserve_info = next_account_info(acc_iter)?;

        // service accounts
        let rent_info = next_account_info(acc_iter)?;
        let rent = Rent::from_account_info(rent_info)?;
        let system_info = next_account_info(acc_iter)?;
        let spl_token_program_info = next_account_info(acc_iter)?;
        let spl_associated_token_program_info = next_account_info(acc_iter)?;


        msg!("process_create: Verifying accounts");
        if !creator_info.is_signer {
            msg!("Error: Required signature for creator");
            return Err(ProgramError::MissingRequiredSignature);
        }
        if minter_input_info.key == minter_output_info.key {
            msg!("Error: Input and output mints are identical");
            return Err(VaultError::IdenticalMint.into());
        }
        Self::check_program_id(system_info, &system_program::id())?;
        Self::check_program_id(spl_token_program_info, &spl_token::id())?;
        Self::check_program_id(spl_associated_token_program_info, &spl_associated_token_account::id())?;

        let pda = Pda::generate(minter_input_info.key, minter_output_info.key);
        let (vault_pk, vault_bump) = pda.vault;
        let (metadata_pk, metadata_bump) = pda.metadata;
        let (owner_cap_pk, owner_cap_bump) = pda.owner_cap;
        let (authority_pk, authority_bump) = pda.authority;

        if *pda_vault_info.key != vault_pk {
            msg!("Error: Pda vault address does not match seed derivation");
            return Err(ProgramError::InvalidSeeds);
        }
        if *pda_metadata_info.key != metadata_pk {
            msg!("Error: Pda metadata address does not match seed derivation");
            return Err(ProgramError::InvalidSeeds);
        }
        if *pda_owner_cap_info.key != owner_cap_pk {
            msg!("Error: Pda owner cap address does not match seed derivation");
            return Err(ProgramError::InvalidSeeds);
        }
        if *pda_authority_info.key != authority_pk {
            msg!("Error: Pda authority address does not match seed derivation");
            return Err(ProgramError::InvalidSeeds);
        }
        if *pda_reserve_info.key != pda.reserve_pk {
            msg!("Error: Pda reserve address does not match seed derivation");
            return Err(ProgramError::InvalidSeeds);
        }

        if !pda_vault_info.data_is_empty()
            || !pda_metadata_info.data_is_empty()
            || !pda_owner_cap_info.data_is_empty()
            || !pda_reserve_info.data_is_empty() {
            return Err(VaultError::AlreadyInUse.into());
        }

        let issuer = Issuer {
            mint: *minter_output_info.key,
            metadata: metadata_pk,
            authority_bump,
        };
        let vault = Vault::new(
            rate,
            rate_decimals,
            *minter_input_info.key,
            pda.reserve_pk,
            issuer,
            vault_bump,
        )?;
        let metadata = Metadata::new(vault_pk, name, symbol, description, icon_url);
        let owner_cap = OwnerCap::new(vault_pk, *creator_info.key);


        msg!("process_create: Creating vault account");
        let vault_space = borsh::to_vec(&vault)?.len();
        Self::create_pda_account(
            program_id,
            &rent,
            vault_space,
            creator_info,
            pda_vault_info,
            system_info,
            &[&[
                VAULT_SEED,
                &minter_input_info.key.to_bytes(),
                &minter_output_info.key.to_bytes(),
                &spl_token::id().to_bytes(),
                &[vault_bump]
            ]],
        )?;
        vault.serialize(&mut &mut pda_vault_info.data.borrow_mut()[..])?;

        msg!("process_create: Creating metadata account");
        let metadata_space = borsh::to_vec(&metadata)?.len();
        Self::create_pda_account(
            program_id,
            &rent,
            metadata_space,
            creator_info,
            pda_metadata_info,
            system_info,
            &[&[METADATA_SEED, &vault_pk.to_bytes(), &[metadata_bump]]],
        )?;
        metadata.serialize(&mut &mut pda_metadata_info.data.borrow_mut()[..])?;

        msg!("process_create: Creating owner cap account");
        let owner_cap_space = borsh::to_vec(&owner_cap)?.len();
        Self::create_pda_account(
            program_id,
            &rent,
            owner_cap_space,
            creator_info,
            pda_owner_cap_info,
            system_info,
            &[&[OWNER_CAP_SEED, &vault_pk.to_bytes(), &[owner_cap_bump]]],
        )?;
        owner_cap.serialize(&mut &mut pda_owner_cap_info.data.borrow_mut()[..])?;

        msg!("process_create: Creating pda reserve associated account");
        let create_reserve_acc_ix = spl_associated_token_account::create_associated_token_account(
            creator_info.key,
            pda_authority_info.key,
            minter_input_info.key,
        );
        invoke(
            &create_reserve_acc_ix,
            &[
                creator_info.clone(),
                pda_reserve_info.clone(),
                pda_authority_info.clone(),
                minter_input_info.clone(),
                system_info.clone(),
                spl_token_program_info.clone(),
                rent_info.clone(),
                spl_associated_token_program_info.clone()
            ],
        )?;

        msg!("process_create: Moving output mint authority to the vault");
        let set_authority_ix = spl_token::instruction::set_authority(
            spl_token_program_info.key,
            minter_output_info.key,
            Some(pda_authority_info.key),
            AuthorityType::MintTokens,
            creator_info.key,
            &[&creator_info.key],
        )?;
        invoke(
            &set_authority_ix,
            &[
                spl_token_program_info.clone(),
                minter_output_info.clone(),
                creator_info.clone()
            ],
        )?;

        msg!(
            "process_create: Saved vault rate={}, rate_decimals={}, owner cap holder={}",
            vault.rate(), vault.rate_decimals(), owner_cap.holder()
        );

        Ok(())
    }

    fn process_deposit(
        program_id: &Pubkey,
        amount: u64,
        accounts: &[AccountInfo],
    ) -> ProgramResult {
        msg!("process_deposit: Reading accounts");
        let acc_iter = &mut accounts.iter();

        let holder_info = next_account_info(acc_iter)?;
        let holder_token_input_info = next_account_info(acc_iter)?;
        let pda_owner_cap_info = next_account_info(acc_iter)?;
        let pda_vault_info = next_account_info(acc_iter)?;
        let pda_reserve_info = next_account_info(acc_iter)?;
        let spl_token_program_info = next_account_info(acc_iter)?;

        msg!("process_deposit: Verifying accounts");
        Self::check_program_id(spl_token_program_info, &spl_token::id())?;
        let owner_cap = Self::load_owner_cap(program_id, holder_info, pda_owner_cap_info)?;
        owner_cap.authorize(pda_vault_info.key, holder_info.key)?;

        let mut vault = Self::load_vault(program_id, pda_vault_info)?;
        if pda_reserve_info.key != vault.reserve_account() {
            msg!("Error: Reserve account does not belong to the vault");
            return Err(VaultError::InvalidReserve.into());
        }

        vault.deposit(amount)?;

        Self::transfer_to_vault(
            spl_token_program_info,
            holder_token_input_info,
            pda_reserve_info,
            holder_info,
            amount,
        )?;

        vault.serialize(&mut &mut pda_vault_info.data.borrow_mut()[..])?;
        msg!("process_deposit: Saved new reserve={} to vault account", vault.reserve());

        Ok(())
    }

    fn process_withdraw(
        program_id: &Pubkey,
        amount: u64,
        accounts: &[AccountInfo],
    ) -> ProgramResult {
        msg!("process_withdraw: Reading accounts");
        let acc_iter = &mut accounts.iter();

        let holder_info = next_account_info(acc_iter)?;
        let holder_token_input_info = next_account_info(acc_iter)?;
        let pda_owner_cap_info = next_account_info(acc_iter)?;
        let pda_vault_info = next_account_info(acc_iter)?;
        let pda_reserve_info = next_account_info(acc_iter)?;
        let pda_authority_info = next_account_info(acc_iter)?;
        let spl_token_program_info = next_account_info(acc_iter)?;

        msg!("process_withdraw: Verifying accounts");
        Self::check_program_id(spl_token_program_info, &spl_token::id())?;
        let owner_cap = Self::load_owner_cap(program_id, holder_info, pda_owner_cap_info)?;
        owner_cap.authorize(pda_vault_info.key, holder_info.key)?;

        let mut vault = Self::load_vault(program_id, pda_vault_info)?;
        if pda_reserve_info.key != vault.reserve_account() {
            msg!("Error: Reserve account does not belong to the vault");
            return Err(VaultError::InvalidReserve.into());
        }
        Self::check_authority(program_id, pda_vault_info.key, &vault, pda_authority_info)?;

        vault.withdraw(amount)?;

        let issuer = *vault.issuer();
        Self::transfer_to_user(
            spl_token_program_info,
            pda_reserve_info,
            holder_token_input_info,
            pda_authority_info,
            amount,
            &[&[
                AUTHORITY_SEED,
                &pda_vault_info.key.to_bytes(),
                &issuer.metadata.to_bytes(),
                &[issuer.authority_bump]
            ]],
        )?;

        vault.serialize(&mut &mut pda_vault_info.data.borrow_mut()[..])?;
        msg!("process_withdraw: Saved new reserve={} to vault account", vault.reserve());

        Ok(())
    }

    fn process_set_rate(
        program_id: &Pubkey,
        rate: u64,
        accounts: &[AccountInfo],
    ) -> ProgramResult {
        msg!("process_set_rate: Reading accounts");
        let acc_iter = &mut accounts.iter();

        let holder_info = next_account_info(acc_iter)?;
        let pda_owner_cap_info = next_account_info(acc_iter)?;
        let pda_vault_info = next_account_info(acc_iter)?;

        msg!("process_set_rate: Verifying accounts");
        let owner_cap = Self::load_owner_cap(program_id, holder_info, pda_owner_cap_info)?;
        owner_cap.authorize(pda_vault_info.key, holder_info.key)?;

        let mut vault = Self::load_vault(program_id, pda_vault_info)?;
        msg!("process_set_rate: Current rate={} from vault account", vault.rate());

        vault.set_rate(rate)?;

        vault.serialize(&mut &mut pda_vault_info.data.borrow_mut()[..])?;
        msg!("process_set_rate: Saved new rate={} to vault account", vault.rate());

        Ok(())
    }

    fn process_mint(
        program_id: &Pubkey,
        amount: u64,
        accounts: &[AccountInfo],
    ) -> ProgramResult {
        msg!("process_mint: Reading accounts");
        let acc_iter = &mut accounts.iter();

        // user accounts
        let user_owner_info = next_account_info(acc_iter)?;
        let user_token_input_info = next_account_info(acc_iter)?;
        let user_token_output_info = next_account_info(acc_iter)?;

        // contract accounts
        let pda_vault_info = next_account_info(acc_iter)?;
        let pda_metadata_info = next_account_info(acc_iter)?;
        let pda_reserve_info = next_account_info(acc_iter)?;
        let minter_output_info = next_account_info(acc_iter)?;
        let pda_authority_info = next_account_info(acc_iter)?;

        // service accounts
        let spl_token_program_info = next_account_info(acc_iter)?;

        msg!("process_mint: Verifying accounts");
        if !user_owner_info.is_signer {
            msg!("Error: Required signature for user SPL token owner");
            return Err(ProgramError::MissingRequiredSignature);
        }
        Self::check_program_id(spl_token_program_info, &spl_token::id())?;
        let mut vault = Self::load_exchange_vault(
            program_id,
            pda_vault_info,
            pda_metadata_info,
            pda_reserve_info,
            minter_output_info,
            pda_authority_info,
        )?;
        msg!(
            "process_mint: Current rate={}, rate_decimals={}, reserve={} from vault account",
            vault.rate(), vault.rate_decimals(), vault.reserve()
        );

        let output_amount = vault.mint(amount)?;

        Self::transfer_to_vault(
            spl_token_program_info,
            user_token_input_info,
            pda_reserve_info,
            user_owner_info,
            amount,
        )?;

        msg!("process_mint: Mint amount={} to user token account", output_amount);
        let issuer = *vault.issuer();
        let mint_to_ix = spl_token::instruction::mint_to(
            spl_token_program_info.key,
            minter_output_info.key,
            user_token_output_info.key,
            pda_authority_info.key,
            &[],
            output_amount,
        )?;
        invoke_signed(
            &mint_to_ix,
            &[
                spl_token_program_info.clone(),
                minter_output_info.clone(),
                user_token_output_info.clone(),
                pda_authority_info.clone()
            ],
            &[&[
                AUTHORITY_SEED,
                &pda_vault_info.key.to_bytes(),
                &issuer.metadata.to_bytes(),
                &[issuer.authority_bump]
            ]],
        )?;

        vault.serialize(&mut &mut pda_vault_info.data.borrow_mut()[..])?;
        msg!("process_mint: Saved new reserve={} to vault account", vault.reserve());

        Ok(())
    }

    fn process_redeem(
        program_id: &Pubkey,
        amount: u64,
        accounts: &[AccountInfo],
    ) -> ProgramResult {
        msg!("process_redeem: Reading accounts");
        let acc_iter = &mut accounts.iter();

        // user accounts
        let user_owner_info = next_account_info(acc_iter)?;
        let user_token_input_info = next_account_info(acc_iter)?;
        let user_token_output_info = next_account_info(acc_iter)?;

        // contract accounts
        let pda_vault_info = next_account_info(acc_iter)?;
        let pda_metadata_info = next_account_info(acc_iter)?;
        let pda_reserve_info = next_account_info(acc_iter)?;
        let minter_output_info = next_account_info(acc_iter)?;
        let pda_authority_info = next_account_info(acc_iter)?;

        // service accounts
        let spl_token_program_info = next_account_info(acc_iter)?;

        msg!("process_redeem: Verifying accounts");
        if !user_owner_info.is_signer {
            msg!("Error: Required signature for user SPL token owner");
            return Err(ProgramError::MissingRequiredSignature);
        }
        Self::check_program_id(spl_token_program_info, &spl_token::id())?;
        let mut vault = Self::load_exchange_vault(
            program_id,
            pda_vault_info,
            pda_metadata_info,
            pda_reserve_info,
            minter_output_info,
            pda_authority_info,
        )?;
        msg!(
            "process_redeem: Current rate={}, rate_decimals={}, reserve={} from vault account",
            vault.rate(), vault.rate_decimals(), vault.reserve()
        );

        let input_amount = vault.redeem(amount)?;

        msg!("process_redeem: Burn amount={} from user token account", amount);
        let burn_ix = spl_token::instruction::burn(
            spl_token_program_info.key,
            user_token_output_info.key,
            minter_output_info.key,
            user_owner_info.key,
            &[&user_owner_info.key],
            amount,
        )?;
        invoke(
            &burn_ix,
            &[
                spl_token_program_info.clone(),
                user_token_output_info.clone(),
                minter_output_info.clone(),
                user_owner_info.clone()
            ],
        )?;

        let issuer = *vault.issuer();
        Self::transfer_to_user(
            spl_token_program_info,
            pda_reserve_info,
            user_token_input_info,
            pda_authority_info,
            input_amount,
            &[&[
                AUTHORITY_SEED,
                &pda_vault_info.key.to_bytes(),
                &issuer.metadata.to_bytes(),
                &[issuer.authority_bump]
            ]],
        )?;

        vault.serialize(&mut &mut pda_vault_info.data.borrow_mut()[..])?;
        msg!("process_redeem: Saved new reserve={} to vault account", vault.reserve());

        Ok(())
    }

    fn process_transfer_owner_cap(
        program_id: &Pubkey,
        new_holder: Pubkey,
        accounts: &[AccountInfo],
    ) -> ProgramResult {
        msg!("process_transfer_owner_cap: Reading accounts");
        let acc_iter = &mut accounts.iter();

        let holder_info = next_account_info(acc_iter)?;
        let pda_owner_cap_info = next_account_info(acc_iter)?;

        msg!("process_transfer_owner_cap: Verifying accounts");
        let mut owner_cap = Self::load_owner_cap(program_id, holder_info, pda_owner_cap_info)?;

        owner_cap.transfer(holder_info.key, new_holder)?;

        owner_cap.serialize(&mut &mut pda_owner_cap_info.data.borrow_mut()[..])?;
        msg!(
            "process_transfer_owner_cap: Saved new holder={} for vault={}",
            owner_cap.holder(), owner_cap.vault()
        );

        Ok(())
    }

    /// Reads the vault and checks the address it was derived at.
    fn load_vault(program_id: &Pubkey, vault_info: &AccountInfo) -> Result<Vault, ProgramError> {
        if vault_info.owner != program_id {
            msg!("Error: Vault account is not owned by the program");
            return Err(VaultError::InvalidVault.into());
        }
        let vault = Vault::try_from_slice(&vault_info.data.borrow())
            .map_err(|_| Into::<ProgramError>::into(VaultError::InvalidVault))?;

        let vault_pk = Pubkey::create_program_address(
            &[
                VAULT_SEED,
                &vault.input_mint().to_bytes(),
                &vault.issuer().mint.to_bytes(),
                &spl_token::id().to_bytes(),
                &[vault.bump()]
            ],
            program_id,
        ).map_err(|_| Into::<ProgramError>::into(VaultError::InvalidVault))?;
        if *vault_info.key != vault_pk {
            msg!("Error: Vault address does not match seed derivation");
            return Err(VaultError::InvalidVault.into());
        }

        Ok(vault)
    }

    /// Reads the owner capability presented by a signing holder.
    fn load_owner_cap(
        program_id: &Pubkey,
        holder_info: &AccountInfo,
        owner_cap_info: &AccountInfo,
    ) -> Result<OwnerCap, ProgramError> {
        if !holder_info.is_signer {
            msg!("Error: Required signature for owner cap holder");
            return Err(ProgramError::MissingRequiredSignature);
        }
        if owner_cap_info.owner != program_id {
            msg!("Error: Owner cap account is not owned by the program");
            return Err(VaultError::WrongOwnerCap.into());
        }
        let owner_cap = OwnerCap::try_from_slice(&owner_cap_info.data.borrow())
            .map_err(|_| Into::<ProgramError>::into(VaultError::WrongOwnerCap))?;

        let (owner_cap_pk, _) = find_pk_and_bump(OWNER_CAP_SEED, owner_cap.vault());
        if *owner_cap_info.key != owner_cap_pk {
            msg!("Error: Owner cap address does not match seed derivation");
            return Err(VaultError::WrongOwnerCap.into());
        }

        Ok(owner_cap)
    }

    /// Reads the vault for a mint or redeem and checks every account bound to it.
    fn load_exchange_vault(
        program_id: &Pubkey,
        vault_info: &AccountInfo,
        metadata_info: &AccountInfo,
        reserve_info: &AccountInfo,
        minter_output_info: &AccountInfo,
        authority_info: &AccountInfo,
    ) -> Result<Vault, ProgramError> {
        let vault = Self::load_vault(program_id, vault_info)?;

        if metadata_info.owner != program_id {
            msg!("Error: Metadata account is not owned by the program");
            return Err(VaultError::InvalidMetadata.into());
        }
        let metadata = Metadata::try_from_slice(&metadata_info.data.borrow())
            .map_err(|_| Into::<ProgramError>::into(VaultError::InvalidMetadata))?;
        vault.check_metadata(vault_info.key, metadata_info.key, &metadata)?;

        if reserve_info.key != vault.reserve_account() {
            msg!("Error: Reserve account does not belong to the vault");
            return Err(VaultError::InvalidReserve.into());
        }
        if *minter_output_info.key != vault.issuer().mint {
            msg!("Error: Output mint is not the vault issuer");
            return Err(VaultError::InvalidIssuer.into());
        }
        Self::check_authority(program_id, vault_info.key, &vault, authority_info)?;

        Ok(vault)
    }

    /// Rejects a program account that is not the one the handler invokes.
    fn check_program_id(program_info: &AccountInfo, expected_pk: &Pubkey) -> ProgramResult {
        if program_info.key != expected_pk {
            msg!("Error: Program account {} is not {}", program_info.key, expected_pk);
            return Err(ProgramError::IncorrectProgramId);
        }
        Ok(())
    }

    fn check_authority(
        program_id: &Pubkey,
        vault_pk: &Pubkey,
        vault: &Vault,
        authority_info: &AccountInfo,
    ) -> ProgramResult {
        let issuer = vault.issuer();
        let authority_pk = Pubkey::create_program_address(
            &[
                AUTHORITY_SEED,
                &vault_pk.to_bytes(),
                &issuer.metadata.to_bytes(),
                &[issuer.authority_bump]
            ],
            program_id,
        ).map_err(|_| ProgramError::InvalidSeeds)?;
        if *authority_info.key != authority_pk {
            msg!("Error: Pda authority address does not match seed derivation");
            return Err(ProgramError::InvalidSeeds);
        }
        Ok(())
    }

    fn create_pda_account<'a>(
        program_id: &Pubkey,
        rent: &Rent,
        space: usize,
        payer_info: &AccountInfo<'a>,
        pda_info: &AccountInfo<'a>,
        system_info: &AccountInfo<'a>,
        signers_seeds: &[&[&[u8]]],
    ) -> ProgramResult {
        let create_acc_ix = system_instruction::create_account(
            payer_info.key,
            pda_info.key,
            rent.minimum_balance(space),
            space as u64,
            program_id,
        );
        invoke_signed(
            &create_acc_ix,
            &[payer_info.clone(), pda_info.clone(), system_info.clone()],
            signers_seeds,
        )
    }

    fn transfer_to_vault<'a>(
        spl_token_program_info: &AccountInfo<'a>,
        source_info: &AccountInfo<'a>,
        destination_info: &AccountInfo<'a>,
        authority_info: &AccountInfo<'a>,
        amount: u64,
    ) -> ProgramResult {
        msg!("Transfer amount={} to pda reserve account", amount);
        let transfer_token_ix = spl_token::instruction::transfer(
            spl_token_program_info.key,
            source_info.key,
            destination_info.key,
            authority_info.key,
            &[&authority_info.key],
            amount,
        )?;
        invoke(
            &transfer_token_ix,
            &[
                spl_token_program_info.clone(),
                source_info.clone(),
                destination_info.clone(),
                authority_info.clone()
            ],
        )
    }

    fn transfer_to_user<'a>(
        spl_token_program_info: &AccountInfo<'a>,
        source_info: &AccountInfo<'a>,
        destination_info: &AccountInfo<'a>,
        authority_info: &AccountInfo<'a>,
        amount: u64,
        signers_seeds: &[&[&[u8]]],
    ) -> ProgramResult {
        msg!("Transfer amount={} to user token account", amount);
        let transfer_token_ix = spl_token::instruction::transfer(
            spl_token_program_info.key,
            source_info.key,
            destination_info.key,
            authority_info.key,
            &[&authority_info.key],
            amount,
        )?;
        invoke_signed(
            &transfer_token_ix,
            &[
                spl_token_program_info.clone(),
                source_info.clone(),
                destination_info.clone(),
                authority_info.clone()
            ],
            signers_seeds,
        )
    }
}
