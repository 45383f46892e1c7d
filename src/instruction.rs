use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_program::{system_program, sysvar};
use crate::id;
use crate::pda::Pda;

#[derive(BorshDeserialize, BorshSerialize, Debug, Clone)]
pub enum VaultInstruction {
    /// Creation of an exchange vault for an input/output mint pair.
    /// Creating the vault, metadata and owner capability PDA accounts
    /// and the reserve token account.
    /// Moving the mint authority of the output mint to the vault.
    ///
    /// Accounts expected by this instruction:
    /// 0. `[signer, writable]` - creator: payer, current output mint authority, owner capability holder
    /// 1. `[]` - minter SPL token input
    /// 2. `[writable]` - minter SPL token output
    /// 3. `[writable]` - contract(PDA) Vault
    /// 4. `[writable]` - contract(PDA) Metadata
    /// 5. `[writable]` - contract(PDA) Owner capability
    /// 6. `[]` - contract(PDA) authority: output mint authority, reserve owner
    /// 7. `[writable]` - contract(PDA) reserve SPL token input holder
    /// 8. `[]` - Rent sysvar
    /// 9. `[]` - System program
    /// 10. `[]` - SPL Token program
    /// 11. `[]` - SPL associated token account program
    ///
    Create {
        rate: u64,
        rate_decimals: u8,
        symbol: String,
        name: String,
        description: String,
        icon_url: Option<String>,
    },

    /// Adds input tokens to the reserve.
    ///
    /// Accounts expected by this instruction:
    /// 0. `[signer]` - owner capability holder
    /// 1. `[writable]` - from holder SPL token input holder
    /// 2. `[]` - contract(PDA) Owner capability
    /// 3. `[writable]` - contract(PDA) Vault
    /// 4. `[writable]` - contract(PDA) reserve SPL token input holder
    /// 5. `[]` - SPL Token program
    ///
    Deposit { amount: u64 },

    /// Takes input tokens out of the reserve.
    ///
    /// Accounts expected by this instruction:
    /// 0. `[signer]` - owner capability holder
    /// 1. `[writable]` - to holder SPL token input holder
    /// 2. `[]` - contract(PDA) Owner capability
    /// 3. `[writable]` - contract(PDA) Vault
    /// 4. `[writable]` - contract(PDA) reserve SPL token input holder
    /// 5. `[]` - contract(PDA) authority
    /// 6. `[]` - SPL Token program
    ///
    Withdraw { amount: u64 },

    /// Replaces the conversion rate.
    ///
    /// Accounts expected by this instruction:
    /// 0. `[signer]` - owner capability holder
    /// 1. `[]` - contract(PDA) Owner capability
    /// 2. `[writable]` - contract(PDA) Vault
    ///
    SetRate { rate: u64 },

    /// Exchange input tokens for newly issued output tokens.
    /// dO = floor(dI * rate / 10^decimals)
    ///
    /// Accounts expected by this instruction:
    /// 0. `[signer]` - user SPL token owner
    /// 1. `[writable]` - user SPL token input holder
    /// 2. `[writable]` - user SPL token output holder
    /// 3. `[writable]` - contract(PDA) Vault
    /// 4. `[]` - contract(PDA) Metadata
    /// 5. `[writable]` - contract(PDA) reserve SPL token input holder
    /// 6. `[writable]` - minter SPL token output
    /// 7. `[]` - contract(PDA) authority
    /// 8. `[]` - SPL Token program
    ///
    Mint { amount: u64 },

    /// Exchange output tokens, burned, for input tokens from the reserve.
    /// dI = ceil(dO * 10^decimals / rate)
    ///
    /// Accounts expected by this instruction: same as `Mint`.
    ///
    Redeem { amount: u64 },

    /// Hands the owner capability to another key.
    ///
    /// Accounts expected by this instruction:
    /// 0. `[signer]` - owner capability holder
    /// 1. `[writable]` - contract(PDA) Owner capability
    ///
    TransferOwnerCap { new_holder: Pubkey },
}

impl VaultInstruction {
    pub fn create(
        rate: u64,
        rate_decimals: u8,
        symbol: String,
        name: String,
        description: String,
        icon_url: Option<String>,
        creator_pk: Pubkey,
        input_mint_pk: Pubkey,
        output_mint_pk: Pubkey,
    ) -> Instruction {
        let pda = Pda::generate(&input_mint_pk, &output_mint_pk);
        let ix_accounts = vec![
            AccountMeta::new(creator_pk, true),
            AccountMeta::new_readonly(input_mint_pk, false),
            AccountMeta::new(output_mint_pk, false),
            AccountMeta::new(pda.vault.0, false),
            AccountMeta::new(pda.metadata.0, false),
            AccountMeta::new(pda.owner_cap.0, false),
            AccountMeta::new_readonly(pda.authority.0, false),
            AccountMeta::new(pda.reserve_pk, false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(spl_associated_token_account::id(), false),
        ];

        Instruction::new_with_borsh(
            id(),
            &VaultInstruction::Create { rate, rate_decimals, symbol, name, description, icon_url },
            ix_accounts,
        )
    }

    pub fn deposit(
        amount: u64,
        holder_pk: Pubkey,
        holder_token_input_pk: Pubkey,
        input_mint_pk: Pubkey,
        output_mint_pk: Pubkey,
    ) -> Instruction {
        let pda = Pda::generate(&input_mint_pk, &output_mint_pk);
        let ix_accounts = vec![
            AccountMeta::new_readonly(holder_pk, true),
            AccountMeta::new(holder_token_input_pk, false),
            AccountMeta::new_readonly(pda.owner_cap.0, false),
            AccountMeta::new(pda.vault.0, false),
            AccountMeta::new(pda.reserve_pk, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ];

        Instruction::new_with_borsh(id(), &VaultInstruction::Deposit { amount }, ix_accounts)
    }

    pub fn withdraw(
        amount: u64,
        holder_pk: Pubkey,
        holder_token_input_pk: Pubkey,
        input_mint_pk: Pubkey,
        output_mint_pk: Pubkey,
    ) -> Instruction {
        let pda = Pda::generate(&input_mint_pk, &output_mint_pk);
        let ix_accounts = vec![
            AccountMeta::new_readonly(holder_pk, true),
            AccountMeta::new(holder_token_input_pk, false),
            AccountMeta::new_readonly(pda.owner_cap.0, false),
            AccountMeta::new(pda.vault.0, false),
            AccountMeta::new(pda.reserve_pk, false),
            AccountMeta::new_readonly(pda.authority.0, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ];

        Instruction::new_with_borsh(id(), &VaultInstruction::Withdraw { amount }, ix_accounts)
    }

    /// `owner_cap_pk` and `vault_pk` are taken as-is so a capability can be
    /// presented against any vault; the program rejects mismatches.
    pub fn set_rate(
        rate: u64,
        holder_pk: Pubkey,
        owner_cap_pk: Pubkey,
        vault_pk: Pubkey,
    ) -> Instruction {
        let ix_accounts = vec![
            AccountMeta::new_readonly(holder_pk, true),
            AccountMeta::new_readonly(owner_cap_pk, false),
            AccountMeta::new(vault_pk, false),
        ];

        Instruction::new_with_borsh(id(), &VaultInstruction::SetRate { rate }, ix_accounts)
    }

    pub fn mint(
        amount: u64,
        user_owner_pk: Pubkey,
        user_token_input_pk: Pubkey,
        user_token_output_pk: Pubkey,
        input_mint_pk: Pubkey,
        output_mint_pk: Pubkey,
    ) -> Instruction {
        let ix_accounts = Self::get_exchange_account_meta(
            user_owner_pk,
            user_token_input_pk,
            user_token_output_pk,
            &input_mint_pk,
            &output_mint_pk,
        );

        Instruction::new_with_borsh(id(), &VaultInstruction::Mint { amount }, ix_accounts)
    }

    pub fn redeem(
        amount: u64,
        user_owner_pk: Pubkey,
        user_token_input_pk: Pubkey,
        user_token_output_pk: Pubkey,
        input_mint_pk: Pubkey,
        output_mint_pk: Pubkey,
    ) -> Instruction {
        let ix_accounts = Self::get_exchange_account_meta(
            user_owner_pk,
            user_token_input_pk,
            user_token_output_pk,
            &input_mint_pk,
            &output_mint_pk,
        );

        Instruction::new_with_borsh(id(), &VaultInstruction::Redeem { amount }, ix_accounts)
    }

    pub fn transfer_owner_cap(
        new_holder: Pubkey,
        holder_pk: Pubkey,
        owner_cap_pk: Pubkey,
    ) -> Instruction {
        let ix_accounts = vec![
            AccountMeta::new_readonly(holder_pk, true),
            AccountMeta::new(owner_cap_pk, false),
        ];

        Instruction::new_with_borsh(
            id(),
            &VaultInstruction::TransferOwnerCap { new_holder },
            ix_accounts,
        )
    }

    fn get_exchange_account_meta(
        user_owner_pk: Pubkey,
        user_token_input_pk: Pubkey,
        user_token_output_pk: Pubkey,
        input_mint_pk: &Pubkey,
        output_mint_pk: &Pubkey,
    ) -> Vec<AccountMeta> {
        let pda = Pda::generate(input_mint_pk, output_mint_pk);
        vec![
            AccountMeta::new_readonly(user_owner_pk, true),
            AccountMeta::new(user_token_input_pk, false),
            AccountMeta::new(user_token_output_pk, false),
            AccountMeta::new(pda.vault.0, false),
            AccountMeta::new_readonly(pda.metadata.0, false),
            AccountMeta::new(pda.reserve_pk, false),
            AccountMeta::new(*output_mint_pk, false),
            AccountMeta::new_readonly(pda.authority.0, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ]
    }
}
