use solana_program::decode_error::DecodeError;
use solana_program::program_error::{PrintProgramError, ProgramError};
use thiserror::Error;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::msg;

#[derive(Clone, Copy, Debug, Error, FromPrimitive, PartialEq)]
pub enum VaultError {
    #[error("Owner capability is bound to another vault")]
    WrongOwnerCap,
    #[error("Vault reserve cannot cover the requested amount")]
    InsufficientReserves,
    #[error("Rate must be greater than zero")]
    InvalidRate,
    #[error("Metadata is not bound to this vault")]
    InvalidMetadata,
    #[error("Calculation overflowed the destination number")]
    ArithmeticOverflow,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Input and output mints are identical")]
    IdenticalMint,
    #[error("Vault cannot be created because it is already being used.")]
    AlreadyInUse,
    #[error("Invalid vault")]
    InvalidVault,
    #[error("Output mint is not the vault issuer")]
    InvalidIssuer,
    #[error("Reserve account is not the vault reserve")]
    InvalidReserve,
    #[error("Signer does not hold the owner capability")]
    WrongHolder,
}

impl From<VaultError> for ProgramError {
    fn from(e: VaultError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for VaultError {
    fn type_of() -> &'static str {
        "VaultError"
    }
}

impl PrintProgramError for VaultError {
    fn print<E>(&self)
        where E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + FromPrimitive {
        match self {
            VaultError::WrongOwnerCap => msg!("Error: Owner capability is bound to another vault"),
            VaultError::InsufficientReserves => msg!("Error: Vault reserve cannot cover the requested amount"),
            VaultError::InvalidRate => msg!("Error: Rate must be greater than zero"),
            VaultError::InvalidMetadata => msg!("Error: Metadata is not bound to this vault"),
            VaultError::ArithmeticOverflow => msg!("Error: Calculation overflowed the destination number"),
            VaultError::DivisionByZero => msg!("Error: Division by zero"),
            VaultError::IdenticalMint => msg!("Error: Input and output mints are identical"),
            VaultError::AlreadyInUse => msg!("Error: Vault cannot be created because it is already being used."),
            VaultError::InvalidVault => msg!("Error: Invalid vault"),
            VaultError::InvalidIssuer => msg!("Error: Output mint is not the vault issuer"),
            VaultError::InvalidReserve => msg!("Error: Reserve account is not the vault reserve"),
            VaultError::WrongHolder => msg!("Error: Signer does not hold the owner capability"),
        }
    }
}
