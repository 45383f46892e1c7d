pub mod error;
pub mod processor;
pub mod instruction;
pub mod state;
pub mod pda;
pub mod rate;

#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;

solana_program::declare_id!("GGdfATH1Ag9NWtLM7yYC6iDnyaY84AUqQxKU4Hw8uUEf");
