use solana_program::pubkey::Pubkey;
use exchange_vault::error::VaultError;
use exchange_vault::state::{Issuer, Metadata, OwnerCap, Vault};

struct Fixture {
    vault_pk: Pubkey,
    vault: Vault,
    metadata_pk: Pubkey,
    metadata: Metadata,
    owner_cap: OwnerCap,
    holder: Pubkey,
}

impl Fixture {
    fn new(rate: u64, rate_decimals: u8) -> Fixture {
        let vault_pk = Pubkey::new_unique();
        let metadata_pk = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let issuer = Issuer {
            mint: Pubkey::new_unique(),
            metadata: metadata_pk,
            authority_bump: 255,
        };
        let vault = Vault::new(
            rate,
            rate_decimals,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            issuer,
            254,
        ).expect("vault");
        let metadata = Metadata::new(
            vault_pk,
            "Wrapped Test".to_string(),
            "wTST".to_string(),
            "Test output asset".to_string(),
            Some("https://example.com/icon.png".to_string()),
        );
        let owner_cap = OwnerCap::new(vault_pk, holder);

        Fixture { vault_pk, vault, metadata_pk, metadata, owner_cap, holder }
    }
}

#[test]
fn create_rejects_zero_rate() {
    let issuer = Issuer {
        mint: Pubkey::new_unique(),
        metadata: Pubkey::new_unique(),
        authority_bump: 255,
    };
    let vault = Vault::new(0, 2, Pubkey::new_unique(), Pubkey::new_unique(), issuer, 255);
    assert_eq!(vault, Err(VaultError::InvalidRate));
}

#[test]
fn create_starts_with_empty_reserve() {
    let f = Fixture::new(200, 2);
    assert_eq!(f.vault.rate(), 200);
    assert_eq!(f.vault.rate_decimals(), 2);
    assert_eq!(f.vault.reserve(), 0);
    assert_eq!(f.vault.issuer().metadata, f.metadata_pk);
    assert_eq!(f.metadata.vault(), &f.vault_pk);
    assert_eq!(f.metadata.symbol(), "wTST");
    assert_eq!(f.metadata.icon_url(), Some("https://example.com/icon.png"));
    assert_eq!(f.owner_cap.vault(), &f.vault_pk);
    assert_eq!(f.owner_cap.holder(), &f.holder);
}

#[test]
fn mint_and_redeem_at_integral_rate() {
    let mut f = Fixture::new(200, 2);

    assert_eq!(f.vault.quote_mint(1000), Ok(2000));
    assert_eq!(f.vault.mint(1000), Ok(2000));
    assert_eq!(f.vault.reserve(), 1000);

    assert_eq!(f.vault.quote_redeem(2000), Ok(1000));
    assert_eq!(f.vault.redeem(2000), Ok(1000));
    assert_eq!(f.vault.reserve(), 0);
}

#[test]
fn redeem_rounds_in_favour_of_reserve() {
    let mut f = Fixture::new(3, 0);

    assert_eq!(f.vault.mint(1), Ok(3));
    assert_eq!(f.vault.redeem(1), Ok(1));
    assert_eq!(f.vault.reserve(), 0);

    // the two outstanding output units are no longer covered
    assert_eq!(f.vault.redeem(2), Err(VaultError::InsufficientReserves));
    assert_eq!(f.vault.reserve(), 0);
}

#[test]
fn deposit_and_withdraw() {
    let mut f = Fixture::new(1, 0);

    f.vault.deposit(500).expect("deposit");
    f.vault.deposit(250).expect("deposit");
    assert_eq!(f.vault.reserve(), 750);

    f.vault.withdraw(700).expect("withdraw");
    assert_eq!(f.vault.reserve(), 50);

    f.vault.withdraw(50).expect("withdraw");
    assert_eq!(f.vault.reserve(), 0);
}

#[test]
fn withdraw_more_than_reserve_leaves_reserve_unchanged() {
    let mut f = Fixture::new(1, 0);
    f.vault.deposit(100).expect("deposit");

    assert_eq!(f.vault.withdraw(101), Err(VaultError::InsufficientReserves));
    assert_eq!(f.vault.reserve(), 100);
}

#[test]
fn redeem_more_than_reserve_leaves_reserve_unchanged() {
    let mut f = Fixture::new(100, 2);
    f.vault.mint(10).expect("mint");

    assert_eq!(f.vault.redeem(11), Err(VaultError::InsufficientReserves));
    assert_eq!(f.vault.reserve(), 10);
}

#[test]
fn deposit_overflow_leaves_reserve_unchanged() {
    let mut f = Fixture::new(1, 0);
    f.vault.deposit(u64::MAX).expect("deposit");

    assert_eq!(f.vault.deposit(1), Err(VaultError::ArithmeticOverflow));
    assert_eq!(f.vault.reserve(), u64::MAX);
}

#[test]
fn failed_conversion_does_not_touch_reserve() {
    let mut f = Fixture::new(u64::MAX, 0);

    assert_eq!(f.vault.mint(u64::MAX), Err(VaultError::ArithmeticOverflow));
    assert_eq!(f.vault.reserve(), 0);
}

#[test]
fn mint_into_full_reserve_fails() {
    let mut f = Fixture::new(1, 0);
    f.vault.deposit(u64::MAX).expect("deposit");

    assert_eq!(f.vault.mint(1), Err(VaultError::ArithmeticOverflow));
    assert_eq!(f.vault.reserve(), u64::MAX);
}

#[test]
fn set_rate_to_zero_keeps_previous_rate() {
    let mut f = Fixture::new(200, 2);

    assert_eq!(f.vault.set_rate(0), Err(VaultError::InvalidRate));
    assert_eq!(f.vault.rate(), 200);
}

#[test]
fn set_rate_applies_to_next_mint() {
    let mut f = Fixture::new(200, 2);

    f.vault.set_rate(50).expect("set_rate");
    assert_eq!(f.vault.rate(), 50);
    assert_eq!(f.vault.mint(1000), Ok(500));
}

#[test]
fn set_rate_does_not_check_outstanding_supply() {
    let mut f = Fixture::new(2, 0);
    assert_eq!(f.vault.mint(100), Ok(200));

    f.vault.set_rate(1).expect("set_rate");
    assert_eq!(f.vault.redeem(200), Err(VaultError::InsufficientReserves));
    assert_eq!(f.vault.redeem(100), Ok(100));
}

#[test]
fn owner_cap_is_bound_to_its_vault() {
    let a = Fixture::new(1, 0);
    let b = Fixture::new(1, 0);

    assert_eq!(a.owner_cap.authorize(&a.vault_pk, &a.holder), Ok(()));
    assert_eq!(
        a.owner_cap.authorize(&b.vault_pk, &a.holder),
        Err(VaultError::WrongOwnerCap)
    );
    assert_eq!(
        b.owner_cap.authorize(&a.vault_pk, &b.holder),
        Err(VaultError::WrongOwnerCap)
    );
}

#[test]
fn owner_cap_requires_holder() {
    let f = Fixture::new(1, 0);
    let stranger = Pubkey::new_unique();

    assert_eq!(
        f.owner_cap.authorize(&f.vault_pk, &stranger),
        Err(VaultError::WrongHolder)
    );
}

#[test]
fn owner_cap_transfer_moves_custody() {
    let mut f = Fixture::new(1, 0);
    let new_holder = Pubkey::new_unique();

    assert_eq!(
        f.owner_cap.transfer(&new_holder, new_holder),
        Err(VaultError::WrongHolder)
    );

    f.owner_cap.transfer(&f.holder, new_holder).expect("transfer");
    assert_eq!(f.owner_cap.holder(), &new_holder);
    assert_eq!(f.owner_cap.vault(), &f.vault_pk);
    assert_eq!(
        f.owner_cap.authorize(&f.vault_pk, &f.holder),
        Err(VaultError::WrongHolder)
    );
    assert_eq!(f.owner_cap.authorize(&f.vault_pk, &new_holder), Ok(()));
}

#[test]
fn metadata_is_bound_to_its_vault() {
    let a = Fixture::new(1, 0);
    let b = Fixture::new(1, 0);

    assert_eq!(a.vault.check_metadata(&a.vault_pk, &a.metadata_pk, &a.metadata), Ok(()));
    assert_eq!(
        a.vault.check_metadata(&a.vault_pk, &b.metadata_pk, &b.metadata),
        Err(VaultError::InvalidMetadata)
    );
    // right address, record of another vault
    assert_eq!(
        a.vault.check_metadata(&a.vault_pk, &a.metadata_pk, &b.metadata),
        Err(VaultError::InvalidMetadata)
    );
    assert_eq!(b.metadata.authorize(&a.vault_pk), Err(VaultError::InvalidMetadata));
}
