use anchor_lang::prelude::*;
use crate::errors::LedgerError;

/// Root of one token lineage's ledger.
///
/// Created once and never closed. Logic instances come and go; the ledger
/// keeps balances, allowances and minter state across every upgrade.
#[account]
#[derive(InitSpace)]
pub struct Ledger {
    /// The only key allowed to mutate this ledger (a token authority PDA)
    pub owner: Pubkey,
    pub total_supply: u64,
}

impl Ledger {
    /// One-step handover of the writer capability. Returns the previous owner.
    pub fn transfer_ownership(&mut self, signer: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        require_keys_eq!(*signer, self.owner, LedgerError::Unauthorized);
        require_keys_neq!(new_owner, Pubkey::default(), LedgerError::ZeroAddress);
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}

/// Per-account record: balance, blacklist flag and minter status.
///
/// Seeds: ["ledger_entry", ledger, account]
#[account]
#[derive(InitSpace, Default)]
pub struct LedgerEntry {
    pub ledger: Pubkey,
    pub account: Pubkey,
    pub balance: u64,
    pub blacklisted: bool,
    pub is_minter: bool,
    /// Only meaningful while `is_minter` is set
    pub minter_allowance: u64,
    pub bump: u8,
}

impl LedgerEntry {
    /// Clearing minter status always clears the allowance with it.
    pub fn apply_minter_flag(&mut self, is_minter: bool) {
        self.is_minter = is_minter;
        if !is_minter {
            self.minter_allowance = 0;
        }
    }

    pub fn is_opened(&self) -> bool {
        self.ledger != Pubkey::default()
    }
}

/// Spending allowance granted by `owner` to `spender`.
///
/// Seeds: ["allowance", ledger, owner, spender]
#[account]
#[derive(InitSpace, Default)]
pub struct AllowanceEntry {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl AllowanceEntry {
    pub fn is_opened(&self) -> bool {
        self.ledger != Pubkey::default()
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BalancePair {
    pub first: u64,
    pub second: u64,
}

pub fn entry_address(ledger: &Pubkey, account: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[crate::ENTRY_SEED, ledger.as_ref(), account.as_ref()],
        &crate::ID,
    )
    .0
}

pub fn allowance_address(ledger: &Pubkey, owner: &Pubkey, spender: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[crate::ALLOWANCE_SEED, ledger.as_ref(), owner.as_ref(), spender.as_ref()],
        &crate::ID,
    )
    .0
}

/// Reads ledger entries supplied as remaining accounts, rejecting anything
/// that is not an entry of `ledger`.
pub fn load_entries(ledger: &Pubkey, infos: &[AccountInfo]) -> Result<Vec<LedgerEntry>> {
    let mut entries = Vec::with_capacity(infos.len());
    for info in infos {
        require_keys_eq!(*info.owner, crate::ID, LedgerError::InvalidEntryAccount);
        let data = info.try_borrow_data()?;
        let entry = LedgerEntry::try_deserialize(&mut &data[..])?;
        require_keys_eq!(entry.ledger, *ledger, LedgerError::EntryMismatch);
        entries.push(entry);
    }
    Ok(entries)
}

pub fn any_blacklisted<'a>(entries: impl IntoIterator<Item = &'a LedgerEntry>) -> bool {
    entries.into_iter().any(|entry| entry.blacklisted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            anchor_lang::error::Error::ProgramError(_) => u32::MAX,
        }
    }

    #[test]
    fn test_transfer_ownership_moves_writer() {
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let mut ledger = Ledger {
            owner: first,
            total_supply: 10,
        };

        let err = ledger.transfer_ownership(&second, second).unwrap_err();
        assert_eq!(error_code(err), u32::from(LedgerError::Unauthorized));

        let err = ledger.transfer_ownership(&first, Pubkey::default()).unwrap_err();
        assert_eq!(error_code(err), u32::from(LedgerError::ZeroAddress));
        assert_eq!(ledger.owner, first);

        assert_eq!(ledger.transfer_ownership(&first, second).unwrap(), first);
        assert_eq!(ledger.owner, second);
        assert_eq!(ledger.total_supply, 10);

        // Previous writer is locked out
        let err = ledger.transfer_ownership(&first, first).unwrap_err();
        assert_eq!(error_code(err), u32::from(LedgerError::Unauthorized));
    }

    #[test]
    fn test_clearing_minter_zeroes_allowance() {
        let mut entry = LedgerEntry {
            is_minter: true,
            minter_allowance: 500,
            balance: 42,
            ..Default::default()
        };

        entry.apply_minter_flag(false);

        assert!(!entry.is_minter);
        assert_eq!(entry.minter_allowance, 0);
        // Balance is not minter state
        assert_eq!(entry.balance, 42);
    }

    #[test]
    fn test_setting_minter_keeps_allowance() {
        let mut entry = LedgerEntry {
            minter_allowance: 7,
            ..Default::default()
        };

        entry.apply_minter_flag(true);

        assert!(entry.is_minter);
        assert_eq!(entry.minter_allowance, 7);
    }

    #[test]
    fn test_entry_addresses_are_distinct_per_ledger_and_account() {
        let ledger_a = Pubkey::new_unique();
        let ledger_b = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        assert_eq!(entry_address(&ledger_a, &alice), entry_address(&ledger_a, &alice));
        assert_ne!(entry_address(&ledger_a, &alice), entry_address(&ledger_a, &bob));
        assert_ne!(entry_address(&ledger_a, &alice), entry_address(&ledger_b, &alice));
    }

    #[test]
    fn test_padding_variants_do_not_collide() {
        // Keys that differ only by where the zero padding sits must map to
        // different records.
        let ledger = Pubkey::new_unique();
        let mut left = [0u8; 32];
        let mut right = [0u8; 32];
        left[31] = 0xab;
        right[0] = 0xab;

        assert_ne!(
            entry_address(&ledger, &Pubkey::new_from_array(left)),
            entry_address(&ledger, &Pubkey::new_from_array(right))
        );
    }

    #[test]
    fn test_allowance_address_is_directional() {
        let ledger = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        assert_ne!(
            allowance_address(&ledger, &alice, &bob),
            allowance_address(&ledger, &bob, &alice)
        );
    }

    #[test]
    fn test_any_blacklisted() {
        let clean = LedgerEntry::default();
        let flagged = LedgerEntry {
            blacklisted: true,
            ..Default::default()
        };

        assert!(!any_blacklisted([&clean, &clean]));
        assert!(any_blacklisted([&clean, &flagged]));
        assert!(!any_blacklisted(std::iter::empty::<&LedgerEntry>()));
    }
}
