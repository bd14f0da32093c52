use anchor_lang::prelude::*;
use ledger_store::state::any_blacklisted;
use ledger_store::{AllowanceEntry, LedgerEntry};
use crate::errors::TokenError;
use crate::roles::Role;
use crate::state::FiatToken;

// Every rule below only reads. Handlers run the rule first and issue ledger
// writes from the returned plan, so a failed check never leaves a partial write.

/// New balances after a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferPlan {
    pub from_balance: u64,
    pub to_balance: u64,
    /// Sender and recipient are the same account: nothing to write
    pub self_transfer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferFromPlan {
    pub transfer: TransferPlan,
    pub allowance: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintPlan {
    pub minter_allowance: u64,
    pub to_balance: u64,
    pub total_supply: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnPlan {
    pub balance: u64,
    pub total_supply: u64,
}

pub fn plan_transfer(
    token: &FiatToken,
    from: &LedgerEntry,
    to: &LedgerEntry,
    amount: u64,
) -> Result<TransferPlan> {
    token.require_not_paused()?;
    require!(!any_blacklisted([from, to]), TokenError::AccountBlacklisted);
    require_keys_neq!(to.account, Pubkey::default(), TokenError::ZeroAddress);
    require!(amount <= from.balance, TokenError::InsufficientBalance);

    if from.account == to.account {
        return Ok(TransferPlan {
            from_balance: from.balance,
            to_balance: to.balance,
            self_transfer: true,
        });
    }

    Ok(TransferPlan {
        from_balance: from.balance - amount,
        to_balance: to
            .balance
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?,
        self_transfer: false,
    })
}

pub fn plan_transfer_from(
    token: &FiatToken,
    spender: &LedgerEntry,
    from: &LedgerEntry,
    to: &LedgerEntry,
    allowance: &AllowanceEntry,
    amount: u64,
) -> Result<TransferFromPlan> {
    require!(!spender.blacklisted, TokenError::AccountBlacklisted);
    require_keys_eq!(allowance.owner, from.account, TokenError::EntryMismatch);
    require_keys_eq!(allowance.spender, spender.account, TokenError::EntryMismatch);

    let transfer = plan_transfer(token, from, to, amount)?;
    require!(amount <= allowance.amount, TokenError::InsufficientAllowance);

    Ok(TransferFromPlan {
        transfer,
        allowance: allowance.amount - amount,
    })
}

pub fn check_approve(
    token: &FiatToken,
    owner: &LedgerEntry,
    spender: &LedgerEntry,
    allowance: &AllowanceEntry,
) -> Result<()> {
    token.require_not_paused()?;
    require!(!any_blacklisted([owner, spender]), TokenError::AccountBlacklisted);
    require_keys_neq!(spender.account, Pubkey::default(), TokenError::ZeroAddress);
    require_keys_eq!(allowance.owner, owner.account, TokenError::EntryMismatch);
    require_keys_eq!(allowance.spender, spender.account, TokenError::EntryMismatch);
    Ok(())
}

pub fn plan_mint(
    token: &FiatToken,
    minter: &LedgerEntry,
    to: &LedgerEntry,
    total_supply: u64,
    amount: u64,
) -> Result<MintPlan> {
    token.require_active()?;
    token.require_not_paused()?;
    require!(minter.is_minter, TokenError::NotMinter);
    require!(!any_blacklisted([minter, to]), TokenError::AccountBlacklisted);
    require_keys_neq!(to.account, Pubkey::default(), TokenError::ZeroAddress);
    require!(amount > 0, TokenError::InvalidAmount);
    require!(amount <= minter.minter_allowance, TokenError::InsufficientMinterAllowance);

    Ok(MintPlan {
        minter_allowance: minter.minter_allowance - amount,
        to_balance: to
            .balance
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?,
        total_supply: total_supply
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?,
    })
}

pub fn plan_burn(
    token: &FiatToken,
    burner: &LedgerEntry,
    total_supply: u64,
    amount: u64,
) -> Result<BurnPlan> {
    token.require_active()?;
    token.require_not_paused()?;
    require!(burner.is_minter, TokenError::NotMinter);
    require!(!burner.blacklisted, TokenError::AccountBlacklisted);
    require!(amount > 0, TokenError::InvalidAmount);
    require!(amount <= burner.balance, TokenError::InsufficientBalance);

    Ok(BurnPlan {
        balance: burner.balance - amount,
        total_supply: total_supply
            .checked_sub(amount)
            .ok_or(TokenError::ArithmeticOverflow)?,
    })
}

/// Minter administration ignores pause and blacklist state
pub fn check_minter_admin(token: &FiatToken, signer: &Pubkey) -> Result<()> {
    token.require_active()?;
    token.require_role(Role::MasterMinter, signer)
}

/// Returns whether the flag actually changes; repeating a call is a no-op.
pub fn plan_blacklist(
    token: &FiatToken,
    signer: &Pubkey,
    entry: &LedgerEntry,
    blacklisted: bool,
) -> Result<bool> {
    token.require_active()?;
    token.require_role(Role::Blacklister, signer)?;
    Ok(entry.blacklisted != blacklisted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::*;
    use crate::test_utils::error_code;

    /// In-memory ledger that applies plans the way the handlers issue writes
    struct Book {
        ledger: Pubkey,
        entries: Vec<LedgerEntry>,
        allowances: Vec<AllowanceEntry>,
        total_supply: u64,
    }

    impl Book {
        fn new() -> Self {
            Self {
                ledger: Pubkey::new_unique(),
                entries: Vec::new(),
                allowances: Vec::new(),
                total_supply: 0,
            }
        }

        fn open(&mut self, account: Pubkey) -> Pubkey {
            self.entries.push(LedgerEntry {
                ledger: self.ledger,
                account,
                ..Default::default()
            });
            account
        }

        fn entry(&self, account: &Pubkey) -> LedgerEntry {
            self.entries.iter().find(|e| e.account == *account).cloned().unwrap()
        }

        fn entry_mut(&mut self, account: &Pubkey) -> &mut LedgerEntry {
            self.entries.iter_mut().find(|e| e.account == *account).unwrap()
        }

        fn allowance(&mut self, owner: &Pubkey, spender: &Pubkey) -> AllowanceEntry {
            if let Some(found) = self
                .allowances
                .iter()
                .find(|a| a.owner == *owner && a.spender == *spender)
            {
                return found.clone();
            }
            let fresh = AllowanceEntry {
                ledger: self.ledger,
                owner: *owner,
                spender: *spender,
                ..Default::default()
            };
            self.allowances.push(fresh.clone());
            fresh
        }

        fn set_allowance(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u64) {
            self.allowance(owner, spender);
            let entry = self
                .allowances
                .iter_mut()
                .find(|a| a.owner == *owner && a.spender == *spender)
                .unwrap();
            entry.amount = amount;
        }

        fn configure_minter(&mut self, token: &FiatToken, signer: &Pubkey, minter: &Pubkey, allowance: u64) -> Result<()> {
            check_minter_admin(token, signer)?;
            let entry = self.entry_mut(minter);
            entry.apply_minter_flag(true);
            entry.minter_allowance = allowance;
            Ok(())
        }

        fn mint(&mut self, token: &FiatToken, minter: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
            let plan = plan_mint(token, &self.entry(minter), &self.entry(to), self.total_supply, amount)?;
            self.entry_mut(minter).minter_allowance = plan.minter_allowance;
            self.entry_mut(to).balance = plan.to_balance;
            self.total_supply = plan.total_supply;
            Ok(())
        }

        fn burn(&mut self, token: &FiatToken, burner: &Pubkey, amount: u64) -> Result<()> {
            let plan = plan_burn(token, &self.entry(burner), self.total_supply, amount)?;
            self.entry_mut(burner).balance = plan.balance;
            self.total_supply = plan.total_supply;
            Ok(())
        }

        fn transfer(&mut self, token: &FiatToken, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
            let plan = plan_transfer(token, &self.entry(from), &self.entry(to), amount)?;
            if !plan.self_transfer {
                self.entry_mut(from).balance = plan.from_balance;
                self.entry_mut(to).balance = plan.to_balance;
            }
            Ok(())
        }

        fn transfer_from(&mut self, token: &FiatToken, spender: &Pubkey, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
            let allowance = self.allowance(from, spender);
            let plan = plan_transfer_from(
                token,
                &self.entry(spender),
                &self.entry(from),
                &self.entry(to),
                &allowance,
                amount,
            )?;
            self.set_allowance(from, spender, plan.allowance);
            if !plan.transfer.self_transfer {
                self.entry_mut(from).balance = plan.transfer.from_balance;
                self.entry_mut(to).balance = plan.transfer.to_balance;
            }
            Ok(())
        }

        fn blacklist(&mut self, token: &FiatToken, signer: &Pubkey, account: &Pubkey, flag: bool) -> Result<bool> {
            let changed = plan_blacklist(token, signer, &self.entry(account), flag)?;
            if changed {
                self.entry_mut(account).blacklisted = flag;
            }
            Ok(changed)
        }

        fn conserved(&self) -> bool {
            let sum: u128 = self.entries.iter().map(|e| e.balance as u128).sum();
            sum == self.total_supply as u128
        }
    }

    fn setup() -> (Actors, Book, FiatToken) {
        let actors = Actors::new();
        let mut book = Book::new();
        let token = token(&actors, book.ledger, Pubkey::default());
        book.open(actors.master_minter);
        (actors, book, token)
    }

    #[test]
    fn test_mint_scenario() {
        let (actors, mut book, token) = setup();
        let minter = book.open(Pubkey::new_unique());
        let alice = book.open(Pubkey::new_unique());

        book.configure_minter(&token, &actors.master_minter, &minter, 100).unwrap();
        book.mint(&token, &minter, &alice, 100).unwrap();

        assert_eq!(book.entry(&alice).balance, 100);
        assert_eq!(book.total_supply, 100);
        assert_eq!(book.entry(&minter).minter_allowance, 0);
        assert!(book.conserved());
    }

    #[test]
    fn test_mint_decrements_allowance_and_never_underflows() {
        let (actors, mut book, token) = setup();
        let minter = book.open(Pubkey::new_unique());
        let alice = book.open(Pubkey::new_unique());
        book.configure_minter(&token, &actors.master_minter, &minter, 50).unwrap();

        book.mint(&token, &minter, &alice, 30).unwrap();
        assert_eq!(book.entry(&minter).minter_allowance, 20);

        let err = book.mint(&token, &minter, &alice, 21).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::InsufficientMinterAllowance));
        assert_eq!(book.entry(&minter).minter_allowance, 20);
        assert_eq!(book.total_supply, 30);
    }

    #[test]
    fn test_mint_guards() {
        let (actors, mut book, mut token) = setup();
        let minter = book.open(Pubkey::new_unique());
        let stranger = book.open(Pubkey::new_unique());
        let alice = book.open(Pubkey::new_unique());
        let zero = book.open(Pubkey::default());
        book.configure_minter(&token, &actors.master_minter, &minter, 1_000).unwrap();

        let err = book.mint(&token, &stranger, &alice, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::NotMinter));

        let err = book.mint(&token, &minter, &alice, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::InvalidAmount));

        let err = book.mint(&token, &minter, &zero, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::ZeroAddress));

        book.entry_mut(&alice).blacklisted = true;
        let err = book.mint(&token, &minter, &alice, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::AccountBlacklisted));
        book.entry_mut(&alice).blacklisted = false;

        book.entry_mut(&minter).blacklisted = true;
        let err = book.mint(&token, &minter, &alice, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::AccountBlacklisted));
        book.entry_mut(&minter).blacklisted = false;

        token.paused = true;
        let err = book.mint(&token, &minter, &alice, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::ContractPaused));

        assert_eq!(book.total_supply, 0);
    }

    #[test]
    fn test_mint_overflow_reverts() {
        let (actors, mut book, token) = setup();
        let minter = book.open(Pubkey::new_unique());
        let alice = book.open(Pubkey::new_unique());
        book.configure_minter(&token, &actors.master_minter, &minter, u64::MAX).unwrap();

        book.mint(&token, &minter, &alice, u64::MAX).unwrap();
        let err = book.mint(&token, &minter, &alice, 1).unwrap_err();
        // Allowance is exhausted first
        assert_eq!(error_code(err), u32::from(TokenError::InsufficientMinterAllowance));

        book.configure_minter(&token, &actors.master_minter, &minter, 1).unwrap();
        let err = book.mint(&token, &minter, &alice, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::ArithmeticOverflow));
    }

    #[test]
    fn test_master_minter_bypasses_blacklist() {
        let (actors, mut book, token) = setup();
        let minter = book.open(Pubkey::new_unique());

        book.blacklist(&token, &actors.blacklister, &actors.master_minter, true).unwrap();
        book.blacklist(&token, &actors.blacklister, &minter, true).unwrap();

        book.configure_minter(&token, &actors.master_minter, &minter, 50).unwrap();
        assert!(book.entry(&minter).is_minter);
        assert_eq!(book.entry(&minter).minter_allowance, 50);
    }

    #[test]
    fn test_minter_admin_works_while_paused() {
        let (actors, mut book, mut token) = setup();
        let minter = book.open(Pubkey::new_unique());
        token.set_paused(&actors.pauser, true).unwrap();

        book.configure_minter(&token, &actors.master_minter, &minter, 10).unwrap();
        assert!(book.entry(&minter).is_minter);
    }

    #[test]
    fn test_minter_admin_requires_master_minter() {
        let (actors, mut book, token) = setup();
        let minter = book.open(Pubkey::new_unique());

        let err = book.configure_minter(&token, &actors.owner, &minter, 10).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::Unauthorized));
    }

    #[test]
    fn test_remove_minter_keeps_balances() {
        let (actors, mut book, token) = setup();
        let minter = book.open(Pubkey::new_unique());
        book.configure_minter(&token, &actors.master_minter, &minter, 100).unwrap();
        book.mint(&token, &minter, &minter, 40).unwrap();

        check_minter_admin(&token, &actors.master_minter).unwrap();
        book.entry_mut(&minter).apply_minter_flag(false);

        let entry = book.entry(&minter);
        assert!(!entry.is_minter);
        assert_eq!(entry.minter_allowance, 0);
        assert_eq!(entry.balance, 40);
        assert_eq!(book.total_supply, 40);
    }

    #[test]
    fn test_pause_gates_transfer_until_unpaused() {
        let (actors, mut book, mut token) = setup();
        let minter = book.open(Pubkey::new_unique());
        let alice = book.open(Pubkey::new_unique());
        let bob = book.open(Pubkey::new_unique());
        book.configure_minter(&token, &actors.master_minter, &minter, 100).unwrap();
        book.mint(&token, &minter, &alice, 100).unwrap();

        token.set_paused(&actors.pauser, true).unwrap();
        let err = book.transfer(&token, &alice, &bob, 10).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::ContractPaused));

        token.set_paused(&actors.pauser, false).unwrap();
        book.transfer(&token, &alice, &bob, 10).unwrap();

        assert_eq!(book.entry(&alice).balance, 90);
        assert_eq!(book.entry(&bob).balance, 10);
        assert!(book.conserved());
    }

    #[test]
    fn test_transfer_guards() {
        let (actors, mut book, token) = setup();
        let minter = book.open(Pubkey::new_unique());
        let alice = book.open(Pubkey::new_unique());
        let bob = book.open(Pubkey::new_unique());
        let zero = book.open(Pubkey::default());
        book.configure_minter(&token, &actors.master_minter, &minter, 100).unwrap();
        book.mint(&token, &minter, &alice, 10).unwrap();

        let err = book.transfer(&token, &alice, &bob, 11).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::InsufficientBalance));

        let err = book.transfer(&token, &alice, &zero, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::ZeroAddress));

        book.blacklist(&token, &actors.blacklister, &bob, true).unwrap();
        let err = book.transfer(&token, &alice, &bob, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::AccountBlacklisted));

        book.blacklist(&token, &actors.blacklister, &bob, false).unwrap();
        book.blacklist(&token, &actors.blacklister, &alice, true).unwrap();
        let err = book.transfer(&token, &alice, &bob, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::AccountBlacklisted));

        assert_eq!(book.entry(&alice).balance, 10);
        assert!(book.conserved());
    }

    #[test]
    fn test_self_transfer_leaves_balance() {
        let (actors, mut book, token) = setup();
        let minter = book.open(Pubkey::new_unique());
        let alice = book.open(Pubkey::new_unique());
        book.configure_minter(&token, &actors.master_minter, &minter, 100).unwrap();
        book.mint(&token, &minter, &alice, 10).unwrap();

        let plan = plan_transfer(&token, &book.entry(&alice), &book.entry(&alice), 10).unwrap();
        assert!(plan.self_transfer);

        book.transfer(&token, &alice, &alice, 10).unwrap();
        assert_eq!(book.entry(&alice).balance, 10);
    }

    #[test]
    fn test_transfer_from_spends_allowance() {
        let (actors, mut book, token) = setup();
        let minter = book.open(Pubkey::new_unique());
        let alice = book.open(Pubkey::new_unique());
        let bob = book.open(Pubkey::new_unique());
        let carol = book.open(Pubkey::new_unique());
        book.configure_minter(&token, &actors.master_minter, &minter, 100).unwrap();
        book.mint(&token, &minter, &alice, 100).unwrap();

        let approval = book.allowance(&alice, &carol);
        check_approve(&token, &book.entry(&alice), &book.entry(&carol), &approval).unwrap();
        book.set_allowance(&alice, &carol, 30);

        book.transfer_from(&token, &carol, &alice, &bob, 20).unwrap();
        assert_eq!(book.allowance(&alice, &carol).amount, 10);
        assert_eq!(book.entry(&bob).balance, 20);

        let err = book.transfer_from(&token, &carol, &alice, &bob, 11).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::InsufficientAllowance));

        // A blacklisted spender cannot move funds even with allowance left
        book.blacklist(&token, &actors.blacklister, &carol, true).unwrap();
        let err = book.transfer_from(&token, &carol, &alice, &bob, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::AccountBlacklisted));

        assert_eq!(book.allowance(&alice, &carol).amount, 10);
        assert!(book.conserved());
    }

    #[test]
    fn test_transfer_from_rejects_foreign_allowance() {
        let (_, mut book, token) = setup();
        let alice = book.open(Pubkey::new_unique());
        let bob = book.open(Pubkey::new_unique());
        let carol = book.open(Pubkey::new_unique());
        book.set_allowance(&bob, &carol, 50);

        let foreign = book.allowance(&bob, &carol);
        let err = plan_transfer_from(
            &token,
            &book.entry(&carol),
            &book.entry(&alice),
            &book.entry(&bob),
            &foreign,
            1,
        )
        .unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::EntryMismatch));
    }

    #[test]
    fn test_approve_guards() {
        let (actors, mut book, mut token) = setup();
        let alice = book.open(Pubkey::new_unique());
        let carol = book.open(Pubkey::new_unique());
        let approval = book.allowance(&alice, &carol);

        book.blacklist(&token, &actors.blacklister, &carol, true).unwrap();
        let err = check_approve(&token, &book.entry(&alice), &book.entry(&carol), &approval).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::AccountBlacklisted));

        book.blacklist(&token, &actors.blacklister, &carol, false).unwrap();
        token.paused = true;
        let err = check_approve(&token, &book.entry(&alice), &book.entry(&carol), &approval).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::ContractPaused));
    }

    #[test]
    fn test_burn() {
        let (actors, mut book, mut token) = setup();
        let minter = book.open(Pubkey::new_unique());
        let alice = book.open(Pubkey::new_unique());
        book.configure_minter(&token, &actors.master_minter, &minter, 100).unwrap();
        book.mint(&token, &minter, &minter, 60).unwrap();
        book.mint(&token, &minter, &alice, 40).unwrap();

        book.burn(&token, &minter, 25).unwrap();
        assert_eq!(book.entry(&minter).balance, 35);
        assert_eq!(book.total_supply, 75);
        // Burning leaves the remaining grant alone
        assert_eq!(book.entry(&minter).minter_allowance, 0);
        assert!(book.conserved());

        let err = book.burn(&token, &alice, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::NotMinter));

        let err = book.burn(&token, &minter, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::InvalidAmount));

        let err = book.burn(&token, &minter, 36).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::InsufficientBalance));

        book.blacklist(&token, &actors.blacklister, &minter, true).unwrap();
        let err = book.burn(&token, &minter, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::AccountBlacklisted));
        book.blacklist(&token, &actors.blacklister, &minter, false).unwrap();

        token.paused = true;
        let err = book.burn(&token, &minter, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::ContractPaused));
        assert!(book.conserved());
    }

    #[test]
    fn test_blacklist_is_idempotent() {
        let (actors, mut book, token) = setup();
        let alice = book.open(Pubkey::new_unique());

        assert!(book.blacklist(&token, &actors.blacklister, &alice, true).unwrap());
        let once = book.entry(&alice);
        assert!(!book.blacklist(&token, &actors.blacklister, &alice, true).unwrap());
        assert_eq!(book.entry(&alice).blacklisted, once.blacklisted);

        let bob = book.open(Pubkey::new_unique());
        assert!(!book.blacklist(&token, &actors.blacklister, &bob, false).unwrap());
        assert!(!book.entry(&bob).blacklisted);
    }

    #[test]
    fn test_blacklist_requires_blacklister_but_not_unpaused() {
        let (actors, mut book, mut token) = setup();
        let alice = book.open(Pubkey::new_unique());

        let err = book.blacklist(&token, &actors.owner, &alice, true).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::Unauthorized));

        token.set_paused(&actors.pauser, true).unwrap();
        assert!(book.blacklist(&token, &actors.blacklister, &alice, true).unwrap());
    }

    #[test]
    fn test_retired_token_cannot_mutate_but_successor_can() {
        let actors = Actors::new();
        let mut book = Book::new();
        let prior_key = Pubkey::new_unique();
        let mut prior = token(&actors, book.ledger, Pubkey::default());
        let current = token(&actors, book.ledger, prior_key);

        let minter = book.open(Pubkey::new_unique());
        let alice = book.open(Pubkey::new_unique());
        book.configure_minter(&prior, &actors.master_minter, &minter, 100).unwrap();
        book.mint(&prior, &minter, &alice, 40).unwrap();

        prior.upgraded_address = Pubkey::new_unique();

        let err = book.mint(&prior, &minter, &alice, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::ContractUpgraded));
        let err = book.configure_minter(&prior, &actors.master_minter, &minter, 5).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::ContractUpgraded));
        let err = book.blacklist(&prior, &actors.blacklister, &alice, true).unwrap_err();
        assert_eq!(error_code(err), u32::from(TokenError::ContractUpgraded));

        // Minter state survived the upgrade in the shared ledger
        book.mint(&current, &minter, &alice, 60).unwrap();
        assert_eq!(book.entry(&alice).balance, 100);
        assert_eq!(book.entry(&minter).minter_allowance, 0);
        assert!(book.conserved());
    }

    #[test]
    fn test_conservation_over_mixed_operations() {
        let (actors, mut book, token) = setup();
        let minter = book.open(Pubkey::new_unique());
        let holders: Vec<Pubkey> = (0..4).map(|_| book.open(Pubkey::new_unique())).collect();
        book.configure_minter(&token, &actors.master_minter, &minter, 10_000).unwrap();

        for (i, holder) in holders.iter().enumerate() {
            book.mint(&token, &minter, holder, 100 * (i as u64 + 1)).unwrap();
            assert!(book.conserved());
        }
        for i in 0..holders.len() {
            let from = holders[i];
            let to = holders[(i + 1) % holders.len()];
            // Failing calls must not disturb conservation either
            let _ = book.transfer(&token, &from, &to, 150);
            assert!(book.conserved());
        }
        book.mint(&token, &minter, &minter, 500).unwrap();
        book.burn(&token, &minter, 200).unwrap();
        assert!(book.conserved());
    }
}
