use anchor_lang::prelude::*;
use ledger_store::cpi::accounts::{SetAllowed, SetBalances, SetEntry, UpdateLedger};
use ledger_store::{AllowanceEntry, LedgerEntry};
use crate::constants::TOKEN_AUTHORITY_SEED;
use crate::rules::TransferPlan;
use crate::state::FiatToken;

/// Ledger writes signed by one token's authority PDA.
///
/// The ledger only accepts them while that PDA is `Ledger.owner`.
pub struct LedgerWriter<'info> {
    token: Pubkey,
    authority_bump: u8,
    authority: AccountInfo<'info>,
    ledger: AccountInfo<'info>,
    ledger_program: AccountInfo<'info>,
}

impl<'info> LedgerWriter<'info> {
    pub fn new(
        token: &Account<'info, FiatToken>,
        authority: AccountInfo<'info>,
        ledger: AccountInfo<'info>,
        ledger_program: AccountInfo<'info>,
    ) -> Self {
        Self {
            token: token.key(),
            authority_bump: token.authority_bump,
            authority,
            ledger,
            ledger_program,
        }
    }

    fn signed<R>(&self, call: impl FnOnce(&[&[&[u8]]]) -> Result<R>) -> Result<R> {
        let bump = [self.authority_bump];
        let seeds: [&[u8]; 3] = [TOKEN_AUTHORITY_SEED, self.token.as_ref(), &bump];
        call(&[&seeds[..]])
    }

    fn entry_accounts(&self, entry: &Account<'info, LedgerEntry>) -> SetEntry<'info> {
        SetEntry {
            ledger: self.ledger.clone(),
            entry: entry.to_account_info(),
            owner: self.authority.clone(),
        }
    }

    pub fn set_balance(&self, entry: &Account<'info, LedgerEntry>, balance: u64) -> Result<()> {
        self.signed(|seeds| {
            ledger_store::cpi::set_balance(
                CpiContext::new_with_signer(self.ledger_program.clone(), self.entry_accounts(entry), seeds),
                balance,
            )
        })
    }

    /// Writes both transfer legs; a self-transfer writes nothing.
    pub fn apply_transfer(
        &self,
        from: &Account<'info, LedgerEntry>,
        to: &Account<'info, LedgerEntry>,
        plan: &TransferPlan,
    ) -> Result<()> {
        if plan.self_transfer {
            return Ok(());
        }
        self.signed(|seeds| {
            ledger_store::cpi::set_balances(
                CpiContext::new_with_signer(
                    self.ledger_program.clone(),
                    SetBalances {
                        ledger: self.ledger.clone(),
                        first: from.to_account_info(),
                        second: to.to_account_info(),
                        owner: self.authority.clone(),
                    },
                    seeds,
                ),
                plan.from_balance,
                plan.to_balance,
            )
        })
    }

    pub fn set_allowed(&self, allowance: &Account<'info, AllowanceEntry>, amount: u64) -> Result<()> {
        self.signed(|seeds| {
            ledger_store::cpi::set_allowed(
                CpiContext::new_with_signer(
                    self.ledger_program.clone(),
                    SetAllowed {
                        ledger: self.ledger.clone(),
                        allowance: allowance.to_account_info(),
                        owner: self.authority.clone(),
                    },
                    seeds,
                ),
                amount,
            )
        })
    }

    pub fn set_total_supply(&self, total_supply: u64) -> Result<()> {
        self.signed(|seeds| {
            ledger_store::cpi::set_total_supply(
                CpiContext::new_with_signer(
                    self.ledger_program.clone(),
                    UpdateLedger {
                        ledger: self.ledger.clone(),
                        owner: self.authority.clone(),
                    },
                    seeds,
                ),
                total_supply,
            )
        })
    }

    pub fn set_blacklisted(&self, entry: &Account<'info, LedgerEntry>, blacklisted: bool) -> Result<()> {
        self.signed(|seeds| {
            ledger_store::cpi::set_blacklisted(
                CpiContext::new_with_signer(self.ledger_program.clone(), self.entry_accounts(entry), seeds),
                blacklisted,
            )
        })
    }

    /// Clearing the flag also clears the allowance inside the ledger
    pub fn set_minter(&self, entry: &Account<'info, LedgerEntry>, is_minter: bool) -> Result<()> {
        self.signed(|seeds| {
            ledger_store::cpi::set_minter(
                CpiContext::new_with_signer(self.ledger_program.clone(), self.entry_accounts(entry), seeds),
                is_minter,
            )
        })
    }

    pub fn set_minter_allowed(&self, entry: &Account<'info, LedgerEntry>, allowance: u64) -> Result<()> {
        self.signed(|seeds| {
            ledger_store::cpi::set_minter_allowed(
                CpiContext::new_with_signer(self.ledger_program.clone(), self.entry_accounts(entry), seeds),
                allowance,
            )
        })
    }

    pub fn transfer_ownership(&self, new_owner: Pubkey) -> Result<()> {
        self.signed(|seeds| {
            ledger_store::cpi::transfer_ownership(
                CpiContext::new_with_signer(
                    self.ledger_program.clone(),
                    UpdateLedger {
                        ledger: self.ledger.clone(),
                        owner: self.authority.clone(),
                    },
                    seeds,
                ),
                new_owner,
            )
        })
    }
}
