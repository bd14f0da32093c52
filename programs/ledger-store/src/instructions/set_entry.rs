use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::*;

/// Owner-gated write to a single ledger entry
#[derive(Accounts)]
pub struct SetEntry<'info> {
    #[account(has_one = owner @ LedgerError::Unauthorized)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        has_one = ledger @ LedgerError::EntryMismatch,
    )]
    pub entry: Account<'info, LedgerEntry>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetBalances<'info> {
    #[account(has_one = owner @ LedgerError::Unauthorized)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        has_one = ledger @ LedgerError::EntryMismatch,
    )]
    pub first: Account<'info, LedgerEntry>,

    /// Must differ from `first`: both are written back on exit and the
    /// second copy would silently win
    #[account(
        mut,
        has_one = ledger @ LedgerError::EntryMismatch,
        constraint = second.key() != first.key() @ LedgerError::DuplicateEntry,
    )]
    pub second: Account<'info, LedgerEntry>,

    pub owner: Signer<'info>,
}

pub fn set_balance(ctx: Context<SetEntry>, balance: u64) -> Result<()> {
    let entry = &mut ctx.accounts.entry;
    entry.balance = balance;
    msg!("Balance of {} set to {}", entry.account, balance);
    Ok(())
}

pub fn set_balances(ctx: Context<SetBalances>, first: u64, second: u64) -> Result<()> {
    ctx.accounts.first.balance = first;
    ctx.accounts.second.balance = second;
    msg!(
        "Balances set: {}={} {}={}",
        ctx.accounts.first.account,
        first,
        ctx.accounts.second.account,
        second
    );
    Ok(())
}

pub fn set_blacklisted(ctx: Context<SetEntry>, blacklisted: bool) -> Result<()> {
    let entry = &mut ctx.accounts.entry;
    entry.blacklisted = blacklisted;
    msg!("Blacklist flag of {} set to {}", entry.account, blacklisted);
    Ok(())
}

pub fn set_minter(ctx: Context<SetEntry>, is_minter: bool) -> Result<()> {
    let entry = &mut ctx.accounts.entry;
    entry.apply_minter_flag(is_minter);
    msg!("Minter flag of {} set to {}", entry.account, is_minter);
    Ok(())
}

pub fn set_minter_allowed(ctx: Context<SetEntry>, allowance: u64) -> Result<()> {
    let entry = &mut ctx.accounts.entry;
    entry.minter_allowance = allowance;
    msg!("Minter allowance of {} set to {}", entry.account, allowance);
    Ok(())
}
