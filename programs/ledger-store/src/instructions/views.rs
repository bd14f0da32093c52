use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    pub ledger: Account<'info, Ledger>,
}

#[derive(Accounts)]
pub struct ReadEntry<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(has_one = ledger @ LedgerError::EntryMismatch)]
    pub entry: Account<'info, LedgerEntry>,
}

#[derive(Accounts)]
pub struct ReadEntryPair<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(has_one = ledger @ LedgerError::EntryMismatch)]
    pub first: Account<'info, LedgerEntry>,

    #[account(has_one = ledger @ LedgerError::EntryMismatch)]
    pub second: Account<'info, LedgerEntry>,
}

#[derive(Accounts)]
pub struct ReadAllowance<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(has_one = ledger @ LedgerError::EntryMismatch)]
    pub allowance: Account<'info, AllowanceEntry>,
}

pub fn ledger_owner(ctx: Context<ReadLedger>) -> Result<Pubkey> {
    Ok(ctx.accounts.ledger.owner)
}

pub fn get_total_supply(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.ledger.total_supply)
}

pub fn get_balance(ctx: Context<ReadEntry>) -> Result<u64> {
    Ok(ctx.accounts.entry.balance)
}

pub fn get_balances(ctx: Context<ReadEntryPair>) -> Result<BalancePair> {
    Ok(BalancePair {
        first: ctx.accounts.first.balance,
        second: ctx.accounts.second.balance,
    })
}

pub fn get_allowed(ctx: Context<ReadAllowance>) -> Result<u64> {
    Ok(ctx.accounts.allowance.amount)
}

pub fn is_blacklisted(ctx: Context<ReadEntry>) -> Result<bool> {
    Ok(ctx.accounts.entry.blacklisted)
}

pub fn is_any_blacklisted(ctx: Context<ReadLedger>) -> Result<bool> {
    let entries = load_entries(&ctx.accounts.ledger.key(), ctx.remaining_accounts)?;
    Ok(any_blacklisted(&entries))
}

pub fn is_minter(ctx: Context<ReadEntry>) -> Result<bool> {
    Ok(ctx.accounts.entry.is_minter)
}

pub fn get_minter_allowed(ctx: Context<ReadEntry>) -> Result<u64> {
    Ok(ctx.accounts.entry.minter_allowance)
}
