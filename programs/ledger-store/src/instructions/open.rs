use anchor_lang::prelude::*;
use crate::state::*;
use crate::{ALLOWANCE_SEED, ENTRY_SEED};

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct OpenEntry<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + LedgerEntry::INIT_SPACE,
        seeds = [ENTRY_SEED, ledger.key().as_ref(), account.as_ref()],
        bump
    )]
    pub entry: Account<'info, LedgerEntry>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(owner: Pubkey, spender: Pubkey)]
pub struct OpenAllowance<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + AllowanceEntry::INIT_SPACE,
        seeds = [ALLOWANCE_SEED, ledger.key().as_ref(), owner.as_ref(), spender.as_ref()],
        bump
    )]
    pub allowance: Account<'info, AllowanceEntry>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn open_entry(ctx: Context<OpenEntry>, account: Pubkey) -> Result<()> {
    let entry = &mut ctx.accounts.entry;

    if entry.is_opened() {
        msg!("Entry already open for {}", account);
        return Ok(());
    }

    entry.ledger = ctx.accounts.ledger.key();
    entry.account = account;
    entry.bump = ctx.bumps.entry;

    msg!("Opened ledger entry for {}", account);
    Ok(())
}

pub fn open_allowance(ctx: Context<OpenAllowance>, owner: Pubkey, spender: Pubkey) -> Result<()> {
    let allowance = &mut ctx.accounts.allowance;

    if allowance.is_opened() {
        msg!("Allowance already open: {} -> {}", owner, spender);
        return Ok(());
    }

    allowance.ledger = ctx.accounts.ledger.key();
    allowance.owner = owner;
    allowance.spender = spender;
    allowance.bump = ctx.bumps.allowance;

    msg!("Opened allowance: {} -> {}", owner, spender);
    Ok(())
}
