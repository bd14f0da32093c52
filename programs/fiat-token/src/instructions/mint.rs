use anchor_lang::prelude::*;
use ledger_store::program::LedgerStore;
use ledger_store::{Ledger, LedgerEntry};
use crate::constants::TOKEN_AUTHORITY_SEED;
use crate::errors::TokenError;
use crate::events::{Mint, Transfer};
use crate::ledger_cpi::LedgerWriter;
use crate::rules::plan_mint;
use crate::state::FiatToken;

#[derive(Accounts)]
pub struct MintTokens<'info> {
    #[account(has_one = ledger @ TokenError::LedgerMismatch)]
    pub token: Account<'info, FiatToken>,

    /// CHECK: Token signer PDA, validated by seeds
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED, token.key().as_ref()],
        bump = token.authority_bump
    )]
    pub token_authority: UncheckedAccount<'info>,

    /// Total supply is written through the ledger program
    #[account(mut)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        has_one = ledger @ TokenError::EntryMismatch,
        constraint = minter_entry.account == minter.key() @ TokenError::EntryMismatch,
    )]
    pub minter_entry: Account<'info, LedgerEntry>,

    #[account(
        mut,
        has_one = ledger @ TokenError::EntryMismatch,
    )]
    pub to_entry: Account<'info, LedgerEntry>,

    pub minter: Signer<'info>,

    pub ledger_program: Program<'info, LedgerStore>,
}

pub fn handler(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;

    let plan = plan_mint(
        &accounts.token,
        &accounts.minter_entry,
        &accounts.to_entry,
        accounts.ledger.total_supply,
        amount,
    )?;

    let writer = LedgerWriter::new(
        &accounts.token,
        accounts.token_authority.to_account_info(),
        accounts.ledger.to_account_info(),
        accounts.ledger_program.to_account_info(),
    );
    writer.set_minter_allowed(&accounts.minter_entry, plan.minter_allowance)?;
    writer.set_balance(&accounts.to_entry, plan.to_balance)?;
    writer.set_total_supply(plan.total_supply)?;

    emit!(Mint {
        minter: accounts.minter.key(),
        to: accounts.to_entry.account,
        amount,
    });
    emit!(Transfer {
        from: Pubkey::default(),
        to: accounts.to_entry.account,
        value: amount,
    });

    msg!("Minted {} to {}", amount, accounts.to_entry.account);
    msg!("Minter allowance left: {}", plan.minter_allowance);
    msg!("Total supply: {}", plan.total_supply);

    Ok(())
}
