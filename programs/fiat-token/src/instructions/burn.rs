use anchor_lang::prelude::*;
use ledger_store::program::LedgerStore;
use ledger_store::{Ledger, LedgerEntry};
use crate::constants::TOKEN_AUTHORITY_SEED;
use crate::errors::TokenError;
use crate::events::{Burn, Transfer};
use crate::ledger_cpi::LedgerWriter;
use crate::rules::plan_burn;
use crate::state::FiatToken;

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(has_one = ledger @ TokenError::LedgerMismatch)]
    pub token: Account<'info, FiatToken>,

    /// CHECK: Token signer PDA, validated by seeds
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED, token.key().as_ref()],
        bump = token.authority_bump
    )]
    pub token_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        has_one = ledger @ TokenError::EntryMismatch,
        constraint = burner_entry.account == burner.key() @ TokenError::EntryMismatch,
    )]
    pub burner_entry: Account<'info, LedgerEntry>,

    pub burner: Signer<'info>,

    pub ledger_program: Program<'info, LedgerStore>,
}

pub fn handler(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;

    let plan = plan_burn(
        &accounts.token,
        &accounts.burner_entry,
        accounts.ledger.total_supply,
        amount,
    )?;

    let writer = LedgerWriter::new(
        &accounts.token,
        accounts.token_authority.to_account_info(),
        accounts.ledger.to_account_info(),
        accounts.ledger_program.to_account_info(),
    );
    writer.set_total_supply(plan.total_supply)?;
    writer.set_balance(&accounts.burner_entry, plan.balance)?;

    emit!(Burn {
        burner: accounts.burner.key(),
        amount,
    });
    emit!(Transfer {
        from: accounts.burner.key(),
        to: Pubkey::default(),
        value: amount,
    });

    msg!("Burned {} from {}", amount, accounts.burner.key());
    msg!("Total supply: {}", plan.total_supply);

    Ok(())
}
