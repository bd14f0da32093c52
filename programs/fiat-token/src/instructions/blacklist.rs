use anchor_lang::prelude::*;
use ledger_store::program::LedgerStore;
use ledger_store::{Ledger, LedgerEntry};
use crate::constants::TOKEN_AUTHORITY_SEED;
use crate::errors::TokenError;
use crate::events::{Blacklisted, UnBlacklisted};
use crate::ledger_cpi::LedgerWriter;
use crate::rules::plan_blacklist;
use crate::state::FiatToken;

#[derive(Accounts)]
pub struct SetBlacklist<'info> {
    #[account(has_one = ledger @ TokenError::LedgerMismatch)]
    pub token: Account<'info, FiatToken>,

    /// CHECK: Token signer PDA, validated by seeds
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED, token.key().as_ref()],
        bump = token.authority_bump
    )]
    pub token_authority: UncheckedAccount<'info>,

    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        has_one = ledger @ TokenError::EntryMismatch,
    )]
    pub entry: Account<'info, LedgerEntry>,

    pub blacklister: Signer<'info>,

    pub ledger_program: Program<'info, LedgerStore>,
}

pub fn handler(ctx: Context<SetBlacklist>, blacklisted: bool) -> Result<()> {
    let accounts = &ctx.accounts;
    let account = accounts.entry.account;

    let changed = plan_blacklist(&accounts.token, &accounts.blacklister.key(), &accounts.entry, blacklisted)?;
    if !changed {
        msg!("{} already has blacklisted = {}", account, blacklisted);
        return Ok(());
    }

    LedgerWriter::new(
        &accounts.token,
        accounts.token_authority.to_account_info(),
        accounts.ledger.to_account_info(),
        accounts.ledger_program.to_account_info(),
    )
    .set_blacklisted(&accounts.entry, blacklisted)?;

    if blacklisted {
        emit!(Blacklisted { account });
        msg!("Blacklisted: {}", account);
    } else {
        emit!(UnBlacklisted { account });
        msg!("Removed from blacklist: {}", account);
    }

    Ok(())
}
