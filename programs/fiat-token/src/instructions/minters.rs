use anchor_lang::prelude::*;
use ledger_store::program::LedgerStore;
use ledger_store::{Ledger, LedgerEntry};
use crate::constants::TOKEN_AUTHORITY_SEED;
use crate::errors::TokenError;
use crate::events::{MinterConfigured, MinterRemoved};
use crate::ledger_cpi::LedgerWriter;
use crate::rules::check_minter_admin;
use crate::state::FiatToken;

#[derive(Accounts)]
pub struct ManageMinter<'info> {
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
    pub minter_entry: Account<'info, LedgerEntry>,

    /// Either a wallet or a MintController authority PDA
    pub master_minter: Signer<'info>,

    pub ledger_program: Program<'info, LedgerStore>,
}

impl<'info> ManageMinter<'info> {
    fn writer(&self) -> LedgerWriter<'info> {
        LedgerWriter::new(
            &self.token,
            self.token_authority.to_account_info(),
            self.ledger.to_account_info(),
            self.ledger_program.to_account_info(),
        )
    }
}

/// Sets the minter flag and overwrites the allowance
pub fn configure_handler(ctx: Context<ManageMinter>, new_allowance: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    check_minter_admin(&accounts.token, &accounts.master_minter.key())?;

    let writer = accounts.writer();
    writer.set_minter(&accounts.minter_entry, true)?;
    writer.set_minter_allowed(&accounts.minter_entry, new_allowance)?;

    emit!(MinterConfigured {
        minter: accounts.minter_entry.account,
        allowance: new_allowance,
    });

    msg!("Minter configured: {} (allowance {})", accounts.minter_entry.account, new_allowance);
    Ok(())
}

pub fn remove_handler(ctx: Context<ManageMinter>) -> Result<()> {
    let accounts = &ctx.accounts;
    check_minter_admin(&accounts.token, &accounts.master_minter.key())?;

    accounts.writer().set_minter(&accounts.minter_entry, false)?;

    emit!(MinterRemoved {
        old_minter: accounts.minter_entry.account,
    });

    msg!("Minter removed: {}", accounts.minter_entry.account);
    Ok(())
}
