use anchor_lang::prelude::*;
use ledger_store::program::LedgerStore;
use ledger_store::Ledger;
use crate::constants::TOKEN_AUTHORITY_SEED;
use crate::errors::TokenError;
use crate::events::Upgraded;
use crate::ledger_cpi::LedgerWriter;
use crate::state::FiatToken;

#[derive(Accounts)]
pub struct Upgrade<'info> {
    #[account(
        mut,
        has_one = ledger @ TokenError::LedgerMismatch,
    )]
    pub token: Account<'info, FiatToken>,

    /// CHECK: Token signer PDA, validated by seeds
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED, token.key().as_ref()],
        bump = token.authority_bump
    )]
    pub token_authority: UncheckedAccount<'info>,

    /// Must already name `token` as its prior contract
    pub successor: Account<'info, FiatToken>,

    /// CHECK: Successor's signer PDA, becomes the ledger owner
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED, successor.key().as_ref()],
        bump = successor.authority_bump
    )]
    pub successor_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub ledger: Account<'info, Ledger>,

    pub upgrader: Signer<'info>,

    pub ledger_program: Program<'info, LedgerStore>,
}

/// Hands the ledger to the successor and turns this instance into a forwarder.
/// Both happen in one instruction, so there is no window where the ledger
/// owner and `upgraded_address` disagree.
pub fn handler(ctx: Context<Upgrade>) -> Result<()> {
    let token_key = ctx.accounts.token.key();
    let successor_key = ctx.accounts.successor.key();
    let upgrader = ctx.accounts.upgrader.key();

    let accounts = &mut *ctx.accounts;
    let new_ledger_owner = accounts
        .token
        .upgrade(&token_key, &upgrader, &successor_key, &accounts.successor)?;
    require_keys_eq!(
        new_ledger_owner,
        accounts.successor_authority.key(),
        TokenError::SuccessorMismatch
    );

    LedgerWriter::new(
        &accounts.token,
        accounts.token_authority.to_account_info(),
        accounts.ledger.to_account_info(),
        accounts.ledger_program.to_account_info(),
    )
    .transfer_ownership(new_ledger_owner)?;

    emit!(Upgraded {
        new_contract: successor_key,
    });

    msg!("Token {} upgraded to {}", token_key, successor_key);
    msg!("Ledger owner: {}", new_ledger_owner);
    Ok(())
}
