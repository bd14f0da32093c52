use anchor_lang::prelude::*;
use ledger_store::Ledger;
use crate::constants::TOKEN_AUTHORITY_SEED;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + FiatToken::INIT_SPACE,
    )]
    pub token: Account<'info, FiatToken>,

    /// CHECK: Signer PDA of this token, only its bump is recorded
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED, token.key().as_ref()],
        bump
    )]
    pub token_authority: UncheckedAccount<'info>,

    /// Shared ledger; a successor names the same one as its prior
    pub ledger: Account<'info, Ledger>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    let token = FiatToken::from_params(
        params,
        ctx.accounts.ledger.key(),
        ctx.bumps.token_authority,
    )?;

    msg!("Fiat token initialized: {} ({})", token.name, token.symbol);
    msg!("Ledger: {}", token.ledger);
    msg!("Authority: {}", ctx.accounts.token_authority.key());
    if token.prior_contract != Pubkey::default() {
        msg!("Prior contract: {}", token.prior_contract);
    }

    ctx.accounts.token.set_inner(token);
    Ok(())
}
