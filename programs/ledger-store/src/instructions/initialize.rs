use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + Ledger::INIT_SPACE,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, owner: Pubkey) -> Result<()> {
    require_keys_neq!(owner, Pubkey::default(), LedgerError::ZeroAddress);

    let ledger = &mut ctx.accounts.ledger;
    ledger.owner = owner;
    ledger.total_supply = 0;

    msg!("Ledger initialized: {}", ledger.key());
    msg!("Owner: {}", ledger.owner);

    Ok(())
}
