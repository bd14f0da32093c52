use anchor_lang::prelude::*;
use crate::constants::CONTROLLER_AUTHORITY_SEED;
use crate::errors::ControllerError;
use crate::state::MintController;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + MintController::INIT_SPACE,
    )]
    pub mint_controller: Account<'info, MintController>,

    /// CHECK: Signer PDA that the token owner installs as masterMinter
    #[account(
        seeds = [CONTROLLER_AUTHORITY_SEED, mint_controller.key().as_ref()],
        bump
    )]
    pub controller_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, minter_manager: Pubkey) -> Result<()> {
    require_keys_neq!(minter_manager, Pubkey::default(), ControllerError::ZeroAddress);

    let mint_controller = &mut ctx.accounts.mint_controller;
    mint_controller.owner = ctx.accounts.owner.key();
    mint_controller.minter_manager = minter_manager;
    mint_controller.authority_bump = ctx.bumps.controller_authority;

    msg!("Mint controller initialized");
    msg!("Owner: {}", mint_controller.owner);
    msg!("Minter manager: {}", minter_manager);
    msg!("Authority (set as masterMinter): {}", ctx.accounts.controller_authority.key());

    Ok(())
}
