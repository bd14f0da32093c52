use anchor_lang::prelude::*;
use crate::constants::CONTROLLER_SEED;
use crate::state::{worker_in, MintController};

#[derive(Accounts)]
pub struct MintControllerView<'info> {
    pub mint_controller: Account<'info, MintController>,
}

#[derive(Accounts)]
#[instruction(controller: Pubkey)]
pub struct ControllerView<'info> {
    pub mint_controller: Account<'info, MintController>,

    /// CHECK: Controller record PDA; may not exist yet
    #[account(
        seeds = [CONTROLLER_SEED, mint_controller.key().as_ref(), controller.as_ref()],
        bump
    )]
    pub record: UncheckedAccount<'info>,
}

/// Worker of a controller; zero if never configured or removed
pub fn controllers(ctx: Context<ControllerView>, _controller: Pubkey) -> Result<Pubkey> {
    worker_in(&ctx.accounts.record.to_account_info())
}

pub fn minter_manager(ctx: Context<MintControllerView>) -> Result<Pubkey> {
    Ok(ctx.accounts.mint_controller.minter_manager)
}
