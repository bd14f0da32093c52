use anchor_lang::prelude::*;
use crate::constants::CONTROLLER_SEED;
use crate::events::{ControllerConfigured, ControllerRemoved};
use crate::state::{ControllerRecord, MintController};

#[derive(Accounts)]
#[instruction(controller: Pubkey)]
pub struct ConfigureController<'info> {
    pub mint_controller: Account<'info, MintController>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + ControllerRecord::INIT_SPACE,
        seeds = [CONTROLLER_SEED, mint_controller.key().as_ref(), controller.as_ref()],
        bump
    )]
    pub record: Account<'info, ControllerRecord>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RemoveController<'info> {
    pub mint_controller: Account<'info, MintController>,

    #[account(
        mut,
        seeds = [CONTROLLER_SEED, mint_controller.key().as_ref(), record.controller.as_ref()],
        bump = record.bump
    )]
    pub record: Account<'info, ControllerRecord>,

    pub owner: Signer<'info>,
}

pub fn configure(ctx: Context<ConfigureController>, controller: Pubkey, worker: Pubkey) -> Result<()> {
    ctx.accounts.mint_controller.require_owner(&ctx.accounts.owner.key())?;

    let record = &mut ctx.accounts.record;
    record.configure(controller, worker)?;
    record.mint_controller = ctx.accounts.mint_controller.key();
    record.bump = ctx.bumps.record;

    emit!(ControllerConfigured { controller, worker });

    msg!("Controller {} -> worker {}", controller, worker);
    Ok(())
}

pub fn remove(ctx: Context<RemoveController>) -> Result<()> {
    ctx.accounts.mint_controller.require_owner(&ctx.accounts.owner.key())?;

    let record = &mut ctx.accounts.record;
    record.remove()?;

    emit!(ControllerRemoved {
        controller: record.controller,
    });

    msg!("Controller removed: {}", record.controller);
    Ok(())
}
