use anchor_lang::prelude::*;
use crate::events::{MinterManagerSet, OwnershipTransferred};
use crate::state::MintController;

#[derive(Accounts)]
pub struct UpdateMintController<'info> {
    #[account(mut)]
    pub mint_controller: Account<'info, MintController>,

    pub owner: Signer<'info>,
}

pub fn set_minter_manager(ctx: Context<UpdateMintController>, token: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let old_minter_manager = ctx.accounts.mint_controller.set_minter_manager(&owner, token)?;

    emit!(MinterManagerSet {
        old_minter_manager,
        new_minter_manager: token,
    });

    msg!("Minter manager: {} -> {}", old_minter_manager, token);
    Ok(())
}

pub fn transfer_ownership(ctx: Context<UpdateMintController>, new_owner: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let previous_owner = ctx.accounts.mint_controller.transfer_ownership(&owner, new_owner)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    msg!("Mint controller owner: {} -> {}", previous_owner, new_owner);
    Ok(())
}
