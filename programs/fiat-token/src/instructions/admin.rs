use anchor_lang::prelude::*;
use crate::events::{OwnershipTransferred, Pause, PriorContractDisabled, RoleUpdated, Unpause};
use crate::roles::Role;
use crate::state::FiatToken;

/// Instance-local settings: roles, pause flag, prior link
#[derive(Accounts)]
pub struct UpdateToken<'info> {
    #[account(mut)]
    pub token: Account<'info, FiatToken>,

    pub caller: Signer<'info>,
}

pub fn set_paused(ctx: Context<UpdateToken>, paused: bool) -> Result<()> {
    let token_key = ctx.accounts.token.key();
    ctx.accounts.token.set_paused(&ctx.accounts.caller.key(), paused)?;

    if paused {
        emit!(Pause { token: token_key });
        msg!("Token paused");
    } else {
        emit!(Unpause { token: token_key });
        msg!("Token unpaused");
    }
    Ok(())
}

pub fn update_role(ctx: Context<UpdateToken>, role: Role, new_holder: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let previous_holder = ctx.accounts.token.roles.reassign(role, &caller, new_holder)?;

    if role == Role::Owner {
        emit!(OwnershipTransferred {
            previous_owner: previous_holder,
            new_owner: new_holder,
        });
    } else {
        emit!(RoleUpdated {
            role,
            previous_holder,
            new_holder,
        });
    }

    msg!("{:?} changed: {} -> {}", role, previous_holder, new_holder);
    Ok(())
}

pub fn disable_prior_contract(ctx: Context<UpdateToken>) -> Result<()> {
    let caller = ctx.accounts.caller.key();

    match ctx.accounts.token.disable_prior_contract(&caller)? {
        Some(prior_contract) => {
            emit!(PriorContractDisabled { prior_contract });
            msg!("Prior contract disabled: {}", prior_contract);
        }
        None => msg!("No prior contract to disable"),
    }
    Ok(())
}
