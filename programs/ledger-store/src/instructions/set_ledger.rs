use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::*;
use crate::OwnershipTransferred;

#[derive(Accounts)]
pub struct UpdateLedger<'info> {
    #[account(
        mut,
        has_one = owner @ LedgerError::Unauthorized,
    )]
    pub ledger: Account<'info, Ledger>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetAllowed<'info> {
    #[account(has_one = owner @ LedgerError::Unauthorized)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        has_one = ledger @ LedgerError::EntryMismatch,
    )]
    pub allowance: Account<'info, AllowanceEntry>,

    pub owner: Signer<'info>,
}

pub fn set_allowed(ctx: Context<SetAllowed>, amount: u64) -> Result<()> {
    let allowance = &mut ctx.accounts.allowance;
    allowance.amount = amount;
    msg!("Allowance {} -> {} set to {}", allowance.owner, allowance.spender, amount);
    Ok(())
}

pub fn set_total_supply(ctx: Context<UpdateLedger>, total_supply: u64) -> Result<()> {
    ctx.accounts.ledger.total_supply = total_supply;
    msg!("Total supply set to {}", total_supply);
    Ok(())
}

pub fn transfer_ownership(ctx: Context<UpdateLedger>, new_owner: Pubkey) -> Result<()> {
    let signer = ctx.accounts.owner.key();
    let ledger = &mut ctx.accounts.ledger;
    let previous_owner = ledger.transfer_ownership(&signer, new_owner)?;

    emit!(OwnershipTransferred {
        ledger: ledger.key(),
        previous_owner,
        new_owner,
    });

    msg!("Ledger owner: {} -> {}", previous_owner, new_owner);
    Ok(())
}
