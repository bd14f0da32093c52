use anchor_lang::prelude::*;
use fiat_token::cpi::accounts::ManageMinter;
use fiat_token::program::FiatToken as FiatTokenProgram;
use fiat_token::FiatToken;
use ledger_store::program::LedgerStore;
use ledger_store::{Ledger, LedgerEntry};
use crate::constants::{CONTROLLER_AUTHORITY_SEED, CONTROLLER_SEED};
use crate::errors::ControllerError;
use crate::events::{
    MinterAllowanceDecremented, MinterAllowanceIncremented, MinterConfigured, MinterRemoved,
};
use crate::state::{plan_decrement, plan_increment, ControllerRecord, MintController};

/// A controller acting on its worker through the token's masterMinter slot
#[derive(Accounts)]
pub struct ControlMinter<'info> {
    pub mint_controller: Account<'info, MintController>,

    #[account(
        seeds = [CONTROLLER_SEED, mint_controller.key().as_ref(), controller.key().as_ref()],
        bump = record.bump
    )]
    pub record: Account<'info, ControllerRecord>,

    pub controller: Signer<'info>,

    /// CHECK: masterMinter of the managed token, validated by seeds
    #[account(
        seeds = [CONTROLLER_AUTHORITY_SEED, mint_controller.key().as_ref()],
        bump = mint_controller.authority_bump
    )]
    pub controller_authority: UncheckedAccount<'info>,

    #[account(address = mint_controller.minter_manager @ ControllerError::MinterManagerMismatch)]
    pub token: Account<'info, FiatToken>,

    /// CHECK: Token signer PDA, validated by the token program
    pub token_authority: UncheckedAccount<'info>,

    pub ledger: Account<'info, Ledger>,

    #[account(mut)]
    pub worker_entry: Account<'info, LedgerEntry>,

    pub fiat_token_program: Program<'info, FiatTokenProgram>,

    pub ledger_program: Program<'info, LedgerStore>,
}

impl<'info> ControlMinter<'info> {
    /// Worker of the signing controller, checked against the entry passed in
    fn worker(&self) -> Result<Pubkey> {
        let worker = self.record.worker_for(&self.controller.key())?;
        require_keys_eq!(self.worker_entry.account, worker, ControllerError::EntryMismatch);
        Ok(worker)
    }

    fn signed<R>(&self, call: impl FnOnce(&[&[&[u8]]]) -> Result<R>) -> Result<R> {
        let mint_controller = self.mint_controller.key();
        let bump = [self.mint_controller.authority_bump];
        let seeds: [&[u8]; 3] = [CONTROLLER_AUTHORITY_SEED, mint_controller.as_ref(), &bump];
        call(&[&seeds[..]])
    }

    fn manage_minter_accounts(&self) -> ManageMinter<'info> {
        ManageMinter {
            token: self.token.to_account_info(),
            token_authority: self.token_authority.to_account_info(),
            ledger: self.ledger.to_account_info(),
            minter_entry: self.worker_entry.to_account_info(),
            master_minter: self.controller_authority.to_account_info(),
            ledger_program: self.ledger_program.to_account_info(),
        }
    }

    fn configure_minter(&self, allowance: u64) -> Result<()> {
        self.signed(|seeds| {
            fiat_token::cpi::configure_minter(
                CpiContext::new_with_signer(
                    self.fiat_token_program.to_account_info(),
                    self.manage_minter_accounts(),
                    seeds,
                ),
                allowance,
            )
        })
    }

    fn remove_minter(&self) -> Result<()> {
        self.signed(|seeds| {
            fiat_token::cpi::remove_minter(CpiContext::new_with_signer(
                self.fiat_token_program.to_account_info(),
                self.manage_minter_accounts(),
                seeds,
            ))
        })
    }
}

pub fn configure_minter(ctx: Context<ControlMinter>, allowance: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    let worker = accounts.worker()?;

    accounts.configure_minter(allowance)?;

    emit!(MinterConfigured {
        controller: accounts.controller.key(),
        minter: worker,
        allowance,
    });

    msg!("Controller {} configured minter {} (allowance {})", accounts.controller.key(), worker, allowance);
    Ok(())
}

pub fn remove_minter(ctx: Context<ControlMinter>) -> Result<()> {
    let accounts = &ctx.accounts;
    let worker = accounts.worker()?;

    accounts.remove_minter()?;

    emit!(MinterRemoved {
        controller: accounts.controller.key(),
        minter: worker,
    });

    msg!("Controller {} removed minter {}", accounts.controller.key(), worker);
    Ok(())
}

pub fn increment_minter_allowance(ctx: Context<ControlMinter>, increment: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    let worker = accounts.worker()?;
    require_keys_eq!(accounts.worker_entry.ledger, accounts.ledger.key(), ControllerError::EntryMismatch);

    let change = plan_increment(&accounts.worker_entry, increment)?;
    accounts.configure_minter(change.new_allowance)?;

    emit!(MinterAllowanceIncremented {
        sender: accounts.controller.key(),
        minter: worker,
        increment: change.delta,
        new_allowance: change.new_allowance,
    });

    msg!("Minter {} allowance +{} = {}", worker, change.delta, change.new_allowance);
    Ok(())
}

pub fn decrement_minter_allowance(ctx: Context<ControlMinter>, decrement: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    let worker = accounts.worker()?;
    require_keys_eq!(accounts.worker_entry.ledger, accounts.ledger.key(), ControllerError::EntryMismatch);

    let change = plan_decrement(&accounts.worker_entry, decrement)?;
    accounts.configure_minter(change.new_allowance)?;

    emit!(MinterAllowanceDecremented {
        sender: accounts.controller.key(),
        minter: worker,
        decrement: change.delta,
        new_allowance: change.new_allowance,
    });

    msg!("Minter {} allowance -{} = {}", worker, change.delta, change.new_allowance);
    Ok(())
}
