use anchor_lang::prelude::*;
use ledger_store::LedgerEntry;
use crate::constants::*;
use crate::errors::ControllerError;

/// Holder of one token's masterMinter capability.
///
/// The token's masterMinter must be set to `authority_address(this)`; from
/// then on the owner decides who may configure minters through controllers.
#[account]
#[derive(InitSpace, Debug)]
pub struct MintController {
    pub owner: Pubkey,
    /// FiatToken account whose minters this controller manages
    pub minter_manager: Pubkey,
    pub authority_bump: u8,
}

impl MintController {
    pub fn authority_address(mint_controller: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[CONTROLLER_AUTHORITY_SEED, mint_controller.as_ref()], &crate::ID).0
    }

    pub fn require_owner(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.owner, ControllerError::Unauthorized);
        Ok(())
    }

    /// Returns the previous minter manager
    pub fn set_minter_manager(&mut self, signer: &Pubkey, token: Pubkey) -> Result<Pubkey> {
        self.require_owner(signer)?;
        require_keys_neq!(token, Pubkey::default(), ControllerError::ZeroAddress);
        Ok(std::mem::replace(&mut self.minter_manager, token))
    }

    /// Returns the previous owner
    pub fn transfer_ownership(&mut self, signer: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.require_owner(signer)?;
        require_keys_neq!(new_owner, Pubkey::default(), ControllerError::ZeroAddress);
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}

/// One controller and the single worker it operates.
/// A removed controller keeps its record with a zero worker.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct ControllerRecord {
    pub mint_controller: Pubkey,
    pub controller: Pubkey,
    pub worker: Pubkey,
    pub bump: u8,
}

impl ControllerRecord {
    pub fn address(mint_controller: &Pubkey, controller: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(
            &[CONTROLLER_SEED, mint_controller.as_ref(), controller.as_ref()],
            &crate::ID,
        )
        .0
    }

    pub fn is_configured(&self) -> bool {
        self.worker != Pubkey::default()
    }

    pub fn configure(&mut self, controller: Pubkey, worker: Pubkey) -> Result<()> {
        require_keys_neq!(controller, Pubkey::default(), ControllerError::ZeroAddress);
        require_keys_neq!(worker, Pubkey::default(), ControllerError::ZeroAddress);
        self.controller = controller;
        self.worker = worker;
        Ok(())
    }

    pub fn remove(&mut self) -> Result<()> {
        require!(self.is_configured(), ControllerError::WorkerNotConfigured);
        self.worker = Pubkey::default();
        Ok(())
    }

    /// Worker operated by `signer`, if `signer` is this record's controller
    pub fn worker_for(&self, signer: &Pubkey) -> Result<Pubkey> {
        require_keys_eq!(*signer, self.controller, ControllerError::NotController);
        require!(self.is_configured(), ControllerError::NotController);
        Ok(self.worker)
    }
}

/// Effect of an increment or decrement on a worker's minter allowance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceChange {
    /// Amount actually applied
    pub delta: u64,
    pub new_allowance: u64,
}

pub fn plan_increment(worker: &LedgerEntry, increment: u64) -> Result<AllowanceChange> {
    require!(increment > 0, ControllerError::InvalidAmount);
    require!(worker.is_minter, ControllerError::NotMinter);
    let new_allowance = worker
        .minter_allowance
        .checked_add(increment)
        .ok_or(ControllerError::ArithmeticOverflow)?;
    Ok(AllowanceChange {
        delta: increment,
        new_allowance,
    })
}

/// Stops at zero; `delta` is what was really taken off
pub fn plan_decrement(worker: &LedgerEntry, decrement: u64) -> Result<AllowanceChange> {
    require!(decrement > 0, ControllerError::InvalidAmount);
    require!(worker.is_minter, ControllerError::NotMinter);
    let new_allowance = worker.minter_allowance.saturating_sub(decrement);
    Ok(AllowanceChange {
        delta: worker.minter_allowance - new_allowance,
        new_allowance,
    })
}

/// Worker stored in a controller record account; zero when the account was
/// never created.
pub fn worker_in(record: &AccountInfo) -> Result<Pubkey> {
    if record.data_is_empty() {
        return Ok(Pubkey::default());
    }
    require_keys_eq!(*record.owner, crate::ID, ControllerError::NotController);
    let data = record.try_borrow_data()?;
    Ok(ControllerRecord::try_deserialize(&mut &data[..])?.worker)
}
