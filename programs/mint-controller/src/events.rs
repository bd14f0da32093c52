use anchor_lang::prelude::*;

#[event]
pub struct ControllerConfigured {
    pub controller: Pubkey,
    pub worker: Pubkey,
}

#[event]
pub struct ControllerRemoved {
    pub controller: Pubkey,
}

#[event]
pub struct MinterConfigured {
    pub controller: Pubkey,
    pub minter: Pubkey,
    pub allowance: u64,
}

#[event]
pub struct MinterRemoved {
    pub controller: Pubkey,
    pub minter: Pubkey,
}

#[event]
pub struct MinterAllowanceIncremented {
    pub sender: Pubkey,
    pub minter: Pubkey,
    pub increment: u64,
    pub new_allowance: u64,
}

#[event]
pub struct MinterAllowanceDecremented {
    pub sender: Pubkey,
    pub minter: Pubkey,
    pub decrement: u64,
    pub new_allowance: u64,
}

#[event]
pub struct MinterManagerSet {
    pub old_minter_manager: Pubkey,
    pub new_minter_manager: Pubkey,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
