use anchor_lang::prelude::*;
use crate::roles::Role;

#[event]
pub struct Transfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub value: u64,
}

#[event]
pub struct Approval {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub value: u64,
}

#[event]
pub struct Mint {
    pub minter: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Burn {
    pub burner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Blacklisted {
    pub account: Pubkey,
}

#[event]
pub struct UnBlacklisted {
    pub account: Pubkey,
}

#[event]
pub struct MinterConfigured {
    pub minter: Pubkey,
    pub allowance: u64,
}

#[event]
pub struct MinterRemoved {
    pub old_minter: Pubkey,
}

#[event]
pub struct Pause {
    pub token: Pubkey,
}

#[event]
pub struct Unpause {
    pub token: Pubkey,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

/// Any role other than the owner changed hands
#[event]
pub struct RoleUpdated {
    pub role: Role,
    pub previous_holder: Pubkey,
    pub new_holder: Pubkey,
}

#[event]
pub struct Upgraded {
    pub new_contract: Pubkey,
}

#[event]
pub struct PriorContractDisabled {
    pub prior_contract: Pubkey,
}
