use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;
pub mod errors;

use instructions::*;
pub use state::{AllowanceEntry, BalancePair, Ledger, LedgerEntry};
pub use errors::LedgerError;

declare_id!("LdgrStRfQvU6wX3YjkSkvJWcY1bJ7hK5tYc8oMnE9xA");

/// Seed for per-account ledger entries: ["ledger_entry", ledger, account]
pub const ENTRY_SEED: &[u8] = b"ledger_entry";

/// Seed for allowances: ["allowance", ledger, owner, spender]
pub const ALLOWANCE_SEED: &[u8] = b"allowance";

#[program]
pub mod ledger_store {
    use super::*;

    /// Create the ledger for a token lineage with its first writer
    pub fn initialize(ctx: Context<Initialize>, owner: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, owner)
    }

    /// Open a zero-valued entry for an account (idempotent, permissionless)
    pub fn open_entry(ctx: Context<OpenEntry>, account: Pubkey) -> Result<()> {
        instructions::open::open_entry(ctx, account)
    }

    /// Open a zero-valued allowance record (idempotent, permissionless)
    pub fn open_allowance(ctx: Context<OpenAllowance>, owner: Pubkey, spender: Pubkey) -> Result<()> {
        instructions::open::open_allowance(ctx, owner, spender)
    }

    // ========================================================================
    // OWNER-GATED SETTERS
    // ========================================================================

    pub fn set_balance(ctx: Context<SetEntry>, balance: u64) -> Result<()> {
        instructions::set_entry::set_balance(ctx, balance)
    }

    /// Write two distinct balances in one call (transfer legs)
    pub fn set_balances(ctx: Context<SetBalances>, first: u64, second: u64) -> Result<()> {
        instructions::set_entry::set_balances(ctx, first, second)
    }

    pub fn set_blacklisted(ctx: Context<SetEntry>, blacklisted: bool) -> Result<()> {
        instructions::set_entry::set_blacklisted(ctx, blacklisted)
    }

    pub fn set_minter(ctx: Context<SetEntry>, is_minter: bool) -> Result<()> {
        instructions::set_entry::set_minter(ctx, is_minter)
    }

    pub fn set_minter_allowed(ctx: Context<SetEntry>, allowance: u64) -> Result<()> {
        instructions::set_entry::set_minter_allowed(ctx, allowance)
    }

    pub fn set_allowed(ctx: Context<SetAllowed>, amount: u64) -> Result<()> {
        instructions::set_ledger::set_allowed(ctx, amount)
    }

    pub fn set_total_supply(ctx: Context<UpdateLedger>, total_supply: u64) -> Result<()> {
        instructions::set_ledger::set_total_supply(ctx, total_supply)
    }

    /// Hand the single-writer capability to a new owner (one step)
    pub fn transfer_ownership(ctx: Context<UpdateLedger>, new_owner: Pubkey) -> Result<()> {
        instructions::set_ledger::transfer_ownership(ctx, new_owner)
    }

    // ========================================================================
    // VIEWS (return data)
    // ========================================================================

    pub fn owner(ctx: Context<ReadLedger>) -> Result<Pubkey> {
        instructions::views::ledger_owner(ctx)
    }

    pub fn get_total_supply(ctx: Context<ReadLedger>) -> Result<u64> {
        instructions::views::get_total_supply(ctx)
    }

    pub fn get_balance(ctx: Context<ReadEntry>) -> Result<u64> {
        instructions::views::get_balance(ctx)
    }

    pub fn get_balances(ctx: Context<ReadEntryPair>) -> Result<BalancePair> {
        instructions::views::get_balances(ctx)
    }

    pub fn get_allowed(ctx: Context<ReadAllowance>) -> Result<u64> {
        instructions::views::get_allowed(ctx)
    }

    pub fn is_blacklisted(ctx: Context<ReadEntry>) -> Result<bool> {
        instructions::views::is_blacklisted(ctx)
    }

    /// True when any entry passed in remaining accounts is blacklisted
    pub fn is_any_blacklisted(ctx: Context<ReadLedger>) -> Result<bool> {
        instructions::views::is_any_blacklisted(ctx)
    }

    pub fn is_minter(ctx: Context<ReadEntry>) -> Result<bool> {
        instructions::views::is_minter(ctx)
    }

    pub fn get_minter_allowed(ctx: Context<ReadEntry>) -> Result<u64> {
        instructions::views::get_minter_allowed(ctx)
    }
}

/// Event emitted when the ledger's writer changes
#[event]
pub struct OwnershipTransferred {
    pub ledger: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
