use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
pub use errors::ControllerError;
pub use state::{ControllerRecord, MintController};

declare_id!("MntCtr1QwX2jJ7zVbW6nK9pQ4sTfR8hYcLdE3gA5uBm");

#[program]
pub mod mint_controller {
    use super::*;

    /// Create a mint controller for `minter_manager`; the signer becomes owner.
    /// The token owner then hands masterMinter to the controller authority PDA.
    pub fn initialize(ctx: Context<Initialize>, minter_manager: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, minter_manager)
    }

    // ========================================================================
    // OWNER
    // ========================================================================

    pub fn configure_controller(
        ctx: Context<ConfigureController>,
        controller: Pubkey,
        worker: Pubkey,
    ) -> Result<()> {
        instructions::controllers::configure(ctx, controller, worker)
    }

    /// Revoke a controller; its worker's minter state is left as is
    pub fn remove_controller(ctx: Context<RemoveController>) -> Result<()> {
        instructions::controllers::remove(ctx)
    }

    pub fn set_minter_manager(ctx: Context<UpdateMintController>, token: Pubkey) -> Result<()> {
        instructions::settings::set_minter_manager(ctx, token)
    }

    pub fn transfer_ownership(ctx: Context<UpdateMintController>, new_owner: Pubkey) -> Result<()> {
        instructions::settings::transfer_ownership(ctx, new_owner)
    }

    // ========================================================================
    // CONTROLLERS
    // ========================================================================

    pub fn configure_minter(ctx: Context<ControlMinter>, allowance: u64) -> Result<()> {
        instructions::minters::configure_minter(ctx, allowance)
    }

    pub fn remove_minter(ctx: Context<ControlMinter>) -> Result<()> {
        instructions::minters::remove_minter(ctx)
    }

    pub fn increment_minter_allowance(ctx: Context<ControlMinter>, increment: u64) -> Result<()> {
        instructions::minters::increment_minter_allowance(ctx, increment)
    }

    pub fn decrement_minter_allowance(ctx: Context<ControlMinter>, decrement: u64) -> Result<()> {
        instructions::minters::decrement_minter_allowance(ctx, decrement)
    }

    // ========================================================================
    // VIEWS (return data)
    // ========================================================================

    pub fn controllers(ctx: Context<ControllerView>, controller: Pubkey) -> Result<Pubkey> {
        instructions::views::controllers(ctx, controller)
    }

    pub fn minter_manager(ctx: Context<MintControllerView>) -> Result<Pubkey> {
        instructions::views::minter_manager(ctx)
    }
}
