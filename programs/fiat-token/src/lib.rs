use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod forwarding;
pub mod instructions;
pub mod ledger_cpi;
pub mod roles;
pub mod rules;
pub mod state;

use instructions::*;
pub use roles::Role;
pub use state::{FiatToken, InitializeParams};
pub use errors::TokenError;

declare_id!("FiatTknH7c3vT4Vb9qz8GqzWZ5qfVJ1uHmXgmKJd2Lp");

#[program]
pub mod fiat_token {
    use super::*;

    /// Create a token instance over an existing ledger.
    /// A successor passes the retired token as `prior_contract`.
    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::initialize::handler(ctx, params)
    }

    // ========================================================================
    // TRANSFER FAMILY (forwarded once upgraded)
    // ========================================================================

    pub fn transfer<'info>(
        ctx: Context<'_, '_, '_, 'info, TransferTokens<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::transfer::handler(ctx, amount)
    }

    pub fn transfer_from<'info>(
        ctx: Context<'_, '_, '_, 'info, TransferFromTokens<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::transfer_from::handler(ctx, amount)
    }

    pub fn approve<'info>(
        ctx: Context<'_, '_, '_, 'info, ApproveSpender<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::approve::handler(ctx, amount)
    }

    // ========================================================================
    // PRIOR-CONTRACT ENTRY POINTS
    // ========================================================================

    pub fn transfer_via_prior_contract(
        ctx: Context<TransferViaPrior>,
        sender: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::transfer::via_prior_handler(ctx, sender, amount)
    }

    pub fn transfer_from_via_prior_contract(
        ctx: Context<TransferFromViaPrior>,
        spender: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::transfer_from::via_prior_handler(ctx, spender, amount)
    }

    pub fn approve_via_prior_contract(
        ctx: Context<ApproveViaPrior>,
        owner: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::approve::via_prior_handler(ctx, owner, amount)
    }

    pub fn is_minter_via_prior_contract(ctx: Context<MinterViewViaPrior>) -> Result<bool> {
        instructions::views::is_minter_via_prior(ctx)
    }

    pub fn minter_allowance_via_prior_contract(ctx: Context<MinterViewViaPrior>) -> Result<u64> {
        instructions::views::minter_allowance_via_prior(ctx)
    }

    // ========================================================================
    // SUPPLY
    // ========================================================================

    pub fn mint(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        instructions::mint::handler(ctx, amount)
    }

    pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        instructions::burn::handler(ctx, amount)
    }

    pub fn configure_minter(ctx: Context<ManageMinter>, new_allowance: u64) -> Result<()> {
        instructions::minters::configure_handler(ctx, new_allowance)
    }

    pub fn remove_minter(ctx: Context<ManageMinter>) -> Result<()> {
        instructions::minters::remove_handler(ctx)
    }

    // ========================================================================
    // ADMINISTRATION
    // ========================================================================

    pub fn pause(ctx: Context<UpdateToken>) -> Result<()> {
        instructions::admin::set_paused(ctx, true)
    }

    pub fn unpause(ctx: Context<UpdateToken>) -> Result<()> {
        instructions::admin::set_paused(ctx, false)
    }

    pub fn blacklist(ctx: Context<SetBlacklist>) -> Result<()> {
        instructions::blacklist::handler(ctx, true)
    }

    pub fn un_blacklist(ctx: Context<SetBlacklist>) -> Result<()> {
        instructions::blacklist::handler(ctx, false)
    }

    pub fn update_master_minter(ctx: Context<UpdateToken>, new_master_minter: Pubkey) -> Result<()> {
        instructions::admin::update_role(ctx, Role::MasterMinter, new_master_minter)
    }

    pub fn update_pauser(ctx: Context<UpdateToken>, new_pauser: Pubkey) -> Result<()> {
        instructions::admin::update_role(ctx, Role::Pauser, new_pauser)
    }

    pub fn update_blacklister(ctx: Context<UpdateToken>, new_blacklister: Pubkey) -> Result<()> {
        instructions::admin::update_role(ctx, Role::Blacklister, new_blacklister)
    }

    pub fn update_upgrader_address(ctx: Context<UpdateToken>, new_upgrader: Pubkey) -> Result<()> {
        instructions::admin::update_role(ctx, Role::Upgrader, new_upgrader)
    }

    pub fn transfer_ownership(ctx: Context<UpdateToken>, new_owner: Pubkey) -> Result<()> {
        instructions::admin::update_role(ctx, Role::Owner, new_owner)
    }

    // ========================================================================
    // UPGRADE
    // ========================================================================

    /// Hand the ledger to `successor` and start forwarding to it
    pub fn upgrade(ctx: Context<Upgrade>) -> Result<()> {
        instructions::upgrade::handler(ctx)
    }

    /// Stop accepting forwarded calls from the prior token
    pub fn disable_prior_contract(ctx: Context<UpdateToken>) -> Result<()> {
        instructions::admin::disable_prior_contract(ctx)
    }

    // ========================================================================
    // VIEWS (return data)
    // ========================================================================

    pub fn name(ctx: Context<TokenView>) -> Result<String> {
        instructions::views::name(ctx)
    }

    pub fn symbol(ctx: Context<TokenView>) -> Result<String> {
        instructions::views::symbol(ctx)
    }

    pub fn currency(ctx: Context<TokenView>) -> Result<String> {
        instructions::views::currency(ctx)
    }

    pub fn decimals(ctx: Context<TokenView>) -> Result<u8> {
        instructions::views::decimals(ctx)
    }

    pub fn paused(ctx: Context<TokenView>) -> Result<bool> {
        instructions::views::paused(ctx)
    }

    pub fn prior_contract_address(ctx: Context<TokenView>) -> Result<Pubkey> {
        instructions::views::prior_contract_address(ctx)
    }

    pub fn upgraded_address(ctx: Context<TokenView>) -> Result<Pubkey> {
        instructions::views::upgraded_address(ctx)
    }

    /// Never forwarded: each instance reports the ledger it was built on
    pub fn get_data_contract_address(ctx: Context<TokenView>) -> Result<Pubkey> {
        instructions::views::get_data_contract_address(ctx)
    }

    pub fn total_supply(ctx: Context<SupplyView>) -> Result<u64> {
        instructions::views::total_supply(ctx)
    }

    pub fn balance_of(ctx: Context<EntryView>) -> Result<u64> {
        instructions::views::balance_of(ctx)
    }

    pub fn allowance(ctx: Context<AllowanceView>) -> Result<u64> {
        instructions::views::allowance(ctx)
    }

    pub fn is_account_blacklisted(ctx: Context<EntryView>) -> Result<bool> {
        instructions::views::is_account_blacklisted(ctx)
    }

    pub fn is_minter<'info>(ctx: Context<'_, '_, '_, 'info, MinterView<'info>>) -> Result<bool> {
        instructions::views::is_minter(ctx)
    }

    pub fn minter_allowance<'info>(
        ctx: Context<'_, '_, '_, 'info, MinterView<'info>>,
    ) -> Result<u64> {
        instructions::views::minter_allowance(ctx)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use anchor_lang::error::Error;

    /// Anchor error number, or `u32::MAX` for a raw program error
    pub fn error_code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(_) => u32::MAX,
        }
    }
}
