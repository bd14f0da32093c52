use anchor_lang::prelude::*;
use ledger_store::{AllowanceEntry, Ledger, LedgerEntry};
use crate::constants::TOKEN_AUTHORITY_SEED;
use crate::errors::TokenError;
use crate::forwarding::{forwarded_return, Successor};
use crate::state::FiatToken;

#[derive(Accounts)]
pub struct TokenView<'info> {
    pub token: Account<'info, FiatToken>,
}

#[derive(Accounts)]
pub struct SupplyView<'info> {
    #[account(has_one = ledger @ TokenError::LedgerMismatch)]
    pub token: Account<'info, FiatToken>,

    pub ledger: Account<'info, Ledger>,
}

#[derive(Accounts)]
pub struct EntryView<'info> {
    pub token: Account<'info, FiatToken>,

    #[account(constraint = entry.ledger == token.ledger @ TokenError::EntryMismatch)]
    pub entry: Account<'info, LedgerEntry>,
}

#[derive(Accounts)]
pub struct AllowanceView<'info> {
    pub token: Account<'info, FiatToken>,

    #[account(constraint = allowance.ledger == token.ledger @ TokenError::EntryMismatch)]
    pub allowance: Account<'info, AllowanceEntry>,
}

/// Minter reads forward on a retired token, so the authority PDA comes along
#[derive(Accounts)]
pub struct MinterView<'info> {
    pub token: Account<'info, FiatToken>,

    /// CHECK: Token signer PDA, validated by seeds
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED, token.key().as_ref()],
        bump = token.authority_bump
    )]
    pub token_authority: UncheckedAccount<'info>,

    #[account(constraint = entry.ledger == token.ledger @ TokenError::EntryMismatch)]
    pub entry: Account<'info, LedgerEntry>,
}

#[derive(Accounts)]
pub struct MinterViewViaPrior<'info> {
    pub token: Account<'info, FiatToken>,

    #[account(
        constraint = token.is_prior_authority(&prior_authority.key()) @ TokenError::Unauthorized
    )]
    pub prior_authority: Signer<'info>,

    #[account(constraint = entry.ledger == token.ledger @ TokenError::EntryMismatch)]
    pub entry: Account<'info, LedgerEntry>,
}

pub fn name(ctx: Context<TokenView>) -> Result<String> {
    Ok(ctx.accounts.token.name.clone())
}

pub fn symbol(ctx: Context<TokenView>) -> Result<String> {
    Ok(ctx.accounts.token.symbol.clone())
}

pub fn currency(ctx: Context<TokenView>) -> Result<String> {
    Ok(ctx.accounts.token.currency.clone())
}

pub fn decimals(ctx: Context<TokenView>) -> Result<u8> {
    Ok(ctx.accounts.token.decimals)
}

pub fn paused(ctx: Context<TokenView>) -> Result<bool> {
    Ok(ctx.accounts.token.paused)
}

pub fn prior_contract_address(ctx: Context<TokenView>) -> Result<Pubkey> {
    Ok(ctx.accounts.token.prior_contract)
}

pub fn upgraded_address(ctx: Context<TokenView>) -> Result<Pubkey> {
    Ok(ctx.accounts.token.upgraded_address)
}

/// Never forwarded: each instance reports the ledger it was built on
pub fn get_data_contract_address(ctx: Context<TokenView>) -> Result<Pubkey> {
    Ok(ctx.accounts.token.ledger)
}

pub fn balance_of(ctx: Context<EntryView>) -> Result<u64> {
    Ok(ctx.accounts.entry.balance)
}

pub fn is_account_blacklisted(ctx: Context<EntryView>) -> Result<bool> {
    Ok(ctx.accounts.entry.blacklisted)
}

pub fn allowance(ctx: Context<AllowanceView>) -> Result<u64> {
    Ok(ctx.accounts.allowance.amount)
}

pub fn total_supply(ctx: Context<SupplyView>) -> Result<u64> {
    Ok(ctx.accounts.ledger.total_supply)
}

pub fn is_minter<'info>(ctx: Context<'_, '_, '_, 'info, MinterView<'info>>) -> Result<bool> {
    if ctx.accounts.token.is_upgraded() {
        forward_minter_view(&ctx, crate::instruction::IsMinterViaPriorContract {})?;
        return forwarded_return::<bool>();
    }
    Ok(ctx.accounts.entry.is_minter)
}

pub fn minter_allowance<'info>(ctx: Context<'_, '_, '_, 'info, MinterView<'info>>) -> Result<u64> {
    if ctx.accounts.token.is_upgraded() {
        forward_minter_view(&ctx, crate::instruction::MinterAllowanceViaPriorContract {})?;
        return forwarded_return::<u64>();
    }
    Ok(ctx.accounts.entry.minter_allowance)
}

pub fn is_minter_via_prior(ctx: Context<MinterViewViaPrior>) -> Result<bool> {
    ctx.accounts.token.require_active()?;
    Ok(ctx.accounts.entry.is_minter)
}

pub fn minter_allowance_via_prior(ctx: Context<MinterViewViaPrior>) -> Result<u64> {
    ctx.accounts.token.require_active()?;
    Ok(ctx.accounts.entry.minter_allowance)
}

fn forward_minter_view<'info>(
    ctx: &Context<'_, '_, '_, 'info, MinterView<'info>>,
    data: impl anchor_lang::InstructionData,
) -> Result<()> {
    let accounts = &ctx.accounts;
    msg!("Token upgraded - forwarding minter view to {}", accounts.token.upgraded_address);

    let successor = Successor::from_remaining(&accounts.token, ctx.remaining_accounts)?;
    successor.invoke(
        &accounts.token.key(),
        accounts.token.authority_bump,
        crate::accounts::MinterViewViaPrior {
            token: successor.token.key(),
            prior_authority: accounts.token_authority.key(),
            entry: accounts.entry.key(),
        },
        data,
        &[
            accounts.token_authority.to_account_info(),
            accounts.entry.to_account_info(),
        ],
    )
}
