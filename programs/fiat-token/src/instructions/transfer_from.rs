use anchor_lang::prelude::*;
use ledger_store::program::LedgerStore;
use ledger_store::{AllowanceEntry, Ledger, LedgerEntry};
use crate::constants::TOKEN_AUTHORITY_SEED;
use crate::errors::TokenError;
use crate::events::Transfer;
use crate::forwarding::Successor;
use crate::ledger_cpi::LedgerWriter;
use crate::rules::plan_transfer_from;
use crate::state::FiatToken;

#[derive(Accounts)]
pub struct TransferFromTokens<'info> {
    #[account(has_one = ledger @ TokenError::LedgerMismatch)]
    pub token: Account<'info, FiatToken>,

    /// CHECK: Token signer PDA, validated by seeds
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED, token.key().as_ref()],
        bump = token.authority_bump
    )]
    pub token_authority: UncheckedAccount<'info>,

    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        has_one = ledger @ TokenError::EntryMismatch,
    )]
    pub from_entry: Account<'info, LedgerEntry>,

    #[account(
        mut,
        has_one = ledger @ TokenError::EntryMismatch,
    )]
    pub to_entry: Account<'info, LedgerEntry>,

    #[account(
        has_one = ledger @ TokenError::EntryMismatch,
        constraint = spender_entry.account == spender.key() @ TokenError::EntryMismatch,
    )]
    pub spender_entry: Account<'info, LedgerEntry>,

    #[account(
        mut,
        has_one = ledger @ TokenError::EntryMismatch,
    )]
    pub allowance: Account<'info, AllowanceEntry>,

    pub spender: Signer<'info>,

    pub ledger_program: Program<'info, LedgerStore>,
}

/// Entry point reserved for the registered prior token
#[derive(Accounts)]
pub struct TransferFromViaPrior<'info> {
    #[account(has_one = ledger @ TokenError::LedgerMismatch)]
    pub token: Account<'info, FiatToken>,

    /// CHECK: Token signer PDA, validated by seeds
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED, token.key().as_ref()],
        bump = token.authority_bump
    )]
    pub token_authority: UncheckedAccount<'info>,

    #[account(
        constraint = token.is_prior_authority(&prior_authority.key()) @ TokenError::Unauthorized
    )]
    pub prior_authority: Signer<'info>,

    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        has_one = ledger @ TokenError::EntryMismatch,
    )]
    pub from_entry: Account<'info, LedgerEntry>,

    #[account(
        mut,
        has_one = ledger @ TokenError::EntryMismatch,
    )]
    pub to_entry: Account<'info, LedgerEntry>,

    #[account(has_one = ledger @ TokenError::EntryMismatch)]
    pub spender_entry: Account<'info, LedgerEntry>,

    #[account(
        mut,
        has_one = ledger @ TokenError::EntryMismatch,
    )]
    pub allowance: Account<'info, AllowanceEntry>,

    pub ledger_program: Program<'info, LedgerStore>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, TransferFromTokens<'info>>,
    amount: u64,
) -> Result<()> {
    let accounts = &ctx.accounts;

    if accounts.token.is_upgraded() {
        msg!("Token upgraded - forwarding transfer_from to {}", accounts.token.upgraded_address);
        let successor = Successor::from_remaining(&accounts.token, ctx.remaining_accounts)?;
        return successor.invoke(
            &accounts.token.key(),
            accounts.token.authority_bump,
            crate::accounts::TransferFromViaPrior {
                token: successor.token.key(),
                token_authority: successor.authority.key(),
                prior_authority: accounts.token_authority.key(),
                ledger: accounts.ledger.key(),
                from_entry: accounts.from_entry.key(),
                to_entry: accounts.to_entry.key(),
                spender_entry: accounts.spender_entry.key(),
                allowance: accounts.allowance.key(),
                ledger_program: accounts.ledger_program.key(),
            },
            crate::instruction::TransferFromViaPriorContract {
                spender: accounts.spender.key(),
                amount,
            },
            &[
                accounts.token_authority.to_account_info(),
                accounts.ledger.to_account_info(),
                accounts.from_entry.to_account_info(),
                accounts.to_entry.to_account_info(),
                accounts.spender_entry.to_account_info(),
                accounts.allowance.to_account_info(),
                accounts.ledger_program.to_account_info(),
            ],
        );
    }

    let writer = LedgerWriter::new(
        &accounts.token,
        accounts.token_authority.to_account_info(),
        accounts.ledger.to_account_info(),
        accounts.ledger_program.to_account_info(),
    );
    execute(
        &writer,
        &accounts.token,
        &accounts.spender_entry,
        &accounts.from_entry,
        &accounts.to_entry,
        &accounts.allowance,
        amount,
    )
}

pub fn via_prior_handler(ctx: Context<TransferFromViaPrior>, spender: Pubkey, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    accounts.token.require_active()?;
    require_keys_eq!(accounts.spender_entry.account, spender, TokenError::EntryMismatch);

    msg!("transfer_from forwarded by prior contract {}", accounts.token.prior_contract);

    let writer = LedgerWriter::new(
        &accounts.token,
        accounts.token_authority.to_account_info(),
        accounts.ledger.to_account_info(),
        accounts.ledger_program.to_account_info(),
    );
    execute(
        &writer,
        &accounts.token,
        &accounts.spender_entry,
        &accounts.from_entry,
        &accounts.to_entry,
        &accounts.allowance,
        amount,
    )
}

fn execute<'info>(
    writer: &LedgerWriter<'info>,
    token: &FiatToken,
    spender: &Account<'info, LedgerEntry>,
    from: &Account<'info, LedgerEntry>,
    to: &Account<'info, LedgerEntry>,
    allowance: &Account<'info, AllowanceEntry>,
    amount: u64,
) -> Result<()> {
    let plan = plan_transfer_from(token, spender, from, to, allowance, amount)?;

    writer.set_allowed(allowance, plan.allowance)?;
    writer.apply_transfer(from, to, &plan.transfer)?;

    emit!(Transfer {
        from: from.account,
        to: to.account,
        value: amount,
    });

    msg!(
        "Transferred {} from {} to {} (spender {}, allowance left {})",
        amount,
        from.account,
        to.account,
        spender.account,
        plan.allowance
    );
    Ok(())
}
