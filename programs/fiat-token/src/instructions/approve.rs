use anchor_lang::prelude::*;
use ledger_store::program::LedgerStore;
use ledger_store::{AllowanceEntry, Ledger, LedgerEntry};
use crate::constants::TOKEN_AUTHORITY_SEED;
use crate::errors::TokenError;
use crate::events::Approval;
use crate::forwarding::Successor;
use crate::ledger_cpi::LedgerWriter;
use crate::rules::check_approve;
use crate::state::FiatToken;

#[derive(Accounts)]
pub struct ApproveSpender<'info> {
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
        has_one = ledger @ TokenError::EntryMismatch,
        constraint = owner_entry.account == owner.key() @ TokenError::EntryMismatch,
    )]
    pub owner_entry: Account<'info, LedgerEntry>,

    #[account(has_one = ledger @ TokenError::EntryMismatch)]
    pub spender_entry: Account<'info, LedgerEntry>,

    #[account(
        mut,
        has_one = ledger @ TokenError::EntryMismatch,
    )]
    pub allowance: Account<'info, AllowanceEntry>,

    pub owner: Signer<'info>,

    pub ledger_program: Program<'info, LedgerStore>,
}

/// Entry point reserved for the registered prior token
#[derive(Accounts)]
pub struct ApproveViaPrior<'info> {
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

    #[account(has_one = ledger @ TokenError::EntryMismatch)]
    pub owner_entry: Account<'info, LedgerEntry>,

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
    ctx: Context<'_, '_, '_, 'info, ApproveSpender<'info>>,
    amount: u64,
) -> Result<()> {
    let accounts = &ctx.accounts;

    if accounts.token.is_upgraded() {
        msg!("Token upgraded - forwarding approve to {}", accounts.token.upgraded_address);
        let successor = Successor::from_remaining(&accounts.token, ctx.remaining_accounts)?;
        return successor.invoke(
            &accounts.token.key(),
            accounts.token.authority_bump,
            crate::accounts::ApproveViaPrior {
                token: successor.token.key(),
                token_authority: successor.authority.key(),
                prior_authority: accounts.token_authority.key(),
                ledger: accounts.ledger.key(),
                owner_entry: accounts.owner_entry.key(),
                spender_entry: accounts.spender_entry.key(),
                allowance: accounts.allowance.key(),
                ledger_program: accounts.ledger_program.key(),
            },
            crate::instruction::ApproveViaPriorContract {
                owner: accounts.owner.key(),
                amount,
            },
            &[
                accounts.token_authority.to_account_info(),
                accounts.ledger.to_account_info(),
                accounts.owner_entry.to_account_info(),
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
    execute(&writer, &accounts.token, &accounts.owner_entry, &accounts.spender_entry, &accounts.allowance, amount)
}

pub fn via_prior_handler(ctx: Context<ApproveViaPrior>, owner: Pubkey, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    accounts.token.require_active()?;
    require_keys_eq!(accounts.owner_entry.account, owner, TokenError::EntryMismatch);

    msg!("approve forwarded by prior contract {}", accounts.token.prior_contract);

    let writer = LedgerWriter::new(
        &accounts.token,
        accounts.token_authority.to_account_info(),
        accounts.ledger.to_account_info(),
        accounts.ledger_program.to_account_info(),
    );
    execute(&writer, &accounts.token, &accounts.owner_entry, &accounts.spender_entry, &accounts.allowance, amount)
}

fn execute<'info>(
    writer: &LedgerWriter<'info>,
    token: &FiatToken,
    owner: &Account<'info, LedgerEntry>,
    spender: &Account<'info, LedgerEntry>,
    allowance: &Account<'info, AllowanceEntry>,
    amount: u64,
) -> Result<()> {
    check_approve(token, owner, spender, allowance)?;
    writer.set_allowed(allowance, amount)?;

    emit!(Approval {
        owner: owner.account,
        spender: spender.account,
        value: amount,
    });

    msg!("{} approved {} to spend {}", owner.account, spender.account, amount);
    Ok(())
}
