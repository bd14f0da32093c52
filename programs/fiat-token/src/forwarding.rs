use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::program::{get_return_data, invoke_signed};
use anchor_lang::InstructionData;
use crate::constants::TOKEN_AUTHORITY_SEED;
use crate::errors::TokenError;
use crate::state::FiatToken;

/// Accounts of the token a retired instance forwards to.
///
/// Passed as remaining accounts, in order:
/// [successor_token, successor_authority, fiat_token_program]
pub struct Successor<'info> {
    pub token: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
    pub program: AccountInfo<'info>,
}

impl<'info> Successor<'info> {
    pub fn from_remaining(retired: &FiatToken, remaining: &[AccountInfo<'info>]) -> Result<Self> {
        require!(remaining.len() >= 3, TokenError::MissingSuccessorAccounts);

        let (token, authority, program) = (&remaining[0], &remaining[1], &remaining[2]);
        require_keys_eq!(token.key(), retired.upgraded_address, TokenError::SuccessorMismatch);
        require_keys_eq!(
            authority.key(),
            FiatToken::authority_address(&retired.upgraded_address),
            TokenError::SuccessorMismatch
        );
        require_keys_eq!(program.key(), crate::ID, TokenError::SuccessorMismatch);

        Ok(Self {
            token: token.clone(),
            authority: authority.clone(),
            program: program.clone(),
        })
    }

    /// Self-CPI into the successor, signed by the retired token's authority
    /// PDA so the successor can recognise it as its prior contract.
    pub fn invoke(
        &self,
        retired_key: &Pubkey,
        retired_bump: u8,
        accounts: impl ToAccountMetas,
        data: impl InstructionData,
        infos: &[AccountInfo<'info>],
    ) -> Result<()> {
        let ix = Instruction {
            program_id: crate::ID,
            accounts: accounts.to_account_metas(None),
            data: data.data(),
        };

        let mut account_infos = infos.to_vec();
        account_infos.push(self.token.clone());
        account_infos.push(self.authority.clone());
        account_infos.push(self.program.clone());

        let bump = [retired_bump];
        let seeds: [&[u8]; 3] = [TOKEN_AUTHORITY_SEED, retired_key.as_ref(), &bump];
        invoke_signed(&ix, &account_infos, &[&seeds[..]]).map_err(Into::into)
    }
}

/// Value returned by the successor during the last forwarded call
pub fn forwarded_return<T: AnchorDeserialize>() -> Result<T> {
    let (program_id, data) = get_return_data().ok_or(TokenError::MissingReturnData)?;
    require_keys_eq!(program_id, crate::ID, TokenError::MissingReturnData);
    T::try_from_slice(&data).map_err(|_| error!(TokenError::MissingReturnData))
}
