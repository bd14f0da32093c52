use anchor_lang::prelude::*;

#[error_code]
pub enum TokenError {
    #[msg("Signer does not hold the required role")]
    Unauthorized,

    #[msg("Signer is not a configured minter")]
    NotMinter,

    #[msg("Token is paused")]
    ContractPaused,

    #[msg("Token has been upgraded - this instance no longer writes the ledger")]
    ContractUpgraded,

    #[msg("Token has already been upgraded")]
    AlreadyUpgraded,

    #[msg("Address must not be the zero address")]
    ZeroAddress,

    #[msg("Account is blacklisted")]
    AccountBlacklisted,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Insufficient allowance")]
    InsufficientAllowance,

    #[msg("Mint amount exceeds minter allowance")]
    InsufficientMinterAllowance,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Invalid amount: must be greater than 0")]
    InvalidAmount,

    #[msg("Name too long")]
    NameTooLong,

    #[msg("Symbol too long")]
    SymbolTooLong,

    #[msg("Currency too long")]
    CurrencyTooLong,

    #[msg("Ledger does not match the token's data contract")]
    LedgerMismatch,

    #[msg("Ledger entry does not match the expected account")]
    EntryMismatch,

    #[msg("Successor token is not linked to this token")]
    SuccessorMismatch,

    #[msg("Missing successor accounts in remaining_accounts")]
    MissingSuccessorAccounts,

    #[msg("Successor returned no data")]
    MissingReturnData,
}
