use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Signer is not the ledger owner")]
    Unauthorized,

    #[msg("Address must not be the zero address")]
    ZeroAddress,

    #[msg("Entry does not belong to this ledger")]
    EntryMismatch,

    #[msg("The same entry was passed twice")]
    DuplicateEntry,

    #[msg("Remaining account is not a ledger entry")]
    InvalidEntryAccount,
}
