use anchor_lang::prelude::*;

#[error_code]
pub enum ControllerError {
    #[msg("Signer is not the mint controller owner")]
    Unauthorized,

    #[msg("Address must not be the zero address")]
    ZeroAddress,

    #[msg("Signer is not a configured controller")]
    NotController,

    #[msg("Controller has no worker to remove")]
    WorkerNotConfigured,

    #[msg("Worker is not a minter on the managed token")]
    NotMinter,

    #[msg("Invalid amount: must be greater than 0")]
    InvalidAmount,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Token is not this controller's minter manager")]
    MinterManagerMismatch,

    #[msg("Ledger entry does not belong to the controller's worker")]
    EntryMismatch,
}
