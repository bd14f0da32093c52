/// Seed of the per-token signer PDA: ["token_authority", token]
pub const TOKEN_AUTHORITY_SEED: &[u8] = b"token_authority";

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_CURRENCY_LEN: usize = 10;
