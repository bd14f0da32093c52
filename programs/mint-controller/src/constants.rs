/// Signer PDA that holds the token's masterMinter role: ["controller_authority", mint_controller]
pub const CONTROLLER_AUTHORITY_SEED: &[u8] = b"controller_authority";

/// Controller -> worker record: ["controller", mint_controller, controller]
pub const CONTROLLER_SEED: &[u8] = b"controller";
