use anchor_lang::prelude::*;
use crate::errors::TokenError;
use crate::roles::{Role, RoleTable};
use crate::constants::*;

/// One TokenLogic instance.
///
/// Everything here is instance-local: metadata, roles, the pause flag and the
/// upgrade links are never copied to a successor. Balances and minter state
/// live in the shared ledger referenced by `ledger`.
#[account]
#[derive(InitSpace, Debug)]
pub struct FiatToken {
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    #[max_len(MAX_SYMBOL_LEN)]
    pub symbol: String,
    #[max_len(MAX_CURRENCY_LEN)]
    pub currency: String,
    pub decimals: u8,

    /// Data contract (ledger_store::Ledger) this token reads and writes
    pub ledger: Pubkey,

    pub roles: RoleTable,
    pub paused: bool,

    /// Token allowed to forward calls into this one (zero when none/disabled)
    pub prior_contract: Pubkey,
    /// Token this one forwards to; set once by `upgrade`
    pub upgraded_address: Pubkey,

    pub authority_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    pub name: String,
    pub symbol: String,
    pub currency: String,
    pub decimals: u8,
    pub owner: Pubkey,
    pub master_minter: Pubkey,
    pub pauser: Pubkey,
    pub blacklister: Pubkey,
    pub upgrader: Pubkey,
    /// Zero at genesis; the retired token's key for a successor
    pub prior_contract: Pubkey,
}

impl FiatToken {
    pub fn from_params(params: InitializeParams, ledger: Pubkey, authority_bump: u8) -> Result<Self> {
        require!(params.name.len() <= MAX_NAME_LEN, TokenError::NameTooLong);
        require!(params.symbol.len() <= MAX_SYMBOL_LEN, TokenError::SymbolTooLong);
        require!(params.currency.len() <= MAX_CURRENCY_LEN, TokenError::CurrencyTooLong);
        require_keys_neq!(ledger, Pubkey::default(), TokenError::ZeroAddress);

        let roles = RoleTable::new(
            params.owner,
            params.master_minter,
            params.pauser,
            params.blacklister,
            params.upgrader,
        )?;

        Ok(Self {
            name: params.name,
            symbol: params.symbol,
            currency: params.currency,
            decimals: params.decimals,
            ledger,
            roles,
            paused: false,
            prior_contract: params.prior_contract,
            upgraded_address: Pubkey::default(),
            authority_bump,
        })
    }

    /// PDA that signs this token's ledger writes and forwarded calls
    pub fn authority_address(token: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[TOKEN_AUTHORITY_SEED, token.as_ref()], &crate::ID).0
    }

    pub fn is_upgraded(&self) -> bool {
        self.upgraded_address != Pubkey::default()
    }

    /// Ledger-mutating calls that are not forwarded only run on the active instance
    pub fn require_active(&self) -> Result<()> {
        require!(!self.is_upgraded(), TokenError::ContractUpgraded);
        Ok(())
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.paused, TokenError::ContractPaused);
        Ok(())
    }

    pub fn require_role(&self, role: Role, signer: &Pubkey) -> Result<()> {
        self.roles.require(role, signer)
    }

    /// True only for the authority PDA of a registered, non-disabled prior token
    pub fn is_prior_authority(&self, signer: &Pubkey) -> bool {
        self.prior_contract != Pubkey::default()
            && *signer == Self::authority_address(&self.prior_contract)
    }

    pub fn set_paused(&mut self, signer: &Pubkey, paused: bool) -> Result<()> {
        self.require_role(Role::Pauser, signer)?;
        self.paused = paused;
        Ok(())
    }

    /// Preconditions of `upgrade`, checked before any write
    pub fn check_upgrade(
        &self,
        token_key: &Pubkey,
        signer: &Pubkey,
        successor_key: &Pubkey,
        successor: &FiatToken,
    ) -> Result<()> {
        self.require_role(Role::Upgrader, signer)?;
        require!(!self.is_upgraded(), TokenError::AlreadyUpgraded);
        require_keys_neq!(*successor_key, Pubkey::default(), TokenError::ZeroAddress);
        require_keys_neq!(*successor_key, *token_key, TokenError::SuccessorMismatch);
        require_keys_eq!(successor.ledger, self.ledger, TokenError::LedgerMismatch);
        require_keys_eq!(successor.prior_contract, *token_key, TokenError::SuccessorMismatch);
        Ok(())
    }

    /// Turns this instance into a forwarder to `successor_key`. Returns the
    /// successor's authority PDA, which must become the ledger owner in the
    /// same instruction.
    pub fn upgrade(
        &mut self,
        token_key: &Pubkey,
        signer: &Pubkey,
        successor_key: &Pubkey,
        successor: &FiatToken,
    ) -> Result<Pubkey> {
        self.check_upgrade(token_key, signer, successor_key, successor)?;
        self.upgraded_address = *successor_key;
        Ok(Self::authority_address(successor_key))
    }

    /// Sever forwarding from the prior token. Returns the prior key when
    /// something was actually disabled; a second call changes nothing.
    pub fn disable_prior_contract(&mut self, signer: &Pubkey) -> Result<Option<Pubkey>> {
        self.require_role(Role::Pauser, signer)?;
        if self.prior_contract == Pubkey::default() {
            return Ok(None);
        }
        let prior = self.prior_contract;
        self.prior_contract = Pubkey::default();
        Ok(Some(prior))
    }
}
