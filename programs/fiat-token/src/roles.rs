use anchor_lang::prelude::*;
use crate::errors::TokenError;

/// Singleton roles of a token instance.
///
/// `Owner` doubles as the role address changer: it reassigns every role
/// except `Upgrader`, which only the current upgrader may hand on.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Owner,
    MasterMinter,
    Pauser,
    Blacklister,
    Upgrader,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Owner,
        Role::MasterMinter,
        Role::Pauser,
        Role::Blacklister,
        Role::Upgrader,
    ];

    /// Role whose holder may reassign `self`
    pub fn changer(self) -> Role {
        match self {
            Role::Upgrader => Role::Upgrader,
            Role::Owner | Role::MasterMinter | Role::Pauser | Role::Blacklister => Role::Owner,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Role holders, indexed by `Role`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq, InitSpace)]
pub struct RoleTable {
    holders: [Pubkey; 5],
}

impl RoleTable {
    pub fn new(
        owner: Pubkey,
        master_minter: Pubkey,
        pauser: Pubkey,
        blacklister: Pubkey,
        upgrader: Pubkey,
    ) -> Result<Self> {
        let table = Self {
            holders: [owner, master_minter, pauser, blacklister, upgrader],
        };
        require!(
            table.holders.iter().all(|holder| *holder != Pubkey::default()),
            TokenError::ZeroAddress
        );
        Ok(table)
    }

    pub fn holder(&self, role: Role) -> Pubkey {
        self.holders[role.slot()]
    }

    pub fn require(&self, role: Role, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.holder(role), TokenError::Unauthorized);
        Ok(())
    }

    /// Reassign `role` on behalf of `signer`. Returns the previous holder.
    ///
    /// Role administration ignores pause and blacklist state entirely.
    pub fn reassign(&mut self, role: Role, signer: &Pubkey, new_holder: Pubkey) -> Result<Pubkey> {
        self.require(role.changer(), signer)?;
        require_keys_neq!(new_holder, Pubkey::default(), TokenError::ZeroAddress);

        let previous = self.holders[role.slot()];
        self.holders[role.slot()] = new_holder;
        Ok(previous)
    }
}
