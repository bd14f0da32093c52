pub mod initialize;
pub mod open;
pub mod set_entry;
pub mod set_ledger;
pub mod views;

pub use initialize::*;
pub use open::*;
pub use set_entry::*;
pub use set_ledger::*;
pub use views::*;
