pub mod admin;
pub mod approve;
pub mod blacklist;
pub mod burn;
pub mod initialize;
pub mod mint;
pub mod minters;
pub mod transfer;
pub mod transfer_from;
pub mod upgrade;
pub mod views;

pub use admin::*;
pub use approve::*;
pub use blacklist::*;
pub use burn::*;
pub use initialize::*;
pub use mint::*;
pub use minters::*;
pub use transfer::*;
pub use transfer_from::*;
pub use upgrade::*;
pub use views::*;
