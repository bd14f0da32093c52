pub mod controllers;
pub mod initialize;
pub mod minters;
pub mod settings;
pub mod views;

pub use controllers::*;
pub use initialize::*;
pub use minters::*;
pub use settings::*;
pub use views::*;
