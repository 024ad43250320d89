pub mod config;
pub use config::*;

pub mod events;
pub use events::*;

pub mod ledger;
pub use ledger::*;
