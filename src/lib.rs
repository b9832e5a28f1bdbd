pub mod billing;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod session;
pub mod state;
pub mod tracking;

pub use error::{HallError, Result};
pub use models::{EntryRecord, Student};
