mod directory;
mod persistence;

pub use directory::StudentDirectory;
pub use persistence::{load_students, save_students, LoadReport};
