pub mod entry;
pub mod error;
pub mod settings;
