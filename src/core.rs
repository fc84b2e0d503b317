pub mod launcher;
pub mod manager;
pub mod sync;
