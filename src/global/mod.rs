// Globally available exports
pub mod dir_entry;
pub mod error;
pub mod header;
