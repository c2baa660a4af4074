pub mod archive;
pub(crate) mod directory;
