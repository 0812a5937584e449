pub mod cleanup;
pub mod copier;
pub(crate) mod fs_utils;
pub mod walker;
