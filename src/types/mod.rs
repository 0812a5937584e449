pub mod errors;
pub mod summary;
