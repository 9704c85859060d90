pub mod common;
pub mod generate;
pub mod plot;
pub mod query;
pub mod summary;
