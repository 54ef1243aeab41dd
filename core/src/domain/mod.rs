pub mod casino;
pub mod common;
pub mod email;
pub mod query;
