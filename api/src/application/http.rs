pub mod casino;
pub mod email;
pub mod health;
pub mod query_extractor;
pub mod server;
