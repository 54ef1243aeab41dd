pub mod casino;
pub mod db;
pub mod email;
