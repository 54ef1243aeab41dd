pub mod email_repository;

pub use email_repository::MySqlEmailRepository;
