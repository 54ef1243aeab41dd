pub mod casino_repository;

pub use casino_repository::MySqlCasinoRepository;
