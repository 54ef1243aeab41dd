pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::Casino;
pub use ports::{CasinoRepository, CasinoService};
pub use value_objects::CASINO_FIELDS;
