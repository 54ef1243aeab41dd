pub mod entities;
pub mod index;
pub mod matcher;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::Email;
pub use index::CasinoNameIndex;
pub use matcher::{NameKey, email_matches_casino, extract_domain_name, normalize_name};
pub use ports::{EmailRepository, EmailService};
pub use value_objects::*;
