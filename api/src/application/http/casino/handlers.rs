pub mod get_casino;
pub mod get_casino_emails;
pub mod get_casinos;
