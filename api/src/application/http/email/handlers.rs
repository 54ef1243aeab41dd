pub mod auto_link_emails;
pub mod get_emails;
