mod service;
mod update_contact_info;

pub use service::ProfileCommandService;
pub use update_contact_info::UpdateContactInfoCommand;
