mod assemble;
mod get;
mod service;

pub(crate) use assemble::assemble_profile;
pub use service::ProfileQueryService;
