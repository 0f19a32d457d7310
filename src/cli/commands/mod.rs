//! CLI command implementations

pub mod fetch;
pub mod init;
pub mod validate;
