//! CLI command implementations

pub mod init;
pub mod play;
pub mod reset;
pub mod status;
