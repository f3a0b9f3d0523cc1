//! Command implementations.

pub mod admin;
pub mod collaborator;
pub mod info;
pub mod init;
pub mod list;
pub mod note;
pub mod register;
pub mod show;
pub mod status;
pub mod version;
