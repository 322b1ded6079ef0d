pub mod add;
pub mod config;
pub mod init;
pub mod list;
pub mod periods;
