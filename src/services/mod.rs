pub mod compute;
pub mod database;
pub mod init_questions;
pub mod network;
pub mod password;
pub mod tfvars_writer;
