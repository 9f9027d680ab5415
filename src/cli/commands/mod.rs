pub mod collect;
mod command_result;
pub mod init;

pub use command_result::*;
