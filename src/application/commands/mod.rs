//! 应用层 - 命令（写操作）

mod media_commands;

pub mod handlers;

pub use media_commands::*;
