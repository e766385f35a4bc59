//! 命令处理器

mod media_handlers;

pub use media_handlers::UploadMediaHandler;
