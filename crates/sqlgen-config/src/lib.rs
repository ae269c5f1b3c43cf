pub mod comment_fallback;
pub mod config;
pub mod file_format;
pub mod name_case;

pub use comment_fallback::CommentFallback;
pub use config::{CONFIG_FILE_NAME, SqlgenConfig};
pub use file_format::FileFormat;
pub use name_case::NameCase;
