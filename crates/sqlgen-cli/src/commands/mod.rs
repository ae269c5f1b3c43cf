pub mod export;
pub mod init;
pub mod list;
pub mod new;
pub mod package;
pub mod sql;

pub use export::cmd_export;
pub use init::cmd_init;
pub use list::cmd_list;
pub use new::cmd_new;
pub use package::cmd_package;
pub use sql::cmd_sql;
