mod commands;
mod handlers;

pub use commands::{Cli, Commands, ConnectionArgs};
pub use handlers::{handle_create, handle_get, handle_list, handle_publish, handle_serve};
