mod chat;
mod cli;

pub(crate) use chat::as_chat;
pub(crate) use cli::as_cli;
