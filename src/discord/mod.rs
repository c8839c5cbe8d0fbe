mod bot;
mod commands;
mod embeds;

pub use bot::{Data, create_framework};
