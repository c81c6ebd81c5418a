pub mod common;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod export;
pub mod feature;
pub mod feed;
pub mod generate_commands;
pub mod layers;
pub mod legend;
pub mod marker;
pub mod render;
pub mod style;

#[cfg(feature = "server")]
pub mod server;
