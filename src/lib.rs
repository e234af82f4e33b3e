pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod filter;
pub mod input;
pub mod picker;
pub mod youtube;
