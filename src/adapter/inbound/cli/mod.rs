//! CLI module graph.

pub mod browse;
pub mod card;
pub mod categories;
pub mod check;
pub mod command;
pub mod config;
pub mod output;
pub mod paths;
pub mod search;
