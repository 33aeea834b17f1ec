pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod exit;
pub mod graph;
pub mod input;
pub mod output;
pub mod reporting;
