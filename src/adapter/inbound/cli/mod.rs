//! CLI module graph.

pub mod command;
pub mod config;
pub mod explain;
pub mod output;
pub mod report;
pub mod scan;
pub mod sports;
