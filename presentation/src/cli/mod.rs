//! CLI module for presentation layer

pub mod commands;
