pub mod catalog;
pub mod completion;
pub mod config;
pub mod formatter;
pub mod generator;
pub mod prompt;
pub mod render;
pub mod sanitize;
pub mod selection;
