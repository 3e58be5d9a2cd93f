//! Appspark turns a theme and a handful of features into an app concept
//! generated by a remote chat-completion service.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the catalog, the user's selection, prompt construction,
//!   the retrying completion client, and the sanitizing/rendering steps
//!   applied to each reply.
//! - [`ui`] turns outcomes into user-facing notices, the failure panel, and
//!   the printed result in its requested format.
//! - [`api`] defines the chat request and response payloads.
//! - [`utils`] holds the transcript log, clipboard access, and URL helpers.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
