//! Terminal presentation: notices, the failure panel and result output.

pub mod notice;
pub mod output;
pub mod panel;
