//! CLI library components for the Olympic statistics tool.

pub mod logging;
pub mod render;
