pub mod common;
pub mod u601_deep_research;
