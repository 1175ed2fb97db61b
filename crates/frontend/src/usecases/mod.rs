pub mod u601_deep_research;
