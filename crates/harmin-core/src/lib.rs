pub mod config;
pub mod logging;

pub mod dedup;
pub mod error;
pub mod filter;
pub mod har;
pub mod model;
pub mod output;
pub mod pipeline;
