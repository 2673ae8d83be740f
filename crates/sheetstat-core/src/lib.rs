pub mod config;
pub mod logging;

pub mod fetch;
pub mod filesize;
pub mod listing;
pub mod sheet;
pub mod status;
