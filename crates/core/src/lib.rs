#![forbid(unsafe_code)]

pub mod model;
pub mod program;
pub mod time;

pub use time::Clock;
