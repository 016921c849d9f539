//! Utility Module
//!
//! - [`Timer`]: session clock feeding elapsed time to the frame loop

pub mod time;

pub use time::Timer;
