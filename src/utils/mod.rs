//! Utility Module
//!
//! - [`Timer`]: frame delta and elapsed time for the render loop

pub mod time;

pub use time::Timer;
