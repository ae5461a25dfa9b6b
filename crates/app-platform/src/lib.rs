//! Platform signals for Solar Shell
//!
//! This crate wraps the pieces of the host environment the shell reacts
//! to: the device color scheme (with change subscriptions) and the local
//! wall clock.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod appearance;
pub mod clock;

pub use appearance::{Appearance, ColorScheme, Subscription};
pub use clock::{Clock, FixedClock, SystemClock};
