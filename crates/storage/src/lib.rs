//! Storage layer for Solar Shell
//!
//! This crate provides the key-value store used to persist the
//! authentication token between application launches.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;

pub use kv::{KvConfig, KvError, KvStore};
