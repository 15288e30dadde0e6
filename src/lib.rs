//! Core library for the `trafficgen` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration loading, target selection, request execution, batch
//! and continuous dispatch, and statistics aggregation. The primary
//! user-facing interface is the `trafficgen` command-line application.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod runner;
pub mod shutdown;
pub mod targets;
