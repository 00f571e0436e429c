//! Stargaze Library
//!
//! This crate exposes the application modules so the binary and the
//! integration tests share a single module tree.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod favorites;
pub mod fetch;
pub mod ui;
pub mod validation;
