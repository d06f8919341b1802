//! desk-bluetooth bootstrap library
//!
//! Configuration resolution and two-phase logger construction for the
//! desk-bluetooth CLI.

pub mod cli;
pub mod config;
