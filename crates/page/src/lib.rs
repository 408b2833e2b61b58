//! `filmreel-page` library crate.
//!
//! The page controller, the default draft sink and the terminal command
//! parser. The binary entrypoint lives in `main.rs`.

pub mod command;
pub mod controller;
pub mod sink;
