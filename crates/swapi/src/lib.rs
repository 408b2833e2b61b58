//! REST client for the Star Wars films-listing endpoint.
//!
//! Provides the wire types returned by the endpoint, their mapping into
//! [`filmreel_core::movie::MovieRecord`], environment configuration, and
//! an HTTP client implementing [`filmreel_core::source::MovieSource`].

pub mod api;
pub mod config;
pub mod messages;
