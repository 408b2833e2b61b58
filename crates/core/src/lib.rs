//! Domain model for the films page.
//!
//! Holds the draft form, the fetched movie list and the request status as
//! plain data with pure update functions, plus the traits the page uses to
//! reach the outside world ([`source::MovieSource`] and
//! [`sink::DraftSink`]). Nothing in this crate performs IO.

pub mod draft;
pub mod error;
pub mod movie;
pub mod page;
pub mod render;
pub mod sink;
pub mod source;
pub mod status;
pub mod types;
