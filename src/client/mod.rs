//! Bracket source clients.
//!
//! The calculator never owns its bracket schedules; it asks a
//! [`BracketSource`] for the brackets of a tax year. [`HttpBracketSource`]
//! talks to the upstream bracket service, and [`InMemoryBracketSource`]
//! serves fixed schedules for tests and offline use.

mod http;
mod source;

pub use http::{DEFAULT_TIMEOUT, HttpBracketSource};
pub use source::{BracketSource, InMemoryBracketSource};
