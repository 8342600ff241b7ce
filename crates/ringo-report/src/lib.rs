//! ringo-report: Pure text serializer for planned routes (sans-IO)
//!
//! Converts a [`Route`](ringo_route::Route) into the human-readable
//! segment report. Rendering returns a `String`; writing it to a
//! terminal or file is the caller's business.

pub mod text;

pub use text::to_report;
