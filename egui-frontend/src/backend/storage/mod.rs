//! Storage layer. Saved drawer counts live in a single JSON file under the
//! platform data directory; there is no other persistent state.

pub mod json;
