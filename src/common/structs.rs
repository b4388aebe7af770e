//! Common data structures.

/// Message-only error used by the binary's bootstrap path.
pub mod custom_error;
