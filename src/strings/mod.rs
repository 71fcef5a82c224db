//! # User-Facing Strings
//!
//! Central home for every string the processor hands back to the caller.

pub mod messages;
