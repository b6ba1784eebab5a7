//! Word list loading
//!
//! The dictionary is a runtime input: a newline-separated file of five-letter
//! words supplied by the caller. The core performs no other I/O.

pub mod loader;
