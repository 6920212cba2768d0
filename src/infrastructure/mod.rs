//! Infrastructure layer
//!
//! Concrete implementations of the domain ports.

pub mod hammer;

pub use hammer::HammerClient;
