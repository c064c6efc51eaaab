//! Two-factor login API
//!
//! This crate provides the wire types shared by the desktop client and the
//! development server, and the canned scenario table both of them answer with.

pub mod mock;
pub mod protocol;

// Re-export protocol types at crate root for convenience
pub use protocol::*;
