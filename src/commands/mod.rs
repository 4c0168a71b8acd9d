//! Engine operation implementations
//!
//! Only the porcelain tier exists here: an in-memory engine has no object
//! encoding to expose plumbing for.

pub mod porcelain;
