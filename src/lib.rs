//! An in-memory version-control engine
//!
//! `wit` models the four stores of a tiny git-like system — working
//! directory, index (staging area), append-only commit graph, and movable
//! branch pointers — and exposes the operations linking them: stage, commit,
//! branch, checkout, status, log, and hard reset.
//!
//! Everything lives in memory and is owned by a single [`Repository`]
//! instance; commit identity and time come from pluggable collaborators so
//! callers can make histories fully deterministic.
//!
//! [`Repository`]: areas::repository::Repository

pub mod areas;
pub mod artifacts;
pub mod commands;
