//! Business layer for the to-do list API registration flow.
//! - `validation` holds the pure field validators and the aggregate check.
//! - `password` wraps salted one-way hashing with a configurable work factor.
//! - `registration` sequences lookup, hashing and persistence behind a
//!   repository abstraction.

pub mod password;
pub mod registration;
pub mod validation;
