//! # notekeep Shared Library
//!
//! Storage, credential and session primitives used by the notekeep API
//! server.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and schema bootstrap
//! - `models`: Users and notes with their store operations
//! - `auth`: Password hashing and session token generation
//! - `session`: In-memory session registry

pub mod auth;
pub mod db;
pub mod models;
pub mod session;
