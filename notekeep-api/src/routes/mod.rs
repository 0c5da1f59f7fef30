/// API route handlers
///
/// - `health`: Health check endpoint
/// - `auth`: Signup and login
/// - `notes`: Session-authenticated note CRUD

pub mod auth;
pub mod health;
pub mod notes;
