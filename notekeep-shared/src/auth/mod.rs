/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`token`]: Random session token generation
///
/// # Example
///
/// ```
/// use notekeep_shared::auth::password::{hash_password, verify_password};
/// use notekeep_shared::auth::token::generate_session_token;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let sid = generate_session_token();
/// assert_eq!(sid.len(), 64);
/// # Ok(())
/// # }
/// ```

pub mod password;
pub mod token;
