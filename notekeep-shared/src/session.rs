/// In-memory session registry
///
/// Maps an opaque session token to the email the user logged in with.
/// Entries are created at login and live until the process exits: there is
/// no logout, no expiry and no persistence, so a restart invalidates every
/// token.
///
/// The registry is shared by every request task. Clones share the same
/// underlying map.
///
/// # Example
///
/// ```
/// use notekeep_shared::session::SessionRegistry;
///
/// # async fn example() -> Result<(), notekeep_shared::session::SessionError> {
/// let sessions = SessionRegistry::new();
/// let sid = sessions.create("a@x.com").await;
///
/// assert_eq!(sessions.resolve(&sid).await?, "a@x.com");
/// # Ok(())
/// # }
/// ```

use crate::auth::token::{generate_session_token, is_well_formed};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Error type for session lookups
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    /// Token was never issued by this process
    #[error("Unknown session")]
    Unknown,
}

/// A live session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Email supplied at login
    pub email: String,

    /// When the token was issued
    pub issued_at: DateTime<Utc>,
}

/// Process-lifetime token → session map
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new token for `email` and records it
    ///
    /// Tokens are random, so no collision check is made.
    pub async fn create(&self, email: &str) -> String {
        let token = generate_session_token();
        let session = Session {
            email: email.to_string(),
            issued_at: Utc::now(),
        };

        let mut sessions = self.inner.write().await;
        sessions.insert(token.clone(), session);

        debug!(email, active_sessions = sessions.len(), "Session created");
        token
    }

    /// Resolves a token to the email it was issued for
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unknown` if the token is absent.
    pub async fn resolve(&self, token: &str) -> Result<String, SessionError> {
        self.get(token).await.map(|session| session.email)
    }

    /// Returns the full session record for a token
    pub async fn get(&self, token: &str) -> Result<Session, SessionError> {
        if !is_well_formed(token) {
            warn!(token_len = token.len(), "Rejected malformed session token");
            return Err(SessionError::Unknown);
        }

        match self.inner.read().await.get(token) {
            Some(session) => {
                debug!(
                    email = %session.email,
                    age_seconds = (Utc::now() - session.issued_at).num_seconds(),
                    "Session resolved"
                );
                Ok(session.clone())
            }
            None => {
                warn!("Unknown session token");
                Err(SessionError::Unknown)
            }
        }
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
