/// Session token generation
///
/// Tokens are opaque bearer credentials: 32 bytes from the operating
/// system RNG, hex encoded (64 lowercase characters). They carry no
/// structure and are only meaningful as keys into the session registry.

use rand::{rngs::OsRng, RngCore};

/// Number of random bytes in a session token
const TOKEN_BYTES: usize = 32;

/// Length of an encoded session token (characters)
pub const TOKEN_LENGTH: usize = TOKEN_BYTES * 2;

/// Generates a new random session token
///
/// # Example
///
/// ```
/// use notekeep_shared::auth::token::{generate_session_token, TOKEN_LENGTH};
///
/// let token = generate_session_token();
/// assert_eq!(token.len(), TOKEN_LENGTH);
/// ```
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Checks whether a string has the shape of a session token
///
/// Used to skip the registry lookup for values that could never have been
/// issued. A well-formed token still has to be present in the registry.
pub fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_LENGTH && token.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_session_token_format() {
        let token = generate_session_token();
        assert_eq!(token.len(), 64);
        assert!(is_well_formed(&token));
    }

    #[test]
    fn test_generate_session_token_unique() {
        let tokens: HashSet<String> = (0..1000).map(|_| generate_session_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_is_well_formed_rejects_other_shapes() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("1697712000123456789"));
        assert!(!is_well_formed(&"A".repeat(64)));
        assert!(!is_well_formed(&"a".repeat(63)));
        assert!(is_well_formed(&"0".repeat(64)));
    }
}
