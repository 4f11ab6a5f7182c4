//! Email verification codes
//!
//! In-memory, expiring store for one-shot verification codes. A user holds at
//! most one outstanding code; issuing a new one drops the old, and a
//! successful verification consumes the code.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::{info, warn};

/// Default code lifetime
pub const CODE_TTL: Duration = Duration::from_secs(60 * 60);

/// Code length in characters
const CODE_LEN: usize = 6;

struct Entry {
    user_id: String,
    issued_at: Instant,
}

/// Expiring store of outstanding verification codes, keyed by code
pub struct VerificationCodes {
    ttl: Duration,
    codes: Mutex<HashMap<String, Entry>>,
}

impl VerificationCodes {
    pub fn new() -> Self {
        Self::with_ttl(CODE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            codes: Mutex::new(HashMap::new()),
        }
    }

    /// Issue a fresh code for a user, invalidating any outstanding one
    pub fn issue(&self, user_id: &str) -> String {
        let mut codes = self.codes.lock().unwrap();
        Self::purge_expired(&mut codes, self.ttl);

        if codes.values().any(|entry| entry.user_id == user_id) {
            codes.retain(|_, entry| entry.user_id != user_id);
            info!(user_id, "replacing outstanding verification code");
        }

        let code = generate_code();
        codes.insert(
            code.clone(),
            Entry {
                user_id: user_id.to_string(),
                issued_at: Instant::now(),
            },
        );
        info!(user_id, "issued verification code");
        code
    }

    /// Check a code for a user, consuming it on success
    pub fn verify(&self, code: &str, user_id: &str) -> bool {
        let mut codes = self.codes.lock().unwrap();
        Self::purge_expired(&mut codes, self.ttl);

        match codes.get(code) {
            Some(entry) if entry.user_id == user_id => {
                codes.remove(code);
                info!(user_id, "verified email verification code");
                true
            }
            _ => {
                warn!(user_id, "rejected email verification code");
                false
            }
        }
    }

    fn purge_expired(codes: &mut HashMap<String, Entry>, ttl: Duration) {
        codes.retain(|_, entry| entry.issued_at.elapsed() < ttl);
    }
}

impl Default for VerificationCodes {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a random uppercase alphanumeric code
fn generate_code() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();

    (0..CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let store = VerificationCodes::new();
        let code = store.issue("user-1");

        assert_eq!(code.len(), CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert!(store.verify(&code, "user-1"));
    }

    #[test]
    fn test_verify_consumes_code() {
        let store = VerificationCodes::new();
        let code = store.issue("user-1");

        assert!(store.verify(&code, "user-1"));
        assert!(!store.verify(&code, "user-1"));
    }

    #[test]
    fn test_verify_rejects_wrong_user() {
        let store = VerificationCodes::new();
        let code = store.issue("user-1");

        assert!(!store.verify(&code, "user-2"));
        // Rejection does not consume the code
        assert!(store.verify(&code, "user-1"));
    }

    #[test]
    fn test_reissue_invalidates_previous_code() {
        let store = VerificationCodes::new();
        let old = store.issue("user-1");
        let new = store.issue("user-1");

        assert!(!store.verify(&old, "user-1"));
        assert!(store.verify(&new, "user-1"));
    }

    #[test]
    fn test_expired_code_rejected() {
        let store = VerificationCodes::with_ttl(Duration::ZERO);
        let code = store.issue("user-1");

        assert!(!store.verify(&code, "user-1"));
    }
}
