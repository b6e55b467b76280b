use jiff::{Span, Timestamp};
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::AdminError;

/// An authenticated dashboard session. The token travels with every command;
/// the frontend holds nothing else: no persisted flag, no cookie.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Session {
    pub token: Uuid,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Session {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at < now
    }
}

/// Verifies the access PIN and issues sessions. The PIN itself is operator
/// configuration ([`crate::config::AdminConfig::access_pin`]); this module
/// only decides what a valid attempt looks like and how long a session lives.
pub struct SessionGate {
    pin: String,
    ttl: Span,
}

impl SessionGate {
    pub fn new(pin: impl Into<String>, ttl: Span) -> Self {
        Self {
            pin: pin.into(),
            ttl,
        }
    }

    /// Check one login attempt: exactly four ASCII digits, matching the
    /// configured PIN. Failure carries no lockout and no attempt counter;
    /// the frontend clears the input and lets the operator retry.
    pub fn verify_pin(&self, attempt: &str) -> Result<(), AdminError> {
        let well_formed = attempt.len() == 4 && attempt.chars().all(|c| c.is_ascii_digit());
        if !well_formed || attempt != self.pin {
            return Err(AdminError::AuthFailed);
        }
        Ok(())
    }

    /// Issue a fresh session starting at `now`.
    pub fn issue(&self, now: Timestamp) -> Session {
        Session {
            token: Uuid::new_v4(),
            issued_at: now,
            expires_at: now
                .saturating_add(self.ttl)
                .expect("session ttl span uses only time units"),
        }
    }
}
