//! Simulated chargebox pairing check.
//!
//! There is no network traffic: the result is decided by the identifier alone
//! and revealed after a fixed delay, measured against deadlines the event loop
//! polls.

use std::time::{Duration, Instant};

use super::draft::{ChargefoxConnection, ConnectionStatus, StationDraft};

/// Identifier that pairs successfully.
pub const SUCCESS_IDENTITY: &str = "chargefox";
/// Identifier that fails with the "check for typos" message.
pub const INVALID_IDENTITY: &str = "invalid-id";
/// Time between triggering a check and its result.
pub const DEFAULT_CONNECT_DELAY: Duration = Duration::from_millis(4000);

/// Hardware make reported by a paired station.
pub const AUTOFILL_MAKE: &str = "Fimer";
/// Hardware model reported by a paired station.
pub const AUTOFILL_MODEL: &str = "Electra DC / QCK-DC-AC";

pub const EMPTY_ID_MESSAGE: &str = "OCPP ID cannot be empty.";
pub const LOADING_MESSAGE: &str =
    "Connection in progress. This may take up to 10 minutes. You can close this page and revisit it later.";
pub const SUCCESS_MESSAGE: &str =
    "Station successfully connected to Chargefox. You can now configure your hardware details.";
pub const INVALID_ID_MESSAGE: &str =
    "Connection unsuccessful. Please check the chargebox identity for typos and try again.";
pub const FAILED_MESSAGE: &str = "Connection failed. Please try again later.";

/// Result of a pairing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Connected,
    InvalidIdentity,
    Failed,
}

impl CheckOutcome {
    /// Decides the outcome for an identifier. Surrounding whitespace is ignored.
    pub fn resolve(ocpp_id: &str) -> Self {
        match ocpp_id.trim() {
            SUCCESS_IDENTITY => CheckOutcome::Connected,
            INVALID_IDENTITY => CheckOutcome::InvalidIdentity,
            _ => CheckOutcome::Failed,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CheckOutcome::Connected => SUCCESS_MESSAGE,
            CheckOutcome::InvalidIdentity => INVALID_ID_MESSAGE,
            CheckOutcome::Failed => FAILED_MESSAGE,
        }
    }
}

#[derive(Debug, Clone)]
struct PendingCheck {
    generation: u64,
    ocpp_id: String,
    due: Instant,
}

/// Owns the in-flight pairing attempt, if any.
///
/// Every trigger and every identifier edit bumps a generation counter. A
/// pending attempt only resolves if its generation is still current, so an
/// edit made while a check is loading can never be overwritten by the old
/// result.
#[derive(Debug, Clone)]
pub struct ConnectionCheck {
    delay: Duration,
    generation: u64,
    pending: Option<PendingCheck>,
}

impl Default for ConnectionCheck {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_DELAY)
    }
}

impl ConnectionCheck {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns `true` if the trigger should be offered: the identifier is not
    /// blank and no check is loading or already succeeded.
    pub fn can_trigger(conn: &ChargefoxConnection) -> bool {
        !conn.ocpp_id.trim().is_empty() && Self::accepts_trigger(conn)
    }

    fn accepts_trigger(conn: &ChargefoxConnection) -> bool {
        !matches!(
            conn.status,
            ConnectionStatus::Loading | ConnectionStatus::Success
        )
    }

    /// Starts a pairing attempt for the draft's current identifier.
    ///
    /// A blank identifier fails immediately. Returns `false` without touching
    /// the draft while a check is loading or after a success.
    pub fn trigger(&mut self, draft: &mut StationDraft, now: Instant) -> bool {
        let conn = &mut draft.connect_to_chargefox;
        if !Self::accepts_trigger(conn) {
            tracing::debug!(status = ?conn.status, "connection check trigger ignored");
            return false;
        }

        self.generation += 1;
        conn.connected = false;

        if conn.ocpp_id.trim().is_empty() {
            self.pending = None;
            conn.status = ConnectionStatus::Error;
            conn.message = EMPTY_ID_MESSAGE.to_string();
            tracing::info!("connection check rejected: empty OCPP ID");
            return true;
        }

        conn.status = ConnectionStatus::Loading;
        conn.message = LOADING_MESSAGE.to_string();
        self.pending = Some(PendingCheck {
            generation: self.generation,
            ocpp_id: conn.ocpp_id.clone(),
            due: now + self.delay,
        });
        tracing::info!(
            ocpp_id = %conn.ocpp_id,
            generation = self.generation,
            delay_ms = self.delay.as_millis() as u64,
            "connection check started"
        );
        true
    }

    /// Marks any pending attempt as stale. Call whenever the identifier changes.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Returns `true` while an attempt is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Resolves the pending attempt once its deadline has passed.
    ///
    /// Returns `true` if the draft changed. Stale attempts are dropped without
    /// touching the draft.
    pub fn poll(&mut self, draft: &mut StationDraft, now: Instant) -> bool {
        let Some(pending) = self.pending.take_if(|p| p.due <= now) else {
            return false;
        };

        if pending.generation != self.generation {
            tracing::debug!(
                ocpp_id = %pending.ocpp_id,
                generation = pending.generation,
                current = self.generation,
                "discarding stale connection check result"
            );
            return false;
        }

        let outcome = CheckOutcome::resolve(&pending.ocpp_id);
        let conn = &mut draft.connect_to_chargefox;
        conn.message = outcome.message().to_string();
        match outcome {
            CheckOutcome::Connected => {
                conn.status = ConnectionStatus::Success;
                conn.connected = true;
                draft.hardware_details.make = AUTOFILL_MAKE.to_string();
                draft.hardware_details.model = AUTOFILL_MODEL.to_string();
            }
            CheckOutcome::InvalidIdentity | CheckOutcome::Failed => {
                conn.status = ConnectionStatus::Error;
                conn.connected = false;
            }
        }
        tracing::info!(ocpp_id = %pending.ocpp_id, ?outcome, "connection check resolved");
        true
    }
}
