//! Token Event Log Module
//!
//! This module provides the append-only audit log the token writes to when a
//! state transition commits. Records are never revised or removed; their
//! order is the order in which transitions committed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::address::Address;

// ============================================================================
// EVENT DATA STRUCTURES
// ============================================================================

/// Events emitted by the utility branded token.
///
/// Serialized as `{"name": ..., "args": {...}}` so audit consumers can match
/// on the event name without knowing every variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "args")]
pub enum TokenEvent {
    /// The one-time co-gateway binding was committed.
    CoGatewaySet {
        /// Address of the newly bound co-gateway
        co_gateway: Address,
    },
    /// A new internal actor was registered.
    InternalActorRegistered {
        /// Address of the newly registered actor
        actor: Address,
    },
}

/// A single record in the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique identifier for this record
    pub id: Uuid,
    /// Timestamp when the record was appended
    pub recorded_at: DateTime<Utc>,
    /// The emitted event
    pub event: TokenEvent,
}

// ============================================================================
// EVENT LOG IMPLEMENTATION
// ============================================================================

/// Append-only in-memory event log. Thread-safe via RwLock.
pub struct EventLog {
    records: RwLock<Vec<EventRecord>>,
}

impl EventLog {
    /// Creates an empty event log.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Appends an event, stamping it with a fresh id and the current time.
    ///
    /// Only state transitions append; the method is crate-private so the log
    /// stays append-only from the outside.
    pub(crate) async fn append(&self, event: TokenEvent) -> EventRecord {
        let record = EventRecord {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            event,
        };

        let mut records = self.records.write().await;
        records.push(record.clone());
        record
    }

    /// Returns all records in append order.
    pub async fn snapshot(&self) -> Vec<EventRecord> {
        let records = self.records.read().await;
        records.clone()
    }

    /// Number of records in the log.
    pub async fn len(&self) -> usize {
        let records = self.records.read().await;
        records.len()
    }

    /// Whether the log holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Renders the full log as JSON for audit consumers.
    pub async fn export_json(&self) -> serde_json::Value {
        let records = self.records.read().await;
        serde_json::to_value(&*records).unwrap_or(serde_json::Value::Null)
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
