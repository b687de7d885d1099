//! Event side-channel traits and the records they carry

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Principal;

/// A state change successfully applied to the ledger.
///
/// One variant per mutating operation. `Transferred` covers both direct
/// and allowance-based transfers; the latter carry the spender that
/// moved the owner's funds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerEvent {
    Minted {
        recipient: Principal,
        amount: u64,
    },
    Burned {
        account: Principal,
        amount: u64,
    },
    Transferred {
        from: Principal,
        to: Principal,
        spender: Option<Principal>,
        amount: u64,
        fee: u64,
    },
    Approved {
        owner: Principal,
        spender: Principal,
        amount: u64,
    },
    Staked {
        account: Principal,
        amount: u64,
    },
    Unstaked {
        account: Principal,
        amount: u64,
    },
    Delegated {
        delegator: Principal,
        delegatee: Principal,
    },
    DelegationRevoked {
        delegator: Principal,
    },
    PausedChanged {
        paused: bool,
    },
    BurnFeeChanged {
        percent: u8,
    },
}

/// Envelope around an event as delivered to sinks.
///
/// The id and timestamp identify the delivery, not the state change:
/// they are assigned at emission time and are not part of the
/// deterministic ledger state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique id for this record
    pub id: Uuid,
    /// When the record was emitted (UTC)
    pub recorded_at: NaiveDateTime,
    /// The state change itself
    pub event: LedgerEvent,
}

impl EventRecord {
    pub(crate) fn new(event: LedgerEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: chrono::Utc::now().naive_utc(),
            event,
        }
    }
}

/// Observer notified after each successful mutation.
///
/// Sinks sit outside the ledger's state-transition contract: rejected
/// operations emit nothing, and a sink cannot veto or alter the change
/// it is told about.
pub trait EventSink: Send + Sync {
    /// Called once per successful mutation, after state is updated.
    fn on_event(&self, record: &EventRecord);
}
