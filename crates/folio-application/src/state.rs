use folio_core::agent::ArtifactKind;
use folio_core::artifact::ArtifactRecord;
use folio_core::session::SessionTracker;
use folio_core::{FolioError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// History, statistics and current views, kept behind one lock.
#[derive(Debug, Default)]
pub(crate) struct StudioState {
    pub(crate) tracker: SessionTracker,
    current: HashMap<ArtifactKind, ArtifactRecord>,
}

impl StudioState {
    pub(crate) fn current(&self, kind: ArtifactKind) -> Option<&ArtifactRecord> {
        self.current.get(&kind)
    }

    pub(crate) fn show(&mut self, record: ArtifactRecord) {
        self.current.insert(record.kind(), record);
    }
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    id: u64,
    stale: bool,
}

#[derive(Debug, Default)]
struct SlotTable {
    in_flight: HashMap<ArtifactKind, InFlight>,
    next_id: u64,
}

/// One request slot per kind.
///
/// Held in a blocking mutex so a [`RequestGuard`] can release its slot from
/// `Drop` when the request future is cancelled.
#[derive(Debug, Clone, Default)]
pub(crate) struct RequestSlots {
    table: Arc<Mutex<SlotTable>>,
}

impl RequestSlots {
    fn lock(&self) -> MutexGuard<'_, SlotTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claims the slot for `kind`.
    pub(crate) fn begin(&self, kind: ArtifactKind) -> Result<RequestGuard> {
        let mut table = self.lock();
        if table.in_flight.contains_key(&kind) {
            return Err(FolioError::RequestInFlight { kind });
        }
        table.next_id += 1;
        let id = table.next_id;
        table.in_flight.insert(kind, InFlight { id, stale: false });
        Ok(RequestGuard {
            slots: self.clone(),
            kind,
            id,
            released: false,
        })
    }

    /// Marks the in-flight request for `kind`, if any, as superseded.
    pub(crate) fn supersede(&self, kind: ArtifactKind) {
        if let Some(entry) = self.lock().in_flight.get_mut(&kind) {
            entry.stale = true;
        }
    }

    pub(crate) fn is_in_flight(&self, kind: ArtifactKind) -> bool {
        self.lock().in_flight.contains_key(&kind)
    }

    fn release(&self, kind: ArtifactKind, id: u64) -> bool {
        let mut table = self.lock();
        match table.in_flight.get(&kind) {
            Some(entry) if entry.id == id => {
                let stale = entry.stale;
                table.in_flight.remove(&kind);
                stale
            }
            _ => true,
        }
    }
}

/// Holds the slot for one request until it finishes or is dropped.
#[derive(Debug)]
pub(crate) struct RequestGuard {
    slots: RequestSlots,
    kind: ArtifactKind,
    id: u64,
    released: bool,
}

impl RequestGuard {
    pub(crate) fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Releases the slot. Returns true when the request was superseded and
    /// must not replace the current view.
    pub(crate) fn finish(mut self) -> bool {
        self.released = true;
        self.slots.release(self.kind, self.id)
    }
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        if !self.released {
            tracing::debug!(
                "[RequestSlots] {} request dropped before completion",
                self.kind
            );
            self.slots.release(self.kind, self.id);
        }
    }
}
