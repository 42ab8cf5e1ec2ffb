use std::sync::RwLock;

#[cfg(feature = "emitter")]
use std::sync::Mutex;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::error::StoreError;
use crate::event::AdsEvent;

use super::reducer::reduce;
use super::state::AdsState;
use super::view::{CategoryList, DetailView, ListView};

/// Single writer of all view state.
///
/// `dispatch` applies the pure reducer under the write lock; selectors
/// return cloned snapshots so readers never observe a half-applied event.
/// With the `emitter` feature, every applied event also fires a `"changed"`
/// notification carrying the event name, which is what UI bindings hang
/// their re-read off.
pub struct CollectionStore {
    state: RwLock<AdsState>,
    #[cfg(feature = "emitter")]
    emitter: Mutex<EventEmitter>,
}

impl CollectionStore {
    pub fn new() -> Self {
        CollectionStore {
            state: RwLock::new(AdsState::default()),
            #[cfg(feature = "emitter")]
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    /// Apply one event. Mutation happens synchronously; nothing is held
    /// across an await point.
    pub fn dispatch(&self, event: AdsEvent) -> Result<(), StoreError> {
        let name = event.name();
        {
            let mut state = self
                .state
                .write()
                .map_err(|_| StoreError::LockPoisoned("write"))?;
            let next = reduce(std::mem::take(&mut *state), event);
            *state = next;
        }
        self.notify(name)?;
        Ok(())
    }

    /// Snapshot of the whole state. Test and debugging aid; UI code should
    /// prefer the per-view selectors.
    pub fn snapshot(&self) -> Result<AdsState, StoreError> {
        Ok(self.read()?.clone())
    }

    pub fn browse(&self) -> Result<ListView, StoreError> {
        Ok(self.read()?.browse.clone())
    }

    pub fn my_ads(&self) -> Result<ListView, StoreError> {
        Ok(self.read()?.mine.clone())
    }

    pub fn detail(&self) -> Result<DetailView, StoreError> {
        Ok(self.read()?.detail.clone())
    }

    pub fn categories(&self) -> Result<CategoryList, StoreError> {
        Ok(self.read()?.categories.clone())
    }

    /// Subscribe to change notifications. The listener receives the name
    /// of the event that was applied.
    #[cfg(feature = "emitter")]
    pub fn on_change<F>(&self, listener: F) -> Result<(), StoreError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| StoreError::LockPoisoned("emitter"))?;
        emitter.on("changed", listener);
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, AdsState>, StoreError> {
        self.state.read().map_err(|_| StoreError::LockPoisoned("read"))
    }

    #[cfg(feature = "emitter")]
    fn notify(&self, event_name: &str) -> Result<(), StoreError> {
        // `emit` runs each listener on its own thread; join the handles so
        // notification is synchronous with `dispatch`, releasing the emitter
        // lock first so a listener that subscribes can't deadlock.
        let handles = {
            let mut emitter = self
                .emitter
                .lock()
                .map_err(|_| StoreError::LockPoisoned("emitter"))?;
            emitter.emit("changed", event_name.to_string())
        };
        for handle in handles {
            let _ = handle.join();
        }
        Ok(())
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&self, _event_name: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::new()
    }
}
