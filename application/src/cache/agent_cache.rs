//! Keyed, expiring cache of agent handles

use super::handle::AgentHandle;
use crate::config::ChatParams;
use crate::ports::completion_provider::{ClientOptions, CompletionProvider, ProviderError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use persona_domain::{ModelId, ModelSettings};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Building a handle failed; the entry stays absent and the next request retries
#[derive(Error, Debug, Clone)]
#[error("Failed to build agent for {model}: {source}")]
pub struct ConstructionError {
    pub model: ModelId,
    #[source]
    pub source: ProviderError,
}

/// Lifecycle of one cache entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEntryState {
    /// Never requested, invalidated, or the last build failed
    Absent,
    /// A build is in flight; other callers wait for it
    Building,
    /// A handle is available and within its TTL
    Built,
    /// The TTL has elapsed; the next request rebuilds
    Expired,
}

type Slot = Arc<AsyncMutex<Option<Arc<AgentHandle>>>>;

/// Process-wide cache of agent handles keyed by [`ModelSettings`]
///
/// - At most one build runs per key; concurrent callers wait on the key's
///   slot and reuse its result. After a failed build the next waiter retries
///   on the same slot.
/// - A handle is reused until the TTL elapses.
/// - Different settings get independent entries that coexist.
/// - [`invalidate_all`](Self::invalidate_all) drops every entry at once.
///
/// The cache holds nothing session- or persona-specific, so one instance
/// can serve every session.
pub struct AgentCache {
    provider: Arc<dyn CompletionProvider>,
    options: ClientOptions,
    ttl: Duration,
    entries: Mutex<HashMap<ModelSettings, Slot>>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AgentCache {
    pub fn new(provider: Arc<dyn CompletionProvider>, params: &ChatParams) -> Self {
        Self {
            provider,
            options: ClientOptions {
                max_tokens: params.max_tokens,
            },
            ttl: params.agent_ttl,
            entries: Mutex::new(HashMap::new()),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached handle for `settings`, building it if needed
    pub async fn get_or_build(
        &self,
        settings: &ModelSettings,
    ) -> Result<Arc<AgentHandle>, ConstructionError> {
        let slot = self.slot_for(settings);
        let mut current = slot.lock().await;

        if let Some(handle) = current.as_ref() {
            if !handle.is_expired(self.ttl, Instant::now()) {
                debug!("Reusing cached agent for {}", settings);
                return Ok(Arc::clone(handle));
            }
            debug!("Agent for {} expired, rebuilding", settings);
        }

        match self.build(settings).await {
            Ok(handle) => {
                *current = Some(Arc::clone(&handle));
                Ok(handle)
            }
            Err(e) => {
                *current = None;
                drop(current);
                drop(slot);
                self.prune_expired();
                Err(e)
            }
        }
    }

    /// Current state of the entry for `settings`
    pub fn state(&self, settings: &ModelSettings) -> CacheEntryState {
        let entries = self.entries();
        let Some(slot) = entries.get(settings) else {
            return CacheEntryState::Absent;
        };
        let Ok(current) = slot.try_lock() else {
            return CacheEntryState::Building;
        };
        match current.as_ref() {
            None => CacheEntryState::Absent,
            Some(handle) if handle.is_expired(self.ttl, Instant::now()) => {
                CacheEntryState::Expired
            }
            Some(_) => CacheEntryState::Built,
        }
    }

    /// Drop the entry for one key; returns `true` if there was one
    pub fn invalidate(&self, settings: &ModelSettings) -> bool {
        self.entries().remove(settings).is_some()
    }

    /// Drop every entry
    pub fn invalidate_all(&self) {
        let mut entries = self.entries();
        if !entries.is_empty() {
            info!("Invalidating {} cached agent(s)", entries.len());
        }
        entries.clear();
    }

    /// Drop expired and empty entries that no caller is using
    ///
    /// Runs on every request; call it directly to sweep an idle cache.
    /// Returns the number of entries removed.
    pub fn prune_expired(&self) -> usize {
        let mut entries = self.entries();
        let before = entries.len();
        let now = Instant::now();
        entries.retain(|_, slot| !self.is_stale(slot, now));
        let removed = before - entries.len();
        if removed > 0 {
            debug!("Pruned {} stale agent(s)", removed);
        }
        removed
    }

    /// Number of entries, including ones still building or expired
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<ModelSettings, Slot>> {
        // A panic while holding the lock cannot leave the map half-updated
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A slot only the map references, holding no live handle
    ///
    /// Slots are cloned out of the map only under the map lock, so a strong
    /// count of one means no caller is waiting on or building in it.
    fn is_stale(&self, slot: &Slot, now: Instant) -> bool {
        if Arc::strong_count(slot) > 1 {
            return false;
        }
        match slot.try_lock() {
            Ok(current) => current
                .as_ref()
                .is_none_or(|handle| handle.is_expired(self.ttl, now)),
            Err(_) => false,
        }
    }

    /// The registered slot for `settings`, created if missing
    fn slot_for(&self, settings: &ModelSettings) -> Slot {
        self.prune_expired();
        let mut entries = self.entries();
        Arc::clone(
            entries
                .entry(settings.clone())
                .or_insert_with(|| Arc::new(AsyncMutex::new(None))),
        )
    }

    async fn build(&self, settings: &ModelSettings) -> Result<Arc<AgentHandle>, ConstructionError> {
        info!("Building agent for {}", settings);

        let client = self
            .provider
            .connect(settings, &self.options)
            .await
            .map_err(|source| {
                warn!("Agent build for {} failed: {}", settings, source);
                ConstructionError {
                    model: settings.model_id.clone(),
                    source,
                }
            })?;

        self.conversation_logger
            .log(ConversationEvent::agent_built(settings));

        Ok(Arc::new(AgentHandle::new(
            settings.clone(),
            self.options,
            client,
            Instant::now(),
        )))
    }
}
