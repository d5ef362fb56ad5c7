//! Test doubles for the application ports.

use crate::ports::completion_provider::{
    ClientOptions, CompletionProvider, CompletionRequest, ModelClient, ProviderError,
    ProviderReply,
};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::preset_store::{PresetStore, PresetStoreError};
use async_trait::async_trait;
use persona_domain::{ModelSettings, PresetName};
use std::collections::{BTreeMap, VecDeque};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ==================== Model client ====================

/// What a [`ScriptedClient`] was asked
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub model: String,
    pub temperature: f64,
    pub web_search_enabled: bool,
    pub max_tokens: u32,
    pub system_prompt: String,
    pub user_text: String,
}

/// Client that replays queued results, then answers "ok"
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<ProviderReply, ProviderError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: Vec<Result<ProviderReply, ProviderError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn invoke(&self, request: CompletionRequest<'_>) -> Result<ProviderReply, ProviderError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            model: request.model_id.to_string(),
            temperature: request.temperature.value(),
            web_search_enabled: request.web_search_enabled,
            max_tokens: request.max_tokens,
            system_prompt: request.system_prompt.to_string(),
            user_text: request.user_text.to_string(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ProviderReply::text("ok")))
    }
}

// ==================== Provider ====================

/// Provider that counts connects and hands out one shared client
pub struct CountingProvider {
    client: Arc<ScriptedClient>,
    connects: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    delay: Option<Duration>,
    failures: Mutex<VecDeque<ProviderError>>,
    last_options: Mutex<Option<ClientOptions>>,
}

impl CountingProvider {
    pub fn new() -> Self {
        Self::with_client(Arc::new(ScriptedClient::new()))
    }

    pub fn with_client(client: Arc<ScriptedClient>) -> Self {
        Self {
            client,
            connects: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            delay: None,
            failures: Mutex::new(VecDeque::new()),
            last_options: Mutex::new(None),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fail_next(&self, error: ProviderError) {
        self.failures.lock().unwrap().push_back(error);
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Highest number of connects that overlapped in time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn last_options(&self) -> Option<ClientOptions> {
        *self.last_options.lock().unwrap()
    }
}

#[async_trait]
impl CompletionProvider for CountingProvider {
    async fn connect(
        &self,
        _settings: &ModelSettings,
        options: &ClientOptions,
    ) -> Result<Arc<dyn ModelClient>, ProviderError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        *self.last_options.lock().unwrap() = Some(*options);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        let failure = self.failures.lock().unwrap().pop_front();
        match failure {
            Some(error) => Err(error),
            None => {
                let client: Arc<dyn ModelClient> = self.client.clone();
                Ok(client)
            }
        }
    }
}

// ==================== Conversation logger ====================

#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<ConversationEvent>>,
}

impl RecordingLogger {
    pub fn events(&self) -> Vec<ConversationEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        self.events().iter().map(|e| e.event_type).collect()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

// ==================== Preset store ====================

/// In-memory preset store; `fail_writes` simulates a read-only disk
#[derive(Default)]
pub struct MemoryPresetStore {
    presets: Mutex<BTreeMap<PresetName, String>>,
    pub fail_writes: bool,
}

impl MemoryPresetStore {
    pub fn read_only() -> Self {
        Self {
            presets: Mutex::new(BTreeMap::new()),
            fail_writes: true,
        }
    }

    fn path(name: &PresetName) -> PathBuf {
        PathBuf::from(format!("memory/{name}.txt"))
    }
}

impl PresetStore for MemoryPresetStore {
    fn save(&self, name: &PresetName, text: &str) -> Result<PathBuf, PresetStoreError> {
        if self.fail_writes {
            return Err(PresetStoreError::io(
                Self::path(name),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        self.presets
            .lock()
            .unwrap()
            .insert(name.clone(), text.to_string());
        Ok(Self::path(name))
    }

    fn list(&self) -> Result<Vec<PresetName>, PresetStoreError> {
        Ok(self.presets.lock().unwrap().keys().cloned().collect())
    }

    fn load(&self, name: &PresetName) -> Result<String, PresetStoreError> {
        Ok(self
            .presets
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default())
    }

    fn delete(&self, name: &PresetName) -> Result<bool, PresetStoreError> {
        Ok(self.presets.lock().unwrap().remove(name).is_some())
    }
}
