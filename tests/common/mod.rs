#![allow(dead_code)]

use ajaxctl::client::AjaxActionClient;
use ajaxctl::transport::{ActionRequest, ActionResponse, Transport, TransportError};
use ajaxctl::ui::{
    BusyIndicator, Capabilities, ConfirmPrompt, Dialogs, FileSaver, Navigator, SaveError, ToastKind, UiState,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

pub const BASE_URL: &str = "http://localhost:5000/";

/// Everything the user would have seen, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Confirm(String),
    BusyShown(String),
    BusyHidden,
    Success(String, String),
    Error(String, String),
    Toast(ToastKind, String),
    Reload,
    Navigate(String),
    Saved(String, Vec<u8>),
}

/// Records every capability call.
#[derive(Clone)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
    confirm_answer: bool,
    fail_save: bool,
}

impl Recorder {
    pub fn new(confirm_answer: bool) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            confirm_answer,
            fail_save: false,
        }
    }

    pub fn failing_saves(mut self) -> Self {
        self.fail_save = true;
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn capabilities(&self) -> Capabilities {
        let me = Arc::new(self.clone());
        Capabilities::default()
            .with_dialogs(me.clone())
            .with_busy(me.clone())
            .with_navigator(me.clone())
            .with_saver(me)
    }
}

#[async_trait]
impl Dialogs for Recorder {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.push(Event::Confirm(prompt.text.clone()));
        self.confirm_answer
    }

    async fn success(&self, title: &str, text: &str) {
        self.push(Event::Success(title.to_string(), text.to_string()));
    }

    async fn error(&self, title: &str, text: &str) {
        self.push(Event::Error(title.to_string(), text.to_string()));
    }

    async fn toast(&self, kind: ToastKind, title: &str) {
        self.push(Event::Toast(kind, title.to_string()));
    }
}

impl BusyIndicator for Recorder {
    fn show(&self, label: &str) {
        self.push(Event::BusyShown(label.to_string()));
    }

    fn hide(&self) {
        self.push(Event::BusyHidden);
    }
}

impl Navigator for Recorder {
    fn reload(&self) {
        self.push(Event::Reload);
    }

    fn navigate(&self, uri: &str) {
        self.push(Event::Navigate(uri.to_string()));
    }
}

#[async_trait]
impl FileSaver for Recorder {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, SaveError> {
        if self.fail_save {
            return Err(SaveError::InvalidFilename(filename.to_string()));
        }
        self.push(Event::Saved(filename.to_string(), bytes.to_vec()));
        Ok(format!("memory://{filename}"))
    }
}

/// Canned transport behaviour.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(u16, Vec<u8>),
    NetworkDown,
    Timeout,
}

impl Reply {
    pub fn json(body: &str) -> Self {
        Reply::Body(200, body.as_bytes().to_vec())
    }
}

/// Transport returning the same reply to every request, noting the busy
/// label visible while each request was in flight.
pub struct ScriptedTransport {
    reply: Reply,
    ui: UiState,
    requests: Mutex<Vec<ActionRequest>>,
    busy_during_send: Mutex<Vec<Option<String>>>,
}

impl ScriptedTransport {
    pub fn new(reply: Reply, ui: UiState) -> Self {
        Self {
            reply,
            ui,
            requests: Mutex::new(Vec::new()),
            busy_during_send: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ActionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn busy_during_send(&self) -> Vec<Option<String>> {
        self.busy_during_send.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ActionRequest) -> Result<ActionResponse, TransportError> {
        self.busy_during_send.lock().unwrap().push(self.ui.busy_label());
        self.requests.lock().unwrap().push(request);
        tokio::task::yield_now().await;

        match &self.reply {
            Reply::Body(status, body) => Ok(ActionResponse {
                status: *status,
                content_type: None,
                body: body.clone(),
            }),
            Reply::NetworkDown => Err(TransportError::Network("connection refused".to_string())),
            Reply::Timeout => Err(TransportError::Timeout(Duration::from_secs(30))),
        }
    }
}

pub struct Harness {
    pub client: AjaxActionClient,
    pub transport: Arc<ScriptedTransport>,
    pub recorder: Recorder,
    pub ui: UiState,
}

pub fn harness(reply: Reply) -> Harness {
    harness_with(reply, Recorder::new(true))
}

pub fn harness_with(reply: Reply, recorder: Recorder) -> Harness {
    let ui = UiState::new();
    let transport = Arc::new(ScriptedTransport::new(reply, ui.clone()));
    let client = AjaxActionClient::new(transport.clone(), ui.clone(), recorder.capabilities())
        .with_base_url(Url::parse(BASE_URL).unwrap());

    Harness {
        client,
        transport,
        recorder,
        ui,
    }
}
