//! Test Doubles
//!
//! In-memory backend, transports and dialogs shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use crate::api::{ApiClient, HttpRequest, HttpResponse, Method, Transport, TransportError};
use crate::board::TaskBoard;
use crate::dialog::{Confirmer, Notifier};
use crate::models::{Task, TaskId, TaskState};
use crate::session::{MemorySession, SessionContext};
use crate::view::BoardView;

// ========================
// Dialogs
// ========================

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Answers every confirmation the same way (yes, unless told otherwise)
pub struct ScriptedConfirm {
    answer: Cell<bool>,
    prompts: RefCell<Vec<String>>,
}

impl Default for ScriptedConfirm {
    fn default() -> Self {
        Self {
            answer: Cell::new(true),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl ScriptedConfirm {
    pub fn answer(&self, yes: bool) {
        self.answer.set(yes);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirmer for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer.get()
    }
}

// ========================
// Transports
// ========================

/// Gives the same canned answer to every request
pub struct StubTransport {
    outcome: Result<HttpResponse, TransportError>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn respond(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(HttpResponse::new(status, body)),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn fail(reason: &str) -> Self {
        Self {
            outcome: Err(TransportError::Network(reason.to_string())),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.outcome.clone()
    }
}

/// Each request waits for the next queued gate to be released
pub struct GatedTransport {
    gates: RefCell<VecDeque<oneshot::Receiver<HttpResponse>>>,
}

impl GatedTransport {
    pub fn new(gates: VecDeque<oneshot::Receiver<HttpResponse>>) -> Self {
        Self {
            gates: RefCell::new(gates),
        }
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let gate = self.gates.borrow_mut().pop_front();
        match gate {
            Some(gate) => gate
                .await
                .map_err(|_| TransportError::Network("gate dropped".to_string())),
            None => Err(TransportError::Network("no gate queued".to_string())),
        }
    }
}

/// In-memory task backend speaking the same HTTP dialect as the real one
#[derive(Default)]
pub struct FakeBackend {
    tasks: RefCell<Vec<Task>>,
    next_id: Cell<TaskId>,
    requests: RefCell<Vec<HttpRequest>>,
    injected: RefCell<VecDeque<HttpResponse>>,
}

#[derive(Deserialize)]
struct NewTaskBody {
    title: String,
    username: String,
    #[serde(default)]
    state: TaskState,
}

impl FakeBackend {
    pub fn seed(&self, username: &str, title: &str, state: TaskState) -> TaskId {
        let id = self.allocate_id();
        self.tasks.borrow_mut().push(Task {
            id,
            title: title.to_string(),
            description: None,
            state,
            username: username.to_string(),
            created_at: None,
            updated_at: None,
        });
        id
    }

    /// Answer the next request with `response` instead of handling it
    pub fn fail_next(&self, response: HttpResponse) {
        self.injected.borrow_mut().push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn state_of(&self, id: TaskId) -> Option<TaskState> {
        self.tasks.borrow().iter().find(|t| t.id == id).map(|t| t.state)
    }

    fn allocate_id(&self) -> TaskId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let path = request.url.strip_prefix("/api").unwrap_or(&request.url);
        let (path, query) = path.split_once('?').unwrap_or((path, ""));

        match (request.method, path) {
            (Method::Get, "/tasks/") => {
                let username = query
                    .split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .find(|(key, _)| *key == "username")
                    .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned());
                let tasks: Vec<Task> = self
                    .tasks
                    .borrow()
                    .iter()
                    .filter(|t| username.as_ref().map_or(true, |u| &t.username == u))
                    .cloned()
                    .collect();
                ok(json!(tasks))
            }
            (Method::Post, "/tasks/") => {
                let body: NewTaskBody =
                    match serde_json::from_str(request.body.as_deref().unwrap_or("")) {
                        Ok(body) => body,
                        Err(err) => return error(422, &err.to_string()),
                    };
                let id = self.seed(&body.username, &body.title, body.state);
                ok(json!(self.find(id)))
            }
            (method, path) => {
                let Some(id) = path.strip_prefix("/tasks/").and_then(|raw| raw.parse().ok()) else {
                    return error(404, "Not Found");
                };
                if self.find(id).is_none() {
                    return error(404, "Task not found");
                }
                match method {
                    Method::Put => self.update(id, request.body.as_deref().unwrap_or("{}")),
                    Method::Delete => {
                        let removed = self.find(id);
                        self.tasks.borrow_mut().retain(|t| t.id != id);
                        ok(json!(removed))
                    }
                    Method::Get => ok(json!(self.find(id))),
                    Method::Post => error(405, "Method Not Allowed"),
                }
            }
        }
    }

    fn update(&self, id: TaskId, body: &str) -> HttpResponse {
        let patch: Value = match serde_json::from_str(body) {
            Ok(patch) => patch,
            Err(err) => return error(422, &err.to_string()),
        };
        {
            let mut tasks = self.tasks.borrow_mut();
            let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
                return error(404, "Task not found");
            };
            if let Some(title) = patch.get("title").and_then(Value::as_str) {
                task.title = title.to_string();
            }
            if let Some(state) = patch.get("state") {
                match serde_json::from_value(state.clone()) {
                    Ok(state) => task.state = state,
                    Err(err) => return error(422, &err.to_string()),
                }
            }
        }
        ok(json!(self.find(id)))
    }

    fn find(&self, id: TaskId) -> Option<Task> {
        self.tasks.borrow().iter().find(|t| t.id == id).cloned()
    }
}

fn ok(body: Value) -> HttpResponse {
    HttpResponse::new(200, body.to_string())
}

fn error(status: u16, detail: &str) -> HttpResponse {
    HttpResponse::new(status, json!({ "detail": detail }).to_string())
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        let injected = self.injected.borrow_mut().pop_front();
        Ok(injected.unwrap_or_else(|| self.handle(&request)))
    }
}

// ========================
// Harness
// ========================

/// A board wired to fakes, with handles to all of them
pub struct Harness {
    pub board: TaskBoard,
    pub backend: Rc<FakeBackend>,
    pub session: Rc<MemorySession>,
    pub notifier: Rc<RecordingNotifier>,
    pub confirm: Rc<ScriptedConfirm>,
}

impl Harness {
    pub fn new() -> Self {
        let backend = Rc::new(FakeBackend::default());
        Self::build(MemorySession::default(), backend.clone(), backend)
    }

    pub fn with_identity(identity: &str) -> Self {
        let backend = Rc::new(FakeBackend::default());
        Self::build(MemorySession::with_identity(identity), backend.clone(), backend)
    }

    pub fn with_transport(identity: &str, transport: impl Transport + 'static) -> Self {
        Self::build(
            MemorySession::with_identity(identity),
            Rc::new(FakeBackend::default()),
            Rc::new(transport),
        )
    }

    fn build(session: MemorySession, backend: Rc<FakeBackend>, transport: Rc<dyn Transport>) -> Self {
        let session = Rc::new(session);
        let notifier = Rc::new(RecordingNotifier::default());
        let confirm = Rc::new(ScriptedConfirm::default());
        let api = ApiClient::new("/api", transport, notifier.clone());
        let board = TaskBoard::new(session.clone(), api, confirm.clone());
        Self {
            board,
            backend,
            session,
            notifier,
            confirm,
        }
    }

    /// Collect every view the board publishes from now on
    pub fn record_views(&self) -> Rc<RefCell<Vec<BoardView>>> {
        let views = Rc::new(RefCell::new(Vec::new()));
        let sink = views.clone();
        self.board.subscribe(move |view| sink.borrow_mut().push(view.clone()));
        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_backend_filters_by_username() {
        let backend = FakeBackend::default();
        backend.seed("alice", "a", TaskState::Todo);
        backend.seed("mary jane", "b", TaskState::Done);

        let response =
            backend.handle(&HttpRequest::new(Method::Get, "/api/tasks/?username=mary%20jane"));
        let tasks: Vec<Task> = serde_json::from_str(&response.body).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "b");
    }

    #[test]
    fn test_memory_session_treats_empty_as_absent() {
        let session = MemorySession::default();
        session.set("");
        assert_eq!(session.get(), None);
        session.set("alice");
        assert_eq!(session.get().as_deref(), Some("alice"));
        session.clear();
        assert_eq!(session.get(), None);
    }
}
