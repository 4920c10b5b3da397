//! Scripted executor for state-machine tests. No network involved.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use url::Url;

use shelf_http::{ApiRequest, ApiResponse, FileGateway, HttpExecutor, Method};

#[derive(Clone)]
enum Scripted {
    Respond(u16, String),
    Fail(String),
}

/// Executor answering from a per-path script and recording every request.
///
/// Unscripted paths answer `200 []`, so navigation always finds a listing.
/// Clones share the script and the recording, letting a test keep a handle
/// after moving the executor into a gateway.
#[derive(Clone, Default)]
pub(crate) struct ScriptedExecutor {
    scripts: Arc<Mutex<HashMap<String, Scripted>>>,
    recorded: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        ScriptedExecutor::default()
    }

    /// Answer `200` with `json` for requests to `path`.
    pub fn with_listing(self, path: &str, json: &str) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(path.to_string(), Scripted::Respond(200, json.to_string()));
        self
    }

    /// Answer a bare status for requests to `path`.
    pub fn with_status(self, path: &str, status: u16) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(path.to_string(), Scripted::Respond(status, String::new()));
        self
    }

    /// Fail requests to `path` at the transport level.
    pub fn with_failure(self, path: &str, message: &str) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(path.to_string(), Scripted::Fail(message.to_string()));
        self
    }

    pub fn recorded(&self) -> Vec<ApiRequest> {
        self.recorded.lock().unwrap().clone()
    }

    /// How many listing fetches went to `path`.
    pub fn list_count(&self, path: &str) -> usize {
        self.recorded()
            .iter()
            .filter(|r| r.method == Method::GET && r.path.to_string() == path)
            .count()
    }
}

impl HttpExecutor for ScriptedExecutor {
    fn execute(&self, _base: &Url, request: &ApiRequest) -> Result<ApiResponse, String> {
        self.recorded.lock().unwrap().push(request.clone());

        let script = self
            .scripts
            .lock()
            .unwrap()
            .get(&request.path.to_string())
            .cloned();
        match script {
            Some(Scripted::Fail(message)) => Err(message),
            Some(Scripted::Respond(status, body_text)) => Ok(response(status, &body_text)),
            None => Ok(response(200, "[]")),
        }
    }
}

fn response(status: u16, body_text: &str) -> ApiResponse {
    ApiResponse {
        status,
        status_text: "Scripted".to_string(),
        headers: HashMap::new(),
        body: serde_json::from_str(body_text).unwrap_or(serde_json::Value::Null),
        body_text: body_text.to_string(),
    }
}

/// A gateway over a scripted executor with a fixed test base URL.
pub(crate) fn gateway(executor: ScriptedExecutor) -> FileGateway<ScriptedExecutor> {
    FileGateway::with_executor(Url::parse("http://localhost:9000").unwrap(), executor)
}
