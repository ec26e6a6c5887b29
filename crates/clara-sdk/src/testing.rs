use std::{
    io,
    ops::Deref,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::Value;
use tracing::Subscriber;

pub const TEST_JWK: &str = r#"{
    "kty": "RSA",
    "n": "sXchDaQebHnPiGvyDOAT4saGEUetSyo9MKLOoWFsueri23bOdgWp4Dy1Wl",
    "e": "AQAB",
    "d": "VFCWOqXr8nvZNyaaJLXdnNPXZKRaWCjkU5Q2egQQpTBMwhprMzWzpR8Sxq1O"
}"#;

/// Empty directory under the system temp dir, removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl Deref for TempDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub fn temp_dir() -> TempDir {
    let path = std::env::temp_dir().join(format!("clara-sdk-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&path).unwrap();
    TempDir { path }
}

/// Log lines written by a capturing subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Plain-text subscriber at info level writing into the returned buffer.
pub fn capture_logs() -> (CapturedLogs, impl Subscriber + Send + Sync + 'static) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    (logs, subscriber)
}

#[derive(Clone)]
struct MarketState {
    seen: Arc<Mutex<Vec<Value>>>,
    status: StatusCode,
    body: String,
}

/// In-process market answering every `POST /v1/tasks` with a fixed status and body.
pub struct FakeMarket {
    pub endpoint: String,
    seen: Arc<Mutex<Vec<Value>>>,
}

impl FakeMarket {
    /// Request bodies received so far.
    pub fn requests(&self) -> Vec<Value> {
        self.seen.lock().unwrap().clone()
    }
}

pub async fn spawn_market(status: StatusCode, body: String) -> FakeMarket {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = MarketState {
        seen: Arc::clone(&seen),
        status,
        body,
    };
    let app = Router::new()
        .route("/v1/tasks", post(register_task))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeMarket {
        endpoint: format!("http://{addr}"),
        seen,
    }
}

/// Market that accepts connections and never answers.
pub async fn spawn_silent_market() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    format!("http://{addr}")
}

async fn register_task(
    State(state): State<MarketState>,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    state.seen.lock().unwrap().push(body);
    (state.status, state.body)
}
