// Stub backend for client and worker tests
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub enum StubReply {
    Json(Value),
    Text(String),
    Status(u16),
}

impl StubReply {
    pub fn json(value: Value) -> Self {
        StubReply::Json(value)
    }

    pub fn text(text: &str) -> Self {
        StubReply::Text(text.to_string())
    }

    pub fn status(code: u16) -> Self {
        StubReply::Status(code)
    }
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    delay: Duration,
    bodies: Arc<Mutex<Vec<Value>>>,
}

pub struct Stub {
    pub base_url: String,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Stub {
    pub fn last_body(&self) -> Option<Value> {
        self.bodies.lock().unwrap().last().cloned()
    }

    pub fn hits(&self) -> usize {
        self.bodies.lock().unwrap().len()
    }
}

async fn answer(State(state): State<StubState>, body: Bytes) -> Response {
    let seen = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.bodies.lock().unwrap().push(seen);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    match state.reply {
        StubReply::Json(value) => Json(value).into_response(),
        StubReply::Text(text) => text.into_response(),
        StubReply::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
    }
}

pub async fn spawn_stub(path: &str, reply: StubReply) -> Stub {
    spawn_stub_delayed(path, reply, Duration::ZERO).await
}

// Answers only after `delay`
pub async fn spawn_stub_delayed(path: &str, reply: StubReply, delay: Duration) -> Stub {
    let bodies = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(path, post(answer))
        .with_state(StubState {
            reply,
            delay,
            bodies: Arc::clone(&bodies),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Stub {
        base_url: format!("http://{}", addr),
        bodies,
    }
}

// Address nothing listens on
pub async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
