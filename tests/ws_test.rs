// WebSocket transport tests over real sockets
//
// The router is served on an ephemeral port and driven by tokio-tungstenite
// clients, so frame encoding and socket teardown are exercised end to end.

use anyhow::Result;
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use brainstorm::config::Config;
use brainstorm::personas::PersonaCatalog;
use brainstorm::providers::TextGenerator;
use brainstorm::scoring::CriteriaTable;
use brainstorm::server::{create_router, AppState};
use brainstorm::store::InMemoryIdeaStore;

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

const WAIT: Duration = Duration::from_secs(2);

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

struct FixedGenerator;

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok("1. Community solar".to_string())
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn model(&self) -> &str {
        "fixed"
    }
}

async fn spawn_server() -> (SocketAddr, Arc<AppState>) {
    let config = Config::default();
    let state = Arc::new(AppState::new(
        &config,
        Arc::new(PersonaCatalog::builtin().expect("builtin personas")),
        Arc::new(CriteriaTable::builtin()),
        Arc::new(FixedGenerator),
        Arc::new(InMemoryIdeaStore::new()),
    ));
    let app = create_router(Arc::clone(&state), &config.server);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let addr = listener.local_addr().expect("no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });
    (addr, state)
}

async fn connect(addr: SocketAddr) -> Client {
    let (ws, _) = tokio_tungstenite::connect_async(format!("ws://{addr}/ws"))
        .await
        .expect("websocket handshake failed");
    ws
}

async fn send(ws: &mut Client, frame: Value) {
    ws.send(Message::Text(frame.to_string()))
        .await
        .expect("failed to send frame");
}

/// Next text frame as JSON, or `None` if nothing arrives within `wait`
async fn next_frame(ws: &mut Client, wait: Duration) -> Option<Value> {
    let deadline = tokio::time::Instant::now() + wait;
    loop {
        let msg = tokio::time::timeout_at(deadline, ws.next()).await.ok()??;
        if let Message::Text(text) = msg.expect("socket error") {
            return Some(serde_json::from_str(&text).expect("frame is not JSON"));
        }
    }
}

async fn wait_until(mut check: impl FnMut() -> bool) {
    tokio::time::timeout(WAIT, async {
        while !check() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_relay_reaches_only_other_session_members() {
    let (addr, state) = spawn_server().await;
    let mut a = connect(addr).await;
    let mut b = connect(addr).await;
    let mut c = connect(addr).await;

    send(&mut a, json!({"event": "joinSession", "data": "abc"})).await;
    send(&mut b, json!({"event": "joinSession", "data": "abc"})).await;
    send(&mut c, json!({"event": "joinSession", "data": "xyz"})).await;
    wait_until(|| {
        state.broadcaster.members("abc").len() == 2 && state.broadcaster.members("xyz").len() == 1
    })
    .await;

    send(
        &mut a,
        json!({"event": "mindmapUpdate", "data": {"sessionId": "abc", "n": 1}}),
    )
    .await;

    let frame = next_frame(&mut b, WAIT).await.expect("peer missed relay");
    assert_eq!(
        frame,
        json!({"event": "mindmapChanged", "data": {"sessionId": "abc", "n": 1}})
    );
    assert!(next_frame(&mut a, Duration::from_millis(200)).await.is_none());
    assert!(next_frame(&mut c, Duration::from_millis(200)).await.is_none());
}

#[tokio::test]
async fn test_new_idea_frame_over_socket() {
    let (addr, state) = spawn_server().await;
    let mut member = connect(addr).await;
    send(&mut member, json!({"event": "joinSession", "data": "abc"})).await;
    wait_until(|| state.broadcaster.members("abc").len() == 1).await;

    let response: Value = reqwest::Client::new()
        .post(format!("http://{addr}/api/brainstorm"))
        .json(&json!({"prompt": "Energy", "persona": "visionary", "sessionId": "abc"}))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("body is not JSON");

    let frame = next_frame(&mut member, WAIT).await.expect("member missed newIdea");
    assert_eq!(frame["event"], "newIdea");
    assert_eq!(frame["data"]["id"], response["idea"]["id"]);
    assert_eq!(frame["data"]["sessionId"], "abc");
}

#[tokio::test]
async fn test_malformed_frame_gets_error_and_socket_stays_open() {
    let (addr, state) = spawn_server().await;
    let mut client = connect(addr).await;

    client
        .send(Message::Text("not json".to_string()))
        .await
        .expect("failed to send frame");
    let frame = next_frame(&mut client, WAIT).await.expect("no error frame");
    assert_eq!(frame["event"], "error");
    assert!(frame["data"]["message"].is_string());

    send(&mut client, json!({"event": "joinSession", "data": "abc"})).await;
    wait_until(|| state.broadcaster.members("abc").len() == 1).await;
}

#[tokio::test]
async fn test_closing_socket_removes_connection() {
    let (addr, state) = spawn_server().await;
    let mut a = connect(addr).await;
    let mut b = connect(addr).await;
    send(&mut a, json!({"event": "joinSession", "data": "abc"})).await;
    send(&mut b, json!({"event": "joinSession", "data": "abc"})).await;
    wait_until(|| state.broadcaster.members("abc").len() == 2).await;
    assert_eq!(state.broadcaster.connection_count(), 2);

    a.close(None).await.expect("close failed");
    wait_until(|| state.broadcaster.connection_count() == 1).await;
    assert_eq!(state.broadcaster.members("abc").len(), 1);

    drop(b);
    wait_until(|| state.broadcaster.connection_count() == 0).await;
    assert!(state.broadcaster.members("abc").is_empty());
}
