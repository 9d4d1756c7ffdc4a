//! WebSocket accept loop and health endpoint.
//!
//! Wires axum's WebSocket upgrade to the dispatcher: each socket gets a
//! connection id and an outbound channel; inbound frames parse into
//! commands and unparseable frames are logged and skipped. The client IP
//! for rate limiting comes from `x-forwarded-for` when a proxy supplies
//! it, else from the peer address.

use crate::{dispatcher::Dispatcher, protocol::ClientCommand};
use axum::{
  extract::{
    ws::{Message, WebSocket},
    ConnectInfo, State, WebSocketUpgrade,
  },
  http::{HeaderMap, HeaderValue},
  response::IntoResponse,
  routing::get,
  Json, Router,
};
use futures::{SinkExt, StreamExt};
use serde_json::json;
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub fn app(dispatcher: Dispatcher, cors_origin: &str) -> Router {
  let cors = if cors_origin == "*" {
    CorsLayer::new().allow_origin(Any)
  } else {
    match cors_origin.parse::<HeaderValue>() {
      Ok(origin) => CorsLayer::new().allow_origin(AllowOrigin::exact(origin)),
      Err(_) => {
        tracing::warn!("Invalid CORS_ORIGIN {:?}, allowing any origin", cors_origin);
        CorsLayer::new().allow_origin(Any)
      }
    }
  };

  Router::new()
    .route("/ws", get(ws_handler))
    .route("/health", get(health_handler))
    .layer(cors)
    .with_state(dispatcher)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: &str, dispatcher: Dispatcher, cors_origin: &str) -> anyhow::Result<()> {
  let app = app(dispatcher, cors_origin);
  let listener = tokio::net::TcpListener::bind(addr).await?;
  tracing::info!("WebSocket server listening on {}", addr);
  axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
  Ok(())
}

async fn ws_handler(
  ws: WebSocketUpgrade,
  State(dispatcher): State<Dispatcher>,
  ConnectInfo(peer): ConnectInfo<SocketAddr>,
  headers: HeaderMap,
) -> impl IntoResponse {
  let ip = client_ip(&headers, peer);
  ws.on_upgrade(move |socket| handle_socket(socket, dispatcher, ip))
}

async fn health_handler(State(dispatcher): State<Dispatcher>) -> impl IntoResponse {
  let (rooms, connections) = dispatcher.health().await;
  Json(json!({
    "status": "ok",
    "rooms": rooms,
    "connections": connections,
  }))
}

fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
  headers
    .get("x-forwarded-for")
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.split(',').next())
    .map(|ip| ip.trim().to_string())
    .filter(|ip| !ip.is_empty())
    .unwrap_or_else(|| peer.ip().to_string())
}

async fn handle_socket(socket: WebSocket, dispatcher: Dispatcher, ip: String) {
  let (mut sender_ws, mut receiver_ws) = socket.split();
  let (conn, mut rx) = dispatcher.connect(ip).await;

  // Pump dispatcher events out to the socket.
  let sender_task = tokio::spawn(async move {
    while let Some(msg) = rx.recv().await {
      if sender_ws.send(Message::Text(msg.into())).await.is_err() {
        break;
      }
    }
  });

  while let Some(Ok(msg)) = receiver_ws.next().await {
    match msg {
      Message::Text(text) => match serde_json::from_str::<ClientCommand>(&text) {
        Ok(cmd) => dispatcher.handle_command(conn, cmd).await,
        Err(e) => {
          tracing::warn!("Unparseable command from {}: {}", conn, e);
        }
      },
      Message::Close(_) => break,
      _ => {}
    }
  }

  sender_task.abort();
  dispatcher.disconnect(conn).await;
}
