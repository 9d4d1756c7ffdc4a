//! The event dispatcher: single authority between client connections and
//! room/engine state.
//!
//! Every inbound command, timer callback and disconnect funnels through
//! here. Mutations for a room happen under that room's lock and outbound
//! events are queued before the lock is released, so broadcasts within a
//! room observe command order. Engines stay the trust boundary for private
//! state: the dispatcher only picks recipients and forwards the per-seat
//! payloads the engine builds.

use crate::{
  analytics::{AnalyticsEvent, AnalyticsSink},
  error::{GameError, RoomError},
  games::{boggle::ROUND_SECS, Engine, GameKind},
  leaderboard::Leaderboard,
  protocol::{ClientCommand, ServerEvent},
  rate_limit::{JoinLimiter, JoinLimits},
  room::{ConnId, Room, RoomManager},
};
use serde_json::json;
use std::{
  collections::HashMap,
  sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
  },
  time::Duration,
};
use tokio::sync::{mpsc, RwLock};

/// How long a vacated seat stays quiet before the room hears about it.
const DISCONNECT_GRACE: Duration = Duration::from_secs(2);

const MAX_NAME_LEN: usize = 30;

struct ClientHandle {
  tx: mpsc::UnboundedSender<String>,
  ip: String,
}

#[derive(Debug, Clone)]
struct Session {
  room_id: String,
  name: String,
}

pub struct Dispatcher {
  rooms: RoomManager,
  clients: Arc<RwLock<HashMap<ConnId, ClientHandle>>>,
  sessions: Arc<RwLock<HashMap<ConnId, Session>>>,
  limiter: JoinLimiter,
  leaderboard: Leaderboard,
  analytics: Arc<dyn AnalyticsSink>,
  next_conn_id: Arc<AtomicU64>,
}

impl Clone for Dispatcher {
  fn clone(&self) -> Self {
    Self {
      rooms: self.rooms.clone(),
      clients: self.clients.clone(),
      sessions: self.sessions.clone(),
      limiter: self.limiter.clone(),
      leaderboard: self.leaderboard.clone(),
      analytics: self.analytics.clone(),
      next_conn_id: self.next_conn_id.clone(),
    }
  }
}

impl Dispatcher {
  pub fn new(analytics: Arc<dyn AnalyticsSink>) -> Self {
    Self::with_limits(analytics, JoinLimits::default())
  }

  pub fn with_limits(analytics: Arc<dyn AnalyticsSink>, limits: JoinLimits) -> Self {
    Self {
      rooms: RoomManager::new(),
      clients: Arc::new(RwLock::new(HashMap::new())),
      sessions: Arc::new(RwLock::new(HashMap::new())),
      limiter: JoinLimiter::new(limits),
      leaderboard: Leaderboard::new(),
      analytics,
      next_conn_id: Arc::new(AtomicU64::new(1)),
    }
  }

  pub fn leaderboard(&self) -> &Leaderboard {
    &self.leaderboard
  }

  /// Register a connection; the receiver drains this connection's outbound
  /// events.
  pub async fn connect(&self, ip: String) -> (ConnId, mpsc::UnboundedReceiver<String>) {
    let conn = self.next_conn_id.fetch_add(1, Ordering::Relaxed);
    let (tx, rx) = mpsc::unbounded_channel();
    self.clients.write().await.insert(conn, ClientHandle { tx, ip });
    tracing::info!("Connection {} registered", conn);
    (conn, rx)
  }

  /// Counts for the health snapshot: (rooms, connections).
  pub async fn health(&self) -> (usize, usize) {
    (self.rooms.room_count().await, self.clients.read().await.len())
  }

  pub async fn handle_command(&self, conn: ConnId, cmd: ClientCommand) {
    match cmd {
      ClientCommand::JoinGame { room_id, player_name, reconnect, game_type } => {
        self.join_game(conn, room_id, player_name, reconnect, game_type).await;
      }
      ClientCommand::StartGame => self.start_game(conn).await,
      ClientCommand::MakeMove { from, to, promotion } => {
        self.make_move(conn, &from, &to, promotion).await;
      }
      ClientCommand::CdiPlay { card_ids } => self.cdi_play(conn, &card_ids).await,
      ClientCommand::CdiPass => self.cdi_pass(conn).await,
      ClientCommand::BoggleSubmit { word } => self.boggle_submit(conn, &word).await,
      ClientCommand::BoggleEnd => self.boggle_end(conn).await,
      ClientCommand::BingoCall => self.bingo_call(conn).await,
      ClientCommand::RequestUndo => self.request_undo(conn).await,
      ClientCommand::ApproveUndo => self.answer_undo(conn, true).await,
      ClientCommand::DeclineUndo => self.answer_undo(conn, false).await,
      ClientCommand::Resign => self.resign(conn).await,
      ClientCommand::Ping => self.send(conn, &ServerEvent::Pong).await,
    }
  }

  /// Drop a connection. The seat stays reserved under its name; after a
  /// short grace the room is told, and the room manager arms deletion when
  /// nobody is left.
  pub async fn disconnect(&self, conn: ConnId) {
    self.clients.write().await.remove(&conn);
    let session = self.sessions.write().await.remove(&conn);
    let session = match session {
      Some(s) => s,
      None => return,
    };
    tracing::info!("Connection {} ({}) left room {}", conn, session.name, session.room_id);

    let outcome = self.rooms.leave_room(&session.room_id, conn).await;
    match outcome {
      Some(outcome) if outcome.was_player => {
        let dispatcher = self.clone();
        tokio::spawn(async move {
          tokio::time::sleep(DISCONNECT_GRACE).await;
          dispatcher.notify_disconnected(&outcome.room_id, &outcome.name).await;
        });
      }
      Some(outcome) => {
        // Spectators vanish immediately.
        if let Some(room) = self.rooms.get_room(&outcome.room_id).await {
          let room = room.lock().await;
          self.broadcast_room_update(&room).await;
        }
      }
      None => {}
    }
  }

  /// Fires after the disconnect grace: if the seat is still vacant, the
  /// rest of the room hears about it.
  async fn notify_disconnected(&self, room_id: &str, name: &str) {
    let room = match self.rooms.get_room(room_id).await {
      Some(room) => room,
      None => return,
    };
    let room = room.lock().await;
    let still_gone = room
      .seats
      .iter()
      .any(|s| s.name == name && s.conn.is_none());
    if still_gone {
      self
        .broadcast(
          &room.connections(),
          &ServerEvent::PlayerDisconnected { player_name: name.to_string() },
        )
        .await;
      self.broadcast_room_update(&room).await;
    }
  }

  async fn join_game(
    &self,
    conn: ConnId,
    room_id: Option<String>,
    player_name: String,
    reconnect: bool,
    game_type: Option<GameKind>,
  ) {
    let name: String = player_name.trim().chars().take(MAX_NAME_LEN).collect();
    if name.is_empty() {
      self.fail(conn, &RoomError::NameRequired).await;
      return;
    }

    if !reconnect {
      let ip = match self.clients.read().await.get(&conn) {
        Some(client) => client.ip.clone(),
        None => return,
      };
      if !self.limiter.check_allowed(&ip).await {
        self.fail(conn, &RoomError::RateLimited).await;
        return;
      }
    }

    // A connection that was already somewhere leaves that room first.
    if let Some(old) = self.sessions.write().await.remove(&conn) {
      self.rooms.leave_room(&old.room_id, conn).await;
    }

    let room_id = match room_id {
      Some(id) => id,
      None => match game_type {
        Some(kind) => self.rooms.create_room(kind).await,
        None => {
          self.send(conn, &ServerEvent::Error { message: "Game type required".into() }).await;
          return;
        }
      },
    };

    let outcome = match self.rooms.join_room(&room_id, conn, &name).await {
      Some(outcome) => outcome,
      None => {
        self.fail(conn, &RoomError::NotFound).await;
        return;
      }
    };

    self.sessions.write().await.insert(
      conn,
      Session { room_id: room_id.clone(), name: name.clone() },
    );

    self
      .send(
        conn,
        &ServerEvent::Joined {
          room_id: room_id.clone(),
          color: outcome.color.clone(),
          reconnected: outcome.reconnected,
        },
      )
      .await;

    if let Some(room) = self.rooms.get_room(&room_id).await {
      let room = room.lock().await;
      self.broadcast_room_update(&room).await;
      // Mid-game joiners and reconnections get a snapshot for their seat.
      if let Some(engine) = &room.engine {
        let seat = room.seat_index_by_name(&name);
        let state = self.personalized_state(&room, engine, seat);
        self.send(conn, &ServerEvent::GameState(state)).await;
      }
    }

    self
      .analytics
      .track(AnalyticsEvent::new("join", &room_id, game_type, Some(&name)))
      .await;
  }

  async fn start_game(&self, conn: ConnId) {
    let (room, session) = match self.seated(conn).await {
      Ok(found) => found,
      Err(e) => return self.fail(conn, &e).await,
    };
    let mut room = room.lock().await;
    if room.seat_index_by_name(&session.name) != Some(0) {
      return self.fail(conn, &RoomError::HostOnly).await;
    }
    if room.engine.is_some() {
      return self.fail(conn, &RoomError::AlreadyRunning).await;
    }
    if room.seats.len() < room.kind.min_seats() {
      return self.fail(conn, &RoomError::NotEnoughPlayers).await;
    }

    let kind = room.kind;
    room.engine = Some(Engine::start(kind, room.seats.len()));
    room.pending_undo = None;
    tracing::info!("Room {} started a {:?} game", room.id, kind);

    self.broadcast(&room.connections(), &ServerEvent::GameStarted).await;
    self.broadcast_state(&room).await;

    if kind == GameKind::Boggle {
      let dispatcher = self.clone();
      let room_id = room.id.clone();
      tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(ROUND_SECS)).await;
        dispatcher.close_boggle_round(&room_id).await;
      });
    }

    self
      .analytics
      .track(AnalyticsEvent::new("start", &room.id, Some(kind), Some(&session.name)))
      .await;
  }

  async fn make_move(&self, conn: ConnId, from: &str, to: &str, promotion: Option<char>) {
    let (room, session) = match self.seated(conn).await {
      Ok(found) => found,
      Err(e) => return self.reject_move(conn, e.to_string()).await,
    };
    let mut room = room.lock().await;
    let seat = room.seat_index_by_name(&session.name);

    let turn = match &room.engine {
      Some(Engine::Chess(g)) => g.turn(),
      Some(Engine::Xiangqi(g)) => g.turn(),
      Some(_) => {
        return self.send(conn, &ServerEvent::Error { message: "Unsupported command for this game".into() }).await;
      }
      None => return self.reject_move(conn, RoomError::NotStarted.to_string()).await,
    };

    // Seat 0 plays the first color (`w`), seat 1 the second (`b`).
    let authorized = matches!((seat, turn), (Some(0), 'w') | (Some(1), 'b'));
    if !authorized {
      return self.reject_move(conn, GameError::NotYourTurn.to_string()).await;
    }

    let result = match room.engine.as_mut() {
      Some(Engine::Chess(g)) => g.move_piece(from, to, promotion),
      Some(Engine::Xiangqi(g)) => g.move_piece(from, to),
      _ => unreachable!("family checked above"),
    };

    match result {
      Err(e) => self.reject_move(conn, e.to_string()).await,
      Ok(()) => {
        // A move supersedes any outstanding undo request.
        room.pending_undo = None;
        self.broadcast_state(&room).await;
        self
          .analytics
          .track(AnalyticsEvent::new("move", &room.id, Some(room.kind), Some(&session.name)))
          .await;

        let over = room.engine.as_ref().is_some_and(|e| e.is_game_over());
        if over {
          let reason = match room.engine.as_ref() {
            Some(Engine::Chess(g)) if g.winner() == Some("draw") => "stalemate",
            Some(Engine::Xiangqi(g)) if !g.in_check() => "stalemate",
            _ => "checkmate",
          };
          self.finish_game(&mut room, reason).await;
        }
      }
    }
  }

  async fn cdi_play(&self, conn: ConnId, card_ids: &[u8]) {
    let (room, session) = match self.seated(conn).await {
      Ok(found) => found,
      Err(e) => return self.reject_move(conn, e.to_string()).await,
    };
    let mut room = room.lock().await;
    let seat = match room.seat_index_by_name(&session.name) {
      Some(seat) => seat,
      None => return self.reject_move(conn, GameError::NotYourTurn.to_string()).await,
    };

    let result = match room.engine.as_mut() {
      Some(Engine::BigTwo(g)) => g.play(seat, card_ids),
      Some(_) => {
        return self.send(conn, &ServerEvent::Error { message: "Unsupported command for this game".into() }).await;
      }
      None => return self.reject_move(conn, RoomError::NotStarted.to_string()).await,
    };

    match result {
      Err(e) => self.reject_move(conn, e.to_string()).await,
      Ok(()) => {
        self.broadcast_state(&room).await;
        self
          .analytics
          .track(AnalyticsEvent::new("move", &room.id, Some(GameKind::BigTwo), Some(&session.name)))
          .await;
        let over = room.engine.as_ref().is_some_and(|e| e.is_game_over());
        if over {
          self.finish_game(&mut room, "all cards played").await;
        }
      }
    }
  }

  async fn cdi_pass(&self, conn: ConnId) {
    let (room, session) = match self.seated(conn).await {
      Ok(found) => found,
      Err(e) => return self.reject_move(conn, e.to_string()).await,
    };
    let mut room = room.lock().await;
    let seat = match room.seat_index_by_name(&session.name) {
      Some(seat) => seat,
      None => return self.reject_move(conn, GameError::NotYourTurn.to_string()).await,
    };

    let result = match room.engine.as_mut() {
      Some(Engine::BigTwo(g)) => g.pass(seat),
      Some(_) => {
        return self.send(conn, &ServerEvent::Error { message: "Unsupported command for this game".into() }).await;
      }
      None => return self.reject_move(conn, RoomError::NotStarted.to_string()).await,
    };

    match result {
      Err(e) => self.reject_move(conn, e.to_string()).await,
      Ok(()) => self.broadcast_state(&room).await,
    }
  }

  async fn boggle_submit(&self, conn: ConnId, word: &str) {
    let (room, session) = match self.seated(conn).await {
      Ok(found) => found,
      Err(e) => {
        return self
          .send(conn, &ServerEvent::BoggleReject { word: word.to_string(), reason: e.to_string() })
          .await;
      }
    };
    let mut room = room.lock().await;
    let seat = room.seat_index_by_name(&session.name);

    let result = match (room.engine.as_mut(), seat) {
      (Some(Engine::Boggle(g)), Some(seat)) => g.submit_word(seat, word),
      (Some(Engine::Boggle(_)), None) => Err(GameError::NotYourTurn),
      (Some(_), _) => {
        return self.send(conn, &ServerEvent::Error { message: "Unsupported command for this game".into() }).await;
      }
      (None, _) => {
        return self
          .send(
            conn,
            &ServerEvent::BoggleReject {
              word: word.to_string(),
              reason: RoomError::NotStarted.to_string(),
            },
          )
          .await;
      }
    };

    match result {
      Err(e) => {
        self
          .send(conn, &ServerEvent::BoggleReject { word: word.to_string(), reason: e.to_string() })
          .await;
      }
      Ok(accepted) => {
        self.send(conn, &ServerEvent::BoggleAccept { word: accepted }).await;
        if let Some(Engine::Boggle(g)) = room.engine.as_ref() {
          // Word counts are public; the words themselves stay hidden until
          // the round ends.
          self
            .broadcast(
              &room.connections(),
              &ServerEvent::BoggleCounts { submission_counts: g.submission_counts() },
            )
            .await;
        }
      }
    }
  }

  async fn boggle_end(&self, conn: ConnId) {
    let (room, session) = match self.seated(conn).await {
      Ok(found) => found,
      Err(e) => return self.fail(conn, &e).await,
    };
    let mut room = room.lock().await;
    if room.seat_index_by_name(&session.name) != Some(0) {
      return self.fail(conn, &RoomError::HostOnly).await;
    }
    match room.engine.as_mut() {
      Some(Engine::Boggle(g)) => {
        g.end_round();
      }
      Some(_) => {
        return self.send(conn, &ServerEvent::Error { message: "Unsupported command for this game".into() }).await;
      }
      None => return self.fail(conn, &RoomError::NotStarted).await,
    }
    self.broadcast_state(&room).await;
    self.finish_game(&mut room, "round over").await;
  }

  /// Timer path for the round end; a no-op when the host already ended it.
  async fn close_boggle_round(&self, room_id: &str) {
    let room = match self.rooms.get_room(room_id).await {
      Some(room) => room,
      None => return,
    };
    let mut room = room.lock().await;
    match room.engine.as_mut() {
      Some(Engine::Boggle(g)) if !g.is_game_over() => {
        g.end_round();
      }
      _ => return,
    }
    self.broadcast_state(&room).await;
    self.finish_game(&mut room, "round over").await;
  }

  async fn bingo_call(&self, conn: ConnId) {
    let (room, session) = match self.seated(conn).await {
      Ok(found) => found,
      Err(e) => return self.reject_move(conn, e.to_string()).await,
    };
    let mut room = room.lock().await;
    if room.seat_index_by_name(&session.name) != Some(0) {
      return self.reject_move(conn, GameError::NotTheCaller.to_string()).await;
    }

    let result = match room.engine.as_mut() {
      Some(Engine::Bingo(g)) => g.call_number(0),
      Some(_) => {
        return self.send(conn, &ServerEvent::Error { message: "Unsupported command for this game".into() }).await;
      }
      None => return self.reject_move(conn, RoomError::NotStarted.to_string()).await,
    };

    match result {
      Err(e) => self.reject_move(conn, e.to_string()).await,
      Ok(_) => {
        self.broadcast_state(&room).await;
        let over = room.engine.as_ref().is_some_and(|e| e.is_game_over());
        if over {
          self.finish_game(&mut room, "bingo").await;
        }
      }
    }
  }

  async fn request_undo(&self, conn: ConnId) {
    let (room, session) = match self.seated(conn).await {
      Ok(found) => found,
      Err(e) => return self.fail(conn, &e).await,
    };
    let mut room = room.lock().await;
    if !room.kind.is_board_game() || room.engine.is_none() {
      return self.send(conn, &ServerEvent::Error { message: GameError::UndoUnavailable.to_string() }).await;
    }
    let seat = match room.seat_index_by_name(&session.name) {
      Some(seat @ (0 | 1)) => seat,
      _ => return self.fail(conn, &RoomError::NotSeated).await,
    };
    room.pending_undo = Some(seat);

    // Route the request to the opposing seat.
    let opponent = room.seats.get(1 - seat).and_then(|s| s.conn);
    if let Some(opponent) = opponent {
      self
        .send(opponent, &ServerEvent::UndoRequested { from: session.name.clone() })
        .await;
    }
  }

  async fn answer_undo(&self, conn: ConnId, approve: bool) {
    let (room, session) = match self.seated(conn).await {
      Ok(found) => found,
      Err(e) => return self.fail(conn, &e).await,
    };
    let mut room = room.lock().await;
    let requester = match room.pending_undo {
      Some(requester) => requester,
      None => {
        return self.send(conn, &ServerEvent::Error { message: "No undo request pending".into() }).await;
      }
    };
    // Only the requester's opponent may answer.
    if room.seat_index_by_name(&session.name) != Some(1 - requester) {
      return self.send(conn, &ServerEvent::Error { message: "No undo request pending".into() }).await;
    }
    room.pending_undo = None;

    if approve {
      let undone = match room.engine.as_mut() {
        Some(Engine::Chess(g)) => g.undo(),
        Some(Engine::Xiangqi(g)) => g.undo(),
        _ => false,
      };
      if undone {
        self.broadcast_state(&room).await;
      } else {
        self.send(conn, &ServerEvent::Error { message: GameError::UndoUnavailable.to_string() }).await;
      }
    } else if let Some(requester_conn) = room.seats.get(requester).and_then(|s| s.conn) {
      self.send(requester_conn, &ServerEvent::UndoDeclined).await;
    }
  }

  async fn resign(&self, conn: ConnId) {
    let (room, session) = match self.seated(conn).await {
      Ok(found) => found,
      Err(e) => return self.fail(conn, &e).await,
    };
    let mut room = room.lock().await;
    if !room.kind.is_board_game() {
      return self.send(conn, &ServerEvent::Error { message: "Unsupported command for this game".into() }).await;
    }
    if room.engine.is_none() {
      return self.fail(conn, &RoomError::NotStarted).await;
    }
    let seat = match room.seat_index_by_name(&session.name) {
      Some(seat @ (0 | 1)) => seat,
      _ => return self.fail(conn, &RoomError::NotSeated).await,
    };

    let winner_seat = 1 - seat;
    let winner_color = room.kind.seat_colors()[winner_seat];
    let winner_name = room.seats[winner_seat].name.clone();
    tracing::info!("{} resigned in room {}", session.name, room.id);

    self
      .broadcast(
        &room.connections(),
        &ServerEvent::GameOver { winner: json!(winner_color), reason: "resign".into() },
      )
      .await;
    self.leaderboard.record_win(room.kind, &winner_name).await;
    room.engine = None;
    room.pending_undo = None;
    self
      .analytics
      .track(AnalyticsEvent::new("end", &room.id, Some(room.kind), Some(&winner_name)))
      .await;
  }

  /// Game-over cleanup: announce, credit the leaderboard, detach the
  /// engine. The room itself lingers for the deletion grace window.
  async fn finish_game(&self, room: &mut Room, reason: &str) {
    let engine = match room.engine.as_ref() {
      Some(engine) => engine,
      None => return,
    };
    let winner = engine.winner_value();
    let names = winner_names(room, engine);

    self
      .broadcast(
        &room.connections(),
        &ServerEvent::GameOver { winner, reason: reason.to_string() },
      )
      .await;
    for name in &names {
      self.leaderboard.record_win(room.kind, name).await;
    }
    tracing::info!("Room {} game over ({}), winners: {:?}", room.id, reason, names);

    room.engine = None;
    room.pending_undo = None;
    self
      .analytics
      .track(AnalyticsEvent::new("end", &room.id, Some(room.kind), None))
      .await;
  }

  async fn seated(&self, conn: ConnId) -> Result<(Arc<tokio::sync::Mutex<Room>>, Session), RoomError> {
    let session = self
      .sessions
      .read()
      .await
      .get(&conn)
      .cloned()
      .ok_or(RoomError::NotSeated)?;
    let room = self
      .rooms
      .get_room(&session.room_id)
      .await
      .ok_or(RoomError::NotFound)?;
    Ok((room, session))
  }

  /// Per-recipient state payload; every family except Boggle carries the
  /// public player roster.
  fn personalized_state(&self, room: &Room, engine: &Engine, seat: Option<usize>) -> serde_json::Value {
    let mut state = engine.state_for(seat);
    if engine.kind() != GameKind::Boggle {
      state["players"] = json!(room.players());
    }
    state
  }

  /// Emit `game_state` to everyone in the room, personalized per seat for
  /// the families with hidden state.
  async fn broadcast_state(&self, room: &Room) {
    let engine = match room.engine.as_ref() {
      Some(engine) => engine,
      None => return,
    };
    match engine.kind() {
      GameKind::BigTwo => {
        for (seat, s) in room.seats.iter().enumerate() {
          if let Some(conn) = s.conn {
            let state = self.personalized_state(room, engine, Some(seat));
            self.send(conn, &ServerEvent::GameState(state)).await;
          }
        }
        let spectator_state = self.personalized_state(room, engine, None);
        for s in &room.spectators {
          self.send(s.conn, &ServerEvent::GameState(spectator_state.clone())).await;
        }
      }
      _ => {
        let state = self.personalized_state(room, engine, None);
        self
          .broadcast(&room.connections(), &ServerEvent::GameState(state))
          .await;
      }
    }
  }

  async fn broadcast_room_update(&self, room: &Room) {
    self
      .broadcast(
        &room.connections(),
        &ServerEvent::RoomUpdate {
          players: room.players(),
          spectators: room.spectator_names(),
        },
      )
      .await;
  }

  async fn send(&self, conn: ConnId, event: &ServerEvent) {
    let json = match serde_json::to_string(event) {
      Ok(json) => json,
      Err(e) => {
        tracing::error!("Failed to serialize event: {}", e);
        return;
      }
    };
    if let Some(client) = self.clients.read().await.get(&conn) {
      let _ = client.tx.send(json);
    }
  }

  async fn broadcast(&self, conns: &[ConnId], event: &ServerEvent) {
    let json = match serde_json::to_string(event) {
      Ok(json) => json,
      Err(e) => {
        tracing::error!("Failed to serialize event: {}", e);
        return;
      }
    };
    let clients = self.clients.read().await;
    for conn in conns {
      if let Some(client) = clients.get(conn) {
        let _ = client.tx.send(json.clone());
      }
    }
  }

  async fn fail(&self, conn: ConnId, error: &RoomError) {
    self.send(conn, &ServerEvent::Error { message: error.to_string() }).await;
  }

  async fn reject_move(&self, conn: ConnId, reason: String) {
    self.send(conn, &ServerEvent::InvalidMove { reason }).await;
  }
}

/// ######################################## TESTS ########################################

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analytics::NoopAnalytics;
  use crate::games::boggle::BoggleGame;
  use serde_json::Value;
  use tokio::sync::mpsc::UnboundedReceiver;

  fn dispatcher() -> Dispatcher {
    Dispatcher::new(Arc::new(NoopAnalytics))
  }

  fn recv_all(rx: &mut UnboundedReceiver<String>) -> Vec<Value> {
    let mut out = Vec::new();
    while let Ok(msg) = rx.try_recv() {
      out.push(serde_json::from_str(&msg).unwrap());
    }
    out
  }

  fn find<'a>(events: &'a [Value], name: &str) -> Option<&'a Value> {
    events.iter().find(|e| e["event"] == name)
  }

  async fn join(
    d: &Dispatcher,
    conn: ConnId,
    room_id: Option<&str>,
    name: &str,
    kind: Option<GameKind>,
  ) {
    d.handle_command(
      conn,
      ClientCommand::JoinGame {
        room_id: room_id.map(str::to_string),
        player_name: name.to_string(),
        reconnect: false,
        game_type: kind,
      },
    )
    .await;
  }

  /// Join two players into a fresh room and start the game. Returns the
  /// room id and each player's (conn, receiver).
  async fn two_player_game(
    d: &Dispatcher,
    kind: GameKind,
  ) -> (String, (ConnId, UnboundedReceiver<String>), (ConnId, UnboundedReceiver<String>)) {
    let (c1, mut rx1) = d.connect("10.0.0.1".into()).await;
    join(d, c1, None, "ann", Some(kind)).await;
    let events = recv_all(&mut rx1);
    let room_id = find(&events, "joined").unwrap()["data"]["roomId"]
      .as_str()
      .unwrap()
      .to_string();

    let (c2, mut rx2) = d.connect("10.0.0.2".into()).await;
    join(d, c2, Some(&room_id), "bob", None).await;
    d.handle_command(c1, ClientCommand::StartGame).await;
    recv_all(&mut rx1);
    recv_all(&mut rx2);
    (room_id, (c1, rx1), (c2, rx2))
  }

  #[tokio::test]
  async fn join_without_room_creates_one() {
    let d = dispatcher();
    let (conn, mut rx) = d.connect("10.0.0.1".into()).await;
    join(&d, conn, None, "  ann  ", Some(GameKind::Chess)).await;

    let events = recv_all(&mut rx);
    let joined = find(&events, "joined").unwrap();
    assert_eq!(joined["data"]["color"], "white");
    assert_eq!(joined["data"]["reconnected"], false);
    assert_eq!(joined["data"]["roomId"].as_str().unwrap().len(), 6);

    let update = find(&events, "room_update").unwrap();
    // The name arrives trimmed.
    assert_eq!(update["data"]["players"][0]["name"], "ann");
    assert_eq!(d.health().await, (1, 1));
  }

  #[tokio::test]
  async fn empty_names_and_unknown_rooms_are_rejected() {
    let d = dispatcher();
    let (conn, mut rx) = d.connect("10.0.0.1".into()).await;

    join(&d, conn, None, "   ", Some(GameKind::Chess)).await;
    let events = recv_all(&mut rx);
    assert_eq!(find(&events, "error").unwrap()["data"]["message"], "Name required");

    join(&d, conn, Some("NOSUCH"), "ann", None).await;
    let events = recv_all(&mut rx);
    assert_eq!(find(&events, "error").unwrap()["data"]["message"], "Room not found");
  }

  #[tokio::test]
  async fn fresh_joins_are_rate_limited_per_ip() {
    let d = Dispatcher::with_limits(
      Arc::new(NoopAnalytics),
      JoinLimits { max_joins_per_window: 1, window: Duration::from_secs(60) },
    );
    let (c1, mut rx1) = d.connect("10.0.0.9".into()).await;
    join(&d, c1, None, "ann", Some(GameKind::Chess)).await;
    assert!(find(&recv_all(&mut rx1), "joined").is_some());

    let (c2, mut rx2) = d.connect("10.0.0.9".into()).await;
    join(&d, c2, None, "bob", Some(GameKind::Chess)).await;
    let events = recv_all(&mut rx2);
    assert!(find(&events, "joined").is_none());
    assert_eq!(
      find(&events, "error").unwrap()["data"]["message"],
      RoomError::RateLimited.to_string()
    );
  }

  #[tokio::test]
  async fn chess_moves_broadcast_and_reject() {
    let d = dispatcher();
    let (_room, (c1, mut rx1), (c2, mut rx2)) = two_player_game(&d, GameKind::Chess).await;

    d.handle_command(c1, ClientCommand::MakeMove { from: "e2".into(), to: "e4".into(), promotion: None }).await;
    let white_events = recv_all(&mut rx1);
    let state = find(&white_events, "game_state").unwrap();
    assert_eq!(state["data"]["turn"], "b");
    assert!(state["data"]["fen"].as_str().unwrap().contains(" e3 "));
    assert_eq!(state["data"]["players"].as_array().unwrap().len(), 2);
    assert!(find(&recv_all(&mut rx2), "game_state").is_some());

    // White may not move again while it is Black's turn.
    d.handle_command(c1, ClientCommand::MakeMove { from: "d2".into(), to: "d4".into(), promotion: None }).await;
    let events = recv_all(&mut rx1);
    assert_eq!(
      find(&events, "invalid_move").unwrap()["data"]["reason"],
      GameError::NotYourTurn.to_string()
    );
    // Rejections go to the sender only.
    assert!(recv_all(&mut rx2).is_empty());

    let _ = c2;
  }

  #[tokio::test]
  async fn moves_before_start_are_rejected() {
    let d = dispatcher();
    let (c1, mut rx1) = d.connect("10.0.0.1".into()).await;
    join(&d, c1, None, "ann", Some(GameKind::Chess)).await;
    recv_all(&mut rx1);

    d.handle_command(c1, ClientCommand::MakeMove { from: "e2".into(), to: "e4".into(), promotion: None }).await;
    let events = recv_all(&mut rx1);
    assert_eq!(
      find(&events, "invalid_move").unwrap()["data"]["reason"],
      RoomError::NotStarted.to_string()
    );
  }

  #[tokio::test]
  async fn only_the_host_starts() {
    let d = dispatcher();
    let (c1, mut rx1) = d.connect("10.0.0.1".into()).await;
    join(&d, c1, None, "ann", Some(GameKind::Chess)).await;
    let events = recv_all(&mut rx1);
    let room_id = find(&events, "joined").unwrap()["data"]["roomId"].as_str().unwrap().to_string();

    let (c2, mut rx2) = d.connect("10.0.0.2".into()).await;
    join(&d, c2, Some(&room_id), "bob", None).await;
    recv_all(&mut rx2);

    d.handle_command(c2, ClientCommand::StartGame).await;
    let events = recv_all(&mut rx2);
    assert_eq!(find(&events, "error").unwrap()["data"]["message"], RoomError::HostOnly.to_string());

    d.handle_command(c1, ClientCommand::StartGame).await;
    let events = recv_all(&mut rx1);
    assert!(find(&events, "game_started").is_some());
    assert!(find(&events, "game_state").is_some());
  }

  #[tokio::test]
  async fn reconnection_mid_game_restores_the_seat_and_state() {
    let d = dispatcher();
    let (room_id, (_c1, mut rx1), (c2, rx2)) = two_player_game(&d, GameKind::Chess).await;
    drop(rx2);
    d.disconnect(c2).await;
    recv_all(&mut rx1);

    let (c3, mut rx3) = d.connect("10.0.0.3".into()).await;
    d.handle_command(
      c3,
      ClientCommand::JoinGame {
        room_id: Some(room_id),
        player_name: "bob".into(),
        reconnect: true,
        game_type: None,
      },
    )
    .await;
    let events = recv_all(&mut rx3);
    let joined = find(&events, "joined").unwrap();
    assert_eq!(joined["data"]["reconnected"], true);
    assert_eq!(joined["data"]["color"], "black");
    // A running game is snapshotted to the rejoining seat.
    assert!(find(&events, "game_state").is_some());
  }

  #[tokio::test]
  async fn big_two_states_are_personalized() {
    let d = dispatcher();
    let (c1, mut rx1) = d.connect("10.0.0.1".into()).await;
    join(&d, c1, None, "p0", Some(GameKind::BigTwo)).await;
    let events = recv_all(&mut rx1);
    let room_id = find(&events, "joined").unwrap()["data"]["roomId"].as_str().unwrap().to_string();

    let mut others = Vec::new();
    for (i, name) in ["p1", "p2", "p3"].iter().enumerate() {
      let (c, mut rx) = d.connect(format!("10.0.0.{}", i + 2)).await;
      join(&d, c, Some(&room_id), name, None).await;
      recv_all(&mut rx);
      others.push((c, rx));
    }

    d.handle_command(c1, ClientCommand::StartGame).await;
    let events = recv_all(&mut rx1);
    let state = &find(&events, "game_state").unwrap()["data"];
    assert_eq!(state["gameType"], "chordaidi");
    let my_hand = state["myHand"].as_array().unwrap();
    assert_eq!(my_hand.len(), 13);
    assert_eq!(state["handCounts"].as_array().unwrap().len(), 4);

    // Every other seat sees its own hand, never seat 0's.
    for (_, rx) in others.iter_mut() {
      let events = recv_all(rx);
      let state = &find(&events, "game_state").unwrap()["data"];
      let hand = state["myHand"].as_array().unwrap();
      assert_eq!(hand.len(), 13);
      assert_ne!(hand, my_hand);
    }
  }

  #[tokio::test]
  async fn big_two_reconnection_preserves_the_hand() {
    let d = dispatcher();
    let (c1, mut rx1) = d.connect("10.0.0.1".into()).await;
    join(&d, c1, None, "p0", Some(GameKind::BigTwo)).await;
    let events = recv_all(&mut rx1);
    let room_id = find(&events, "joined").unwrap()["data"]["roomId"].as_str().unwrap().to_string();

    let mut others = Vec::new();
    for (i, name) in ["p1", "p2", "p3"].iter().enumerate() {
      let (c, rx) = d.connect(format!("10.0.0.{}", i + 2)).await;
      join(&d, c, Some(&room_id), name, None).await;
      others.push((c, rx));
    }

    d.handle_command(c1, ClientCommand::StartGame).await;
    let (c2, mut rx2) = others.remove(0);
    let events = recv_all(&mut rx2);
    let hand_before = find(&events, "game_state").unwrap()["data"]["myHand"].clone();

    drop(rx2);
    d.disconnect(c2).await;

    let (c5, mut rx5) = d.connect("10.0.0.50".into()).await;
    d.handle_command(
      c5,
      ClientCommand::JoinGame {
        room_id: Some(room_id),
        player_name: "p1".into(),
        reconnect: true,
        game_type: None,
      },
    )
    .await;
    let events = recv_all(&mut rx5);
    assert_eq!(find(&events, "joined").unwrap()["data"]["reconnected"], true);
    let hand_after = find(&events, "game_state").unwrap()["data"]["myHand"].clone();
    assert_eq!(hand_after, hand_before);
  }

  #[tokio::test]
  async fn boggle_round_accepts_words_and_scores_uniques() {
    let d = dispatcher();
    let (room_id, (c1, mut rx1), (c2, mut rx2)) = two_player_game(&d, GameKind::Boggle).await;

    // Swap in a deterministic board: R T L N / E E A O / I C H D / S U M P.
    {
      let room = d.rooms.get_room(&room_id).await.unwrap();
      room.lock().await.engine = Some(Engine::Boggle(BoggleGame::with_board("RTLNEEAOICHDSUMP", 2)));
    }

    d.handle_command(c1, ClientCommand::BoggleSubmit { word: "teach".into() }).await;
    let events = recv_all(&mut rx1);
    assert_eq!(find(&events, "boggle_accept").unwrap()["data"]["word"], "TEACH");
    assert_eq!(
      find(&events, "boggle_counts").unwrap()["data"]["submissionCounts"],
      serde_json::json!([1, 0])
    );

    d.handle_command(c2, ClientCommand::BoggleSubmit { word: "TEACH".into() }).await;
    d.handle_command(c2, ClientCommand::BoggleSubmit { word: "REACH".into() }).await;
    d.handle_command(c2, ClientCommand::BoggleSubmit { word: "XYZZY".into() }).await;
    let events = recv_all(&mut rx2);
    let reject = find(&events, "boggle_reject").unwrap();
    assert_eq!(reject["data"]["word"], "XYZZY");
    assert_eq!(reject["data"]["reason"], GameError::NotInDictionary.to_string());

    // Only the host may end the round.
    d.handle_command(c2, ClientCommand::BoggleEnd).await;
    let events = recv_all(&mut rx2);
    assert_eq!(find(&events, "error").unwrap()["data"]["message"], RoomError::HostOnly.to_string());

    d.handle_command(c1, ClientCommand::BoggleEnd).await;
    let events = recv_all(&mut rx1);
    let state = &find(&events, "game_state").unwrap()["data"];
    assert_eq!(state["isGameOver"], true);
    assert_eq!(state["scores"], serde_json::json!([0, 2]));
    let over = find(&events, "game_over").unwrap();
    assert_eq!(over["data"]["winner"], 1);
    assert_eq!(over["data"]["reason"], "round over");

    // The duplicated TEACH cancelled; bob's leaderboard entry records the win.
    let top = d.leaderboard().top(Some(GameKind::Boggle), 5).await;
    assert_eq!(top[0].name, "bob");
  }

  #[tokio::test]
  async fn bingo_only_the_caller_draws() {
    let d = dispatcher();
    let (_room, (c1, mut rx1), (c2, mut rx2)) = two_player_game(&d, GameKind::Bingo).await;

    d.handle_command(c2, ClientCommand::BingoCall).await;
    let events = recv_all(&mut rx2);
    assert_eq!(
      find(&events, "invalid_move").unwrap()["data"]["reason"],
      GameError::NotTheCaller.to_string()
    );

    d.handle_command(c1, ClientCommand::BingoCall).await;
    let events = recv_all(&mut rx1);
    let state = &find(&events, "game_state").unwrap()["data"];
    assert_eq!(state["called"].as_array().unwrap().len(), 1);
    assert_eq!(state["callerSeat"], 0);
  }

  #[tokio::test]
  async fn undo_negotiation_round_trips() {
    let d = dispatcher();
    let (_room, (c1, mut rx1), (c2, mut rx2)) = two_player_game(&d, GameKind::Chess).await;

    d.handle_command(c1, ClientCommand::MakeMove { from: "e2".into(), to: "e4".into(), promotion: None }).await;
    recv_all(&mut rx1);
    recv_all(&mut rx2);

    d.handle_command(c1, ClientCommand::RequestUndo).await;
    let events = recv_all(&mut rx2);
    assert_eq!(find(&events, "undo_requested").unwrap()["data"]["from"], "ann");

    d.handle_command(c2, ClientCommand::ApproveUndo).await;
    let events = recv_all(&mut rx1);
    let state = &find(&events, "game_state").unwrap()["data"];
    assert_eq!(state["fen"], crate::games::chess::INITIAL_FEN);

    // Declining with nothing pending is an error.
    d.handle_command(c2, ClientCommand::DeclineUndo).await;
    let events = recv_all(&mut rx2);
    assert!(find(&events, "error").is_some());
  }

  #[tokio::test]
  async fn resign_ends_the_game_and_credits_the_winner() {
    let d = dispatcher();
    let (room_id, (c1, mut rx1), (c2, mut rx2)) = two_player_game(&d, GameKind::Chess).await;

    d.handle_command(c2, ClientCommand::Resign).await;
    let events = recv_all(&mut rx1);
    let over = find(&events, "game_over").unwrap();
    assert_eq!(over["data"]["winner"], "white");
    assert_eq!(over["data"]["reason"], "resign");
    assert!(find(&recv_all(&mut rx2), "game_over").is_some());

    let room = d.rooms.get_room(&room_id).await.unwrap();
    assert!(room.lock().await.engine.is_none());

    let top = d.leaderboard().top(Some(GameKind::Chess), 5).await;
    assert_eq!(top[0].name, "ann");
    assert_eq!(top[0].wins, 1);
    let _ = c1;
  }

  #[tokio::test]
  async fn ping_answers_pong_to_the_sender_only() {
    let d = dispatcher();
    let (conn, mut rx) = d.connect("10.0.0.1".into()).await;
    d.handle_command(conn, ClientCommand::Ping).await;
    let events = recv_all(&mut rx);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "pong");
  }

  #[tokio::test(start_paused = true)]
  async fn disconnect_grace_notifies_the_room() {
    let d = dispatcher();
    let (_room, (_c1, mut rx1), (c2, rx2)) = two_player_game(&d, GameKind::Chess).await;
    drop(rx2);
    d.disconnect(c2).await;

    tokio::time::sleep(Duration::from_secs(3)).await;
    let events = recv_all(&mut rx1);
    assert_eq!(
      find(&events, "player_disconnected").unwrap()["data"]["playerName"],
      "bob"
    );
    assert!(find(&events, "room_update").is_some());
  }
}

/// Display names credited for a finished game.
fn winner_names(room: &Room, engine: &Engine) -> Vec<String> {
  let seat_name = |seat: usize| room.seats.get(seat).map(|s| s.name.clone());
  match engine {
    Engine::Chess(g) => match g.winner() {
      Some("white") => seat_name(0).into_iter().collect(),
      Some("black") => seat_name(1).into_iter().collect(),
      _ => Vec::new(),
    },
    Engine::Xiangqi(g) => match g.winner() {
      Some("red") => seat_name(0).into_iter().collect(),
      Some("black") => seat_name(1).into_iter().collect(),
      _ => Vec::new(),
    },
    Engine::BigTwo(g) => g.winner().and_then(seat_name).into_iter().collect(),
    Engine::Boggle(g) => g.winner().and_then(seat_name).into_iter().collect(),
    Engine::Bingo(g) => g.winners().iter().filter_map(|w| seat_name(w.seat)).collect(),
  }
}
