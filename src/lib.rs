//! Server-authoritative realtime host for parlor games.
//!
//! One WebSocket transport and room substrate carries five game families:
//! chess, xiangqi, Big Two, Boggle and Bingo. Clients send commands, the
//! dispatcher authorizes them against the sender's seat, the engines
//! validate every move, and authoritative state flows back out per room
//! (per seat where hands are private).

pub mod analytics;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod games;
pub mod leaderboard;
pub mod protocol;
pub mod rate_limit;
pub mod room;
pub mod server;

pub use config::Config;
pub use dispatcher::Dispatcher;
pub use error::{GameError, RoomError};
pub use games::{Engine, GameKind};
pub use room::RoomManager;
