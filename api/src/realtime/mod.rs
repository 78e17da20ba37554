//! Real-time change feed over WebSocket.
//!
//! REST mutation handlers publish [`ChangeEvent`]s into the [`EventHub`];
//! every connected WebSocket session forwards them to its client. Events
//! received *from* a client are re-published to all other peers, mirroring
//! a broadcast-to-others socket room.

mod hub;
mod session;

pub use hub::{ChangeEvent, Envelope, EventHub};
pub use session::ws_entry;
