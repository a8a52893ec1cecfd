//! Game model and harness protocol for the four-event arcade competition.
//!
//! Each turn the harness describes four independent mini-games (hurdles,
//! archery, roller skating and diving) and expects a single [`Action`] that is
//! applied to all of them at once.
//!
//! - [`action`] - the four directional actions and the board-letter mapping
//! - [`game`] - identifiers of the mini-games in input order
//! - [`snapshot`] - typed per-game state parsed from a game line
//! - [`protocol`] - reading the header and per-turn lines from the harness

pub use self::{action::*, game::*, protocol::*, snapshot::*};

pub mod action;
pub mod game;
pub mod protocol;
pub mod snapshot;
