//! Rules engine for Minesweeper.
//!
//! A [`Board`] is dealt from a [`GameConfig`], then driven with
//! [`Board::open`] and [`Board::toggle_flag`] until it is won (every mine
//! flagged, no wrong flags) or lost (a mine opened). Views read copies of the
//! grid through [`Board::grid`] or [`Board::snapshot`]. A [`Session`] owns the
//! current board and deals a fresh one on restart.

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use layout::*;
pub use session::*;
pub use snapshot::*;
pub use timer::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod layout;
mod session;
mod snapshot;
mod timer;
mod types;
