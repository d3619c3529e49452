#![cfg_attr(not(feature = "std"), no_std)]

//! Black Box: a hidden set of atoms located by rays fired from the border.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod cell;
mod common;
mod config;
mod game;
mod guess;
mod ledger;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod ray;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoardError, CellSet, Cells};
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use guess::*;
pub use ledger::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use ray::{trace, trace_path, RayTrace};
