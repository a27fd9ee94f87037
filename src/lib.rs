#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod cell;
mod common;
mod config;
pub mod domain;
mod game;
pub mod protocol;
mod ship;
pub mod sim;
#[cfg(feature = "std")]
pub mod actor;
#[cfg(feature = "std")]
mod engine_api;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod session;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use protocol::{handle, Request, Response};
pub use ship::*;
pub use sim::{simulate, SimulationSummary};
#[cfg(feature = "std")]
pub use actor::{GameActor, GameHandle};
#[cfg(feature = "std")]
pub use engine_api::GameApi;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, LOG_ENV};
#[cfg(feature = "std")]
pub use session::SharedGame;
