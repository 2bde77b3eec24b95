#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
mod geom;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod node;
pub mod protocol;
mod referee;
mod shooter;
#[cfg(feature = "std")]
pub mod transport;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use geom::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use node::*;
pub use protocol::*;
pub use referee::*;
pub use shooter::*;
