//! Text command vocabulary spoken by the referee process.
//!
//! One command per line: `Init <w> <h> <size> ...` starts a fresh game and
//! `Wound|Kill|Miss <x> <y>` reports the previous shot. Replies are bare
//! `<x> <y>` lines. Parsing and formatting only; moving the bytes is the
//! transport's job.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::common::ShotOutcome;
use crate::geom::Coord;

/// A parsed referee command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Begin a new game.
    Init {
        width: i32,
        height: i32,
        sizes: Vec<i32>,
    },
    /// Outcome of the engine's previous shot.
    Report { at: Coord, outcome: ShotOutcome },
}

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Line contained no command word.
    EmptyLine,
    /// Command word is not part of the vocabulary.
    UnknownCommand(String),
    /// Wrong number of arguments, or a non-integer argument.
    BadArguments,
}

impl core::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProtocolError::EmptyLine => write!(f, "Empty command line"),
            ProtocolError::UnknownCommand(word) => write!(f, "Unknown command {:?}", word),
            ProtocolError::BadArguments => write!(f, "Bad command arguments"),
        }
    }
}

impl Command {
    /// Parse one line of referee input.
    pub fn parse(line: &str) -> Result<Command, ProtocolError> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(ProtocolError::EmptyLine)?;
        let args = words
            .map(str::parse::<i32>)
            .collect::<Result<Vec<i32>, _>>()
            .map_err(|_| ProtocolError::BadArguments)?;
        match word {
            "Init" => {
                if args.len() < 2 {
                    return Err(ProtocolError::BadArguments);
                }
                Ok(Command::Init {
                    width: args[0],
                    height: args[1],
                    sizes: args[2..].to_vec(),
                })
            }
            "Wound" | "Kill" | "Miss" => {
                if args.len() != 2 {
                    return Err(ProtocolError::BadArguments);
                }
                let outcome = match word {
                    "Wound" => ShotOutcome::Wound,
                    "Kill" => ShotOutcome::Kill,
                    _ => ShotOutcome::Miss,
                };
                Ok(Command::Report {
                    at: Coord::new(args[0], args[1]),
                    outcome,
                })
            }
            other => Err(ProtocolError::UnknownCommand(other.to_string())),
        }
    }
}

/// Format a shot reply line (no trailing newline).
pub fn shot_line(at: Coord) -> String {
    format!("{} {}", at.x, at.y)
}
