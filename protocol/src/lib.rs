//! Line-based text protocol between the match runner and an AI subprocess.
#![allow(clippy::module_name_repetitions)]

mod command;
mod error;
mod response;

pub use command::{parse_command, Command, GameResult, Player, TimeoutPhase};
pub use error::FormatError;
pub use response::{format_response, InfoField, OptionKind, Response};
