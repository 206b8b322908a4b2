//! Structured representation of every AI-to-engine response.

use crate::error::FormatError;
use pyrat_engine::Direction;

/// Declares one configurable AI option, as reported after `pyrat`.
#[derive(Clone, PartialEq, Debug)]
pub enum OptionKind {
    Spin { default: i64, min: i64, max: i64 },
    Check { default: bool },
    Combo { default: String, values: Vec<String> },
    String { default: String },
}

/// A single `info` field, emitted in caller-supplied order.
#[derive(Clone, PartialEq, Debug)]
pub enum InfoField {
    KeyValue(String, String),
    Target(pyrat_engine::Coordinates),
    Pv(Vec<Direction>),
    /// Always rendered last regardless of position in the field list.
    String(String),
}

/// A fully structured AI-to-engine response.
#[derive(Clone, PartialEq, Debug)]
pub enum Response {
    IdName(String),
    IdAuthor(String),
    Option {
        name: String,
        kind: OptionKind,
    },
    PyratReady,
    ReadyOk,
    PreprocessingDone,
    Move(Direction),
    PostprocessingDone,
    Ready,
    Info(Vec<InfoField>),
}

/// Renders a response as one wire line (no trailing newline).
///
/// # Errors
/// Only [`Response::Option`] can fail to format, and only if constructed with
/// an empty name — every other variant is structurally always formattable.
pub fn format_response(response: &Response) -> Result<String, FormatError> {
    Ok(match response {
        Response::IdName(name) => format!("id name {name}"),
        Response::IdAuthor(author) => format!("id author {author}"),
        Response::Option { name, kind } => format_option(name, kind)?,
        Response::PyratReady => "pyratready".to_string(),
        Response::ReadyOk => "readyok".to_string(),
        Response::PreprocessingDone => "preprocessingdone".to_string(),
        Response::Move(direction) => format!("move {}", direction.as_str()),
        Response::PostprocessingDone => "postprocessingdone".to_string(),
        Response::Ready => "ready".to_string(),
        Response::Info(fields) => format_info(fields),
    })
}

fn format_option(name: &str, kind: &OptionKind) -> Result<String, FormatError> {
    if name.is_empty() {
        return Err(FormatError::MissingOptionFields);
    }
    let mut parts = vec!["option".to_string(), format!("name {name}")];
    match kind {
        OptionKind::Spin { default, min, max } => {
            parts.push("type spin".to_string());
            parts.push(format!("default {default}"));
            parts.push(format!("min {min}"));
            parts.push(format!("max {max}"));
        }
        OptionKind::Check { default } => {
            parts.push("type check".to_string());
            parts.push(format!("default {default}"));
        }
        OptionKind::Combo { default, values } => {
            parts.push("type combo".to_string());
            parts.push(format!("default {default}"));
            for value in values {
                parts.push(format!("var {value}"));
            }
        }
        OptionKind::String { default } => {
            parts.push("type string".to_string());
            parts.push(format!("default {default}"));
        }
    }
    Ok(parts.join(" "))
}

fn format_info(fields: &[InfoField]) -> String {
    let mut parts = vec!["info".to_string()];
    let mut trailing_string = None;

    for field in fields {
        match field {
            InfoField::KeyValue(key, value) => parts.push(format!("{key} {value}")),
            InfoField::Target(pos) => parts.push(format!("target ({},{})", pos.x, pos.y)),
            InfoField::Pv(moves) => {
                parts.push("pv".to_string());
                parts.extend(moves.iter().map(|d| d.as_str().to_string()));
            }
            InfoField::String(msg) => trailing_string = Some(msg.clone()),
        }
    }

    if let Some(msg) = trailing_string {
        parts.push(format!("string {msg}"));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyrat_engine::Coordinates;

    #[test]
    fn formats_simple_responses() {
        assert_eq!(format_response(&Response::PyratReady).unwrap(), "pyratready");
        assert_eq!(format_response(&Response::ReadyOk).unwrap(), "readyok");
        assert_eq!(
            format_response(&Response::Move(Direction::Right)).unwrap(),
            "move RIGHT"
        );
    }

    #[test]
    fn formats_id_responses() {
        assert_eq!(
            format_response(&Response::IdName("GreedyBot v2.0".to_string())).unwrap(),
            "id name GreedyBot v2.0"
        );
    }

    #[test]
    fn formats_spin_option_with_bounds() {
        let response = Response::Option {
            name: "depth".to_string(),
            kind: OptionKind::Spin {
                default: 4,
                min: 1,
                max: 10,
            },
        };
        assert_eq!(
            format_response(&response).unwrap(),
            "option name depth type spin default 4 min 1 max 10"
        );
    }

    #[test]
    fn formats_info_with_string_always_last() {
        let response = Response::Info(vec![
            InfoField::String("Time to reach: 10 turns".to_string()),
            InfoField::Target(Coordinates::new(5, 5)),
        ]);
        assert_eq!(
            format_response(&response).unwrap(),
            "info target (5,5) string Time to reach: 10 turns"
        );
    }

    #[test]
    fn rejects_option_with_empty_name() {
        let response = Response::Option {
            name: String::new(),
            kind: OptionKind::Check { default: true },
        };
        assert_eq!(
            format_response(&response),
            Err(FormatError::MissingOptionFields)
        );
    }
}
