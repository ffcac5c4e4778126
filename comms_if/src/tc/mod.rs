//! # Telecommand module
//!
//! This module provides telecommand functionality to the communications
//! interface.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod expl;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use serde_json::{self, Value};
use thiserror::Error;

use self::expl::ExplCmd;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A telecommand, i.e. an instruction sent to the vehicle by the operator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Tc {
    /// Connection keep-alive, no action required.
    Heartbeat,

    /// Command for the exploration manager.
    Expl(ExplCmd),
}

/// Possible parsing errors.
#[derive(Debug, Error)]
pub enum TcParseError {
    #[error("TC contains invalid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("TC has an invalid type ({0})")]
    InvalidType(String),

    #[error("TC of type {0} is expected to have a payload but it doesn't")]
    MissingPayload(String),

    #[error("TC payload is invalid: {0}")]
    InvalidPayload(serde_json::Error),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Tc {
    /// Parse a new TC from a JSON packet of the form `{"type": "EXPL", "payload": "Activate"}`.
    pub fn from_json(json_str: &str) -> Result<Self, TcParseError> {
        // Parse the JSON string into a value
        let val: Value = serde_json::from_str(json_str).map_err(TcParseError::InvalidJson)?;

        // Get the type of the TC
        let tc_type = val["type"].as_str().ok_or_else(|| {
            TcParseError::InvalidType(String::from("Expected \"type\" to be a string"))
        })?;

        match tc_type {
            "HEARTBEAT" => Ok(Tc::Heartbeat),
            "EXPL" => {
                if val["payload"].is_null() {
                    return Err(TcParseError::MissingPayload(tc_type.to_string()));
                }

                serde_json::from_value(val["payload"].clone())
                    .map(Tc::Expl)
                    .map_err(TcParseError::InvalidPayload)
            }
            t => Err(TcParseError::InvalidType(format!(
                "{} is not a recognised TC type",
                t
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_tc() {
        assert_eq!(
            Tc::from_json(r#"{"type": "EXPL", "payload": "Activate"}"#).unwrap(),
            Tc::Expl(ExplCmd::Activate)
        );
        assert_eq!(
            Tc::from_json(r#"{"type": "HEARTBEAT"}"#).unwrap(),
            Tc::Heartbeat
        );

        assert!(matches!(
            Tc::from_json(r#"{"type": "EXPL"}"#),
            Err(TcParseError::MissingPayload(_))
        ));
        assert!(matches!(
            Tc::from_json(r#"{"type": "EXPL", "payload": "Fly"}"#),
            Err(TcParseError::InvalidPayload(_))
        ));
        assert!(matches!(
            Tc::from_json(r#"{"type": 4}"#),
            Err(TcParseError::InvalidType(_))
        ));
        assert!(matches!(
            Tc::from_json("not json"),
            Err(TcParseError::InvalidJson(_))
        ));
    }
}
