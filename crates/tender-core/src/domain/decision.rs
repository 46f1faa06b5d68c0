//! Decision model: the action proposed by the reasoning service.
//!
//! A Decision is kept stringly-typed on purpose: the reply comes from a
//! free-text reasoner, and we want unknown actions or commands to reach
//! the validator (which rejects them and moves on) rather than fail
//! deserialization. The typed boundary is [`crate::domain::validate`].

use serde::{Deserialize, Serialize};

/// Action label for "do nothing this cycle".
pub const ACTION_NONE: &str = "none";

/// A candidate decision exactly as proposed. Ephemeral: lives for one
/// cycle, then either becomes a log entry or is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Target device: "pump", "servo", or "none".
    pub action: String,

    /// Device command; empty for a `none` action.
    #[serde(default)]
    pub command: String,

    /// Servo angle in degrees; only meaningful for `command = "angle"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Short free-text explanation from the reasoner.
    #[serde(default)]
    pub reason: String,
}

impl Decision {
    pub fn is_none_action(&self) -> bool {
        self.action == ACTION_NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_sparse_fields() {
        let d: Decision =
            serde_json::from_str(r#"{"action":"none","reason":"all optimal"}"#).unwrap();
        assert!(d.is_none_action());
        assert!(d.command.is_empty());
        assert_eq!(d.value, None);
        assert_eq!(d.reason, "all optimal");
    }

    #[test]
    fn value_zero_survives_the_round_trip() {
        let d: Decision = serde_json::from_str(
            r#"{"action":"servo","command":"angle","value":0,"reason":"close the lid"}"#,
        )
        .unwrap();
        assert_eq!(d.value, Some(0.0));
    }

    #[test]
    fn unknown_action_still_deserializes() {
        // Screening unknown labels is the validator's job, not serde's.
        let d: Decision = serde_json::from_str(r#"{"action":"heater","command":"on"}"#).unwrap();
        assert_eq!(d.action, "heater");
    }
}
