//! Command payload and gateway execution result.

use serde::{Deserialize, Serialize};

use super::decision::Decision;

/// Reason recorded when the reasoner did not supply one.
pub const DEFAULT_REASON: &str = "automated decision";

/// Wire shape submitted to the actuator command gateway.
///
/// `auto_triggered` is always true for commands originating here; the
/// backend uses it to tell the control loop apart from manual buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandPayload {
    pub action: String,
    pub command: String,
    pub reason: String,
    pub auto_triggered: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl CommandPayload {
    /// Build the payload for a validated decision.
    pub fn from_decision(decision: &Decision) -> Self {
        Self {
            action: decision.action.clone(),
            command: decision.command.clone(),
            reason: if decision.reason.is_empty() {
                DEFAULT_REASON.to_string()
            } else {
                decision.reason.clone()
            },
            auto_triggered: true,
            value: decision.value,
        }
    }
}

/// Gateway verdict on a submitted command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Failed,
}

impl ExecutionStatus {
    pub fn is_success(self) -> bool {
        matches!(self, ExecutionStatus::Success)
    }
}

/// Outcome returned by the gateway, kept verbatim: any fields beyond
/// `status` land in `extra` so the audit log preserves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ExecutionResult {
    pub fn success() -> Self {
        Self {
            status: ExecutionStatus::Success,
            extra: serde_json::Map::new(),
        }
    }

    pub fn failed() -> Self {
        Self {
            status: ExecutionStatus::Failed,
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump_on(reason: &str) -> Decision {
        Decision {
            action: "pump".to_string(),
            command: "on".to_string(),
            value: None,
            reason: reason.to_string(),
        }
    }

    #[test]
    fn payload_marks_auto_triggered() {
        let payload = CommandPayload::from_decision(&pump_on("dry soil"));
        assert!(payload.auto_triggered);
        assert_eq!(payload.action, "pump");
        assert_eq!(payload.command, "on");
        assert_eq!(payload.reason, "dry soil");
        assert_eq!(payload.value, None);
    }

    #[test]
    fn empty_reason_gets_the_default() {
        let payload = CommandPayload::from_decision(&pump_on(""));
        assert_eq!(payload.reason, DEFAULT_REASON);
    }

    #[test]
    fn value_is_omitted_from_json_when_absent() {
        let payload = CommandPayload::from_decision(&pump_on("dry soil"));
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("value").is_none());
    }

    #[test]
    fn result_keeps_gateway_specific_fields() {
        let result: ExecutionResult = serde_json::from_str(
            r#"{"status":"success","message":"Command sent to device","latency_ms":12}"#,
        )
        .unwrap();
        assert!(result.status.is_success());
        assert_eq!(result.extra["message"], "Command sent to device");
        assert_eq!(result.extra["latency_ms"], 12);
    }
}
