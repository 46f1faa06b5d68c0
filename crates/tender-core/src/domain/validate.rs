//! Decision validation: all-or-nothing screening before execution.
//!
//! The contract is deliberately quiet: a valid decision comes back
//! unchanged, an invalid one becomes `None`. Rejection is never an error;
//! the loop treats it the same as "no action needed this cycle".

use tracing::warn;

use super::decision::Decision;

const PUMP_COMMANDS: &[&str] = &["on", "off"];
const SERVO_COMMANDS: &[&str] = &["open", "close", "angle"];

/// Inclusive servo angle range in degrees.
pub const ANGLE_MIN: f64 = 0.0;
pub const ANGLE_MAX: f64 = 180.0;

/// Screen a candidate decision. Returns it unchanged when every rule
/// passes, `None` otherwise. Never panics, never errors.
///
/// Rules, in order:
/// 1. `action` must be non-empty. A `none` action is accepted immediately;
///    it carries only a reason and causes no side effects.
/// 2. `command` must be non-empty.
/// 3. `action` must be `pump` or `servo`.
/// 4. pump commands: `on` / `off`. servo commands: `open` / `close` /
///    `angle`; an `angle` command additionally needs a value in
///    [`ANGLE_MIN`, `ANGLE_MAX`] inclusive.
///
/// Note: an explicit `value` of 0 is a legitimate angle (lid closed).
/// Only an absent value is rejected.
pub fn validate(decision: Decision) -> Option<Decision> {
    if decision.action.is_empty() {
        warn!("decision rejected: missing action");
        return None;
    }

    if decision.is_none_action() {
        return Some(decision);
    }

    if decision.command.is_empty() {
        warn!(action = %decision.action, "decision rejected: missing command");
        return None;
    }

    match decision.action.as_str() {
        "pump" => {
            if !PUMP_COMMANDS.contains(&decision.command.as_str()) {
                warn!(command = %decision.command, "decision rejected: invalid pump command");
                return None;
            }
        }
        "servo" => {
            if !SERVO_COMMANDS.contains(&decision.command.as_str()) {
                warn!(command = %decision.command, "decision rejected: invalid servo command");
                return None;
            }
            if decision.command == "angle" {
                match decision.value {
                    Some(v) if (ANGLE_MIN..=ANGLE_MAX).contains(&v) => {}
                    Some(v) => {
                        warn!(value = v, "decision rejected: servo angle out of range");
                        return None;
                    }
                    None => {
                        warn!("decision rejected: angle command without a value");
                        return None;
                    }
                }
            }
        }
        other => {
            warn!(action = %other, "decision rejected: unknown action");
            return None;
        }
    }

    Some(decision)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn decision(action: &str, command: &str, value: Option<f64>) -> Decision {
        Decision {
            action: action.to_string(),
            command: command.to_string(),
            value,
            reason: "test".to_string(),
        }
    }

    #[test]
    fn none_action_is_accepted_without_a_command() {
        let d = Decision {
            action: "none".to_string(),
            command: String::new(),
            value: None,
            reason: "all conditions optimal".to_string(),
        };
        let accepted = validate(d.clone()).unwrap();
        assert_eq!(accepted, d);
    }

    #[test]
    fn missing_action_is_rejected() {
        assert_eq!(validate(decision("", "on", None)), None);
    }

    #[test]
    fn missing_command_is_rejected() {
        assert_eq!(validate(decision("pump", "", None)), None);
    }

    #[rstest]
    #[case::pump_on("pump", "on")]
    #[case::pump_off("pump", "off")]
    #[case::servo_open("servo", "open")]
    #[case::servo_close("servo", "close")]
    fn plain_commands_pass(#[case] action: &str, #[case] command: &str) {
        assert!(validate(decision(action, command, None)).is_some());
    }

    #[rstest]
    #[case::pump_explode("pump", "explode")]
    #[case::pump_open("pump", "open")]
    #[case::servo_on("servo", "on")]
    #[case::unknown_action("heater", "on")]
    fn unknown_labels_are_rejected(#[case] action: &str, #[case] command: &str) {
        assert_eq!(validate(decision(action, command, None)), None);
    }

    #[rstest]
    #[case::closed(0.0)]
    #[case::ventilation(45.0)]
    #[case::fully_open(180.0)]
    fn angle_within_range_passes(#[case] angle: f64) {
        let accepted = validate(decision("servo", "angle", Some(angle))).unwrap();
        assert_eq!(accepted.value, Some(angle));
    }

    #[rstest]
    #[case::negative(-1.0)]
    #[case::too_wide(180.5)]
    #[case::way_off(720.0)]
    fn angle_out_of_range_is_rejected(#[case] angle: f64) {
        assert_eq!(validate(decision("servo", "angle", Some(angle))), None);
    }

    #[test]
    fn angle_without_value_is_rejected() {
        assert_eq!(validate(decision("servo", "angle", None)), None);
    }

    #[test]
    fn rejection_is_all_or_nothing() {
        // A decision with one bad field is dropped entirely, even though the
        // action on its own would have been fine.
        let d = decision("servo", "angle", Some(999.0));
        assert_eq!(validate(d), None);
    }
}
