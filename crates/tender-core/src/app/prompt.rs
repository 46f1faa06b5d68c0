//! Decision-request construction.
//!
//! The prompt embeds the current snapshot, the backend's recommendations,
//! a fixed rule description, and the required reply format. The exact
//! wording is not a contract, only the structure and the reply format
//! the parser depends on.

use std::fmt::Write;

use crate::domain::StatusSnapshot;

const RULES: &str = "\
CONTROL RULES:
1. Pump control:
   - Turn ON when soil_moisture < 40% AND the pump is off
   - Turn OFF when soil_moisture > 70%
   - Never repeat the current state (avoid command spam)
2. Servo control (lid):
   - Open (90 degrees) when temperature > 30 C for cooling
   - Close (0 degrees) when temperature < 20 C to retain heat
   - Use a partial angle (30-60 degrees) for gentle ventilation
   - Keep the current state if conditions are optimal
3. Safety:
   - Make ONE decision per cycle
   - Only change state when necessary";

const REPLY_FORMAT: &str = r#"Respond with ONLY a JSON object (no explanation):
{
  "action": "pump|servo",
  "command": "on|off|open|close|angle",
  "value": optional_number_for_angle,
  "reason": "short explanation for this decision"
}

If no action is needed, respond with:
{
  "action": "none",
  "reason": "all conditions optimal"
}"#;

/// Render the natural-language decision request for one snapshot.
pub fn build_prompt(snapshot: &StatusSnapshot) -> String {
    let mut prompt = String::from(
        "You are controlling an automated greenhouse.\n\nCURRENT SYSTEM STATUS:\n",
    );

    for (name, reading) in &snapshot.sensors {
        let _ = writeln!(prompt, "- {name}: {} ({})", reading.value, reading.status);
    }
    let _ = writeln!(
        prompt,
        "- pump: {}",
        if snapshot.actuators.pump.state.is_on() {
            "on"
        } else {
            "off"
        }
    );
    let _ = writeln!(prompt, "- servo angle: {}", snapshot.actuators.servo.angle);

    if !snapshot.recommendations.is_empty() {
        prompt.push_str("\nSYSTEM RECOMMENDATIONS:\n");
        for recommendation in &snapshot.recommendations {
            let _ = writeln!(prompt, "- {recommendation}");
        }
    }

    let _ = write!(prompt, "\n{RULES}\n\nDECISION FORMAT:\n{REPLY_FORMAT}");
    prompt
}

#[cfg(test)]
mod tests {
    use crate::domain::SensorReading;

    use super::*;

    fn snapshot() -> StatusSnapshot {
        let mut snapshot = StatusSnapshot {
            sensors: Default::default(),
            actuators: Default::default(),
            recommendations: vec!["water the plants".to_string()],
        };
        snapshot.sensors.insert(
            "soil_moisture".to_string(),
            SensorReading {
                value: 25.0,
                status: "dry".to_string(),
            },
        );
        snapshot
    }

    #[test]
    fn prompt_embeds_sensors_and_actuators() {
        let prompt = build_prompt(&snapshot());
        assert!(prompt.contains("soil_moisture: 25 (dry)"));
        assert!(prompt.contains("pump: off"));
        assert!(prompt.contains("servo angle: 0"));
        assert!(prompt.contains("water the plants"));
    }

    #[test]
    fn prompt_states_the_reply_format() {
        let prompt = build_prompt(&snapshot());
        assert!(prompt.contains("ONLY a JSON object"));
        assert!(prompt.contains(r#""action": "none""#));
    }

    #[test]
    fn recommendations_section_is_omitted_when_empty() {
        let mut s = snapshot();
        s.recommendations.clear();
        assert!(!build_prompt(&s).contains("SYSTEM RECOMMENDATIONS"));
    }
}
