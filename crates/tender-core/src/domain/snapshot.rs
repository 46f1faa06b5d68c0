//! Status snapshot: a point-in-time read of sensors and actuators.
//!
//! Produced by the StatusProvider once per cycle and never mutated; the
//! controller keeps the most recent one only as a read-only view for the
//! presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One sensor value plus the qualitative label the provider assigned to it
/// ("ok", "low", "dry", ...). The label vocabulary belongs to the provider;
/// we carry it verbatim into the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub value: f64,
    #[serde(default)]
    pub status: String,
}

/// Pump relay state as reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PumpState {
    On,
    #[default]
    Off,
}

impl PumpState {
    pub fn is_on(self) -> bool {
        matches!(self, PumpState::On)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PumpActuator {
    pub state: PumpState,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServoActuator {
    /// Lid opening in degrees, 0 (closed) to 180.
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActuatorStates {
    pub pump: PumpActuator,
    pub servo: ServoActuator,
}

impl Default for ActuatorStates {
    fn default() -> Self {
        Self {
            pump: PumpActuator {
                state: PumpState::Off,
            },
            servo: ServoActuator { angle: 0.0 },
        }
    }
}

/// Immutable value retrieved each cycle from the status endpoint.
///
/// `sensors` is keyed by sensor name (soil_moisture, temperature, ...);
/// a BTreeMap keeps prompt rendering stable across cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub sensors: BTreeMap<String, SensorReading>,

    #[serde(default)]
    pub actuators: ActuatorStates,

    /// Advisory strings computed by the backend; embedded in the prompt.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl StatusSnapshot {
    pub fn sensor(&self, name: &str) -> Option<&SensorReading> {
        self.sensors.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_deserializes_backend_shape() {
        let body = serde_json::json!({
            "sensors": {
                "soil_moisture": { "value": 25.0, "status": "dry" },
                "temperature": { "value": 35.0, "status": "hot" }
            },
            "actuators": {
                "pump": { "state": "off" },
                "servo": { "angle": 90.0 }
            },
            "recommendations": ["water the plants"]
        });

        let snapshot: StatusSnapshot = serde_json::from_value(body).unwrap();
        assert_eq!(snapshot.sensor("soil_moisture").unwrap().value, 25.0);
        assert_eq!(snapshot.sensor("soil_moisture").unwrap().status, "dry");
        assert!(!snapshot.actuators.pump.state.is_on());
        assert_eq!(snapshot.actuators.servo.angle, 90.0);
        assert_eq!(snapshot.recommendations.len(), 1);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let snapshot: StatusSnapshot = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(snapshot.sensors.is_empty());
        assert_eq!(snapshot.actuators, ActuatorStates::default());
        assert!(snapshot.recommendations.is_empty());
    }
}
