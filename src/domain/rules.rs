// Threshold rules mapping a sample to actuator actions
use super::reading::{Daylight, SensorSample};

pub const TEMPERATURE_MAX: f64 = 30.0;
pub const HUMIDITY_MIN: f64 = 40.0;
pub const DAYLIGHT_TRIGGER: Daylight = Daylight::Low;

pub const FAN_ACTION: &str = "Fan motor activated for cooling";
pub const IRRIGATION_ACTION: &str = "Irrigation system triggered";
pub const LIGHTING_ACTION: &str = "Artificial lighting turned on";

/// Evaluate every rule independently, in fixed order.
pub fn evaluate(sample: &SensorSample) -> Vec<String> {
    let mut actions = Vec::new();

    if sample.temperature > TEMPERATURE_MAX {
        actions.push(FAN_ACTION.to_string());
    }
    if sample.humidity < HUMIDITY_MIN {
        actions.push(IRRIGATION_ACTION.to_string());
    }
    if sample.daylight == DAYLIGHT_TRIGGER {
        actions.push(LIGHTING_ACTION.to_string());
    }

    actions
}
