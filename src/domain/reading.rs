// Reading domain model
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Daylight {
    High,
    Low,
}

impl Daylight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Daylight::High => "HIGH",
            Daylight::Low => "LOW",
        }
    }
}

impl fmt::Display for Daylight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Daylight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(Daylight::High),
            "LOW" => Ok(Daylight::Low),
            other => Err(format!("unknown daylight level: {}", other)),
        }
    }
}

/// A generated sample that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorSample {
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub daylight: Daylight,
}

impl SensorSample {
    pub fn new(temperature: f64, humidity: f64, soil_moisture: f64, daylight: Daylight) -> Self {
        Self {
            temperature,
            humidity,
            soil_moisture,
            daylight,
        }
    }
}

/// A persisted sample. Identity and creation time are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub id: String,
    #[serde(flatten)]
    pub sample: SensorSample,
    pub created_at: DateTime<Utc>,
}

impl Reading {
    /// Assign a fresh id and stamp the current time, at millisecond precision
    /// so every store returns the same value it persisted.
    pub fn stamp(sample: SensorSample) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sample,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Rebuild a reading that was already persisted.
    pub fn restore(id: String, sample: SensorSample, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            sample,
            created_at,
        }
    }
}
