// Dashboard view state for the console client
use crate::client::api_client::ApiClient;
use crate::domain::reading::Reading;
use std::fmt;

pub const DEFAULT_SETPOINT: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Cold,
    Moderate,
    Hot,
}

impl TemperatureBand {
    pub fn of(temperature: f64) -> Self {
        if temperature > 30.0 {
            TemperatureBand::Hot
        } else if temperature < 20.0 {
            TemperatureBand::Cold
        } else {
            TemperatureBand::Moderate
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "blue",
            TemperatureBand::Moderate => "green",
            TemperatureBand::Hot => "red",
        }
    }
}

/// Which control the setpoint widget offers for the current reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureControl {
    Normal,
    Increase(TemperatureBand),
    Decrease(TemperatureBand),
}

/// Client-side copy of server state plus the local-only setpoint.
///
/// The setpoint is never written back to the server.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub latest: Option<Reading>,
    pub history: Vec<Reading>,
    pub actions: Vec<String>,
    pub setpoint: f64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            latest: None,
            history: Vec::new(),
            actions: Vec::new(),
            setpoint: DEFAULT_SETPOINT,
        }
    }
}

impl DashboardState {
    pub fn increase(&mut self) {
        self.setpoint += 1.0;
    }

    pub fn decrease(&mut self) {
        self.setpoint -= 1.0;
    }

    pub fn displayed_temperature(&self) -> f64 {
        self.latest
            .as_ref()
            .map(|r| r.sample.temperature)
            .unwrap_or(self.setpoint)
    }

    pub fn control(&self) -> Option<TemperatureControl> {
        let latest = self.latest.as_ref()?.sample.temperature;
        let band = TemperatureBand::of(self.setpoint);
        Some(if latest == self.setpoint {
            TemperatureControl::Normal
        } else if latest > self.setpoint {
            TemperatureControl::Increase(band)
        } else {
            TemperatureControl::Decrease(band)
        })
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DashboardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Sensor Data Dashboard ===")?;
        writeln!(f, "Temperature: {}°C", self.displayed_temperature())?;
        match self.control() {
            Some(TemperatureControl::Normal) => writeln!(f, "Temperature is Normal")?,
            Some(TemperatureControl::Increase(band)) => {
                writeln!(f, "[+] Increase ({}, setpoint {})", band.label(), self.setpoint)?
            }
            Some(TemperatureControl::Decrease(band)) => {
                writeln!(f, "[-] Decrease ({}, setpoint {})", band.label(), self.setpoint)?
            }
            None => {}
        }

        writeln!(f, "\n-- Latest Data --")?;
        match &self.latest {
            Some(reading) => write_reading(f, reading)?,
            None => writeln!(f, "No data available")?,
        }

        writeln!(f, "\n-- Actions --")?;
        if self.actions.is_empty() {
            writeln!(f, "No actions to display")?;
        }
        for action in &self.actions {
            writeln!(f, "* {}", action)?;
        }

        writeln!(f, "\n-- All Data --")?;
        if self.history.is_empty() {
            writeln!(f, "No data available")?;
        }
        for reading in &self.history {
            write_reading(f, reading)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_reading(f: &mut fmt::Formatter<'_>, reading: &Reading) -> fmt::Result {
    writeln!(f, "Temperature: {}°C", reading.sample.temperature)?;
    writeln!(f, "Humidity: {}%", reading.sample.humidity)?;
    writeln!(f, "Soil Moisture: {}%", reading.sample.soil_moisture)?;
    writeln!(f, "Daylight: {}", reading.sample.daylight)?;
    writeln!(
        f,
        "Created At: {}",
        reading
            .created_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
    )
}

/// Dashboard bound to a server. Fetch failures are logged and leave state as it was.
pub struct Dashboard {
    client: ApiClient,
    pub state: DashboardState,
}

impl Dashboard {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: DashboardState::default(),
        }
    }

    /// Run once at startup.
    pub async fn initialize(&mut self) {
        self.generate().await;
    }

    pub async fn generate(&mut self) {
        match self.client.generate().await {
            Ok(generated) => {
                self.state.actions = generated.actions;
                self.refresh().await;
            }
            Err(e) => tracing::warn!("Error generating data: {:#}", e),
        }
    }

    pub async fn refresh(&mut self) {
        self.refresh_latest().await;
        self.refresh_all().await;
    }

    pub async fn refresh_latest(&mut self) {
        match self.client.latest().await {
            Ok(latest) => self.state.latest = latest,
            Err(e) => tracing::warn!("Error fetching latest data: {:#}", e),
        }
    }

    pub async fn refresh_all(&mut self) {
        match self.client.all().await {
            Ok(history) => self.state.history = history,
            Err(e) => tracing::warn!("Error fetching all data: {:#}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::{Daylight, SensorSample};

    fn state_with_latest(temperature: f64) -> DashboardState {
        DashboardState {
            latest: Some(Reading::stamp(SensorSample::new(
                temperature,
                50.0,
                60.0,
                Daylight::High,
            ))),
            ..DashboardState::default()
        }
    }

    #[test]
    fn test_temperature_band() {
        assert_eq!(TemperatureBand::of(31.0), TemperatureBand::Hot);
        assert_eq!(TemperatureBand::of(30.0), TemperatureBand::Moderate);
        assert_eq!(TemperatureBand::of(20.0), TemperatureBand::Moderate);
        assert_eq!(TemperatureBand::of(19.0), TemperatureBand::Cold);
    }

    #[test]
    fn test_control_without_reading() {
        let state = DashboardState::default();
        assert_eq!(state.control(), None);
        assert_eq!(state.displayed_temperature(), DEFAULT_SETPOINT);
    }

    #[test]
    fn test_control_follows_reading() {
        let mut state = state_with_latest(24.0);
        assert_eq!(
            state.control(),
            Some(TemperatureControl::Increase(TemperatureBand::Moderate))
        );
        assert_eq!(state.displayed_temperature(), 24.0);

        state.increase();
        state.increase();
        assert_eq!(state.setpoint, 24.0);
        assert_eq!(state.control(), Some(TemperatureControl::Normal));

        state.decrease();
        assert_eq!(state.setpoint, 23.0);
        assert_eq!(
            state.control(),
            Some(TemperatureControl::Increase(TemperatureBand::Moderate))
        );

        let state = DashboardState {
            setpoint: 18.0,
            ..state_with_latest(12.5)
        };
        assert_eq!(
            state.control(),
            Some(TemperatureControl::Decrease(TemperatureBand::Cold))
        );
    }

    #[test]
    fn test_render_empty() {
        let text = DashboardState::default().render();
        assert!(text.contains("Temperature: 22°C"));
        assert!(text.contains("No actions to display"));
        assert!(text.contains("No data available"));
    }

    #[test]
    fn test_render_reading_and_actions() {
        let mut state = state_with_latest(31.5);
        state.actions = vec!["Fan motor activated for cooling".to_string()];
        let text = state.render();

        assert!(text.contains("Temperature: 31.5°C"));
        assert!(text.contains("Soil Moisture: 60%"));
        assert!(text.contains("Daylight: HIGH"));
        assert!(text.contains("* Fan motor activated for cooling"));
    }
}
