//! Weather readings and the temperature bands they fall into.

use serde::{Deserialize, Serialize};

/// Errors from constructing a weather reading.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeatherError {
    #[error("temperature must be a finite number, got {0}")]
    NonFinite(f64),
}

/// A single weather observation: air temperature and whether it is raining.
///
/// The temperature is guaranteed finite. Any finite value is accepted,
/// however extreme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReading", rename_all = "camelCase")]
pub struct WeatherReading {
    temperature: f64,
    is_raining: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReading {
    temperature: f64,
    #[serde(default)]
    is_raining: bool,
}

impl TryFrom<RawReading> for WeatherReading {
    type Error = WeatherError;

    fn try_from(raw: RawReading) -> Result<Self, Self::Error> {
        Self::new(raw.temperature, raw.is_raining)
    }
}

impl WeatherReading {
    /// Validates and builds a reading. Temperature is in degrees Celsius.
    pub fn new(temperature: f64, is_raining: bool) -> Result<Self, WeatherError> {
        if !temperature.is_finite() {
            return Err(WeatherError::NonFinite(temperature));
        }
        // Normalize -0.0 so it displays as "0".
        let temperature = if temperature == 0.0 { 0.0 } else { temperature };
        Ok(Self {
            temperature,
            is_raining,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn is_raining(&self) -> bool {
        self.is_raining
    }

    pub fn band(&self) -> TemperatureBand {
        TemperatureBand::of(self.temperature)
    }

    /// Strictly above 20°C. Exactly 20 is not warm by this test.
    pub fn is_hot(&self) -> bool {
        self.temperature > 20.0
    }
}

/// Temperature ranges used to pick the top-slot phrasing.
///
/// Lower bounds are inclusive: 0 is `Cool`, 10 is `Mild`, 20 is `Warm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemperatureBand {
    /// Below 0°C.
    Cold,
    /// 0°C up to 10°C.
    Cool,
    /// 10°C up to 20°C.
    Mild,
    /// 20°C and above.
    Warm,
}

impl TemperatureBand {
    pub fn of(temperature: f64) -> Self {
        if temperature < 0.0 {
            Self::Cold
        } else if temperature < 10.0 {
            Self::Cool
        } else if temperature < 20.0 {
            Self::Mild
        } else {
            Self::Warm
        }
    }
}
