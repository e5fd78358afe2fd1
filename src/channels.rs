//! The four sensor channels published on the greenhouse ThingSpeak channel.
//!
//! ThingSpeak only knows `field1`..`field8`; the meaning of each field lives
//! here. Declaration order is the order charts appear on the page.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorChannel {
    AirTemperature,
    SoilTemperature,
    Humidity,
    LightIntensity,
}

impl SensorChannel {
    pub const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] = [
        Self::AirTemperature,
        Self::SoilTemperature,
        Self::Humidity,
        Self::LightIntensity,
    ];

    /// Position in [`SensorChannel::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::AirTemperature => 0,
            Self::SoilTemperature => 1,
            Self::Humidity => 2,
            Self::LightIntensity => 3,
        }
    }

    /// ThingSpeak feed field carrying this channel.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::AirTemperature => "field1",
            Self::SoilTemperature => "field2",
            Self::Humidity => "field3",
            Self::LightIntensity => "field4",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AirTemperature => "Air Temperature",
            Self::SoilTemperature => "Soil Temperature",
            Self::Humidity => "Humidity",
            Self::LightIntensity => "Light Intensity",
        }
    }

    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::AirTemperature | Self::SoilTemperature => "°C",
            Self::Humidity => "%",
            Self::LightIntensity => "lux",
        }
    }

    /// Display label used for chart titles and the y axis, e.g. `Humidity (%)`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} ({})", self.name(), self.unit())
    }

    /// Environment variable overriding the prediction CSV download URL.
    #[must_use]
    pub const fn prediction_url_var(self) -> &'static str {
        match self {
            Self::AirTemperature => "PREDICTED_AIR_TEMPERATURE_URL",
            Self::SoilTemperature => "PREDICTED_SOIL_TEMPERATURE_URL",
            Self::Humidity => "PREDICTED_HUMIDITY_URL",
            Self::LightIntensity => "PREDICTED_LIGHT_INTENSITY_URL",
        }
    }
}

impl fmt::Display for SensorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
