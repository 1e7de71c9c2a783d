use serde::{Deserialize, Serialize};

/// Top-level wrapper around the weather payload.
///
/// The service nests everything under a capitalized `Response` key.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherEnvelope {
    #[serde(rename = "Response")]
    pub response: ApiResponse,
}

/// Application-level status envelope.
///
/// `status: false` means the service rejected the request even though the
/// transport succeeded; `message` carries the server's own explanation.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub status: bool,
    pub message: String,
    pub result: WeatherReport,
}

/// One decoded snapshot of current conditions.
///
/// A few wire names differ from the field names here (`humi`, `dateTime`,
/// `weather_icon`); the serde renames are the source of truth for the wire
/// contract. The struct is plain data: display formatting lives in the
/// methods below and is recomputed on every call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,

    /// Either a Unix epoch encoded as digits or a date the server already
    /// formatted. Consumers have to detect which, see the controller.
    #[serde(rename = "dateTime")]
    pub date_time: String,

    /// Empty when the service has no icon for the current conditions.
    #[serde(rename = "weather_icon")]
    pub icon_url: String,

    pub temp: f64,
    pub unit: String,
    pub weather: String,

    /// Pre-formatted by the server, e.g. `31°`.
    pub feels_like: String,

    pub high: f64,
    pub low: f64,

    /// Pre-formatted by the server, includes the `%` sign.
    #[serde(rename = "humi")]
    pub humidity: String,

    pub wind_direction: String,
    pub wind_speed: f64,
    pub wind_speed_unit: String,
}

impl WeatherReport {
    /// Icon identifier for the current wind direction.
    ///
    /// The production asset set maps `"S"` to the north icon, so that entry
    /// is kept as-is. Unrecognized directions fall back to north too.
    pub fn wind_direction_icon(&self) -> &'static str {
        match self.wind_direction.to_uppercase().as_str() {
            "N" => "ic_N",
            "NE" => "ic_NE",
            "E" => "ic_E",
            "SE" => "ic_SE",
            "S" => "ic_N",
            "SW" => "ic_SW",
            "W" => "ic_W",
            "NW" => "ic_NW",
            "NNE" => "ic_NNE",
            "ENE" => "ic_ENE",
            "ESE" => "ic_ESE",
            "SSE" => "ic_SSE",
            "SSW" => "ic_SSW",
            "WSW" => "ic_WSW",
            "WNW" => "ic_WNW",
            "NNW" => "ic_NNW",
            _ => "ic_N",
        }
    }

    /// Temperature truncated toward zero, glued to its unit: `21°C`.
    pub fn formatted_temp(&self) -> String {
        format!("{}{}", self.temp as i64, self.unit)
    }

    /// `H:28° L:18°`, truncated the same way as the temperature.
    pub fn formatted_high_low(&self) -> String {
        format!("H:{}° L:{}°", self.high as i64, self.low as i64)
    }

    /// Wind speed with its unit, untruncated: `11.5 km/h`.
    pub fn formatted_wind_speed(&self) -> String {
        format!("{} {}", self.wind_speed, self.wind_speed_unit)
    }

    /// Condition text with every word capitalized: `Light Rain Showers`.
    pub fn capitalized_weather(&self) -> String {
        let mut out = String::with_capacity(self.weather.len());
        let mut word_start = true;

        for ch in self.weather.chars() {
            if ch.is_whitespace() {
                word_start = true;
                out.push(ch);
            } else if word_start {
                out.extend(ch.to_uppercase());
                word_start = false;
            } else {
                out.extend(ch.to_lowercase());
            }
        }

        out
    }
}
