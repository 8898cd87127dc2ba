//! Wire shape of a status record.
//!
//! JSON payload example (Odyssey era):
//! ```json
//! {
//!   "timestamp": "2021-05-01T21:04:13Z",
//!   "event": "Status",
//!   "Flags": 151060493,
//!   "Flags2": 0,
//!   "Pips": [4, 8, 0],
//!   "FireGroup": 0,
//!   "GuiFocus": 0,
//!   "Fuel": { "FuelMain": 32.0, "FuelReservoir": 0.63 },
//!   "Cargo": 0.0,
//!   "LegalState": "Clean"
//! }
//! ```
//!
//! Every key except `timestamp` may be absent. Keys not listed here are ignored.

use serde::Deserialize;
use serde_json::Number;

/// Event discriminator carried by status records.
pub const STATUS_EVENT: &str = "Status";

/// Raw status record as it appears on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatusFrame {
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub event: Option<String>,

    #[serde(default, rename = "Flags")]
    pub flags: Option<u32>,

    #[serde(default, rename = "Flags2")]
    pub flags2: Option<u32>,

    /// Half-pip units for [system, engine, weapon]. Kept as raw JSON numbers
    /// so float renderings and out-of-range values can be clamped.
    #[serde(default, rename = "Pips")]
    pub pips: Option<Vec<Number>>,

    #[serde(default, rename = "FireGroup")]
    pub fire_group: Option<u32>,

    #[serde(default, rename = "GuiFocus")]
    pub gui_focus: Option<i64>,

    #[serde(default, rename = "Fuel")]
    pub fuel: Option<RawFuel>,

    #[serde(default, rename = "Cargo")]
    pub cargo: Option<f64>,

    #[serde(default, rename = "LegalState")]
    pub legal_state: Option<String>,

    #[serde(default, rename = "Latitude")]
    pub latitude: Option<f64>,

    #[serde(default, rename = "Longitude")]
    pub longitude: Option<f64>,

    #[serde(default, rename = "Altitude")]
    pub altitude: Option<f64>,

    #[serde(default, rename = "Heading")]
    pub heading: Option<f64>,

    #[serde(default, rename = "BodyName")]
    pub body_name: Option<String>,

    #[serde(default, rename = "PlanetRadius")]
    pub planet_radius: Option<f64>,

    #[serde(default, rename = "Oxygen")]
    pub oxygen: Option<f64>,

    #[serde(default, rename = "Health")]
    pub health: Option<f64>,

    /// Ambient temperature in Kelvin.
    #[serde(default, rename = "Temperature")]
    pub temperature: Option<f64>,

    #[serde(default, rename = "Gravity")]
    pub gravity: Option<f64>,

    #[serde(default, rename = "SelectedWeapon")]
    pub selected_weapon: Option<String>,

    #[serde(default, rename = "SelectedWeapon_Localised")]
    pub selected_weapon_localised: Option<String>,

    #[serde(default, rename = "Balance")]
    pub balance: Option<u64>,

    #[serde(default, rename = "Destination")]
    pub destination: Option<RawDestination>,
}

/// `Fuel` object: main tank and reservoir, both in tonnes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFuel {
    #[serde(default, rename = "FuelMain")]
    pub fuel_main: Option<f64>,

    #[serde(default, rename = "FuelReservoir")]
    pub fuel_reservoir: Option<f64>,
}

/// `Destination` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDestination {
    #[serde(default, rename = "System")]
    pub system: u64,

    #[serde(default, rename = "Body")]
    pub body: u32,

    #[serde(default, rename = "Name")]
    pub name: String,

    #[serde(default, rename = "Name_Localised")]
    pub name_localised: Option<String>,
}

impl RawStatusFrame {
    /// Whether the record carries the `Status` discriminator.
    #[must_use]
    pub fn is_status(&self) -> bool {
        self.event.as_deref() == Some(STATUS_EVENT)
    }
}
