//! Strongly-typed values derived from the status record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The vehicle (or lack of one) the player currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Vehicle {
    /// Main ship. Also the value when the player is not signed in.
    #[default]
    Ship,
    #[serde(rename = "SRV")]
    Srv,
    Fighter,
    /// Taxi or dropship.
    Taxi,
    OnFoot,
}

impl Vehicle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ship => "Ship",
            Self::Srv => "SRV",
            Self::Fighter => "Fighter",
            Self::Taxi => "Taxi",
            Self::OnFoot => "OnFoot",
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frame shift drive readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FsdStatus {
    #[default]
    Ready,
    Cooldown,
    Masslock,
    Charging,
}

impl FsdStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Cooldown => "cooldown",
            Self::Masslock => "masslock",
            Self::Charging => "charging",
        }
    }
}

impl fmt::Display for FsdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ambient temperature band reported while on foot.
///
/// `Warm` is part of the label vocabulary but no current `Flags2` bit pattern
/// decodes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnFootTemperature {
    Freezing,
    Cold,
    #[default]
    Temperate,
    Warm,
    Hot,
    Searing,
}

impl OnFootTemperature {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Freezing => "freezing",
            Self::Cold => "cold",
            Self::Temperate => "temperate",
            Self::Warm => "warm",
            Self::Hot => "hot",
            Self::Searing => "searing",
        }
    }
}

impl fmt::Display for OnFootTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which screen or panel currently has the player's focus (`GuiFocus`).
///
/// Codes the table does not know about are kept as [`GuiFocus::Unknown`] and
/// render as their decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuiFocus {
    #[default]
    None,
    Interface,
    ExternalPanel,
    CommsPanel,
    RolePanel,
    StationServices,
    GalaxyMap,
    SystemMap,
    Orrery,
    FssMode,
    SaaMode,
    Codex,
    Unknown(i64),
}

impl GuiFocus {
    /// Map a raw `GuiFocus` code.
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Interface,
            2 => Self::ExternalPanel,
            3 => Self::CommsPanel,
            4 => Self::RolePanel,
            5 => Self::StationServices,
            6 => Self::GalaxyMap,
            7 => Self::SystemMap,
            8 => Self::Orrery,
            9 => Self::FssMode,
            10 => Self::SaaMode,
            11 => Self::Codex,
            other => Self::Unknown(other),
        }
    }

    /// The raw code this focus was decoded from.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Interface => 1,
            Self::ExternalPanel => 2,
            Self::CommsPanel => 3,
            Self::RolePanel => 4,
            Self::StationServices => 5,
            Self::GalaxyMap => 6,
            Self::SystemMap => 7,
            Self::Orrery => 8,
            Self::FssMode => 9,
            Self::SaaMode => 10,
            Self::Codex => 11,
            Self::Unknown(code) => code,
        }
    }

    /// Human label, `None` for codes outside the table.
    #[must_use]
    pub fn known_label(self) -> Option<&'static str> {
        let label = match self {
            Self::None => "none",
            Self::Interface => "interface",
            Self::ExternalPanel => "external panel",
            Self::CommsPanel => "communications panel",
            Self::RolePanel => "role panel",
            Self::StationServices => "station services",
            Self::GalaxyMap => "galaxy map",
            Self::SystemMap => "system map",
            Self::Orrery => "orrery",
            Self::FssMode => "fss mode",
            Self::SaaMode => "saa mode",
            Self::Codex => "codex",
            Self::Unknown(_) => return None,
        };
        Some(label)
    }

    /// Label for display; unknown codes render as the number itself.
    #[must_use]
    pub fn label(self) -> String {
        match self.known_label() {
            Some(label) => label.to_string(),
            None => self.code().to_string(),
        }
    }
}

impl fmt::Display for GuiFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_label() {
            Some(label) => f.write_str(label),
            None => write!(f, "{}", self.code()),
        }
    }
}

impl Serialize for GuiFocus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parsed `LegalState`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum LegalStatus {
    Clean,
    IllegalCargo,
    Speeding,
    Wanted,
    Hostile,
    PassengerWanted,
    Warrant,
    Allied,
    Thargoid,
    /// A state this crate has no name for; kept verbatim.
    Unrecognized(String),
}

impl LegalStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Clean => "Clean",
            Self::IllegalCargo => "IllegalCargo",
            Self::Speeding => "Speeding",
            Self::Wanted => "Wanted",
            Self::Hostile => "Hostile",
            Self::PassengerWanted => "PassengerWanted",
            Self::Warrant => "Warrant",
            Self::Allied => "Allied",
            Self::Thargoid => "Thargoid",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Whether the player is currently breaking the law in some way.
    #[must_use]
    pub fn is_offending(&self) -> bool {
        matches!(
            self,
            Self::IllegalCargo
                | Self::Speeding
                | Self::Wanted
                | Self::Hostile
                | Self::PassengerWanted
                | Self::Warrant
        )
    }

    /// Parse a `LegalState` value; unknown states are kept verbatim.
    #[must_use]
    pub fn from_journal(s: &str) -> Self {
        match s {
            "Clean" => Self::Clean,
            "IllegalCargo" => Self::IllegalCargo,
            "Speeding" => Self::Speeding,
            "Wanted" => Self::Wanted,
            "Hostile" => Self::Hostile,
            "PassengerWanted" => Self::PassengerWanted,
            "Warrant" => Self::Warrant,
            "Allied" => Self::Allied,
            "Thargoid" => Self::Thargoid,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl FromStr for LegalStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_journal(s))
    }
}

impl fmt::Display for LegalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route destination selected in the ship's navigation panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Destination {
    /// System address.
    pub system: u64,
    /// Body id within the system.
    pub body: u32,
    /// Localised name when provided, raw name otherwise.
    pub name: String,
}
