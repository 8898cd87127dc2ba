//! Snapshot comparator.
//!
//! [`diff`] compares two decoded snapshots and reports every tracked field
//! whose value changed. The comparator keeps no state; the caller owns the
//! previous snapshot.

use crate::status::Status;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A field value as seen by the comparator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
    /// Written as a JSON number so it stays distinct from text values.
    Decimal(#[serde(with = "rust_decimal::serde::float")] Decimal),
    Integer(i64),
    /// The frame did not report the field.
    Absent,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Absent => f.write_str("none"),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Declares the tracked fields in comparison order, with their stable names
/// and how each is read from a [`Status`].
macro_rules! status_fields {
    ($( $variant:ident => $name:literal, |$s:ident| $value:expr; )+) => {
        /// A field the comparator tracks.
        ///
        /// Declaration order is the order transitions are reported in.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StatusField {
            $( $variant, )+
        }

        impl StatusField {
            /// Every tracked field, in reporting order.
            pub const ALL: &'static [StatusField] = &[ $( StatusField::$variant, )+ ];

            /// Stable snake_case name used in configuration and output.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// Look a field up by its [`name`](Self::name).
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Read this field from a snapshot.
            #[must_use]
            pub fn value(self, status: &Status) -> FieldValue {
                match self {
                    $( Self::$variant => {
                        let $s = status;
                        FieldValue::from($value)
                    } )+
                }
            }
        }
    };
}

status_fields! {
    // landing
    LandingGearDown => "landing_gear_down", |s| s.landing_gear_down;
    Docked => "docked", |s| s.docked;
    Landed => "landed", |s| s.landed;
    Vehicle => "vehicle", |s| s.vehicle.to_string();

    // flight mode
    Supercruise => "supercruise", |s| s.supercruise;
    Hyperspace => "hyperspace", |s| s.hyperspace;
    FsdStatus => "fsd_status", |s| s.fsd_status.to_string();
    FsdHyperdriveCharging => "fsd_hyperdrive_charging", |s| s.fsd_hyperdrive_charging;

    // combat and ship systems
    ShieldsUp => "shields_up", |s| s.shields_up;
    FlightAssistOff => "flight_assist_off", |s| s.flight_assist_off;
    HardpointsDeployed => "hardpoints_deployed", |s| s.hardpoints_deployed;
    InWing => "in_wing", |s| s.in_wing;
    InMulticrew => "in_multicrew", |s| s.in_multicrew;
    LightsOn => "lights_on", |s| s.lights_on;
    NightVision => "night_vision", |s| s.night_vision;
    CargoScoopDeployed => "cargo_scoop_deployed", |s| s.cargo_scoop_deployed;
    SilentRunning => "silent_running", |s| s.silent_running;
    ScoopingFuel => "scooping_fuel", |s| s.scooping_fuel;
    LowFuel => "low_fuel", |s| s.low_fuel;
    Overheating => "overheating", |s| s.overheating;
    InDanger => "in_danger", |s| s.in_danger;
    BeingInterdicted => "being_interdicted", |s| s.being_interdicted;
    AnalysisMode => "analysis_mode", |s| s.analysis_mode;

    // surface
    NearSurface => "near_surface", |s| s.near_surface;
    AltitudeFromAverageRadius => "altitude_from_average_radius", |s| s.altitude_from_average_radius;

    // SRV
    SrvDriveAssist => "srv_drive_assist", |s| s.srv_drive_assist;
    SrvUnderShip => "srv_under_ship", |s| s.srv_under_ship;
    SrvTurretDeployed => "srv_turret_deployed", |s| s.srv_turret_deployed;
    SrvHandbrakeActivated => "srv_handbrake_activated", |s| s.srv_handbrake_activated;
    SrvHighBeams => "srv_high_beams", |s| s.srv_high_beams;

    // on foot
    OnFootInStation => "on_foot_in_station", |s| s.on_foot_in_station;
    OnFootOnPlanet => "on_foot_on_planet", |s| s.on_foot_on_planet;
    OnFootInHangar => "on_foot_in_hangar", |s| s.on_foot_in_hangar;
    OnFootSocialSpace => "on_foot_social_space", |s| s.on_foot_social_space;
    OnFootExterior => "on_foot_exterior", |s| s.on_foot_exterior;
    AimDownSight => "aim_down_sight", |s| s.aim_down_sight;
    GlideMode => "glide_mode", |s| s.glide_mode;
    BreathableAtmosphere => "breathable_atmosphere", |s| s.breathable_atmosphere;
    LowOxygen => "low_oxygen", |s| s.low_oxygen;
    LowHealth => "low_health", |s| s.low_health;
    OnFootTemperature => "on_foot_temperature", |s| s.on_foot_temperature.map(|t| t.to_string());
    SelectedWeapon => "selected_weapon", |s| s.selected_weapon.clone();

    // power distribution and controls
    PipsSys => "pips_sys", |s| s.pips_sys;
    PipsEng => "pips_eng", |s| s.pips_eng;
    PipsWea => "pips_wea", |s| s.pips_wea;
    Firegroup => "firegroup", |s| s.firegroup;
    GuiFocus => "gui_focus", |s| s.gui_focus.label();

    // resources and location
    Fuel => "fuel", |s| s.fuel;
    CargoCarried => "cargo_carried", |s| s.cargo_carried;
    LegalStatus => "legal_status", |s| s.legal_status.as_ref().map(ToString::to_string);
    BodyName => "body_name", |s| s.body_name.clone();
    Destination => "destination", |s| s.destination.as_ref().map(|d| d.name.clone());
}

impl fmt::Display for StatusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a field name is not tracked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for StatusField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl Serialize for StatusField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for StatusField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// One field changing between two consecutive snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemanticTransition {
    pub field: StatusField,
    pub old: FieldValue,
    pub new: FieldValue,
    /// Timestamp of the newer snapshot.
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for SemanticTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.field, self.old, self.new)
    }
}

/// Compare two snapshots.
///
/// Returns nothing when there is no previous snapshot: the current one is
/// just the baseline. Otherwise one transition per changed field, in
/// [`StatusField::ALL`] order. Numbers compare exactly.
#[must_use]
pub fn diff(previous: Option<&Status>, current: &Status) -> Vec<SemanticTransition> {
    let Some(previous) = previous else {
        return Vec::new();
    };

    StatusField::ALL
        .iter()
        .filter_map(|&field| {
            let old = field.value(previous);
            let new = field.value(current);
            (old != new).then(|| SemanticTransition {
                field,
                old,
                new,
                timestamp: current.timestamp,
            })
        })
        .collect()
}
