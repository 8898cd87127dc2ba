//! Decoder and snapshot comparator for the Elite Dangerous `Status.json`
//! record.
//!
//! The game rewrites `Status.json` a few times per second with one JSON object
//! describing the player's current state: two bitmask words (`Flags`,
//! `Flags2`) plus optional readings such as fuel, pips and a surface position.
//!
//! - [`decode`] turns one record into an immutable [`Status`] snapshot.
//! - [`diff`] compares two snapshots and lists the fields that changed, in a
//!   fixed order.
//!
//! Both are pure functions. Keeping the previous snapshot between calls is up
//! to the caller.
//!
//! ```
//! use flightdeck_status::{decode, diff, StatusField};
//!
//! let launched = decode(r#"{"timestamp":"2021-05-01T21:04:13Z","event":"Status","Flags":16842765}"#)?;
//! let undocked = decode(r#"{"timestamp":"2021-05-01T21:04:20Z","event":"Status","Flags":16842764}"#)?;
//! assert!(launched.docked);
//!
//! let changes = diff(Some(&launched), &undocked);
//! assert_eq!(changes.len(), 1);
//! assert_eq!(changes[0].field, StatusField::Docked);
//! # Ok::<(), flightdeck_status::DecodeError>(())
//! ```

#![deny(static_mut_refs)]

pub mod decoder;
pub mod diff;
pub mod error;
pub mod flags;
pub mod frame;
pub mod status;
pub mod types;

pub use decoder::{decode, decode_bytes, decode_frame, decode_value};
pub use diff::{FieldValue, SemanticTransition, StatusField, UnknownField, diff};
pub use error::DecodeError;
pub use flags::{StatusFlags, StatusFlags2};
pub use frame::{RawStatusFrame, STATUS_EVENT};
pub use status::{PositionFix, Status};
pub use types::{Destination, FsdStatus, GuiFocus, LegalStatus, OnFootTemperature, Vehicle};
