//! Container model and related types.
//!
//! This module defines the [`ContainerSnapshot`] struct for representing a
//! container's milestone timeline, along with the equipment-code
//! normalization ([`ContainerClass::from_type_code`]) and free-time parsing
//! ([`parse_free_time`]) that turn raw upstream fields into chargeable
//! inputs. Normalization lives here, away from the rate engine, so it can
//! be tested against real-world type codes in isolation.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Free-time allowance applied when the upstream field cannot be parsed.
pub const DEFAULT_FREE_TIME_DAYS: u32 = 7;

/// The normalized container class used as a tariff key.
///
/// Upstream systems describe equipment with free-form type codes
/// (`"40RF"`, `"20GP"`, `"40FR"`, ...); tariffs are filed against one of
/// these three classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerClass {
    /// General-purpose dry box. The default when no marker matches.
    Dry,
    /// Refrigerated container.
    Reefer,
    /// Out-of-gauge equipment: open-top and flat-rack.
    Special,
}

impl ContainerClass {
    /// Normalizes a raw equipment type code into a tariff class.
    ///
    /// Matching is case-insensitive and substring-based: codes containing
    /// `RF` or `REEFER` are refrigerated, codes containing `OT` or `FR`
    /// are special equipment, everything else is a dry box. Reefer markers
    /// take precedence when a code carries both.
    ///
    /// # Examples
    ///
    /// ```
    /// use demurrage_engine::models::ContainerClass;
    ///
    /// assert_eq!(ContainerClass::from_type_code("40RF"), ContainerClass::Reefer);
    /// assert_eq!(ContainerClass::from_type_code("20ot"), ContainerClass::Special);
    /// assert_eq!(ContainerClass::from_type_code("40HC"), ContainerClass::Dry);
    /// ```
    pub fn from_type_code(type_code: &str) -> Self {
        let code = type_code.to_ascii_uppercase();
        if code.contains("RF") || code.contains("REEFER") {
            ContainerClass::Reefer
        } else if code.contains("OT") || code.contains("FR") {
            ContainerClass::Special
        } else {
            ContainerClass::Dry
        }
    }
}

impl fmt::Display for ContainerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerClass::Dry => "dry",
            ContainerClass::Reefer => "reefer",
            ContainerClass::Special => "special",
        };
        write!(f, "{}", name)
    }
}

/// Extracts the free-time allowance in days from a free-text field.
///
/// Upstream feeds carry values like `"7"`, `"7 days"`, or `"FREE 14 DAYS"`;
/// the first run of ASCII digits is taken as the day count. Input with no
/// parseable number falls back to [`DEFAULT_FREE_TIME_DAYS`] rather than
/// failing the container.
///
/// # Examples
///
/// ```
/// use demurrage_engine::models::parse_free_time;
///
/// assert_eq!(parse_free_time("10 days"), 10);
/// assert_eq!(parse_free_time("per agreement"), 7);
/// ```
pub fn parse_free_time(raw: &str) -> u32 {
    let digits: String = raw
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().unwrap_or(DEFAULT_FREE_TIME_DAYS)
}

/// A container's milestone timeline as reported by the registry.
///
/// All four milestone dates are optional: a container mid-voyage has no
/// arrival date yet, a container still on the customer's premises has no
/// return date. The engine skips clocks whose start milestone is absent
/// and treats an absent end milestone as a still-running clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSnapshot {
    /// The container number (e.g. `"MSKU1234567"`).
    pub container_number: String,
    /// The raw equipment type code as received from upstream.
    pub type_code: String,
    /// The normalized tariff class.
    pub class: ContainerClass,
    /// Free-time allowance in days; day 1 is the clock-start day itself.
    pub free_time_days: u32,
    /// Vessel arrival date (demurrage clock start).
    pub arrival_date: Option<NaiveDate>,
    /// Empty-container pickup date (detention clock start).
    pub empty_pickup_date: Option<NaiveDate>,
    /// Empty-container return date (demurrage clock end).
    pub return_date: Option<NaiveDate>,
    /// Full-container gate-in date (detention clock end).
    pub gate_in_date: Option<NaiveDate>,
    /// Whether an invoice has already been raised for this container.
    #[serde(default)]
    pub invoiced: bool,
}

impl ContainerSnapshot {
    /// Builds a snapshot from raw upstream fields, normalizing the type
    /// code and free-time text. Milestone dates start out unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use demurrage_engine::models::{ContainerClass, ContainerSnapshot};
    ///
    /// let container = ContainerSnapshot::from_raw("MSKU1234567", "40RF", "7 days");
    /// assert_eq!(container.class, ContainerClass::Reefer);
    /// assert_eq!(container.free_time_days, 7);
    /// ```
    pub fn from_raw(container_number: &str, type_code: &str, free_time: &str) -> Self {
        ContainerSnapshot {
            container_number: container_number.to_string(),
            type_code: type_code.to_string(),
            class: ContainerClass::from_type_code(type_code),
            free_time_days: parse_free_time(free_time),
            arrival_date: None,
            empty_pickup_date: None,
            return_date: None,
            gate_in_date: None,
            invoiced: false,
        }
    }
}
