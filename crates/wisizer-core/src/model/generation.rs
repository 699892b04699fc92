// ── Radio technology generations ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Radio-technology family an AP model belongs to.
///
/// Parses from the short key (`wifi6`), the marketing name (`Wi-Fi 6`) or
/// the ordinal alias (`gen-1`), case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Generation {
    #[serde(rename = "wifi6", alias = "gen-1", alias = "Wi-Fi 6")]
    #[strum(to_string = "wifi6", serialize = "wi-fi-6", serialize = "Wi-Fi 6", serialize = "gen-1")]
    WiFi6,

    #[serde(rename = "wifi6e", alias = "gen-2", alias = "Wi-Fi 6E")]
    #[strum(to_string = "wifi6e", serialize = "wi-fi-6e", serialize = "Wi-Fi 6E", serialize = "gen-2")]
    WiFi6E,

    #[serde(rename = "wifi7", alias = "gen-3", alias = "Wi-Fi 7")]
    #[strum(to_string = "wifi7", serialize = "wi-fi-7", serialize = "Wi-Fi 7", serialize = "gen-3")]
    WiFi7,
}

impl Generation {
    /// Marketing name shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Self::WiFi6 => "Wi-Fi 6",
            Self::WiFi6E => "Wi-Fi 6E",
            Self::WiFi7 => "Wi-Fi 7",
        }
    }
}
