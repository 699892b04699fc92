// ── Advisories ──
//
// Non-fatal findings attached to a sizing result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::SizingRequest;

/// Something the reader of a result should know, but that did not stop
/// the calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// The requested scenario is not catalogued; the default was used.
    ScenarioDefaulted { requested: String, used: String },
    /// No AP model reaches the per-AP user target; the most capable one
    /// was selected and more units may be needed than estimated.
    CapacityExceeded {
        model_id: String,
        max_users: u32,
        required: u32,
    },
    /// No switch in the catalogue can take the APs.
    NoSuitableSwitch,
    /// The selected AP cannot be provisioned at all.
    SwitchProvisioningUnavailable { reason: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScenarioDefaulted { requested, used } => {
                write!(f, "Unknown scenario '{requested}', sized as '{used}'")
            }
            Self::CapacityExceeded {
                model_id,
                max_users,
                required,
            } => write!(
                f,
                "{model_id} serves at most {max_users} users but {required} per AP are needed; \
                 consider a site survey"
            ),
            Self::NoSuitableSwitch => f.write_str("No suitable switch in the catalogue"),
            Self::SwitchProvisioningUnavailable { reason } => {
                write!(f, "No switch recommendation possible: {reason}")
            }
        }
    }
}

// ── Site survey ─────────────────────────────────────────────────────

const SURVEY_AREA_M2: f64 = 1200.0;
const SURVEY_CEILING_M: f64 = 4.5;
const SURVEY_USERS: u32 = 500;
const SURVEY_APS: u32 = 12;
const SURVEY_DENSE_APS: u32 = 5;

/// Why a predictive site survey is recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum SurveyTrigger {
    #[strum(to_string = "floor area above 1200 m²")]
    LargeArea,
    #[strum(to_string = "ceiling higher than 4.5 m")]
    HighCeiling,
    #[strum(to_string = "more than 500 users")]
    ManyUsers,
    #[strum(to_string = "more than 12 access points")]
    ManyAccessPoints,
    #[strum(to_string = "high-density venue with 5 or more access points")]
    DenseVenue,
}

/// Whether the estimate should be backed by a predictive site survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAdvice {
    pub triggers: Vec<SurveyTrigger>,
}

impl SurveyAdvice {
    pub fn assess(request: &SizingRequest, high_density: bool, ap_count: u32) -> Self {
        let checks = [
            (request.area_m2 > SURVEY_AREA_M2, SurveyTrigger::LargeArea),
            (request.ceiling_height_m > SURVEY_CEILING_M, SurveyTrigger::HighCeiling),
            (request.total_users > SURVEY_USERS, SurveyTrigger::ManyUsers),
            (ap_count > SURVEY_APS, SurveyTrigger::ManyAccessPoints),
            (high_density && ap_count >= SURVEY_DENSE_APS, SurveyTrigger::DenseVenue),
        ];
        Self {
            triggers: checks
                .into_iter()
                .filter_map(|(hit, trigger)| hit.then_some(trigger))
                .collect(),
        }
    }

    pub fn survey_recommended(&self) -> bool {
        !self.triggers.is_empty()
    }

    pub fn headline(&self) -> &'static str {
        if self.survey_recommended() {
            "Predictive site survey recommended"
        } else {
            "Preliminary estimate"
        }
    }

    pub fn message(&self) -> &'static str {
        if self.survey_recommended() {
            "Given the complexity of the requirements, a predictive site survey is strongly recommended."
        } else {
            "This is a preliminary estimate and does not replace a predictive site survey."
        }
    }
}
