// ── Equipment and scenario catalogues ──
//
// Read-only repositories consulted by the estimator and the switch search.
// The engine only talks to the `Catalog` trait, so tests can hand in a
// catalogue with two APs and one switch.

mod builtin;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::CoreError;
use crate::model::{ApModel, Generation, Scenario, SwitchModel};

/// Versioned, read-only view over scenarios, AP models and switch models.
///
/// Declaration order is significant: selection tie-breaks fall back to it.
pub trait Catalog: Send + Sync {
    /// Identifies the catalogue contents; results are only comparable
    /// across identical versions.
    fn version(&self) -> &str;

    /// All scenarios, in declaration order.
    fn scenarios(&self) -> &[Scenario];

    /// Scenario used when a request names an unknown key.
    fn default_scenario(&self) -> &Scenario;

    /// AP models of one generation, in declaration order.
    fn ap_models(&self, generation: Generation) -> &[ApModel];

    /// Every switch model, in declaration order.
    fn switch_models(&self) -> &[SwitchModel];

    fn find_scenario(&self, key: &str) -> Option<&Scenario> {
        self.scenarios().iter().find(|s| s.key == key)
    }

    /// Resolve a scenario key, falling back to the default on a miss.
    fn scenario(&self, key: &str) -> &Scenario {
        self.find_scenario(key).unwrap_or_else(|| {
            let fallback = self.default_scenario();
            debug!(requested = key, used = %fallback.key, "unknown scenario, using default");
            fallback
        })
    }

    fn ap_model(&self, generation: Generation, model_id: &str) -> Option<&ApModel> {
        self.ap_models(generation)
            .iter()
            .find(|m| m.model_id.eq_ignore_ascii_case(model_id))
    }

    /// Look an AP up by model id across every generation.
    fn find_ap_model(&self, model_id: &str) -> Option<&ApModel> {
        Generation::iter().find_map(|g| self.ap_model(g, model_id))
    }

    fn switch_model(&self, model_id: &str) -> Option<&SwitchModel> {
        self.switch_models()
            .iter()
            .find(|s| s.model_id.eq_ignore_ascii_case(model_id))
    }

    fn require_ap_model(&self, model_id: &str) -> Result<&ApModel, CoreError> {
        self.find_ap_model(model_id)
            .ok_or_else(|| CoreError::ApModelNotFound {
                model_id: model_id.into(),
            })
    }

    fn require_switch_model(&self, model_id: &str) -> Result<&SwitchModel, CoreError> {
        self.switch_model(model_id)
            .ok_or_else(|| CoreError::SwitchModelNotFound {
                model_id: model_id.into(),
            })
    }
}

// ── On-disk document ────────────────────────────────────────────────

/// Serialized catalogue layout, shared by the built-in data and TOML files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: String,
    /// Key of the fallback scenario. Defaults to the first declared one.
    #[serde(default)]
    pub default_scenario: Option<String>,
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub access_points: Vec<ApModel>,
    #[serde(default)]
    pub switches: Vec<SwitchModel>,
}

// ── In-memory catalogue ─────────────────────────────────────────────

/// Catalogue held fully in memory, loaded once per process.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    version: String,
    scenarios: Vec<Scenario>,
    default_index: usize,
    access_points: BTreeMap<Generation, Vec<ApModel>>,
    switches: Vec<SwitchModel>,
}

static BUILTIN: LazyLock<StaticCatalog> = LazyLock::new(|| {
    let doc = builtin::document();
    StaticCatalog::assemble(doc, 0)
});

impl StaticCatalog {
    /// The catalogue compiled into the binary.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a catalogue from a document, rejecting inconsistent data.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, CoreError> {
        validate_document(&doc)?;
        let default_index = match doc.default_scenario.as_deref() {
            Some(key) => doc
                .scenarios
                .iter()
                .position(|s| s.key == key)
                .ok_or_else(|| CoreError::catalog(format!("default scenario '{key}' is not defined")))?,
            None => 0,
        };
        Ok(Self::assemble(doc, default_index))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CoreError> {
        let doc: CatalogDocument = toml::from_str(raw)?;
        Self::from_document(doc)
    }

    /// Load a catalogue TOML file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&raw)?;
        debug!(
            path = %path.display(),
            version = %catalog.version,
            switches = catalog.switches.len(),
            "loaded catalogue file"
        );
        Ok(catalog)
    }

    /// Export the catalogue back into its document form.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            version: self.version.clone(),
            default_scenario: Some(self.default_scenario().key.clone()),
            scenarios: self.scenarios.clone(),
            access_points: self.access_points.values().flatten().cloned().collect(),
            switches: self.switches.clone(),
        }
    }

    fn assemble(doc: CatalogDocument, default_index: usize) -> Self {
        let mut access_points: BTreeMap<Generation, Vec<ApModel>> = BTreeMap::new();
        for ap in doc.access_points {
            access_points.entry(ap.generation).or_default().push(ap);
        }
        Self {
            version: doc.version,
            scenarios: doc.scenarios,
            default_index,
            access_points,
            switches: doc.switches,
        }
    }
}

impl Catalog for StaticCatalog {
    fn version(&self) -> &str {
        &self.version
    }

    fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    fn default_scenario(&self) -> &Scenario {
        // Non-empty and in range: guaranteed by validation or the built-in data.
        &self.scenarios[self.default_index]
    }

    fn ap_models(&self, generation: Generation) -> &[ApModel] {
        self.access_points
            .get(&generation)
            .map_or(&[], Vec::as_slice)
    }

    fn switch_models(&self) -> &[SwitchModel] {
        &self.switches
    }
}

// ── Validation ──────────────────────────────────────────────────────

fn validate_document(doc: &CatalogDocument) -> Result<(), CoreError> {
    if doc.scenarios.is_empty() {
        return Err(CoreError::catalog("at least one scenario is required"));
    }

    let mut keys = HashSet::new();
    for scenario in &doc.scenarios {
        if !keys.insert(scenario.key.as_str()) {
            return Err(CoreError::catalog(format!("duplicate scenario '{}'", scenario.key)));
        }
        if !(scenario.coverage_area_per_ap_m2.is_finite() && scenario.coverage_area_per_ap_m2 > 0.0) {
            return Err(CoreError::catalog(format!(
                "scenario '{}' needs a positive coverage area",
                scenario.key
            )));
        }
    }

    let mut ap_ids = HashSet::new();
    for ap in &doc.access_points {
        if !ap_ids.insert((ap.generation, ap.model_id.to_ascii_lowercase())) {
            return Err(CoreError::catalog(format!(
                "duplicate access point '{}' in {}",
                ap.model_id, ap.generation
            )));
        }
        if ap.max_users == 0 {
            return Err(CoreError::catalog(format!(
                "access point '{}' must serve at least one user",
                ap.model_id
            )));
        }
    }

    let mut switch_ids = HashSet::new();
    for switch in &doc.switches {
        if !switch_ids.insert(switch.model_id.to_ascii_lowercase()) {
            return Err(CoreError::catalog(format!("duplicate switch '{}'", switch.model_id)));
        }
        if !(switch.poe_budget_watts.is_finite() && switch.poe_budget_watts >= 0.0) {
            return Err(CoreError::catalog(format!(
                "switch '{}' has an invalid PoE budget",
                switch.model_id
            )));
        }
    }

    Ok(())
}
