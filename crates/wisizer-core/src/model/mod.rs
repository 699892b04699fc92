// ── Domain model ──
//
// Catalogue entities (scenarios, AP models, switch models) and the
// per-invocation sizing request.

pub mod access_point;
pub mod common;
pub mod generation;
pub mod ports;
pub mod request;
pub mod scenario;
pub mod switch;

pub use access_point::{ApModel, BandCapacity, Environment, SelectedAp};
pub use common::{DocLinks, LicenseOption};
pub use generation::Generation;
pub use ports::{PortGroup, describe_ports, total_ports};
pub use request::{DEFAULT_CEILING_HEIGHT_M, SizingRequest};
pub use scenario::Scenario;
pub use switch::{Layer, Stacking, SwitchModel};
