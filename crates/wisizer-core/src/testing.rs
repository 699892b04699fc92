// Minimal catalogues shared by unit tests.

#![allow(clippy::unwrap_used)]

use crate::catalog::StaticCatalog;

const SCENARIOS: &str = r#"
    version = "test"

    [[scenarios]]
    key = "office"
    name = "Office"
    description = "Open office"
    coverage_area_per_ap_m2 = 200.0

    [[scenarios]]
    key = "hall"
    name = "Hall"
    description = "Lecture hall"
    coverage_area_per_ap_m2 = 150.0
    high_density = true
"#;

fn build(body: &str) -> StaticCatalog {
    StaticCatalog::from_toml_str(&format!("{SCENARIOS}\n{body}")).unwrap()
}

/// One Wi-Fi 6 AP drawing 30 W over a single 1/2.5 GbE port, and a small
/// set of switches.
pub(crate) fn single_ap_catalog() -> StaticCatalog {
    build(&format!("{AP_30W}\n{SWITCHES}"))
}

/// An AP whose radio only reports 2.4 GHz capacity.
pub(crate) fn legacy_radio_catalog() -> StaticCatalog {
    build(
        r#"
        [[access_points]]
        generation = "wifi6"
        model_id = "LEGACY"
        wifi_standard = "802.11n"
        spatial_streams = "2 x 2 : 2"
        port_groups = [{ port_count = 1, speeds_gbps = [1.0] }]
        poe_type = "PoE"
        poe_draw_watts = 12.0
        band_capacity_mbps = { "2.4ghz" = 300.0 }
        max_users = 25
        sku = "LEGACY-HW"
        "#,
    )
}

/// Switches only; for provisioning tests that supply their own AP.
pub(crate) fn switch_catalog() -> StaticCatalog {
    build(SWITCHES)
}

const AP_30W: &str = r#"
    [[access_points]]
    generation = "wifi6"
    model_id = "AP-30"
    wifi_standard = "802.11ax (Wi-Fi 6)"
    spatial_streams = "4 x 4 : 4"
    port_groups = [{ port_count = 1, speeds_gbps = [1.0, 2.5] }]
    poe_type = "PoE+"
    poe_draw_watts = 30.0
    band_capacity_mbps = { "2.4ghz" = 541.7, "5ghz" = 1083.3 }
    max_users = 50
    sku = "AP-30-HW"
"#;

// Declaration order: two equivalent 24-port gigabit switches first, the
// larger multigigabit units after.
const SWITCHES: &str = r#"
    [[switches]]
    family = "Test"
    model_id = "GIG-24-A"
    layer = "L2"
    access_port_groups = [{ port_count = 24, speeds_gbps = [1.0] }]
    poe_budget_watts = 370.0
    poe_type = "PoE+"
    switching_capacity_gbps = 56.0
    sku = "GIG-24-A-HW"

    [[switches]]
    family = "Test"
    model_id = "GIG-24-B"
    layer = "L2"
    access_port_groups = [{ port_count = 24, speeds_gbps = [1.0] }]
    poe_budget_watts = 370.0
    poe_type = "PoE+"
    switching_capacity_gbps = 56.0
    sku = "GIG-24-B-HW"

    [[switches]]
    family = "Test"
    model_id = "MGIG-48"
    layer = "L3"
    access_port_groups = [
        { port_count = 12, speeds_gbps = [1.0, 2.5, 5.0, 10.0] },
        { port_count = 36, speeds_gbps = [1.0] },
    ]
    poe_budget_watts = 675.0
    poe_type = "UPoE"
    switching_capacity_gbps = 392.0
    sku = "MGIG-48-M"

    [[switches]]
    family = "Test"
    model_id = "MGIG-24"
    layer = "L3"
    access_port_groups = [
        { port_count = 8, speeds_gbps = [1.0, 2.5, 5.0, 10.0] },
        { port_count = 16, speeds_gbps = [1.0] },
    ]
    poe_budget_watts = 880.0
    poe_type = "UPoE"
    switching_capacity_gbps = 272.0
    sku = "MGIG-24-M"
"#;
