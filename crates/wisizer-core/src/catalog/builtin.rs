// ── Built-in catalogue data ──
//
// Scenarios, Meraki / Catalyst wireless APs and PoE access switches.
// Declaration order matters for selection tie-breaks.

use super::CatalogDocument;
use crate::model::{
    ApModel, BandCapacity, DocLinks, Generation, Layer, LicenseOption, PortGroup, Scenario,
    Stacking, SwitchModel,
};

const VERSION: &str = "2025.02";

const MR_SPECS: &str = "https://documentation.meraki.com/MR/MR_Overview_and_Specifications";
const MR_GUIDES: &str = "https://documentation.meraki.com/MR/MR_Installation_Guides";
const MS_SPECS: &str = "https://documentation.meraki.com/MS/MS_Overview_and_Specifications";
const MS_GUIDES: &str = "https://documentation.meraki.com/MS/MS_Installation_Guides";

pub(super) fn document() -> CatalogDocument {
    CatalogDocument {
        version: VERSION.into(),
        default_scenario: None,
        scenarios: scenarios(),
        access_points: [wifi6(), wifi6e(), wifi7()].concat(),
        switches: [ms130(), ms150(), c9300l()].concat(),
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

fn ports(groups: &[(u32, &[f64])]) -> Vec<PortGroup> {
    groups
        .iter()
        .map(|(count, speeds)| PortGroup::new(*count, speeds))
        .collect()
}

fn bands(ghz_2_4: f64, ghz_5: f64, ghz_6: Option<f64>) -> BandCapacity {
    BandCapacity {
        ghz_2_4: Some(ghz_2_4),
        ghz_5: Some(ghz_5),
        ghz_6,
    }
}

fn licenses(enterprise: &str, advanced: &str) -> Vec<LicenseOption> {
    vec![
        LicenseOption::new("Enterprise", enterprise),
        LicenseOption::new("Advanced", advanced),
    ]
}

fn ap_licenses() -> Vec<LicenseOption> {
    licenses("LIC-ENT-xYR", "LIC-MR-ADV-xYR")
}

fn ap_docs(datasheet: &str, guide: &str) -> DocLinks {
    DocLinks {
        datasheet: Some(format!("{MR_SPECS}/{datasheet}")),
        installation_guide: Some(format!("{MR_GUIDES}/{guide}")),
    }
}

fn switch_docs(datasheet: &str, guide: &str) -> DocLinks {
    DocLinks {
        datasheet: Some(format!("{MS_SPECS}/{datasheet}")),
        installation_guide: Some(format!("{MS_GUIDES}/{guide}")),
    }
}

// ── Scenarios ───────────────────────────────────────────────────────

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            key: "open-office-minimal-walls".into(),
            name: "Office 1".into(),
            description: "Open office with minimal walls".into(),
            coverage_area_per_ap_m2: 230.0,
            high_density: false,
        },
        Scenario {
            key: "open-office-some-walls".into(),
            name: "Office 2".into(),
            description: "Open office with some walls".into(),
            coverage_area_per_ap_m2: 175.0,
            high_density: false,
        },
        Scenario {
            key: "office-several-rooms".into(),
            name: "Office 3".into(),
            description: "Office with several rooms".into(),
            coverage_area_per_ap_m2: 120.0,
            high_density: false,
        },
        Scenario {
            key: "auditorium".into(),
            name: "Auditorium".into(),
            description: "High-density room".into(),
            coverage_area_per_ap_m2: 175.0,
            high_density: true,
        },
    ]
}

// ── Access points ───────────────────────────────────────────────────

fn wifi6() -> Vec<ApModel> {
    vec![
        ApModel {
            generation: Generation::WiFi6,
            model_id: "MR28".into(),
            wifi_standard: "802.11ax (Wi-Fi 6)".into(),
            spatial_streams: "2 x 2 : 2".into(),
            port_groups: ports(&[(1, &[1.0])]),
            poe_type: "PoE".into(),
            poe_draw_watts: 15.0,
            band_capacity_mbps: bands(243.8, 487.5, None),
            max_users: 30,
            sku: "MR28-HW".into(),
            license_options: ap_licenses(),
            doc_links: ap_docs("MR28_Datasheet", "MR28_Installation_Guide"),
            entry_level: true,
        },
        ApModel {
            generation: Generation::WiFi6,
            model_id: "MR36".into(),
            wifi_standard: "802.11ax (Wi-Fi 6)".into(),
            spatial_streams: "2 x 2 : 2".into(),
            port_groups: ports(&[(1, &[1.0])]),
            poe_type: "PoE".into(),
            poe_draw_watts: 15.0,
            band_capacity_mbps: bands(243.8, 487.5, None),
            max_users: 35,
            sku: "MR36-HW".into(),
            license_options: ap_licenses(),
            doc_links: ap_docs("MR36_Datasheet", "MR36_Installation_Guide"),
            entry_level: false,
        },
        ApModel {
            generation: Generation::WiFi6,
            model_id: "MR44".into(),
            wifi_standard: "802.11ax (Wi-Fi 6)".into(),
            spatial_streams: "2 x 2 : 2 (2.4GHz) + 4 x 4 : 4 (5GHz)".into(),
            port_groups: ports(&[(1, &[1.0])]),
            poe_type: "PoE+".into(),
            poe_draw_watts: 30.0,
            band_capacity_mbps: bands(270.8, 975.0, None),
            max_users: 45,
            sku: "MR44-HW".into(),
            license_options: ap_licenses(),
            doc_links: ap_docs("MR44_Datasheet", "MR44_Installation_Guide"),
            entry_level: false,
        },
        ApModel {
            generation: Generation::WiFi6,
            model_id: "MR46".into(),
            wifi_standard: "802.11ax (Wi-Fi 6)".into(),
            spatial_streams: "4 x 4 : 4".into(),
            port_groups: ports(&[(1, &[1.0, 2.5])]),
            poe_type: "PoE+".into(),
            poe_draw_watts: 30.0,
            band_capacity_mbps: bands(541.7, 1083.3, None),
            max_users: 60,
            sku: "MR46-HW".into(),
            license_options: ap_licenses(),
            doc_links: ap_docs("MR46_Datasheet", "MR46_Installation_Guide"),
            entry_level: false,
        },
    ]
}

fn wifi6e() -> Vec<ApModel> {
    vec![
        ApModel {
            generation: Generation::WiFi6E,
            model_id: "CW9162".into(),
            wifi_standard: "802.11ax (Wi-Fi 6E)".into(),
            spatial_streams: "2 x 2 : 2".into(),
            port_groups: ports(&[(1, &[1.0, 2.5])]),
            poe_type: "PoE+".into(),
            poe_draw_watts: 30.0,
            band_capacity_mbps: bands(243.8, 487.5, Some(487.5)),
            max_users: 30,
            sku: "CW9162I-MR".into(),
            license_options: ap_licenses(),
            doc_links: ap_docs("CW9162_Datasheet", "CW9162_Installation_Guide"),
            entry_level: true,
        },
        ApModel {
            generation: Generation::WiFi6E,
            model_id: "CW9164".into(),
            wifi_standard: "802.11ax (Wi-Fi 6E)".into(),
            spatial_streams: "2 x 2 : 2 (2.4GHz) + 4 x 4 : 4 (5GHz) + 4 x 4 : 4 (6GHz)".into(),
            port_groups: ports(&[(1, &[1.0, 2.5])]),
            poe_type: "PoE+ - USB disabled".into(),
            poe_draw_watts: 25.0,
            band_capacity_mbps: bands(243.8, 975.0, Some(975.0)),
            max_users: 45,
            sku: "CW9164I-MR".into(),
            license_options: ap_licenses(),
            doc_links: ap_docs("CW9164_Datasheet", "CW9164_Installation_Guide"),
            entry_level: false,
        },
        ApModel {
            generation: Generation::WiFi6E,
            model_id: "CW9166".into(),
            wifi_standard: "802.11ax (Wi-Fi 6E)".into(),
            spatial_streams: "4 x 4 : 4".into(),
            port_groups: ports(&[(1, &[1.0, 2.5, 5.0])]),
            poe_type: "PoE+ - USB disabled".into(),
            poe_draw_watts: 25.0,
            band_capacity_mbps: bands(541.7, 1083.3, Some(1083.3)),
            max_users: 60,
            sku: "CW9166I-MR".into(),
            license_options: ap_licenses(),
            doc_links: ap_docs("CW9166_Datasheet", "CW9166_Installation_Guide"),
            entry_level: false,
        },
        ApModel {
            generation: Generation::WiFi6E,
            model_id: "MR57".into(),
            wifi_standard: "802.11ax (Wi-Fi 6E)".into(),
            spatial_streams: "4 x 4 : 4".into(),
            port_groups: ports(&[(2, &[1.0, 2.5, 5.0])]),
            poe_type: "PoE+ - USB disabled".into(),
            poe_draw_watts: 30.0,
            band_capacity_mbps: bands(541.7, 1083.3, Some(1083.3)),
            max_users: 60,
            sku: "MR57-HW".into(),
            license_options: ap_licenses(),
            doc_links: ap_docs("MR57_Datasheet", "MR57_Installation_Guide"),
            entry_level: false,
        },
    ]
}

fn wifi7() -> Vec<ApModel> {
    vec![
        ApModel {
            generation: Generation::WiFi7,
            model_id: "CW9172".into(),
            wifi_standard: "802.11be (Wi-Fi 7)".into(),
            spatial_streams: "2 x 2 : 2".into(),
            port_groups: ports(&[(1, &[1.0, 2.5])]),
            poe_type: "PoE+ - USB disabled".into(),
            poe_draw_watts: 25.5,
            band_capacity_mbps: bands(243.8, 487.5, Some(487.5)),
            max_users: 30,
            sku: "CW9172I-HW".into(),
            license_options: ap_licenses(),
            doc_links: ap_docs(
                "CW9172I_%2F%2F_CW9172H_Datasheet",
                "CW9172I_Installation_Guide",
            ),
            entry_level: true,
        },
        ApModel {
            generation: Generation::WiFi7,
            model_id: "CW9176".into(),
            wifi_standard: "802.11be (Wi-Fi 7)".into(),
            spatial_streams: "4 x 4 : 4".into(),
            port_groups: ports(&[(1, &[1.0, 2.5, 5.0, 10.0])]),
            poe_type: "UPoE".into(),
            poe_draw_watts: 39.0,
            band_capacity_mbps: bands(541.7, 1083.3, Some(2268.5)),
            max_users: 45,
            sku: "CW9176I-HW".into(),
            license_options: ap_licenses(),
            doc_links: ap_docs(
                "CW9176I_%2F%2F_CW9176D1_Datasheet",
                "CW9176I_Installation_Guide",
            ),
            entry_level: false,
        },
        ApModel {
            generation: Generation::WiFi7,
            model_id: "CW9178".into(),
            wifi_standard: "802.11be (Wi-Fi 7)".into(),
            spatial_streams: "4 x 4 : 4".into(),
            port_groups: ports(&[(2, &[1.0, 2.5, 5.0, 10.0])]),
            poe_type: "UPoE".into(),
            poe_draw_watts: 47.0,
            band_capacity_mbps: bands(541.7, 1083.3, Some(2268.5)),
            max_users: 60,
            sku: "CW9178I-HW".into(),
            license_options: ap_licenses(),
            doc_links: ap_docs("CW9178I_Datasheet", "CW9178I_Installation_Guide"),
            entry_level: false,
        },
    ]
}

// ── Switches ────────────────────────────────────────────────────────

fn ms130() -> Vec<SwitchModel> {
    // (model, access ports, PoE budget, uplink count, uplink speed, capacity, licences)
    let rows: [(&str, &[(u32, &[f64])], f64, u32, f64, f64, &str, &str); 6] = [
        ("MS130-8P", &[(8, &[1.0])], 120.0, 2, 1.0, 20.0, "LIC-MS130-CMPT-xY", "LIC-MS130-CMPTA-xY"),
        ("MS130-8X", &[(2, &[2.5]), (6, &[1.0])], 120.0, 2, 10.0, 62.0, "LIC-MS130-CMPT-xY", "LIC-MS130-CMPTA-xY"),
        ("MS130-12X", &[(4, &[2.5]), (8, &[1.0])], 240.0, 2, 10.0, 76.0, "LIC-MS130-CMPT-xY", "LIC-MS130-CMPTA-xY"),
        ("MS130-24P", &[(24, &[1.0])], 370.0, 4, 1.0, 56.0, "LIC-MS130-24-xY", "LIC-MS130-24A-xY"),
        ("MS130-24X", &[(6, &[2.5]), (18, &[1.0])], 370.0, 4, 10.0, 146.0, "LIC-MS130-24-xY", "LIC-MS130-24A-xY"),
        ("MS130-48X", &[(8, &[2.5]), (40, &[1.0])], 740.0, 4, 10.0, 200.0, "LIC-MS130-48-xY", "LIC-MS130-48A-xY"),
    ];

    rows.into_iter()
        .map(
            |(model_id, access, budget, uplinks, uplink_gbps, capacity, ent, adv)| SwitchModel {
                family: "Meraki MS130".into(),
                model_id: model_id.into(),
                layer: Layer::L2,
                access_port_groups: ports(access),
                poe_budget_watts: budget,
                poe_type: "PoE+".into(),
                uplink_port_groups: ports(&[(uplinks, &[uplink_gbps])]),
                switching_capacity_gbps: capacity,
                stacking: Stacking::None,
                sku: format!("{model_id}-HW"),
                license_options: licenses(ent, adv),
                doc_links: switch_docs("MS130_Datasheet", "MS130_Series_Installation_Guide"),
            },
        )
        .collect()
}

fn ms150() -> Vec<SwitchModel> {
    let rows: [(&str, &[(u32, &[f64])], &str, f64, f64, &str, &str); 5] = [
        ("MS150-24P-4X", &[(24, &[1.0])], "PoE+", 370.0, 128.0, "LIC-MS150-24-xY", "LIC-MS150-24A-xY"),
        ("MS150-48LP-4X", &[(48, &[1.0])], "PoE+", 370.0, 176.0, "LIC-MS150-48-xY", "LIC-MS150-48A-xY"),
        ("MS150-48FP-4X", &[(48, &[1.0])], "PoE+", 740.0, 176.0, "LIC-MS150-48-xY", "LIC-MS150-48A-xY"),
        ("MS150-24MP-4X", &[(8, &[5.0]), (16, &[1.0])], "UPoE", 370.0, 192.0, "LIC-MS150-24-xY", "LIC-MS150-24A-xY"),
        ("MS150-48MP-4X", &[(16, &[5.0]), (32, &[1.0])], "UPoE", 740.0, 304.0, "LIC-MS150-48-xY", "LIC-MS150-48A-xY"),
    ];

    rows.into_iter()
        .map(|(model_id, access, poe_type, budget, capacity, ent, adv)| SwitchModel {
            family: "Meraki MS150".into(),
            model_id: model_id.into(),
            layer: Layer::L2,
            access_port_groups: ports(access),
            poe_budget_watts: budget,
            poe_type: poe_type.into(),
            uplink_port_groups: ports(&[(4, &[10.0])]),
            switching_capacity_gbps: capacity,
            stacking: Stacking::Physical,
            sku: format!("{model_id}-HW"),
            license_options: licenses(ent, adv),
            doc_links: switch_docs("MS150_Datasheet", "MS150_Series_Installation_Guide"),
        })
        .collect()
}

fn c9300l() -> Vec<SwitchModel> {
    const MULTIGIG: &[f64] = &[1.0, 2.5, 5.0, 10.0];

    let rows: [(&str, &[(u32, &[f64])], &str, f64, f64, &str, &str); 5] = [
        ("C9300L-24P-4X", &[(24, &[1.0])], "PoE+", 505.0, 128.0, "LIC-C9300-24E-xY", "LIC-C9300-24A-xY"),
        ("C9300L-24UXG-4X", &[(8, MULTIGIG), (16, &[1.0])], "UPoE", 880.0, 272.0, "LIC-C9300-24E-xY", "LIC-C9300-24A-xY"),
        ("C9300L-48P-4X", &[(48, &[1.0])], "PoE+", 505.0, 176.0, "LIC-C9300-48E-xY", "LIC-C9300-48A-xY"),
        ("C9300L-48PF-4X", &[(48, &[1.0])], "PoE+", 890.0, 176.0, "LIC-C9300-48E-xY", "LIC-C9300-48A-xY"),
        ("C9300L-48UXG-4X", &[(12, MULTIGIG), (36, &[1.0])], "UPoE", 675.0, 392.0, "LIC-C9300-48E-xY", "LIC-C9300-48A-xY"),
    ];

    rows.into_iter()
        .map(|(model_id, access, poe_type, budget, capacity, ent, adv)| SwitchModel {
            family: "Cisco Catalyst C9300L-M".into(),
            model_id: model_id.into(),
            layer: Layer::L3,
            access_port_groups: ports(access),
            poe_budget_watts: budget,
            poe_type: poe_type.into(),
            uplink_port_groups: ports(&[(4, &[10.0])]),
            switching_capacity_gbps: capacity,
            stacking: Stacking::Physical,
            sku: format!("{model_id}-M"),
            license_options: licenses(ent, adv),
            doc_links: switch_docs(
                "Catalyst_9300L-M_Datasheet",
                "Catalyst_9300-M_Series_Installation_Guide",
            ),
        })
        .collect()
}
