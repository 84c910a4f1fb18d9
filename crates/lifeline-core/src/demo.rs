//! Reference fixture data: a five-asset Gulf-coast network spanning gas,
//! power, and telecom, plus a five-action mitigation catalog.

use crate::coupling::CouplingMode;
use crate::network::{Asset, AssetKind, AssetNetwork, Dependency, Domain};
use crate::select::{Action, Phase};

/// The five-asset, four-dependency sample network.
///
/// Gas feeds power, power feeds telecom; the pipeline between supply and
/// compressor is undirected, so a compressor failure also starves the
/// supply side.
#[must_use]
pub fn demo_network() -> AssetNetwork {
    let mut network = AssetNetwork::new();

    network.add_asset(
        Asset::new(
            "gas_supply_1",
            AssetKind::GasSupply,
            Domain::Gas,
            "Gas Supply",
            29.7604,
            -95.3698,
        )
        .with_capacity(120.0),
    );
    network.add_asset(
        Asset::new(
            "compressor_1",
            AssetKind::Compressor,
            Domain::Gas,
            "Compressor",
            29.9,
            -95.2,
        )
        .with_capacity(100.0),
    );
    network.add_asset(
        Asset::new(
            "plant_1",
            AssetKind::Generator,
            Domain::Power,
            "Gas Power Plant",
            30.0,
            -95.0,
        )
        .with_capacity(80.0),
    );
    network.add_asset(
        Asset::new(
            "substation_1",
            AssetKind::Substation,
            Domain::Power,
            "Substation",
            30.1,
            -94.9,
        )
        .with_demand(60.0),
    );
    network.add_asset(
        Asset::new(
            "telecom_1",
            AssetKind::Relay,
            Domain::Telecom,
            "Telecom Relay",
            30.12,
            -94.85,
        )
        .with_demand(20.0),
    );

    let dependencies = [
        Dependency::new("gas_supply_1", "compressor_1", "pipeline")
            .with_weight(0.9)
            .undirected(),
        Dependency::new("compressor_1", "plant_1", "fuel_supply")
            .with_weight(0.95)
            .with_coupling(CouplingMode::Threshold),
        Dependency::new("plant_1", "substation_1", "transmission").with_weight(0.9),
        Dependency::new("substation_1", "telecom_1", "power_supply").with_weight(0.8),
    ];
    for dependency in dependencies {
        // All endpoints were added above.
        network
            .add_dependency(dependency)
            .expect("demo network endpoints exist");
    }

    network
}

/// The fixed five-action mitigation catalog.
#[must_use]
pub fn demo_action_catalog() -> Vec<Action> {
    vec![
        Action::new("Install compressor redundancy", 80.0, 65.0, Phase::Design),
        Action::new("Upgrade pipeline segment", 55.0, 40.0, Phase::Expansion),
        Action::new("Deploy mobile generators", 45.0, 52.0, Phase::Response),
        Action::new("Emergency telecom backup", 35.0, 34.0, Phase::Response),
        Action::new("Accelerated repair crews", 60.0, 58.0, Phase::Recovery),
    ]
}
