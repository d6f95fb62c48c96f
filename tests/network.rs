use penstock::network::{
    Conduit, ComputationalParams, FlowSchedule, HydraulicNetwork, Material,
    Orifice, SurgeTank,
};

fn sample_conduit() -> Conduit {
    Conduit {
        length: 1200.0,
        diameter: 1.5,
        thickness: 0.025,
        manning: 0.013,
        material: Material::Steel,
        celerity: 980.0,
        cplus: 0.42,
        cminus: 0.38,
        numseg: 12,
    }
}

#[test]
fn test_node_roundtrip() {
    let mut network = HydraulicNetwork::new();
    network.add_node(10, 152.4);

    assert_eq!(network.node(10), Some(152.4));
    assert_eq!(network.node(11), None);
}

#[test]
fn test_node_last_write_wins() {
    let mut network = HydraulicNetwork::new();
    network.add_node(3, 100.0);
    network.add_node(3, 250.5);

    assert_eq!(network.node(3), Some(250.5));
    assert_eq!(network.nodes().len(), 1);
}

#[test]
fn test_nodes_iterate_in_key_order() {
    let mut network = HydraulicNetwork::new();
    network.add_node(7, 10.0);
    network.add_node(2, 20.0);
    network.add_node(5, 30.0);

    let numbers: Vec<i64> = network.nodes().keys().copied().collect();
    assert_eq!(numbers, vec![2, 5, 7]);
}

#[test]
fn test_conduit_fields_stored_exactly() {
    let mut network = HydraulicNetwork::new();
    network.add_conduit("C1", sample_conduit());

    let conduit = network.conduit("C1").expect("conduit should be stored");
    assert_eq!(conduit.length, 1200.0);
    assert_eq!(conduit.diameter, 1.5);
    assert_eq!(conduit.thickness, 0.025);
    assert_eq!(conduit.manning, 0.013);
    assert_eq!(conduit.material, Material::Steel);
    assert_eq!(conduit.celerity, 980.0);
    assert_eq!(conduit.cplus, 0.42);
    assert_eq!(conduit.cminus, 0.38);
    assert_eq!(conduit.numseg, 12);
}

#[test]
fn test_conduit_overwrite_same_id() {
    let mut network = HydraulicNetwork::new();
    network.add_conduit("C1", sample_conduit());

    let replacement = Conduit {
        length: 300.0,
        material: Material::Concrete,
        ..sample_conduit()
    };
    network.add_conduit("C1", replacement.clone());

    assert_eq!(network.conduits().len(), 1);
    assert_eq!(network.conduit("C1"), Some(&replacement));
}

#[test]
fn test_surge_tank_overwrite() {
    let mut network = HydraulicNetwork::new();
    assert!(network.surge_tank().is_none());

    let first = SurgeTank {
        diameter: 3.0,
        top_elevation: 120.0,
        bottom_elevation: 80.0,
        material: Material::Concrete,
        thickness: 0.3,
        manning: 0.014,
        celerity: 1000.0,
    };
    network.set_surge_tank(first);

    let second = SurgeTank {
        diameter: 4.5,
        top_elevation: 130.0,
        bottom_elevation: 85.0,
        material: Material::Steel,
        thickness: 0.02,
        manning: 0.012,
        celerity: 1100.0,
    };
    network.set_surge_tank(second.clone());

    assert_eq!(network.surge_tank(), Some(&second));
}

#[test]
fn test_orifice_roundtrip() {
    let mut network = HydraulicNetwork::new();
    let orifice = Orifice {
        diameter: 0.8,
        cd_upward: 0.6,
        cd_downward: 0.8,
        cplus: 0.5,
        cminus: 0.45,
    };
    network.set_orifice(orifice.clone());

    assert_eq!(network.orifice(), Some(&orifice));
}

#[test]
fn test_reservoir_roundtrip() {
    let mut network = HydraulicNetwork::new();
    assert!(network.reservoir().is_none());

    network.set_reservoir(145.2);
    assert_eq!(network.reservoir().map(|r| r.water_level), Some(145.2));

    network.set_reservoir(150.0);
    assert_eq!(network.reservoir().map(|r| r.water_level), Some(150.0));
}

#[test]
fn test_flow_schedule_unequal_lengths_accepted() {
    let mut network = HydraulicNetwork::new();
    let schedule = FlowSchedule {
        time: vec![0.0, 10.0, 20.0],
        discharge: vec![5.0, 4.0],
    };
    network.set_flow_schedule(schedule.clone());

    // Parallel sequences are stored exactly as entered
    assert_eq!(network.flow_schedule(), Some(&schedule));
}

#[test]
fn test_computational_params_overwrite() {
    let mut network = HydraulicNetwork::new();

    network.set_computational_params(ComputationalParams {
        dtcomp: 0.01,
        dtout: 0.1,
        tmax: 500.0,
    });
    network.set_computational_params(ComputationalParams {
        dtcomp: 0.02,
        dtout: 0.5,
        tmax: 900.0,
    });

    let params = network.computational_params().expect("params should be set");
    assert_eq!(params.dtcomp, 0.02);
    assert_eq!(params.dtout, 0.5);
    assert_eq!(params.tmax, 900.0);
}

#[test]
fn test_computational_params_defaults() {
    let params = ComputationalParams::default();
    assert_eq!(params.dtcomp, 0.01);
    assert_eq!(params.dtout, 0.1);
    assert_eq!(params.tmax, 500.0);
}
