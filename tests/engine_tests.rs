//! Engine-level properties: sweep geometry, curve alignment, selection,
//! determinism, and comparison symmetry.

use arrow_engine::{
    compare_request, draw_weight_sweep, evaluate, evaluate_request, integrate, ArrowSetup,
    PointWeightModel,
};
use serde_json::json;

#[test]
fn sweep_domain_is_fixed() {
    let sweep = draw_weight_sweep();
    assert_eq!(sweep.len(), 30);
    assert_eq!(sweep[0], 30.0);
    assert_eq!(sweep[29], 90.0);
    let step = 60.0 / 29.0;
    for (i, &p) in sweep.iter().enumerate().take(29) {
        assert!((p - (30.0 + i as f64 * step)).abs() < 1e-9);
    }
}

#[test]
fn curves_share_the_sweep_domain() {
    let report = evaluate(&ArrowSetup::default(), &PointWeightModel::default());
    assert_eq!(report.curves.draw_weights, draw_weight_sweep());
    assert_eq!(report.curves.velocity.len(), 30);
    assert_eq!(report.curves.checkpoints[1].time_of_flight.len(), 30);
}

#[test]
fn heavier_draw_weight_never_slows_the_arrow() {
    // Several setups, not just the default: the KE model must be
    // increasing in poundage everywhere.
    for (spine, ibo, length) in [(200.0, 335.0, 28.25), (300.0, 310.0, 27.0), (150.0, 350.0, 29.5)]
    {
        let setup = ArrowSetup {
            spine,
            ibo,
            arrow_length: length,
            ..ArrowSetup::default()
        };
        let report = evaluate(&setup, &PointWeightModel::default());
        for pair in report.curves.velocity.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }
}

#[test]
fn chosen_weight_on_a_sweep_sample_selects_that_index() {
    let sweep = draw_weight_sweep();
    for idx in [0, 7, 29] {
        let setup = ArrowSetup {
            draw_weight: sweep[idx],
            ..ArrowSetup::default()
        };
        let report = evaluate(&setup, &PointWeightModel::default());
        assert_eq!(report.selected_index, idx);
    }
}

#[test]
fn evaluation_is_deterministic() {
    let setup = ArrowSetup::default();
    let model = PointWeightModel::default();
    let a = evaluate(&setup, &model);
    let b = evaluate(&setup, &model);
    assert_eq!(a.selected_index, b.selected_index);
    assert_eq!(a.curves.velocity, b.curves.velocity);
    assert_eq!(a.curves.foc, b.curves.foc);
    assert_eq!(
        a.curves.checkpoints[2].momentum,
        b.curves.checkpoints[2].momentum
    );
    assert_eq!(a.selected.fps, b.selected.fps);
}

#[test]
fn integrator_is_idempotent() {
    let first = integrate(262.0, 0.00082, 2.0, 0.0779, 180.0);
    let second = integrate(262.0, 0.00082, 2.0, 0.0779, 180.0);
    assert_eq!(first, second);
}

#[test]
fn default_scenario_selected_values() {
    // spine 200, 71 lb, 335 IBO, 28.25" arrow, 29" draw, default fletching.
    let report = evaluate(&ArrowSetup::default(), &PointWeightModel::default());
    assert_eq!(report.selected_index, 20);
    assert!((report.selected.optimal_point_weight - 217.182).abs() < 0.05);
    assert!((report.selected.total_arrow_mass - 545.457).abs() < 0.05);
    assert!((report.selected.foc - 18.22).abs() < 0.05);
    assert!((report.selected.fps - 262.5).abs() < 0.5);
    assert!((report.selected.ke - 113.2).abs() < 0.2);
    assert!((report.selected.momentum - 2.829).abs() < 0.01);
}

#[test]
fn request_boundary_reports_failure_without_partial_results() {
    let response = evaluate_request(&json!({"arrowLength": {"value": 28.0}}));
    assert!(!response.success);
    assert!(response.output.is_none());
    let message = response.error.expect("failure must carry a message");
    assert!(message.contains("arrowLength"));
}

#[test]
fn same_parameters_on_both_sides_of_a_comparison_match() {
    let params = json!({"spine": 200, "poundage": 71, "ibo": 335});
    let response = compare_request(&json!({"setup1": params, "setup2": params}));
    assert!(response.success);
    let a = response.setup1.unwrap();
    let b = response.setup2.unwrap();
    assert_eq!(a.values.optimal_point_weight, b.values.optimal_point_weight);
    assert_eq!(a.values.total_arrow_mass, b.values.total_arrow_mass);
    assert_eq!(a.values.foc, b.values.foc);
    assert_eq!(a.values.fps, b.values.fps);
    assert_eq!(a.values.ke, b.values.ke);
    assert_eq!(a.values.momentum, b.values.momentum);
}

#[test]
fn response_serializes_named_arrays_and_scalars() {
    let response = evaluate_request(&json!({}));
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["success"], json!(true));
    assert_eq!(value["curves"]["drawWeights"].as_array().unwrap().len(), 30);
    assert_eq!(
        value["curves"]["checkpoints"][0]["distanceYards"],
        json!(20)
    );
    assert!(value["values"]["optimalPointWeight"].is_f64());
    assert!(value["values"]["momentum"].is_f64());
}
