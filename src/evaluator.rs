//! Setup evaluation over the draw-weight sweep.
//!
//! Given one [`ArrowSetup`], produces every derived curve over the fixed
//! 30-point draw-weight grid plus the scalar values at the sweep point
//! nearest the chosen draw weight. Everything here is a bounded,
//! deterministic numeric pipeline: no I/O, no shared state, fresh output
//! per call.

use serde::Serialize;

use crate::constants::{
    CHECKPOINT_DISTANCES_FT, FPS_PER_INCH_OF_DRAW, FPS_PER_POUND_OF_DRAW, FPS_TO_MPS,
    GRAINS_PER_GRAM, GRAINS_PER_POUND, IBO_REFERENCE_DRAW_LENGTH, IBO_REFERENCE_DRAW_WEIGHT,
    IBO_REFERENCE_MASS_GRAINS, INCHES_PER_FOOT, SWEEP_LEN, SWEEP_MAX_POUNDS, SWEEP_MIN_POUNDS,
};
use crate::inputs::ArrowSetup;
use crate::integrator::integrate_all;
use crate::regression::PointWeightModel;

/// The fixed draw-weight grid: 30 samples, 30 to 90 lb inclusive,
/// uniform spacing, endpoint exact. Identical for every evaluation.
pub fn draw_weight_sweep() -> Vec<f64> {
    let step = (SWEEP_MAX_POUNDS - SWEEP_MIN_POUNDS) / (SWEEP_LEN - 1) as f64;
    (0..SWEEP_LEN)
        .map(|i| {
            if i == SWEEP_LEN - 1 {
                SWEEP_MAX_POUNDS
            } else {
                SWEEP_MIN_POUNDS + i as f64 * step
            }
        })
        .collect()
}

/// Curves for one downrange checkpoint, index-aligned with the sweep.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointCurves {
    /// Checkpoint distance in yards (20, 40, or 60)
    pub distance_yards: u32,
    /// Remaining velocity (fps)
    pub velocity: Vec<f64>,
    /// Time of flight to the checkpoint (seconds)
    pub time_of_flight: Vec<f64>,
    /// Kinetic energy at the checkpoint (joules)
    pub kinetic_energy: Vec<f64>,
    /// Momentum at the checkpoint (kg·m/s)
    pub momentum: Vec<f64>,
}

/// Every derived curve over the sweep. All vectors have [`SWEEP_LEN`]
/// elements; index `i` corresponds to `draw_weights[i]`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupCurves {
    pub draw_weights: Vec<f64>,
    /// Recommended point weight (grains)
    pub optimal_point_weight: Vec<f64>,
    /// Total arrow mass (grains)
    pub total_arrow_mass: Vec<f64>,
    /// Front-of-center balance (percent)
    pub foc: Vec<f64>,
    /// Muzzle velocity (fps)
    pub velocity: Vec<f64>,
    /// Muzzle kinetic energy (joules)
    pub kinetic_energy: Vec<f64>,
    /// Muzzle momentum (kg·m/s)
    pub momentum: Vec<f64>,
    /// Downrange decay at 20/40/60 yards
    pub checkpoints: [CheckpointCurves; 3],
}

/// Scalar curve values at the selected sweep point.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SelectedValues {
    #[serde(rename = "optimalPointWeight")]
    pub optimal_point_weight: f64,
    #[serde(rename = "totalArrowMass")]
    pub total_arrow_mass: f64,
    pub foc: f64,
    pub fps: f64,
    pub ke: f64,
    pub momentum: f64,
}

/// Full evaluation output for one setup.
#[derive(Debug, Clone, Serialize)]
pub struct SetupReport {
    pub curves: SetupCurves,
    /// Sweep index nearest the chosen draw weight
    pub selected_index: usize,
    pub selected: SelectedValues,
}

/// Frontal drag reference area (ft²): circular shaft cross-section plus
/// a per-fletch term. The fletch contribution uses a linear small-angle
/// factor `offset / 90`, not a trigonometric projection.
pub fn drag_reference_area(setup: &ArrowSetup) -> f64 {
    let shaft_radius_ft = (setup.shaft_diameter / INCHES_PER_FOOT) / 2.0;
    std::f64::consts::PI * shaft_radius_ft * shaft_radius_ft
        + setup.fletch_count as f64
            * 0.5
            * (setup.fletch_length / INCHES_PER_FOOT)
            * (setup.fletch_height / INCHES_PER_FOOT)
            * (setup.fletch_offset / 90.0)
}

fn grains_to_kg(grains: f64) -> f64 {
    (grains / GRAINS_PER_GRAM) / 1000.0
}

fn kinetic_energy_joules(mass_kg: f64, velocity_fps: f64) -> f64 {
    let v = velocity_fps * FPS_TO_MPS;
    0.5 * mass_kg * v * v
}

fn momentum_kg_mps(mass_kg: f64, velocity_fps: f64) -> f64 {
    mass_kg * velocity_fps * FPS_TO_MPS
}

/// Index of the sweep sample nearest `draw_weight`, first minimum on
/// exact ties.
pub fn nearest_sweep_index(sweep: &[f64], draw_weight: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &p) in sweep.iter().enumerate() {
        let dist = (p - draw_weight).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Evaluate one setup over the sweep.
///
/// Never fails: degenerate inputs (zero mass, zero length) propagate
/// NaN/inf through the curves instead of raising, matching the permissive
/// contract the charting callers rely on.
pub fn evaluate(setup: &ArrowSetup, model: &PointWeightModel) -> SetupReport {
    log::debug!(
        "evaluating setup: spine {} / {} lb / {} ibo",
        setup.spine,
        setup.draw_weight,
        setup.ibo
    );

    let sweep = draw_weight_sweep();

    let optimal_point_weight: Vec<f64> = sweep
        .iter()
        .map(|&p| model.optimal_point_weight(p, setup.arrow_length, setup.spine, setup.ibo))
        .collect();

    let total_arrow_mass: Vec<f64> = optimal_point_weight
        .iter()
        .map(|&pw| {
            setup.nock_weight
                + setup.wrap_weight
                + setup.total_fletch_weight()
                + setup.shaft_weight()
                + pw
        })
        .collect();

    // Front-of-center: mass-weighted centroid of the five components,
    // measured from the nock throat, relative to the overall midpoint.
    let length_overall = setup.arrow_length + setup.nock_throat_adder;
    let centroid_nock = setup.nock_throat_adder;
    let centroid_wrap = setup.nock_throat_adder + setup.wrap_length / 2.0;
    let centroid_fletch = setup.fletch_distance + setup.fletch_length / 3.0;
    let centroid_shaft = setup.nock_throat_adder + setup.arrow_length / 2.0;
    let centroid_point = setup.nock_throat_adder + setup.arrow_length;

    let foc: Vec<f64> = optimal_point_weight
        .iter()
        .zip(total_arrow_mass.iter())
        .map(|(&pw, &mass)| {
            let moment = setup.nock_weight * centroid_nock
                + setup.wrap_weight * centroid_wrap
                + setup.total_fletch_weight() * centroid_fletch
                + setup.shaft_weight() * centroid_shaft
                + pw * centroid_point;
            100.0 * (moment / mass - length_overall / 2.0) / length_overall
        })
        .collect();

    // Nominal energy from the IBO rating: the rated speed is quoted at a
    // 350 gr arrow, 30" draw, 70 lb, and decays 10 fps per inch and
    // 2 fps per pound of deficit.
    let reference_mass_kg = grains_to_kg(IBO_REFERENCE_MASS_GRAINS);
    let mut velocity = Vec::with_capacity(sweep.len());
    let mut kinetic_energy = Vec::with_capacity(sweep.len());
    let mut momentum = Vec::with_capacity(sweep.len());
    for (&p, &mass) in sweep.iter().zip(total_arrow_mass.iter()) {
        let rated_fps = setup.ibo
            - FPS_PER_INCH_OF_DRAW * (IBO_REFERENCE_DRAW_LENGTH - setup.draw_length)
            - FPS_PER_POUND_OF_DRAW * (IBO_REFERENCE_DRAW_WEIGHT - p);
        let ke_nominal = kinetic_energy_joules(reference_mass_kg, rated_fps);
        let mass_kg = grains_to_kg(mass);
        let fps = (ke_nominal * 2.0 / mass_kg).sqrt() / FPS_TO_MPS;
        velocity.push(fps);
        // Recompute at the actual mass so energy, velocity, and momentum
        // stay mutually consistent.
        kinetic_energy.push(kinetic_energy_joules(mass_kg, fps));
        momentum.push(momentum_kg_mps(mass_kg, fps));
    }

    let area = drag_reference_area(setup);
    let integrator_masses: Vec<f64> = total_arrow_mass
        .iter()
        .map(|&m| m / GRAINS_PER_POUND)
        .collect();

    let checkpoints = CHECKPOINT_DISTANCES_FT.map(|distance_ft| {
        let states = integrate_all(
            &velocity,
            area,
            setup.drag_coefficient,
            &integrator_masses,
            distance_ft,
        );
        let velocity_at: Vec<f64> = states.iter().map(|s| s.velocity).collect();
        let time_of_flight: Vec<f64> = states.iter().map(|s| s.time_of_flight).collect();
        let kinetic_energy_at: Vec<f64> = velocity_at
            .iter()
            .zip(total_arrow_mass.iter())
            .map(|(&v, &m)| kinetic_energy_joules(grains_to_kg(m), v))
            .collect();
        let momentum_at: Vec<f64> = velocity_at
            .iter()
            .zip(total_arrow_mass.iter())
            .map(|(&v, &m)| momentum_kg_mps(grains_to_kg(m), v))
            .collect();
        CheckpointCurves {
            distance_yards: (distance_ft / 3.0) as u32,
            velocity: velocity_at,
            time_of_flight,
            kinetic_energy: kinetic_energy_at,
            momentum: momentum_at,
        }
    });

    let selected_index = nearest_sweep_index(&sweep, setup.draw_weight);
    let selected = SelectedValues {
        optimal_point_weight: optimal_point_weight[selected_index],
        total_arrow_mass: total_arrow_mass[selected_index],
        foc: foc[selected_index],
        fps: velocity[selected_index],
        ke: kinetic_energy[selected_index],
        momentum: momentum[selected_index],
    };

    log::debug!(
        "selected index {} ({:.1} lb): {:.1} gr point, {:.0} fps",
        selected_index,
        sweep[selected_index],
        selected.optimal_point_weight,
        selected.fps
    );

    SetupReport {
        curves: SetupCurves {
            draw_weights: sweep,
            optimal_point_weight,
            total_arrow_mass,
            foc,
            velocity,
            kinetic_energy,
            momentum,
            checkpoints,
        },
        selected_index,
        selected,
    }
}
