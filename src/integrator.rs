//! Drag-deceleration trajectory integrator.
//!
//! Projects an arrow's velocity and elapsed time to a fixed downrange
//! distance using explicit Euler time-stepping against quadratic drag.
//! Gravity and drop are deliberately ignored; the engine only tracks
//! velocity decay along the line of flight.

use crate::constants::{AIR_DENSITY_LB_FT3, MAX_FLIGHT_TIME, TIME_STEP};

/// Velocity and elapsed time at the point integration stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    /// Velocity (fps) at the step where the target distance was covered
    pub velocity: f64,
    /// Accumulated flight time (seconds) at that step
    pub time_of_flight: f64,
}

/// Integrate a single arrow out to `target_distance` feet.
///
/// Forward Euler with a fixed 1 ms step and a hard 3 s cap. Each step
/// applies the quadratic-drag deceleration
/// `-0.5 * rho * A * Cd * v² / m`, advances the clock, and accumulates
/// distance as `v * dt`; the loop exits as soon as accumulated distance
/// reaches the target.
///
/// Two quirks are part of the contract and must not be "fixed":
/// the distance test runs after the state update, so a zero target still
/// consumes one step and reports `TIME_STEP` of flight; and an arrow that
/// never covers the distance within the cap returns whatever state it
/// last reached rather than signaling failure.
///
/// Mass is in integrator units (grains / 7000). No validation: a zero or
/// negative mass propagates non-finite deceleration into the result.
pub fn integrate(
    initial_velocity: f64,
    cross_section_area: f64,
    drag_coefficient: f64,
    mass: f64,
    target_distance: f64,
) -> FlightState {
    let steps = (MAX_FLIGHT_TIME / TIME_STEP) as usize;

    let mut velocity = initial_velocity;
    let mut time_of_flight = 0.0;
    let mut distance_traveled = 0.0;

    for _ in 0..steps {
        let deceleration =
            -0.5 * AIR_DENSITY_LB_FT3 * cross_section_area * drag_coefficient * velocity * velocity
                / mass;
        velocity += deceleration * TIME_STEP;
        time_of_flight += TIME_STEP;
        distance_traveled += velocity * TIME_STEP;
        if distance_traveled >= target_distance {
            break;
        }
    }

    FlightState {
        velocity,
        time_of_flight,
    }
}

/// Vectorized form of [`integrate`]: one scalar integration per element.
///
/// `velocities` and `masses` are index-aligned; area, drag coefficient,
/// and distance are shared. Elements are independent, so ordering of the
/// output matches the input exactly.
pub fn integrate_all(
    velocities: &[f64],
    cross_section_area: f64,
    drag_coefficient: f64,
    masses: &[f64],
    target_distance: f64,
) -> Vec<FlightState> {
    debug_assert_eq!(velocities.len(), masses.len());
    velocities
        .iter()
        .zip(masses.iter())
        .map(|(&v, &m)| integrate(v, cross_section_area, drag_coefficient, m, target_distance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_costs_exactly_one_step() {
        let state = integrate(250.0, 0.001, 2.0, 0.07, 0.0);
        assert_eq!(state.time_of_flight, TIME_STEP);
        // One millisecond of drag barely touches the velocity.
        assert!((state.velocity - 250.0).abs() < 0.5);
    }

    #[test]
    fn identical_inputs_are_bit_identical() {
        let a = integrate(262.0, 0.0008, 2.0, 0.078, 120.0);
        let b = integrate(262.0, 0.0008, 2.0, 0.078, 120.0);
        assert_eq!(a, b);
    }

    #[test]
    fn drag_only_slows_the_arrow() {
        let state = integrate(262.0, 0.0008, 2.0, 0.078, 180.0);
        assert!(state.velocity < 262.0);
        assert!(state.velocity > 0.0);
        assert!(state.time_of_flight > 0.0);
    }

    #[test]
    fn unreachable_distance_truncates_at_time_cap() {
        // Absurd frontal area stalls the arrow almost immediately; the
        // loop must still terminate and report no more than the cap.
        let state = integrate(262.0, 50.0, 2.0, 0.078, 10_000.0);
        assert!(state.time_of_flight <= MAX_FLIGHT_TIME + 1e-9);
        assert!(state.velocity.is_finite());
        assert!(state.velocity >= 0.0);
    }

    #[test]
    fn vectorized_path_matches_scalar_path() {
        let velocities = [200.0, 250.0, 300.0];
        let masses = [0.070, 0.075, 0.080];
        let batch = integrate_all(&velocities, 0.0008, 2.0, &masses, 120.0);
        assert_eq!(batch.len(), 3);
        for (i, state) in batch.iter().enumerate() {
            let scalar = integrate(velocities[i], 0.0008, 2.0, masses[i], 120.0);
            assert_eq!(*state, scalar);
        }
    }
}
