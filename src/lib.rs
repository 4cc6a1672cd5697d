//! # Arrow Engine
//!
//! Derived ballistic and structural properties of an arrow setup: optimal
//! point weight, total mass, front-of-center balance, muzzle velocity,
//! kinetic energy, momentum, and the downrange decay of each at 20/40/60
//! yards, evaluated over a fixed 30-point draw-weight sweep. Two setups
//! can be compared side by side.
//!
//! The engine is a pure, deterministic numeric pipeline: every request is
//! evaluated fresh, holds no shared state, and always terminates (the
//! drag integrator runs at most 3000 fixed steps per call).

// Re-export the main types and functions
pub use api::{
    compare_request, evaluate_request, CompareResponse, EngineError, EvaluateResponse, SetupOutput,
};
pub use evaluator::{
    drag_reference_area, draw_weight_sweep, evaluate, nearest_sweep_index, CheckpointCurves,
    SelectedValues, SetupCurves, SetupReport,
};
pub use inputs::ArrowSetup;
pub use integrator::{integrate, integrate_all, FlightState};
pub use regression::PointWeightModel;

// Module declarations
pub mod api;
pub mod constants;
pub mod evaluator;
pub mod inputs;
pub mod integrator;
pub mod regression;
