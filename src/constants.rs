/// Physical constants used in arrow flight calculations
///
/// All values are fixed for the unit system the engine works in:
/// grains for mass, inches/feet for length, pounds for force,
/// seconds for time. No unit-system generalization is attempted.

/// Air density at sea level (lb/ft³)
///
/// Used by the drag-deceleration integrator. The value matches standard
/// dry air at roughly 70°F; the engine does not model atmosphere beyond
/// this single constant.
pub const AIR_DENSITY_LB_FT3: f64 = 0.0752;

/// Integration time step (seconds)
pub const TIME_STEP: f64 = 0.001;

/// Hard cap on simulated flight time (seconds)
///
/// The Euler loop runs at most `MAX_FLIGHT_TIME / TIME_STEP` steps.
/// Drag can stall a degenerate setup short of the target distance; in
/// that case the integrator returns whatever state it last reached. The
/// cap doubles as the only termination guarantee, so it must never be
/// removed.
pub const MAX_FLIGHT_TIME: f64 = 3.0;

/// Conversion factor: grains per gram
pub const GRAINS_PER_GRAM: f64 = 15.43;

/// Conversion factor: grains per pound
///
/// Divides grain masses into the pound-based units the integrator's drag
/// expression expects.
pub const GRAINS_PER_POUND: f64 = 7000.0;

/// Conversion factor: feet per second to meters per second
pub const FPS_TO_MPS: f64 = 0.3048;

/// Inches per foot, for frontal-area conversions
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Reference arrow mass (grains) at which IBO speed ratings are quoted
pub const IBO_REFERENCE_MASS_GRAINS: f64 = 350.0;

/// Reference draw length (inches) for IBO ratings
///
/// Each inch of draw below this costs 10 fps of rated speed.
pub const IBO_REFERENCE_DRAW_LENGTH: f64 = 30.0;

/// Reference draw weight (pounds) for IBO ratings
///
/// Each pound below this costs 2 fps of rated speed.
pub const IBO_REFERENCE_DRAW_WEIGHT: f64 = 70.0;

/// Rated-speed penalty per inch of draw length below the reference (fps)
pub const FPS_PER_INCH_OF_DRAW: f64 = 10.0;

/// Rated-speed penalty per pound of draw weight below the reference (fps)
pub const FPS_PER_POUND_OF_DRAW: f64 = 2.0;

// Draw-weight sweep geometry. Every derived curve is evaluated over this
// fixed grid; its length and bounds are load-bearing invariants for all
// index-aligned consumers.

/// Lowest draw weight in the sweep (pounds)
pub const SWEEP_MIN_POUNDS: f64 = 30.0;

/// Highest draw weight in the sweep (pounds)
pub const SWEEP_MAX_POUNDS: f64 = 90.0;

/// Number of samples in the draw-weight sweep
pub const SWEEP_LEN: usize = 30;

/// Downrange checkpoint distances (feet): 20, 40, and 60 yards
pub const CHECKPOINT_DISTANCES_FT: [f64; 3] = [60.0, 120.0, 180.0];
