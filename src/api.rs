//! Request boundary: parameter-map parsing, structured responses, and
//! the two-setup comparison path.
//!
//! The engine itself never catches anything; this module wraps a full
//! evaluation per request and converts any failure into a response with
//! `success: false` and a message, so callers never see a raw error.

use std::error::Error;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::evaluator::{evaluate, SetupCurves, SelectedValues};
use crate::inputs::ArrowSetup;
use crate::regression::PointWeightModel;

/// Error type for engine operations.
#[derive(Debug)]
pub struct EngineError {
    message: String,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for EngineError {}

impl From<String> for EngineError {
    fn from(msg: String) -> Self {
        EngineError { message: msg }
    }
}

impl From<&str> for EngineError {
    fn from(msg: &str) -> Self {
        EngineError {
            message: msg.to_string(),
        }
    }
}

/// Evaluation output for one setup, in the shape charting consumers
/// expect: named scalar values plus the full curve set.
#[derive(Debug, Clone, Serialize)]
pub struct SetupOutput {
    pub values: SelectedValues,
    pub curves: SetupCurves,
    #[serde(rename = "selectedIndex")]
    pub selected_index: usize,
}

/// Response for a single-setup request.
#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub output: Option<SetupOutput>,
}

/// Response for a two-setup comparison request.
///
/// Both outputs are fully independent evaluations over the same sweep
/// domain; nothing is merged or differenced here.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup1: Option<SetupOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup2: Option<SetupOutput>,
}

fn evaluate_setup(map: &Map<String, Value>) -> Result<SetupOutput, EngineError> {
    let setup = ArrowSetup::from_map(map)?;
    let report = evaluate(&setup, &PointWeightModel::default());
    Ok(SetupOutput {
        values: report.selected,
        curves: report.curves,
        selected_index: report.selected_index,
    })
}

fn params_object<'a>(payload: &'a Value, what: &str) -> Result<&'a Map<String, Value>, EngineError> {
    payload
        .as_object()
        .ok_or_else(|| EngineError::from(format!("{} must be a JSON object", what)))
}

/// Evaluate a single-setup parameter map.
pub fn evaluate_request(payload: &Value) -> EvaluateResponse {
    let result = params_object(payload, "request body").and_then(evaluate_setup);
    match result {
        Ok(output) => EvaluateResponse {
            success: true,
            error: None,
            output: Some(output),
        },
        Err(e) => {
            log::warn!("evaluation failed: {}", e);
            EvaluateResponse {
                success: false,
                error: Some(e.to_string()),
                output: None,
            }
        }
    }
}

/// Evaluate a comparison payload holding `setup1` and `setup2` parameter
/// maps. A missing setup key falls back to an all-defaults setup, like a
/// request with no overrides at all.
pub fn compare_request(payload: &Value) -> CompareResponse {
    let empty = Map::new();
    let result = params_object(payload, "request body").and_then(|body| {
        let setup1 = match body.get("setup1") {
            Some(v) => params_object(v, "setup1")?,
            None => &empty,
        };
        let setup2 = match body.get("setup2") {
            Some(v) => params_object(v, "setup2")?,
            None => &empty,
        };
        Ok((evaluate_setup(setup1)?, evaluate_setup(setup2)?))
    });
    match result {
        Ok((setup1, setup2)) => CompareResponse {
            success: true,
            error: None,
            setup1: Some(setup1),
            setup2: Some(setup2),
        },
        Err(e) => {
            log::warn!("comparison failed: {}", e);
            CompareResponse {
                success: false,
                error: Some(e.to_string()),
                setup1: None,
                setup2: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_request_evaluates_defaults() {
        let response = evaluate_request(&json!({}));
        assert!(response.success);
        assert!(response.error.is_none());
        let output = response.output.unwrap();
        assert_eq!(output.curves.draw_weights.len(), 30);
    }

    #[test]
    fn bad_parameter_fails_whole_request() {
        let response = evaluate_request(&json!({"spine": [1, 2]}));
        assert!(!response.success);
        assert!(response.output.is_none());
        assert!(response.error.unwrap().contains("spine"));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let response = evaluate_request(&json!([1, 2, 3]));
        assert!(!response.success);
    }

    #[test]
    fn identical_setups_compare_identically() {
        let params = json!({"spine": 250, "poundage": 60});
        let response = compare_request(&json!({"setup1": params, "setup2": params}));
        assert!(response.success);
        let a = response.setup1.unwrap();
        let b = response.setup2.unwrap();
        assert_eq!(a.selected_index, b.selected_index);
        assert_eq!(a.values.fps, b.values.fps);
        assert_eq!(a.values.optimal_point_weight, b.values.optimal_point_weight);
        assert_eq!(a.values.momentum, b.values.momentum);
    }

    #[test]
    fn comparison_defaults_a_missing_setup() {
        let response = compare_request(&json!({"setup1": {"poundage": 55}}));
        assert!(response.success);
        assert!(response.setup2.is_some());
    }
}
