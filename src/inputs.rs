//! Arrow setup parameters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::EngineError;

/// One arrow setup: the 18 physical quantities every evaluation starts
/// from. Immutable once constructed; the evaluator never writes back.
///
/// Units are fixed: grains for mass, inches for length, pounds for force,
/// degrees for the fletch helical offset. Field defaults mirror a typical
/// 200-spine compound setup and are applied to any key absent from a
/// request map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArrowSetup {
    /// Shaft spine rating
    pub spine: f64,
    /// Shaft mass per inch (grains)
    #[serde(rename = "arrowGPI")]
    pub arrow_gpi: f64,
    /// Chosen bow draw weight (pounds); selects the reported sweep point
    #[serde(rename = "poundage")]
    pub draw_weight: f64,
    /// Bow IBO speed rating (fps at the 350 gr reference arrow)
    pub ibo: f64,
    /// Shaft length, nock throat excluded (inches)
    pub arrow_length: f64,
    /// Nock throat to shaft end (inches)
    pub nock_throat_adder: f64,
    /// Nock weight (grains)
    pub nock_weight: f64,
    /// Wrap weight (grains)
    #[serde(rename = "arrowWrapWeight")]
    pub wrap_weight: f64,
    /// Wrap length from the shaft's nock end (inches)
    #[serde(rename = "arrowWrapLength")]
    pub wrap_length: f64,
    /// Fletch leading edge to shaft end (inches)
    pub fletch_distance: f64,
    /// Number of fletches
    #[serde(rename = "fletchNumber")]
    pub fletch_count: u32,
    /// Weight per fletch (grains)
    pub fletch_weight: f64,
    /// Fletch length (inches)
    pub fletch_length: f64,
    /// Fletch height (inches)
    pub fletch_height: f64,
    /// Draw length (inches)
    pub draw_length: f64,
    /// Drag coefficient of the full arrow
    #[serde(rename = "coefDrag")]
    pub drag_coefficient: f64,
    /// Shaft outer diameter (inches)
    #[serde(rename = "arrowDiam")]
    pub shaft_diameter: f64,
    /// Fletch helical offset (degrees)
    pub fletch_offset: f64,
}

impl Default for ArrowSetup {
    fn default() -> Self {
        Self {
            spine: 200.0,
            arrow_gpi: 10.7,
            draw_weight: 71.0,
            ibo: 335.0,
            arrow_length: 28.25,
            nock_throat_adder: 0.5,
            nock_weight: 6.0,
            wrap_weight: 0.0,
            wrap_length: 4.0,
            fletch_distance: 0.75,
            fletch_count: 4,
            fletch_weight: 5.0,
            fletch_length: 2.25,
            fletch_height: 0.465,
            draw_length: 29.0,
            drag_coefficient: 2.0,
            shaft_diameter: 0.166,
            fletch_offset: 3.0,
        }
    }
}

impl ArrowSetup {
    /// Build a setup from a loose JSON parameter map.
    ///
    /// Request payloads historically carried numbers as either JSON
    /// numbers or decimal strings, so both are accepted; any key that is
    /// present but cannot coerce is an input-coercion error naming the
    /// key. Missing keys take the field default. Unknown keys are ignored.
    pub fn from_map(map: &Map<String, Value>) -> Result<ArrowSetup, EngineError> {
        let d = ArrowSetup::default();
        Ok(ArrowSetup {
            spine: coerce(map, "spine", d.spine)?,
            arrow_gpi: coerce(map, "arrowGPI", d.arrow_gpi)?,
            draw_weight: coerce(map, "poundage", d.draw_weight)?,
            ibo: coerce(map, "ibo", d.ibo)?,
            arrow_length: coerce(map, "arrowLength", d.arrow_length)?,
            nock_throat_adder: coerce(map, "nockThroatAdder", d.nock_throat_adder)?,
            nock_weight: coerce(map, "nockWeight", d.nock_weight)?,
            wrap_weight: coerce(map, "arrowWrapWeight", d.wrap_weight)?,
            wrap_length: coerce(map, "arrowWrapLength", d.wrap_length)?,
            fletch_distance: coerce(map, "fletchDistance", d.fletch_distance)?,
            fletch_count: coerce(map, "fletchNumber", d.fletch_count as f64)? as u32,
            fletch_weight: coerce(map, "fletchWeight", d.fletch_weight)?,
            fletch_length: coerce(map, "fletchLength", d.fletch_length)?,
            fletch_height: coerce(map, "fletchHeight", d.fletch_height)?,
            draw_length: coerce(map, "drawLength", d.draw_length)?,
            drag_coefficient: coerce(map, "coefDrag", d.drag_coefficient)?,
            shaft_diameter: coerce(map, "arrowDiam", d.shaft_diameter)?,
            fletch_offset: coerce(map, "fletchOffset", d.fletch_offset)?,
        })
    }

    /// Combined weight of all fletches (grains)
    pub fn total_fletch_weight(&self) -> f64 {
        self.fletch_count as f64 * self.fletch_weight
    }

    /// Bare shaft weight (grains)
    pub fn shaft_weight(&self) -> f64 {
        self.arrow_gpi * self.arrow_length
    }
}

fn coerce(map: &Map<String, Value>, key: &str, default: f64) -> Result<f64, EngineError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| EngineError::from(format!("parameter '{}' is out of range", key))),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            EngineError::from(format!("parameter '{}' is not a number: '{}'", key, s))
        }),
        Some(other) => Err(EngineError::from(format!(
            "parameter '{}' has non-numeric type: {}",
            key, other
        ))),
    }
}
