//! Schematic diagram primitives
//!
//! Produces a vertical column of place/transition/arc shapes, one group per
//! record, followed by a final "End" place. The layout is fixed and is not
//! derived from any mined process structure. Rendering is left to the caller.

use crate::types::EventTrace;
use serde::{Deserialize, Serialize};

const START_X: f64 = 150.0;
const START_Y: f64 = 100.0;
const ROW_SPACING: f64 = 80.0;
const PLACE_RADIUS: f64 = 20.0;
const TRANSITION_WIDTH: f64 = 60.0;
const TRANSITION_HEIGHT: f64 = 20.0;

/// Fill colours used by the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    LightGreen,
    LightBlue,
    LightCoral,
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    /// Place, drawn as a circle
    Circle { cx: f64, cy: f64, radius: f64, fill: Fill },
    /// Transition, drawn as a rectangle
    Rect { x: f64, y: f64, width: f64, height: f64, fill: Fill },
    /// Arc between a place and its transition
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Text label
    Label { x: f64, y: f64, text: String },
}

/// Lay out the diagram for a trace
pub fn layout(trace: &EventTrace) -> Vec<Shape> {
    let x = START_X;
    let mut y = START_Y;
    let mut shapes = Vec::with_capacity(trace.len() * 4 + 2);

    for record in trace {
        shapes.push(Shape::Circle {
            cx: x,
            cy: y,
            radius: PLACE_RADIUS,
            fill: Fill::LightGreen,
        });
        shapes.push(Shape::Rect {
            x: x - TRANSITION_WIDTH / 2.0,
            y: y + 2.0 * PLACE_RADIUS,
            width: TRANSITION_WIDTH,
            height: TRANSITION_HEIGHT,
            fill: Fill::LightBlue,
        });
        shapes.push(Shape::Line {
            x1: x,
            y1: y + PLACE_RADIUS,
            x2: x,
            y2: y + 2.0 * PLACE_RADIUS,
        });
        shapes.push(Shape::Label {
            x: x - 20.0,
            y: y + 45.0,
            text: record.event().to_string(),
        });
        y += ROW_SPACING;
    }

    shapes.push(Shape::Circle {
        cx: x,
        cy: y,
        radius: PLACE_RADIUS,
        fill: Fill::LightCoral,
    });
    shapes.push(Shape::Label {
        x: x - 10.0,
        y: y + 5.0,
        text: "End".to_string(),
    });

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventLog;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_trace_has_final_place_only() {
        let shapes = layout(&EventTrace::default());
        assert_eq!(shapes.len(), 2);
        assert_eq!(
            shapes[0],
            Shape::Circle { cx: 150.0, cy: 100.0, radius: 20.0, fill: Fill::LightCoral }
        );
    }

    #[test]
    fn test_rows_are_spaced_vertically() {
        let trace: EventTrace = ["A", "B"]
            .iter()
            .map(|e| EventLog::new(*e, Utc.timestamp_opt(0, 0).unwrap()))
            .collect();
        let shapes = layout(&trace);

        assert_eq!(shapes.len(), 10);
        assert_eq!(
            shapes[4],
            Shape::Circle { cx: 150.0, cy: 180.0, radius: 20.0, fill: Fill::LightGreen }
        );
        assert_eq!(
            shapes[5],
            Shape::Rect { x: 120.0, y: 220.0, width: 60.0, height: 20.0, fill: Fill::LightBlue }
        );
        assert_eq!(shapes[7], Shape::Label { x: 130.0, y: 225.0, text: "B".to_string() });
        assert_eq!(shapes[9], Shape::Label { x: 140.0, y: 265.0, text: "End".to_string() });
    }
}
