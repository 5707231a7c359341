//! Canvas projection for ladders and traces.
//!
//! The canvas is split into horizontal bands: names above
//! `name_row_end`, the ladder between `name_row_end` and `ladder_row_end`,
//! results below. Lines are spaced evenly across the width, with one
//! spacing of margin at each edge.
//!
//! This module only computes coordinates; drawing is up to the caller.

use std::fmt::Write;

use amida_core::{LineId, Rung, Waypoint};
use amida_trace::Trace;

use crate::config::ConfigError;

/// A point in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards.
    pub x: f64,
    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

/// Canvas dimensions and band boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LadderLayout {
    /// Canvas width. Default: 800.
    pub width: f64,
    /// Canvas height. Default: 600.
    pub height: f64,
    /// Fraction of the height where the name band ends and lines begin.
    /// Default: 0.2.
    pub name_row_end: f64,
    /// Fraction of the height where lines end and the result band begins.
    /// Default: 0.7.
    pub ladder_row_end: f64,
}

impl Default for LadderLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            name_row_end: 0.2,
            ladder_row_end: 0.7,
        }
    }
}

impl LadderLayout {
    /// Check that dimensions are positive and bands are ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| Err(ConfigError::InvalidLayout { reason });
        if !self.width.is_finite() || self.width <= 0.0 {
            return invalid(format!("width must be finite and positive, got {}", self.width));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return invalid(format!(
                "height must be finite and positive, got {}",
                self.height
            ));
        }
        if !(0.0..=1.0).contains(&self.name_row_end) || !(0.0..=1.0).contains(&self.ladder_row_end)
        {
            return invalid("band boundaries must lie in [0, 1]".to_string());
        }
        if self.name_row_end >= self.ladder_row_end {
            return invalid(format!(
                "name_row_end ({}) must be below ladder_row_end ({})",
                self.name_row_end, self.ladder_row_end
            ));
        }
        Ok(())
    }

    /// Horizontal position of `line` in a ladder of `line_count` lines.
    pub fn line_x(&self, line: LineId, line_count: usize) -> f64 {
        self.width / (line_count + 1) as f64 * (line.index() + 1) as f64
    }

    /// Vertical position of the top of every line.
    pub fn top_y(&self) -> f64 {
        self.height * self.name_row_end
    }

    /// Drawn length of every line.
    pub fn line_length(&self) -> f64 {
        self.height * (self.ladder_row_end - self.name_row_end)
    }

    /// Vertical position of fractional height `position` along a line.
    pub fn y(&self, position: f64) -> f64 {
        self.top_y() + position * self.line_length()
    }

    /// Canvas point of a waypoint.
    pub fn project(&self, waypoint: Waypoint, line_count: usize) -> Point {
        Point {
            x: self.line_x(waypoint.line, line_count),
            y: self.y(waypoint.position),
        }
    }

    /// Canvas points of every waypoint of a trace.
    pub fn polyline(&self, trace: &Trace, line_count: usize) -> Vec<Point> {
        trace
            .waypoints()
            .iter()
            .map(|w| self.project(*w, line_count))
            .collect()
    }

    /// Endpoints of a rung, left end first.
    pub fn rung_segment(&self, rung: &Rung, line_count: usize) -> (Point, Point) {
        let left = Waypoint::new(rung.left(), rung.left_position());
        let right = Waypoint::new(rung.right(), rung.right_position());
        (
            self.project(left, line_count),
            self.project(right, line_count),
        )
    }

    /// SVG path data for a trace: `M x y` then `L x y` per further point.
    pub fn path_data(&self, trace: &Trace, line_count: usize) -> String {
        let mut out = String::new();
        for (i, p) in self.polyline(trace, line_count).into_iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            // Writing to a String cannot fail.
            let _ = write!(out, "{cmd} {} {}", p.x, p.y);
        }
        out
    }
}
