mod core;
mod lookup;
mod transform;

use crate::consts::*;
use crate::polyline::Polyline;
use crate::structs::FlattenOptions;

use glam::DVec2;
use once_cell::sync::OnceCell;
use std::fmt::{Debug, Formatter, Result};

/// Representation of the handle point(s) of a segment, which determine its degree.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentHandles {
	Linear,
	/// Handle for a quadratic curve.
	Quadratic {
		/// Point representing the location of the single handle.
		handle: DVec2,
	},
	/// Handles for a cubic curve.
	Cubic {
		/// Point representing the location of the handle associated to the start point.
		handle_start: DVec2,
		/// Point representing the location of the handle associated to the end point.
		handle_end: DVec2,
	},
}

impl SegmentHandles {
	pub fn is_linear(&self) -> bool {
		matches!(self, Self::Linear)
	}

	/// Get the coordinates of the segment's first handle point. This represents the only handle in a quadratic segment.
	pub fn start(&self) -> Option<DVec2> {
		match *self {
			SegmentHandles::Cubic { handle_start, .. } | SegmentHandles::Quadratic { handle: handle_start } => Some(handle_start),
			SegmentHandles::Linear => None,
		}
	}

	/// Get the coordinates of the second handle point. This will return `None` for a quadratic segment.
	pub fn end(&self) -> Option<DVec2> {
		match *self {
			SegmentHandles::Cubic { handle_end, .. } => Some(handle_end),
			_ => None,
		}
	}

	#[must_use]
	pub fn apply_transformation(&self, transformation_function: impl Fn(DVec2) -> DVec2) -> Self {
		match *self {
			SegmentHandles::Linear => Self::Linear,
			SegmentHandles::Quadratic { handle } => Self::Quadratic { handle: transformation_function(handle) },
			SegmentHandles::Cubic { handle_start, handle_end } => Self::Cubic {
				handle_start: transformation_function(handle_start),
				handle_end: transformation_function(handle_end),
			},
		}
	}

	#[must_use]
	pub fn reversed(self) -> Self {
		match self {
			SegmentHandles::Cubic { handle_start, handle_end } => Self::Cubic {
				handle_start: handle_end,
				handle_end: handle_start,
			},
			_ => self,
		}
	}
}

/// An immutable line, quadratic, or cubic piece of a contour.
///
/// Positions and derivatives are solved analytically. Arc-length queries on curves go through a [Polyline] which is built on first use and then reused;
/// the cache is initialized at most once even when several threads query the same segment concurrently.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
	start: DVec2,
	end: DVec2,
	handles: SegmentHandles,
	#[cfg_attr(feature = "serde", serde(default))]
	options: FlattenOptions,
	#[cfg_attr(feature = "serde", serde(skip))]
	polyline: OnceCell<Polyline>,
}

impl PartialEq for Segment {
	fn eq(&self, other: &Self) -> bool {
		self.start == other.start && self.end == other.end && self.handles == other.handles
	}
}

impl Debug for Segment {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		let mut debug_struct = f.debug_struct("Segment");
		let mut debug_struct_ref = debug_struct.field("start", &self.start);
		debug_struct_ref = match self.handles {
			SegmentHandles::Linear => debug_struct_ref,
			SegmentHandles::Quadratic { handle } => debug_struct_ref.field("handle", &handle),
			SegmentHandles::Cubic { handle_start, handle_end } => debug_struct_ref.field("handle_start", &handle_start).field("handle_end", &handle_end),
		};
		debug_struct_ref.field("end", &self.end).finish()
	}
}
