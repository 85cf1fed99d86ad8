use super::*;
use crate::path::PathVerb;

use std::fmt::Write;

/// Functionality relating to core `Segment` operations, such as constructors, accessors, and encodings.
impl Segment {
	/// Create a segment from its points and handles, flattening curves with the given options.
	pub fn new(start: DVec2, handles: SegmentHandles, end: DVec2, options: FlattenOptions) -> Self {
		Segment {
			start,
			end,
			handles,
			options: options.sanitized(),
			polyline: OnceCell::new(),
		}
	}

	/// Create a linear segment using the provided points as the start and end points.
	pub fn new_linear(p1: DVec2, p2: DVec2) -> Self {
		Self::new(p1, SegmentHandles::Linear, p2, FlattenOptions::default())
	}

	/// Create a quadratic segment using the provided points as the start, handle, and end points.
	pub fn new_quadratic(p1: DVec2, handle: DVec2, p2: DVec2) -> Self {
		Self::new(p1, SegmentHandles::Quadratic { handle }, p2, FlattenOptions::default())
	}

	/// Create a cubic segment using the provided points as the start, handles, and end points.
	pub fn new_cubic(p1: DVec2, handle_start: DVec2, handle_end: DVec2, p2: DVec2) -> Self {
		Self::new(p1, SegmentHandles::Cubic { handle_start, handle_end }, p2, FlattenOptions::default())
	}

	/// Create a linear segment which carries the given flatten options, so segments derived from it inherit them.
	pub fn new_linear_with_options(p1: DVec2, p2: DVec2, options: FlattenOptions) -> Self {
		Self::new(p1, SegmentHandles::Linear, p2, options)
	}

	/// Create a quadratic segment which is flattened with the given options.
	pub fn new_quadratic_with_options(p1: DVec2, handle: DVec2, p2: DVec2, options: FlattenOptions) -> Self {
		Self::new(p1, SegmentHandles::Quadratic { handle }, p2, options)
	}

	/// Create a cubic segment which is flattened with the given options.
	pub fn new_cubic_with_options(p1: DVec2, handle_start: DVec2, handle_end: DVec2, p2: DVec2, options: FlattenOptions) -> Self {
		Self::new(p1, SegmentHandles::Cubic { handle_start, handle_end }, p2, options)
	}

	/// Create a segment which shares the flatten options of `self`.
	pub(crate) fn with_same_options(&self, start: DVec2, handles: SegmentHandles, end: DVec2) -> Self {
		Self::new(start, handles, end, self.options)
	}

	/// Get the coordinates of the segment's start point.
	pub fn start(&self) -> DVec2 {
		self.start
	}

	/// Get the coordinates of the segment's end point.
	pub fn end(&self) -> DVec2 {
		self.end
	}

	pub fn handles(&self) -> SegmentHandles {
		self.handles
	}

	/// Get the coordinates of the segment's first handle point. This represents the only handle in a quadratic segment.
	pub fn handle_start(&self) -> Option<DVec2> {
		self.handles.start()
	}

	/// Get the coordinates of the second handle point. This will return `None` for a quadratic segment.
	pub fn handle_end(&self) -> Option<DVec2> {
		self.handles.end()
	}

	/// The flatten options used to build this segment's [Polyline].
	pub fn options(&self) -> FlattenOptions {
		self.options
	}

	/// Get an iterator over the coordinates of all points in the segment.
	/// - For a linear segment, the order of the points will be: `start`, `end`.
	/// - For a quadratic segment, the order of the points will be: `start`, `handle`, `end`.
	/// - For a cubic segment, the order of the points will be: `start`, `handle_start`, `handle_end`, `end`.
	pub fn get_points(&self) -> impl Iterator<Item = DVec2> {
		match self.handles {
			SegmentHandles::Linear => [self.start, self.end, DVec2::ZERO, DVec2::ZERO].into_iter().take(2),
			SegmentHandles::Quadratic { handle } => [self.start, handle, self.end, DVec2::ZERO].into_iter().take(3),
			SegmentHandles::Cubic { handle_start, handle_end } => [self.start, handle_start, handle_end, self.end].into_iter().take(4),
		}
	}

	/// Returns true if the start, end and handles of the segment are all at the same location, making it zero-length.
	pub fn is_point(&self) -> bool {
		let start = self.start;
		self.get_points().all(|point| point == start)
	}

	/// Returns true if the corresponding points of the two segments are within the provided absolute value difference from each other.
	/// The points considered include the start, end, and any relevant handles.
	pub fn abs_diff_eq(&self, other: &Segment, max_abs_diff: f64) -> bool {
		let self_points = self.get_points().collect::<Vec<DVec2>>();
		let other_points = other.get_points().collect::<Vec<DVec2>>();

		self_points.len() == other_points.len() && self_points.into_iter().zip(other_points).all(|(a, b)| a.abs_diff_eq(b, max_abs_diff))
	}

	/// The verb used to encode this segment in a command buffer.
	pub fn verb(&self) -> PathVerb {
		match self.handles {
			SegmentHandles::Linear => PathVerb::Line,
			SegmentHandles::Quadratic { .. } => PathVerb::Quad,
			SegmentHandles::Cubic { .. } => PathVerb::Cubic,
		}
	}

	/// Return the command buffer encoding of this segment, excluding the start point: the verb tag followed by the handles and the end point.
	pub fn to_cmd(&self) -> Vec<f64> {
		let mut cmd = Vec::with_capacity(7);
		self.write_cmd(&mut cmd);
		cmd
	}

	/// Append the command buffer encoding of this segment to `cmds`.
	pub fn write_cmd(&self, cmds: &mut Vec<f64>) {
		cmds.push(self.verb().tag());
		cmds.extend(self.get_points().skip(1).flat_map(|point| [point.x, point.y]));
	}

	/// Return the string argument used to create this segment in an SVG `path`, excluding the start point.
	pub fn svg_curve_argument(&self) -> String {
		let mut svg = String::new();
		let _ = self.write_curve_argument(&mut svg);
		svg
	}

	/// Write the curve argument to the string.
	pub fn write_curve_argument(&self, svg: &mut String) -> std::fmt::Result {
		match self.handles {
			SegmentHandles::Linear => svg.push_str(SVG_ARG_LINEAR),
			SegmentHandles::Quadratic { handle } => write!(svg, "{SVG_ARG_QUADRATIC}{} {} ", handle.x, handle.y)?,
			SegmentHandles::Cubic { handle_start, handle_end } => write!(svg, "{SVG_ARG_CUBIC}{} {} {} {} ", handle_start.x, handle_start.y, handle_end.x, handle_end.y)?,
		}
		write!(svg, "{} {}", self.end.x, self.end.y)
	}
}
