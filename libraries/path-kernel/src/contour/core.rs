use super::*;
use crate::path::PathVerb;

use std::fmt::Write;

/// Functionality relating to core `Contour` operations, such as constructors, accessors, and encodings.
impl Contour {
	/// Create an open contour at `start` without any segments.
	pub fn new(start: DVec2) -> Self {
		Self { start, segments: Vec::new(), closed: false }
	}

	/// Assemble a contour from segments that are already known to be continuous.
	pub(crate) fn from_parts(start: DVec2, segments: Vec<Arc<Segment>>, closed: bool) -> Self {
		Self { start, segments, closed }
	}

	/// The point the contour starts from.
	pub fn start(&self) -> DVec2 {
		self.start
	}

	/// The end point of the last segment, or `start` when there are none.
	pub fn end(&self) -> DVec2 {
		self.segments.last().map_or(self.start, |segment| segment.end())
	}

	pub fn segments(&self) -> &[Arc<Segment>] {
		&self.segments
	}

	/// Returns an iterator over the segments of the contour.
	pub fn iter(&self) -> impl Iterator<Item = &Segment> {
		self.segments.iter().map(|segment| segment.as_ref())
	}

	/// Number of segments.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Returns true when the contour has no segments.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn closed(&self) -> bool {
		self.closed
	}

	/// Push a segment onto the end of the contour. The segment must start where the contour currently ends.
	pub fn append(&mut self, segment: impl Into<Arc<Segment>>) {
		let segment = segment.into();
		debug_assert!(
			self.end().abs_diff_eq(segment.start(), MAX_ABSOLUTE_DIFFERENCE),
			"Segment starting at {:?} does not continue the contour ending at {:?}",
			segment.start(),
			self.end()
		);
		self.segments.push(segment);
	}

	/// Close the contour, first adding a line back to `start` if the contour does not already end there. Closing twice has no further effect.
	pub fn close(&mut self) {
		if self.closed {
			return;
		}
		let end = self.end();
		if end != self.start {
			let options = self.segments.last().map(|segment| segment.options()).unwrap_or_default();
			self.segments.push(Arc::new(Segment::new_linear_with_options(end, self.start, options)));
		}
		self.closed = true;
	}

	/// Return the command buffer encoding of the contour: a move to `start`, each segment's encoding, and a close verb if the contour is closed.
	pub fn to_cmds(&self) -> Vec<f64> {
		let mut cmds = Vec::with_capacity(3 + self.segments.len() * 7 + 1);
		self.write_cmds(&mut cmds);
		cmds
	}

	/// Append the command buffer encoding of the contour to `cmds`.
	pub fn write_cmds(&self, cmds: &mut Vec<f64>) {
		cmds.extend([PathVerb::Move.tag(), self.start.x, self.start.y]);
		for segment in self.iter() {
			segment.write_cmd(cmds);
		}
		if self.closed {
			cmds.push(PathVerb::Close.tag());
		}
	}

	/// Return the SVG path data of the contour, such as `M0 0 L10 0 L10 10 L0 0 Z`.
	pub fn to_svg_string(&self) -> String {
		let mut svg = String::new();
		let _ = self.write_svg(&mut svg);
		svg
	}

	/// Write the SVG path data of the contour to the string.
	pub fn write_svg(&self, svg: &mut String) -> std::fmt::Result {
		write!(svg, "{SVG_ARG_MOVE}{} {}", self.start.x, self.start.y)?;
		for segment in self.iter() {
			svg.push(' ');
			segment.write_curve_argument(svg)?;
		}
		if self.closed {
			svg.push(' ');
			svg.push_str(SVG_ARG_CLOSED);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn triangle() -> Contour {
		let mut contour = Contour::new(DVec2::ZERO);
		contour.append(Segment::new_linear(DVec2::ZERO, DVec2::new(10., 0.)));
		contour.append(Segment::new_linear(DVec2::new(10., 0.), DVec2::new(10., 10.)));
		contour.close();
		contour
	}

	#[test]
	fn close_adds_the_closing_line() {
		let contour = triangle();
		assert!(contour.closed());
		assert_eq!(contour.len(), 3);
		assert_eq!(contour[2], Segment::new_linear(DVec2::new(10., 10.), DVec2::ZERO));
		assert_eq!(contour.end(), contour.start());
	}

	#[test]
	fn close_is_idempotent() {
		let mut contour = triangle();
		contour.close();
		assert_eq!(contour, triangle());
	}

	#[test]
	fn close_skips_the_line_when_already_at_start() {
		let mut contour = Contour::new(DVec2::ZERO);
		contour.append(Segment::new_quadratic(DVec2::ZERO, DVec2::new(5., 10.), DVec2::new(10., 0.)));
		contour.append(Segment::new_quadratic(DVec2::new(10., 0.), DVec2::new(5., -10.), DVec2::ZERO));
		contour.close();
		assert_eq!(contour.len(), 2);
		assert!(contour.closed());
	}

	#[test]
	fn empty_contour() {
		let contour = Contour::new(DVec2::new(3., 4.));
		assert!(contour.is_empty());
		assert_eq!(contour.end(), DVec2::new(3., 4.));
		assert_eq!(contour.to_cmds(), vec![0., 3., 4.]);
		assert_eq!(contour.to_svg_string(), "M3 4");
	}

	#[test]
	fn encodings() {
		let contour = triangle();
		assert_eq!(contour.to_svg_string(), "M0 0 L10 0 L10 10 L0 0 Z");
		assert_eq!(contour.to_cmds(), vec![0., 0., 0., 1., 10., 0., 1., 10., 10., 1., 0., 0., 5.]);

		let mut open = Contour::new(DVec2::new(-1.5, 2.));
		open.append(Segment::new_cubic(DVec2::new(-1.5, 2.), DVec2::new(0., 3.), DVec2::new(1., 3.), DVec2::new(2., 2.)));
		assert_eq!(open.to_svg_string(), "M-1.5 2 C0 3 1 3 2 2");
		assert_eq!(open.to_cmds(), vec![0., -1.5, 2., 4., 0., 3., 1., 3., 2., 2.]);
	}

	#[test]
	fn iter_visits_segments_in_order() {
		let ends = triangle().iter().map(|segment| segment.end()).collect::<Vec<_>>();
		assert_eq!(ends, vec![DVec2::new(10., 0.), DVec2::new(10., 10.), DVec2::ZERO]);
	}
}
