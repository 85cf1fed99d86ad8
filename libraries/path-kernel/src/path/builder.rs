use super::*;
use crate::segment::{Segment, SegmentHandles};

/// Incrementally builds a [Path], tracking the current point between calls.
///
/// The current point starts at the origin. Drawing without an open contour, either before any `move_to` or right after `close`, starts a new contour at the current point.
/// Coordinates are not checked here, and paths holding NaN or infinite coordinates do not survive a round trip through SVG path data or a command buffer.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
	contours: Vec<Contour>,
	current: DVec2,
	options: FlattenOptions,
}

impl PathBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start a builder whose curves are flattened with the given options.
	pub fn with_options(options: FlattenOptions) -> Self {
		Self { options, ..Default::default() }
	}

	/// The point the next segment will start from.
	pub fn current_point(&self) -> DVec2 {
		self.current
	}

	pub fn options(&self) -> FlattenOptions {
		self.options
	}

	/// Start a new contour at `point`, leaving any previous contour as it is.
	pub fn move_to(&mut self, point: DVec2) -> &mut Self {
		self.contours.push(Contour::new(point));
		self.current = point;
		self
	}

	/// Add a line from the current point to `point`.
	pub fn add_linear(&mut self, point: DVec2) -> &mut Self {
		self.push_segment(SegmentHandles::Linear, point)
	}

	/// Add a quadratic curve from the current point to `point`.
	pub fn add_quadratic(&mut self, handle: DVec2, point: DVec2) -> &mut Self {
		self.push_segment(SegmentHandles::Quadratic { handle }, point)
	}

	/// Add a cubic curve from the current point to `point`.
	pub fn add_cubic(&mut self, handle_start: DVec2, handle_end: DVec2, point: DVec2) -> &mut Self {
		self.push_segment(SegmentHandles::Cubic { handle_start, handle_end }, point)
	}

	/// Close the open contour and move the current point back to its start. Does nothing when no contour is open.
	pub fn close(&mut self) -> &mut Self {
		if let Some(contour) = self.open_contour() {
			contour.close();
			let start = contour.start();
			self.current = start;
		}
		self
	}

	/// Finish the path, leaving the builder empty with its current point back at the origin.
	pub fn build(&mut self) -> Path {
		self.current = DVec2::ZERO;
		Path::from_contours(std::mem::take(&mut self.contours))
	}

	fn open_contour(&mut self) -> Option<&mut Contour> {
		self.contours.last_mut().filter(|contour| !contour.closed())
	}

	fn push_segment(&mut self, handles: SegmentHandles, point: DVec2) -> &mut Self {
		let segment = Segment::new(self.current, handles, point, self.options);
		if self.open_contour().is_none() {
			self.contours.push(Contour::new(self.current));
		}
		if let Some(contour) = self.open_contour() {
			contour.append(segment);
		}
		self.current = point;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn triangle() {
		let path = Path::builder().move_to(DVec2::ZERO).add_linear(DVec2::new(10., 0.)).add_linear(DVec2::new(10., 10.)).close().build();
		assert_eq!(path.len(), 1);
		assert_eq!(path.contours()[0].len(), 3);
		assert!(path.contours()[0].closed());
		assert_eq!(path.to_svg_string(), "M0 0 L10 0 L10 10 L0 0 Z");
	}

	#[test]
	fn drawing_before_move_to_starts_at_the_origin() {
		let path = Path::builder().add_linear(DVec2::new(5., 5.)).build();
		assert_eq!(path.len(), 1);
		assert_eq!(path.contours()[0].start(), DVec2::ZERO);
		assert_eq!(path.to_svg_string(), "M0 0 L5 5");
	}

	#[test]
	fn drawing_after_close_starts_a_new_contour() {
		let mut builder = PathBuilder::new();
		builder.move_to(DVec2::new(1., 1.)).add_linear(DVec2::new(4., 1.)).add_linear(DVec2::new(4., 4.)).close();
		assert_eq!(builder.current_point(), DVec2::new(1., 1.));

		builder.add_quadratic(DVec2::new(2., 0.), DVec2::new(3., 1.));
		let path = builder.build();
		assert_eq!(path.len(), 2);
		assert_eq!(path.contours()[1].start(), DVec2::new(1., 1.));
		assert!(!path.contours()[1].closed());
	}

	#[test]
	fn move_to_always_starts_a_new_contour() {
		let path = Path::builder().move_to(DVec2::ZERO).add_linear(DVec2::X).move_to(DVec2::Y).move_to(DVec2::ONE).build();
		assert_eq!(path.len(), 3);
		assert!(path.contours()[1].is_empty());
		assert_eq!(path.to_svg_string(), "M0 0 L1 0 M0 1 M1 1");
	}

	#[test]
	fn close_without_open_contour_is_a_no_op() {
		let path = Path::builder().close().build();
		assert!(path.is_empty());
	}

	#[test]
	fn build_resets_the_builder() {
		let mut builder = PathBuilder::new();
		builder.move_to(DVec2::ONE).add_linear(DVec2::new(2., 2.));
		assert_eq!(builder.build().len(), 1);
		assert_eq!(builder.current_point(), DVec2::ZERO);
		assert!(builder.build().is_empty());
	}

	#[test]
	fn options_reach_every_segment() {
		let options = FlattenOptions::with_tolerance(0.25);
		let path = PathBuilder::with_options(options).move_to(DVec2::ZERO).add_cubic(DVec2::Y, DVec2::ONE, DVec2::X).build();
		assert_eq!(path.contours()[0][0].options(), options);
	}
}
