use crate::segment::{Segment, SegmentHandles};
use crate::structs::FlattenOptions;
use crate::utils::{bernstein_lerp, clamp_or_min};

use glam::DVec2;

/// A piecewise-linear approximation of one [Segment], used to convert between arc length and the segment's parametric `t`-value.
///
/// The three tables run in parallel: `points[i]` is the curve point at `parameters[i]`, and `lengths[i]` is the distance travelled along the polyline to reach it.
/// The first sample is the segment's start at `t = 0` and length `0`; the last is its end at `t = 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
	points: Vec<DVec2>,
	parameters: Vec<f64>,
	lengths: Vec<f64>,
}

impl Polyline {
	/// Flatten the segment by recursive midpoint subdivision.
	/// A span is kept once `min_depth` is reached and the curve point at its mid-parameter lies within `tolerance` of the chord midpoint,
	/// and it is always kept at `max_depth`. Linear segments produce their two end points.
	pub fn from_segment(segment: &Segment, options: FlattenOptions) -> Self {
		let options = options.sanitized();
		let mut points = vec![segment.start()];
		let mut parameters = vec![0.];

		match segment.handles() {
			SegmentHandles::Linear => {
				points.push(segment.end());
				parameters.push(1.);
			}
			_ => subdivide(segment, (0., segment.start()), (1., segment.end()), 0, &options, &mut points, &mut parameters),
		}

		let mut lengths = Vec::with_capacity(points.len());
		let mut accumulator = 0.;
		lengths.push(accumulator);
		for pair in points.windows(2) {
			accumulator += pair[0].distance(pair[1]);
			lengths.push(accumulator);
		}

		log::trace!("Flattened {:?} segment into {} samples with a length of {accumulator}", segment.verb(), points.len());

		Self { points, parameters, lengths }
	}

	/// The sampled points, starting at the segment's start and ending at its end.
	pub fn points(&self) -> &[DVec2] {
		&self.points
	}

	/// The parametric `t`-value of each sampled point.
	pub fn parameters(&self) -> &[f64] {
		&self.parameters
	}

	/// Cumulative lengths along the polyline, one per sample.
	pub fn lengths(&self) -> &[f64] {
		&self.lengths
	}

	/// Number of samples.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Total length of the polyline.
	pub fn length(&self) -> f64 {
		self.lengths.last().copied().unwrap_or(0.)
	}

	/// Returns the point at the given distance along the polyline, interpolated between the two samples that bracket it.
	pub fn point_at_length(&self, length: f64) -> DVec2 {
		match self.locate(length) {
			Some((index, ratio)) => bernstein_lerp(self.points[index - 1], self.points[index], ratio),
			None => self.points.first().copied().unwrap_or_default(),
		}
	}

	/// Returns the unit direction of the polyline piece containing the given distance, or zero if that piece has no length.
	pub fn tangent_at_length(&self, length: f64) -> DVec2 {
		let index = self.locate(length).map_or(1, |(index, _)| index);
		match (self.points.get(index - 1), self.points.get(index)) {
			(Some(&previous), Some(&next)) => (next - previous).normalize_or_zero(),
			_ => DVec2::ZERO,
		}
	}

	/// Returns the parametric `t`-value at the given distance along the polyline, interpolated between the two samples that bracket it.
	pub fn t_at_length(&self, length: f64) -> f64 {
		match self.locate(length) {
			Some((index, ratio)) => {
				let (t0, t1) = (self.parameters[index - 1], self.parameters[index]);
				(1. - ratio) * t0 + ratio * t1
			}
			None => self.parameters.first().copied().unwrap_or(0.),
		}
	}

	/// Binary search for the first sample at or beyond `length`.
	/// Returns its index together with the interpolation ratio from the previous sample, or `None` when `length` falls on the first sample.
	fn locate(&self, length: f64) -> Option<(usize, f64)> {
		let length = clamp_or_min(length, 0., self.length());
		let index = self.lengths.partition_point(|&cumulative| cumulative < length);
		if index == 0 || index >= self.lengths.len() {
			return None;
		}

		let (previous, next) = (self.lengths[index - 1], self.lengths[index]);
		let span = next - previous;
		let ratio = if span > 0. { ((length - previous) / span).clamp(0., 1.) } else { 0. };
		Some((index, ratio))
	}
}

/// Recursively flattens the span between two already-solved samples, pushing every accepted end sample in order.
fn subdivide(segment: &Segment, (t0, p0): (f64, DVec2), (t1, p1): (f64, DVec2), depth: usize, options: &FlattenOptions, points: &mut Vec<DVec2>, parameters: &mut Vec<f64>) {
	let t_mid = (t0 + t1) / 2.;
	let p_mid = segment.solve(t_mid);
	let flat = p_mid.distance((p0 + p1) / 2.) <= options.tolerance;

	if depth >= options.max_depth || (depth >= options.min_depth && flat) {
		points.push(p1);
		parameters.push(t1);
		return;
	}

	subdivide(segment, (t0, p0), (t_mid, p_mid), depth + 1, options, points, parameters);
	subdivide(segment, (t_mid, p_mid), (t1, p1), depth + 1, options, points, parameters);
}
