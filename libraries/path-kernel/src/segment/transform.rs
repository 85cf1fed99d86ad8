use super::*;
use crate::utils::clamp_or_min;

/// Functionality that derives new segments from an existing `Segment`.
impl Segment {
	/// Returns the pair of segments that result from splitting the original curve at the parametric `t`-value.
	/// Both halves keep the degree and flatten options of the original.
	pub fn split(&self, t: f64) -> [Segment; 2] {
		let t = clamp_or_min(t, 0., 1.);
		let split_point = self.solve(t);

		match self.handles {
			SegmentHandles::Linear => [
				self.with_same_options(self.start, SegmentHandles::Linear, split_point),
				self.with_same_options(split_point, SegmentHandles::Linear, self.end),
			],
			SegmentHandles::Quadratic { handle } => {
				let t_minus_one = t - 1.;
				[
					self.with_same_options(self.start, SegmentHandles::Quadratic { handle: t * handle - t_minus_one * self.start }, split_point),
					self.with_same_options(split_point, SegmentHandles::Quadratic { handle: t * self.end - t_minus_one * handle }, self.end),
				]
			}
			SegmentHandles::Cubic { handle_start, handle_end } => {
				let t_minus_one = t - 1.;
				[
					self.with_same_options(
						self.start,
						SegmentHandles::Cubic {
							handle_start: t * handle_start - t_minus_one * self.start,
							handle_end: (t * t) * handle_end - 2. * t * t_minus_one * handle_start + (t_minus_one * t_minus_one) * self.start,
						},
						split_point,
					),
					self.with_same_options(
						split_point,
						SegmentHandles::Cubic {
							handle_start: (t * t) * self.end - 2. * t * t_minus_one * handle_end + (t_minus_one * t_minus_one) * handle_start,
							handle_end: t * self.end - t_minus_one * handle_end,
						},
						self.end,
					),
				]
			}
		}
	}

	/// Returns a reversed version of the segment, traversing the same curve from `end` to `start`.
	#[must_use]
	pub fn reverse(&self) -> Segment {
		self.with_same_options(self.end, self.handles.reversed(), self.start)
	}

	/// Returns the segment representing the sub-curve starting at the parametric value `t1` and ending at `t2`.
	/// When `t2 < t1`, returns the reversed sub-curve starting at `t1` and ending at `t2`.
	/// The end points of the result are solved on this segment directly, so they match [Segment::solve] exactly.
	pub fn sub_curve(&self, t1: f64, t2: f64) -> Segment {
		let (t1, t2) = (clamp_or_min(t1, 0., 1.), clamp_or_min(t2, 0., 1.));
		let (start, end) = (self.solve(t1), self.solve(t2));

		// A zero-width range collapses to a point segment of the same degree
		if t1 == t2 {
			let handles = self.handles.apply_transformation(|_| start);
			return self.with_same_options(start, handles, start);
		}

		// Depending on the order of `t1` and `t2`, determine which half of the split we need to keep
		let t1_split_side = usize::from(t1 <= t2);
		let t2_split_side = usize::from(t1 > t2);
		let [first, second] = self.split(t1);
		let segment_starting_at_t1 = if t1_split_side == 0 { first } else { second };

		// Adjust `t2` to its corresponding value on the half that was split off at `t1`
		let adjusted_t2 = if t1 < t2 { (t2 - t1) / (1. - t1) } else { t2 / t1 };
		let [first, second] = segment_starting_at_t1.split(adjusted_t2);
		let result = if t2_split_side == 0 { first } else { second };
		let result = if t2 < t1 { result.reverse() } else { result };

		self.with_same_options(start, result.handles, end)
	}

	/// Returns the part of the segment between the arc lengths `start` and `stop`, measured from the segment's start.
	/// When `stop < start` the result is reversed, running from the point at `start` back to the point at `stop`.
	/// Curves keep their degree and linear segments are rebuilt from their solved end points. A degenerate segment returns an equivalent copy of itself.
	pub fn segment(&self, start: f64, stop: f64) -> Segment {
		if self.is_point() {
			return self.clone();
		}

		let (t1, t2) = (self.t_at_length(start), self.t_at_length(stop));
		if t2 < t1 {
			log::debug!("Segment range {start}..{stop} is reversed, returning the reversed sub-curve");
		}

		match self.handles {
			SegmentHandles::Linear => self.with_same_options(self.solve(t1), SegmentHandles::Linear, self.solve(t2)),
			_ => self.sub_curve(t1, t2),
		}
	}

	/// Returns a segment that results from applying the transformation function to each point in the segment.
	/// The flatten options are kept and the [Polyline] is rebuilt on demand for the transformed curve.
	#[must_use]
	pub fn apply_transformation(&self, transformation_function: impl Fn(DVec2) -> DVec2) -> Segment {
		let start = transformation_function(self.start);
		let end = transformation_function(self.end);
		self.with_same_options(start, self.handles.apply_transformation(transformation_function), end)
	}
}
