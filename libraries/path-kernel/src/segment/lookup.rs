use super::*;
use crate::utils::{bernstein_lerp, clamp_or_min};

/// Functionality relating to looking up properties of the `Segment` or points along the `Segment`.
impl Segment {
	/// Calculate the point on the curve at the parametric `t`-value, which is clamped to `[0, 1]`.
	/// This is always solved analytically and never goes through the [Polyline]. A segment whose points all coincide returns its start for every `t`.
	pub fn solve(&self, t: f64) -> DVec2 {
		if self.is_point() {
			return self.start;
		}
		let t = clamp_or_min(t, 0., 1.);
		match self.handles {
			SegmentHandles::Linear => bernstein_lerp(self.start, self.end, t),
			SegmentHandles::Quadratic { handle } => {
				let t_squared = t * t;
				let one_minus_t = 1. - t;
				let squared_one_minus_t = one_minus_t * one_minus_t;
				squared_one_minus_t * self.start + 2. * one_minus_t * t * handle + t_squared * self.end
			}
			SegmentHandles::Cubic { handle_start, handle_end } => {
				let t_cubed = t * t * t;
				let one_minus_t = 1. - t;
				let cubed_one_minus_t = one_minus_t * one_minus_t * one_minus_t;
				cubed_one_minus_t * self.start + 3. * one_minus_t * one_minus_t * t * handle_start + 3. * one_minus_t * t * t * handle_end + t_cubed * self.end
			}
		}
	}

	/// Returns the non-normalized derivative of the curve at the parametric `t`-value, which is clamped to `[0, 1]`.
	pub fn solve_derivative(&self, t: f64) -> DVec2 {
		let t = clamp_or_min(t, 0., 1.);
		match self.handles {
			SegmentHandles::Linear => self.end - self.start,
			SegmentHandles::Quadratic { handle } => {
				let p1_minus_p0 = handle - self.start;
				let p2_minus_p1 = self.end - handle;
				2. * ((1. - t) * p1_minus_p0 + t * p2_minus_p1)
			}
			SegmentHandles::Cubic { handle_start, handle_end } => {
				let p1_minus_p0 = handle_start - self.start;
				let p2_minus_p1 = handle_end - handle_start;
				let p3_minus_p2 = self.end - handle_end;
				let one_minus_t = 1. - t;
				3. * (one_minus_t * one_minus_t * p1_minus_p0 + 2. * one_minus_t * t * p2_minus_p1 + t * t * p3_minus_p2)
			}
		}
	}

	/// Returns the flattened approximation of this segment, building it on first access.
	pub fn polyline(&self) -> &Polyline {
		self.polyline.get_or_init(|| Polyline::from_segment(self, self.options))
	}

	/// Return the arc length of the segment.
	/// Linear segments are measured exactly; curves are measured along their [Polyline].
	pub fn length(&self) -> f64 {
		if self.is_point() {
			return 0.;
		}
		match self.handles {
			SegmentHandles::Linear => self.start.distance(self.end),
			_ => self.polyline().length(),
		}
	}

	/// Convert an arc length along the segment into the parametric `t`-value at that distance.
	/// The length is clamped to `[0, length()]`, mapping exactly to `0` and `1` at the bounds. A zero-length segment always returns `0`.
	pub fn t_at_length(&self, length: f64) -> f64 {
		let total_length = self.length();
		if total_length <= 0. {
			return 0.;
		}
		let length = clamp_or_min(length, 0., total_length);
		if length <= 0. {
			return 0.;
		}
		if length >= total_length {
			return 1.;
		}
		match self.handles {
			SegmentHandles::Linear => length / total_length,
			_ => self.polyline().t_at_length(length),
		}
	}

	/// Returns the point on the curve at the given arc length, solving analytically at the parameter found by [Segment::t_at_length].
	pub fn point_at_length(&self, length: f64) -> DVec2 {
		if self.is_point() {
			return self.start;
		}
		self.solve(self.t_at_length(length))
	}

	/// Returns the non-normalized derivative of the curve at the given arc length.
	pub fn tangent_at_length(&self, length: f64) -> DVec2 {
		self.solve_derivative(self.t_at_length(length))
	}
}
