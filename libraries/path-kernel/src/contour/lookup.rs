use super::*;
use crate::utils::clamp_or_min;

/// Functionality relating to looking up properties of the `Contour` or points along the `Contour`.
impl Contour {
	/// Return the sum of the lengths of each segment in the contour.
	pub fn length(&self) -> f64 {
		self.iter().map(|segment| segment.length()).sum()
	}

	/// Find the segment containing the given distance along the contour, returning its index and the distance remaining within it.
	/// The distance is clamped to the contour's length. A distance that lands on a joint resolves to the end of the earlier segment.
	pub fn segment_at_length(&self, length: f64) -> Option<(usize, f64)> {
		let last_index = self.segments.len().checked_sub(1)?;
		let length = clamp_or_min(length, 0., self.length());

		let mut accumulator = 0.;
		for (index, segment) in self.iter().enumerate() {
			let segment_length = segment.length();
			if length <= accumulator + segment_length || index == last_index {
				return Some((index, (length - accumulator).clamp(0., segment_length)));
			}
			accumulator += segment_length;
		}
		None
	}

	/// Returns the point at the given distance along the contour, or `start` if the contour has no segments.
	pub fn point_at_length(&self, length: f64) -> DVec2 {
		match self.segment_at_length(length) {
			Some((index, local_length)) => self.segments[index].point_at_length(local_length),
			None => self.start,
		}
	}

	/// Returns the non-normalized derivative at the given distance along the contour, or zero if the contour has no segments.
	pub fn tangent_at_length(&self, length: f64) -> DVec2 {
		match self.segment_at_length(length) {
			Some((index, local_length)) => self.segments[index].tangent_at_length(local_length),
			None => DVec2::ZERO,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};

	fn set_up_contour() -> Contour {
		let mut contour = Contour::new(DVec2::ZERO);
		contour.append(Segment::new_linear(DVec2::ZERO, DVec2::new(10., 0.)));
		contour.append(Segment::new_quadratic(DVec2::new(10., 0.), DVec2::new(20., 10.), DVec2::new(30., 0.)));
		contour.append(Segment::new_cubic(DVec2::new(30., 0.), DVec2::new(30., 20.), DVec2::new(0., 20.), DVec2::new(0., 10.)));
		contour
	}

	#[test]
	fn length_is_the_sum_of_segment_lengths() {
		let contour = set_up_contour();
		let sum = contour.iter().map(|segment| segment.length()).sum::<f64>();
		assert!(compare_f64s(contour.length(), sum));
		assert!(contour.length() > 10. + 20. + 30.);
	}

	#[test]
	fn segment_at_length() {
		let contour = set_up_contour();
		assert_eq!(contour.segment_at_length(-1.), Some((0, 0.)));
		assert_eq!(contour.segment_at_length(4.), Some((0, 4.)));
		assert_eq!(contour.segment_at_length(10.), Some((0, 10.)));

		let (index, local) = contour.segment_at_length(12.).unwrap();
		assert_eq!(index, 1);
		assert!(compare_f64s(local, 2.));

		let (index, local) = contour.segment_at_length(1e6).unwrap();
		assert_eq!(index, 2);
		assert!(compare_f64s(local, contour[2].length()));

		assert_eq!(Contour::new(DVec2::ONE).segment_at_length(1.), None);
	}

	#[test]
	fn point_and_tangent_at_length() {
		let contour = set_up_contour();
		assert_eq!(contour.point_at_length(0.), DVec2::ZERO);
		assert_eq!(contour.point_at_length(5.), DVec2::new(5., 0.));
		assert_eq!(contour.tangent_at_length(5.), DVec2::new(10., 0.));
		assert_eq!(contour.point_at_length(10.), DVec2::new(10., 0.));
		assert!(compare_points(contour.point_at_length(contour.length()), DVec2::new(0., 10.)));
		assert!(compare_points(contour.point_at_length(f64::INFINITY), DVec2::new(0., 10.)));
	}

	#[test]
	fn empty_contour_lookups() {
		let contour = Contour::new(DVec2::new(2., 2.));
		assert_eq!(contour.length(), 0.);
		assert_eq!(contour.point_at_length(3.), DVec2::new(2., 2.));
		assert_eq!(contour.tangent_at_length(3.), DVec2::ZERO);
	}
}
