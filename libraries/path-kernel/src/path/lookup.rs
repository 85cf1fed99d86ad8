use super::*;
use crate::utils::clamp_or_min;

/// Functionality relating to looking up properties of the `Path` or points along the `Path`.
impl Path {
	/// Return the sum of the lengths of each contour in the path.
	pub fn length(&self) -> f64 {
		self.iter().map(|contour| contour.length()).sum()
	}

	/// Find the contour containing the given distance along the path, returning its index and the distance remaining within it.
	/// The distance is clamped to the path's length. A distance that lands between two contours resolves to the end of the earlier one.
	pub fn contour_at_length(&self, length: f64) -> Option<(usize, f64)> {
		let last_index = self.contours.len().checked_sub(1)?;
		let length = clamp_or_min(length, 0., self.length());

		let mut accumulator = 0.;
		for (index, contour) in self.iter().enumerate() {
			let contour_length = contour.length();
			if length <= accumulator + contour_length || index == last_index {
				return Some((index, (length - accumulator).clamp(0., contour_length)));
			}
			accumulator += contour_length;
		}
		None
	}

	/// Returns the point at the given distance along the path, or `None` if the path has no contours.
	pub fn point_at_length(&self, length: f64) -> Option<DVec2> {
		self.contour_at_length(length).map(|(index, local_length)| self.contours[index].point_at_length(local_length))
	}

	/// Returns the non-normalized derivative at the given distance along the path, or `None` if the path has no contours.
	pub fn tangent_at_length(&self, length: f64) -> Option<DVec2> {
		self.contour_at_length(length).map(|(index, local_length)| self.contours[index].tangent_at_length(local_length))
	}
}
