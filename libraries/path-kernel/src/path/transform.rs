use super::*;
use crate::consts::LENGTH_EPSILON;
use crate::segment::SegmentHandles;
use crate::utils::{clamp_or_min, dvec2_to_point};

use glam::DAffine2;
use kurbo::BezPath;

/// Functionality that derives new paths from an existing `Path`.
impl Path {
	/// Returns the part of the path between two fractions of its total length.
	///
	/// Both fractions are clamped to `[0, 1]`, with NaN treated as `0`. If `start_fraction` is greater than `stop_fraction` the result is empty.
	/// Contours entirely inside the range are kept as they are, contours straddling a bound are cut with [Contour::trim], and the rest are dropped.
	/// Zero-length contours are kept when they sit inside the range, so `trim(0., 1.)` reproduces the path.
	pub fn trim(&self, start_fraction: f64, stop_fraction: f64) -> Path {
		let start_fraction = clamp_or_min(start_fraction, 0., 1.);
		let stop_fraction = clamp_or_min(stop_fraction, 0., 1.);
		if start_fraction > stop_fraction {
			log::debug!("Trim fractions {start_fraction}..{stop_fraction} are reversed, returning an empty path");
			return Path::new();
		}

		let total_length = self.length();
		let (start, stop) = (start_fraction * total_length, stop_fraction * total_length);
		let empty_range = stop - start <= LENGTH_EPSILON;

		let mut contours = Vec::new();
		let mut accumulator = 0.;
		for contour in &self.contours {
			let contour_length = contour.length();
			let (contour_start, contour_end) = (accumulator, accumulator + contour_length);
			accumulator = contour_end;

			if contour_length <= 0. {
				if contour_start >= start - LENGTH_EPSILON && contour_start <= stop + LENGTH_EPSILON {
					contours.push(contour.clone());
				}
				continue;
			}

			// Skip contours that at most touch the range
			if empty_range || contour_end <= start + LENGTH_EPSILON || contour_start >= stop - LENGTH_EPSILON {
				continue;
			}

			if contour_start >= start - LENGTH_EPSILON && contour_end <= stop + LENGTH_EPSILON {
				contours.push(contour.clone());
			} else {
				let local_start = if start > contour_start { start - contour_start } else { 0. };
				let local_stop = if stop < contour_end { stop - contour_start } else { contour_length };
				contours.push(contour.trim(local_start, local_stop));
			}
		}

		Path::from_contours(contours)
	}

	/// Returns the path with every point mapped through the affine transform.
	#[must_use]
	pub fn apply_transform(&self, transform: DAffine2) -> Path {
		self.iter().map(|contour| contour.apply_transformation(|point| transform.transform_point2(point))).collect()
	}

	/// Convert the path into a [BezPath] for renderers of the kurbo ecosystem.
	pub fn to_bezpath(&self) -> BezPath {
		let mut bezpath = BezPath::new();
		for contour in self.iter() {
			bezpath.move_to(dvec2_to_point(contour.start()));
			for segment in contour.iter() {
				let end = dvec2_to_point(segment.end());
				match segment.handles() {
					SegmentHandles::Linear => bezpath.line_to(end),
					SegmentHandles::Quadratic { handle } => bezpath.quad_to(dvec2_to_point(handle), end),
					SegmentHandles::Cubic { handle_start, handle_end } => bezpath.curve_to(dvec2_to_point(handle_start), dvec2_to_point(handle_end), end),
				}
			}
			if contour.closed() {
				bezpath.close_path();
			}
		}
		bezpath
	}
}
