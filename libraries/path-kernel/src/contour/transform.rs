use super::*;
use crate::utils::clamp_or_min;

/// Functionality that derives new contours from an existing `Contour`.
impl Contour {
	/// Returns the part of the contour between the distances `start` and `stop`, both clamped to the contour's length.
	///
	/// Segments lying entirely inside the range are shared with this contour, and the ones straddling a bound are cut with [Segment::segment].
	/// Zero-length segments are kept when they sit inside the range. The result is closed only when this contour is closed and the range covers all of it.
	/// An empty or reversed range gives a contour without segments located at `start`.
	pub fn trim(&self, start: f64, stop: f64) -> Contour {
		let total_length = self.length();
		let start = clamp_or_min(start, 0., total_length);
		let stop = clamp_or_min(stop, 0., total_length);
		if stop < start {
			log::debug!("Contour range {start}..{stop} is reversed, returning an empty contour");
			return Contour::new(self.point_at_length(start));
		}

		let empty_range = stop - start <= LENGTH_EPSILON;
		let mut segments = Vec::new();
		let mut accumulator = 0.;
		for segment in &self.segments {
			let segment_length = segment.length();
			let (segment_start, segment_end) = (accumulator, accumulator + segment_length);
			accumulator = segment_end;

			if segment_length <= 0. {
				if segment_start >= start - LENGTH_EPSILON && segment_start <= stop + LENGTH_EPSILON {
					segments.push(segment.clone());
				}
				continue;
			}

			// Skip segments that at most touch the range
			if empty_range || segment_end <= start + LENGTH_EPSILON || segment_start >= stop - LENGTH_EPSILON {
				continue;
			}

			if segment_start >= start - LENGTH_EPSILON && segment_end <= stop + LENGTH_EPSILON {
				segments.push(segment.clone());
			} else {
				let local_start = if start > segment_start { start - segment_start } else { 0. };
				let local_stop = if stop < segment_end { stop - segment_start } else { segment_length };
				segments.push(Arc::new(segment.segment(local_start, local_stop)));
			}
		}

		let Some(first) = segments.first() else {
			return Contour::new(self.point_at_length(start));
		};
		let closed = self.closed && start <= LENGTH_EPSILON && stop >= total_length - LENGTH_EPSILON;

		Contour::from_parts(first.start(), segments, closed)
	}

	/// Returns a contour that results from applying the transformation function to each point of every segment.
	#[must_use]
	pub fn apply_transformation(&self, transformation_function: impl Fn(DVec2) -> DVec2) -> Contour {
		let segments = self.iter().map(|segment| Arc::new(segment.apply_transformation(&transformation_function))).collect();
		Contour::from_parts(transformation_function(self.start), segments, self.closed)
	}
}
