use crate::consts::{DEFAULT_FLATTEN_MAX_DEPTH, DEFAULT_FLATTEN_MIN_DEPTH, DEFAULT_FLATTEN_TOLERANCE};

/// Struct to represent the parameters used when a segment is flattened into its [crate::Polyline].
/// Each segment keeps the options it was created with, and segments derived from it (through `segment`, `split`, or `apply_transformation`) inherit them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlattenOptions {
	/// Maximum distance between the curve and the chord midpoint of each accepted polyline span. The default value is `0.01`.
	pub tolerance: f64,
	/// Number of subdivisions performed before a span may be accepted as flat. The default value is `2`.
	pub min_depth: usize,
	/// Number of subdivisions after which a span is accepted even if it is not flat. The default value is `16`.
	pub max_depth: usize,
}

impl Default for FlattenOptions {
	fn default() -> Self {
		Self {
			tolerance: DEFAULT_FLATTEN_TOLERANCE,
			min_depth: DEFAULT_FLATTEN_MIN_DEPTH,
			max_depth: DEFAULT_FLATTEN_MAX_DEPTH,
		}
	}
}

impl FlattenOptions {
	/// Create options with the given tolerance and the default depth limits.
	pub fn with_tolerance(tolerance: f64) -> Self {
		Self { tolerance, ..Default::default() }
	}

	/// Returns the options with a usable tolerance and a `max_depth` no smaller than `min_depth`.
	pub(crate) fn sanitized(self) -> Self {
		let tolerance = if self.tolerance.is_finite() && self.tolerance > 0. { self.tolerance } else { DEFAULT_FLATTEN_TOLERANCE };
		Self {
			tolerance,
			min_depth: self.min_depth,
			max_depth: self.max_depth.max(self.min_depth),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sanitized_replaces_unusable_tolerance() {
		let options = FlattenOptions { tolerance: -1., min_depth: 4, max_depth: 2 }.sanitized();
		assert_eq!(options.tolerance, DEFAULT_FLATTEN_TOLERANCE);
		assert_eq!(options.max_depth, 4);

		let nan = FlattenOptions::with_tolerance(f64::NAN).sanitized();
		assert_eq!(nan.tolerance, DEFAULT_FLATTEN_TOLERANCE);
	}
}
