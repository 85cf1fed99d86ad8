// Implementation constants
/// Constant used to determine if `f64`s are equivalent.
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;
/// Slack allowed when comparing accumulated arc lengths against trim bounds.
pub const LENGTH_EPSILON: f64 = 1e-9;

// Flattening defaults
/// Maximum distance between a curve and its polyline at the midpoint of every polyline span.
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.01;
/// Subdivision depth reached before the flatness test may accept a span, so that S-shaped cubics are not accepted as a single chord.
pub const DEFAULT_FLATTEN_MIN_DEPTH: usize = 2;
/// Subdivision depth after which a span is accepted regardless of flatness.
pub const DEFAULT_FLATTEN_MAX_DEPTH: usize = 16;

// SVG constants
pub const SVG_ARG_CLOSED: &str = "Z";
pub const SVG_ARG_CUBIC: &str = "C";
pub const SVG_ARG_LINEAR: &str = "L";
pub const SVG_ARG_MOVE: &str = "M";
pub const SVG_ARG_QUADRATIC: &str = "Q";
