use glam::DVec2;

/// Clamp `value` into `[min, max]`, mapping NaN to `min`.
pub fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
	if value.is_nan() { min } else { value.clamp(min, max) }
}

/// Interpolate between two points with the Bernstein form `(1 - t) a + t b`, which returns `a` and `b` exactly at `t = 0` and `t = 1`.
pub fn bernstein_lerp(a: DVec2, b: DVec2, t: f64) -> DVec2 {
	(1. - t) * a + t * b
}

pub fn dvec2_to_point(value: DVec2) -> kurbo::Point {
	kurbo::Point { x: value.x, y: value.y }
}

pub fn point_to_dvec2(point: kurbo::Point) -> DVec2 {
	DVec2 { x: point.x, y: point.y }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clamp_or_min() {
		assert_eq!(clamp_or_min(f64::NAN, 0., 1.), 0.);
		assert_eq!(clamp_or_min(1.2, 0., 1.), 1.);
		assert_eq!(clamp_or_min(-0.2, 0., 1.), 0.);
		assert_eq!(clamp_or_min(0.4, 0., 1.), 0.4);
	}

	#[test]
	fn test_bernstein_lerp_is_exact_at_the_ends() {
		let a = DVec2::new(0.1, 0.7);
		let b = DVec2::new(13.3, -2.9);
		assert_eq!(bernstein_lerp(a, b, 0.), a);
		assert_eq!(bernstein_lerp(a, b, 1.), b);
		assert!((bernstein_lerp(a, b, 0.5).x - 6.7).abs() < 1e-12);
	}
}
