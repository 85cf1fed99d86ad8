//! Approximate comparison helpers shared by the unit tests.
use crate::consts::MAX_ABSOLUTE_DIFFERENCE;
use crate::Segment;

use glam::DVec2;

pub fn compare_f64s(f1: f64, f2: f64) -> bool {
	(f1 - f2).abs() < MAX_ABSOLUTE_DIFFERENCE
}

pub fn compare_points(p1: DVec2, p2: DVec2) -> bool {
	p1.abs_diff_eq(p2, MAX_ABSOLUTE_DIFFERENCE)
}

pub fn compare_segments(s1: &Segment, s2: &Segment) -> bool {
	s1.abs_diff_eq(s2, MAX_ABSOLUTE_DIFFERENCE)
}

pub fn compare_cmds(a: &[f64], b: &[f64]) -> bool {
	a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < MAX_ABSOLUTE_DIFFERENCE)
}
