mod core;
mod lookup;
mod transform;

use crate::consts::*;
use crate::segment::Segment;

use glam::DVec2;
use std::fmt::{Debug, Formatter, Result};
use std::ops::Index;
use std::sync::Arc;

/// An ordered, continuous run of segments starting at `start`, optionally closed back onto it.
///
/// Each segment starts where the previous one ends, and the first starts at `start`. A contour without segments is a bare move-to.
/// Segments are immutable and held behind [Arc], so contours produced by trimming or cloning share the untouched ones.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour {
	start: DVec2,
	segments: Vec<Arc<Segment>>,
	closed: bool,
}

impl Index<usize> for Contour {
	type Output = Segment;

	fn index(&self, index: usize) -> &Self::Output {
		assert!(index < self.len(), "Index out of bounds in trait Index of Contour.");
		&self.segments[index]
	}
}

impl Debug for Contour {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		f.debug_struct("Contour").field("start", &self.start).field("closed", &self.closed).field("segments", &self.segments).finish()
	}
}
