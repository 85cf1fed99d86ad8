mod builder;
mod commands;
mod lookup;
mod svg;
mod transform;

pub use builder::PathBuilder;
pub use commands::PathVerb;

use crate::contour::Contour;
use crate::error::PathError;
use crate::structs::FlattenOptions;

use glam::DVec2;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// An immutable shape made of contours, drawn in order.
///
/// Build one with [Path::builder], or decode it from SVG path data or a command buffer. Cloning a path shares its segments.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
	contours: Vec<Contour>,
}

impl Path {
	/// Create a path without any contours.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_contours(contours: Vec<Contour>) -> Self {
		Self { contours }
	}

	/// Start building a path with the default flatten options.
	pub fn builder() -> PathBuilder {
		PathBuilder::new()
	}

	pub fn contours(&self) -> &[Contour] {
		&self.contours
	}

	/// Returns an iterator over the contours of the path.
	pub fn iter(&self) -> impl Iterator<Item = &Contour> {
		self.contours.iter()
	}

	/// Number of contours.
	pub fn len(&self) -> usize {
		self.contours.len()
	}

	/// Returns true when the path has no contours.
	pub fn is_empty(&self) -> bool {
		self.contours.is_empty()
	}

	pub fn into_contours(self) -> Vec<Contour> {
		self.contours
	}
}

impl Display for Path {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_svg_string())
	}
}

impl FromStr for Path {
	type Err = PathError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Path::from_svg_string(s)
	}
}

impl FromIterator<Contour> for Path {
	fn from_iter<T: IntoIterator<Item = Contour>>(iter: T) -> Self {
		Self::from_contours(iter.into_iter().collect())
	}
}
