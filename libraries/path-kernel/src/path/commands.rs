use super::*;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Verb tags of the flat command buffer produced by [Path::to_cmds].
/// Each tag is followed by its coordinates; `Close` takes none.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
pub enum PathVerb {
	Move = 0,
	Line = 1,
	Quad = 2,
	/// Reserved for rational quadratics, which paths cannot hold.
	Conic = 3,
	Cubic = 4,
	Close = 5,
}

impl PathVerb {
	/// The value written to a command buffer for this verb.
	pub fn tag(self) -> f64 {
		f64::from(u8::from(self))
	}

	/// Decode a command buffer value, which must be a whole number naming a known verb.
	pub fn from_tag(value: f64) -> Option<Self> {
		if value.fract() != 0. || !(0. ..=f64::from(u8::MAX)).contains(&value) {
			return None;
		}
		Self::try_from(value as u8).ok()
	}

	/// Number of coordinates following the verb in a command buffer.
	pub fn argument_count(self) -> usize {
		match self {
			PathVerb::Move | PathVerb::Line => 2,
			PathVerb::Quad => 4,
			PathVerb::Conic => 5,
			PathVerb::Cubic => 6,
			PathVerb::Close => 0,
		}
	}
}

impl Path {
	/// Return the command buffer encoding of the path, which is the concatenation of the encoding of each contour.
	pub fn to_cmds(&self) -> Vec<f64> {
		let mut cmds = Vec::new();
		for contour in self.iter() {
			contour.write_cmds(&mut cmds);
		}
		cmds
	}

	/// Decode a command buffer produced by [Path::to_cmds] or by a renderer using the same verb tags.
	pub fn from_cmds(cmds: &[f64]) -> Result<Path, PathError> {
		Self::from_cmds_with_options(cmds, FlattenOptions::default())
	}

	/// Decode a command buffer into a path whose curves are flattened with the given options.
	/// Commands with a NaN or infinite coordinate are rejected.
	pub fn from_cmds_with_options(cmds: &[f64], options: FlattenOptions) -> Result<Path, PathError> {
		let mut builder = PathBuilder::with_options(options);
		let mut index = 0;

		while let Some(&value) = cmds.get(index) {
			let verb = PathVerb::from_tag(value).ok_or(PathError::UnknownVerb { value, index })?;
			let expected = verb.argument_count();
			let arguments = cmds.get(index + 1..index + 1 + expected).ok_or_else(|| PathError::TruncatedCommand {
				verb: format!("{verb:?}"),
				index,
				expected,
				found: cmds.len() - index - 1,
			})?;
			if let Some(&value) = arguments.iter().find(|value| !value.is_finite()) {
				log::warn!("Rejecting {verb:?} at index {index} of the command buffer with coordinates {arguments:?}");
				return Err(PathError::NonFiniteCoordinate { verb: format!("{verb:?}"), index, value });
			}
			let point = |offset: usize| DVec2::new(arguments[offset], arguments[offset + 1]);

			match verb {
				PathVerb::Move => builder.move_to(point(0)),
				PathVerb::Line => builder.add_linear(point(0)),
				PathVerb::Quad => builder.add_quadratic(point(0), point(2)),
				PathVerb::Cubic => builder.add_cubic(point(0), point(2), point(4)),
				PathVerb::Close => builder.close(),
				PathVerb::Conic => return Err(PathError::UnsupportedVerb { verb: format!("{verb:?}"), index }),
			};

			index += 1 + expected;
		}

		Ok(builder.build())
	}
}
