use super::*;
use crate::utils::{dvec2_to_point, point_to_dvec2};

use kurbo::{PathEl, SvgArc};
use std::iter::Peekable;
use std::str::CharIndices;

const SVG_COMMANDS: &str = "MmLlHhVvQqTtCcSsAaZz";

impl Path {
	/// Return the SVG path data of the path: the data of each contour joined by spaces, such as `M0 0 L10 0 L10 10 L0 0 Z`.
	/// Only absolute `M`, `L`, `Q`, `C`, and `Z` commands are written, with numbers printed in their shortest exact form.
	pub fn to_svg_string(&self) -> String {
		let mut svg = String::new();
		for contour in self.iter() {
			if !svg.is_empty() {
				svg.push(' ');
			}
			let _ = contour.write_svg(&mut svg);
		}
		svg
	}

	/// Parse SVG path data, such as the `d` attribute of a `<path>` element.
	pub fn from_svg_string(data: &str) -> Result<Path, PathError> {
		Self::from_svg_string_with_options(data, FlattenOptions::default())
	}

	/// Parse SVG path data into a path whose curves are flattened with the given options.
	///
	/// Every command of the path data grammar is accepted in absolute and relative form, along with implicit repetition of the last command.
	/// Extra coordinate pairs after a move become lines, smooth curves reflect the previous control point, and elliptical arcs are converted into cubic segments.
	/// Either the whole string is parsed or an error is returned.
	pub fn from_svg_string_with_options(data: &str, options: FlattenOptions) -> Result<Path, PathError> {
		let mut parser = PathDataParser::new(data);
		let mut builder = PathBuilder::with_options(options);
		let mut last_cubic_handle: Option<DVec2> = None;
		let mut last_quadratic_handle: Option<DVec2> = None;

		while let Some(command) = parser.next_command()? {
			let relative = command.is_ascii_lowercase();
			let mut first = true;

			loop {
				let current = builder.current_point();
				let origin = if relative { current } else { DVec2::ZERO };
				let (mut cubic_handle, mut quadratic_handle) = (None, None);

				match command.to_ascii_uppercase() {
					'M' => {
						let point = origin + parser.parse_pair(command)?;
						if first {
							builder.move_to(point);
						} else {
							builder.add_linear(point);
						}
					}
					'L' => {
						builder.add_linear(origin + parser.parse_pair(command)?);
					}
					'H' => {
						let x = parser.parse_number(command)?;
						builder.add_linear(DVec2::new(origin.x + x, current.y));
					}
					'V' => {
						let y = parser.parse_number(command)?;
						builder.add_linear(DVec2::new(current.x, origin.y + y));
					}
					'Q' => {
						let handle = origin + parser.parse_pair(command)?;
						let point = origin + parser.parse_pair(command)?;
						builder.add_quadratic(handle, point);
						quadratic_handle = Some(handle);
					}
					'T' => {
						let handle = reflect_control_point(current, last_quadratic_handle.unwrap_or(current));
						let point = origin + parser.parse_pair(command)?;
						builder.add_quadratic(handle, point);
						quadratic_handle = Some(handle);
					}
					'C' => {
						let handle_start = origin + parser.parse_pair(command)?;
						let handle_end = origin + parser.parse_pair(command)?;
						let point = origin + parser.parse_pair(command)?;
						builder.add_cubic(handle_start, handle_end, point);
						cubic_handle = Some(handle_end);
					}
					'S' => {
						let handle_start = reflect_control_point(current, last_cubic_handle.unwrap_or(current));
						let handle_end = origin + parser.parse_pair(command)?;
						let point = origin + parser.parse_pair(command)?;
						builder.add_cubic(handle_start, handle_end, point);
						cubic_handle = Some(handle_end);
					}
					'A' => {
						let radii = parser.parse_pair(command)?;
						let rotation = parser.parse_number(command)?;
						let large_arc = parser.parse_flag(command)?;
						let sweep = parser.parse_flag(command)?;
						let point = origin + parser.parse_pair(command)?;
						add_arc(&mut builder, radii, rotation, large_arc, sweep, point);
					}
					// Close takes no arguments, so it is never repeated
					_ => {
						builder.close();
						last_cubic_handle = None;
						last_quadratic_handle = None;
						break;
					}
				}

				last_cubic_handle = cubic_handle;
				last_quadratic_handle = quadratic_handle;
				first = false;
				if !parser.has_number() {
					break;
				}
			}
		}

		Ok(builder.build())
	}
}

fn reflect_control_point(point: DVec2, control_point: DVec2) -> DVec2 {
	point * 2. - control_point
}

/// Append an elliptical arc from the current point as cubic segments. The rotation is in degrees.
/// An arc that kurbo cannot build, because a radius is zero or the end points coincide, becomes a line or nothing.
fn add_arc(builder: &mut PathBuilder, radii: DVec2, rotation: f64, large_arc: bool, sweep: bool, end: DVec2) {
	let start = builder.current_point();
	let svg_arc = SvgArc {
		from: dvec2_to_point(start),
		to: dvec2_to_point(end),
		radii: kurbo::Vec2::new(radii.x.abs(), radii.y.abs()),
		x_rotation: rotation.to_radians(),
		large_arc,
		sweep,
	};

	let Some(arc) = kurbo::Arc::from_svg_arc(&svg_arc) else {
		if start != end {
			log::debug!("Arc from {start} to {end} with radii {radii} is degenerate, adding a line instead");
			builder.add_linear(end);
		}
		return;
	};

	let cubics = arc
		.append_iter(builder.options().tolerance)
		.filter_map(|element| match element {
			PathEl::CurveTo(handle_start, handle_end, point) => Some((point_to_dvec2(handle_start), point_to_dvec2(handle_end), point_to_dvec2(point))),
			_ => None,
		})
		.collect::<Vec<_>>();

	add_arc_cubics(builder, cubics, end);
}

/// Append the cubics approximating an arc, snapping the last one onto `end`. Without any cubics a line to `end` is added instead.
fn add_arc_cubics(builder: &mut PathBuilder, cubics: Vec<(DVec2, DVec2, DVec2)>, end: DVec2) {
	if cubics.is_empty() {
		if builder.current_point() != end {
			log::debug!("Arc to {end} produced no curves, adding a line instead");
			builder.add_linear(end);
		}
		return;
	}

	let last_index = cubics.len() - 1;
	for (index, (handle_start, handle_end, point)) in cubics.into_iter().enumerate() {
		// The last cubic ends exactly on the requested end point
		let point = if index == last_index { end } else { point };
		builder.add_cubic(handle_start, handle_end, point);
	}
}

/// On-demand scanner over SVG path data which reports byte offsets for errors.
struct PathDataParser<'a> {
	input: &'a str,
	chars: Peekable<CharIndices<'a>>,
}

impl<'a> PathDataParser<'a> {
	fn new(input: &'a str) -> Self {
		Self { input, chars: input.char_indices().peekable() }
	}

	fn position(&mut self) -> usize {
		self.chars.peek().map_or(self.input.len(), |&(index, _)| index)
	}

	fn skip_whitespace_and_commas(&mut self) {
		while self.chars.next_if(|&(_, c)| c.is_whitespace() || c == ',').is_some() {}
	}

	/// Returns the next command letter, or `None` at the end of the input.
	fn next_command(&mut self) -> Result<Option<char>, PathError> {
		self.skip_whitespace_and_commas();
		let Some(&(position, c)) = self.chars.peek() else { return Ok(None) };

		if SVG_COMMANDS.contains(c) {
			self.chars.next();
			return Ok(Some(c));
		}
		if is_number_start(c) {
			let token = self.scan_number().to_string();
			return Err(PathError::ExpectedCommand { token, position });
		}
		Err(PathError::UnexpectedCharacter { character: c, position })
	}

	fn has_number(&mut self) -> bool {
		self.skip_whitespace_and_commas();
		self.chars.peek().is_some_and(|&(_, c)| is_number_start(c))
	}

	/// Consume the longest prefix shaped like a number: sign, digits, fraction, and exponent.
	fn scan_number(&mut self) -> &'a str {
		let start = self.position();
		self.chars.next_if(|&(_, c)| c == '+' || c == '-');
		while self.chars.next_if(|&(_, c)| c.is_ascii_digit()).is_some() {}
		if self.chars.next_if(|&(_, c)| c == '.').is_some() {
			while self.chars.next_if(|&(_, c)| c.is_ascii_digit()).is_some() {}
		}
		if self.chars.next_if(|&(_, c)| c == 'e' || c == 'E').is_some() {
			self.chars.next_if(|&(_, c)| c == '+' || c == '-');
			while self.chars.next_if(|&(_, c)| c.is_ascii_digit()).is_some() {}
		}
		let end = self.position();
		&self.input[start..end]
	}

	fn parse_number(&mut self, command: char) -> Result<f64, PathError> {
		self.skip_whitespace_and_commas();
		let position = self.position();
		let token = self.scan_number();
		if token.is_empty() {
			return Err(PathError::MissingArgument { command, position });
		}
		match token.parse::<f64>() {
			Ok(value) if value.is_finite() => Ok(value),
			_ => Err(PathError::InvalidNumber { token: token.to_string(), position }),
		}
	}

	fn parse_pair(&mut self, command: char) -> Result<DVec2, PathError> {
		let x = self.parse_number(command)?;
		let y = self.parse_number(command)?;
		Ok(DVec2::new(x, y))
	}

	/// Arc flags are single characters and may be written without separators, as in `a1 1 0 00 1 1`.
	fn parse_flag(&mut self, command: char) -> Result<bool, PathError> {
		self.skip_whitespace_and_commas();
		match self.chars.peek().copied() {
			Some((_, '0')) => {
				self.chars.next();
				Ok(false)
			}
			Some((_, '1')) => {
				self.chars.next();
				Ok(true)
			}
			Some((position, c)) if is_number_start(c) => Err(PathError::InvalidFlag { token: self.scan_number().to_string(), position }),
			_ => Err(PathError::MissingArgument { command, position: self.position() }),
		}
	}
}

fn is_number_start(c: char) -> bool {
	c.is_ascii_digit() || matches!(c, '+' | '-' | '.')
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};
	use crate::segment::SegmentHandles;
	use pretty_assertions::assert_eq;

	#[test]
	fn to_svg_string() {
		let path = Path::builder()
			.move_to(DVec2::ZERO)
			.add_linear(DVec2::new(10., 0.))
			.add_linear(DVec2::new(10., 10.))
			.close()
			.move_to(DVec2::new(0.5, -2.25))
			.add_quadratic(DVec2::new(1., 1.), DVec2::new(2., 0.))
			.add_cubic(DVec2::new(3., 1.), DVec2::new(4., -1.), DVec2::new(5., 1e-7))
			.build();
		assert_eq!(path.to_svg_string(), "M0 0 L10 0 L10 10 L0 0 Z M0.5 -2.25 Q1 1 2 0 C3 1 4 -1 5 0.0000001");
		assert_eq!(path.to_string(), path.to_svg_string());
		assert_eq!(Path::new().to_svg_string(), "");
	}

	#[test]
	fn parse_absolute_commands() {
		let path = Path::from_svg_string("M0 0 L10 0 L10 10 L0 0 Z").unwrap();
		assert_eq!(path.len(), 1);
		assert_eq!(path.contours()[0].len(), 3);
		assert!(path.contours()[0].closed());
		assert_eq!(path.to_svg_string(), "M0 0 L10 0 L10 10 L0 0 Z");
	}

	#[test]
	fn parse_relative_and_shorthand_commands() {
		let path: Path = "m10,10 h10 v10 h-10 z".parse().unwrap();
		assert_eq!(path.to_svg_string(), "M10 10 L20 10 L20 20 L10 20 L10 10 Z");

		let path = Path::from_svg_string("M1 2 H5 V6").unwrap();
		assert_eq!(path.to_svg_string(), "M1 2 L5 2 L5 6");
	}

	#[test]
	fn parse_implicit_repetition() {
		let path = Path::from_svg_string("M0 0 10 0 10 10 L20 20 30 30").unwrap();
		assert_eq!(path.to_svg_string(), "M0 0 L10 0 L10 10 L20 20 L30 30");

		let path = Path::from_svg_string("m1 1 2 2 3 3").unwrap();
		assert_eq!(path.to_svg_string(), "M1 1 L3 3 L6 6");

		let path = Path::from_svg_string("M0 0 Q1 1 2 0 3 -1 4 0").unwrap();
		assert_eq!(path.contours()[0].len(), 2);
	}

	#[test]
	fn parse_compact_numbers() {
		let path = Path::from_svg_string("M.5.5L-1-1l1e1,2E-1").unwrap();
		assert_eq!(path.contours()[0].start(), DVec2::new(0.5, 0.5));
		assert_eq!(path.contours()[0][0].end(), DVec2::new(-1., -1.));
		assert!(compare_points(path.contours()[0][1].end(), DVec2::new(9., -0.8)));
	}

	#[test]
	fn parse_smooth_commands() {
		let path = Path::from_svg_string("M0 0 C0 10 10 10 10 0 S20 -10 20 0").unwrap();
		let smooth = &path.contours()[0][1];
		assert_eq!(smooth.handles(), SegmentHandles::Cubic { handle_start: DVec2::new(10., -10.), handle_end: DVec2::new(20., -10.) });

		let path = Path::from_svg_string("M0 0 Q5 10 10 0 T20 0").unwrap();
		assert_eq!(path.contours()[0][1].handles(), SegmentHandles::Quadratic { handle: DVec2::new(15., -10.) });

		// Without a previous curve of the same kind the reflected handle is the current point
		let path = Path::from_svg_string("M0 0 L10 0 S20 10 20 0").unwrap();
		assert_eq!(path.contours()[0][1].handle_start(), Some(DVec2::new(10., 0.)));
		let path = Path::from_svg_string("M0 0 C0 10 10 10 10 0 T20 0").unwrap();
		assert_eq!(path.contours()[0][1].handle_start(), Some(DVec2::new(10., 0.)));
	}

	#[test]
	fn parse_arcs() {
		// Half circle of radius 10 from (0, 0) to (20, 0)
		let path = Path::from_svg_string("M0 0 A10 10 0 0 1 20 0").unwrap();
		let contour = &path.contours()[0];
		assert!(contour.len() >= 2);
		assert!(contour.iter().all(|segment| segment.handles().end().is_some()));
		assert_eq!(contour.end(), DVec2::new(20., 0.));
		assert!((contour.length() - std::f64::consts::PI * 10.).abs() < 0.05);

		// Flags written without separators
		let compact = Path::from_svg_string("M0 0a10 10 0 0120 0").unwrap();
		assert!(compare_f64s(compact.length(), path.length()));
	}

	#[test]
	fn parse_degenerate_arcs() {
		let line = Path::from_svg_string("M0 0 A0 5 0 0 1 10 0").unwrap();
		assert_eq!(line.to_svg_string(), "M0 0 L10 0");

		let nothing = Path::from_svg_string("M3 3 A5 5 0 0 1 3 3").unwrap();
		assert_eq!(nothing.to_svg_string(), "M3 3");
	}

	#[test]
	fn arc_without_curves_reaches_its_end() {
		let mut builder = PathBuilder::new();
		builder.move_to(DVec2::new(1., 2.));
		add_arc_cubics(&mut builder, Vec::new(), DVec2::new(8., 2.));
		add_arc_cubics(&mut builder, Vec::new(), DVec2::new(8., 2.));
		assert_eq!(builder.build().to_svg_string(), "M1 2 L8 2");

		let mut builder = PathBuilder::new();
		builder.move_to(DVec2::ZERO);
		add_arc_cubics(&mut builder, vec![(DVec2::new(0., 5.), DVec2::new(5., 10.), DVec2::new(10., 10.000001))], DVec2::new(10., 10.));
		assert_eq!(builder.build().contours()[0].end(), DVec2::new(10., 10.));
	}

	#[test]
	fn parse_commands_after_close() {
		let path = Path::from_svg_string("M5 5 L10 5 Z l0 5").unwrap();
		assert_eq!(path.len(), 2);
		assert_eq!(path.contours()[1].start(), DVec2::new(5., 5.));
		assert_eq!(path.contours()[1].end(), DVec2::new(5., 10.));
	}

	#[test]
	fn parse_empty_input() {
		assert_eq!(Path::from_svg_string(""), Ok(Path::new()));
		assert_eq!(Path::from_svg_string("  \n "), Ok(Path::new()));
	}

	#[test]
	fn parse_errors() {
		assert_eq!(Path::from_svg_string("M0 0 X5"), Err(PathError::UnexpectedCharacter { character: 'X', position: 5 }));
		assert_eq!(Path::from_svg_string("10 10"), Err(PathError::ExpectedCommand { token: "10".to_string(), position: 0 }));
		assert_eq!(Path::from_svg_string("M0 0 L5"), Err(PathError::MissingArgument { command: 'L', position: 7 }));
		assert_eq!(Path::from_svg_string("M0 0 L5 Z"), Err(PathError::MissingArgument { command: 'L', position: 8 }));
		assert_eq!(Path::from_svg_string("M0 0 L1e 5"), Err(PathError::InvalidNumber { token: "1e".to_string(), position: 6 }));
		assert_eq!(Path::from_svg_string("M0 0 L- 5"), Err(PathError::InvalidNumber { token: "-".to_string(), position: 6 }));
		assert_eq!(
			Path::from_svg_string("M0 0 A5 5 0 2 1 10 0"),
			Err(PathError::InvalidFlag { token: "2".to_string(), position: 12 })
		);
		assert_eq!(Path::from_svg_string("M0 0 Z 5 5"), Err(PathError::ExpectedCommand { token: "5".to_string(), position: 7 }));
		assert_eq!(Path::from_svg_string("M0 0 L1e999 5"), Err(PathError::InvalidNumber { token: "1e999".to_string(), position: 6 }));
	}

	#[test]
	fn round_trip_is_lossless() {
		let path = Path::builder()
			.move_to(DVec2::new(0.1, 0.2))
			.add_cubic(DVec2::new(1. / 3., 2. / 3.), DVec2::new(1e-10, -7.25), DVec2::new(123456.789, 0.3))
			.add_quadratic(DVec2::new(-0.000001, 5.), DVec2::new(0.1, 0.2))
			.close()
			.build();
		let svg = path.to_svg_string();
		let parsed = Path::from_svg_string(&svg).unwrap();
		assert_eq!(parsed, path);
		assert_eq!(parsed.to_svg_string(), svg);
	}
}
