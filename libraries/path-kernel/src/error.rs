use thiserror::Error;

/// The error type returned when a path is decoded from SVG path data or from a command buffer.
/// Positions in SVG variants are byte offsets into the input string; indices in command buffer variants are offsets into the `f64` slice.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PathError {
	#[error("Unexpected character '{character}' at position {position}")]
	UnexpectedCharacter { character: char, position: usize },

	#[error("Invalid number '{token}' at position {position}")]
	InvalidNumber { token: String, position: usize },

	#[error("Command '{command}' at position {position} is missing an argument")]
	MissingArgument { command: char, position: usize },

	#[error("Expected a path command at position {position}, found '{token}'")]
	ExpectedCommand { token: String, position: usize },

	#[error("Invalid arc flag '{token}' at position {position}, expected '0' or '1'")]
	InvalidFlag { token: String, position: usize },

	#[error("Unknown verb {value} at index {index} of the command buffer")]
	UnknownVerb { value: f64, index: usize },

	#[error("Verb {verb} at index {index} of the command buffer is not supported")]
	UnsupportedVerb { verb: String, index: usize },

	#[error("Verb {verb} at index {index} of the command buffer expects {expected} coordinates, but only {found} remain")]
	TruncatedCommand { verb: String, index: usize, expected: usize, found: usize },

	#[error("Verb {verb} at index {index} of the command buffer has the non-finite coordinate {value}")]
	NonFiniteCoordinate { verb: String, index: usize, value: f64 },
}
