//! Path-kernel: arc-length geometry for paths built from line, quadratic, and cubic segments
#[cfg(test)]
pub(crate) mod compare;

mod consts;
mod contour;
mod error;
mod path;
mod polyline;
mod segment;
mod structs;
mod utils;

pub use consts::{DEFAULT_FLATTEN_TOLERANCE, LENGTH_EPSILON};
pub use contour::*;
pub use error::PathError;
pub use path::*;
pub use polyline::Polyline;
pub use segment::*;
pub use structs::FlattenOptions;
