//! The core object protocol of a dynamically-typed runtime.
//!
//! Two independent pieces live here:
//! - [`convert`], which coerces arbitrary values into one of the canonical types (integers,
//!   floats, lists, maps and text) by probing the conversion members a value responds to.
//! - [`members`], which computes the member names visible on a value, partitioned by visibility
//!   and by whether they come from the value's own specialization layer or its declared type.
//!
//! Both operate on the object model in [`value`].
#![allow(
	clippy::wildcard_imports, // used in `funcs` modules

	// TODOS:
	clippy::missing_errors_doc,
	clippy::missing_panics_doc,

	// Things that could be issues but aren't
	clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss,
	clippy::cast_precision_loss,

	// Simply my coding style, bite me clippy
	clippy::module_inception,
	clippy::module_name_repetitions,
)]

extern crate static_assertions as sa;

#[macro_use]
extern crate tracing;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[macro_use]
extern crate objcore_macros;

mod error;

pub mod convert;
pub mod members;
pub mod value;

pub use error::{Error, ErrorKind, Family, Result};
pub use value::{Intern, Symbol, ToValue, Value};
