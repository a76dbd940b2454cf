//! Path parameter converters.
//!
//! A converter turns one raw captured segment into a typed [`ParamValue`].
//! The recognized grammars are deliberately narrow: a segment that fails
//! its parameter's grammar means the URL does not name a valid route, so
//! the dispatcher reports the failure as a missing route rather than a
//! server error.
//!
//! Grammars:
//!
//! - int: `[0-9]+` (unsigned digits only)
//! - float: `[0-9]+` optionally followed by `.` and `[0-9]+`
//! - bool: `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off`, case-insensitive
//! - string: any segment, unchanged

use grappelli_http::{ParamType, ParamValue};
use thiserror::Error;

/// A raw segment value that failed its parameter's grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("expected {expected} value, got `{raw}`")]
pub struct ConverterError {
	pub expected: &'static str,
	pub raw: String,
}

impl ConverterError {
	fn new(expected: &'static str, raw: &str) -> Self {
		Self {
			expected,
			raw: raw.to_string(),
		}
	}
}

pub type ConverterResult<T> = std::result::Result<T, ConverterError>;

/// Converts one captured path segment into a typed value.
pub trait Converter: Send + Sync {
	fn convert(&self, raw: &str) -> ConverterResult<ParamValue>;

	/// Human-readable type name used in error bodies.
	fn type_name(&self) -> &'static str;
}

/// Pass-through converter for `string` parameters.
pub struct StrConverter;

impl Converter for StrConverter {
	fn convert(&self, raw: &str) -> ConverterResult<ParamValue> {
		Ok(ParamValue::Str(raw.to_string()))
	}

	fn type_name(&self) -> &'static str {
		"string"
	}
}

/// Converter for `int` parameters: unsigned digit runs only.
pub struct IntegerConverter;

impl Converter for IntegerConverter {
	fn convert(&self, raw: &str) -> ConverterResult<ParamValue> {
		if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
			return Err(ConverterError::new(self.type_name(), raw));
		}
		// A digit run longer than i64 still isn't a routable id
		raw.parse::<i64>()
			.map(ParamValue::Int)
			.map_err(|_| ConverterError::new(self.type_name(), raw))
	}

	fn type_name(&self) -> &'static str {
		"int"
	}
}

/// Converter for `float` parameters: integer or decimal literal.
pub struct FloatConverter;

impl Converter for FloatConverter {
	fn convert(&self, raw: &str) -> ConverterResult<ParamValue> {
		let (int_part, frac_part) = match raw.split_once('.') {
			Some((i, f)) => (i, Some(f)),
			None => (raw, None),
		};
		let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
		if !digits(int_part) || !frac_part.is_none_or(digits) {
			return Err(ConverterError::new(self.type_name(), raw));
		}
		raw.parse::<f64>()
			.map(ParamValue::Float)
			.map_err(|_| ConverterError::new(self.type_name(), raw))
	}

	fn type_name(&self) -> &'static str {
		"float"
	}
}

/// Converter for `bool` parameters: permissive literal recognition.
pub struct BoolConverter;

impl Converter for BoolConverter {
	fn convert(&self, raw: &str) -> ConverterResult<ParamValue> {
		match raw.to_ascii_lowercase().as_str() {
			"1" | "true" | "yes" | "on" => Ok(ParamValue::Bool(true)),
			"0" | "false" | "no" | "off" => Ok(ParamValue::Bool(false)),
			_ => Err(ConverterError::new(self.type_name(), raw)),
		}
	}

	fn type_name(&self) -> &'static str {
		"bool"
	}
}

/// Look up the converter for a declared parameter type.
///
/// Returns `None` for [`ParamType::Other`]: such parameters cannot be
/// coerced from a path segment at all, which the dispatcher reports as a
/// configuration error rather than a bad request.
pub fn converter_for(ty: &ParamType) -> Option<&'static dyn Converter> {
	match ty {
		ParamType::Str => Some(&StrConverter),
		ParamType::Int => Some(&IntegerConverter),
		ParamType::Float => Some(&FloatConverter),
		ParamType::Bool => Some(&BoolConverter),
		ParamType::Other(_) => None,
	}
}
