//! Path pattern compilation.
//!
//! Patterns are `/`-delimited with named placeholders:
//!
//! - `/users` — literal match
//! - `/users/{id}` — one single-segment parameter
//! - `/post/{post_id}/comment/{comment_id}` — multiple parameters
//!
//! A placeholder matches exactly one non-empty segment and never crosses a
//! `/`. Compiled matchers match the full path only; there is no prefix
//! matching. Malformed patterns and duplicate placeholder names are
//! build-time errors.

use crate::error::{RouterError, RouterResult};

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed size for a compiled regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// A compiled path pattern.
///
/// Pure function of its input string; carries the placeholder names in
/// pattern-appearance order, which is the binding order at match time.
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original pattern string.
	pattern: String,
	/// Compiled regex, anchored at both ends.
	regex: regex::Regex,
	/// Placeholder names in appearance order.
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compile a pattern string.
	///
	/// # Errors
	///
	/// Returns [`RouterError::MalformedPattern`] for unbalanced braces, an
	/// empty or non-identifier placeholder name, or an oversized pattern,
	/// and [`RouterError::DuplicateParam`] when a placeholder name repeats
	/// within the pattern.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_urls::PathPattern;
	///
	/// let pattern = PathPattern::new("/post/{post_id}/comment/{comment_id}").unwrap();
	/// assert_eq!(pattern.param_names(), &["post_id", "comment_id"]);
	///
	/// assert!(PathPattern::new("/user/{id").is_err());
	/// ```
	pub fn new(pattern: &str) -> RouterResult<Self> {
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(RouterError::MalformedPattern {
				pattern: pattern.to_string(),
				reason: format!(
					"length {} exceeds maximum of {} bytes",
					pattern.len(),
					MAX_PATTERN_LENGTH
				),
			});
		}

		let (regex_str, param_names) = Self::compile(pattern)?;

		// Size-limited build guards against pathological patterns
		let regex = regex::RegexBuilder::new(&regex_str)
			.size_limit(MAX_REGEX_SIZE)
			.build()
			.map_err(|e| RouterError::MalformedPattern {
				pattern: pattern.to_string(),
				reason: e.to_string(),
			})?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
		})
	}

	/// Compile a pattern into a regex string and ordered parameter names.
	fn compile(pattern: &str) -> RouterResult<(String, Vec<String>)> {
		let mut regex_str = String::from("^");
		let mut param_names: Vec<String> = Vec::new();
		let mut chars = pattern.chars();

		while let Some(c) = chars.next() {
			match c {
				'{' => {
					let mut name = String::new();
					let mut closed = false;

					for next in chars.by_ref() {
						if next == '}' {
							closed = true;
							break;
						}
						name.push(next);
					}

					if !closed {
						return Err(RouterError::MalformedPattern {
							pattern: pattern.to_string(),
							reason: "unbalanced braces".to_string(),
						});
					}
					if name.is_empty()
						|| !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
					{
						return Err(RouterError::MalformedPattern {
							pattern: pattern.to_string(),
							reason: format!("invalid placeholder name `{}`", name),
						});
					}
					if param_names.contains(&name) {
						return Err(RouterError::DuplicateParam {
							pattern: pattern.to_string(),
							name,
						});
					}

					// One non-empty segment, never crossing a slash
					regex_str.push_str(&format!("(?P<{}>[^/]+)", name));
					param_names.push(name);
				}
				'}' => {
					return Err(RouterError::MalformedPattern {
						pattern: pattern.to_string(),
						reason: "unbalanced braces".to_string(),
					});
				}
				'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '^' | '$' | '|' | '\\' => {
					// Escape regex special characters
					regex_str.push('\\');
					regex_str.push(c);
				}
				_ => {
					regex_str.push(c);
				}
			}
		}

		regex_str.push('$');
		Ok((regex_str, param_names))
	}

	/// The original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Placeholder names in appearance order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Whether the full path matches this pattern.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}

	/// Match a path and return the captured segment values in pattern
	/// order, or `None` if the path does not match.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_urls::PathPattern;
	///
	/// let pattern = PathPattern::new("/post/{post_id}/comment/{comment_id}").unwrap();
	///
	/// let values = pattern.capture_values("/post/45/comment/67").unwrap();
	/// assert_eq!(values, vec!["45".to_string(), "67".to_string()]);
	///
	/// assert!(pattern.capture_values("/post/45").is_none());
	/// ```
	pub fn capture_values(&self, path: &str) -> Option<Vec<String>> {
		self.regex.captures(path).map(|caps| {
			self.param_names
				.iter()
				.filter_map(|name| caps.name(name).map(|m| m.as_str().to_string()))
				.collect()
		})
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}
