use std::fmt;

/// Boundary markers placed around every seeded sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sentinel {
	Start,
	End,
}

/// Canonical identity of a node in a `Chain`.
///
/// Tokens are stored in their canonical form (see [`canonicalize`]), so two
/// surface forms such as `"three"` and `"three."` share the same key.
/// Sentinels live in their own variant and can never collide with a token,
/// even an empty one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
	Sentinel(Sentinel),
	Token(String),
}

impl Key {
	/// Builds the canonical token key for a raw surface form.
	pub fn token(raw: &str) -> Self {
		Key::Token(canonicalize(raw))
	}

	pub fn is_sentinel(&self) -> bool {
		matches!(self, Key::Sentinel(_))
	}
}

impl From<Sentinel> for Key {
	fn from(sentinel: Sentinel) -> Self {
		Key::Sentinel(sentinel)
	}
}

impl fmt::Display for Sentinel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Sentinel::Start => f.write_str("<START>"),
			Sentinel::End => f.write_str("<END>"),
		}
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Key::Sentinel(sentinel) => write!(f, "{}", sentinel),
			Key::Token(token) => f.write_str(token),
		}
	}
}

/// Strips every character outside `[a-z0-9]` from a surface form.
///
/// Uppercase letters are removed, not lowered: `"One"` becomes `"ne"`.
pub fn canonicalize(raw: &str) -> String {
	raw.chars()
		.filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
		.collect()
}
