//! Line classification shared by the target and manifest resolvers.
//!
//! Both inputs are read one line at a time. Each line is reduced to a [`Line`]
//! token so the resolvers only deal with a handful of shapes instead of raw text.

/// A single classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
  /// Empty or whitespace only.
  Blank,
  /// First non-whitespace character is `#`.
  Comment,
  /// `key:` or `key: value` starting in column zero.
  TopLevelKey { key: &'a str, value: &'a str },
  /// `- key: value`, at any indentation.
  ListItem { indent: usize, key: &'a str, value: &'a str },
  /// Indented `key: value`.
  Field { indent: usize, key: &'a str, value: &'a str },
  /// Anything else (bare list scalars, continuation lines, malformed keys).
  Other,
}

impl<'a> Line<'a> {
  /// Classify one raw line.
  pub fn classify(raw: &'a str) -> Self {
    let trimmed = raw.trim_start();
    if trimmed.trim_end().is_empty() {
      return Line::Blank;
    }
    if trimmed.starts_with('#') {
      return Line::Comment;
    }

    let indent = raw.len() - trimmed.len();

    if let Some(rest) = trimmed.strip_prefix('-') {
      // "-board: x" is not a list item, the dash must be followed by whitespace
      if !rest.starts_with(char::is_whitespace) {
        return Line::Other;
      }
      return match split_key_value(rest.trim_start()) {
        Some((key, value)) => Line::ListItem { indent, key, value },
        None => Line::Other,
      };
    }

    match split_key_value(trimmed) {
      Some((key, value)) if indent == 0 => Line::TopLevelKey { key, value },
      Some((key, value)) => Line::Field { indent, key, value },
      None => Line::Other,
    }
  }

  /// True for a key with nothing after the colon, e.g. `projects:`.
  pub fn is_bare_key(&self) -> bool {
    match self {
      Line::TopLevelKey { value, .. } | Line::Field { value, .. } => value.is_empty(),
      _ => false,
    }
  }
}

/// Split `key: value` at the first colon. The key must be a plain identifier.
fn split_key_value(text: &str) -> Option<(&str, &str)> {
  let (key, value) = text.split_once(':')?;
  if key.is_empty() || !key.chars().all(is_key_char) {
    return None;
  }
  // `key:value` without a separating space is a scalar, not a mapping entry
  if !value.is_empty() && !value.starts_with(char::is_whitespace) {
    return None;
  }
  Some((key, value.trim()))
}

fn is_key_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}
