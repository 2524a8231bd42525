//! Field paths for navigating a module-configuration document.
//!
//! A path is an ordered sequence of segments addressing a location in a
//! nested document. Key segments step into mappings, index segments step
//! into collections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single path segment.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    /// Mapping key access: `{"key": value}`
    Key(String),
    /// Collection index access: `[index]`
    Index(usize),
}

impl Seg {
    /// Create a key segment.
    #[inline]
    pub fn key(k: impl Into<String>) -> Self {
        Seg::Key(k.into())
    }

    /// Create an index segment.
    #[inline]
    pub fn index(i: usize) -> Self {
        Seg::Index(i)
    }

    /// Get the key if this is a key segment.
    #[inline]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Seg::Key(k) => Some(k),
            Seg::Index(_) => None,
        }
    }

    /// Get the index if this is an index segment.
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Seg::Key(_) => None,
            Seg::Index(i) => Some(*i),
        }
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(k) => write!(f, ".{}", k),
            Seg::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<String> for Seg {
    fn from(s: String) -> Self {
        Seg::Key(s)
    }
}

impl From<&str> for Seg {
    fn from(s: &str) -> Self {
        Seg::Key(s.to_owned())
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// A complete path into a document.
///
/// Paths are immutable sequences of segments. Use builder methods to
/// construct them incrementally, or [`parse_path`] for dotted text.
///
/// # Examples
///
/// ```
/// use moddoc_state::Path;
///
/// let path = Path::root().key("services").index(0).key("name");
/// assert_eq!(path.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path(Vec<Seg>);

impl Path {
    /// Create an empty path (root).
    #[inline]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Create a path from a vector of segments.
    #[inline]
    pub fn from_segments(segments: Vec<Seg>) -> Self {
        Self(segments)
    }

    /// Append a key segment and return self (builder pattern).
    #[inline]
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(Seg::Key(k.into()));
        self
    }

    /// Append an index segment and return self (builder pattern).
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Seg::Index(i));
        self
    }

    /// Push a segment onto the path (mutating).
    #[inline]
    pub fn push(&mut self, seg: Seg) {
        self.0.push(seg);
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    /// Check if this path is empty (root).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments in this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the last segment.
    #[inline]
    pub fn last(&self) -> Option<&Seg> {
        self.0.last()
    }

    /// Join this path with another path.
    #[inline]
    pub fn join(&self, other: &Path) -> Path {
        let mut result = self.clone();
        result.0.extend(other.0.iter().cloned());
        result
    }

    /// Get the parent path (path without the last segment).
    #[inline]
    pub fn parent(&self) -> Option<Path> {
        if self.0.is_empty() {
            None
        } else {
            let mut p = self.clone();
            p.0.pop();
            Some(p)
        }
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Seg> {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for seg in &self.0 {
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

impl FromIterator<Seg> for Path {
    fn from_iter<I: IntoIterator<Item = Seg>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Seg;
    type IntoIter = std::slice::Iter<'a, Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Seg;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Parse a dotted field path such as `"schedule.monday.enabled"` or
/// `"services[2].price"`.
///
/// Dots separate key segments; a `[n]` suffix after a key adds an index
/// segment. Empty input parses to the root path.
pub fn parse_path(path: &str) -> crate::StateResult<Path> {
    let mut result = Path::root();
    if path.is_empty() {
        return Ok(result);
    }

    for part in path.split('.') {
        if part.is_empty() {
            return Err(crate::StateError::invalid_path(format!(
                "empty segment in path text {path:?}"
            )));
        }
        let mut rest = part;
        if let Some(open) = rest.find('[') {
            let (head, brackets) = rest.split_at(open);
            if !head.is_empty() {
                result.push(Seg::key(head));
            }
            rest = brackets;
            while let Some(stripped) = rest.strip_prefix('[') {
                let Some(close) = stripped.find(']') else {
                    return Err(crate::StateError::invalid_path(format!(
                        "unclosed index bracket in path text {path:?}"
                    )));
                };
                let idx: usize = stripped[..close].parse().map_err(|_| {
                    crate::StateError::invalid_path(format!(
                        "non-numeric index in path text {path:?}"
                    ))
                })?;
                result.push(Seg::index(idx));
                rest = &stripped[close + 1..];
            }
            if !rest.is_empty() {
                return Err(crate::StateError::invalid_path(format!(
                    "trailing characters after index in path text {path:?}"
                )));
            }
        } else {
            result.push(Seg::key(rest));
        }
    }
    Ok(result)
}

/// Construct a [`Path`] from a sequence of segments.
///
/// # Examples
///
/// ```
/// use moddoc_state::path;
///
/// // String literals become key segments, numbers become index segments
/// let p = path!("services", 0, "price");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($crate::Seg::from($seg));
        )+
        p
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_construction() {
        let path = Path::root().key("services").index(0).key("name");
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], Seg::Key("services".into()));
        assert_eq!(path[1], Seg::Index(0));
        assert_eq!(path[2], Seg::Key("name".into()));
    }

    #[test]
    fn test_path_display() {
        let path = Path::root().key("services").index(0).key("name");
        assert_eq!(format!("{}", path), "$.services[0].name");
    }

    #[test]
    fn test_path_macro() {
        let p = path!("services", 0, "name");
        assert_eq!(p.len(), 3);
        assert_eq!(p[1], Seg::Index(0));
    }

    #[test]
    fn test_path_join_and_parent() {
        let base = Path::root().key("booking");
        let sub = Path::root().key("services").index(0);
        let joined = base.join(&sub);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.parent().unwrap().len(), 2);
        assert!(Path::root().parent().is_none());
    }

    #[test]
    fn test_parse_path_dotted() {
        let p = parse_path("schedule.monday.enabled").unwrap();
        assert_eq!(p, path!("schedule", "monday", "enabled"));
    }

    #[test]
    fn test_parse_path_with_index() {
        let p = parse_path("services[2].price").unwrap();
        assert_eq!(p, path!("services", 2, "price"));
    }

    #[test]
    fn test_parse_path_empty_is_root() {
        assert!(parse_path("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_path_rejects_malformed() {
        assert!(parse_path("a..b").is_err());
        assert!(parse_path("items[x]").is_err());
        assert!(parse_path("items[1").is_err());
    }

    #[test]
    fn test_path_serde() {
        let path = Path::root().key("services").index(0);
        let json = serde_json::to_string(&path).unwrap();
        let parsed: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, parsed);
    }
}
