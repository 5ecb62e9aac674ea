//! Path types for dot-delimited tree access.
//!
//! This module provides the borrowed/owned path pair used to address
//! locations inside a tree. The [`Path`]/[`PathBuf`] types follow the same
//! borrowed/owned pattern as `std::path::Path`/`PathBuf`.
//!
//! Paths are split on `.` into segments, and empty segments are preserved:
//! a leading, trailing, or doubled dot produces an empty segment, and the
//! engine assigns meaning to those (a trailing empty segment requests a
//! list append, an empty final segment during a fetch addresses "this
//! node"). Because of that, any string is a valid path and no segment
//! filtering or normalization is performed.
//!
//! # Usage
//!
//! ```rust
//! use dotpath::tree::{Path, PathBuf};
//!
//! // Borrow any string as a path
//! let path = Path::new("user.profile.name");
//! assert_eq!(path.segment_count(), 3);
//!
//! // Build incrementally
//! let path = PathBuf::new().push("user").push("profile").push("name");
//! assert_eq!(path.as_str(), "user.profile.name");
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use thiserror::Error;

/// Error type for path construction failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Invalid segment: segments cannot contain dots.
    #[error("invalid segment '{segment}': segments cannot contain dots")]
    InvalidSegment { segment: String },
}

/// A validated single segment of a path.
///
/// Segments are the `.`-delimited parts of a path. A segment may be empty
/// (the engine gives empty segments meaning) but may not itself contain a
/// dot, since a dot would split it into two segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    inner: String,
}

impl Segment {
    /// Creates a new segment from a string.
    ///
    /// # Errors
    /// Returns an error if the segment contains a dot.
    pub fn new(s: impl Into<String>) -> Result<Self, PathError> {
        let s = s.into();

        if s.contains('.') {
            return Err(PathError::InvalidSegment { segment: s });
        }

        Ok(Segment { inner: s })
    }

    /// Returns the segment as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for Segment {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Segment::new(s)
    }
}

impl TryFrom<String> for Segment {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Segment::new(s)
    }
}

impl TryFrom<&str> for Segment {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Segment::new(s)
    }
}

/// A borrowed dot-delimited path.
///
/// `Path` is an unsized wrapper over `str`, always used behind a reference,
/// exactly as `std::path::Path` wraps `OsStr`. Any string is a valid path;
/// tokenization happens lazily in [`Path::segments`].
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

/// An owned dot-delimited path.
///
/// The owned counterpart to [`Path`], similar to how `String` relates to
/// `&str`. Pushed parts are joined verbatim with `.`; pushing an empty
/// string produces an empty segment, which is how an append path such as
/// `"items."` is built programmatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

impl Path {
    /// Borrows a string as a path.
    pub fn new<S: AsRef<str> + ?Sized>(s: &S) -> &Path {
        // SAFETY: Path is a repr(transparent) wrapper around str
        unsafe { &*(s.as_ref() as *const str as *const Path) }
    }

    /// Returns an iterator over the path's segments, empty segments included.
    ///
    /// Tokenization guarantee: the iterator yields exactly one segment more
    /// than the number of `.` characters in the path. Note this means the
    /// empty path still tokenizes to a single empty segment; the operations
    /// that treat the empty path as a distinguished case (fetch, ping) check
    /// [`Path::is_empty`] before tokenizing.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('.')
    }

    /// Returns the number of segments, or zero for the empty path.
    pub fn segment_count(&self) -> usize {
        if self.inner.is_empty() {
            0
        } else {
            self.inner.split('.').count()
        }
    }

    /// Returns `true` if the path is the empty string.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the last segment of the path, or `None` if empty.
    pub fn last_segment(&self) -> Option<&str> {
        if self.inner.is_empty() {
            None
        } else {
            self.inner.split('.').next_back()
        }
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned [`PathBuf`].
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Adds a part to the end of this path, joined with `.`.
    ///
    /// The part is appended verbatim; it may itself contain dots, and an
    /// empty part produces an empty segment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dotpath::tree::PathBuf;
    /// let path = PathBuf::new().push("user").push("profile");
    /// assert_eq!(path.as_str(), "user.profile");
    ///
    /// // An empty part builds a trailing-dot append path
    /// let path = PathBuf::new().push("items").push("");
    /// assert_eq!(path.as_str(), "items.");
    /// ```
    pub fn push(mut self, part: impl AsRef<str>) -> Self {
        if self.inner.is_empty() {
            self.inner = part.as_ref().to_string();
        } else {
            self.inner.push('.');
            self.inner.push_str(part.as_ref());
        }
        self
    }

    /// Adds a validated segment to the end of this path.
    pub fn push_segment(mut self, segment: Segment) -> Self {
        if self.inner.is_empty() {
            self.inner = segment.inner;
        } else {
            self.inner.push('.');
            self.inner.push_str(&segment.inner);
        }
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: impl AsRef<Path>) -> Self {
        let other = other.as_ref();
        if self.inner.is_empty() {
            self.inner = other.inner.to_string();
        } else if !other.inner.is_empty() {
            self.inner.push('.');
            self.inner.push_str(&other.inner);
        }
        self
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.deref()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.deref()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::new(s).to_path_buf())
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Path::new(s).to_path_buf()
    }
}

impl From<String> for PathBuf {
    fn from(s: String) -> Self {
        PathBuf { inner: s }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.deref(), f)
    }
}

// Conversion from PathError to the main Error type
impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}
