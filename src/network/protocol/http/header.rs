//! Ordered HTTP header model.
//!
//! A [`Head`] carries the metadata of one HTTP message: request verb and
//! target, response version/status/reason, and an ordered list of
//! [`Field`]s. Insertion order is significant for serialization but not for
//! lookup, and duplicate keys are kept. One `Head` is built per outgoing
//! request and a fresh one per incoming response; nothing is shared across
//! exchanges.

use crate::network::error::Error;
use heapless::{String, Vec};

/// Maximum number of header fields in one head.
pub const MAX_FIELDS: usize = 32;
/// Maximum length of a header field key.
pub const MAX_KEY_LEN: usize = 64;
/// Maximum length of a header field value.
pub const MAX_VALUE_LEN: usize = 256;

const MAX_VERB_LEN: usize = 16;
const MAX_TARGET_LEN: usize = 256;
const MAX_VERSION_LEN: usize = 16;
const MAX_STATUS_LEN: usize = 8;
const MAX_REASON_LEN: usize = 64;

/// Field name governing body framing.
pub const CONTENT_LENGTH: &str = "Content-Length";

/// One `(key, value)` header field with its serialization format flag.
///
/// The `space` flag controls whether a space follows the colon when the field
/// is written to the wire (`Key: Value` vs `Key:Value`); a handful of signed
/// object-storage headers are picky about this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    key: String<MAX_KEY_LEN>,
    value: String<MAX_VALUE_LEN>,
    space: bool,
}

impl Field {
    /// Create a field. Fails with [`Error::BufferFull`] if either part
    /// exceeds its capacity.
    pub fn new(key: &str, value: &str, space: bool) -> Result<Self, Error> {
        Ok(Self {
            key: String::try_from(key).map_err(|_| Error::BufferFull)?,
            value: String::try_from(value).map_err(|_| Error::BufferFull)?,
            space,
        })
    }

    /// The field key, exactly as inserted.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The field value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether a space follows the colon on serialization.
    pub fn space(&self) -> bool {
        self.space
    }
}

/// Ordered header fields plus request/response metadata.
///
/// All metadata strings are opaque at this layer; the verb is whatever the
/// caller sets and the status code stays textual until asked for as a number.
///
/// # Examples
///
/// ```rust
/// use liboss::network::protocol::http::Head;
///
/// let mut head = Head::new();
/// head.set_verb("GET").unwrap();
/// head.set_target("/bucket/key").unwrap();
/// head.add("Host", "oss.example.com").unwrap();
/// head.add("Accept", "*/*").unwrap();
///
/// assert_eq!(head.get("Host"), Some("oss.example.com"));
/// assert_eq!(head.len(), 2);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Head {
    verb: String<MAX_VERB_LEN>,
    target: String<MAX_TARGET_LEN>,
    version: String<MAX_VERSION_LEN>,
    status: String<MAX_STATUS_LEN>,
    reason: String<MAX_REASON_LEN>,
    fields: Vec<Field, MAX_FIELDS>,
}

impl Head {
    /// Create an empty head.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field and all metadata.
    pub fn clear(&mut self) {
        self.verb.clear();
        self.target.clear();
        self.version.clear();
        self.status.clear();
        self.reason.clear();
        self.fields.clear();
    }

    /// Number of header fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the head has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field at `index`, in insertion order.
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Iterate over the fields in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Set the request method. The string is opaque to this layer.
    pub fn set_verb(&mut self, verb: &str) -> Result<(), Error> {
        self.verb = String::try_from(verb).map_err(|_| Error::BufferFull)?;
        Ok(())
    }

    /// The request method.
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Set the request target (path plus query).
    pub fn set_target(&mut self, target: &str) -> Result<(), Error> {
        self.target = String::try_from(target).map_err(|_| Error::BufferFull)?;
        Ok(())
    }

    /// The request target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Parse a response status line into version, status code and reason.
    ///
    /// The line is split on ASCII spaces into exactly three logical parts:
    /// the first token is the protocol version, the second the status code,
    /// and the remainder after skipping further leading spaces the reason
    /// phrase. Missing tokens yield empty strings rather than an error; real
    /// servers occasionally emit degenerate status lines and a lenient parse
    /// keeps the exchange alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liboss::network::protocol::http::Head;
    ///
    /// let mut head = Head::new();
    /// head.set_status_line("HTTP/1.1 200 OK").unwrap();
    /// assert_eq!(head.version(), "HTTP/1.1");
    /// assert_eq!(head.status(), "200");
    /// assert_eq!(head.reason(), "OK");
    /// ```
    pub fn set_status_line(&mut self, line: &str) -> Result<(), Error> {
        let (version, rest) = split_token(line);
        let (status, rest) = split_token(rest);
        let reason = rest.trim_start_matches(' ');

        self.version = String::try_from(version).map_err(|_| Error::BufferFull)?;
        self.status = String::try_from(status).map_err(|_| Error::BufferFull)?;
        self.reason = String::try_from(reason).map_err(|_| Error::BufferFull)?;
        Ok(())
    }

    /// The response protocol version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The response status code, textual.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The response reason phrase.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The status code as a number, if it parses as one.
    pub fn status_code(&self) -> Option<u16> {
        self.status.parse().ok()
    }

    /// Append a field with a space after the colon.
    ///
    /// Insertion order is preserved and duplicate keys are allowed; both
    /// occurrences are kept and serialized.
    pub fn add(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.add_field(key, value, true)
    }

    /// Append a field with an explicit colon-space flag.
    pub fn add_field(&mut self, key: &str, value: &str, space: bool) -> Result<(), Error> {
        let field = Field::new(key, value, space)?;
        self.fields.push(field).map_err(|_| Error::BufferFull)
    }

    /// Parse a raw `Key: Value` line and append it.
    ///
    /// The line is split at the first colon; the key is taken verbatim and
    /// only leading spaces are trimmed from the value. A line without a colon
    /// fails with [`Error::HeaderParseError`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liboss::network::protocol::http::Head;
    ///
    /// let mut head = Head::new();
    /// head.add_line("Content-Length: 123").unwrap();
    /// assert_eq!(head.get("Content-Length"), Some("123"));
    /// ```
    pub fn add_line(&mut self, line: &str) -> Result<(), Error> {
        let colon = line.find(':').ok_or(Error::HeaderParseError)?;
        let key = &line[..colon];
        let value = line[colon + 1..].trim_start_matches(' ');
        self.add(key, value)
    }

    /// Remove every field whose key matches, preserving the relative order
    /// of the remainder.
    pub fn remove(&mut self, key: &str) {
        self.fields.retain(|field| field.key() != key);
    }

    /// The value of the first field whose key matches.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.key() == key)
            .map(Field::value)
    }

    /// Parse the `Content-Length` field as a non-negative integer.
    ///
    /// Returns `None` when the field is absent or not a valid integer; there
    /// is no chunked-encoding fallback. The lookup is case-insensitive since
    /// servers differ on header-name casing.
    pub fn content_length(&self) -> Option<usize> {
        self.fields
            .iter()
            .find(|field| field.key().eq_ignore_ascii_case(CONTENT_LENGTH))
            .and_then(|field| field.value().parse().ok())
    }

    // Convenience constructors for common request fields. Pure wrappers over
    // `add`, no logic of their own.

    /// Append a `Host` field.
    pub fn add_host(&mut self, value: &str) -> Result<(), Error> {
        self.add("Host", value)
    }

    /// Append a `User-Agent` field.
    pub fn add_user_agent(&mut self, value: &str) -> Result<(), Error> {
        self.add("User-Agent", value)
    }

    /// Append an `Accept` field.
    pub fn add_accept(&mut self, value: &str) -> Result<(), Error> {
        self.add("Accept", value)
    }

    /// Append an `Accept-Language` field.
    pub fn add_accept_language(&mut self, value: &str) -> Result<(), Error> {
        self.add("Accept-Language", value)
    }

    /// Append an `Accept-Encoding` field.
    pub fn add_accept_encoding(&mut self, value: &str) -> Result<(), Error> {
        self.add("Accept-Encoding", value)
    }

    /// Append a `Connection` field.
    pub fn add_connection(&mut self, value: &str) -> Result<(), Error> {
        self.add("Connection", value)
    }

    /// Append a `Date` field.
    pub fn add_date(&mut self, value: &str) -> Result<(), Error> {
        self.add("Date", value)
    }

    /// Append an `Authorization` field.
    pub fn add_authorization(&mut self, value: &str) -> Result<(), Error> {
        self.add("Authorization", value)
    }
}

/// Split off the first space-delimited token, skipping leading spaces.
fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start_matches(' ');
    match s.find(' ') {
        Some(at) => (&s[..at], &s[at..]),
        None => (s, ""),
    }
}
