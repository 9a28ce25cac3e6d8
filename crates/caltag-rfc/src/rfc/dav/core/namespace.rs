//! XML namespace registry and qualified name types.

use std::borrow::Cow;

/// `DAV:` namespace URI.
pub const DAV_NS: &str = "DAV:";

/// `CalDAV` namespace URI.
pub const CALDAV_NS: &str = "urn:ietf:params:xml:ns:caldav";

/// `CalendarServer` (Apple) namespace URI.
pub const CS_NS: &str = "http://calendarserver.org/ns/";

/// Prefix bound to [`DAV_NS`].
pub const DAV_PREFIX: &str = "D";

/// Prefix bound to [`CALDAV_NS`].
pub const CALDAV_PREFIX: &str = "C";

/// Prefix bound to [`CS_NS`].
pub const CS_PREFIX: &str = "CS";

/// An XML namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(pub Cow<'static, str>);

impl Namespace {
    /// `DAV:` namespace.
    pub const DAV: Self = Self(Cow::Borrowed(DAV_NS));

    /// `CalDAV` namespace.
    pub const CALDAV: Self = Self(Cow::Borrowed(CALDAV_NS));

    /// `CalendarServer` namespace.
    pub const CS: Self = Self(Cow::Borrowed(CS_NS));

    /// Every namespace with a registered prefix, in declaration order.
    pub const REGISTERED: [Self; 3] = [Self::DAV, Self::CALDAV, Self::CS];

    /// Creates a new namespace from a string.
    #[must_use]
    pub fn new(uri: impl Into<Cow<'static, str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the registered prefix for this namespace.
    #[must_use]
    pub fn prefix(&self) -> Option<&'static str> {
        match self.0.as_ref() {
            DAV_NS => Some(DAV_PREFIX),
            CALDAV_NS => Some(CALDAV_PREFIX),
            CS_NS => Some(CS_PREFIX),
            _ => None,
        }
    }

    /// Returns whether a prefix is registered for this namespace.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.prefix().is_some()
    }
}

impl From<&'static str> for Namespace {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for Namespace {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

/// A qualified XML name (namespace + local name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// The namespace URI.
    pub namespace: Namespace,
    /// The local name.
    pub local_name: Cow<'static, str>,
}

impl QName {
    /// Creates a new qualified name.
    #[must_use]
    pub fn new(namespace: impl Into<Namespace>, local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Creates a `DAV:` qualified name from a static local name.
    #[must_use]
    pub const fn dav(local_name: &'static str) -> Self {
        Self {
            namespace: Namespace::DAV,
            local_name: Cow::Borrowed(local_name),
        }
    }

    /// Creates a `CalDAV` qualified name from a static local name.
    #[must_use]
    pub const fn caldav(local_name: &'static str) -> Self {
        Self {
            namespace: Namespace::CALDAV,
            local_name: Cow::Borrowed(local_name),
        }
    }

    /// Creates a `CalendarServer` qualified name from a static local name.
    #[must_use]
    pub const fn cs(local_name: &'static str) -> Self {
        Self {
            namespace: Namespace::CS,
            local_name: Cow::Borrowed(local_name),
        }
    }

    /// Returns the local name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn namespace_uri(&self) -> &str {
        self.namespace.as_str()
    }

    /// Returns the element name as written in a document: `prefix:local`
    /// when the namespace is registered, the bare local name otherwise.
    #[must_use]
    pub fn prefixed_name(&self) -> String {
        match self.namespace.prefix() {
            Some(prefix) => format!("{prefix}:{}", self.local_name),
            None => self.local_name.to_string(),
        }
    }

    /// Returns whether this is a DAV: element.
    #[must_use]
    pub fn is_dav(&self) -> bool {
        self.namespace == Namespace::DAV
    }

    /// Returns whether this is a `CalDAV` element.
    #[must_use]
    pub fn is_caldav(&self) -> bool {
        self.namespace == Namespace::CALDAV
    }

    /// Returns whether this is a `CalendarServer` element.
    #[must_use]
    pub fn is_cs(&self) -> bool {
        self.namespace == Namespace::CS
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}{}", self.namespace.as_str(), self.local_name)
    }
}
