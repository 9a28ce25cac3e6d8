//! Tag rendering.
//!
//! ## Summary
//! Every function here returns a single element as a string. Content is
//! inserted verbatim: the caller must escape any text that can hold `<`, `>`
//! or `&` (see [`escape_text`] and [`text_tag`]), otherwise the result is not
//! well-formed XML.

use caltag_core::config::{Settings, UnregisteredNamespacePolicy, XmlConfig};

use super::escape::escape_text;
use crate::error::{RfcError, RfcResult};
use crate::rfc::dav::core::{QName, catalog, status_line, try_status_line};

/// Renders `name` around `content`.
///
/// Empty content gives the self-closing form `<D:getetag/>`; anything else,
/// whitespace included, gives `<D:getetag>content</D:getetag>`. A name whose
/// namespace has no registered prefix is rendered without one and a warning
/// is logged.
#[must_use]
pub fn tag(name: &QName, content: &str) -> String {
    if !name.namespace.is_registered() {
        tracing::warn!(
            namespace = name.namespace_uri(),
            local_name = name.local_name(),
            "Rendering tag without a registered namespace prefix"
        );
    }
    render(&name.prefixed_name(), content)
}

/// Like [`tag`], but refuses names whose namespace has no registered prefix.
///
/// ## Errors
/// Returns `RfcError::UnregisteredNamespace` if the namespace is unknown.
pub fn try_tag(name: &QName, content: &str) -> RfcResult<String> {
    if !name.namespace.is_registered() {
        return Err(RfcError::UnregisteredNamespace {
            namespace: name.namespace_uri().to_owned(),
            local_name: name.local_name().to_owned(),
        });
    }
    Ok(render(&name.prefixed_name(), content))
}

/// Escapes `text` and renders it inside `name`.
#[must_use]
pub fn text_tag(name: &QName, text: &str) -> String {
    tag(name, &escape_text(text))
}

/// Renders `<D:href>` around `href`, which is inserted verbatim.
#[must_use]
pub fn href_tag(href: &str) -> String {
    tag(&catalog::HREF, href)
}

/// Renders `<D:status>` holding the status line for `code`.
///
/// A code without a standard reason phrase renders as `HTTP/1.1 <code> `.
#[must_use]
pub fn status_tag(code: u16) -> String {
    tag(&catalog::STATUS, &status_line(code))
}

/// Like [`status_tag`], but refuses codes without a standard reason phrase.
///
/// ## Errors
/// Returns `RfcError::InvalidStatus` or `RfcError::UnknownStatus`.
pub fn try_status_tag(code: u16) -> RfcResult<String> {
    Ok(tag(&catalog::STATUS, &try_status_line(code)?))
}

fn render(element: &str, content: &str) -> String {
    if content.is_empty() {
        format!("<{element}/>")
    } else {
        format!("<{element}>{content}</{element}>")
    }
}

/// Renders tags according to the configured unregistered-namespace policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagRenderer {
    policy: UnregisteredNamespacePolicy,
}

impl TagRenderer {
    /// Creates a renderer with the given policy.
    #[must_use]
    pub const fn new(policy: UnregisteredNamespacePolicy) -> Self {
        Self { policy }
    }

    /// Creates a renderer from the `[xml]` section of the settings.
    #[must_use]
    pub const fn from_config(config: &XmlConfig) -> Self {
        Self::new(config.unregistered_namespace)
    }

    /// ## Summary
    /// Builds a renderer from loaded settings.
    ///
    /// ## Errors
    /// Returns an error if the settings fail validation.
    pub fn from_settings(settings: &Settings) -> RfcResult<Self> {
        settings.validate()?;
        Ok(Self::from_config(&settings.xml))
    }

    /// Returns the unregistered-namespace policy in effect.
    #[must_use]
    pub const fn policy(&self) -> UnregisteredNamespacePolicy {
        self.policy
    }

    /// Renders `name` around verbatim `content`.
    ///
    /// ## Errors
    /// Under the `Reject` policy, returns `RfcError::UnregisteredNamespace` for
    /// names without a registered prefix.
    pub fn render(&self, name: &QName, content: &str) -> RfcResult<String> {
        match self.policy {
            UnregisteredNamespacePolicy::Degrade => Ok(tag(name, content)),
            UnregisteredNamespacePolicy::Reject => try_tag(name, content),
        }
    }

    /// Escapes `text` and renders it inside `name`.
    ///
    /// ## Errors
    /// Same as [`TagRenderer::render`].
    pub fn render_text(&self, name: &QName, text: &str) -> RfcResult<String> {
        self.render(name, &escape_text(text))
    }
}
