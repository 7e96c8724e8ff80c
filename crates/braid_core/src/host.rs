//! Interfaces of the host templating engine the compiler emits for.
//!
//! The compiler never interprets directive text or element names itself; it
//! delegates both to the host through these traits and only shapes the tree
//! around the results.

use crate::{Fragment, TagExpr};

/// Parser for the host's `{{...}}` tag syntax.
pub trait DirectiveParser {
    /// Parses a single directive tag, e.g. `{{#each items}}` or
    /// `{{{rawHtml}}}`, into its structured form.
    fn parse_tag(&self, source: &str) -> TagExpr;

    /// Parses a text run that may contain embedded `{{...}}` expressions
    /// into a mixed text/expression fragment.
    fn parse_text(&self, source: &str) -> Fragment;
}

/// Oracle for markup element names and element construction.
pub trait ElementRegistry {
    /// Whether `tag_name` (uppercase) is a known element name.
    fn is_known_element(&self, tag_name: &str) -> bool;

    /// Builds the element fragment for a known `tag_name` (uppercase) from
    /// its child fragments. An attribute fragment, when present, is the
    /// first child.
    fn create_element(&self, tag_name: &str, children: Vec<Fragment>) -> Fragment;
}

/// Registry of named text filters.
pub trait FilterRegistry {
    /// Applies the filter `name` to `input`, or returns `None` when no such
    /// filter is registered.
    fn apply(&self, name: &str, input: &str) -> Option<String>;
}
