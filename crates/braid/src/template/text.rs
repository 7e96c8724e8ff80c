use braid_core::Fragment;
use lazy_static::lazy_static;
use regex::Regex;

use super::Compiler;

lazy_static! {
    /// Inline interpolation: `#{name}`, `#{user.name}`, `#{../parent}`.
    /// The dotted-path shape matches what the host tag parser accepts.
    static ref INTERPOLATION: Regex =
        Regex::new(r"#\{\s*((\.{1,2}/)*[\w.-]+)\s*\}").expect("interpolation pattern is valid");
}

/// Rewrites every `#{expr}` interpolation to the host's `{{expr}}` syntax.
pub(crate) fn rewrite_interpolations(text: &str) -> std::borrow::Cow<'_, str> {
    INTERPOLATION.replace_all(text, "{{$1}}")
}

impl Compiler<'_> {
    /// Rewrites interpolations, then parses the whole run with the host tag
    /// parser. The host syntax is therefore accepted directly as well.
    pub(crate) fn parse_text(&self, text: &str) -> Fragment {
        self.parser.parse_text(&rewrite_interpolations(text))
    }
}
