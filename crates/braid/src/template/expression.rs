use braid_core::{DirectiveParser, TagExpr};

/// Wraps a raw expression in directive-tag text — `{{expr}}` when escaped,
/// `{{{expr}}}` for raw output — and hands it to the host tag parser.
pub(crate) fn lookup(parser: &dyn DirectiveParser, val: &str, escape: bool) -> TagExpr {
    let source = if escape {
        format!("{{{{{}}}}}", val)
    } else {
        format!("{{{{{{{}}}}}}}", val)
    };
    parser.parse_tag(&source)
}
