use braid_core::{
    AttrPart, AttributeEntry, AttributeMap, AttrsFragment, DirectiveParser, RawAttrs,
    DYNAMIC_ATTRS_ALIAS, DYNAMIC_ATTRS_KEY,
};
use smallvec::smallvec;

use super::expression::lookup;

/// Merges a raw attribute list into the ordered key → value-parts mapping.
///
/// Quote-delimited values become literals; anything else is an expression
/// resolved through the host tag parser with the entry's escape flag.
/// Repeated `class` / `id` keys accumulate space-joined, the dynamic
/// attribute key (renamed to its output alias) accumulates as a list, and
/// any other repeated key keeps only its last value.
///
/// Attributes that arrive as an already-serialized string pass through
/// untouched.
pub(crate) fn normalize_attributes(
    attrs: RawAttrs,
    parser: &dyn DirectiveParser,
) -> AttrsFragment {
    let entries = match attrs {
        RawAttrs::Serialized(raw) => return AttrsFragment::Serialized(raw),
        RawAttrs::Entries(entries) => entries,
    };

    let mut map = AttributeMap::default();
    for AttributeEntry { name, val, escaped } in entries {
        let part = match quoted_literal(&val) {
            Some(literal) => AttrPart::Literal(literal.to_owned()),
            None => AttrPart::Expr(Box::new(lookup(parser, &val, escaped))),
        };

        let key = if name == DYNAMIC_ATTRS_KEY {
            DYNAMIC_ATTRS_ALIAS.to_owned()
        } else {
            name
        };

        match map.get_mut(&key) {
            Some(parts) if key == "class" || key == "id" => {
                parts.push(AttrPart::Literal(" ".to_owned()));
                parts.push(part);
            }
            Some(parts) if key == DYNAMIC_ATTRS_ALIAS => {
                parts.push(part);
            }
            Some(parts) => {
                // Last occurrence wins for ordinary keys
                *parts = smallvec![part];
            }
            None => {
                map.insert(key, smallvec![part]);
            }
        }
    }

    AttrsFragment::Map(map)
}

/// Returns the unquoted contents when `val` is delimited by a matching pair
/// of single or double quotes.
fn quoted_literal(val: &str) -> Option<&str> {
    let bytes = val.as_bytes();
    let first = *bytes.first()?;
    if first != b'"' && first != b'\'' {
        return None;
    }
    if *bytes.last()? != first {
        return None;
    }
    if val.len() < 2 {
        return Some("");
    }
    Some(&val[1..val.len() - 1])
}
