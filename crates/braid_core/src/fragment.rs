use indexmap::IndexMap;
use smallvec::SmallVec;

/// A fragment of the directive tree handed to the host templating runtime.
///
/// ### `Special`
/// A parsed template tag — a directive invocation (`{{#if cond}}`,
/// `{{> partial}}`) or a bare expression (`{{name}}` / `{{{raw}}}`), with
/// its content and else-branch attached for block forms.
///
/// ### `Element`
/// A markup element with child fragments, constructed through the host's
/// [`ElementRegistry`](crate::ElementRegistry).
///
/// ### `Text`
/// A static text run.
///
/// ### `Comment`
/// A comment preserved in the output.
///
/// ### `Attrs`
/// A merged attribute mapping. When present it is always the first child
/// of its element fragment.
///
/// ### `Sequence`
/// A flat run of fragments, as returned by the host text parser for text
/// with embedded expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Special(Box<TagExpr>),
    Element(ElementFragment),
    Text(String),
    Comment(String),
    Attrs(AttrsFragment),
    Sequence(Vec<Fragment>),
}

/// A structured template tag, as parsed by the host engine from `{{...}}`
/// source text. The compiler fills `content` and `else_content` for block
/// forms after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct TagExpr {
    pub kind: TagKind,
    /// The invoked name or looked-up path, e.g. `if` or `user.name`.
    pub path: String,
    /// Raw argument text following the path. Empty when there is none.
    pub args: String,
    pub content: Option<Vec<Fragment>>,
    pub else_content: Option<Vec<Fragment>>,
}

/// The tag form, mirroring the leading symbol of the directive text:
/// `{{expr}}`, `{{{expr}}}`, `{{>name}}`, `{{#name}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Expression,
    RawExpression,
    Inclusion,
    Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementFragment {
    /// Uppercase element name, validated against the element registry.
    pub tag_name: String,
    pub children: Vec<Fragment>,
}

/// Merged attributes of an element: either the normalized key → value-parts
/// mapping, or a raw string that was already serialized upstream and passed
/// through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrsFragment {
    Map(AttributeMap),
    Serialized(String),
}

impl AttrsFragment {
    /// An empty attribute fragment is never prepended to element content.
    pub fn is_empty(&self) -> bool {
        match self {
            AttrsFragment::Map(map) => map.is_empty(),
            AttrsFragment::Serialized(raw) => raw.is_empty(),
        }
    }
}

/// Normalized attribute mapping, in source order. `class` and `id` values
/// accumulate with space separators, the dynamic-attribute key accumulates
/// as a list, every other repeated key keeps only its last value.
pub type AttributeMap = IndexMap<String, AttrParts>;

/// The value parts of one attribute. A single part is the common case.
pub type AttrParts = SmallVec<[AttrPart; 1]>;

#[derive(Debug, Clone, PartialEq)]
pub enum AttrPart {
    /// A quote-stripped literal, or the `" "` separator between accumulated
    /// `class`/`id` values.
    Literal(String),
    /// An expression value resolved through the host tag parser.
    Expr(Box<TagExpr>),
}

/// The reserved attribute key holding a runtime-computed bag of extra
/// attributes, and the alias it is renamed to in the output mapping.
pub const DYNAMIC_ATTRS_KEY: &str = "$dyn";
pub const DYNAMIC_ATTRS_ALIAS: &str = "$specials";
