use strum_macros::{AsRefStr, IntoStaticStr};

/// A node of the parse tree produced by the indentation-markup parser.
/// There are several possible node types:
///
/// ### `Tag`
/// A markup element node, e.g. `div.foo(title="bar")`. It carries the raw
/// attribute list, an optional child block and optionally a piece of inline
/// code (`p= user.name`), which replaces the child block as content.
///
/// ### `Mixin`
/// A control-flow construct (`if` / `unless` / `each` / `with`, plus their
/// `else if` / `else` followers) or a named component invocation. The
/// lexer surfaces all of these uniformly, with the raw argument text in
/// [`MixinNode::args`].
///
/// ### `Text`
/// A plain text run, possibly containing `#{expr}` interpolations.
///
/// ### `Comment` / `BlockComment`
/// Single-line and indented comments. Only buffered comments (`//` as
/// opposed to `//-`) appear in the compiled output.
///
/// ### `Filter`
/// A named text filter applied to an indented block of raw text lines,
/// e.g. `:markdown`.
///
/// ### `Doctype`
/// A doctype declaration. The compiler ignores it with a notice, since the
/// host runtime controls the document envelope.
///
/// ### `Else`
/// A dangling else produced by the parser. It is only valid as part of a
/// conditional sibling run and must never be visited on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Tag(TagNode),
    Mixin(MixinNode),
    Text(TextNode),
    Comment(CommentNode),
    BlockComment(BlockCommentNode),
    Filter(FilterNode),
    Doctype(DoctypeNode),
    Else(ElseNode),
}

/// An ordered list of sibling nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagNode {
    pub name: String,
    pub attrs: RawAttrs,
    pub block: Option<Block>,
    pub code: Option<InlineCode>,
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MixinNode {
    pub name: String,
    /// Raw argument text, e.g. the `user.isAdmin` in `+if(user.isAdmin)`.
    pub args: Option<String>,
    pub block: Option<Block>,
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub val: String,
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    pub val: String,
    /// `true` when the comment should appear in the compiled output.
    pub buffer: bool,
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockCommentNode {
    pub block: Block,
    pub buffer: bool,
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterNode {
    pub name: String,
    pub block: Block,
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctypeNode {
    pub val: Option<String>,
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseNode {
    pub block: Option<Block>,
    pub line: Option<usize>,
}

/// A single raw attribute as produced by the parser. `val` is either a
/// quote-delimited literal (first and last char are the same quote) or a raw
/// expression string to be resolved by the host tag parser.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeEntry {
    pub name: String,
    pub val: String,
    pub escaped: bool,
}

/// The attribute payload of a [`TagNode`]. The parser usually provides an
/// entry list, but attributes that were already serialized upstream come
/// through as a single raw string and pass through the compiler untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAttrs {
    Entries(Vec<AttributeEntry>),
    Serialized(String),
}

impl Default for RawAttrs {
    fn default() -> Self {
        RawAttrs::Entries(Vec::new())
    }
}

impl RawAttrs {
    pub fn is_empty(&self) -> bool {
        match self {
            RawAttrs::Entries(entries) => entries.is_empty(),
            RawAttrs::Serialized(raw) => raw.is_empty(),
        }
    }
}

/// Inline code attached to a tag (`p= user.name`). When present, it becomes
/// the single content fragment of the node instead of the child block.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineCode {
    pub val: String,
    pub escape: bool,
}

/// The node type names used in diagnostics ("Mixin must be inside a
/// template" etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
pub enum NodeKind {
    Tag,
    Mixin,
    Text,
    Comment,
    BlockComment,
    Filter,
    Doctype,
    Else,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Tag(_) => NodeKind::Tag,
            Node::Mixin(_) => NodeKind::Mixin,
            Node::Text(_) => NodeKind::Text,
            Node::Comment(_) => NodeKind::Comment,
            Node::BlockComment(_) => NodeKind::BlockComment,
            Node::Filter(_) => NodeKind::Filter,
            Node::Doctype(_) => NodeKind::Doctype,
            Node::Else(_) => NodeKind::Else,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            Node::Tag(n) => n.line,
            Node::Mixin(n) => n.line,
            Node::Text(n) => n.line,
            Node::Comment(n) => n.line,
            Node::BlockComment(n) => n.line,
            Node::Filter(n) => n.line,
            Node::Doctype(n) => n.line,
            Node::Else(n) => n.line,
        }
    }

    /// Detaches the child block that regular block recursion descends into.
    /// Filter and block-comment blocks hold raw text lines consumed by their
    /// own visitors, so they are not exposed here.
    pub fn take_block(&mut self) -> Option<Block> {
        match self {
            Node::Tag(n) => n.block.take(),
            Node::Mixin(n) => n.block.take(),
            _ => None,
        }
    }

    pub fn inline_code(&self) -> Option<&InlineCode> {
        match self {
            Node::Tag(n) => n.code.as_ref(),
            _ => None,
        }
    }
}
