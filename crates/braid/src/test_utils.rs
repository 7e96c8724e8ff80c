//! Structural doubles for the host engine, plus node builders shared by the
//! module tests.

use braid_core::{
    AttributeEntry, Block, CommentNode, DirectiveParser, DoctypeNode, FilterNode, Filters,
    Fragment, HtmlElements, MixinNode, Node, RawAttrs, TagExpr, TagKind, TagNode, TextNode,
};

use crate::error::{CompileError, CompileWarning};
use crate::template::{CompileResult, Compiler};

/// A minimal stand-in for the host tag parser. It understands just enough
/// of the `{{...}}` syntax to let tests assert on the compiled shape:
/// `{{expr}}`, `{{{expr}}}`, `{{>name args}}` and `{{#name args}}`.
pub(crate) struct StubParser;

impl DirectiveParser for StubParser {
    fn parse_tag(&self, source: &str) -> TagExpr {
        let (kind, inner) = if let Some(inner) = source
            .strip_prefix("{{{")
            .and_then(|s| s.strip_suffix("}}}"))
        {
            (TagKind::RawExpression, inner)
        } else {
            let inner = source
                .strip_prefix("{{")
                .and_then(|s| s.strip_suffix("}}"))
                .unwrap_or(source);
            match inner.as_bytes().first() {
                Some(b'#') => (TagKind::Block, &inner[1..]),
                Some(b'>') => (TagKind::Inclusion, &inner[1..]),
                _ => (TagKind::Expression, inner),
            }
        };

        let inner = inner.trim();
        let (path, args) = match inner.split_once(char::is_whitespace) {
            Some((path, args)) => (path, args.trim()),
            None => (inner, ""),
        };

        TagExpr {
            kind,
            path: path.to_owned(),
            args: args.to_owned(),
            content: None,
            else_content: None,
        }
    }

    fn parse_text(&self, source: &str) -> Fragment {
        let mut parts = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            let close = if rest[start..].starts_with("{{{") {
                "}}}"
            } else {
                "}}"
            };
            let Some(end) = rest[start..].find(close) else {
                break;
            };
            if start > 0 {
                parts.push(Fragment::Text(rest[..start].to_owned()));
            }
            let end = start + end + close.len();
            parts.push(Fragment::Special(Box::new(
                self.parse_tag(&rest[start..end]),
            )));
            rest = &rest[end..];
        }
        if !rest.is_empty() {
            parts.push(Fragment::Text(rest.to_owned()));
        }

        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Fragment::Sequence(parts)
        }
    }
}

/// Runs one compile pass with the stub host: the stub parser, the standard
/// HTML element set and a filter registry providing `shout`.
pub(crate) fn compile(
    nodes: Vec<Node>,
) -> (Result<CompileResult, CompileError>, Vec<CompileWarning>) {
    let mut filters = Filters::new();
    filters.register("shout", |text: &str| text.to_uppercase());

    let mut warnings = Vec::new();
    let result = Compiler::new(&StubParser, &HtmlElements, &filters, &mut warnings)
        .compile(Block { nodes });
    (result, warnings)
}

pub(crate) fn attr(name: &str, val: &str) -> AttributeEntry {
    AttributeEntry {
        name: name.to_owned(),
        val: val.to_owned(),
        escaped: true,
    }
}

pub(crate) fn text(val: &str) -> Node {
    Node::Text(TextNode {
        val: val.to_owned(),
        line: None,
    })
}

pub(crate) fn tag(name: &str, children: Vec<Node>) -> Node {
    tag_with_attrs(name, vec![], children)
}

pub(crate) fn tag_with_attrs(name: &str, attrs: Vec<AttributeEntry>, children: Vec<Node>) -> Node {
    Node::Tag(TagNode {
        name: name.to_owned(),
        attrs: RawAttrs::Entries(attrs),
        block: Some(Block { nodes: children }),
        code: None,
        line: None,
    })
}

pub(crate) fn mixin(name: &str, args: Option<&str>) -> MixinNode {
    MixinNode {
        name: name.to_owned(),
        args: args.map(str::to_owned),
        block: None,
        line: None,
    }
}

pub(crate) fn mixin_with(name: &str, args: Option<&str>, children: Vec<Node>) -> MixinNode {
    MixinNode {
        block: Some(Block { nodes: children }),
        ..mixin(name, args)
    }
}

pub(crate) fn if_mixin(cond: &str, children: Vec<Node>) -> Node {
    Node::Mixin(mixin_with("if", Some(cond), children))
}

pub(crate) fn else_if_mixin(cond: &str) -> MixinNode {
    mixin_with("else if", Some(cond), vec![])
}

pub(crate) fn else_mixin() -> MixinNode {
    mixin_with("else", None, vec![])
}

pub(crate) fn template_tag(name: &str, children: Vec<Node>) -> Node {
    tag_with_attrs(
        "template",
        vec![attr("name", &format!("'{}'", name))],
        children,
    )
}

pub(crate) fn comment(val: &str, buffer: bool) -> Node {
    Node::Comment(CommentNode {
        val: val.to_owned(),
        buffer,
        line: None,
    })
}

pub(crate) fn filter_node(name: &str, lines: Vec<&str>) -> Node {
    Node::Filter(FilterNode {
        name: name.to_owned(),
        block: Block {
            nodes: lines.into_iter().map(text).collect(),
        },
        line: None,
    })
}

pub(crate) fn doctype(line: Option<usize>) -> Node {
    Node::Doctype(DoctypeNode { val: None, line })
}
