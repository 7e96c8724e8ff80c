//! Compiler from indentation-based markup trees to the directive trees of a
//! host templating runtime.
//!
//! The input is the node tree an indentation-markup parser produces (tags,
//! control-flow mixins, text, comments, filters); the output buckets the
//! compiled fragments into `head`, `body` and named templates. Directive
//! text and element construction are delegated to the host engine through
//! the [`DirectiveParser`] and [`ElementRegistry`] traits.
//!
//! ```
//! use braid::{
//!     AttributeEntry, Block, DirectiveParser, Filters, Fragment, HtmlElements, Node, RawAttrs,
//!     TagExpr, TagKind, TagNode, TextNode,
//! };
//!
//! // The host engine's tag parser. This toy version only handles what the
//! // example needs.
//! struct HostParser;
//!
//! impl DirectiveParser for HostParser {
//!     fn parse_tag(&self, source: &str) -> TagExpr {
//!         let inner = source.trim_matches(|c| c == '{' || c == '}');
//!         let (path, args) = inner.split_once(' ').unwrap_or((inner, ""));
//!         TagExpr {
//!             kind: TagKind::Expression,
//!             path: path.trim_start_matches(['#', '>']).to_owned(),
//!             args: args.trim().to_owned(),
//!             content: None,
//!             else_content: None,
//!         }
//!     }
//!
//!     fn parse_text(&self, source: &str) -> Fragment {
//!         Fragment::Text(source.to_owned())
//!     }
//! }
//!
//! // template(name="hello")
//! //   div Hello
//! let tree = Block {
//!     nodes: vec![Node::Tag(TagNode {
//!         name: "template".into(),
//!         attrs: RawAttrs::Entries(vec![AttributeEntry {
//!             name: "name".into(),
//!             val: "'hello'".into(),
//!             escaped: true,
//!         }]),
//!         block: Some(Block {
//!             nodes: vec![Node::Tag(TagNode {
//!                 name: "div".into(),
//!                 attrs: RawAttrs::default(),
//!                 block: Some(Block {
//!                     nodes: vec![Node::Text(TextNode {
//!                         val: "Hello".into(),
//!                         line: None,
//!                     })],
//!                 }),
//!                 code: None,
//!                 line: None,
//!             })],
//!         }),
//!         code: None,
//!         line: None,
//!     })],
//! };
//!
//! let mut warnings = Vec::new();
//! let result = braid::compile(tree, &HostParser, &HtmlElements, &Filters::new(), &mut warnings)
//!     .expect("compiles");
//!
//! assert!(result.head.is_none());
//! assert!(result.body.is_none());
//! assert!(result.templates.contains_key("hello"));
//! ```

mod error;
mod template;

#[cfg(test)]
mod test_utils;

pub use braid_core::*;
pub use error::{CompileError, CompileErrorKind, CompileWarning, CompileWarningKind};
pub use template::{CompileResult, Compiler};

/// Compiles a parsed markup tree in one pass. Non-fatal notices are pushed
/// to `warnings`; the first fatal error aborts with no partial result.
pub fn compile(
    root: Block,
    parser: &dyn DirectiveParser,
    elements: &dyn ElementRegistry,
    filters: &dyn FilterRegistry,
    warnings: &mut Vec<CompileWarning>,
) -> Result<CompileResult, CompileError> {
    Compiler::new(parser, elements, filters, warnings).compile(root)
}
