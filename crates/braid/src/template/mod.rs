//! The tree rewriter: walks the parsed markup tree depth-first, re-pairs
//! conditional sibling runs, and emits the directive tree the host runtime
//! consumes.

mod attributes;
mod control_flow;
mod expression;
mod root;
mod text;

use braid_core::{
    Block, CommentNode, DirectiveParser, ElementRegistry, FilterRegistry, Fragment, MixinNode,
    Node, TagNode,
};
use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::debug;

use crate::error::{CompileError, CompileErrorKind, CompileWarning};
use self::attributes::normalize_attributes;
use self::control_flow::{group_conditional_run, is_else_name};
use self::expression::lookup;

/// The outcome of one compile pass: the optional `head` and `body` content
/// lists plus the named templates. A template that was declared with an
/// empty body still occupies its name slot.
#[derive(Debug, Default, PartialEq)]
pub struct CompileResult {
    pub head: Option<Vec<Fragment>>,
    pub body: Option<Vec<Fragment>>,
    pub templates: FxHashMap<String, Option<Vec<Fragment>>>,
}

/// One compile pass over a parsed markup tree.
///
/// The compiler owns the traversal accumulator (`head`, `body`, `templates`)
/// and borrows the host collaborators it emits for. Non-fatal notices go to
/// the caller-supplied warnings sink; the first fatal error aborts the pass
/// with no partial result.
pub struct Compiler<'a> {
    pub(crate) parser: &'a dyn DirectiveParser,
    elements: &'a dyn ElementRegistry,
    filters: &'a dyn FilterRegistry,
    warnings: &'a mut Vec<CompileWarning>,
    filename: Option<String>,
    head: Option<Vec<Fragment>>,
    body: Option<Vec<Fragment>>,
    templates: FxHashMap<String, Option<Vec<Fragment>>>,
}

impl<'a> Compiler<'a> {
    pub fn new(
        parser: &'a dyn DirectiveParser,
        elements: &'a dyn ElementRegistry,
        filters: &'a dyn FilterRegistry,
        warnings: &'a mut Vec<CompileWarning>,
    ) -> Self {
        Compiler {
            parser,
            elements,
            filters,
            warnings,
            filename: None,
            head: None,
            body: None,
            templates: FxHashMap::default(),
        }
    }

    /// Names the source file in log events.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn compile(mut self, root: Block) -> Result<CompileResult, CompileError> {
        debug!(
            filename = self.filename.as_deref(),
            roots = root.nodes.len(),
            "compiling markup tree"
        );

        self.visit_block(Some(root), 0)?;

        Ok(CompileResult {
            head: self.head,
            body: self.body,
            templates: self.templates,
        })
    }

    /// Visits one sibling list, consulting the control-flow grouper whenever
    /// the current node is a conditional-capable mixin, and collects one
    /// fragment per logical node in input order. Absent blocks yield `None`;
    /// present-but-empty blocks yield an empty list.
    fn visit_block(
        &mut self,
        block: Option<Block>,
        level: u32,
    ) -> Result<Option<Vec<Fragment>>, CompileError> {
        let Some(block) = block else {
            return Ok(None);
        };

        let mut buffer = Vec::with_capacity(block.nodes.len());
        let mut nodes = block.nodes.into_iter().peekable();

        while let Some(node) = nodes.next() {
            let mut else_node = None;
            if let Node::Mixin(mixin) = &node {
                // An unconsumed else-family mixin never re-triggers grouping;
                // it falls through to direct visitation and errors there.
                if !is_else_name(&mixin.name) {
                    else_node = group_conditional_run(&mixin.name, &mut nodes);
                }
            }

            if let Some(fragment) = self.visit_node(node, else_node, level + 1)? {
                buffer.push(fragment);
            }
        }

        Ok(Some(buffer))
    }

    /// Visits a single node paired with its (possibly synthetic) else node.
    /// Content is computed depth-first before anything else, so the first
    /// structural violation in traversal order is the one reported. Nodes at
    /// nesting level 1 are handed to the root registrar instead of the type
    /// visitors.
    fn visit_node(
        &mut self,
        mut node: Node,
        else_node: Option<MixinNode>,
        level: u32,
    ) -> Result<Option<Fragment>, CompileError> {
        let content = match node.inline_code().cloned() {
            Some(code) => Some(vec![Fragment::Special(Box::new(lookup(
                self.parser,
                &code.val,
                code.escape,
            )))]),
            None => self.visit_block(node.take_block(), level)?,
        };

        let else_content = match else_node {
            Some(mut else_mixin) => self.visit_block(else_mixin.block.take(), level)?,
            None => None,
        };

        if level == 1 {
            return self.register_root_node(&node, content);
        }

        match node {
            Node::Mixin(mixin) if is_else_name(&mixin.name) => Err(CompileError::new(
                CompileErrorKind::UnexpectedElse,
                mixin.line,
            )),
            Node::Mixin(mixin) => Ok(Some(self.visit_mixin(mixin, content, else_content))),
            Node::Tag(tag) => self.visit_tag(tag, content),
            Node::Text(node) => Ok(if node.val.is_empty() {
                None
            } else {
                Some(self.parse_text(&node.val))
            }),
            Node::Comment(comment) => Ok(visit_comment(comment)),
            Node::BlockComment(comment) => {
                let joined = comment.block.nodes.iter().filter_map(text_val).join("\n");
                Ok(visit_comment(CommentNode {
                    val: format!("\n{}\n", joined),
                    buffer: comment.buffer,
                    line: comment.line,
                }))
            }
            Node::Filter(filter) => {
                let input = filter.block.nodes.iter().filter_map(text_val).join("\n");
                match self.filters.apply(&filter.name, &input) {
                    Some(output) => Ok(Some(self.parse_text(&output))),
                    None => Err(CompileError::new(
                        CompileErrorKind::UnknownFilter(filter.name),
                        filter.line,
                    )),
                }
            }
            Node::Doctype(doctype) => {
                self.notice_doctype(doctype.line);
                Ok(None)
            }
            Node::Else(node) => Err(CompileError::new(
                CompileErrorKind::UnexpectedElse,
                node.line,
            )),
        }
    }

    /// Mixins compile to a host directive: `{{>name args}}` when the node
    /// has no content at all, `{{#name args}}` otherwise, with the content
    /// and else-branch attached to the parsed tag.
    fn visit_mixin(
        &self,
        mixin: MixinNode,
        content: Option<Vec<Fragment>>,
        else_content: Option<Vec<Fragment>>,
    ) -> Fragment {
        let symbol = if content.is_none() { '>' } else { '#' };
        let args = mixin.args.as_deref().unwrap_or("");
        let source = format!("{{{{{}{} {}}}}}", symbol, mixin.name, args);

        let mut tag = self.parser.parse_tag(&source);
        tag.content = content;
        tag.else_content = else_content;

        Fragment::Special(Box::new(tag))
    }

    fn visit_tag(
        &self,
        tag: TagNode,
        content: Option<Vec<Fragment>>,
    ) -> Result<Option<Fragment>, CompileError> {
        let tag_name = tag.name.to_uppercase();
        if !self.elements.is_known_element(&tag_name) {
            return Err(CompileError::new(
                CompileErrorKind::UnknownTag(tag_name),
                tag.line,
            ));
        }

        let attrs = normalize_attributes(tag.attrs, self.parser);
        let mut content = content.unwrap_or_default();
        if !attrs.is_empty() {
            content.insert(0, Fragment::Attrs(attrs));
        }

        Ok(Some(self.elements.create_element(&tag_name, content)))
    }
}

/// Buffered comments appear in the output; unbuffered ones vanish.
fn visit_comment(comment: CommentNode) -> Option<Fragment> {
    comment.buffer.then(|| Fragment::Comment(comment.val))
}

fn text_val(node: &Node) -> Option<&str> {
    match node {
        Node::Text(text) => Some(text.val.as_str()),
        _ => None,
    }
}
