use braid_core::{
    AttrPart, AttrsFragment, DirectiveParser, Fragment, Node, RawAttrs,
};
use tracing::warn;

use crate::error::{CompileError, CompileErrorKind, CompileWarning, CompileWarningKind};

use super::attributes::normalize_attributes;
use super::Compiler;

/// Template names the host runtime reserves for itself.
const RESERVED_TEMPLATE_NAME: &str = "content";

impl Compiler<'_> {
    /// Classifies a node at nesting level 1. Only `head`, `body` and named
    /// `template` tags may contribute; comments are skipped, a doctype is
    /// ignored with a notice, and anything else is a structural error.
    pub(super) fn register_root_node(
        &mut self,
        node: &Node,
        content: Option<Vec<Fragment>>,
    ) -> Result<Option<Fragment>, CompileError> {
        match node {
            // Top-level comments contribute nothing
            Node::Comment(_) | Node::BlockComment(_) => Ok(None),

            Node::Doctype(doctype) => {
                self.notice_doctype(doctype.line);
                Ok(None)
            }

            Node::Tag(tag) if tag.name == "head" || tag.name == "body" => {
                let slot = if tag.name == "head" {
                    &mut self.head
                } else {
                    &mut self.body
                };
                if slot.is_some() {
                    return Err(CompileError::new(
                        CompileErrorKind::DuplicateRootElement(tag.name.clone()),
                        tag.line,
                    ));
                }
                if !tag.attrs.is_empty() {
                    return Err(CompileError::new(
                        CompileErrorKind::RootElementAttributes(tag.name.clone()),
                        tag.line,
                    ));
                }
                *slot = content;
                Ok(None)
            }

            Node::Tag(tag) if tag.name == "template" => {
                let name = template_name(&tag.attrs, self.parser).ok_or_else(|| {
                    CompileError::new(CompileErrorKind::TemplateNameAttribute, tag.line)
                })?;
                if name == RESERVED_TEMPLATE_NAME {
                    return Err(CompileError::new(
                        CompileErrorKind::ReservedTemplateName(name),
                        tag.line,
                    ));
                }
                if self.templates.contains_key(&name) {
                    return Err(CompileError::new(
                        CompileErrorKind::DuplicateTemplate(name),
                        tag.line,
                    ));
                }
                self.templates.insert(name, content);
                Ok(None)
            }

            // Tags, mixins, text, filters etc. may not float at the root
            other => Err(CompileError::new(
                CompileErrorKind::NodeOutsideTemplate(other.kind()),
                other.line(),
            )),
        }
    }

    pub(super) fn notice_doctype(&mut self, line: Option<usize>) {
        warn!(line, "ignoring doctype; the host runtime sets it");
        self.warnings.push(CompileWarning {
            kind: CompileWarningKind::DoctypeIgnored,
            line,
        });
    }
}

/// Extracts the template name: exactly one attribute, named `name`, with a
/// quoted literal value.
fn template_name(attrs: &RawAttrs, parser: &dyn DirectiveParser) -> Option<String> {
    let RawAttrs::Entries(entries) = attrs else {
        return None;
    };
    let [entry] = entries.as_slice() else {
        return None;
    };
    if entry.name != "name" {
        return None;
    }

    let AttrsFragment::Map(map) = normalize_attributes(attrs.clone(), parser) else {
        return None;
    };
    let parts = map.get("name")?;
    let [AttrPart::Literal(name)] = parts.as_slice() else {
        return None;
    };
    Some(name.clone())
}
