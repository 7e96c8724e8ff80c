use braid_core::NodeKind;
use thiserror::Error;

/// A fatal compile error. Compilation stops at the first one; no partial
/// result is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    pub kind: CompileErrorKind,
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileErrorKind {
    /// A tag node whose uppercased name is not a known element.
    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    /// A root `head` or `body` appeared a second time.
    #[error("<{0}> is set twice")]
    DuplicateRootElement(String),

    /// A root `head` or `body` carried attributes.
    #[error("Attributes on <{0}> not supported")]
    RootElementAttributes(String),

    /// A root `template` without exactly one literal `name` attribute.
    #[error("Templates must have only a \"name\" attribute")]
    TemplateNameAttribute,

    /// A template using the reserved name.
    #[error("Template can't be named \"{0}\"")]
    ReservedTemplateName(String),

    /// Two templates sharing one name; reported on the second occurrence.
    #[error("Template \"{0}\" is defined twice")]
    DuplicateTemplate(String),

    /// An `else` / `else if` that no preceding conditional consumed.
    #[error("Unexpected else block")]
    UnexpectedElse,

    /// A filter node naming an unregistered filter.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Any other node at the root level.
    #[error("{} must be inside a template", .0.as_ref())]
    NodeOutsideTemplate(NodeKind),
}

impl CompileError {
    pub fn new(kind: CompileErrorKind, line: Option<usize>) -> Self {
        CompileError { kind, line }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(line) = self.line {
            write!(f, " on line {}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// A non-fatal notice. Compilation continues; notices are pushed to the
/// caller-supplied sink.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileWarning {
    pub kind: CompileWarningKind,
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileWarningKind {
    /// A doctype node anywhere in the tree; the host runtime sets the
    /// doctype itself.
    #[error("the doctype is set by the runtime")]
    DoctypeIgnored,
}

impl std::fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        Ok(())
    }
}
