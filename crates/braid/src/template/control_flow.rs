use std::collections::VecDeque;
use std::iter::Peekable;

use braid_core::{Block, MixinNode, Node};

pub(crate) const IF: &str = "if";
pub(crate) const ELSE: &str = "else";
pub(crate) const ELSE_IF: &str = "else if";

/// Whether a mixin name belongs to the else family. Such a node is only
/// meaningful when consumed as a follower of a preceding conditional.
pub(crate) fn is_else_name(name: &str) -> bool {
    name == ELSE || name == ELSE_IF
}

/// Consumes the maximal contiguous run of else-family mixins immediately
/// following a mixin named `mixin_name` and returns the else node to pair
/// with it, re-grouped by two:
///
/// ```text
/// if a               if a
/// else if b          else
/// else          =>     if b
///                      else
/// ```
///
/// An `if` admits both `else if` and `else` followers; any other mixin
/// (`unless`, `each`, a component invocation) admits only a plain `else`.
/// When the first consumed follower is an `else if`, it is renamed to `if`
/// and wrapped in a synthetic `else` whose block carries it plus the rest of
/// the run; visiting that block re-enters this grouping, so a chain of
/// length k ends up right-nested with depth k − 1.
pub(crate) fn group_conditional_run<I>(
    mixin_name: &str,
    siblings: &mut Peekable<I>,
) -> Option<MixinNode>
where
    I: Iterator<Item = Node>,
{
    let followers: &[&str] = if mixin_name == IF {
        &[ELSE_IF, ELSE]
    } else {
        &[ELSE]
    };

    let mut run: VecDeque<MixinNode> = VecDeque::new();
    while matches!(
        siblings.peek(),
        Some(Node::Mixin(next)) if followers.contains(&next.name.as_str())
    ) {
        let Some(Node::Mixin(consumed)) = siblings.next() else {
            unreachable!()
        };
        run.push_back(consumed);
    }

    let mut first = run.pop_front()?;
    if first.name != ELSE_IF {
        return Some(first);
    }

    first.name = IF.to_owned();
    let mut nodes = Vec::with_capacity(1 + run.len());
    nodes.push(Node::Mixin(first));
    nodes.extend(run.into_iter().map(Node::Mixin));

    Some(MixinNode {
        name: ELSE.to_owned(),
        args: None,
        block: Some(Block { nodes }),
        line: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{else_if_mixin, else_mixin, mixin};

    fn peekable(nodes: Vec<Node>) -> Peekable<std::vec::IntoIter<Node>> {
        nodes.into_iter().peekable()
    }

    #[test]
    fn pairs_plain_else() {
        // if a
        // else
        let mut rest = peekable(vec![Node::Mixin(else_mixin())]);
        let grouped = group_conditional_run("if", &mut rest).expect("must pair the else");

        assert_eq!(ELSE, grouped.name);
        assert!(grouped.block.is_some());
        assert!(rest.next().is_none());
    }

    #[test]
    fn wraps_else_if_run_into_synthetic_else() {
        // if a
        // else if b
        // else if c
        // else
        let mut rest = peekable(vec![
            Node::Mixin(else_if_mixin("b")),
            Node::Mixin(else_if_mixin("c")),
            Node::Mixin(else_mixin()),
        ]);
        let grouped = group_conditional_run("if", &mut rest).expect("must pair the run");

        assert_eq!(ELSE, grouped.name);
        assert_eq!(None, grouped.line);
        let block = grouped.block.expect("synthetic else carries a block");
        assert_eq!(3, block.nodes.len());

        // First element of the run was relabeled `if`, the rest kept as-is
        let Node::Mixin(renamed) = &block.nodes[0] else {
            panic!("not a mixin")
        };
        assert_eq!(IF, renamed.name);
        assert_eq!(Some("b".to_owned()), renamed.args);

        let Node::Mixin(kept) = &block.nodes[1] else {
            panic!("not a mixin")
        };
        assert_eq!(ELSE_IF, kept.name);

        assert!(rest.next().is_none());
    }

    #[test]
    fn returns_none_without_followers() {
        // if a
        // p
        let mut rest = peekable(vec![Node::Text(braid_core::TextNode {
            val: "standalone".into(),
            line: None,
        })]);
        assert!(group_conditional_run("if", &mut rest).is_none());
        assert_eq!(1, rest.count());
    }

    #[test]
    fn non_if_mixin_only_consumes_plain_else() {
        // each items
        // else if b   <- not a valid follower of `each`
        let mut rest = peekable(vec![Node::Mixin(else_if_mixin("b"))]);
        assert!(group_conditional_run("each", &mut rest).is_none());
        assert_eq!(1, rest.count());

        // each items
        // else
        let mut rest = peekable(vec![Node::Mixin(else_mixin())]);
        let grouped = group_conditional_run("each", &mut rest).expect("must pair the else");
        assert_eq!(ELSE, grouped.name);
        assert!(rest.next().is_none());
    }

    #[test]
    fn run_stops_at_first_non_follower() {
        // if a
        // else
        // p            <- breaks the run
        // else
        let stray = Node::Mixin(mixin("stray", None));
        let mut rest = peekable(vec![
            Node::Mixin(else_mixin()),
            stray.clone(),
            Node::Mixin(else_mixin()),
        ]);
        let grouped = group_conditional_run("if", &mut rest).expect("must pair the else");
        assert_eq!(ELSE, grouped.name);
        // The stray mixin and the second else are left for the caller
        assert_eq!(2, rest.count());
    }

    #[test]
    fn extra_consumed_followers_are_dropped() {
        // if a
        // else
        // else
        // Both elses are consumed; the first becomes the branch, the second
        // never reaches direct visitation.
        let mut rest = peekable(vec![Node::Mixin(else_mixin()), Node::Mixin(else_mixin())]);
        let grouped = group_conditional_run("if", &mut rest).expect("must pair the else");
        assert_eq!(ELSE, grouped.name);
        assert!(grouped.block.is_some());
        assert!(rest.next().is_none());
    }

    #[test]
    fn else_family_names() {
        assert!(is_else_name("else"));
        assert!(is_else_name("else if"));
        assert!(!is_else_name("if"));
        assert!(!is_else_name("unless"));
    }
}
