//! Capture pipeline: index bookkeeping and the sub-generator handed to a
//! user's capture handler (spec §4.5, §6.2).

use crate::args::Args;
use crate::ast::AstNode;

/// A user-supplied callback that replaces a capture group's generated
/// output verbatim. Receives the group's zero-based index (in traversal
/// order), its name (empty when unnamed), a read-only handle to its
/// subtree, a sub-generator that can (re-)generate that subtree using the
/// shared RNG, and the active args.
pub type CaptureHandler = Box<dyn Fn(u32, &str, &AstNode, &SubGenerator<'_>, &Args) -> String>;

/// A handle that regenerates one capture group's subtree on demand.
///
/// Shares RNG state with its parent generator, so each call consumes
/// randomness from the same stream. Valid only for the duration of the
/// capture handler invocation that received it; tolerates being called
/// zero, one, or many times.
pub struct SubGenerator<'a> {
    subtree: &'a AstNode,
    args: &'a Args,
}

impl<'a> SubGenerator<'a> {
    pub(crate) fn new(subtree: &'a AstNode, args: &'a Args) -> Self {
        SubGenerator { subtree, args }
    }

    /// Generates one independent sample of the group's inner subtree.
    pub fn generate(&self) -> String {
        crate::engine::generate_tree(self.subtree, self.args)
    }
}
