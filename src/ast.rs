//! Tagged AST for the node kinds this engine dispatches on.
//!
//! This is the crate's own sealed hierarchy, independent of whatever shape
//! the underlying parser's AST takes. `bridge::from_pattern` is the only
//! thing that knows how to build one of these from `regex_syntax::Hir`.

/// An inclusive codepoint range, as emitted by a character class.
pub type RuneRange = (char, char);

/// A regex AST node, in the shape the generator core dispatches on.
///
/// Immutable once built; generation never mutates a tree, only walks it.
#[derive(Debug, Clone)]
pub enum AstNode {
    /// Matches the empty string.
    EmptyMatch,
    /// A fixed sequence of codepoints, emitted verbatim.
    Literal(Vec<char>),
    /// Any codepoint excluding `\n`.
    AnyCharNotNewline,
    /// Any codepoint, including `\n`.
    AnyChar,
    /// A set of inclusive codepoint ranges (negation already folded in by
    /// the parser).
    CharClass(Vec<RuneRange>),
    /// `^` without multiline: start of line.
    BeginLine,
    /// `$` without multiline: end of line.
    EndLine,
    /// `\A`: start of text.
    BeginText,
    /// `\z`: end of text.
    EndText,
    /// `\b`
    WordBoundary,
    /// `\B`
    NoWordBoundary,
    /// A capturing group. `name` is empty for unnamed captures.
    ///
    /// Non-capturing groups never produce this node — the bridge folds
    /// `(?:...)` straight through to its child.
    Capture {
        index: u32,
        name: String,
        child: Box<AstNode>,
    },
    /// An ordered sequence of nodes.
    Concat(Vec<AstNode>),
    /// A choice between nodes.
    Alternate(Vec<AstNode>),
    /// A repeated node. `hi` is `None` for an unbounded upper bound.
    Repeat {
        child: Box<AstNode>,
        lo: u32,
        hi: Option<u32>,
    },
}
