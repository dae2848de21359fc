//! Thin adapter over `regex_syntax`, producing the tagged node tree in
//! `ast::AstNode`.
//!
//! `regex_syntax::Hir` already folds `.`/`(?s).` into an ordinary `Class`
//! and has no explicit "any char" variants the way older `regex_syntax`
//! releases (and the `Expr` enum several sibling crates in this workspace's
//! lineage still use) did. We recover that distinction by recognizing the
//! two maximal-range shapes it emits for them.

use regex_syntax::hir::{Capture, Class, Hir, HirKind, Literal, Look, Repetition};
use regex_syntax::ParserBuilder;

use crate::ast::AstNode;
use crate::error::Error;
use crate::flags::Flags;

/// `MAX_SUPPORTED_REPEAT_COUNT` from spec §6.4 — mirrors the underlying
/// parser's own cap on explicit `{n,m}` bounds.
pub const MAX_SUPPORTED_REPEAT_COUNT: u32 = 1000;

/// Every byte value there is — the size `.` with `(?s)` covers once the
/// parser runs in byte mode (see `from_pattern`).
const ALL_BYTE_VALUES: u64 = 0x100;

/// Parses `pattern` under `flags` and bridges the result into an
/// [`AstNode`] tree.
pub fn from_pattern(pattern: &str, flags: Flags) -> Result<AstNode, Error> {
    if let Some(name) = flags.rejected_names().into_iter().next() {
        return Err(Error::UnsupportedFlag(name));
    }
    // `regex_syntax` has no flag that gates `\p{...}`/`\P{...}` the way
    // Go's `syntax.UnicodeGroups` does — it accepts them unconditionally
    // once `unicode(true)`, and `unicode(false)` doesn't reject the syntax
    // either, it just resolves escapes to their ASCII subset. So this is
    // checked by hand rather than left to the parser.
    if !flags.contains(Flags::UNICODE_GROUPS) && pattern_requests_unicode_groups(pattern) {
        return Err(Error::UnsupportedFlag("UnicodeGroups"));
    }

    // `unicode(false)` is how "UnicodeGroups rejected, Perl/PerlX accepted"
    // is realized for `\d \s \w`: Perl's grammar is always on, but with
    // unicode mode off they resolve to ASCII-only ranges (scenario S5).
    // `utf8(false)` is required alongside it: in byte mode `.` and negated
    // classes span raw byte ranges that include lone bytes which aren't
    // valid standalone UTF-8 (e.g. 0x80), and the parser's default
    // `utf8(true)` refuses to build an `Hir` that could match those —
    // rejecting the single most common regex metacharacter outright.
    let hir = ParserBuilder::new()
        .unicode(false)
        .utf8(false)
        .build()
        .parse(pattern)?;
    log::debug!("parsed pattern into hir: {:?}", hir.kind());

    bridge(&hir)
}

/// Detects an unescaped `\p`/`\P` in `pattern`, the Unicode general-category
/// escape forms (`\pL`, `\p{Greek}`, `\P{L}`, ...).
///
/// A `\` only starts an escape if it isn't itself escaped, so a run of `\`
/// characters only counts if its length is odd.
fn pattern_requests_unicode_groups(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            let run_start = i;
            while i < bytes.len() && bytes[i] == b'\\' {
                i += 1;
            }
            let run_len = i - run_start;
            if run_len % 2 == 1 && i < bytes.len() && (bytes[i] == b'p' || bytes[i] == b'P') {
                return true;
            }
        } else {
            i += 1;
        }
    }
    false
}

fn bridge(hir: &Hir) -> Result<AstNode, Error> {
    match hir.kind() {
        HirKind::Empty => Ok(AstNode::EmptyMatch),
        HirKind::Literal(Literal(bytes)) => {
            let text = std::str::from_utf8(bytes).map_err(|_| Error::EmptyClass)?;
            Ok(AstNode::Literal(text.chars().collect()))
        }
        HirKind::Class(class) => bridge_class(class),
        HirKind::Look(look) => Ok(bridge_look(*look)),
        HirKind::Repetition(rep) => bridge_repetition(rep),
        HirKind::Capture(cap) => bridge_capture(cap),
        HirKind::Concat(children) => {
            let children = children.iter().map(bridge).collect::<Result<_, _>>()?;
            Ok(AstNode::Concat(children))
        }
        HirKind::Alternation(children) => {
            let children = children.iter().map(bridge).collect::<Result<_, _>>()?;
            Ok(AstNode::Alternate(children))
        }
    }
}

fn bridge_class(class: &Class) -> Result<AstNode, Error> {
    let ranges: Vec<(char, char)> = match class {
        Class::Unicode(u) => u.ranges().iter().map(|r| (r.start(), r.end())).collect(),
        Class::Bytes(b) => b
            .ranges()
            .iter()
            .map(|r| (r.start() as char, r.end() as char))
            .collect(),
    };
    if ranges.is_empty() {
        return Err(Error::EmptyClass);
    }

    let total: u64 = ranges
        .iter()
        .map(|&(lo, hi)| hi as u64 - lo as u64 + 1)
        .sum();
    if total == ALL_BYTE_VALUES {
        return Ok(AstNode::AnyChar);
    }
    if total == ALL_BYTE_VALUES - 1 && !class_contains(&ranges, '\n') {
        return Ok(AstNode::AnyCharNotNewline);
    }
    Ok(AstNode::CharClass(ranges))
}

fn class_contains(ranges: &[(char, char)], c: char) -> bool {
    ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
}

fn bridge_look(look: Look) -> AstNode {
    match look {
        Look::Start => AstNode::BeginText,
        Look::End => AstNode::EndText,
        Look::StartLF | Look::StartCRLF => AstNode::BeginLine,
        Look::EndLF | Look::EndCRLF => AstNode::EndLine,
        Look::WordAscii | Look::WordUnicode => AstNode::WordBoundary,
        Look::WordAsciiNegate | Look::WordUnicodeNegate => AstNode::NoWordBoundary,
    }
}

fn bridge_repetition(rep: &Repetition) -> Result<AstNode, Error> {
    if let Some(max) = rep.max {
        if max > MAX_SUPPORTED_REPEAT_COUNT {
            return Err(Error::RepeatCountExceeded {
                found: max,
                max: MAX_SUPPORTED_REPEAT_COUNT,
            });
        }
    }
    let child = Box::new(bridge(&rep.sub)?);
    Ok(AstNode::Repeat {
        child,
        lo: rep.min,
        hi: rep.max,
    })
}

fn bridge_capture(cap: &Capture) -> Result<AstNode, Error> {
    let child = Box::new(bridge(&cap.sub)?);
    let name = cap.name.as_ref().map(|s| s.to_string()).unwrap_or_default();
    // `regex_syntax` numbers capture groups 1-based (index 0 is the
    // implicit whole-match group it never materializes as a node); the
    // generator core recomputes a 0-based index from traversal order
    // rather than trusting this field, but it is kept for diagnostics.
    Ok(AstNode::Capture {
        index: cap.index.saturating_sub(1),
        name,
        child,
    })
}
