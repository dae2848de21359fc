//! Generator core: recursive dispatch over `AstNode` kinds (spec §4.2).
//!
//! `dispatch` is a pure function of `(node, ctx)`; `ctx` carries the args,
//! RNG access, and the mutable capture-index counter for a single
//! `Generate` call. Anchors are no-ops — generation has no positional
//! semantics, so `$abc^` generates `abc` just like `abc` does.

use rand::Rng;

use crate::args::Args;
use crate::ast::AstNode;
use crate::capture::SubGenerator;
use crate::sampler::{sample_repeat_count, sample_rune_range};

/// `.` without `(?s)`: printable ASCII, the same practical choice the
/// teacher's own rejection-sampling MVP made — full 32-bit codepoint
/// sampling is neither useful nor testable.
const PRINTABLE_ASCII: (char, char) = ('\x20', '\x7e');

/// `(?s).`: printable ASCII plus `\n`.
const PRINTABLE_ASCII_WITH_NEWLINE: [(char, char); 2] = [('\n', '\n'), ('\x20', '\x7e')];

struct GenContext<'a> {
    args: &'a Args,
    next_capture_index: u32,
}

/// Generates one string from `root`, using `args`' shared RNG.
///
/// Used both for top-level `Generator::generate` calls and for each
/// `SubGenerator::generate` call a capture handler makes — each gets its
/// own fresh capture-index counter, per spec §4.2's "order encountered
/// during the traversal of a single `Generate` call."
pub fn generate_tree(root: &AstNode, args: &Args) -> String {
    let mut ctx = GenContext {
        args,
        next_capture_index: 0,
    };
    let mut out = String::new();
    dispatch(root, &mut ctx, &mut out);
    out
}

fn dispatch(node: &AstNode, ctx: &mut GenContext<'_>, out: &mut String) {
    match node {
        AstNode::EmptyMatch => {}

        AstNode::Literal(chars) => out.extend(chars.iter()),

        AstNode::AnyCharNotNewline => {
            let mut rng = ctx.args.rng();
            let c = sample_rune_range(&[PRINTABLE_ASCII], &mut *rng)
                .expect("PRINTABLE_ASCII is a non-empty constant range");
            out.push(c);
        }

        AstNode::AnyChar => {
            let mut rng = ctx.args.rng();
            let c = sample_rune_range(&PRINTABLE_ASCII_WITH_NEWLINE, &mut *rng)
                .expect("PRINTABLE_ASCII_WITH_NEWLINE is a non-empty constant range");
            out.push(c);
        }

        AstNode::CharClass(ranges) => {
            let mut rng = ctx.args.rng();
            let c = sample_rune_range(ranges, &mut *rng)
                .expect("bridge::from_pattern never emits an empty class");
            out.push(c);
        }

        AstNode::BeginLine
        | AstNode::EndLine
        | AstNode::BeginText
        | AstNode::EndText
        | AstNode::WordBoundary
        | AstNode::NoWordBoundary => {}

        AstNode::Concat(children) => {
            for child in children {
                dispatch(child, ctx, out);
            }
        }

        AstNode::Alternate(children) => {
            let idx = {
                let mut rng = ctx.args.rng();
                rng.gen_range(0..children.len())
            };
            dispatch(&children[idx], ctx, out);
        }

        AstNode::Capture { name, child, .. } => {
            let index = ctx.next_capture_index;
            ctx.next_capture_index += 1;

            if let Some(handler) = &ctx.args.capture_group_handler {
                let sub_gen = SubGenerator::new(child, ctx.args);
                let replacement = handler(index, name, child, &sub_gen, ctx.args);
                out.push_str(&replacement);
            } else {
                dispatch(child, ctx, out);
            }
        }

        AstNode::Repeat { child, lo, hi } => {
            let count = {
                let mut rng = ctx.args.rng();
                sample_repeat_count(*lo, *hi, ctx.args, &mut *rng)
            };
            for _ in 0..count {
                dispatch(child, ctx, out);
            }
        }
    }
}
