//! Regex parsing/semantic flags forwarded to the underlying parser.

use bitflags::bitflags;

bitflags! {
    /// Flags accepted by [`crate::args::Args`], mirroring the flag names a
    /// regex engine's own syntax package would expose.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        /// Enables `\d \s \w \D \S \W` Perl character classes.
        const PERL = 0b001;
        /// Enables named captures and the rest of the Perl extension syntax.
        const PERLX = 0b010;
        /// Unicode general-category/script classes (`\p{L}`, `\p{Greek}`, ...).
        ///
        /// Rejected by [`crate::args::initialize`]; kept as a bit so the
        /// rejection can be expressed the same way as any other
        /// flag-by-name check.
        const UNICODE_GROUPS = 0b100;
    }
}

impl Flags {
    /// The flag combination the underlying parser should reject by name.
    ///
    /// Structured as a lookup rather than a single `if` so a second
    /// rejected flag could be added later without restructuring
    /// `initialize`.
    pub(crate) fn rejected_names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Flags::UNICODE_GROUPS) {
            names.push("UnicodeGroups");
        }
        names
    }
}
