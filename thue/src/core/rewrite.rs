//! Pure rewrite primitives: directive classification and first-occurrence
//! substitution.

/// Sentinel introducing an output directive replacement.
pub const OUTPUT_SENTINEL: char = '~';
/// Replacement value that requests a line of external input.
pub const INPUT_SENTINEL: &str = ":::";

/// Interpreted meaning of a rule's replacement text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Empty replacement: delete the matched pattern.
    Erase,
    /// `~`-prefixed replacement: write the remainder, then delete the pattern.
    Output(&'a str),
    /// `:::` replacement: substitute one trimmed line of external input.
    Input,
    /// Ordinary literal substitution.
    Substitute(&'a str),
}

/// Classify a replacement string into its directive form.
pub fn classify(replacement: &str) -> Directive<'_> {
    if replacement.is_empty() {
        Directive::Erase
    } else if let Some(rest) = replacement.strip_prefix(OUTPUT_SENTINEL) {
        Directive::Output(rest)
    } else if replacement == INPUT_SENTINEL {
        Directive::Input
    } else {
        Directive::Substitute(replacement)
    }
}

/// Replace the first occurrence of `needle` in `haystack` with `with`.
///
/// Shared by the erase, output, and substitute paths so all three agree on
/// replace-one semantics. Returns `haystack` unchanged when `needle` is
/// absent; callers select rules by containment first, so that case does not
/// arise during a step.
pub fn replace_first(haystack: &str, needle: &str, with: &str) -> String {
    match haystack.find(needle) {
        Some(at) => {
            let mut next = String::with_capacity(haystack.len() - needle.len() + with.len());
            next.push_str(&haystack[..at]);
            next.push_str(with);
            next.push_str(&haystack[at + needle.len()..]);
            next
        }
        None => haystack.to_string(),
    }
}

/// Turn the two-character escape `\n` in output directive text into a real
/// line break.
pub fn unescape_output(text: &str) -> String {
    text.replace("\\n", "\n")
}
