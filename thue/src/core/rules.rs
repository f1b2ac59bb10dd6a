//! Rule and rule table types for the rewriting engine.

/// One rewrite possibility: replace an occurrence of `pattern` with
/// `replacement`.
///
/// The replacement may carry directive meaning (erase, output, input); see
/// [`crate::core::rewrite::Directive`]. A rule's identity is its position in
/// the table, which drives leftmost/rightmost tie-breaking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Non-empty literal substring to match (parser-guaranteed non-empty).
    pub pattern: String,
    /// Literal replacement text, or a directive form.
    pub replacement: String,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Immutable ordered collection of rules.
///
/// Insertion order is semantically significant: leftmost/rightmost selection
/// picks by table index, not by where a pattern occurs in the state string.
/// Never mutated after construction; an empty table simply never matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Iterate rules with their table index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Rule)> {
        self.rules.iter().enumerate()
    }
}
