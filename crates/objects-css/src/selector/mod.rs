//! CSS selector vocabulary
//!
//! The pieces a selector is assembled from, per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).

use std::fmt;

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

/// The kind of a [`Fragment`].
///
/// Every kind except [`FragmentKind::Combinator`] has a rank, and within a
/// compound selector fragments must appear in non-decreasing rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `img`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#image`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.editable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:first-child`
    PseudoClass,

    /// [CSS Pseudo-Elements](https://www.w3.org/TR/css-pseudo-4/)
    ///
    /// Examples: `::before`, `::after`
    PseudoElement,

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Joins two compound selectors; starts a new ordering run.
    Combinator,
}

impl FragmentKind {
    /// Ordering rank: element 0, id 1, class 2, attribute 3, pseudo-class 4,
    /// pseudo-element 5. Combinators are unranked.
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::Element => Some(0),
            Self::Id => Some(1),
            Self::Class => Some(2),
            Self::Attribute => Some(3),
            Self::PseudoClass => Some(4),
            Self::PseudoElement => Some(5),
            Self::Combinator => None,
        }
    }

    /// Whether the kind may occur at most once per compound selector.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::PseudoElement)
    }

    /// Text written before and after the fragment value.
    const fn affixes(self) -> (&'static str, &'static str) {
        match self {
            Self::Element => ("", ""),
            Self::Id => ("#", ""),
            Self::Class => (".", ""),
            Self::Attribute => ("[", "]"),
            Self::PseudoClass => (":", ""),
            Self::PseudoElement => ("::", ""),
            Self::Combinator => (" ", " "),
        }
    }
}

/// One typed, valued piece of a selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Fragment {
    kind: FragmentKind,
    value: String,
}

impl Fragment {
    pub(crate) fn new(kind: FragmentKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }

    /// The fragment's kind.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// The literal text, without any `#`, `.`, `[]` or `:` decoration.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Shorthand for `self.kind().rank()`.
    #[must_use]
    pub const fn rank(&self) -> Option<u8> {
        self.kind.rank()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = self.kind.affixes();
        write!(f, "{open}{}{close}", self.value)
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The combinator symbols CSS defines. [`crate::CssSelectorBuilder::combine`]
/// takes the symbol as text; `Combinator::Child.as_ref()` gives `">"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that
    /// follows element A (not necessarily immediately)."
    #[strum(serialize = "~")]
    SubsequentSibling,
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }

    /// Sum the contributions of every fragment. Combinators contribute nothing.
    pub(crate) fn of(fragments: &[Fragment]) -> Self {
        let mut spec = Self::default();
        for fragment in fragments {
            match fragment.kind {
                FragmentKind::Id => spec.0 += 1,
                FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                    spec.1 += 1;
                }
                FragmentKind::Element | FragmentKind::PseudoElement => spec.2 += 1,
                FragmentKind::Combinator => {}
            }
        }
        spec
    }
}

/// Errors raised while appending a fragment to a compound selector.
///
/// The messages are fixed; the fields say which fragment was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// A fragment was appended after one of higher rank.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderingViolation {
        /// The rejected fragment's kind.
        kind: FragmentKind,
        /// The highest-ranked kind already in the compound selector.
        after: FragmentKind,
    },

    /// A second element or pseudo-element was appended.
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector")]
    DuplicateViolation {
        /// The repeated kind.
        kind: FragmentKind,
    },
}
