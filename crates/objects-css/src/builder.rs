//! CSS selector builder
//!
//! [`CssSelectorBuilder`] is a stateless facade. Each fragment call returns
//! a fresh [`CompoundSelector`]; extending one copies its fragments and
//! appends, so earlier values stay valid and can be extended independently.
//!
//! Validation happens eagerly, at the call that appends the offending
//! fragment. [`CssSelectorBuilder::combine`] joins two finished selectors
//! into a [`Selector`], which has no fragment operations of its own.

use std::fmt;

use objects_common::warning::warn_once;
use serde::Serialize;

use crate::selector::{Combinator, Fragment, FragmentKind, SelectorError, Specificity};

/// Shared instance of the stateless builder facade.
pub const CSS_SELECTOR_BUILDER: CssSelectorBuilder = CssSelectorBuilder;

/// Ordering state of one compound selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Run {
    /// Highest-ranked kind appended so far.
    last: Option<FragmentKind>,
    has_element: bool,
    has_pseudo_element: bool,
}

impl Run {
    /// Check `kind` against the run and return the state after appending it.
    fn admit(self, kind: FragmentKind) -> Result<Self, SelectorError> {
        if let Some(after) = self.last.filter(|after| kind.rank() < after.rank()) {
            return Err(SelectorError::OrderingViolation { kind, after });
        }

        let mut next = self;
        match kind {
            FragmentKind::Element => {
                if self.has_element {
                    return Err(SelectorError::DuplicateViolation { kind });
                }
                next.has_element = true;
            }
            FragmentKind::PseudoElement => {
                if self.has_pseudo_element {
                    return Err(SelectorError::DuplicateViolation { kind });
                }
                next.has_pseudo_element = true;
            }
            _ => {}
        }
        next.last = Some(kind);
        Ok(next)
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
///
/// Built only through the fragment operations, so it always satisfies the
/// ordering and uniqueness rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundSelector {
    fragments: Vec<Fragment>,
    #[serde(skip)]
    run: Run,
}

impl CompoundSelector {
    fn start(kind: FragmentKind, value: &str) -> Result<Self, SelectorError> {
        Self {
            fragments: Vec::new(),
            run: Run::default(),
        }
        .push(kind, value)
    }

    fn push(&self, kind: FragmentKind, value: &str) -> Result<Self, SelectorError> {
        let run = self.run.admit(kind)?;
        let mut fragments = Vec::with_capacity(self.fragments.len() + 1);
        fragments.extend_from_slice(&self.fragments);
        fragments.push(Fragment::new(kind, value));
        Ok(Self { fragments, run })
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateViolation`] if an element is already
    /// present, [`SelectorError::OrderingViolation`] after any other kind.
    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Element, value)
    }

    /// Append an id selector, rendered `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderingViolation`] after a class, attribute,
    /// pseudo-class or pseudo-element.
    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Id, value)
    }

    /// Append a class selector, rendered `.value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderingViolation`] after an attribute, pseudo-class
    /// or pseudo-element.
    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Class, value)
    }

    /// Append an attribute selector, rendered `[value]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderingViolation`] after a pseudo-class or
    /// pseudo-element.
    pub fn attr(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Attribute, value)
    }

    /// Append a pseudo-class, rendered `:value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderingViolation`] after a pseudo-element.
    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::PseudoClass, value)
    }

    /// Append a pseudo-element, rendered `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateViolation`] if a pseudo-element is already
    /// present.
    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::PseudoElement, value)
    }

    /// The fragments in append order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Specificity of this compound selector.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        Specificity::of(&self.fragments)
    }

    /// Render as CSS text, e.g. `#main.container.editable`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fragments(f, &self.fragments)
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// A finished selector, possibly spanning several compound selectors joined
/// by combinators. It can be rendered and combined further, but not extended
/// with fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    fragments: Vec<Fragment>,
}

impl Selector {
    /// The fragments in order, combinators included.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Specificity summed over every compound selector.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        Specificity::of(&self.fragments)
    }

    /// Render as CSS text, e.g. `div#main + table#data`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self {
            fragments: compound.fragments,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fragments(f, &self.fragments)
    }
}

fn write_fragments(f: &mut fmt::Formatter<'_>, fragments: &[Fragment]) -> fmt::Result {
    for fragment in fragments {
        write!(f, "{fragment}")?;
    }
    Ok(())
}

/// Stateless entry point for building selectors.
///
/// ```
/// use objects_css::{CSS_SELECTOR_BUILDER, SelectorError};
///
/// let builder = CSS_SELECTOR_BUILDER;
/// let link = builder.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
///
/// let err = builder.id("main")?.element("div").unwrap_err();
/// assert!(matches!(err, SelectorError::OrderingViolation { .. }));
/// # Ok::<(), SelectorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CssSelectorBuilder;

// The facade carries no state; methods take `self` so calls read as
// `builder.element(..)` on the shared instance.
#[allow(clippy::unused_self)]
impl CssSelectorBuilder {
    /// Start a selector with a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector; the `Result` matches
    /// [`CompoundSelector::element`].
    pub fn element(self, value: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::start(FragmentKind::Element, value)
    }

    /// Start a selector with an id selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector.
    pub fn id(self, value: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::start(FragmentKind::Id, value)
    }

    /// Start a selector with a class selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector.
    pub fn class(self, value: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::start(FragmentKind::Class, value)
    }

    /// Start a selector with an attribute selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector.
    pub fn attr(self, value: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::start(FragmentKind::Attribute, value)
    }

    /// Start a selector with a pseudo-class.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector.
    pub fn pseudo_class(self, value: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::start(FragmentKind::PseudoClass, value)
    }

    /// Start a selector with a pseudo-element.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector.
    pub fn pseudo_element(self, value: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::start(FragmentKind::PseudoElement, value)
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Join `left` and `right` with `combinator`, rendered with a space on
    /// each side. Neither side is re-validated against the other: the
    /// combinator starts a new compound selector.
    ///
    /// Any symbol is accepted. One that is not a CSS combinator
    /// (`" "`, `">"`, `"+"`, `"~"`) is reported once on stderr.
    #[must_use]
    pub fn combine(
        self,
        left: impl Into<Selector>,
        combinator: &str,
        right: impl Into<Selector>,
    ) -> Selector {
        if combinator.parse::<Combinator>().is_err() {
            warn_once("CSS", &format!("unrecognized combinator '{combinator}'"));
        }

        let mut fragments = left.into().fragments;
        fragments.push(Fragment::new(FragmentKind::Combinator, combinator));
        fragments.extend(right.into().fragments);
        Selector { fragments }
    }
}
