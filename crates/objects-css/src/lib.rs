//! CSS selector builder for the object exercises.
//!
//! # Scope
//!
//! - **Fragments** ([§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors),
//!   [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors))
//!   - Type (element), id, class, attribute, pseudo-class, pseudo-element
//!
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Built one fragment at a time through [`CssSelectorBuilder`]
//!   - Fragments must come in the order element, id, class, attribute,
//!     pseudo-class, pseudo-element; element and pseudo-element at most once
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Two selectors joined by a combinator with [`CssSelectorBuilder::combine`]
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! ```
//! use objects_css::CSS_SELECTOR_BUILDER;
//!
//! let builder = CSS_SELECTOR_BUILDER;
//! let left = builder.element("div")?.id("main")?;
//! let right = builder.element("table")?.id("data")?;
//! let selector = builder.combine(left, "+", right);
//! assert_eq!(selector.stringify(), "div#main + table#data");
//! # Ok::<(), objects_css::SelectorError>(())
//! ```
//!
//! # Not Yet Implemented
//!
//! - Parsing selector text back into fragments
//! - Universal selector and namespaces

/// Selector builder facade and selector values.
pub mod builder;
/// Selector vocabulary: fragments, combinators, specificity, errors.
pub mod selector;

// Re-exports for convenience
pub use builder::{CSS_SELECTOR_BUILDER, CompoundSelector, CssSelectorBuilder, Selector};
pub use selector::{Combinator, Fragment, FragmentKind, SelectorError, Specificity};
