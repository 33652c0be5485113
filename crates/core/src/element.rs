//! # Elements - Formal Sums of Diagrams
//!
//! An [`Element`] is a member of the algebra TL_n proper: a formal linear
//! combination of diagrams with exact rational coefficients. Every
//! diagram-level operation lifts to elements by distributing over the
//! terms and then *condensing* — merging terms of identical shape and
//! dropping terms whose coefficient cancelled to zero.
//!
//! Condensation is the canonical normal form. Elements are kept condensed
//! at all times, so extensional equality is plain set equality of
//! `(shape, coefficient)` pairs.
//!
//! ## The zero element
//!
//! The additive identity is the empty term list — the only state allowed
//! to have no terms. It still carries an `n` so dimension checks stay
//! meaningful, it is neutral for [`Element::add`], and it is absorbing for
//! [`Element::compose`] and [`Element::tensor`].

use num_rational::Rational64;
use num_traits::Zero;
use std::fmt;

use crate::diagram::Diagram;
use crate::error::TlError;

/// A formal sum of diagrams in TL_n, kept in condensed normal form:
/// no two terms share a shape, no term has coefficient zero.
#[derive(Debug, Clone)]
pub struct Element {
    n: usize,
    terms: Vec<Diagram>,
}

impl Element {
    /// Build an element from a non-empty list of diagrams of equal n,
    /// then condense. Fails with [`TlError::Validation`] on an empty list
    /// or inconsistent strand counts.
    pub fn new(diagrams: Vec<Diagram>) -> Result<Self, TlError> {
        let n = match diagrams.first() {
            Some(first) => first.n(),
            None => {
                return Err(TlError::Validation {
                    reason: "empty diagram list".to_string(),
                })
            }
        };
        if let Some(stray) = diagrams.iter().find(|d| d.n() != n) {
            return Err(TlError::Validation {
                reason: format!(
                    "inconsistent strand counts: expected n = {n}, found n = {}",
                    stray.n()
                ),
            });
        }

        Ok(Self {
            n,
            terms: condense(diagrams),
        })
    }

    /// The additive identity of TL_n: no terms at all.
    pub fn zero(n: usize) -> Self {
        Self { n, terms: Vec::new() }
    }

    /// The multiplicative identity of TL_n as a one-term sum.
    pub fn identity(n: usize) -> Self {
        Diagram::identity(n).into()
    }

    /// The generator `U_i` of TL_n lifted to a one-term sum.
    pub fn generator(n: usize, i: usize) -> Result<Self, TlError> {
        Ok(Diagram::generator(n, i)?.into())
    }

    /// This element lives in TL_n; returns that n.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The condensed terms, in first-seen order.
    pub fn terms(&self) -> &[Diagram] {
        &self.terms
    }

    /// True iff this element is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Formal sum of two elements of the same algebra.
    pub fn add(&self, other: &Element) -> Result<Element, TlError> {
        if self.n != other.n {
            return Err(TlError::DimensionMismatch {
                expected: self.n,
                got: other.n,
            });
        }

        let mut combined = self.terms.clone();
        combined.extend(other.terms.iter().cloned());
        Ok(Self {
            n: self.n,
            terms: condense(combined),
        })
    }

    /// Multiply every coefficient by `c`. Shapes are untouched, so no
    /// merging can occur; scaling by zero collapses to the zero element.
    pub fn scale_by(&self, c: Rational64) -> Element {
        if c.is_zero() {
            return Self::zero(self.n);
        }
        Self {
            n: self.n,
            terms: self.terms.iter().map(|d| d.scale_by(c)).collect(),
        }
    }

    /// Algebra multiplication: stack `self` on top of `other`.
    ///
    /// Distributes diagram-level composition over the full cross product
    /// of term pairs, then condenses. This is where per-pair loop factors
    /// surface and where identical resulting shapes combine or cancel.
    pub fn compose(&self, other: &Element) -> Result<Element, TlError> {
        if self.n != other.n {
            return Err(TlError::DimensionMismatch {
                expected: self.n,
                got: other.n,
            });
        }

        let mut products = Vec::with_capacity(self.terms.len() * other.terms.len());
        for top in &self.terms {
            for bottom in &other.terms {
                products.push(top.compose(bottom)?);
            }
        }
        Ok(Self {
            n: self.n,
            terms: condense(products),
        })
    }

    /// Side-by-side juxtaposition; the result lives in TL_{self.n + other.n}.
    pub fn tensor(&self, other: &Element) -> Element {
        let mut products = Vec::with_capacity(self.terms.len() * other.terms.len());
        for left in &self.terms {
            for right in &other.terms {
                products.push(left.tensor(right));
            }
        }
        Self {
            n: self.n + other.n,
            terms: condense(products),
        }
    }
}

/// Merge terms of identical shape by summing coefficients and drop exact
/// zeros. First-seen order is preserved, so the result is deterministic
/// given the input order; the extensional value is order-independent.
fn condense(diagrams: Vec<Diagram>) -> Vec<Diagram> {
    let mut merged: Vec<Diagram> = Vec::new();
    for d in diagrams {
        match merged.iter_mut().find(|t| t.shape_eq(&d)) {
            Some(existing) => {
                *existing = existing.with_coefficient(existing.coefficient() + d.coefficient());
            }
            None => merged.push(d),
        }
    }
    merged.retain(|t| !t.coefficient().is_zero());
    merged
}

impl From<Diagram> for Element {
    /// Lift a single diagram to a one-term sum (or to zero, if its
    /// coefficient already is).
    fn from(d: Diagram) -> Self {
        let n = d.n();
        let terms = if d.coefficient().is_zero() {
            Vec::new()
        } else {
            vec![d]
        };
        Self { n, terms }
    }
}

impl PartialEq for Element {
    /// Extensional equality: same n and identical `(shape, coefficient)`
    /// sets. Both elements are condensed, so this is exact set equality;
    /// both inclusion directions are checked.
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
            && self.terms.len() == other.terms.len()
            && self
                .terms
                .iter()
                .all(|t| other.terms.iter().any(|u| t == u))
            && other
                .terms
                .iter()
                .all(|u| self.terms.iter().any(|t| t == u))
    }
}

impl Eq for Element {}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
