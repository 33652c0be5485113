//! # tl-core - Exact Temperley–Lieb Algebra
//!
//! This crate performs exact symbolic computation in the Temperley–Lieb
//! algebra TL_n with loop value δ = −2:
//!
//! - **Diagrams**: planar matchings on 2n points with exact rational
//!   coefficients ([`Diagram`]).
//! - **Elements**: formal sums of diagrams with condensation as the
//!   canonical normal form ([`Element`]).
//! - **Projectors**: memoized Jones–Wenzl projectors built by the
//!   standard rational recursion ([`JonesWenzl`]).
//!
//! Everything is an immutable value; a failed operation never leaves a
//! partially mutated result behind. All operations are deterministic pure
//! computations over exact rationals — no floating point anywhere.
//!
//! Coefficients are 64-bit rationals ([`num_rational::Rational64`]).
//! Numerators and denominators arising from the projector recursion grow
//! like products of small integers and stay far inside the i64 range for
//! every n whose term count (Catalan-number growth) is feasible to
//! materialize at all; arbitrary-precision coefficients are not needed.
//!
//! ## Example
//!
//! ```
//! use tl_core::{Diagram, JonesWenzl};
//!
//! // The generator relation U_1 U_2 U_1 = U_1 in TL_4.
//! let u1 = Diagram::generator(4, 1)?;
//! let u2 = Diagram::generator(4, 2)?;
//! assert_eq!(u1.compose(&u2)?.compose(&u1)?, u1);
//!
//! // Jones-Wenzl projectors are idempotent.
//! let jw = JonesWenzl::new();
//! let p3 = jw.get(3)?;
//! assert_eq!(p3.compose(&p3)?, p3);
//! # Ok::<(), tl_core::TlError>(())
//! ```

pub mod diagram;
pub mod element;
pub mod error;
pub mod projector;

pub use diagram::{Diagram, LOOP_VALUE};
pub use element::Element;
pub use error::TlError;
pub use projector::JonesWenzl;
