//! End-to-end checks of the Jones–Wenzl recursion.
//!
//! The projectors are the one non-trivial consumer of the whole algebra:
//! building p_n exercises tensor, compose, scalar multiplication,
//! addition, and condensation together, and the idempotence and
//! annihilation laws leave no room for an off-by-one anywhere.

use num_rational::Rational64;
use tl_core::{Diagram, Element, JonesWenzl, TlError};

// ============================================================================
// Idempotence: p_n p_n = p_n
// ============================================================================

#[test]
fn projectors_are_idempotent() -> Result<(), TlError> {
    let jw = JonesWenzl::new();
    for n in 1..=5 {
        let p = jw.get(n)?;
        assert_eq!(p.compose(&p)?, p, "p_{n} should be idempotent");
    }
    Ok(())
}

#[test]
fn scenario_p2_squared() -> Result<(), TlError> {
    let jw = JonesWenzl::new();
    let p2 = jw.get(2)?;
    assert_eq!(p2.compose(&p2)?, p2);
    Ok(())
}

// ============================================================================
// Annihilation: U_i p_n = p_n U_i = 0
// ============================================================================

#[test]
fn projectors_are_killed_by_every_generator() -> Result<(), TlError> {
    let jw = JonesWenzl::new();
    for n in 2..=4 {
        let p = jw.get(n)?;
        for i in 0..=n - 2 {
            let u = Element::generator(n, i)?;
            assert!(p.compose(&u)?.is_zero(), "p_{n} U_{i} should vanish");
            assert!(u.compose(&p)?.is_zero(), "U_{i} p_{n} should vanish");
        }
    }
    Ok(())
}

// ============================================================================
// Known closed forms
// ============================================================================

#[test]
fn p2_closed_form() -> Result<(), TlError> {
    let jw = JonesWenzl::new();
    let expected = Element::new(vec![
        Diagram::identity(2),
        Diagram::generator(2, 0)?.scale_by(Rational64::new(1, 2)),
    ])?;
    assert_eq!(jw.get(2)?, expected);
    Ok(())
}

#[test]
fn p3_closed_form() -> Result<(), TlError> {
    // p_3 = id + 2/3 (U_0 + U_1) + 1/3 (U_0 U_1 + U_1 U_0).
    let jw = JonesWenzl::new();
    let u0 = Diagram::generator(3, 0)?;
    let u1 = Diagram::generator(3, 1)?;
    let two_thirds = Rational64::new(2, 3);
    let third = Rational64::new(1, 3);

    let expected = Element::new(vec![
        Diagram::identity(3),
        u0.scale_by(two_thirds),
        u1.scale_by(two_thirds),
        u0.compose(&u1)?.scale_by(third),
        u1.compose(&u0)?.scale_by(third),
    ])?;
    assert_eq!(jw.get(3)?, expected);
    Ok(())
}

// ============================================================================
// Cache discipline
// ============================================================================

#[test]
fn lower_projectors_materialize_along_the_way() -> Result<(), TlError> {
    let jw = JonesWenzl::new();
    jw.get(4)?;
    assert_eq!(jw.computed_up_to(), 4);

    // The intermediate entries agree with a fresh bottom-up build.
    let fresh = JonesWenzl::new();
    for n in 1..=4 {
        assert_eq!(jw.get(n)?, fresh.get(n)?);
    }
    Ok(())
}

#[test]
fn shared_across_threads() {
    let jw = std::sync::Arc::new(JonesWenzl::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let jw = std::sync::Arc::clone(&jw);
            std::thread::spawn(move || jw.get(4).expect("recursion succeeds"))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for pair in results.windows(2) {
        assert_eq!(pair[0], pair[1]);
    }
}
