//! A tour of the public surface: generators, composition, tensor
//! products, Jones–Wenzl projectors, custom diagrams, and the three
//! render modes.
//!
//! Run with `cargo run --example readme_tour -p tl-render`.

use num_rational::Rational64;
use tl_core::{Diagram, Element, JonesWenzl, TlError};
use tl_render::{render_diagram, render_element, RenderMode};

fn main() -> Result<(), TlError> {
    // Get U_2 in TL_4 and print its string diagram.
    let u2 = Diagram::generator(4, 2)?;
    println!("{}", render_diagram(&u2, RenderMode::StringDiagram));

    // Compose and tensor it with U_1.
    let u1 = Diagram::generator(4, 1)?;
    println!("{}", render_diagram(&u1.compose(&u2)?, RenderMode::StringDiagram));
    println!("{}", render_diagram(&u1.tensor(&u2), RenderMode::StringDiagram));

    // Jones-Wenzl projectors: p_2 is idempotent.
    let jw = JonesWenzl::new();
    let p2 = jw.get(2)?;
    println!("{}", render_element(&p2, RenderMode::StringDiagram));
    println!("{}", render_element(&p2.compose(&p2)?, RenderMode::StringDiagram));
    println!("p_2 p_2 == p_2: {}", p2.compose(&p2)? == p2);

    // Custom diagrams from explicit pair lists.
    let d1 = Diagram::new(&[(0, 1), (2, 5), (4, 3)], Rational64::from_integer(-4))?;
    let d2 = Diagram::identity(3).scale_by(Rational64::new(3, 5));

    // Adding diagrams means lifting them to elements first.
    let e1: Element = d1.into();
    let e2: Element = d2.into();
    let sum = e1.add(&e2)?;
    println!("{}", render_element(&sum, RenderMode::StringDiagram));

    // The other two render modes, on U_0 U_1 in TL_3.
    let d = Diagram::generator(3, 0)?.compose(&Diagram::generator(3, 1)?)?;
    println!("{}", render_diagram(&d, RenderMode::CrossinglessMatching));
    println!("{}", render_diagram(&d, RenderMode::DyckPath));
    println!("{}", render_diagram(&d, RenderMode::StringDiagram));

    Ok(())
}
