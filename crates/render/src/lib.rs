//! # tl-render - Textual Renderers for Temperley–Lieb Diagrams
//!
//! Three ways of turning a [`Diagram`] (and by extension an [`Element`])
//! into a string:
//!
//! - [`RenderMode::StringDiagram`] draws the strands as ASCII art:
//!
//! ```text
//!     0 1 2
//!     \_/ /
//!        /
//! 1 *   /
//!      / _
//!     / / \
//!     5 4 3
//! ```
//!
//! - [`RenderMode::CrossinglessMatching`] draws the matching as nested
//!   arcs over a single row of points:
//!
//! ```text
//! 1 *
//!   0 1 2 3 4 5
//!   \_/ | \_/ |
//!       \_____/
//! ```
//!
//! - [`RenderMode::DyckPath`] encodes each pair as an open/close step:
//!
//! ```text
//! 1 * (+-++--)
//! ```
//!
//! The mode is an explicit argument everywhere — there is no process-wide
//! render state. Renderers only read a diagram's point count, matching
//! pairs, and coefficient; they never touch core state.

use tl_core::{Diagram, Element};

/// Which textual representation to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Strand-level ASCII art. The default.
    #[default]
    StringDiagram,
    /// Nested arcs over one row of points.
    CrossinglessMatching,
    /// One `+`/`-` step per point.
    DyckPath,
}

/// Render a single diagram in the given mode.
pub fn render_diagram(diagram: &Diagram, mode: RenderMode) -> String {
    match mode {
        RenderMode::StringDiagram => string_diagram(diagram),
        RenderMode::CrossinglessMatching => crossingless_matching(diagram),
        RenderMode::DyckPath => dyck_path(diagram),
    }
}

/// Render a formal sum term by term. Dyck paths join on one line; the
/// drawing modes stack terms with a `+` separator line. The zero element
/// renders as `0`.
pub fn render_element(element: &Element, mode: RenderMode) -> String {
    if element.is_zero() {
        return "0".to_string();
    }
    let terms: Vec<String> = element
        .terms()
        .iter()
        .map(|d| render_diagram(d, mode))
        .collect();
    match mode {
        RenderMode::DyckPath => terms.join(" + "),
        _ => terms.join("\n+\n"),
    }
}

/// Point labels joined the way all grid renderers print them: one-digit
/// labels get a trailing space, wider labels run flush.
fn label_row(labels: impl Iterator<Item = usize>) -> String {
    let mut row = String::new();
    for i in labels {
        let text = i.to_string();
        row.push_str(&text);
        if text.len() == 1 {
            row.push(' ');
        }
    }
    row
}

/// Strand-level ASCII art on a `(2n-1) x (2n-1)` grid, with the
/// coefficient printed beside the vertically centered row. Top points
/// are labelled `0..n` left to right, bottom points `2n-1..n` so the
/// counter-clockwise numbering reads correctly.
fn string_diagram(diagram: &Diagram) -> String {
    let n = diagram.n();
    let coefficient = format!("{} * ", diagram.coefficient());
    if n == 0 {
        return coefficient;
    }

    let width = 2 * n - 1;
    let height = width;
    let left_offset = " ".repeat(coefficient.len());

    let mut grid = vec![vec![' '; width]; height];

    for &(a, b) in diagram.pairs() {
        if a < n && b < n {
            // Cup: both ends on the top edge.
            let u = (b - a + 1) / 2;
            for k in 0..u {
                grid[k][2 * a + k] = '\\';
                grid[k][2 * b - k] = '/';
            }
            for k in 0..(b - a) {
                grid[u - 1][2 * a + u + k] = '_';
            }
        } else if a < n {
            // Through-strand: vertical, slant, vertical.
            let bf = 2 * n - 1 - b;
            if a == bf {
                for row in grid.iter_mut() {
                    row[2 * a] = '|';
                }
            } else {
                let length = 2 * a.abs_diff(bf) + 1;
                debug_assert_eq!((height - length) % 2, 0);
                let vertical = (height - length) / 2;

                for k in 0..vertical {
                    grid[k][2 * a] = '|';
                    grid[height - 1 - k][2 * bf] = '|';
                }
                for k in 0..length {
                    if a < bf {
                        grid[vertical + k][2 * a + k] = '\\';
                    } else {
                        grid[vertical + k][2 * a - k] = '/';
                    }
                }
            }
        } else {
            // Cap: both ends on the bottom edge. Flip into top coordinates.
            let (lo, hi) = (2 * n - 1 - b, 2 * n - 1 - a);
            let u = (hi - lo + 1) / 2;
            for k in 0..u {
                grid[height - 1 - k][2 * lo + k] = '/';
                grid[height - 1 - k][2 * hi - k] = '\\';
            }
            for k in 0..(hi - lo) {
                grid[height - u - 1][2 * lo + u + k] = '_';
            }
        }
    }

    let mut out = format!("{left_offset}{}", label_row(0..n));
    for (r, row) in grid.iter().enumerate() {
        let line: String = row.iter().collect();
        out.push('\n');
        if r == n - 1 {
            out.push_str(&coefficient);
        } else {
            out.push_str(&left_offset);
        }
        out.push_str(&line);
    }
    out.push('\n');
    out.push_str(&left_offset);
    out.push_str(&label_row((n..2 * n).rev()));
    out
}

/// Nested arcs over one row of 2n points, one arc depth per line,
/// stopping at the first all-blank line.
fn crossingless_matching(diagram: &Diagram) -> String {
    let n = diagram.n();
    let mut out = format!("{} *\n  ", diagram.coefficient());
    out.push_str(&label_row(0..2 * n));

    for line in 0..n {
        let mut symbols = vec![' '; 2 * n];
        for &(a, b) in diagram.pairs() {
            let gap = b - a - 1;
            if gap < 2 * line {
                symbols[a] = ' ';
                symbols[b] = ' ';
            } else if gap > 2 * line {
                symbols[a] = '|';
                symbols[b] = '|';
            } else {
                symbols[a] = '\\';
                symbols[b] = '/';
            }
        }

        if symbols.iter().all(|&s| s == ' ') {
            break;
        }

        // Spread the symbols out and fill each arc's span with underscores.
        let mut spread = Vec::with_capacity(4 * n - 1);
        for (k, &s) in symbols.iter().enumerate() {
            if k > 0 {
                spread.push(' ');
            }
            spread.push(s);
        }
        let mut inside_arc = false;
        for slot in spread.iter_mut() {
            match slot {
                '\\' => inside_arc = true,
                '/' => inside_arc = false,
                other => {
                    if inside_arc {
                        *other = '_';
                    }
                }
            }
        }

        out.push_str("\n  ");
        out.extend(spread);
    }

    out
}

/// One `+` per opening point and one `-` per closing point.
fn dyck_path(diagram: &Diagram) -> String {
    let mut symbols = vec![' '; 2 * diagram.n()];
    for &(a, b) in diagram.pairs() {
        symbols[a] = '+';
        symbols[b] = '-';
    }
    let path: String = symbols.into_iter().collect();
    format!("{} * ({path})", diagram.coefficient())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Rational64;

    /// The running example from the module docs: U_0 U_1 in TL_3.
    fn u0_u1() -> Diagram {
        let u0 = Diagram::generator(3, 0).unwrap();
        let u1 = Diagram::generator(3, 1).unwrap();
        u0.compose(&u1).unwrap()
    }

    fn lines_trimmed(s: &str) -> Vec<String> {
        s.lines().map(|l| l.trim_end().to_string()).collect()
    }

    #[test]
    fn dyck_path_golden() {
        assert_eq!(render_diagram(&u0_u1(), RenderMode::DyckPath), "1 * (+-++--)");
    }

    #[test]
    fn dyck_path_identity() {
        let id = Diagram::identity(3);
        assert_eq!(render_diagram(&id, RenderMode::DyckPath), "1 * (+++---)");
    }

    #[test]
    fn dyck_path_shows_rational_coefficient() {
        let d = Diagram::identity(2).scale_by(Rational64::new(3, 5));
        assert_eq!(render_diagram(&d, RenderMode::DyckPath), "3/5 * (++--)");
    }

    #[test]
    fn crossingless_matching_golden() {
        let expected = vec![
            "1 *",
            "  0 1 2 3 4 5",
            "  \\_/ | \\_/ |",
            "      \\_____/",
        ];
        let rendered = crossingless_matching(&u0_u1());
        assert_eq!(lines_trimmed(&rendered), expected);
    }

    #[test]
    fn crossingless_matching_identity_stops_after_deepest_arc() {
        // id_2 = {(0,3), (1,2)}: two arc depths, then blank.
        let expected = vec![
            "1 *",
            "  0 1 2 3",
            "  | \\_/ |",
            "  \\_____/",
        ];
        let rendered = crossingless_matching(&Diagram::identity(2));
        assert_eq!(lines_trimmed(&rendered), expected);
    }

    #[test]
    fn string_diagram_golden() {
        let expected = vec![
            "    0 1 2",
            "    \\_/ /",
            "       /",
            "1 *   /",
            "     / _",
            "    / / \\",
            "    5 4 3",
        ];
        let rendered = string_diagram(&u0_u1());
        assert_eq!(lines_trimmed(&rendered), expected);
    }

    #[test]
    fn string_diagram_identity_is_all_vertical() {
        let expected = vec![
            "    0 1",
            "    | |",
            "1 * | |",
            "    | |",
            "    3 2",
        ];
        let rendered = string_diagram(&Diagram::identity(2));
        assert_eq!(lines_trimmed(&rendered), expected);
    }

    #[test]
    fn render_element_zero() {
        assert_eq!(render_element(&Element::zero(2), RenderMode::DyckPath), "0");
        assert_eq!(
            render_element(&Element::zero(2), RenderMode::StringDiagram),
            "0"
        );
    }

    #[test]
    fn render_element_joins_dyck_terms_inline() {
        let e = Element::new(vec![
            Diagram::identity(2),
            Diagram::generator(2, 0).unwrap().scale_by(Rational64::new(1, 2)),
        ])
        .unwrap();
        assert_eq!(
            render_element(&e, RenderMode::DyckPath),
            "1 * (++--) + 1/2 * (+-+-)"
        );
    }

    #[test]
    fn render_element_stacks_drawn_terms() {
        let e = Element::new(vec![
            Diagram::identity(2),
            Diagram::generator(2, 0).unwrap(),
        ])
        .unwrap();
        let rendered = render_element(&e, RenderMode::CrossinglessMatching);
        assert_eq!(rendered.matches("\n+\n").count(), 1);
        assert!(rendered.contains("0 1 2 3"));
    }

    #[test]
    fn dispatcher_matches_direct_calls() {
        let d = u0_u1();
        assert_eq!(
            render_diagram(&d, RenderMode::StringDiagram),
            string_diagram(&d)
        );
        assert_eq!(
            render_diagram(&d, RenderMode::CrossinglessMatching),
            crossingless_matching(&d)
        );
        assert_eq!(render_diagram(&d, RenderMode::DyckPath), dyck_path(&d));
    }
}
