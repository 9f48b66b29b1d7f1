//! Figure → bitmap rasteriser (spec.md §4.D).
//!
//! Used both for PBM/SVG rendering and, in the collision cache, as the
//! point-level model the collision predicate relies on. This module only
//! produces the human/file-facing bitmap view; it owns no cache state.

use crate::figure::Figure;

/// A dense bitmap over the figure's translated bounding box. `set(x, y)` is
/// true iff some segment traverses that cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: usize,
    pub height: usize,
    /// Translation applied to figure coordinates to land in `[0, width) x [0, height)`.
    pub origin: (i64, i64),
    cells: Vec<bool>,
}

impl Bitmap {
    fn new(width: usize, height: usize, origin: (i64, i64)) -> Self {
        Self {
            width,
            height,
            origin,
            cells: vec![false; width * height],
        }
    }

    fn set_figure_point(&mut self, p: (i64, i64)) {
        let x = (p.0 - self.origin.0) as usize;
        let y = (p.1 - self.origin.1) as usize;
        self.cells[y * self.width + x] = true;
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    pub fn set_pixel_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Render `figure` to a bitmap sized to its bounding box. Deterministic and
/// total: every figure, including a blank one, produces some bitmap.
///
/// Requires the cache materialised through `figure.len() - 1`; callers with
/// a freshly-refined figure already have this (refinement leaves the cache
/// valid through its cap).
pub fn render_to_bitmap(figure: &mut Figure) -> Bitmap {
    if figure.is_empty() {
        return Bitmap::new(1, 1, (0, 0));
    }
    figure.ensure_cached_through(figure.len() - 1);

    let mut min = (0i64, 0i64);
    let mut max = (0i64, 0i64);
    let mut visit = |p: (i64, i64)| {
        min.0 = min.0.min(p.0);
        min.1 = min.1.min(p.1);
        max.0 = max.0.max(p.0);
        max.1 = max.1.max(p.1);
    };
    visit((0, 0));
    for i in 0..figure.len() {
        for &p in figure.segment_points(i) {
            visit(p);
        }
    }

    let width = (max.0 - min.0) as usize + 1;
    let height = (max.1 - min.1) as usize + 1;
    let mut bitmap = Bitmap::new(width, height, min);
    bitmap.set_figure_point((0, 0));
    for i in 0..figure.len() {
        for &p in figure.segment_points(i) {
            bitmap.set_figure_point(p);
        }
    }
    bitmap
}

/// Render as a PBM (P1, plain ASCII) byte buffer.
pub fn render_to_pbm(figure: &mut Figure) -> Vec<u8> {
    let bitmap = render_to_bitmap(figure);
    let mut out = format!("P1\n{} {}\n", bitmap.width, bitmap.height).into_bytes();
    for y in (0..bitmap.height).rev() {
        for x in 0..bitmap.width {
            out.push(if bitmap.get(x, y) { b'1' } else { b'0' });
            out.push(b' ');
        }
        out.push(b'\n');
    }
    out
}

/// Render as a minimal SVG document: one `<rect>` per set cell.
pub fn render_to_svg(figure: &mut Figure) -> Vec<u8> {
    let bitmap = render_to_bitmap(figure);
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        bitmap.width, bitmap.height
    );
    for y in 0..bitmap.height {
        for x in 0..bitmap.width {
            if bitmap.get(x, bitmap.height - 1 - y) {
                out.push_str(&format!(
                    "<rect x=\"{x}\" y=\"{y}\" width=\"1\" height=\"1\"/>\n"
                ));
            }
        }
    }
    out.push_str("</svg>\n");
    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Figure, Segment};
    use crate::geometry::Direction;

    #[test]
    fn blank_figure_rasterizes_to_a_single_cell() {
        let mut f = Figure::blank();
        let bmp = render_to_bitmap(&mut f);
        assert_eq!((bmp.width, bmp.height), (1, 1));
    }

    #[test]
    fn rendering_is_deterministic() {
        let segments = vec![Segment::new(Direction::Up, 3), Segment::new(Direction::Right, 2)];
        let mut f1 = Figure::from_segments(segments.clone());
        let mut f2 = Figure::from_segments(segments);
        assert_eq!(render_to_bitmap(&mut f1), render_to_bitmap(&mut f2));
    }

    #[test]
    fn bounding_box_covers_every_vertex() {
        let segments = vec![
            Segment::new(Direction::Up, 3),
            Segment::new(Direction::Right, 2),
            Segment::new(Direction::Down, 1),
        ];
        let mut f = Figure::from_segments(segments);
        let bmp = render_to_bitmap(&mut f);
        assert_eq!(bmp.width, 3);
        assert_eq!(bmp.height, 4);
    }
}
