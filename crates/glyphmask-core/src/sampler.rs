//! The mosaic sampler: turns a mask region into an ordered list of
//! glyph draw instructions.

use log::debug;

use crate::error::MaskError;
use crate::geom::{Point, Rect};
use crate::pixels::{PixelBuffer, Rgba};
use crate::surface::CellSize;

/// One glyph draw instruction: a top-left anchor plus the color sampled
/// from the image at that grid intersection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub pos: Point,
    pub color: Rgba,
}

/// Number of grid steps covering `extent` pixels at `step` pixels per
/// cell.
///
/// A fractional trailing cell counts as one full step; an exact ratio
/// adds none. `step` must be non-zero (guaranteed by the [`CellSize`]
/// invariant).
#[inline]
pub fn count_steps(extent: u32, step: u32) -> u32 {
    extent.div_ceil(step)
}

/// Sample `buffer` over `region`, one sample per grid cell.
///
/// Iteration is row-major: the whole top row of cells left to right,
/// then the next row. The order is load-bearing — the renderer assigns
/// cycled characters in exactly this sequence, so changing it changes
/// the visible text pattern.
///
/// The partial-step rule can admit a trailing column or row whose
/// anchor lies past the last valid pixel when the region reaches the
/// image edge; every anchor is therefore bounds-checked and the first
/// out-of-range one fails with [`MaskError::OutOfBoundsSample`].
pub fn sample(
    buffer: &PixelBuffer,
    region: Rect,
    cell: CellSize,
) -> Result<Vec<Sample>, MaskError> {
    let steps_x = count_steps(region.width, cell.width);
    let steps_y = count_steps(region.height, cell.height);

    let mut samples = Vec::with_capacity(steps_x as usize * steps_y as usize);
    for y in 0..steps_y {
        for x in 0..steps_x {
            let pos = Point::new(
                region.left + x * cell.width,
                region.top + y * cell.height,
            );
            let color = buffer
                .get(pos.x, pos.y)
                .ok_or(MaskError::OutOfBoundsSample {
                    x: pos.x,
                    y: pos.y,
                    width: buffer.width(),
                    height: buffer.height(),
                })?;
            samples.push(Sample { pos, color });
        }
    }

    debug!(
        "sampled {} cells ({steps_x}x{steps_y}) over {region} with a {cell} cell",
        samples.len()
    );
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A buffer whose red channel encodes x and green channel encodes y.
    fn coordinate_buffer(width: u32, height: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::filled(width, height, Rgba::TRANSPARENT);
        for y in 0..height {
            for x in 0..width {
                buf.put(x, y, Rgba::opaque(x as u8, y as u8, 0));
            }
        }
        buf
    }

    #[test]
    fn step_count_exact_and_fractional() {
        // Exact ratio: no trailing step.
        assert_eq!(count_steps(100, 20), 5);
        assert_eq!(count_steps(50, 25), 2);
        // Fractional ratio: the partial cell still counts.
        assert_eq!(count_steps(101, 20), 6);
        assert_eq!(count_steps(19, 20), 1);
        // Degenerate extent.
        assert_eq!(count_steps(0, 20), 0);
    }

    #[test]
    fn five_by_two_grid() {
        // Region 100x50 with 20x25 cells: 5x2 grid, first sample at the
        // origin, last at (80, 25).
        let buf = coordinate_buffer(120, 60);
        let region = Rect::new(0, 0, 100, 50);
        let cell = CellSize::new(20, 25);
        let samples = sample(&buf, region, cell).unwrap();
        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0].pos, Point::new(0, 0));
        assert_eq!(samples[9].pos, Point::new(80, 25));
    }

    #[test]
    fn order_is_row_major() {
        let buf = coordinate_buffer(100, 100);
        let region = Rect::new(10, 20, 30, 30);
        let cell = CellSize::new(10, 10);
        let samples = sample(&buf, region, cell).unwrap();
        let positions: Vec<Point> = samples.iter().map(|s| s.pos).collect();
        assert_eq!(
            positions,
            vec![
                Point::new(10, 20),
                Point::new(20, 20),
                Point::new(30, 20),
                Point::new(10, 30),
                Point::new(20, 30),
                Point::new(30, 30),
                Point::new(10, 40),
                Point::new(20, 40),
                Point::new(30, 40),
            ]
        );
    }

    #[test]
    fn colors_are_copied_from_anchor_pixels() {
        let buf = coordinate_buffer(64, 64);
        let region = Rect::new(4, 8, 16, 16);
        let samples = sample(&buf, region, CellSize::new(8, 8)).unwrap();
        for s in &samples {
            assert_eq!(s.color, Rgba::opaque(s.pos.x as u8, s.pos.y as u8, 0));
        }
    }

    #[test]
    fn sampling_is_idempotent() {
        let buf = coordinate_buffer(50, 50);
        let region = Rect::new(3, 3, 33, 21);
        let cell = CellSize::new(7, 9);
        let a = sample(&buf, region, cell).unwrap();
        let b = sample(&buf, region, cell).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_region_yields_no_samples() {
        let buf = coordinate_buffer(10, 10);
        let samples = sample(&buf, Rect::new(0, 0, 0, 10), CellSize::new(2, 2)).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn trailing_partial_column_past_the_edge_fails() {
        // 101-wide region over a 100-wide buffer: the partial sixth
        // column anchors at x = 100, one past the last valid pixel.
        let buf = coordinate_buffer(100, 50);
        let region = Rect::new(0, 0, 101, 50);
        let err = sample(&buf, region, CellSize::new(20, 25)).unwrap_err();
        match err {
            MaskError::OutOfBoundsSample {
                x,
                y,
                width,
                height,
            } => {
                assert_eq!((x, y), (100, 0));
                assert_eq!((width, height), (100, 50));
            }
            other => panic!("expected OutOfBoundsSample, got {other:?}"),
        }
    }

    #[test]
    fn region_flush_with_the_edge_succeeds() {
        // Exact fit: the last anchor is inside the buffer.
        let buf = coordinate_buffer(100, 50);
        let samples = sample(&buf, Rect::new(0, 0, 100, 50), CellSize::new(20, 25)).unwrap();
        assert_eq!(samples.len(), 10);
        assert_eq!(samples[9].pos, Point::new(80, 25));
    }

    #[test]
    fn offset_region_past_bottom_fails_vertically() {
        let buf = coordinate_buffer(40, 40);
        let region = Rect::new(0, 30, 40, 15);
        let err = sample(&buf, region, CellSize::new(10, 10)).unwrap_err();
        assert!(matches!(
            err,
            MaskError::OutOfBoundsSample { x: 0, y: 40, .. }
        ));
    }
}
