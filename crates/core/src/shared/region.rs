/// An axis-aligned rectangular window over a frame.
///
/// Coordinates are signed and un-clamped: a region may start at a
/// negative origin or extend past the frame edges. [`Region::clip`]
/// intersects it with the frame extents before any pixel is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// The frame-coordinate intersection of a [`Region`] with a frame.
///
/// Invariant: `min_x < max_x` and `min_y < max_y`. Bounds are half-open,
/// so the covered pixels are `[min_x, max_x) × [min_y, max_y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClippedBounds {
    pub min_x: usize,
    pub max_x: usize,
    pub min_y: usize,
    pub max_y: usize,
}

impl Region {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Intersects this region with `[0, frame_width) × [0, frame_height)`.
    ///
    /// Returns `None` when the intersection is empty: a zero-area region,
    /// a region entirely outside the frame, or negative width/height.
    /// Callers treat that as a no-op, not an error.
    pub fn clip(&self, frame_width: u32, frame_height: u32) -> Option<ClippedBounds> {
        let min_x = self.x.max(0);
        let max_x = self.right().min(frame_width as i32);
        let min_y = self.y.max(0);
        let max_y = self.bottom().min(frame_height as i32);

        if min_x >= max_x || min_y >= max_y {
            return None;
        }

        Some(ClippedBounds {
            min_x: min_x as usize,
            max_x: max_x as usize,
            min_y: min_y as usize,
            max_y: max_y as usize,
        })
    }
}
