use rayon::prelude::*;

use crate::effects::domain::region_effect::RegionEffect;
use crate::shared::frame::Frame;
use crate::shared::guard;
use crate::shared::guard::ValidationError;
use crate::shared::parallel::ParallelOptions;
use crate::shared::pixel::{ColorVector, Pixel};
use crate::shared::region::Region;

/// Scales the alpha channel of every pixel in a region by a fixed
/// factor, leaving color channels untouched.
///
/// The region is clipped against the frame before any pixel is read;
/// each surviving row is processed as one parallel task. The transform
/// is a pure function of a pixel's own prior value, so row tasks share
/// nothing and need no locking.
pub struct AlphaScale {
    opacity: f32,
    multiplier: ColorVector,
}

impl AlphaScale {
    /// Creates an operator with the given opacity factor.
    ///
    /// Fails with [`ValidationError`] when `opacity` is outside [0, 1].
    /// A constructed instance is immutable and reusable across frames
    /// and regions.
    pub fn new(opacity: f32) -> Result<Self, ValidationError> {
        let opacity = guard::must_be_between_or_equal_to(opacity, 0.0, 1.0, "opacity")?;
        Ok(Self {
            opacity,
            multiplier: ColorVector::new(1.0, 1.0, 1.0, opacity),
        })
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

impl<P: Pixel> RegionEffect<P> for AlphaScale {
    fn apply(&self, frame: &mut Frame<P>, region: Region, options: &ParallelOptions) {
        let Some(bounds) = region.clip(frame.width(), frame.height()) else {
            return;
        };
        log::debug!(
            "alpha scale {:.3}: region {:?} clipped to {:?}",
            self.opacity,
            region,
            bounds
        );

        let width = frame.width() as usize;
        let multiplier = self.multiplier;
        // Restrict to the affected rows, then hand each row to its own
        // task. Rows are disjoint slices of the backing buffer.
        let rows = &mut frame.data_mut()[bounds.min_y * width..bounds.max_y * width];

        options.run(|| {
            rows.par_chunks_exact_mut(width).for_each(|row| {
                for pixel in &mut row[bounds.min_x..bounds.max_x] {
                    *pixel = P::from_vector(pixel.to_vector() * multiplier);
                }
            });
        });
    }
}
