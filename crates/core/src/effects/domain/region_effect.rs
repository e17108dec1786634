use crate::shared::frame::Frame;
use crate::shared::parallel::ParallelOptions;
use crate::shared::pixel::Pixel;
use crate::shared::region::Region;

/// Domain interface for per-pixel effects applied to a region of a frame.
///
/// Implementations modify the frame in-place (`&mut Frame`) to avoid
/// allocation. The region is caller-supplied and un-clamped; degenerate
/// or fully external regions are legitimate no-ops, so `apply` never
/// fails.
pub trait RegionEffect<P: Pixel>: Send + Sync {
    fn apply(&self, frame: &mut Frame<P>, region: Region, options: &ParallelOptions);
}
