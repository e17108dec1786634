use ndarray::{ArrayView2, ArrayViewMut2};

use crate::shared::pixel::Pixel;
use crate::shared::region::Region;

/// A rectangular pixel buffer in row-major order, generic over the
/// pixel format.
///
/// The frame is owned by its caller; effects mutate pixel contents in
/// place and never allocate or free the storage.
#[derive(Clone, Debug)]
pub struct Frame<P> {
    data: Vec<P>,
    width: u32,
    height: u32,
}

impl<P: Pixel> Frame<P> {
    pub fn new(data: Vec<P>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize),
            "data length must equal width * height"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// A frame with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: P) -> Self {
        Self::new(
            vec![pixel; (width as usize) * (height as usize)],
            width,
            height,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[P] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [P] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<P> {
        self.data
    }

    /// The full-frame region at origin (0, 0).
    pub fn bounds(&self) -> Region {
        Region::new(0, 0, self.width as i32, self.height as i32)
    }

    /// One horizontal line of pixels.
    ///
    /// Panics when `y >= height`.
    pub fn row(&self, y: usize) -> &[P] {
        let w = self.width as usize;
        &self.data[y * w..(y + 1) * w]
    }

    /// Mutable view of one horizontal line of pixels.
    ///
    /// Panics when `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [P] {
        let w = self.width as usize;
        &mut self.data[y * w..(y + 1) * w]
    }

    pub fn as_ndarray(&self) -> ArrayView2<'_, P> {
        ArrayView2::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut2<'_, P> {
        ArrayViewMut2::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize) {
        (self.height as usize, self.width as usize)
    }
}
