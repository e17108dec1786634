use std::ops::Mul;

use bytemuck::{Pod, Zeroable};

/// A pixel's color as four normalized `f32` components.
///
/// Components are conceptually in [0, 1]; conversion precision is the
/// pixel format's contract, not enforced here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorVector {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorVector {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Mul for ColorVector {
    type Output = ColorVector;

    fn mul(self, rhs: ColorVector) -> ColorVector {
        ColorVector::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

/// Capability interface for concrete pixel layouts.
///
/// Effects are written against this trait rather than a fixed storage
/// format: a pixel only needs a bidirectional conversion to the
/// normalized [`ColorVector`] form. Round-trip fidelity within the
/// format's precision is the implementor's contract.
pub trait Pixel: Copy + Send + Sync {
    fn to_vector(&self) -> ColorVector;
    fn from_vector(vector: ColorVector) -> Self;
}

fn pack_channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn unpack_channel(value: u8) -> f32 {
    value as f32 / 255.0
}

/// 8-bit-per-channel pixel in R, G, B, A byte order.
///
/// `Pod` so decoder byte buffers can be reinterpreted in place.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Pixel for Rgba8 {
    fn to_vector(&self) -> ColorVector {
        ColorVector::new(
            unpack_channel(self.r),
            unpack_channel(self.g),
            unpack_channel(self.b),
            unpack_channel(self.a),
        )
    }

    fn from_vector(vector: ColorVector) -> Self {
        Self::new(
            pack_channel(vector.r),
            pack_channel(vector.g),
            pack_channel(vector.b),
            pack_channel(vector.a),
        )
    }
}

/// 8-bit-per-channel pixel in B, G, R, A byte order (common in capture
/// and Windows surfaces).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Bgra8 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra8 {
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }
}

impl Pixel for Bgra8 {
    fn to_vector(&self) -> ColorVector {
        ColorVector::new(
            unpack_channel(self.r),
            unpack_channel(self.g),
            unpack_channel(self.b),
            unpack_channel(self.a),
        )
    }

    fn from_vector(vector: ColorVector) -> Self {
        Self::new(
            pack_channel(vector.b),
            pack_channel(vector.g),
            pack_channel(vector.r),
            pack_channel(vector.a),
        )
    }
}

/// Float pixel with exact round trip through [`ColorVector`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RgbaF32 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RgbaF32 {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Pixel for RgbaF32 {
    fn to_vector(&self) -> ColorVector {
        ColorVector::new(self.r, self.g, self.b, self.a)
    }

    fn from_vector(vector: ColorVector) -> Self {
        Self::new(vector.r, vector.g, vector.b, vector.a)
    }
}
