//! Byte-plane frame storage.
//!
//! A [`Frame`] owns one or more byte [`Plane`]s laid out according to its
//! [`PixelFormat`]. The conversion engine only ever touches frames a row at
//! a time, so planes expose row slices rather than pixel accessors.

use crate::{Error, PixelFormat, Result};

/// A single byte plane of a frame.
#[derive(Debug, Clone)]
pub struct Plane {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
}

impl Plane {
    /// Allocates a zeroed plane with a tight stride.
    pub fn alloc(width: u32, height: u32, stride: usize) -> Self {
        Self {
            data: vec![0u8; stride * height as usize],
            width,
            height,
            stride,
        }
    }

    /// Plane width in samples (not bytes).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Plane height in rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Full plane contents.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Borrows row `j` (stride bytes).
    ///
    /// # Panics
    ///
    /// Panics if `j >= height`; row indices are caller-controlled loop
    /// variables, not external input.
    #[inline]
    pub fn row(&self, j: u32) -> &[u8] {
        assert!(j < self.height, "row {} out of {} rows", j, self.height);
        let start = j as usize * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Mutably borrows row `j`.
    #[inline]
    pub fn row_mut(&mut self, j: u32) -> &mut [u8] {
        assert!(j < self.height, "row {} out of {} rows", j, self.height);
        let start = j as usize * self.stride;
        &mut self.data[start..start + self.stride]
    }
}

/// An owned video frame: a pixel format plus its byte planes.
///
/// # Example
///
/// ```rust
/// use yuvcms_core::{Frame, PixelFormat};
///
/// let frame = Frame::alloc(PixelFormat::Ayuv, 8, 8).unwrap();
/// assert_eq!(frame.planes()[0].stride(), 8 * 4);
/// ```
#[derive(Debug, Clone)]
pub struct Frame {
    format: PixelFormat,
    width: u32,
    height: u32,
    planes: Vec<Plane>,
}

impl Frame {
    /// Allocates a zeroed frame.
    pub fn alloc(format: PixelFormat, width: u32, height: u32) -> Result<Self> {
        format.validate_dimensions(width, height)?;
        let planes = match format.packed_bytes_per_pixel() {
            Some(bpp) => vec![Plane::alloc(width, height, width as usize * bpp)],
            None => {
                let (sx, sy) = format.chroma_subsampling();
                let cw = width.div_ceil(sx);
                let ch = height.div_ceil(sy);
                vec![
                    Plane::alloc(width, height, width as usize),
                    Plane::alloc(cw, ch, cw as usize),
                    Plane::alloc(cw, ch, cw as usize),
                ]
            }
        };
        Self::from_planes(format, width, height, planes)
    }

    /// Assembles a frame from pre-built planes.
    ///
    /// The plane set must match the format's layout; a wrong count is
    /// [`Error::PlaneCount`].
    pub fn from_planes(
        format: PixelFormat,
        width: u32,
        height: u32,
        planes: Vec<Plane>,
    ) -> Result<Self> {
        if planes.len() != format.plane_count() {
            return Err(Error::plane_count(format.plane_count(), planes.len()));
        }
        Ok(Self {
            format,
            width,
            height,
            planes,
        })
    }

    /// Builds a frame from a tightly packed raw buffer.
    ///
    /// The buffer must be exactly [`PixelFormat::frame_size`] bytes, planes
    /// concatenated in order for planar layouts.
    pub fn from_bytes(format: PixelFormat, width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = format.frame_size(width, height);
        if bytes.len() != expected {
            return Err(Error::buffer_size(expected, bytes.len()));
        }
        let mut frame = Self::alloc(format, width, height)?;
        let mut offset = 0;
        for plane in &mut frame.planes {
            let len = plane.data.len();
            plane.data.copy_from_slice(&bytes[offset..offset + len]);
            offset += len;
        }
        Ok(frame)
    }

    /// Serializes the frame back to a tightly packed buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.format.frame_size(self.width, self.height));
        for plane in &self.planes {
            out.extend_from_slice(&plane.data);
        }
        out
    }

    /// The frame's pixel layout.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All planes, in layout order.
    #[inline]
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Mutable access to the planes.
    #[inline]
    pub fn planes_mut(&mut self) -> &mut [Plane] {
        &mut self.planes
    }

    /// Checks that another frame shares this frame's geometry and format.
    pub fn check_compatible(&self, other: &Frame) -> Result<()> {
        if self.format != other.format {
            return Err(Error::unsupported_format(other.format.name()));
        }
        if (self.width, self.height) != (other.width, other.height) {
            return Err(Error::dimension_mismatch(
                (self.width, self.height),
                (other.width, other.height),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_i420_planes() {
        let frame = Frame::alloc(PixelFormat::I420, 6, 4).unwrap();
        assert_eq!(frame.planes().len(), 3);
        assert_eq!(frame.planes()[0].width(), 6);
        assert_eq!(frame.planes()[1].width(), 3);
        assert_eq!(frame.planes()[1].height(), 2);
    }

    #[test]
    fn test_from_planes_count_check() {
        let planes = Frame::alloc(PixelFormat::I420, 4, 4).unwrap().planes.clone();
        let err = Frame::from_planes(PixelFormat::Yuy2, 4, 4, planes.clone()).unwrap_err();
        assert!(err.to_string().contains("plane count"));
        assert!(Frame::from_planes(PixelFormat::I420, 4, 4, planes).is_ok());
    }

    #[test]
    fn test_from_bytes_size_check() {
        let bytes = vec![0u8; 10];
        let err = Frame::from_bytes(PixelFormat::Ayuv, 4, 4, &bytes).unwrap_err();
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut bytes = vec![0u8; PixelFormat::I420.frame_size(4, 4)];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let frame = Frame::from_bytes(PixelFormat::I420, 4, 4, &bytes).unwrap();
        assert_eq!(frame.to_bytes(), bytes);
    }

    #[test]
    fn test_row_access() {
        let mut frame = Frame::alloc(PixelFormat::Yuy2, 4, 2).unwrap();
        frame.planes_mut()[0].row_mut(1)[0] = 0xAB;
        assert_eq!(frame.planes()[0].row(1)[0], 0xAB);
        assert_eq!(frame.planes()[0].row(0)[0], 0);
    }

    #[test]
    #[should_panic(expected = "out of")]
    fn test_row_out_of_bounds() {
        let frame = Frame::alloc(PixelFormat::Ayuv, 2, 2).unwrap();
        let _ = frame.planes()[0].row(2);
    }

    #[test]
    fn test_check_compatible() {
        let a = Frame::alloc(PixelFormat::Ayuv, 4, 4).unwrap();
        let b = Frame::alloc(PixelFormat::Ayuv, 4, 2).unwrap();
        assert!(a.check_compatible(&a.clone()).is_ok());
        assert!(a.check_compatible(&b).is_err());
    }
}
