//! Supported YUV pixel layouts.
//!
//! The conversion engine handles a fixed set of byte-per-sample YCbCr
//! layouts, the ones a studio-range SD pipeline actually carries:
//!
//! | Format | Layout | Chroma | Bytes/pixel |
//! |--------|--------|--------|-------------|
//! | [`I420`](PixelFormat::I420) | planar Y, U, V | 4:2:0 | 1.5 |
//! | [`Yuy2`](PixelFormat::Yuy2) | packed `Y0 U0 Y1 V0` | 4:2:2 | 2 |
//! | [`Uyvy`](PixelFormat::Uyvy) | packed `U0 Y0 V0 Y1` | 4:2:2 | 2 |
//! | [`Ayuv`](PixelFormat::Ayuv) | packed `A Y U V` | 4:4:4 | 4 |

use crate::{Error, Result};

/// A YUV pixel layout selector.
///
/// # Example
///
/// ```rust
/// use yuvcms_core::PixelFormat;
///
/// let fmt = PixelFormat::from_name("yuy2").unwrap();
/// assert_eq!(fmt, PixelFormat::Yuy2);
/// assert!(PixelFormat::from_name("nv12").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Planar 4:2:0: full-resolution Y plane followed by quarter-resolution
    /// U and V planes.
    I420,
    /// Packed 4:2:2, luma first: `Y0 U0 Y1 V0` per two pixels.
    Yuy2,
    /// Packed 4:2:2, chroma first: `U0 Y0 V0 Y1` per two pixels.
    Uyvy,
    /// Packed 4:4:4:4 with alpha: `A Y U V` per pixel. Alpha is carried
    /// through conversions untouched.
    Ayuv,
}

impl PixelFormat {
    /// All supported formats, in a stable order.
    pub const ALL: [PixelFormat; 4] = [
        PixelFormat::I420,
        PixelFormat::Yuy2,
        PixelFormat::Uyvy,
        PixelFormat::Ayuv,
    ];

    /// Canonical lower-case name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            PixelFormat::I420 => "i420",
            PixelFormat::Yuy2 => "yuy2",
            PixelFormat::Uyvy => "uyvy",
            PixelFormat::Ayuv => "ayuv",
        }
    }

    /// Parses a format name (case-insensitive).
    ///
    /// Unknown names are a configuration error from the caller and surface
    /// as [`Error::UnsupportedFormat`].
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "i420" => Ok(PixelFormat::I420),
            "yuy2" | "yuyv" => Ok(PixelFormat::Yuy2),
            "uyvy" => Ok(PixelFormat::Uyvy),
            "ayuv" => Ok(PixelFormat::Ayuv),
            other => Err(Error::unsupported_format(other)),
        }
    }

    /// Returns `true` for single-plane packed layouts.
    #[inline]
    pub fn is_packed(&self) -> bool {
        !matches!(self, PixelFormat::I420)
    }

    /// Returns `true` if the layout carries an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        matches!(self, PixelFormat::Ayuv)
    }

    /// Number of planes a frame of this format holds.
    #[inline]
    pub fn plane_count(&self) -> usize {
        match self {
            PixelFormat::I420 => 3,
            _ => 1,
        }
    }

    /// Chroma subsampling divisors as `(horizontal, vertical)`.
    #[inline]
    pub fn chroma_subsampling(&self) -> (u32, u32) {
        match self {
            PixelFormat::I420 => (2, 2),
            PixelFormat::Yuy2 | PixelFormat::Uyvy => (2, 1),
            PixelFormat::Ayuv => (1, 1),
        }
    }

    /// Bytes per pixel for packed layouts, `None` for planar ones.
    #[inline]
    pub fn packed_bytes_per_pixel(&self) -> Option<usize> {
        match self {
            PixelFormat::I420 => None,
            PixelFormat::Yuy2 | PixelFormat::Uyvy => Some(2),
            PixelFormat::Ayuv => Some(4),
        }
    }

    /// Total byte size of one tightly packed frame.
    ///
    /// ```rust
    /// use yuvcms_core::PixelFormat;
    ///
    /// assert_eq!(PixelFormat::I420.frame_size(4, 4), 24);
    /// assert_eq!(PixelFormat::Ayuv.frame_size(4, 4), 64);
    /// ```
    pub fn frame_size(&self, width: u32, height: u32) -> usize {
        let (w, h) = (width as usize, height as usize);
        match self {
            PixelFormat::I420 => {
                let cw = w.div_ceil(2);
                let ch = h.div_ceil(2);
                w * h + 2 * cw * ch
            }
            PixelFormat::Yuy2 | PixelFormat::Uyvy => w * h * 2,
            PixelFormat::Ayuv => w * h * 4,
        }
    }

    /// Checks that `width x height` is representable in this layout.
    ///
    /// Zero dimensions are always invalid; the packed 4:2:2 layouts store
    /// two pixels per macropixel and cannot represent an odd width.
    pub fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "zero size"));
        }
        if matches!(self, PixelFormat::Yuy2 | PixelFormat::Uyvy) && width % 2 != 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "packed 4:2:2 requires an even width",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(PixelFormat::from_name("I420").unwrap(), PixelFormat::I420);
        assert_eq!(PixelFormat::from_name("yuyv").unwrap(), PixelFormat::Yuy2);
        assert_eq!(PixelFormat::from_name("UYVY").unwrap(), PixelFormat::Uyvy);
        assert!(PixelFormat::from_name("rgb24").is_err());
    }

    #[test]
    fn test_name_roundtrip() {
        for fmt in PixelFormat::ALL {
            assert_eq!(PixelFormat::from_name(fmt.name()).unwrap(), fmt);
        }
    }

    #[test]
    fn test_layout_properties() {
        for fmt in PixelFormat::ALL {
            assert_eq!(fmt.is_packed(), fmt.plane_count() == 1);
            assert_eq!(fmt.is_packed(), fmt.packed_bytes_per_pixel().is_some());
        }
        assert!(PixelFormat::Ayuv.has_alpha());
        assert!(!PixelFormat::Yuy2.has_alpha());
        assert_eq!(PixelFormat::I420.plane_count(), 3);
        assert_eq!(PixelFormat::I420.chroma_subsampling(), (2, 2));
        assert_eq!(PixelFormat::Uyvy.chroma_subsampling(), (2, 1));
        assert_eq!(PixelFormat::Uyvy.packed_bytes_per_pixel(), Some(2));
        assert_eq!(PixelFormat::Ayuv.packed_bytes_per_pixel(), Some(4));
    }

    #[test]
    fn test_frame_size() {
        assert_eq!(PixelFormat::I420.frame_size(720, 480), 720 * 480 * 3 / 2);
        assert_eq!(PixelFormat::Yuy2.frame_size(720, 480), 720 * 480 * 2);
        assert_eq!(PixelFormat::Ayuv.frame_size(720, 480), 720 * 480 * 4);
        // odd sizes round chroma planes up
        assert_eq!(PixelFormat::I420.frame_size(3, 3), 9 + 2 * 4);
    }

    #[test]
    fn test_validate_dimensions() {
        assert!(PixelFormat::I420.validate_dimensions(720, 480).is_ok());
        assert!(PixelFormat::Yuy2.validate_dimensions(721, 480).is_err());
        assert!(PixelFormat::Ayuv.validate_dimensions(721, 480).is_ok());
        assert!(PixelFormat::Ayuv.validate_dimensions(0, 480).is_err());
    }
}
