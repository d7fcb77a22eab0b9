//! The baked transform table.
//!
//! [`TransformTable`] memoizes the full conversion pipeline - studio YUV
//! decode, gamut clamp, linearization, XYZ re-gamut to the reference
//! display, re-encode, clamp, studio YUV encode - for every one of the
//! 256^3 input byte triples, per output channel. Building it costs ~50M
//! matrix applications once; applying it costs one indexed load per
//! sample.
//!
//! # Layout
//!
//! One contiguous `3 * 256^3` byte buffer, channel-major. The entry for
//! output channel `c` and input triple `(y, u, v)` lives at
//! `c * 0x0100_0000 + (y << 16 | u << 8 | v)`.
//!
//! # Caching
//!
//! [`TransformTable::shared`] hands out a process-wide instance behind a
//! [`std::sync::OnceLock`]: the first caller builds, racing callers block
//! and observe the same completed table, and the table is read-only (and
//! thus freely shared across threads) afterwards. The transform
//! parameters are compile-time constants, so there is no invalidation.

use crate::convert::{rgb_to_xyz_601, rgb_to_yuv_601, xyz_to_display_rgb, yuv_to_rgb_601};
use rayon::prelude::*;
use std::sync::OnceLock;
use yuvcms_math::Color;
use yuvcms_transfer::rec601;

/// Entries per channel: one per `(y, u, v)` byte triple.
pub const CUBE_LEN: usize = 0x0100_0000;

/// Output channels in table order.
const CHANNELS: usize = 3;

/// Entries per Y-plane slab (one fixed luma value, all chroma pairs).
const PLANE_LEN: usize = 0x1_0000;

/// An output channel selector for table lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Luma (Y).
    Luma,
    /// Blue-difference chroma (Cb / U).
    Cb,
    /// Red-difference chroma (Cr / V).
    Cr,
}

impl Channel {
    /// All channels, in table order.
    pub const ALL: [Channel; 3] = [Channel::Luma, Channel::Cb, Channel::Cr];

    /// Byte offset of this channel's sub-table.
    #[inline]
    pub fn offset(&self) -> usize {
        *self as usize * CUBE_LEN
    }
}

/// The baked 3-channel 256^3 lookup table.
pub struct TransformTable {
    data: Box<[u8]>,
}

impl TransformTable {
    /// Builds the table from scratch.
    ///
    /// Each entry is a pure function of its input triple and the fixed
    /// built-in matrices, so the build is deterministic byte for byte; the
    /// parallel fill over Y-plane slabs is identical to a serial one.
    ///
    /// Prefer [`TransformTable::shared`] outside of tests - the build is
    /// the expensive path.
    pub fn build() -> Self {
        let yuv_to_rgb = yuv_to_rgb_601();
        let rgb_to_yuv = rgb_to_yuv_601();
        let rgb_to_xyz = rgb_to_xyz_601();
        let xyz_to_display = xyz_to_display_rgb();

        let mut data = vec![0u8; CHANNELS * CUBE_LEN].into_boxed_slice();
        let (t_y, rest) = data.split_at_mut(CUBE_LEN);
        let (t_u, t_v) = rest.split_at_mut(CUBE_LEN);

        t_y.par_chunks_mut(PLANE_LEN)
            .zip(t_u.par_chunks_mut(PLANE_LEN))
            .zip(t_v.par_chunks_mut(PLANE_LEN))
            .enumerate()
            .for_each(|(y, ((s_y, s_u), s_v))| {
                for u in 0..256usize {
                    for v in 0..256usize {
                        let c = Color::new(y as f64, u as f64, v as f64);
                        let c = yuv_to_rgb.apply(c);
                        let c = c.clamp01();
                        let c = rec601::eotf_color(c);
                        let c = xyz_to_display.apply(rgb_to_xyz.apply(c));
                        let c = rec601::oetf_color(c);
                        let c = c.clamp01();
                        let c = rgb_to_yuv.apply(c);

                        let idx = (u << 8) | v;
                        s_y[idx] = quantize(c.x);
                        s_u[idx] = quantize(c.y);
                        s_v[idx] = quantize(c.z);
                    }
                }
            });

        Self { data }
    }

    /// The process-wide table, built on first use.
    ///
    /// Idempotent and safe under racing first callers; every call returns
    /// the same completed instance.
    pub fn shared() -> &'static TransformTable {
        static SHARED: OnceLock<TransformTable> = OnceLock::new();
        SHARED.get_or_init(TransformTable::build)
    }

    /// Raw table bytes, channel-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Looks up one output byte.
    #[inline]
    pub fn lookup(&self, channel: Channel, y: u8, u: u8, v: u8) -> u8 {
        let idx = (y as usize) << 16 | (u as usize) << 8 | v as usize;
        self.data[channel.offset() + idx]
    }

    /// Applies the table to one row of samples for one output channel.
    ///
    /// Reads the i-th byte of each input slice as the `(y, u, v)` triple
    /// for pixel `i` and writes the selected channel's output byte to
    /// `dst[i]`. Rows are independent; callers may process them in
    /// parallel against the same table.
    ///
    /// # Panics
    ///
    /// All four slices must have the same length - a mismatch is a
    /// programming error in the caller's row plumbing, not a recoverable
    /// condition.
    pub fn apply_row(&self, channel: Channel, y: &[u8], u: &[u8], v: &[u8], dst: &mut [u8]) {
        assert_eq!(y.len(), dst.len(), "luma row length != output row length");
        assert_eq!(u.len(), dst.len(), "Cb row length != output row length");
        assert_eq!(v.len(), dst.len(), "Cr row length != output row length");

        let sub = &self.data[channel.offset()..channel.offset() + CUBE_LEN];
        for (i, out) in dst.iter_mut().enumerate() {
            let idx = (y[i] as usize) << 16 | (u[i] as usize) << 8 | v[i] as usize;
            *out = sub[idx];
        }
    }
}

/// Rounds a final pipeline value to its output byte.
///
/// Round-to-nearest, ties away from zero. The two gamut clamps upstream
/// are what keep the value inside `[0, 255]`; a rounded result outside
/// that range would be a defect in the composed matrices, so it trips a
/// debug assertion rather than being silently masked.
#[inline]
fn quantize(v: f64) -> u8 {
    let r = v.round();
    debug_assert!(
        (0.0..=255.0).contains(&r),
        "table entry {} outside byte range",
        r
    );
    r as u8
}
