//! Whole-frame conversion.
//!
//! The row applier wants one byte per pixel per channel; the supported
//! layouts don't all store that. Conversion therefore runs row by row:
//! unpack the row to full-resolution Y/U/V scratch rows (chroma replicated
//! for subsampled layouts), push each channel through the table, repack
//! into the destination layout (chroma decimated by taking the
//! co-sited sample). Alpha, where the layout carries it, passes through
//! untouched.

use crate::table::{Channel, TransformTable};
use yuvcms_core::{Frame, PixelFormat, Result};

/// Scratch rows reused across a frame's conversion.
struct RowBuf {
    y: Vec<u8>,
    u: Vec<u8>,
    v: Vec<u8>,
    out_y: Vec<u8>,
    out_u: Vec<u8>,
    out_v: Vec<u8>,
}

impl RowBuf {
    fn new(width: usize) -> Self {
        Self {
            y: vec![0; width],
            u: vec![0; width],
            v: vec![0; width],
            out_y: vec![0; width],
            out_u: vec![0; width],
            out_v: vec![0; width],
        }
    }
}

/// Recolors a frame through the process-wide table.
///
/// Geometry and layout of the result match the source exactly. See
/// [`recolor_frame_with`] for the table-parameterized form.
pub fn recolor_frame(src: &Frame) -> Result<Frame> {
    recolor_frame_with(TransformTable::shared(), src)
}

/// Recolors a frame through a specific table instance.
pub fn recolor_frame_with(table: &TransformTable, src: &Frame) -> Result<Frame> {
    let mut dst = Frame::alloc(src.format(), src.width(), src.height())?;
    let mut rows = RowBuf::new(src.width() as usize);

    for j in 0..src.height() {
        unpack_row(src, j, &mut rows);
        table.apply_row(Channel::Luma, &rows.y, &rows.u, &rows.v, &mut rows.out_y);
        table.apply_row(Channel::Cb, &rows.y, &rows.u, &rows.v, &mut rows.out_u);
        table.apply_row(Channel::Cr, &rows.y, &rows.u, &rows.v, &mut rows.out_v);
        pack_row(&mut dst, src, j, &rows);
    }
    Ok(dst)
}

/// Gathers row `j` into full-resolution per-channel rows.
fn unpack_row(src: &Frame, j: u32, rows: &mut RowBuf) {
    let w = src.width() as usize;
    match src.format() {
        PixelFormat::I420 => {
            let cj = (j / 2).min(src.planes()[1].height() - 1);
            rows.y.copy_from_slice(&src.planes()[0].row(j)[..w]);
            let u_row = src.planes()[1].row(cj);
            let v_row = src.planes()[2].row(cj);
            for i in 0..w {
                rows.u[i] = u_row[i / 2];
                rows.v[i] = v_row[i / 2];
            }
        }
        PixelFormat::Yuy2 => {
            let row = src.planes()[0].row(j);
            for i in 0..w {
                rows.y[i] = row[2 * i];
                rows.u[i] = row[4 * (i / 2) + 1];
                rows.v[i] = row[4 * (i / 2) + 3];
            }
        }
        PixelFormat::Uyvy => {
            let row = src.planes()[0].row(j);
            for i in 0..w {
                rows.y[i] = row[2 * i + 1];
                rows.u[i] = row[4 * (i / 2)];
                rows.v[i] = row[4 * (i / 2) + 2];
            }
        }
        PixelFormat::Ayuv => {
            let row = src.planes()[0].row(j);
            for i in 0..w {
                rows.y[i] = row[4 * i + 1];
                rows.u[i] = row[4 * i + 2];
                rows.v[i] = row[4 * i + 3];
            }
        }
    }
}

/// Scatters converted rows back into the destination layout.
///
/// `src` is consulted only for alpha passthrough.
fn pack_row(dst: &mut Frame, src: &Frame, j: u32, rows: &RowBuf) {
    let w = dst.width() as usize;
    match dst.format() {
        PixelFormat::I420 => {
            dst.planes_mut()[0].row_mut(j)[..w].copy_from_slice(&rows.out_y);
            // chroma is stored for even rows only, from the co-sited sample
            if j % 2 == 0 {
                let cj = j / 2;
                let cw = dst.planes()[1].width() as usize;
                for i in 0..cw {
                    let s = 2 * i;
                    dst.planes_mut()[1].row_mut(cj)[i] = rows.out_u[s];
                    dst.planes_mut()[2].row_mut(cj)[i] = rows.out_v[s];
                }
            }
        }
        PixelFormat::Yuy2 => {
            let row = dst.planes_mut()[0].row_mut(j);
            for i in 0..w {
                row[2 * i] = rows.out_y[i];
                if i % 2 == 0 {
                    row[2 * i + 1] = rows.out_u[i];
                    row[2 * i + 3] = rows.out_v[i];
                }
            }
        }
        PixelFormat::Uyvy => {
            let row = dst.planes_mut()[0].row_mut(j);
            for i in 0..w {
                row[2 * i + 1] = rows.out_y[i];
                if i % 2 == 0 {
                    row[2 * i] = rows.out_u[i];
                    row[2 * i + 2] = rows.out_v[i];
                }
            }
        }
        PixelFormat::Ayuv => {
            let alpha = src.planes()[0].row(j);
            let row = dst.planes_mut()[0].row_mut(j);
            for i in 0..w {
                row[4 * i] = alpha[4 * i];
                row[4 * i + 1] = rows.out_y[i];
                row[4 * i + 2] = rows.out_u[i];
                row[4 * i + 3] = rows.out_v[i];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TransformTable;
    use yuvcms_core::{Frame, PixelFormat};

    fn ayuv_frame(w: u32, h: u32, fill: [u8; 4]) -> Frame {
        let mut bytes = Vec::with_capacity((w * h * 4) as usize);
        for _ in 0..w * h {
            bytes.extend_from_slice(&fill);
        }
        Frame::from_bytes(PixelFormat::Ayuv, w, h, &bytes).unwrap()
    }

    #[test]
    fn test_ayuv_matches_direct_lookup() {
        let t = TransformTable::shared();
        // per-pixel varying input
        let mut frame = Frame::alloc(PixelFormat::Ayuv, 4, 2).unwrap();
        for j in 0..2 {
            let row = frame.planes_mut()[0].row_mut(j);
            for i in 0..4usize {
                row[4 * i] = 0x40;
                row[4 * i + 1] = (40 * i + 16 + j as usize) as u8;
                row[4 * i + 2] = (60 * i + 30) as u8;
                row[4 * i + 3] = (50 * i + 20) as u8;
            }
        }
        let out = recolor_frame(&frame).unwrap();
        for j in 0..2 {
            let src_row = frame.planes()[0].row(j);
            let dst_row = out.planes()[0].row(j);
            for i in 0..4usize {
                let (y, u, v) = (src_row[4 * i + 1], src_row[4 * i + 2], src_row[4 * i + 3]);
                assert_eq!(dst_row[4 * i], 0x40, "alpha must pass through");
                assert_eq!(dst_row[4 * i + 1], t.lookup(Channel::Luma, y, u, v));
                assert_eq!(dst_row[4 * i + 2], t.lookup(Channel::Cb, y, u, v));
                assert_eq!(dst_row[4 * i + 3], t.lookup(Channel::Cr, y, u, v));
            }
        }
    }

    #[test]
    fn test_studio_black_frame_stays_black() {
        let frame = ayuv_frame(4, 4, [0xFF, 16, 128, 128]);
        let out = recolor_frame(&frame).unwrap();
        let row = out.planes()[0].row(0);
        assert_eq!(row[0], 0xFF);
        assert!(row[1].abs_diff(16) <= 1);
        assert!(row[2].abs_diff(128) <= 1);
        assert!(row[3].abs_diff(128) <= 1);
    }

    #[test]
    fn test_i420_uniform_frame() {
        let t = TransformTable::shared();
        let size = PixelFormat::I420.frame_size(6, 4);
        let mut bytes = vec![0u8; size];
        bytes[..24].fill(100); // Y plane
        bytes[24..].fill(140); // U and V planes
        let frame = Frame::from_bytes(PixelFormat::I420, 6, 4, &bytes).unwrap();
        let out = recolor_frame(&frame).unwrap();

        let expect_y = t.lookup(Channel::Luma, 100, 140, 140);
        let expect_u = t.lookup(Channel::Cb, 100, 140, 140);
        assert!(out.planes()[0].data().iter().all(|&b| b == expect_y));
        assert!(out.planes()[1].data().iter().all(|&b| b == expect_u));
    }

    #[test]
    fn test_packed_422_chroma_orders_agree() {
        let t = TransformTable::shared();
        // same pixels in both byte orders
        let yuy2 = Frame::from_bytes(
            PixelFormat::Yuy2,
            2,
            1,
            &[80, 100, 90, 200], // Y0 U Y1 V
        )
        .unwrap();
        let uyvy = Frame::from_bytes(
            PixelFormat::Uyvy,
            2,
            1,
            &[100, 80, 200, 90], // U Y0 V Y1
        )
        .unwrap();

        let out_a = recolor_frame(&yuy2).unwrap();
        let out_b = recolor_frame(&uyvy).unwrap();

        let a = out_a.planes()[0].row(0);
        let b = out_b.planes()[0].row(0);
        assert_eq!(a[0], b[1], "Y0");
        assert_eq!(a[2], b[3], "Y1");
        assert_eq!(a[1], b[0], "U");
        assert_eq!(a[3], b[2], "V");
        assert_eq!(a[0], t.lookup(Channel::Luma, 80, 100, 200));
        assert_eq!(a[1], t.lookup(Channel::Cb, 80, 100, 200));
    }

    #[test]
    fn test_geometry_preserved() {
        for fmt in PixelFormat::ALL {
            let frame = Frame::alloc(fmt, 8, 4).unwrap();
            let out = recolor_frame(&frame).unwrap();
            assert!(frame.check_compatible(&out).is_ok(), "{}", fmt);
        }
    }
}
