//! Subcommand implementations.

use crate::ConvertArgs;
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};
use yuvcms_color::{
    Channel, TransformTable, bt709_to_bt601, recolor_frame_with, rgb_to_xyz_601, rgb_to_yuv_601,
    xyz_to_display_rgb, yuv_to_rgb_601,
};
use yuvcms_core::{Frame, PixelFormat};

/// `yuvcms convert`: stream raw frames through the table.
pub fn convert(args: &ConvertArgs) -> Result<()> {
    let format = PixelFormat::from_name(&args.format)?;
    format.validate_dimensions(args.width, args.height)?;

    let mut reader = open_input(&args.input)?;
    let mut writer = BufWriter::new(
        File::create(&args.output)
            .with_context(|| format!("creating output {}", args.output.display()))?,
    );

    info!(
        "recoloring {} ({} {}x{}, {} bytes/frame)",
        args.input.display(),
        format,
        args.width,
        args.height,
        format.frame_size(args.width, args.height)
    );
    let frames = convert_stream(&mut reader, &mut writer, format, args.width, args.height)?;
    writer.flush()?;

    info!("wrote {} frames to {}", frames, args.output.display());
    Ok(())
}

/// Opens the raw input stream; `-` means stdin.
fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(std::io::stdin().lock()))
    } else {
        let file =
            File::open(path).with_context(|| format!("opening input {}", path.display()))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Recolors every frame of `reader` into `writer`, returning the count.
fn convert_stream(
    reader: &mut impl Read,
    writer: &mut impl Write,
    format: PixelFormat,
    width: u32,
    height: u32,
) -> Result<u64> {
    let table = TransformTable::shared();
    let mut buf = vec![0u8; format.frame_size(width, height)];
    let mut frames = 0u64;
    while read_frame(reader, &mut buf)? {
        let frame = Frame::from_bytes(format, width, height, &buf)?;
        let out = recolor_frame_with(table, &frame)?;
        writer.write_all(&out.to_bytes())?;
        frames += 1;
        debug!("frame {} done", frames);
    }
    Ok(frames)
}

/// `yuvcms table`: force-build the table and print spot checks.
pub fn table() -> Result<()> {
    let table = TransformTable::shared();
    println!(
        "table: {} bytes ({} entries x 3 channels)",
        table.data().len(),
        table.data().len() / 3
    );
    for (name, y, u, v) in [
        ("studio black", 16u8, 128u8, 128u8),
        ("studio white", 235, 128, 128),
        ("mid gray", 126, 128, 128),
        ("75% red", 81, 90, 240),
    ] {
        println!(
            "  {:12} ({:3},{:3},{:3}) -> ({:3},{:3},{:3})",
            name,
            y,
            u,
            v,
            table.lookup(Channel::Luma, y, u, v),
            table.lookup(Channel::Cb, y, u, v),
            table.lookup(Channel::Cr, y, u, v),
        );
    }
    Ok(())
}

/// `yuvcms matrices`: dump the composed matrices.
pub fn matrices() -> Result<()> {
    println!("yuv -> rgb (BT.601):\n{}", yuv_to_rgb_601());
    println!("rgb -> yuv (BT.601):\n{}", rgb_to_yuv_601());
    println!("rgb -> XYZ (SMPTE-C):\n{}", rgb_to_xyz_601());
    println!("XYZ -> display rgb:\n{}", xyz_to_display_rgb());
    println!("bt709 -> bt601:\n{}", bt709_to_bt601());
    Ok(())
}

/// Reads exactly one frame into `buf`.
///
/// Returns `Ok(false)` on a clean end of stream; a partial trailing frame
/// is an error.
fn read_frame(reader: &mut impl Read, buf: &mut [u8]) -> Result<bool> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            if filled == 0 {
                return Ok(false);
            }
            bail!("truncated frame: got {} of {} bytes", filled, buf.len());
        }
        filled += n;
    }
    Ok(true)
}
