//! Palette blit: indexed framebuffer to ARGB8888 presentation pixels.
//!
//! Destination rows are addressed by pitch, not by logical width, so a
//! padded surface (pitch > width) still lines up row for row. Padding
//! pixels between the logical width and the pitch are left untouched.

use super::framebuffer::Framebuffer;
use super::palette::Palette;

/// Bytes per ARGB8888 pixel.
const BYTES_PER_PIXEL: usize = 4;

/// Truecolour pixel grid regenerated from the framebuffer every frame.
///
/// `pitch` is the row stride in pixels and may exceed `width`.
pub struct PresentationBuffer {
    width: usize,
    height: usize,
    pitch: usize,
    pixels: Vec<u32>,
}

impl PresentationBuffer {
    /// A tightly packed buffer (pitch == width).
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_pitch(width, height, width)
    }

    /// A buffer whose rows are `pitch` pixels apart. A pitch smaller than
    /// the width is raised to the width.
    pub fn with_pitch(width: usize, height: usize, pitch: usize) -> Self {
        let pitch = pitch.max(width);
        Self {
            width,
            height,
            pitch,
            pixels: vec![0; pitch * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at logical coordinates, honouring the pitch.
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.pitch + x]
    }
}

/// Convert `framebuffer` through `palette` into `dst`.
///
/// Rows beyond either grid's height and columns beyond either grid's width
/// are skipped rather than reported; matching sizes is a precondition.
pub fn blit(framebuffer: &Framebuffer, palette: &Palette, dst: &mut PresentationBuffer) {
    let colours = palette.to_argb_table();
    let width = framebuffer.width().min(dst.width);
    let pitch = dst.pitch;
    if pitch == 0 || width == 0 {
        return;
    }

    for (y, out_row) in dst
        .pixels
        .chunks_mut(pitch)
        .take(framebuffer.height())
        .enumerate()
    {
        let src_row = &framebuffer.row(y)[..width];
        for (out, &index) in out_row[..width].iter_mut().zip(src_row) {
            *out = colours[index as usize];
        }
    }
}

/// Convert `framebuffer` through `palette` into a raw ARGB8888 byte surface
/// such as a locked SDL surface. `pitch_bytes` is the surface row stride
/// in bytes; it is advanced in whole pixels (`pitch_bytes / 4`).
///
/// Pixels are stored in native byte order, which is what the packed
/// ARGB8888 format expects.
pub fn blit_bytes(framebuffer: &Framebuffer, palette: &Palette, dst: &mut [u8], pitch_bytes: usize) {
    let colours = palette.to_argb_table();
    let pitch = (pitch_bytes / BYTES_PER_PIXEL) * BYTES_PER_PIXEL;
    if pitch == 0 {
        return;
    }
    let width = framebuffer.width().min(pitch / BYTES_PER_PIXEL);

    for (y, out_row) in dst.chunks_mut(pitch).take(framebuffer.height()).enumerate() {
        let src_row = &framebuffer.row(y)[..width];
        for (out, &index) in out_row.chunks_exact_mut(BYTES_PER_PIXEL).zip(src_row) {
            out.copy_from_slice(&colours[index as usize].to_ne_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::palette::Rgb;

    fn ramp_palette() -> Palette {
        let mut pal = Palette::new();
        for i in 0..=255u8 {
            pal.set(i, Rgb::new(i, 255 - i, i.wrapping_mul(3)));
        }
        pal
    }

    #[test]
    fn every_index_maps_through_palette() {
        let pal = ramp_palette();
        let mut fb = Framebuffer::with_size(256, 1);
        for (x, p) in fb.pixels_mut().iter_mut().enumerate() {
            *p = x as u8;
        }

        let mut out = PresentationBuffer::new(256, 1);
        blit(&fb, &pal, &mut out);

        for v in 0..=255u8 {
            let c = pal.get(v);
            let expected =
                0xFF00_0000 | (c.red as u32) << 16 | (c.green as u32) << 8 | c.blue as u32;
            assert_eq!(out.pixel(v as usize, 0), expected, "index {v}");
        }
    }

    #[test]
    fn rows_advance_by_pitch_not_width() {
        let mut pal = Palette::new();
        pal.set(1, Rgb::new(0x10, 0x20, 0x30));
        pal.set(2, Rgb::new(0x40, 0x50, 0x60));

        let mut fb = Framebuffer::with_size(3, 3);
        fb.put(0, 1, 1);
        fb.put(0, 2, 2);

        let mut out = PresentationBuffer::with_pitch(3, 3, 8);
        blit(&fb, &pal, &mut out);

        // Row N's first pixel lands at N * pitch.
        assert_eq!(out.pixels()[8], 0xFF10_2030);
        assert_eq!(out.pixels()[16], 0xFF40_5060);
        // Offset N * width holds an ordinary row-0 pixel, not row N.
        assert_eq!(out.pixels()[3], 0);
        assert_eq!(out.pixels()[6], 0);
    }

    #[test]
    fn padding_pixels_are_untouched() {
        let pal = ramp_palette();
        let fb = Framebuffer::with_size(2, 2);
        let mut out = PresentationBuffer::with_pitch(2, 2, 4);
        blit(&fb, &pal, &mut out);

        let px = out.pixels();
        assert_eq!(px[0], 0xFF00_FF00);
        assert_eq!(px[2], 0);
        assert_eq!(px[3], 0);
        assert_eq!(px[4], 0xFF00_FF00);
    }

    #[test]
    fn zero_width_surface_is_a_no_op() {
        let mut out = PresentationBuffer::new(0, 2);
        blit(&Framebuffer::with_size(0, 2), &Palette::new(), &mut out);
        assert!(out.pixels().is_empty());

        let mut out = PresentationBuffer::new(3, 2);
        blit(&Framebuffer::with_size(0, 2), &Palette::new(), &mut out);
        assert!(out.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn byte_surface_matches_word_buffer() {
        let pal = ramp_palette();
        let mut fb = Framebuffer::with_size(5, 2);
        for (i, p) in fb.pixels_mut().iter_mut().enumerate() {
            *p = (i * 37) as u8;
        }

        let mut words = PresentationBuffer::with_pitch(5, 2, 6);
        blit(&fb, &pal, &mut words);

        let mut bytes = vec![0u8; 6 * 4 * 2];
        blit_bytes(&fb, &pal, &mut bytes, 6 * 4);

        for (i, chunk) in bytes.chunks_exact(4).enumerate() {
            let value = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            assert_eq!(value, words.pixels()[i], "pixel {i}");
        }
    }

    #[test]
    fn palette_changes_show_up_next_blit() {
        let mut pal = Palette::new();
        let fb = Framebuffer::with_size(1, 1);
        let mut out = PresentationBuffer::new(1, 1);

        blit(&fb, &pal, &mut out);
        assert_eq!(out.pixel(0, 0), 0xFF00_0000);

        pal.set(0, Rgb::new(9, 8, 7));
        blit(&fb, &pal, &mut out);
        assert_eq!(out.pixel(0, 0), 0xFF09_0807);
    }
}
