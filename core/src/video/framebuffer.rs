/// Logical screen width in pixels.
pub const SCR_WIDTH: usize = 320;
/// Logical screen height in pixels.
pub const SCR_HEIGHT: usize = 256;

/// Offscreen grid of palette indices, one byte per pixel, row-major.
///
/// Byte storage makes every index valid for the 256-entry palette, so the
/// blitter has no out-of-range case to handle.
#[derive(Clone)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// A framebuffer of the standard `SCR_WIDTH` x `SCR_HEIGHT` size.
    pub fn new() -> Self {
        Self::with_size(SCR_WIDTH, SCR_HEIGHT)
    }

    /// A framebuffer of arbitrary size, filled with index 0.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// One row of palette indices.
    pub fn row(&self, y: usize) -> &[u8] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Write one pixel. Coordinates outside the grid are ignored.
    pub fn put(&mut self, x: usize, y: usize, index: u8) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = index;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn fill(&mut self, index: u8) {
        self.pixels.fill(index);
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}
