/// Number of entries in the game palette. Every framebuffer byte indexes it.
pub const PALETTE_SIZE: usize = 256;

/// One palette colour, 8 bits per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Pack as a fully opaque ARGB8888 value: `0xFF` alpha in the top byte,
    /// then red, green and blue.
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }
}

/// The 256-colour lookup table mapping framebuffer indices to RGB.
///
/// Owned and mutated by the simulation; the blitter reads it every frame
/// and never caches it across frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// An all-black palette.
    pub fn new() -> Self {
        Self {
            entries: [Rgb::default(); PALETTE_SIZE],
        }
    }

    pub fn get(&self, index: u8) -> Rgb {
        self.entries[index as usize]
    }

    pub fn set(&mut self, index: u8, colour: Rgb) {
        self.entries[index as usize] = colour;
    }

    pub fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [Rgb; PALETTE_SIZE] {
        &mut self.entries
    }

    /// Resolve every entry to its packed ARGB value once, so the per-pixel
    /// loop is a single table lookup.
    pub fn to_argb_table(&self) -> [u32; PALETTE_SIZE] {
        let mut table = [0u32; PALETTE_SIZE];
        for (slot, colour) in table.iter_mut().zip(self.entries.iter()) {
            *slot = colour.to_argb();
        }
        table
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
