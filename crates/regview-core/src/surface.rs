use crate::display::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0, 0, 0, 255];
pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// An addressable RGBA pixel surface.
pub trait RasterTarget {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Overwrites the region whose top-left corner is `(x, y)` with `pixels`,
    /// `width` pixels per row. No blending: alpha 0 punches a hole.
    /// Pixels that land outside the surface are dropped.
    fn put_region(&mut self, x: i32, y: i32, width: usize, pixels: &[Rgba]);
}

pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
    generation: u64,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl Surface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; width * height],
            generation: 0,
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Bumped on every write, so consumers can tell when to re-upload.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn as_rgba(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }
}

impl RasterTarget for Surface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn put_region(&mut self, x: i32, y: i32, width: usize, pixels: &[Rgba]) {
        if width == 0 {
            return;
        }
        for (row_offset, row) in pixels.chunks(width).enumerate() {
            let py = y as i64 + row_offset as i64;
            if py < 0 || py >= self.height as i64 {
                continue;
            }
            let row_start = py as usize * self.width;
            for (col_offset, color) in row.iter().enumerate() {
                let px = x as i64 + col_offset as i64;
                if px < 0 || px >= self.width as i64 {
                    continue;
                }
                self.pixels[row_start + px as usize] = *color;
            }
        }
        self.generation += 1;
    }
}
