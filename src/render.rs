use crate::Coord;
use crate::grid::Grid;

/// Characters used for each cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub live: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            live: '*',
            dead: ' ',
        }
    }
}

/// Renders a [`Grid`] one character per cell, one line per row.
///
/// The frame buffer is kept around between frames so animating doesn't allocate.
#[derive(Debug, Default)]
pub struct TextRenderer {
    glyphs: Glyphs,

    /// The frame buffer.
    fb: String,
}

impl TextRenderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self {
            glyphs,
            fb: String::new(),
        }
    }

    /// Every row is terminated by a newline, including the last one.
    pub fn render(&mut self, grid: &Grid) -> &str {
        let Glyphs { live, dead } = self.glyphs;
        self.fb.clear();

        for y in 0..grid.height() {
            self.fb.extend(grid.row(y).map(|c| c.glyph(live, dead)));
            self.fb.push('\n');
        }

        &self.fb
    }
}

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Renders a [`Grid`] with braille characters, packing 2x4 cells into each one.
///
/// Handy for grids wider than the terminal. Dead cells are blank dots.
#[derive(Debug, Default)]
pub struct BrailleRenderer {
    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// The frame buffer.
    fb: String,
}

impl BrailleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, grid: &Grid) -> &str {
        // Let `w` and `h` refer to width and height of the grid. Then `bw = ceil(w / 2)` and
        // `bh = ceil(h / 4)` are the width and height of the frame in braille characters.
        let (bw, bh) = (grid.width().div_ceil(2), grid.height().div_ceil(4));

        self.cp.clear();
        self.cp.resize(bw * bh, BRAILLE_EMPTY);

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.get(x as Coord, y as Coord).is_live() {
                    self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
                }
            }
        }

        // Each braille character is 3 bytes, and newlines one byte.
        self.fb.clear();
        self.fb.reserve(3 * (bw * bh) + bh);

        for line in self.cp.chunks_exact(bw) {
            // Every codepoint lies in U+2800..=U+28FF, which are all valid chars
            self.fb.extend(line.iter().filter_map(|&c| char::from_u32(c)));
            self.fb.push('\n');
        }

        &self.fb
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BrailleRenderer;
    use super::Glyphs;
    use super::TextRenderer;
    use crate::cell::Cell;
    use crate::grid::Grid;

    #[test]
    fn text_rows_end_in_newlines() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(Cell::Live, 0, 0);
        grid.set(Cell::Live, 2, 1);

        let mut renderer = TextRenderer::default();

        assert_eq!(renderer.render(&grid), "*  \n  *\n");
    }

    #[test]
    fn text_custom_glyphs() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set(Cell::Live, 1, 0);

        let mut renderer = TextRenderer::new(Glyphs {
            live: '#',
            dead: '.',
        });

        assert_eq!(renderer.render(&grid), ".#\n");
        // Rendering again reuses the buffer without leftovers
        assert_eq!(renderer.render(&grid), ".#\n");
    }

    #[test]
    fn braille_packs_cells() {
        let mut grid = Grid::new(3, 5).unwrap();
        grid.set(Cell::Live, 0, 0);
        grid.set(Cell::Live, 1, 3);
        grid.set(Cell::Live, 2, 4);

        let mut renderer = BrailleRenderer::new();

        // (0, 0) and (1, 3) share the first character: 0x1 + 0x80
        let expected = format!(
            "{}{}\n{}{}\n",
            char::from_u32(0x2881).unwrap(),
            char::from_u32(0x2800).unwrap(),
            char::from_u32(0x2800).unwrap(),
            char::from_u32(0x2801).unwrap(),
        );

        assert_eq!(renderer.render(&grid), expected);
    }
}
