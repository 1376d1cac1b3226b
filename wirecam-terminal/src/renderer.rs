/// ASCII line rasterizer for terminal wireframe output
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wirecam_core::ScreenSegment;

/// Converts screen segments into characters in a terminal-sized buffer.
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.char_buffer {
            *cell = ' ';
        }
    }

    pub fn draw_segments(&mut self, segments: &[ScreenSegment]) {
        for segment in segments {
            self.draw_segment(segment);
        }
    }

    /// Rasterize one segment with Bresenham's line algorithm, plotting
    /// only cells inside the buffer.
    fn draw_segment(&mut self, segment: &ScreenSegment) {
        let (mut x0, mut y0) = (segment.x1.round() as i64, segment.y1.round() as i64);
        let (x1, y1) = (segment.x2.round() as i64, segment.y2.round() as i64);

        // Coarse clip: a segment passing near the focal plane can span
        // millions of cells, and walking it would stall the frame.
        if !self.near_screen(x0, y0) || !self.near_screen(x1, y1) {
            return;
        }

        let glyph = slope_glyph(x1 - x0, y1 - y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, glyph);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn near_screen(&self, x: i64, y: i64) -> bool {
        let (w, h) = (self.width as i64, self.height as i64);
        x > -w && x < 2 * w && y > -h && y < 2 * h
    }

    fn plot(&mut self, x: i64, y: i64, glyph: char) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.char_buffer[y as usize * self.width + x as usize] = glyph;
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::Cyan))?;
        for y in 0..self.height {
            for x in 0..self.width {
                writer.queue(Print(self.char_buffer[y * self.width + x]))?;
            }
            // Raw mode disables newline translation; return the column too.
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    #[cfg(test)]
    fn cell(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }
}

/// Pick a glyph matching the segment's dominant direction.
fn slope_glyph(dx: i64, dy: i64) -> char {
    if dy == 0 {
        '-'
    } else if dx == 0 {
        '|'
    } else if dx.abs() > 2 * dy.abs() {
        '-'
    } else if dy.abs() > 2 * dx.abs() {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> ScreenSegment {
        ScreenSegment { x1, y1, x2, y2 }
    }

    #[test]
    fn test_horizontal_line_fills_row() {
        let mut renderer = AsciiRenderer::new(10, 5);
        renderer.draw_segments(&[segment(1.0, 2.0, 8.0, 2.0)]);
        for x in 1..=8 {
            assert_eq!(renderer.cell(x, 2), '-');
        }
        assert_eq!(renderer.cell(0, 2), ' ');
        assert_eq!(renderer.cell(9, 2), ' ');
    }

    #[test]
    fn test_vertical_line_fills_column() {
        let mut renderer = AsciiRenderer::new(10, 5);
        renderer.draw_segments(&[segment(4.0, 0.0, 4.0, 4.0)]);
        for y in 0..5 {
            assert_eq!(renderer.cell(4, y), '|');
        }
    }

    #[test]
    fn test_diagonal_uses_slash() {
        let mut renderer = AsciiRenderer::new(10, 10);
        renderer.draw_segments(&[segment(0.0, 9.0, 9.0, 0.0)]);
        assert_eq!(renderer.cell(0, 9), '/');
        assert_eq!(renderer.cell(9, 0), '/');
    }

    #[test]
    fn test_plot_clips_to_buffer() {
        let mut renderer = AsciiRenderer::new(10, 5);
        // Endpoints inside the near-screen margin but partly off-buffer.
        renderer.draw_segments(&[segment(-3.0, 2.0, 5.0, 2.0)]);
        assert_eq!(renderer.cell(0, 2), '-');
        assert_eq!(renderer.cell(5, 2), '-');
    }

    #[test]
    fn test_far_offscreen_segment_ignored() {
        let mut renderer = AsciiRenderer::new(10, 5);
        renderer.draw_segments(&[segment(1e9, 1e9, -1e9, -1e9)]);
        for y in 0..5 {
            for x in 0..10 {
                assert_eq!(renderer.cell(x, y), ' ');
            }
        }
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut renderer = AsciiRenderer::new(4, 4);
        renderer.draw_segments(&[segment(0.0, 0.0, 3.0, 0.0)]);
        renderer.clear();
        assert_eq!(renderer.cell(0, 0), ' ');
    }
}
