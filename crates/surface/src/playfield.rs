//! Playfield: region state, category markers and frame encoding.
//!
//! The playfield owns the per-cell category markers that make grid
//! rendering incremental: a cell is repainted only when its desired
//! category differs from the marker, so redraw cost is proportional to
//! the number of changed cells, not the grid size. Text mode is the
//! opposite trade: every text frame fully rebuilds the overlay, since
//! menu screens are low-frequency.
//!
//! All operations encode crossterm commands into a caller-supplied
//! byte buffer; nothing here touches the terminal.

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use crate::layout::{Layout, Rect, CELL_H, CELL_W};
use crate::palette::{self, category_glyph, category_style, CellStyle};
use crate::settings::Settings;
use gridfall_types::BACKGROUND;

/// Which of the two mutually exclusive views the surface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Grid,
    Text,
}

/// One grid region: a fixed block of cells with their current markers.
///
/// The marker vector is sized `cols * rows` at construction and never
/// resized. `None` means the on-screen content is unknown (fresh
/// overlay teardown) and forces a repaint.
#[derive(Debug)]
pub struct GridRegion {
    rect: Rect,
    cols: u16,
    marks: Vec<Option<u8>>,
}

impl GridRegion {
    fn new(rect: Rect, cols: u16, rows: u16) -> Self {
        Self {
            rect,
            cols,
            marks: vec![Some(BACKGROUND); cols as usize * rows as usize],
        }
    }

    pub fn cell_count(&self) -> usize {
        self.marks.len()
    }

    /// Currently displayed category of a cell, `None` while invalidated.
    pub fn category(&self, idx: usize) -> Option<u8> {
        self.marks.get(idx).copied().flatten()
    }

    fn invalidate(&mut self) {
        self.marks.fill(None);
    }

    /// Paint every cell whose desired category differs from its
    /// marker. Missing entries in `cells` mean background. Returns the
    /// number of cells repainted.
    fn encode_cells_into(&mut self, cells: &[u8], out: &mut Vec<u8>) -> Result<usize> {
        let mut changed = 0usize;
        let mut current: Option<CellStyle> = None;

        for idx in 0..self.marks.len() {
            let want = cells.get(idx).copied().unwrap_or(BACKGROUND);
            if self.marks[idx] == Some(want) {
                continue;
            }

            let style = category_style(want);
            if current != Some(style) {
                apply_style_into(out, style)?;
                current = Some(style);
            }

            let col = (idx % self.cols as usize) as u16;
            let row = (idx / self.cols as usize) as u16;
            let x = self.rect.x + col * CELL_W;
            let y = self.rect.y + row * CELL_H;
            let glyph = category_glyph(want);
            for dy in 0..CELL_H {
                out.queue(cursor::MoveTo(x, y + dy))?;
                for _ in 0..CELL_W {
                    out.queue(Print(glyph))?;
                }
            }

            self.marks[idx] = Some(want);
            changed += 1;
        }

        Ok(changed)
    }
}

/// The surface entity: four regions, their markers, the display mode.
///
/// Built once at startup; regions are fixed for its lifetime.
#[derive(Debug)]
pub struct Playfield {
    layout: Layout,
    main: GridRegion,
    preview: GridRegion,
    mode: DisplayMode,
    overlay_items: usize,
    overlay_selected: Option<usize>,
}

impl Playfield {
    pub fn new(settings: &Settings) -> Self {
        let layout = Layout::new(settings);
        let main = GridRegion::new(layout.main, settings.cols, settings.rows);
        let preview = GridRegion::new(
            layout.preview,
            gridfall_types::PREVIEW_COLS,
            gridfall_types::PREVIEW_ROWS,
        );
        Self {
            layout,
            main,
            preview,
            mode: DisplayMode::Grid,
            overlay_items: 0,
            overlay_selected: None,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn main(&self) -> &GridRegion {
        &self.main
    }

    pub fn preview(&self) -> &GridRegion {
        &self.preview
    }

    /// Number of items the overlay currently shows (0 when hidden).
    pub fn overlay_items(&self) -> usize {
        self.overlay_items
    }

    /// Index of the marked overlay item, if any is marked.
    pub fn overlay_selected(&self) -> Option<usize> {
        self.overlay_selected
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Encode the static chrome: border boxes and field backgrounds.
    ///
    /// Drawn once after entering the terminal, never per frame.
    pub fn encode_chrome_into(&self, out: &mut Vec<u8>) -> Result<()> {
        encode_border_into(self.layout.main_frame, out)?;
        encode_border_into(self.layout.preview_frame, out)?;
        encode_fill_into(self.layout.main, category_style(BACKGROUND), out)?;
        encode_fill_into(self.layout.preview, category_style(BACKGROUND), out)?;
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    /// Grid-render operation.
    ///
    /// Leaves text mode if active (clears the overlay, invalidates the
    /// cells beneath it), diffs both grid regions against their
    /// markers, and rewrites the score readout. Returns the number of
    /// cells repainted.
    pub fn encode_grid_into(
        &mut self,
        main_cells: &[u8],
        preview_cells: &[u8],
        score: u32,
        out: &mut Vec<u8>,
    ) -> Result<usize> {
        if self.mode == DisplayMode::Text {
            encode_fill_into(self.layout.overlay, category_style(BACKGROUND), out)?;
            self.main.invalidate();
            self.mode = DisplayMode::Grid;
            self.overlay_items = 0;
            self.overlay_selected = None;
        }

        let mut changed = self.main.encode_cells_into(main_cells, out)?;
        changed += self.preview.encode_cells_into(preview_cells, out)?;
        self.encode_score_into(score, out)?;

        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(changed)
    }

    /// Text-render operation.
    ///
    /// Always a full rebuild: blank the overlay area, then lay out one
    /// centered item per line, two rows apart. A selected index marks
    /// that item; out-of-range indices mark nothing.
    pub fn encode_text_into(
        &mut self,
        lines: &[&str],
        selected: Option<usize>,
        out: &mut Vec<u8>,
    ) -> Result<()> {
        let overlay = self.layout.overlay;
        encode_fill_into(overlay, category_style(BACKGROUND), out)?;
        self.mode = DisplayMode::Text;
        self.overlay_items = lines.len();
        self.overlay_selected = selected.filter(|idx| *idx < lines.len());

        for (idx, line) in lines.iter().enumerate() {
            let y = overlay.y + idx as u16 * 2;
            if y >= overlay.bottom() {
                break;
            }

            let marked = self.overlay_selected == Some(idx);
            let text = if marked {
                format!("-> {} <-", line)
            } else {
                (*line).to_string()
            };
            let text: String = text.chars().take(overlay.w as usize).collect();
            let width = text.chars().count() as u16;
            let x = overlay.x + overlay.w.saturating_sub(width) / 2;

            let style = if marked {
                palette::MENU_SELECTED
            } else {
                palette::MENU_TEXT
            };
            apply_style_into(out, style)?;
            out.queue(cursor::MoveTo(x, y))?;
            out.queue(Print(text))?;
        }

        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    /// Score is plain text content: rewritten every grid frame,
    /// left-aligned and padded so shorter values overwrite longer ones.
    fn encode_score_into(&self, score: u32, out: &mut Vec<u8>) -> Result<()> {
        let rect = self.layout.score;
        apply_style_into(out, palette::SCORE_TEXT)?;
        out.queue(cursor::MoveTo(rect.x, rect.y))?;
        out.queue(Print(format!("{:<width$}", score, width = rect.w as usize)))?;
        Ok(())
    }
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: palette::Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn encode_fill_into(rect: Rect, style: CellStyle, out: &mut Vec<u8>) -> Result<()> {
    apply_style_into(out, style)?;
    for y in rect.y..rect.bottom() {
        out.queue(cursor::MoveTo(rect.x, y))?;
        for _ in 0..rect.w {
            out.queue(Print(' '))?;
        }
    }
    Ok(())
}

fn encode_border_into(rect: Rect, out: &mut Vec<u8>) -> Result<()> {
    if rect.w < 2 || rect.h < 2 {
        return Ok(());
    }
    apply_style_into(out, palette::BORDER)?;

    out.queue(cursor::MoveTo(rect.x, rect.y))?;
    out.queue(Print('┌'))?;
    for _ in 1..rect.w - 1 {
        out.queue(Print('─'))?;
    }
    out.queue(Print('┐'))?;

    for dy in 1..rect.h - 1 {
        out.queue(cursor::MoveTo(rect.x, rect.y + dy))?;
        out.queue(Print('│'))?;
        out.queue(cursor::MoveTo(rect.x + rect.w - 1, rect.y + dy))?;
        out.queue(Print('│'))?;
    }

    out.queue(cursor::MoveTo(rect.x, rect.y + rect.h - 1))?;
    out.queue(Print('└'))?;
    for _ in 1..rect.w - 1 {
        out.queue(Print('─'))?;
    }
    out.queue(Print('┘'))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::new(&Settings::default())
    }

    #[test]
    fn test_regions_sized_from_settings() {
        let field = field();
        assert_eq!(field.main().cell_count(), 200);
        assert_eq!(field.preview().cell_count(), 16);
    }

    #[test]
    fn test_fresh_field_displays_background() {
        let field = field();
        for idx in 0..field.main().cell_count() {
            assert_eq!(field.main().category(idx), Some(BACKGROUND));
        }
    }

    #[test]
    fn test_second_identical_grid_paints_nothing() {
        let mut field = field();
        let cells = vec![1u8; 8];
        let mut out = Vec::new();

        let first = field.encode_grid_into(&cells, &[], 0, &mut out).unwrap();
        assert_eq!(first, 8);

        out.clear();
        let second = field.encode_grid_into(&cells, &[], 0, &mut out).unwrap();
        assert_eq!(second, 0);
    }

    #[test]
    fn test_short_cell_sequence_defaults_to_background() {
        let mut field = field();
        let mut out = Vec::new();
        field
            .encode_grid_into(&[3, 3, 3], &[], 0, &mut out)
            .unwrap();

        assert_eq!(field.main().category(0), Some(3));
        assert_eq!(field.main().category(2), Some(3));
        for idx in 3..field.main().cell_count() {
            assert_eq!(field.main().category(idx), Some(BACKGROUND));
        }
    }

    #[test]
    fn test_clearing_repaints_only_previously_set_cells() {
        let mut field = field();
        let mut out = Vec::new();
        field
            .encode_grid_into(&[5, 0, 5, 0, 5], &[], 0, &mut out)
            .unwrap();

        out.clear();
        let changed = field.encode_grid_into(&[], &[], 0, &mut out).unwrap();
        assert_eq!(changed, 3);
        for idx in 0..field.main().cell_count() {
            assert_eq!(field.main().category(idx), Some(BACKGROUND));
        }
    }

    #[test]
    fn test_text_mode_leaves_grid_markers_alone() {
        let mut field = field();
        let mut out = Vec::new();
        field
            .encode_grid_into(&[7, 7], &[2], 99, &mut out)
            .unwrap();

        out.clear();
        field
            .encode_text_into(&["paused", "resume"], Some(1), &mut out)
            .unwrap();

        assert_eq!(field.mode(), DisplayMode::Text);
        assert_eq!(field.main().category(0), Some(7));
        assert_eq!(field.main().category(1), Some(7));
        assert_eq!(field.preview().category(0), Some(2));
    }

    #[test]
    fn test_leaving_text_mode_hides_overlay_and_repaints_grid() {
        let mut field = field();
        let mut out = Vec::new();
        field.encode_text_into(&["menu"], Some(0), &mut out).unwrap();
        assert_eq!(field.overlay_items(), 1);

        out.clear();
        let changed = field.encode_grid_into(&[], &[], 0, &mut out).unwrap();

        assert_eq!(field.mode(), DisplayMode::Grid);
        assert_eq!(field.overlay_items(), 0);
        assert_eq!(field.overlay_selected(), None);
        // Every main cell repaints after the overlay comes down; the
        // preview was never covered and stays untouched.
        assert_eq!(changed, field.main().cell_count());
    }

    #[test]
    fn test_text_rebuild_replaces_items() {
        let mut field = field();
        let mut out = Vec::new();
        field
            .encode_text_into(&["one", "two", "three"], Some(2), &mut out)
            .unwrap();
        field.encode_text_into(&["one"], None, &mut out).unwrap();

        assert_eq!(field.overlay_items(), 1);
        assert_eq!(field.overlay_selected(), None);
    }

    #[test]
    fn test_out_of_range_selection_marks_nothing() {
        let mut field = field();
        let mut out = Vec::new();
        field
            .encode_text_into(&["A", "B"], Some(5), &mut out)
            .unwrap();

        assert_eq!(field.overlay_items(), 2);
        assert_eq!(field.overlay_selected(), None);
    }

    #[test]
    fn test_chrome_encodes_borders() {
        let field = field();
        let mut out = Vec::new();
        field.encode_chrome_into(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('┌'));
        assert!(text.contains('┘'));
    }
}
