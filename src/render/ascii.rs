//! Text-mode backend for headless runs and logs

use glam::Vec2;

use super::scene::{BACKGROUND, DrawCmd, MIDLINE};
use crate::sim::Rect;

/// Rasterize draw commands into a `cols` x `rows` character grid
///
/// Later commands overwrite earlier ones, same as painting. Rectangles fill
/// every cell they overlap so thin shapes stay visible; circles fill cells
/// whose centers they cover.
pub fn rasterize(cmds: &[DrawCmd], arena: Vec2, cols: usize, rows: usize) -> String {
    if cols == 0 || rows == 0 {
        return String::new();
    }
    let mut grid = vec![vec![' '; cols]; rows];
    let cell = Vec2::new(arena.x / cols as f32, arena.y / rows as f32);
    let cell_center = |col: usize, row: usize| {
        Vec2::new((col as f32 + 0.5) * cell.x, (row as f32 + 0.5) * cell.y)
    };

    for cmd in cmds {
        match cmd {
            DrawCmd::Rect { pos, size, color } => {
                let glyph = if *color == BACKGROUND {
                    ' '
                } else if *color == MIDLINE {
                    ':'
                } else {
                    '#'
                };
                let shape = Rect {
                    pos: *pos,
                    size: *size,
                };
                for (row, line) in grid.iter_mut().enumerate() {
                    for (col, ch) in line.iter_mut().enumerate() {
                        let cell_rect = Rect {
                            pos: Vec2::new(col as f32 * cell.x, row as f32 * cell.y),
                            size: cell,
                        };
                        if cell_rect.overlaps(&shape) {
                            *ch = glyph;
                        }
                    }
                }
            }
            DrawCmd::Circle { center, radius, .. } => {
                // Small balls can fall between cell centers; always mark the cell under the center
                let (col, row) = cell_of(*center, cell, cols, rows);
                grid[row][col] = 'O';
                for (row, line) in grid.iter_mut().enumerate() {
                    for (col, ch) in line.iter_mut().enumerate() {
                        if cell_center(col, row).distance(*center) <= *radius {
                            *ch = 'O';
                        }
                    }
                }
            }
            DrawCmd::Text { text, pos, .. } => {
                let (col, row) = cell_of(*pos, cell, cols, rows);
                for (i, ch) in text.chars().enumerate() {
                    if let Some(slot) = grid[row].get_mut(col + i) {
                        *slot = ch;
                    }
                }
            }
        }
    }

    let mut out = String::with_capacity((cols + 1) * rows);
    for line in grid {
        out.extend(line);
        out.push('\n');
    }
    out
}

fn cell_of(p: Vec2, cell: Vec2, cols: usize, rows: usize) -> (usize, usize) {
    let col = (p.x / cell.x).floor().max(0.0) as usize;
    let row = (p.y / cell.y).floor().max(0.0) as usize;
    (col.min(cols - 1), row.min(rows - 1))
}
