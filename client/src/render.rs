//! Text renderer for the menu, the field and the leaderboard

use std::io::{self, Write};

use game_core::{Rect, Snapshot};
use leaderboard::LeaderboardEntry;

/// What the current screen shows
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Menu,
    Match {
        snapshot: Snapshot,
        field_width: f32,
        field_height: f32,
    },
    Leaderboard(Vec<LeaderboardEntry>),
    Exited,
}

/// Rendering surface
pub trait Renderer {
    fn draw(&mut self, view: &View) -> io::Result<()>;
}

/// Draws frames as plain text, the field scaled down to a character grid
pub struct TextRenderer<W: Write> {
    out: W,
    cols: usize,
    rows: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_size(out, 80, 24)
    }

    pub fn with_size(out: W, cols: usize, rows: usize) -> Self {
        Self {
            out,
            cols: cols.max(4),
            rows: rows.max(4),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn centered(&mut self, text: &str) -> io::Result<()> {
        let pad = self.cols.saturating_sub(text.chars().count()) / 2;
        writeln!(self.out, "{:pad$}{text}", "")
    }

    fn draw_menu(&mut self) -> io::Result<()> {
        self.centered("PONG")?;
        writeln!(self.out)?;
        self.centered("1. Play vs AI")?;
        self.centered("2. Play vs Player")?;
        self.centered("3. Leaderboard")?;
        self.centered("4. Quit")
    }

    fn draw_leaderboard(&mut self, entries: &[LeaderboardEntry]) -> io::Result<()> {
        self.centered("LEADERBOARD")?;
        writeln!(self.out)?;
        for (i, entry) in entries.iter().enumerate() {
            self.centered(&format!("{}. {}: {}", i + 1, entry.name, entry.score))?;
        }
        writeln!(self.out)?;
        self.centered("Press ESC to return to menu")
    }

    fn draw_match(&mut self, snapshot: &Snapshot, width: f32, height: f32) -> io::Result<()> {
        let mut grid = vec![vec![' '; self.cols]; self.rows];
        let sx = self.cols as f32 / width;
        let sy = self.rows as f32 / height;

        // Centre line
        let mid = self.cols / 2;
        for row in grid.iter_mut().step_by(2) {
            row[mid] = ':';
        }
        fill(&mut grid, &snapshot.paddle_left, sx, sy, '#');
        fill(&mut grid, &snapshot.paddle_right, sx, sy, '#');
        fill(&mut grid, &snapshot.ball, sx, sy, 'O');

        let score = format!("{}   {}", snapshot.score_left, snapshot.score_right);
        self.centered(&score)?;
        let border = "-".repeat(self.cols + 2);
        writeln!(self.out, "{border}")?;
        for row in grid {
            let line: String = row.into_iter().collect();
            writeln!(self.out, "|{line}|")?;
        }
        writeln!(self.out, "{border}")
    }
}

/// Mark every cell the rectangle touches; off-field parts are skipped
fn fill(grid: &mut [Vec<char>], rect: &Rect, sx: f32, sy: f32, glyph: char) {
    let rows = grid.len() as i64;
    let cols = grid.first().map_or(0, |row| row.len()) as i64;

    let col_start = (rect.left() * sx).floor() as i64;
    let col_end = ((rect.right() * sx).ceil() as i64).max(col_start + 1);
    let row_start = (rect.top() * sy).floor() as i64;
    let row_end = ((rect.bottom() * sy).ceil() as i64).max(row_start + 1);

    for row in row_start.max(0)..row_end.min(rows) {
        for col in col_start.max(0)..col_end.min(cols) {
            grid[row as usize][col as usize] = glyph;
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw(&mut self, view: &View) -> io::Result<()> {
        match view {
            View::Menu => self.draw_menu()?,
            View::Leaderboard(entries) => self.draw_leaderboard(entries)?,
            View::Match {
                snapshot,
                field_width,
                field_height,
            } => self.draw_match(snapshot, *field_width, *field_height)?,
            View::Exited => return Ok(()),
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn render(view: &View) -> String {
        let mut renderer = TextRenderer::with_size(Vec::new(), 40, 12);
        renderer.draw(view).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_menu_lists_options() {
        let text = render(&View::Menu);
        assert!(text.contains("1. Play vs AI"));
        assert!(text.contains("2. Play vs Player"));
        assert!(text.contains("3. Leaderboard"));
        assert!(text.contains("4. Quit"));
    }

    #[test]
    fn test_leaderboard_lines_are_ranked() {
        let text = render(&View::Leaderboard(vec![
            LeaderboardEntry::new("Bob", 10),
            LeaderboardEntry::new("Alice", 5),
        ]));
        let bob = text.find("1. Bob: 10").unwrap();
        let alice = text.find("2. Alice: 5").unwrap();
        assert!(bob < alice);
        assert!(text.contains("Press ESC"));
    }

    #[test]
    fn test_match_frame_shows_entities_and_score() {
        let snapshot = Snapshot {
            tick: 10,
            ball: Rect::new(392.5, 292.5, 15.0, 15.0),
            ball_vel: Vec2::new(7.0, 0.0),
            paddle_left: Rect::new(50.0, 255.0, 15.0, 90.0),
            paddle_right: Rect::new(735.0, 255.0, 15.0, 90.0),
            score_left: 3,
            score_right: 7,
        };
        let text = render(&View::Match {
            snapshot,
            field_width: 800.0,
            field_height: 600.0,
        });

        assert!(text.contains("3   7"));
        assert!(text.contains('O'));
        assert_eq!(text.matches('#').count() % 2, 0, "Paddles render symmetrically");
        // Score line, two borders, twelve rows, trailing blank line
        assert_eq!(text.lines().count(), 1 + 2 + 12 + 1);
    }

    #[test]
    fn test_exited_draws_nothing() {
        assert!(render(&View::Exited).is_empty());
    }

    #[test]
    fn test_fill_clips_off_field_rect() {
        let mut grid = vec![vec![' '; 10]; 5];
        fill(&mut grid, &Rect::new(-20.0, -20.0, 15.0, 15.0), 0.1, 0.1, 'O');
        assert!(grid.iter().flatten().all(|&c| c == ' '));
    }
}
