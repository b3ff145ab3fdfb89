use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Terminal,
};
use snape_core::{Result, WindowSize};
use std::{thread, time::Duration};

/// Nominal terminal cell size used to turn pixel dimensions into cells.
const CELL_WIDTH_PX: u16 = 8;
const CELL_HEIGHT_PX: u16 = 16;

// Helper function to show messages in a popup
pub fn show_message<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    message: &str,
    color: Color,
    duration_ms: u64,
) -> Result<()> {
    terminal.draw(|f| {
        let area = centered_rect(80, 30, f.size());

        // Clear the area behind the popup
        f.render_widget(Clear, area);

        let message_box = Paragraph::new(message.to_string())
            .style(Style::default().fg(color))
            .block(Block::default().borders(Borders::ALL).title(" snape "))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(message_box, area);
    })?;

    // Sleep but still be interruptible by key press
    for _ in 0..duration_ms / 100 {
        thread::sleep(Duration::from_millis(100));
        if crossterm::event::poll(Duration::from_millis(0))? {
            let _ = crossterm::event::read()?;
            break;
        }
    }

    Ok(())
}

// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Area of the picker frame: the requested size in cells, centered and
/// clamped to the screen.
pub fn picker_area(size: WindowSize, screen: Rect) -> Rect {
    let width = (size.width / CELL_WIDTH_PX).min(screen.width);
    let height = (size.height / CELL_HEIGHT_PX).min(screen.height);

    Rect {
        x: screen.x + (screen.width - width) / 2,
        y: screen.y + (screen.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_fits_a_normal_terminal() {
        let area = picker_area(WindowSize::default(), Rect::new(0, 0, 80, 24));
        assert_eq!(area.width, 35);
        // 25 rows requested, clamped to the screen
        assert_eq!(area.height, 24);
        assert_eq!(area.x, 22);
        assert_eq!(area.y, 0);
    }

    #[test]
    fn small_size_is_centered() {
        let size = WindowSize::new(200, 200).unwrap();
        let area = picker_area(size, Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(37, 14, 25, 12));
    }

    #[test]
    fn centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 20, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 60);
    }
}
