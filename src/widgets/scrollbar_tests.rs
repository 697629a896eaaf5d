use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use super::{fraction_for_row, render_vertical_scrollbar};

fn render_column(total: usize, viewport: usize, offset: usize, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, 1, height);
    let mut buf = Buffer::empty(area);
    render_vertical_scrollbar(&mut buf, area, total, viewport, offset, Style::default());
    (0..height)
        .map(|y| buf[(0, y)].symbol().to_string())
        .collect()
}

fn thumb_rows(column: &[String]) -> Vec<usize> {
    column
        .iter()
        .enumerate()
        .filter(|(_, symbol)| symbol.as_str() == "█")
        .map(|(row, _)| row)
        .collect()
}

#[test]
fn test_scrollbar_not_rendered_when_content_fits() {
    let column = render_column(5, 10, 0, 10);
    assert!(column.iter().all(|symbol| symbol == " "));
}

#[test]
fn test_scrollbar_not_rendered_for_empty_viewport() {
    let column = render_column(50, 0, 0, 10);
    assert!(column.iter().all(|symbol| symbol == " "));
}

#[test]
fn test_scrollbar_rendered_when_content_exceeds_viewport() {
    let column = render_column(50, 10, 0, 10);
    assert!(!thumb_rows(&column).is_empty());
}

#[test]
fn test_thumb_starts_at_top() {
    let column = render_column(100, 10, 0, 10);
    assert_eq!(thumb_rows(&column).first(), Some(&0));
}

#[test]
fn test_thumb_reaches_bottom_at_max_scroll() {
    let column = render_column(100, 10, 90, 10);
    assert_eq!(thumb_rows(&column).last(), Some(&9));
}

#[test]
fn test_thumb_moves_with_offset() {
    let top = thumb_rows(&render_column(100, 10, 0, 10));
    let middle = thumb_rows(&render_column(100, 10, 45, 10));
    assert!(middle[0] > top[0]);
}

#[test]
fn test_fraction_for_row_ends() {
    let track = Rect::new(10, 5, 1, 11);
    assert_eq!(fraction_for_row(track, 5), 0.0);
    assert_eq!(fraction_for_row(track, 15), 1.0);
    assert_eq!(fraction_for_row(track, 10), 0.5);
}

#[test]
fn test_fraction_for_row_clamps_outside_track() {
    let track = Rect::new(0, 5, 1, 11);
    assert_eq!(fraction_for_row(track, 0), 0.0);
    assert_eq!(fraction_for_row(track, 40), 1.0);
}

#[test]
fn test_fraction_for_degenerate_track() {
    assert_eq!(fraction_for_row(Rect::new(0, 0, 1, 1), 0), 0.0);
    assert_eq!(fraction_for_row(Rect::new(0, 0, 1, 0), 3), 0.0);
}
