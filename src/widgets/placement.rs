use ratatui::layout::Rect;

/// A `width` x `height` rectangle centred in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    let horizontal_margin = horizontal_margin.min(area.width / 2);
    let vertical_margin = vertical_margin.min(area.height / 2);

    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width - horizontal_margin * 2,
        height: area.height - vertical_margin * 2,
    }
}
