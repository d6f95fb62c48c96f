use penstock::ui::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_main_layout_reserves_status_line() {
    let area = Rect::new(0, 0, 120, 40);
    let chunks = LayoutManager::main_layout(area);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].height, 39);
    assert_eq!(chunks[1].height, 1);
    assert_eq!(chunks[1].y, 39);
    assert_eq!(chunks[1].width, 120);
}

#[test]
fn test_top_pane_layout_uses_sidebar_width() {
    let area = Rect::new(0, 0, 120, 39);
    let chunks = LayoutManager::top_pane_layout(area, 28);

    assert_eq!(chunks[0].width, 28);
    assert_eq!(chunks[1].width, 92);
}

#[test]
fn test_top_pane_layout_caps_sidebar_on_narrow_terminals() {
    let area = Rect::new(0, 0, 40, 39);
    let chunks = LayoutManager::top_pane_layout(area, 28);

    // The sidebar never takes more than half the width
    assert_eq!(chunks[0].width, 20);
    assert_eq!(chunks[1].width, 20);
}

#[test]
fn test_centered_rect_is_inside_area() {
    let area = Rect::new(0, 0, 100, 50);
    let rect = LayoutManager::centered_rect(60, 20, area);

    assert!(rect.x >= area.x);
    assert!(rect.y >= area.y);
    assert!(rect.right() <= area.right());
    assert!(rect.bottom() <= area.bottom());
    assert_eq!(rect.width, 60);
    assert_eq!(rect.height, 10);
}

#[test]
fn test_centered_rect_lines_fixed_height() {
    let area = Rect::new(0, 0, 100, 50);
    let rect = LayoutManager::centered_rect_lines(60, 12, area);

    assert_eq!(rect.height, 12);
    assert!(rect.y > 0);
    assert!(rect.bottom() <= area.bottom());
}

#[test]
fn test_help_panel_dimensions_adapt() {
    assert_eq!(LayoutManager::help_panel_dimensions(70, 30), (70, 60));
    assert_eq!(LayoutManager::help_panel_dimensions(120, 50), (80, 70));
}
