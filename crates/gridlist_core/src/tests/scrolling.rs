//! Tests for scrolling and hit testing
//!
//! These tests verify:
//! - Top row clamping and redraw notifications
//! - Cursor visibility adjustment
//! - Release momentum decay and stop threshold
//! - Hit testing as the inverse of item placement

use super::{Fixture, active_list, idle};
use crate::layout::ListGeometry;
use crate::list::{ListEvent, SelectableList};
use crate::scroll::ScrollArrows;

#[test]
fn test_set_top_row_clamps_to_max() {
    // 10 rows, 5 visible: max top row 5.
    let mut list = active_list(Fixture::column(10), 5);
    assert_eq!(list.layout().max_top_row(), 5);

    assert!(list.set_top_row(100));
    assert_eq!(list.top_row(), 5);
    assert!(!list.set_top_row(100));
    assert_eq!(list.top_row(), 5);
}

#[test]
fn test_redraw_only_on_change() {
    let mut list = active_list(Fixture::column(10), 5);
    list.set_top_row(2);
    list.set_top_row(2);
    let redraws = list
        .drain_events()
        .into_iter()
        .filter(|event| *event == ListEvent::Redraw)
        .count();
    assert_eq!(redraws, 1);
}

#[test]
fn test_short_list_never_scrolls() {
    let mut list = active_list(Fixture::column(3), 5);
    list.set_top_row(2);
    assert_eq!(list.top_row(), 0);
    list.select(2);
    assert_eq!(list.top_row(), 0);
}

#[test]
fn test_selection_scrolls_minimally() {
    let mut list = active_list(Fixture::column(50), 5);
    list.select(7);
    assert_eq!(list.top_row(), 3); // 7 is now the last visible row

    list.select(5);
    assert_eq!(list.top_row(), 3); // already visible

    list.select(1);
    assert_eq!(list.top_row(), 1);
}

#[test]
fn test_partially_scrolled_selection_snaps() {
    let mut list = active_list(Fixture::column(50), 5);
    list.select(0);
    list.scroll_by(4.0);
    assert_eq!(list.origin_y(), 4.0);

    list.reselect();
    assert_eq!(list.top_row(), 0);
    assert_eq!(list.origin_y(), 0.0);
}

#[test]
fn test_visible_selection_keeps_origin() {
    let mut list = active_list(Fixture::column(50), 5);
    list.select(2);
    list.scroll_by(4.0);

    list.reselect();
    assert_eq!(list.origin_y(), 4.0);
}

#[test]
fn test_momentum_moves_for_26_ticks() {
    let mut list = active_list(Fixture::column(200), 10);
    list.scroll.add_speed(30.0);

    let mut cues = Vec::new();
    let mut moving_ticks = 0;
    for _ in 0..40 {
        let before = (list.top_row(), list.origin_y());
        list.update(&idle(), &mut cues);
        if (list.top_row(), list.origin_y()) != before {
            moving_ticks += 1;
        }
    }

    assert_eq!(moving_ticks, 26);
    assert!(!list.has_momentum());
    assert!(list.top_row() > 20);
}

#[test]
fn test_momentum_stops_at_end() {
    let mut list = active_list(Fixture::column(20), 10);
    list.scroll.add_speed(50.0);

    let mut cues = Vec::new();
    for _ in 0..60 {
        list.update(&idle(), &mut cues);
    }
    assert_eq!(list.top_row(), 10);
    assert_eq!(list.origin_y(), 0.0);
    assert!(!list.has_momentum());
}

#[test]
fn test_momentum_coasts_while_inactive() {
    let mut list = active_list(Fixture::column(200), 10);
    list.deactivate();
    list.scroll.add_speed(30.0);

    let mut cues = Vec::new();
    list.update(&idle(), &mut cues);
    assert_eq!(list.origin_y(), 0.0);
    assert_eq!(list.top_row(), 3);
}

#[test]
fn test_reset_scroll() {
    let mut list = active_list(Fixture::column(50), 5);
    list.set_top_row(9);
    list.scroll_by(3.0);
    list.scroll.add_speed(10.0);

    list.reset_scroll();
    assert_eq!(list.top_row(), 0);
    assert_eq!(list.origin_y(), 0.0);
    assert!(!list.has_momentum());
}

#[test]
fn test_partial_bottom_row_is_drawn_and_hit() {
    let geometry = ListGeometry {
        width: 100.0,
        height: 59.0,
        spacing: 0.0,
        padding: 0.0,
    };
    let mut list = SelectableList::new(
        Fixture::column(50),
        geometry,
        crate::config::EngineConfig::default(),
    )
    .unwrap();
    assert_eq!(list.layout().page_rows(), 5);

    list.scroll_by(7.0);
    assert_eq!((list.top_row(), list.origin_y()), (0, 7.0));

    let mut canvas = Vec::new();
    list.draw(&mut canvas);
    let drawn: Vec<usize> = canvas.iter().map(|&(index, _)| index).collect();
    assert_eq!(drawn, vec![0, 1, 2, 3, 4, 5, 6]);

    // Item 6 spans 53..63; its center sits inside the 59-tall viewport.
    assert_eq!(list.item_rect(6).center(), (50.0, 58.0));
    assert_eq!(list.hit_test(50.0, 58.0), Some(6));
}

#[test]
fn test_arrows_track_position() {
    let mut list = active_list(Fixture::column(10), 5);
    let mut cues = Vec::new();

    list.update(&idle(), &mut cues);
    assert_eq!(list.arrows(), ScrollArrows { up: false, down: true });

    list.set_top_row(5);
    list.update(&idle(), &mut cues);
    assert_eq!(list.arrows(), ScrollArrows { up: true, down: false });
}

fn padded_grid() -> SelectableList<Fixture> {
    let geometry = ListGeometry {
        width: 96.0,
        height: 45.0,
        spacing: 4.0,
        padding: 6.0,
    };
    let mut list = SelectableList::new(
        Fixture::grid(40, 3),
        geometry,
        crate::config::EngineConfig::default(),
    )
    .unwrap();
    list.activate();
    list
}

#[test]
fn test_hit_test_inverts_item_rect() {
    let mut list = padded_grid();
    list.set_top_row(4);
    list.scroll_by(3.5);

    let content = list.layout().content_rect();
    let mut checked = 0;
    for index in 0..list.layout().item_count() {
        let rect = list.item_rect(index);
        let (cx, cy) = rect.center();
        let (x, y) = (cx + content.x, cy + content.y);
        if !content.contains(x, y) {
            continue;
        }
        assert_eq!(list.hit_test(x, y), Some(index), "center of item {index}");
        checked += 1;
    }
    assert!(checked >= 12);
}

#[test]
fn test_hit_test_misses_padding_and_gaps() {
    let list = padded_grid();
    assert_eq!(list.hit_test(2.0, 20.0), None);
    assert_eq!(list.hit_test(50.0, 53.0), None);
    // 6 + 30 lands in the spacing between the first two columns.
    assert_eq!(list.hit_test(37.0, 10.0), None);
    assert_eq!(list.hit_test(7.0, 7.0), Some(0));
}

#[test]
fn test_draw_uses_scrolled_rects() {
    let mut list = padded_grid();
    list.set_top_row(2);
    let mut canvas = Vec::new();
    list.draw(&mut canvas);

    assert_eq!(canvas.first().map(|(index, _)| *index), Some(6));
    assert_eq!(canvas[0].1.y, 0.0);
    assert_eq!(canvas.len(), 15); // 4 full rows + 1 partial, 3 columns
}
