//! Scroll offset computation for a list of variable-height items.

/// Header rows: title line plus a blank line.
pub const HEADER_LINES: u16 = 2;
/// Footer rows: spacer, search bar, status line, key hints.
pub const FOOTER_LINES: u16 = 4;
/// Slack kept free so the header never scrolls off on short terminals.
pub const LAYOUT_BUFFER: u16 = 2;
/// Cursor marker plus a space.
pub const LEFT_PADDING: u16 = 2;

/// Rows available to list items for a terminal `total` rows tall. Never below 1.
pub fn content_height(total: u16) -> usize {
    usize::from(total.saturating_sub(HEADER_LINES + FOOTER_LINES + LAYOUT_BUFFER)).max(1)
}

/// Columns available to list text for a terminal `total` columns wide. Never below 1.
pub fn content_width(total: u16) -> usize {
    usize::from(total.saturating_sub(LEFT_PADDING)).max(1)
}

/// Lines needed to show items `from..=cursor`, plus the "more above" line when
/// `from > 0`.
pub fn span_height(from: usize, cursor: usize, len: usize, height_of: impl Fn(usize) -> usize) -> usize {
    let items: usize = (from..=cursor).take_while(|&i| i < len).map(height_of).sum();
    if from > 0 { items + 1 } else { items }
}

/// Returns the scroll offset that keeps `cursor` fully visible.
///
/// Moving the cursor above the window snaps the offset to the cursor. Moving
/// below it advances the offset to the first value whose span through the
/// cursor fits, so as much context above the cursor as possible stays on
/// screen. When even the cursor item alone cannot fit, the offset lands on the
/// cursor so its first lines are shown.
pub fn recompute_scroll(
    cursor: usize,
    scroll: usize,
    content_height: usize,
    len: usize,
    height_of: impl Fn(usize) -> usize,
) -> usize {
    if cursor == 0 {
        return 0;
    }
    if len == 0 {
        return scroll.min(cursor);
    }
    if cursor < scroll {
        return cursor;
    }
    if span_height(scroll, cursor, len, &height_of) <= content_height {
        return scroll;
    }
    (scroll + 1..=cursor)
        .find(|&offset| span_height(offset, cursor, len, &height_of) <= content_height)
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_content_height_subtracts_chrome() {
        assert_eq!(content_height(24), 16);
        assert_eq!(content_height(18), 10);
    }

    #[test]
    fn test_content_height_never_below_one() {
        assert_eq!(content_height(0), 1);
        assert_eq!(content_height(8), 1);
    }

    #[test]
    fn test_content_width_never_below_one() {
        assert_eq!(content_width(80), 78);
        assert_eq!(content_width(1), 1);
    }

    #[test]
    fn test_cursor_zero_forces_top() {
        assert_eq!(recompute_scroll(0, 7, 10, 30, |_| 1), 0);
    }

    #[test]
    fn test_cursor_above_window_scrolls_up() {
        assert_eq!(recompute_scroll(3, 8, 10, 30, |_| 1), 3);
    }

    #[test]
    fn test_fitting_window_is_unchanged() {
        assert_eq!(recompute_scroll(12, 5, 10, 30, |_| 1), 5);
    }

    #[test]
    fn test_scroll_down_accounts_for_more_above_line() {
        // Items 0..=10 need 11 lines; from offset 2 they need 1 + 9.
        assert_eq!(recompute_scroll(10, 0, 10, 30, |_| 1), 2);
    }

    #[test]
    fn test_single_step_scenario_tracks_cursor() {
        let content = 10;
        let mut scroll = 0;
        for cursor in 0..30 {
            scroll = recompute_scroll(cursor, scroll, content, 30, |_| 1);
            if cursor < content {
                assert_eq!(scroll, 0, "cursor {cursor}");
            } else {
                // One line goes to the "more above" indicator.
                let visible = content - 1;
                assert_eq!(scroll + visible - 1, cursor, "cursor {cursor}");
            }
        }
    }

    #[test]
    fn test_tall_item_gets_its_own_window() {
        let heights = |i: usize| if i == 5 { 10 } else { 1 };
        let mut scroll = 0;
        for cursor in 0..=5 {
            scroll = recompute_scroll(cursor, scroll, 10, 30, heights);
        }
        assert_eq!(scroll, 5);
    }

    #[test]
    fn test_tall_item_with_room_keeps_context() {
        let heights = |i: usize| if i == 5 { 8 } else { 1 };
        let scroll = recompute_scroll(5, 0, 10, 30, heights);
        // From offset 4: 1 indicator + 1 + 8 = 10.
        assert_eq!(scroll, 4);
    }

    #[test]
    fn test_empty_list_never_exceeds_cursor() {
        assert_eq!(recompute_scroll(0, 3, 10, 0, |_| 1), 0);
    }

    proptest! {
        #[test]
        fn prop_offset_fits_and_is_first_fit(
            heights in prop::collection::vec(1usize..12, 1..40),
            content in 1usize..30,
            cursor_seed in any::<usize>(),
            scroll_seed in any::<usize>(),
        ) {
            let len = heights.len();
            let cursor = cursor_seed % len;
            let before = scroll_seed % (cursor + 1);
            let height_of = |i: usize| heights[i];
            let after = recompute_scroll(cursor, before, content, len, height_of);

            prop_assert!(after <= cursor);
            if cursor == 0 {
                prop_assert_eq!(after, 0);
            } else if span_height(cursor, cursor, len, height_of) <= content {
                prop_assert!(span_height(after, cursor, len, height_of) <= content);
                if after > before {
                    for offset in before..after {
                        prop_assert!(span_height(offset, cursor, len, height_of) > content);
                    }
                }
            } else {
                prop_assert_eq!(after, cursor);
            }
        }

        #[test]
        fn prop_moving_up_never_scrolls_down(
            heights in prop::collection::vec(1usize..6, 2..40),
            content in 1usize..20,
            cursor_seed in any::<usize>(),
            scroll_seed in any::<usize>(),
        ) {
            let len = heights.len();
            let cursor = cursor_seed % len;
            let height_of = |i: usize| heights[i];
            let before = recompute_scroll(cursor, scroll_seed % (cursor + 1), content, len, height_of);
            let up = cursor.saturating_sub(1);
            let after = recompute_scroll(up, before, content, len, height_of);
            prop_assert!(after <= before);
        }
    }
}
