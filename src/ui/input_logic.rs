/// Move selection cursor one item up, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        0
    } else if selected == 0 || selected >= item_count {
        item_count - 1
    } else {
        selected - 1
    }
}

/// Move selection cursor one item down, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        assert_eq!(select_prev(0, 3), 2);
        assert_eq!(select_prev(2, 3), 1);
        assert_eq!(select_next(1, 3), 2);
        assert_eq!(select_next(2, 3), 0);
    }

    #[test]
    fn empty_list_pins_cursor_at_zero() {
        assert_eq!(select_prev(0, 0), 0);
        assert_eq!(select_next(0, 0), 0);
    }

    #[test]
    fn single_item_stays_put() {
        assert_eq!(select_prev(0, 1), 0);
        assert_eq!(select_next(0, 1), 0);
    }

    #[test]
    fn stale_cursor_is_pulled_back_in_range() {
        assert_eq!(select_prev(9, 3), 2);
        assert_eq!(select_next(9, 3), 0);
    }
}
