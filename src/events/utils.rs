/// Return the number of Unicode scalar values (characters) in the input.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Convert a character index to a byte index for slicing.
/// If `ci` equals the number of characters, returns `s.len()`.
pub fn byte_index_for_char(s: &str, ci: usize) -> usize {
    s.char_indices().nth(ci).map_or(s.len(), |(i, _)| i)
}

/// Whether a terminal cell `(x, y)` lies inside `rect`.
pub const fn point_in_rect(x: u16, y: u16, rect: Option<crate::state::HitRect>) -> bool {
    match rect {
        Some((rx, ry, rw, rh)) => {
            x >= rx && x < rx.saturating_add(rw) && y >= ry && y < ry.saturating_add(rh)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Character and byte indices agree for multi-byte text.
    fn byte_index_for_char_handles_multibyte() {
        let s = "aé b";
        assert_eq!(char_count(s), 4);
        assert_eq!(byte_index_for_char(s, 0), 0);
        assert_eq!(byte_index_for_char(s, 2), 3);
        assert_eq!(byte_index_for_char(s, 4), s.len());
        assert_eq!(byte_index_for_char(s, 9), s.len());
    }

    #[test]
    /// What: Hit-testing includes the top-left cell and excludes the far edges.
    fn point_in_rect_bounds() {
        let r = Some((2, 3, 4, 2));
        assert!(point_in_rect(2, 3, r));
        assert!(point_in_rect(5, 4, r));
        assert!(!point_in_rect(6, 3, r));
        assert!(!point_in_rect(2, 5, r));
        assert!(!point_in_rect(0, 0, None));
    }
}
