/// Tolerance for floating point drift in accumulated Y positions.
pub const EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized check of whether a block fits below the cursor.
///
/// * `cursor_y`: current Y position, in page coordinates.
/// * `block_height`: height the block needs.
/// * `limit`: lowest Y the block may reach (bottom margin minus any reserve).
pub fn check_block_fit(cursor_y: f32, block_height: f32, limit: f32) -> BreakAnalysis {
    let available = (limit - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: block_height > available + EPSILON,
        remaining_height: available,
    }
}

/// How many blocks of `block_height` fit between `start` and `limit`.
#[cfg(test)]
pub(crate) fn blocks_per_column(start: f32, block_height: f32, limit: f32) -> usize {
    if block_height <= 0.0 {
        return usize::MAX;
    }
    let mut count = 0;
    let mut y = start;
    while !check_block_fit(y, block_height, limit).should_break {
        count += 1;
        y += block_height;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_does_not_break() {
        let a = check_block_fit(10.0, 20.0, 30.0);
        assert!(!a.should_break);
        assert_eq!(a.remaining_height, 20.0);
    }

    #[test]
    fn test_overflow_breaks() {
        assert!(check_block_fit(10.0, 20.1, 30.0).should_break);
    }

    #[test]
    fn test_cursor_past_limit() {
        let a = check_block_fit(40.0, 1.0, 30.0);
        assert!(a.should_break);
        assert_eq!(a.remaining_height, 0.0);
    }

    #[test]
    fn test_blocks_per_column() {
        assert_eq!(blocks_per_column(0.0, 10.0, 35.0), 3);
        assert_eq!(blocks_per_column(0.0, 10.0, 30.0), 3);
        assert_eq!(blocks_per_column(0.0, 40.0, 30.0), 0);
    }
}
