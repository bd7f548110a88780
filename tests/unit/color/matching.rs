//! Tests for nearest-color search including tie-breaking and empty indexes

#[cfg(test)]
mod tests {
    use colormosaic::color::average::Color;
    use colormosaic::color::matching::{
        DISTANCE_SENTINEL, MatchTarget, nearest_match, nearest_position, squared_distance,
    };
    use colormosaic::colormap::index::{ColorIndex, ColorSample};
    use std::path::Path;

    fn index(colors: &[(u8, u8, u8)]) -> ColorIndex {
        colors
            .iter()
            .enumerate()
            .map(|(i, &(r, g, b))| ColorSample::new(Color::new(r, g, b), format!("{i}.jpg")))
            .collect()
    }

    // Tests squared distance sums squared channel differences
    // Verified by taking the square root
    #[test]
    fn test_squared_distance() {
        assert_eq!(
            squared_distance(Color::new(0, 0, 0).into(), Color::new(1, 2, 3)),
            14
        );
        assert_eq!(
            squared_distance(Color::new(10, 10, 10).into(), Color::new(7, 14, 10)),
            25
        );
        assert_eq!(
            squared_distance(Color::new(5, 5, 5).into(), Color::new(5, 5, 5)),
            0
        );
    }

    // Tests the sentinel exceeds the largest possible distance
    // Verified by lowering the sentinel to the max distance
    #[test]
    fn test_sentinel_exceeds_max_distance() {
        let max = squared_distance(Color::new(0, 0, 0).into(), Color::new(255, 255, 255));
        assert!(max < DISTANCE_SENTINEL);

        let far = MatchTarget::jittered(Color::gray(255), [i32::MAX; 3]);
        assert!(squared_distance(far, Color::gray(0)) < DISTANCE_SENTINEL);
        let near_zero = MatchTarget::jittered(Color::gray(0), [i32::MIN + 1; 3]);
        assert!(squared_distance(near_zero, Color::gray(255)) < DISTANCE_SENTINEL);
    }

    // Tests jittered targets keep channels outside 0..=255
    // Verified by clamping the target before measuring
    #[test]
    fn test_out_of_range_target_distance() {
        let target = MatchTarget::jittered(Color::new(250, 0, 3), [10, -4, 0]);

        assert_eq!(target.channels(), [260, -4, 3]);
        assert_eq!(squared_distance(target, Color::new(255, 0, 0)), 25 + 16 + 9);
    }

    // Tests matching ranks candidates against the unclamped target
    // Verified by clamping the target to the channel range
    #[test]
    fn test_out_of_range_target_match() {
        let idx = index(&[(255, 11, 0), (245, 0, 0)]);
        let beyond_red = MatchTarget::jittered(Color::new(255, 0, 0), [5, 0, 0]);

        // 5² + 11² = 146 beats 15² = 225, while the clamped (255, 0, 0)
        // would prefer the second entry
        assert_eq!(nearest_position(beyond_red, idx.samples()), Some(0));
        assert_eq!(nearest_position(Color::new(255, 0, 0), idx.samples()), Some(1));
    }

    // Tests an exact color match wins
    // Verified by using <= in the comparison loop and appending a duplicate
    #[test]
    fn test_exact_match_wins() {
        let idx = index(&[(0, 0, 0), (100, 150, 200), (255, 255, 255)]);

        let found = nearest_match(Color::new(100, 150, 200), &idx);

        assert_eq!(found.map(|s| s.path.as_path()), Some(Path::new("1.jpg")));
    }

    // Tests the earliest of equally distant entries is returned
    // Verified by replacing the best on equal distance
    #[test]
    fn test_tie_keeps_first_entry() {
        // Both candidates are exactly 10 away on the red channel
        let idx = index(&[(90, 0, 0), (110, 0, 0)]);
        assert_eq!(nearest_position(Color::new(100, 0, 0), idx.samples()), Some(0));

        let reversed = index(&[(110, 0, 0), (90, 0, 0)]);
        assert_eq!(
            nearest_position(Color::new(100, 0, 0), reversed.samples()),
            Some(0)
        );

        let duplicates = index(&[(1, 1, 1), (50, 50, 50), (50, 50, 50)]);
        assert_eq!(
            nearest_position(Color::new(50, 50, 50), duplicates.samples()),
            Some(1)
        );
    }

    // Tests the scan does not stop at the first close candidate
    // Verified by breaking out of the loop after the first improvement
    #[test]
    fn test_scans_entire_index() {
        let idx = index(&[(10, 10, 10), (200, 200, 200), (99, 99, 99)]);

        assert_eq!(nearest_position(Color::new(100, 100, 100), idx.samples()), Some(2));
    }

    // Tests a single far-away entry is still returned
    // Verified by initializing the best distance to zero
    #[test]
    fn test_single_extreme_entry_matches() {
        let idx = index(&[(255, 255, 255)]);

        assert_eq!(nearest_position(Color::new(0, 0, 0), idx.samples()), Some(0));
    }

    // Tests empty index yields no match
    // Verified by defaulting to position zero
    #[test]
    fn test_empty_index_has_no_match() {
        let idx = ColorIndex::default();

        assert_eq!(nearest_position(Color::new(1, 2, 3), idx.samples()), None);
        assert!(nearest_match(Color::new(1, 2, 3), &idx).is_none());
    }
}
