//! Property-based tests for spread navigation.
//! The index must stay in range for every sequence of moves and layouts.

use summit_booklet::SpreadNavigator;
use summit_booklet::layout::total_spreads;

proptest::proptest! {
    /// After any layout change the index is inside the new range.
    #[test]
    fn layout_change_keeps_index_in_range(
        old_total in 1usize..64,
        start in 0usize..64,
        new_total in 0usize..64,
    ) {
        let mut nav = SpreadNavigator::new(old_total);
        nav.jump_to(start);
        let before = nav.current();

        nav.on_layout_changed(new_total);

        assert!(nav.current() < nav.total());
        // Never raised, only lowered when needed
        assert!(nav.current() <= before);
        if before < new_total {
            assert_eq!(nav.current(), before);
        }
    }

    /// Moves past either end leave the index unchanged.
    #[test]
    fn boundary_moves_are_noops(total in 1usize..64) {
        let mut nav = SpreadNavigator::new(total);
        assert!(!nav.previous());
        assert_eq!(nav.current(), 0);

        nav.jump_to(total - 1);
        assert!(!nav.next());
        assert_eq!(nav.current(), total - 1);
    }

    /// Any mix of moves and resizes keeps the index valid.
    #[test]
    fn random_walk_stays_in_range(
        pages in 0usize..12,
        steps in proptest::collection::vec(0u8..4, 0..64),
    ) {
        let mut is_mobile = false;
        let mut nav = SpreadNavigator::new(total_spreads(is_mobile, pages));

        for step in steps {
            match step {
                0 => { nav.next(); }
                1 => { nav.previous(); }
                _ => {
                    is_mobile = !is_mobile;
                    nav.on_layout_changed(total_spreads(is_mobile, pages));
                }
            }
            assert!(nav.total() >= 1);
            assert!(nav.current() < nav.total());
            assert_eq!(nav.total(), total_spreads(is_mobile, pages));
        }
    }
}
