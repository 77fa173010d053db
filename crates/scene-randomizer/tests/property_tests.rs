//! Range and count properties over generated scenes

use proptest::prelude::*;
use scene_randomizer::{randomize_scene, HeightJitter, TargetRule};
use scene_test_utils::*;

proptest! {
    #[test]
    fn height_stays_in_band(u in 0.0f64..1.0) {
        let y = HeightJitter::default().sample(u);
        prop_assert!(y >= -4.5);
        // Inclusive: -4.0 + (1 - 2^-53) - 0.5 rounds to exactly -3.5
        prop_assert!(y <= -3.5);
    }

    #[test]
    fn count_and_ranges_hold(tall in 0usize..8, other in 0usize..8, seed in any::<u64>()) {
        let before = doc(&scene_with_boxes(tall, other));
        let mut after = before.clone();

        let report = randomize_scene(&mut after, &TargetRule::default(), &mut seeded_rng(seed)).unwrap();

        prop_assert_eq!(report.count, tall);
        prop_assert_eq!(tall_box_names(&after).len(), report.count);
        assert_only_changed(&before, &after, &report.touched);
        for name in &report.touched {
            assert_randomized_in_range(&after, name);
        }
    }
}
