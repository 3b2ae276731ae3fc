use mt19937::Mt19937;
use proptest::prelude::*;

proptest! {
    #[test]
    fn discard_equals_drawing(seed in any::<u32>(), steps in 0u64..3000) {
        let mut drawn = Mt19937::new(seed);
        let mut skipped = Mt19937::new(seed);

        for _ in 0..steps {
            drawn.next_u32();
        }
        skipped.discard(steps);

        prop_assert_eq!(drawn.capture_state(), skipped.capture_state());
        prop_assert_eq!(drawn.next_u32(), skipped.next_u32());
    }

    #[test]
    fn split_discard_equals_single_discard(seed in any::<u32>(), a in 0u64..1500, b in 0u64..1500) {
        let mut split = Mt19937::new(seed);
        let mut single = Mt19937::new(seed);

        split.discard(a);
        split.discard(b);
        single.discard(a + b);

        prop_assert_eq!(split.next_u32(), single.next_u32());
    }
}
