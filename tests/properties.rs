//! 任意种子下随机源、单轮游戏与计数的性质测试

use montyhall::{run_experiment, RandomSource, Round, Source, Strategy as Choice, DOORS};
use proptest::prelude::*;

fn strategies() -> impl Strategy<Value = Choice> {
    prop_oneof![Just(Choice::Stay), Just(Choice::Switch)]
}

proptest! {
    #[test]
    fn doors_in_range(seed in any::<u64>(), strategy in strategies()) {
        let mut source = Source::seeded(seed);
        for _ in 0..64 {
            let round = Round::play(&mut source, strategy);
            prop_assert!(round.car() < DOORS);
            prop_assert!(round.chosen() < DOORS);
            prop_assert!(round.revealed() < DOORS);
            prop_assert!(round.final_choice() < DOORS);
        }
    }

    #[test]
    fn host_never_opens_pick_or_car(seed in any::<u64>(), strategy in strategies()) {
        let mut source = Source::seeded(seed);
        for _ in 0..64 {
            let round = Round::play(&mut source, strategy);
            prop_assert_ne!(round.revealed(), round.chosen());
            prop_assert_ne!(round.revealed(), round.car());
        }
    }

    #[test]
    fn final_choice_follows_strategy(seed in any::<u64>(), strategy in strategies()) {
        let mut source = Source::seeded(seed);
        for _ in 0..64 {
            let round = Round::play(&mut source, strategy);
            match strategy {
                Choice::Stay => prop_assert_eq!(round.final_choice(), round.chosen()),
                Choice::Switch => {
                    prop_assert_ne!(round.final_choice(), round.chosen());
                    prop_assert_ne!(round.final_choice(), round.revealed());
                }
            }
        }
    }

    #[test]
    fn counts_always_add_up(seed in any::<u64>(), trials in 0u64..2000, strategy in strategies()) {
        let report = run_experiment(&mut Source::seeded(seed), trials, strategy);
        prop_assert_eq!(report.success_count() + report.failure_count(), trials);
        prop_assert_eq!(report.win_rate().is_none(), trials == 0);
    }

    #[test]
    fn next_uniform_bounded(seed in any::<u64>(), limit in any::<u32>()) {
        let mut source = Source::seeded(seed);
        prop_assert!(source.next_uniform(limit) <= limit);
    }
}
