use crate::error::*;
use crate::rng::{RandomSource, Source};
use crate::round::{Round, Strategy};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 一种策略重复多轮后的统计结果
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub struct ExperimentReport {
    /// 挑战者的策略
    strategy: Strategy,

    /// 进行的轮数
    trials: u64,

    /// 赢得奖品的轮数
    success_count: u64,

    /// 未赢得奖品的轮数
    failure_count: u64,

    /// 第一次就选中奖品的轮数
    first_pick_wins: u64,
}

impl ExperimentReport {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            trials: 0,
            success_count: 0,
            failure_count: 0,
            first_pick_wins: 0,
        }
    }

    /// 记录一轮结果
    pub fn record(&mut self, round: &Round) {
        debug_assert_eq!(round.strategy(), self.strategy);

        self.trials += 1;
        if round.won() {
            self.success_count += 1;
        } else {
            self.failure_count += 1;
        }
        if round.chosen() == round.car() {
            self.first_pick_wins += 1;
        }
    }

    /// 合并同一策略下另一段的统计
    pub fn merge(&mut self, other: &ExperimentReport) {
        assert_eq!(self.strategy, other.strategy);

        self.trials += other.trials;
        self.success_count += other.success_count;
        self.failure_count += other.failure_count;
        self.first_pick_wins += other.first_pick_wins;
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn success_count(&self) -> u64 {
        self.success_count
    }

    pub fn failure_count(&self) -> u64 {
        self.failure_count
    }

    pub fn first_pick_wins(&self) -> u64 {
        self.first_pick_wins
    }

    /// 胜率，一轮都没有进行时没有定义
    pub fn win_rate(&self) -> Option<f64> {
        self.rate(self.success_count)
    }

    /// 败率，一轮都没有进行时没有定义
    pub fn loss_rate(&self) -> Option<f64> {
        self.rate(self.failure_count)
    }

    fn rate(&self, count: u64) -> Option<f64> {
        if self.trials == 0 {
            None
        } else {
            Some(count as f64 / self.trials as f64)
        }
    }
}

/// 以给定策略依次进行 `trials` 轮游戏并统计结果
pub fn run_experiment<S>(rng: &mut S, trials: u64, strategy: Strategy) -> ExperimentReport
where
    S: RandomSource + ?Sized,
{
    let mut report = ExperimentReport::new(strategy);
    for _ in 0..trials {
        report.record(&Round::play(rng, strategy));
    }
    report
}

/// 把 `trials` 轮拆成 `jobs` 段并行进行，每段拥有独立播种的随机源
///
/// 结果只取决于 `(seed, trials, strategy, jobs)`，与线程池大小无关。
pub fn run_parallel(seed: u64, trials: u64, strategy: Strategy, jobs: u32) -> Result<ExperimentReport> {
    if jobs == 0 {
        return Err(Error::InvalidJobs);
    }

    let jobs = u64::from(jobs);
    let chunk = trials / jobs;
    let remainder = trials % jobs;

    let report = (0..jobs)
        .into_par_iter()
        .map(|job| {
            let trials = chunk + u64::from(job < remainder);
            let seed = stream_seed(seed, strategy, job);
            debug!(%strategy, job, trials, seed, "worker stream started");
            let mut source = Source::seeded(seed);
            run_experiment(&mut source, trials, strategy)
        })
        .reduce(
            || ExperimentReport::new(strategy),
            |mut total, part| {
                total.merge(&part);
                total
            },
        );

    Ok(report)
}

// 每个 (策略, 分段) 对应一条独立的随机流
fn stream_seed(seed: u64, strategy: Strategy, job: u64) -> u64 {
    let lane: u64 = match strategy {
        Strategy::Switch => 0,
        Strategy::Stay => 1,
    };
    seed.wrapping_add(lane << 32).wrapping_add(job)
}
