use crate::error::*;
use crate::experiment::{run_experiment, run_parallel, ExperimentReport};
use crate::rng::{entropy_seed, Source};
use crate::round::Strategy;
use serde::{Deserialize, Serialize};
use tracing::info;

/// 默认轮数，足够让胜率稳定下来
pub const DEFAULT_TRIALS: u64 = 2_000_000;

/// 模拟设置
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub struct Settings {
    /// 每种策略进行的轮数
    pub trials: u64,

    /// 固定种子，不设置时从系统熵源获取
    pub seed: Option<u64>,

    /// 独立随机流（并行分段）的个数，1 表示顺序执行
    pub jobs: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            jobs: 1,
        }
    }
}

impl Settings {
    pub fn new(trials: u64) -> Self {
        Self {
            trials,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_jobs(mut self, jobs: u32) -> Self {
        self.jobs = jobs;
        self
    }
}

/// 一次完整模拟的结果
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct Summary {
    /// 实际使用的种子，可用于复现
    pub seed: u64,

    /// 随机流个数
    pub jobs: u32,

    /// 按 [`Strategy::ALL`] 顺序排列的各策略结果
    pub reports: Vec<ExperimentReport>,
}

/// 先以改变选择、再以坚持选择分别进行 `settings.trials` 轮游戏
pub fn simulate(settings: &Settings) -> Result<Summary> {
    if settings.jobs == 0 {
        return Err(Error::InvalidJobs);
    }

    let seed = match settings.seed {
        Some(seed) => seed,
        None => entropy_seed()?,
    };
    info!(
        trials = settings.trials,
        seed,
        jobs = settings.jobs,
        "starting simulation"
    );

    let reports: Vec<ExperimentReport> = if settings.jobs == 1 {
        // 两种策略共用同一条随机流，但各自拥有新的计数器
        let mut source = Source::seeded(seed);
        Strategy::ALL
            .iter()
            .map(|&strategy| run_experiment(&mut source, settings.trials, strategy))
            .collect()
    } else {
        Strategy::ALL
            .iter()
            .map(|&strategy| run_parallel(seed, settings.trials, strategy, settings.jobs))
            .collect::<Result<Vec<_>>>()?
    };

    for report in &reports {
        info!(
            strategy = %report.strategy(),
            successes = report.success_count(),
            failures = report.failure_count(),
            "experiment finished"
        );
    }

    Ok(Summary {
        seed,
        jobs: settings.jobs,
        reports,
    })
}
