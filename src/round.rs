use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 门数
pub const DOORS: u32 = 3;

/// 挑战者在主持人揭示后的策略
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub enum Strategy {
    /// 坚持最初的选择
    Stay,

    /// 改选剩下的那扇门
    Switch,
}

impl Strategy {
    /// 一次完整模拟依次运行的策略
    pub const ALL: [Strategy; 2] = [Strategy::Switch, Strategy::Stay];

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Stay => "坚持选择",
            Strategy::Switch => "改变选择",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Stay => f.write_str("stay"),
            Strategy::Switch => f.write_str("switch"),
        }
    }
}

/// 一轮游戏的结果
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub struct Round {
    /// 奖品所在门序号
    car: u32,

    /// 挑战者最初选择的门序号
    chosen: u32,

    /// 主持人打开的门序号
    revealed: u32,

    /// 挑战者最终选择的门序号
    final_choice: u32,

    /// 挑战者的策略
    strategy: Strategy,
}

impl Round {
    /// 完整进行一轮游戏：放奖品、挑战者选择、主持人揭示、挑战者抉择
    pub fn play<S>(rng: &mut S, strategy: Strategy) -> Self
    where
        S: RandomSource + ?Sized,
    {
        let car = rng.next_uniform(DOORS - 1);
        // 挑战者并不知道奖品在哪，独立随机选择
        let chosen = rng.next_uniform(DOORS - 1);
        let revealed = host_door(rng, car, chosen);
        let final_choice = match strategy {
            Strategy::Stay => chosen,
            Strategy::Switch => other_door(chosen, revealed),
        };

        Self {
            car,
            chosen,
            revealed,
            final_choice,
            strategy,
        }
    }

    /// 奖品所在门序号
    pub fn car(&self) -> u32 {
        self.car
    }

    /// 挑战者最初选择的门序号
    pub fn chosen(&self) -> u32 {
        self.chosen
    }

    /// 主持人打开的门序号
    pub fn revealed(&self) -> u32 {
        self.revealed
    }

    /// 挑战者最终选择的门序号
    pub fn final_choice(&self) -> u32 {
        self.final_choice
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// 是否赢得奖品
    pub fn won(&self) -> bool {
        self.final_choice == self.car
    }
}

/// 以给定策略进行一轮游戏，返回是否赢得奖品
pub fn play_round<S>(rng: &mut S, strategy: Strategy) -> bool
where
    S: RandomSource + ?Sized,
{
    Round::play(rng, strategy).won()
}

// 主持人打开一扇既不是挑战者所选、后面也没有奖品的门
fn host_door<S>(rng: &mut S, car: u32, chosen: u32) -> u32
where
    S: RandomSource + ?Sized,
{
    if car == chosen {
        // 另外两扇都是山羊，在其中均匀选择一扇
        (chosen + 1 + rng.next_uniform(1)) % DOORS
    } else {
        other_door(car, chosen)
    }
}

// 三扇门中排除两扇不同的门后剩下的那一扇
fn other_door(first: u32, second: u32) -> u32 {
    assert!(
        first < DOORS && second < DOORS && first != second,
        "first = {}, second = {}",
        first,
        second
    );

    // 0 + 1 + 2 == 3
    3 - first - second
}
