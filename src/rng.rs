use crate::error::*;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// 原生随机数的取值个数（`u32` 全范围）
const SPAN: u64 = 1 << 32;

/// 均匀随机整数来源
pub trait RandomSource {
    /// 返回 `[0, limit]` 范围内均匀分布的整数
    fn next_uniform(&mut self, limit: u32) -> u32;
}

/// 基于任意 `RngCore` 的随机源
///
/// 通过拒绝采样把 `u32` 映射到 `[0, limit]`，不会引入取模偏差。
#[derive(Debug, Clone)]
pub struct Source<R = StdRng> {
    rng: R,
}

impl Source<StdRng> {
    /// 使用固定种子创建，相同种子产生相同序列
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Source<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> RandomSource for Source<R> {
    fn next_uniform(&mut self, limit: u32) -> u32 {
        let range = u64::from(limit) + 1;
        // 只接受落在 range 整数倍以内的值，其余重新抽取
        let zone = SPAN - SPAN % range;
        loop {
            let value = u64::from(self.rng.next_u32());
            if value < zone {
                return (value % range) as u32;
            }
        }
    }
}

/// 从操作系统熵源读取一个 64 位种子
pub fn entropy_seed() -> Result<u64> {
    let mut bytes = [0u8; 8];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(u64::from_le_bytes(bytes))
}

#[cfg(test)]
mod test {
    use super::*;

    /// 按顺序吐出预设值的 `RngCore`
    struct Replay(Vec<u32>);

    impl RngCore for Replay {
        fn next_u32(&mut self) -> u32 {
            self.0.remove(0)
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest {
                *byte = self.next_u32() as u8;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn next_uniform_in_range() {
        let mut source = Source::seeded(7);
        for limit in [0, 1, 2, 9, 1000] {
            for _ in 0..10000 {
                assert!(source.next_uniform(limit) <= limit);
            }
        }
    }

    #[test]
    fn zero_limit_always_zero() {
        let mut source = Source::seeded(1);
        assert!((0..1000).all(|_| source.next_uniform(0) == 0));
    }

    #[test]
    fn full_range_accepts_everything() {
        let mut source = Source::new(Replay(vec![u32::MAX, 0]));
        assert_eq!(source.next_uniform(u32::MAX), u32::MAX);
        assert_eq!(source.next_uniform(u32::MAX), 0);
    }

    #[test]
    fn rejects_values_outside_the_even_zone() {
        // 2^32 % 3 == 1，所以 u32::MAX 落在不完整的最后一组里，必须丢弃
        let mut source = Source::new(Replay(vec![u32::MAX, 5]));
        assert_eq!(source.next_uniform(2), 2);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Source::seeded(42);
        let mut b = Source::seeded(42);
        let xs: Vec<u32> = (0..100).map(|_| a.next_uniform(2)).collect();
        let ys: Vec<u32> = (0..100).map(|_| b.next_uniform(2)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn roughly_uniform() {
        let mut source = Source::seeded(2014);
        let mut counts = [0u32; 3];
        let draws = 300_000;
        for _ in 0..draws {
            counts[source.next_uniform(2) as usize] += 1;
        }
        for count in counts {
            let share = f64::from(count) / f64::from(draws);
            assert!((share - 1.0 / 3.0).abs() < 0.01, "counts = {:?}", counts);
        }
    }

    #[test]
    fn entropy_seed_available() {
        assert!(entropy_seed().is_ok());
    }
}
