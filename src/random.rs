//! 秘密数字来源
//!
//! 抽象为 trait，测试时可注入固定值

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 均匀整数来源，返回 `[low, high]` 闭区间内的值
pub trait SecretSource {
    fn draw(&mut self, low: u32, high: u32) -> u32;
}

/// 基于 `StdRng` 的随机来源
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    /// `Some(seed)` 得到可复现的序列，`None` 使用系统熵
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl SecretSource for RngSource {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }
}

/// 固定值来源（测试用）
#[cfg(test)]
pub struct FixedSecret(pub u32);

#[cfg(test)]
impl SecretSource for FixedSecret {
    fn draw(&mut self, _low: u32, _high: u32) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_stays_in_range() {
        let mut source = RngSource::new(Some(7));
        for _ in 0..1000 {
            let n = source.draw(1, 100);
            assert!((1..=100).contains(&n));
        }
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RngSource::new(Some(42));
        let mut b = RngSource::new(Some(42));
        let xs: Vec<u32> = (0..20).map(|_| a.draw(1, 100)).collect();
        let ys: Vec<u32> = (0..20).map(|_| b.draw(1, 100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_draw_hits_both_bounds() {
        let mut source = RngSource::new(Some(1));
        let draws: Vec<u32> = (0..5000).map(|_| source.draw(1, 100)).collect();
        assert!(draws.contains(&1));
        assert!(draws.contains(&100));
    }
}
