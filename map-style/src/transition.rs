//! # Transition 模块
//!
//! 定义样式属性变化时使用的过渡参数 [`TransitionOptions`]。
//!
//! ## 设计原则
//!
//! - **不可变**：构造后 duration / delay 不再改变，没有任何 setter
//! - **不校验**：负数按原样保留，是否合法由消费方决定
//! - **纯数据**：不负责调度或插值，只携带参数

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 过渡参数（毫秒）
///
/// 描述一个样式属性动画持续多久、开始前等待多久。
///
/// # 示例
///
/// ```text
/// TransitionOptions::new(300, 0)  -> 动画持续 300ms，立即开始
/// TransitionOptions::new(500, 100) -> 等待 100ms 后开始，持续 500ms
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOptions {
    duration: i64,
    delay: i64,
}

impl TransitionOptions {
    /// 创建过渡参数
    pub const fn new(duration: i64, delay: i64) -> Self {
        Self { duration, delay }
    }

    /// 具名工厂，与 [`TransitionOptions::new`] 等价
    pub const fn from_values(duration: i64, delay: i64) -> Self {
        Self::new(duration, delay)
    }

    /// 动画持续时长（毫秒）
    pub const fn duration(&self) -> i64 {
        self.duration
    }

    /// 动画开始前的等待时长（毫秒）
    pub const fn delay(&self) -> i64 {
        self.delay
    }

    /// duration 转为 [`Duration`]，负数返回 `None`
    pub fn duration_as_std(&self) -> Option<Duration> {
        millis_to_std(self.duration)
    }

    /// delay 转为 [`Duration`]，负数返回 `None`
    pub fn delay_as_std(&self) -> Option<Duration> {
        millis_to_std(self.delay)
    }

    /// 与类型擦除后的值比较
    ///
    /// 只有另一方同样是 `TransitionOptions` 且两个字段都相等时才返回 `true`。
    pub fn eq_dyn(&self, other: &dyn Any) -> bool {
        if std::ptr::eq(
            self as *const Self as *const (),
            other as *const dyn Any as *const (),
        ) && other.is::<Self>()
        {
            return true;
        }
        other
            .downcast_ref::<Self>()
            .is_some_and(|that| self == that)
    }

    /// 稳定的 32 位哈希值
    ///
    /// 每个字段先折叠为 `v ^ (v >>> 32)` 的低 32 位，再以 31 为乘数组合。
    /// 结果不依赖进程或 hasher 的随机种子，可用于跨平台比对。
    pub fn hash_code(&self) -> i32 {
        fold_i64(self.duration)
            .wrapping_mul(31)
            .wrapping_add(fold_i64(self.delay))
    }
}

impl Hash for TransitionOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl From<(i64, i64)> for TransitionOptions {
    fn from((duration, delay): (i64, i64)) -> Self {
        Self::new(duration, delay)
    }
}

impl fmt::Display for TransitionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms (delay {}ms)", self.duration, self.delay)
    }
}

fn fold_i64(value: i64) -> i32 {
    let bits = value as u64;
    (bits ^ (bits >> 32)) as i32
}

fn millis_to_std(millis: i64) -> Option<Duration> {
    u64::try_from(millis).ok().map(Duration::from_millis)
}
