//! # Style 模块
//!
//! 样式层使用的可选过渡参数 [`StyleTransition`]，以及它与
//! [`TransitionOptions`] 之间的转换。
//!
//! 样式层中 duration / delay 都可以缺省，缺省表示"沿用上层默认值"。
//! 转换为 [`TransitionOptions`] 时缺省部分按 0ms 处理。

use std::time::Duration;

use crate::error::StyleError;
use crate::transition::TransitionOptions;

/// 样式层过渡参数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleTransition {
    /// 动画持续时长（`None` = 未设置）
    pub duration: Option<Duration>,
    /// 开始前等待时长（`None` = 未设置）
    pub delay: Option<Duration>,
}

impl StyleTransition {
    pub fn new(duration: Option<Duration>, delay: Option<Duration>) -> Self {
        Self { duration, delay }
    }

    /// 两项都未设置
    pub fn undefined() -> Self {
        Self::default()
    }

    /// 是否设置了任一项
    pub fn is_defined(&self) -> bool {
        self.duration.is_some() || self.delay.is_some()
    }

    /// 未设置的项回退到 `defaults` 中的对应项
    pub fn reverse_merge(&self, defaults: &StyleTransition) -> StyleTransition {
        StyleTransition {
            duration: self.duration.or(defaults.duration),
            delay: self.delay.or(defaults.delay),
        }
    }
}

impl From<StyleTransition> for TransitionOptions {
    fn from(value: StyleTransition) -> Self {
        TransitionOptions::new(
            std_to_millis(value.duration.unwrap_or(Duration::ZERO)),
            std_to_millis(value.delay.unwrap_or(Duration::ZERO)),
        )
    }
}

impl TryFrom<TransitionOptions> for StyleTransition {
    type Error = StyleError;

    fn try_from(value: TransitionOptions) -> Result<Self, Self::Error> {
        let duration = value.duration_as_std().ok_or(StyleError::NegativeTiming {
            field: "duration",
            value: value.duration(),
        })?;
        let delay = value.delay_as_std().ok_or(StyleError::NegativeTiming {
            field: "delay",
            value: value.delay(),
        })?;
        Ok(StyleTransition::new(Some(duration), Some(delay)))
    }
}

/// 取整到毫秒，超出 i64 范围时饱和
fn std_to_millis(d: Duration) -> i64 {
    i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
}
