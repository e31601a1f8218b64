//! # Map Style
//!
//! 地图样式系统中描述属性过渡动画参数的基础类型。
//!
//! ## 架构概述
//!
//! `map-style` 只携带数据，不负责动画调度或插值。
//! 样式层与上层之间通过两种表示交换过渡参数：
//!
//! ```text
//! StyleTransition                     TransitionOptions
//!   (Option<Duration>, Option<Duration>)   (i64 ms, i64 ms)
//!   │                                      │
//!   │──── From（缺省按 0ms）────────────►│
//!   │◄─── TryFrom（负数报错）─────────────│
//! ```
//!
//! ## 核心类型
//!
//! - [`TransitionOptions`]：不可变的 (duration, delay) 值对象
//! - [`StyleTransition`]：样式层可缺省的过渡参数
//! - [`TransitionConfig`]：按属性名配置的默认过渡
//!
//! ## 模块结构
//!
//! - [`transition`]：TransitionOptions 定义
//! - [`style`]：StyleTransition 及转换
//! - [`config`]：过渡配置加载
//! - [`error`]：错误类型定义

pub mod config;
pub mod error;
pub mod style;
pub mod transition;

// 重导出核心类型
pub use config::TransitionConfig;
pub use error::{StyleError, StyleResult};
pub use style::StyleTransition;
pub use transition::TransitionOptions;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        // 验证所有公共类型都可以正常使用
        let t = TransitionOptions::new(300, 0);
        let _style = StyleTransition::try_from(t);
        let _config = TransitionConfig::default();
        let _result: StyleResult<()> = Ok(());
    }
}
