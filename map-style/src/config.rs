//! # Config 模块
//!
//! 过渡参数配置，集中管理样式属性的默认过渡。
//!
//! ## 配置优先级
//!
//! 1. `properties` 中按属性名配置的过渡（最高）
//! 2. `default_transition`
//! 3. 内置默认值 300ms / 0ms（最低）
//!
//! ## 文件格式
//!
//! ```json
//! {
//!   "default_transition": { "duration": 300, "delay": 0 },
//!   "properties": {
//!     "line-opacity": { "duration": 500, "delay": 100 }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{StyleError, StyleResult};
use crate::transition::TransitionOptions;

/// 内置默认过渡时长（毫秒）
pub const DEFAULT_TRANSITION_DURATION_MS: i64 = 300;
/// 内置默认过渡延迟（毫秒）
pub const DEFAULT_TRANSITION_DELAY_MS: i64 = 0;

/// 过渡配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// 未单独配置的属性使用的过渡
    #[serde(default = "default_transition")]
    pub default_transition: TransitionOptions,

    /// 属性名 -> 过渡
    #[serde(default)]
    pub properties: BTreeMap<String, TransitionOptions>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            default_transition: default_transition(),
            properties: BTreeMap::new(),
        }
    }
}

impl TransitionConfig {
    /// 从 JSON 字符串解析
    pub fn from_json_str(json: &str) -> StyleResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        debug!(
            default_transition = %config.default_transition,
            properties = config.properties.len(),
            "过渡配置解析成功"
        );
        Ok(config)
    }

    /// 从文件加载
    ///
    /// 文件不存在时返回默认配置；文件存在但无法读取或解析时返回错误。
    pub fn load(path: impl AsRef<Path>) -> StyleResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), "读取过渡配置");
                Self::from_json_str(&content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "过渡配置不存在，使用默认值");
                Ok(Self::default())
            }
            Err(e) => Err(StyleError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// 序列化为格式化的 JSON
    pub fn to_json_pretty(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 获取属性的过渡，未配置时回退到 `default_transition`
    pub fn transition_for(&self, property: &str) -> TransitionOptions {
        self.properties
            .get(property)
            .copied()
            .unwrap_or(self.default_transition)
    }

    /// 设置属性的过渡（构建配置用）
    pub fn with_property(mut self, property: impl Into<String>, t: TransitionOptions) -> Self {
        self.properties.insert(property.into(), t);
        self
    }
}

// 默认值函数
fn default_transition() -> TransitionOptions {
    TransitionOptions::new(DEFAULT_TRANSITION_DURATION_MS, DEFAULT_TRANSITION_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransitionConfig::default();
        assert_eq!(config.default_transition, TransitionOptions::new(300, 0));
        assert!(config.properties.is_empty());
        assert_eq!(
            config.transition_for("line-width"),
            TransitionOptions::new(300, 0)
        );
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = TransitionConfig::from_json_str("{}").unwrap();
        assert_eq!(config, TransitionConfig::default());
    }

    #[test]
    fn test_property_override() {
        let json = r#"{
            "default_transition": { "duration": 200, "delay": 10 },
            "properties": {
                "line-opacity": { "duration": 500, "delay": 100 },
                "line-color": { "duration": -1, "delay": 0 }
            }
        }"#;
        let config = TransitionConfig::from_json_str(json).unwrap();

        assert_eq!(
            config.transition_for("line-opacity"),
            TransitionOptions::new(500, 100)
        );
        // 负数原样保留
        assert_eq!(
            config.transition_for("line-color"),
            TransitionOptions::new(-1, 0)
        );
        assert_eq!(
            config.transition_for("line-blur"),
            TransitionOptions::new(200, 10)
        );
    }

    #[test]
    fn test_invalid_json() {
        let err = TransitionConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, StyleError::Json(_)));

        // 缺少字段
        let err =
            TransitionConfig::from_json_str(r#"{"default_transition": {"duration": 1}}"#)
                .unwrap_err();
        assert!(matches!(err, StyleError::Json(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = TransitionConfig::default()
            .with_property("line-width", TransitionOptions::new(1000, 250));
        let json = config.to_json_pretty().unwrap();
        let parsed = TransitionConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_serialized_shape() {
        let config = TransitionConfig::default()
            .with_property("line-opacity", TransitionOptions::new(500, 100));
        insta::assert_yaml_snapshot!(config, @r###"
        ---
        default_transition:
          duration: 300
          delay: 0
        properties:
          line-opacity:
            duration: 500
            delay: 100
        "###);
    }
}
