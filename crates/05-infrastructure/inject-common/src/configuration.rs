//! 容器配置

use crate::errors::{InjectError, InjectResult};
use serde::{Deserialize, Serialize};

/// 重复注册策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// 拒绝同一具体类型的第二次注册
    #[default]
    Reject,
    /// 保留第一次注册的实例，忽略之后的注册
    KeepFirst,
}

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 重复注册策略
    pub duplicate_policy: DuplicatePolicy,
    /// 构建完成后是否通知 `FactoryAware` 组件
    pub notify_factory_aware: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            notify_factory_aware: true,
        }
    }
}

impl ContainerConfig {
    /// 从 TOML 文本解析
    pub fn from_toml_str(content: &str) -> InjectResult<Self> {
        toml::from_str(content).map_err(|e| InjectError::config(e.to_string()))
    }

    /// 从 JSON 文本解析
    pub fn from_json_str(content: &str) -> InjectResult<Self> {
        serde_json::from_str(content).map_err(|e| InjectError::config(e.to_string()))
    }

    /// 设置重复注册策略
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// 设置是否通知 `FactoryAware` 组件
    pub fn with_notify_factory_aware(mut self, enabled: bool) -> Self {
        self.notify_factory_aware = enabled;
        self
    }
}
