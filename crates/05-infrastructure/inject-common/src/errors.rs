//! 错误类型定义

use thiserror::Error;

/// 依赖注入错误类型
///
/// 所有错误都属于启动期的配置错误，调用方应当在检测到时终止启动流程。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectError {
    #[error("存在未解析的依赖，请注册缺失的组件:\n{details}")]
    UnresolvedDependencies { details: String },

    #[error("无法设置依赖字段: {component}.{field}（字段已被绑定）")]
    FieldNotWritable { component: String, field: String },

    #[error("按值注册的组件 {component} 仍有未解析的依赖 [{missing}]，按值注册的组件之后无法再被注入")]
    UnresolvedValue { component: String, missing: String },

    #[error("匹配到多个组件: {type_name}, 候选: [{candidates}]")]
    AmbiguousComponent {
        type_name: String,
        candidates: String,
    },

    #[error("期望接口类型，实际为: {type_name}")]
    NotAnInterface { type_name: String },

    #[error("组件重复注册: {type_name}")]
    DuplicateComponent { type_name: String },

    #[error("类型不匹配: 期望 {expected}, 实际 {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("容器配置无效: {message}")]
    Config { message: String },
}

impl InjectError {
    /// 创建字段不可写错误
    pub fn field_not_writable(component: impl Into<String>, field: impl Into<String>) -> Self {
        Self::FieldNotWritable {
            component: component.into(),
            field: field.into(),
        }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// 创建配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// 结果类型别名
pub type InjectResult<T> = Result<T, InjectError>;
