//! # Inject Abstractions
//!
//! 字段注入的抽象层，定义组件、依赖字段和组件查询的核心接口。
//!
//! ## 核心接口
//!
//! - [`Injectable`] - 可注入组件 trait
//! - [`Inject`] - 注入槽位
//! - [`Dependency`] - 依赖字段描述
//! - [`Provision`] - 组件可被绑定为的类型
//! - [`ComponentFactory`] - 组件查询接口
//! - [`ComponentFactoryBuilder`] - 组件工厂构建器接口
//! - [`FactoryAware`] - 构建完成回调

pub mod builder;
pub mod component;
pub mod dependency;
pub mod factory;

pub use builder::*;
pub use component::*;
pub use dependency::*;
pub use factory::*;

pub use inject_common::{InjectError, InjectResult, TypeKey, TypeKind};
