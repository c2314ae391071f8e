//! # Inject Common
//!
//! 依赖注入容器的公共类型。
//!
//! ## 核心类型
//!
//! - [`TypeKey`] - 运行时类型键
//! - [`InjectError`] - 依赖注入错误
//! - [`ContainerConfig`] - 容器配置

pub mod configuration;
pub mod errors;
pub mod metadata;

pub use configuration::*;
pub use errors::*;
pub use metadata::*;
