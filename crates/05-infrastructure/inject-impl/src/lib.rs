//! # 字段注入容器实现
//!
//! 提供待解析组件描述符、组件注册表和只读组件工厂的具体实现。
//!
//! ```ignore
//! let factory = ComponentRegistry::new()
//!     .register(holder.clone())?
//!     .register(Arc::new(Person))?
//!     .build()?;
//! let sayers = factory.components::<dyn Sayer>();
//! ```

pub mod descriptor;
pub mod factory;
pub mod registry;

pub use descriptor::{DependencyGroup, PendingComponent};
pub use factory::ComponentFactoryImpl;
pub use registry::ComponentRegistry;

pub use inject_abstractions::{
    ComponentFactory, ComponentFactoryBuilder, ComponentRef, Dependency, FactoryAware, Inject,
    InjectError, InjectResult, Injectable, Provision, SharedFactory, TypeKey, TypedComponentFactory,
};
pub use inject_common::{ContainerConfig, DuplicatePolicy};
