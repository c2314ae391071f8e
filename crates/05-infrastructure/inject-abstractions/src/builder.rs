//! 组件工厂构建器抽象接口

use crate::component::Injectable;
use crate::factory::ComponentFactory;
use inject_common::InjectResult;
use std::sync::Arc;

/// 组件工厂构建器 trait
///
/// 按顺序注册组件，最后校验并构建只读的组件工厂。
pub trait ComponentFactoryBuilder: Sized {
    /// 关联的工厂类型
    type Factory: ComponentFactory + 'static;

    /// 注册共享引用的组件，之后仍可向它注入依赖
    fn register<T: Injectable>(self, instance: Arc<T>) -> InjectResult<Self>;

    /// 按值注册组件，注册时必须已能解析全部依赖
    fn register_value<T: Injectable>(self, instance: T) -> InjectResult<Self>;

    /// 校验并构建组件工厂
    fn build(self) -> InjectResult<Arc<Self::Factory>>;
}
