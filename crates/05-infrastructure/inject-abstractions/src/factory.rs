//! 组件工厂抽象接口
//!
//! 构建完成后的只读组件查询接口

use crate::component::ComponentRef;
use inject_common::{InjectError, InjectResult, TypeKey};
use std::sync::Arc;
use tracing::error;

/// 共享的组件工厂句柄
pub type SharedFactory = Arc<dyn ComponentFactory>;

/// 组件工厂 trait
///
/// 对已解析组件的只读查询，可以在多个线程间共享。
pub trait ComponentFactory: Send + Sync {
    /// 获取所有可绑定到 `key` 的组件
    ///
    /// 组件的具体类型等于 `key`，或者组件声明实现了接口 `key`。
    /// 没有匹配时返回空列表。
    fn components_of_type(&self, key: &TypeKey) -> Vec<ComponentRef>;

    /// 获取所有实现接口 `key` 的组件
    fn components_of_interface(&self, key: &TypeKey) -> InjectResult<Vec<ComponentRef>> {
        if !key.is_interface() {
            error!("期望接口类型，实际为: {}", key);
            return Err(InjectError::NotAnInterface {
                type_name: key.name().to_string(),
            });
        }
        Ok(self.components_of_type(key))
    }

    /// 所有已解析组件的具体类型，按解析顺序排列
    fn component_types(&self) -> Vec<TypeKey>;

    /// 已解析组件数量
    fn len(&self) -> usize;

    /// 是否没有任何组件
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// [`ComponentFactory`] 的强类型辅助 trait
pub trait TypedComponentFactory {
    /// 获取所有可绑定到 `T` 的组件
    fn components<T: ?Sized + 'static>(&self) -> Vec<Arc<T>>;

    /// 解析唯一的 `T` 组件
    ///
    /// 没有匹配时返回 `Ok(None)`，匹配到多个时返回错误。
    fn resolve<T: ?Sized + 'static>(&self) -> InjectResult<Option<Arc<T>>>;

    /// 解析唯一的 `T` 组件并写入 `target`
    ///
    /// 没有匹配时返回 `Ok(false)` 且不修改 `target`。
    fn resolve_one<T: ?Sized + 'static>(&self, target: &mut Option<Arc<T>>) -> InjectResult<bool>;
}

impl<F: ComponentFactory + ?Sized> TypedComponentFactory for F {
    fn components<T: ?Sized + 'static>(&self) -> Vec<Arc<T>> {
        self.components_of_type(&TypeKey::infer::<T>())
            .iter()
            .filter_map(ComponentRef::downcast::<T>)
            .collect()
    }

    fn resolve<T: ?Sized + 'static>(&self) -> InjectResult<Option<Arc<T>>> {
        let key = TypeKey::infer::<T>();
        let matched = self.components_of_type(&key);
        match matched.as_slice() {
            [] => Ok(None),
            [single] => Ok(single.downcast::<T>()),
            many => {
                let candidates = many
                    .iter()
                    .map(|c| c.key().name())
                    .collect::<Vec<_>>()
                    .join(", ");
                error!("匹配到多个组件: {}, 候选: [{}]", key, candidates);
                Err(InjectError::AmbiguousComponent {
                    type_name: key.name().to_string(),
                    candidates,
                })
            }
        }
    }

    fn resolve_one<T: ?Sized + 'static>(&self, target: &mut Option<Arc<T>>) -> InjectResult<bool> {
        match self.resolve::<T>()? {
            Some(component) => {
                *target = Some(component);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// 需要容器句柄的组件
///
/// 容器构建完成、全部依赖都已解析后调用一次。
///
/// 只实现本 trait 不够：组件还必须在 [`Injectable::factory_aware`](crate::Injectable::factory_aware)
/// 中返回自身，派生宏通过 `#[injectable(factory_aware)]` 生成该实现。
pub trait FactoryAware: Send + Sync {
    /// 接收容器句柄
    fn set_factory(&self, factory: SharedFactory);
}
