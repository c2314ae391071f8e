//! 组件基础接口定义
//!
//! 提供可注入组件的 trait 以及容器内部使用的类型擦除组件引用

use crate::dependency::Dependency;
use crate::factory::{FactoryAware, SharedFactory};
use inject_common::TypeKey;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 类型擦除后的组件实例
pub type AnyComponent = Arc<dyn Any + Send + Sync>;

type CastFn = Arc<dyn Fn(&AnyComponent) -> Option<Box<dyn Any>> + Send + Sync>;

/// 组件可被绑定为的类型
///
/// 每个组件总是提供它自身的具体类型，另外可以声明它实现的接口。
/// 转换结果是装箱的 `Arc<K>`，`K` 为 [`Provision::key`]。
#[derive(Clone)]
pub struct Provision {
    key: TypeKey,
    cast: CastFn,
}

impl Provision {
    /// 组件自身的具体类型
    pub fn concrete<T: Send + Sync + 'static>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            cast: Arc::new(|instance| {
                instance
                    .clone()
                    .downcast::<T>()
                    .ok()
                    .map(|typed| Box::new(typed) as Box<dyn Any>)
            }),
        }
    }

    /// 组件 `T` 实现的接口 `I`
    ///
    /// ```ignore
    /// Provision::interface::<Person, dyn Sayer>(|c| -> Arc<dyn Sayer> { c })
    /// ```
    pub fn interface<T, I>(upcast: fn(Arc<T>) -> Arc<I>) -> Self
    where
        T: Send + Sync + 'static,
        I: ?Sized + 'static,
    {
        Self {
            key: TypeKey::interface::<I>(),
            cast: Arc::new(move |instance| {
                instance
                    .clone()
                    .downcast::<T>()
                    .ok()
                    .map(|typed| Box::new(upcast(typed)) as Box<dyn Any>)
            }),
        }
    }

    /// 提供的类型键
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// 把实例转换为 `Box<Arc<K>>`
    pub fn cast(&self, instance: &AnyComponent) -> Option<Box<dyn Any>> {
        (self.cast)(instance)
    }
}

impl fmt::Debug for Provision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provision")
            .field("key", &self.key.name())
            .field("cast", &"<function>")
            .finish()
    }
}

/// 可注入组件 trait
///
/// 通常由 `#[derive(Injectable)]` 生成，也可以手写：
///
/// ```ignore
/// impl Injectable for Holder {
///     fn dependencies() -> Vec<Dependency> {
///         vec![Dependency::new("sayer", |c: &Self| &c.sayer)]
///     }
/// }
/// ```
pub trait Injectable: Send + Sync + 'static {
    /// 需要注入的字段
    fn dependencies() -> Vec<Dependency> {
        Vec::new()
    }

    /// 组件实现的接口
    fn interfaces() -> Vec<Provision> {
        Vec::new()
    }

    /// 构建完成后需要容器句柄的组件返回自身
    ///
    /// 容器只通过这个方法发现 [`FactoryAware`] 组件。只实现 `FactoryAware`
    /// 而不覆盖本方法（或派生时缺少 `#[injectable(factory_aware)]`）的组件不会收到通知。
    fn factory_aware(&self) -> Option<&dyn FactoryAware> {
        None
    }
}

/// 已注册组件的引用
///
/// 持有实例的共享引用，以及它可被绑定为的全部类型。
#[derive(Clone)]
pub struct ComponentRef {
    key: TypeKey,
    instance: AnyComponent,
    provisions: Arc<[Provision]>,
    notify: fn(&AnyComponent, &SharedFactory),
}

impl ComponentRef {
    /// 包装组件实例
    pub fn new<T: Injectable>(instance: Arc<T>) -> Self {
        let mut provisions = vec![Provision::concrete::<T>()];
        provisions.extend(T::interfaces());

        Self {
            key: TypeKey::of::<T>(),
            instance,
            provisions: provisions.into(),
            notify: notify_factory_aware::<T>,
        }
    }

    /// 组件的具体类型
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// 组件实例
    pub fn instance(&self) -> &AnyComponent {
        &self.instance
    }

    /// 是否可以绑定到声明类型 `key`
    pub fn provides(&self, key: &TypeKey) -> bool {
        self.provisions.iter().any(|p| p.key() == key)
    }

    /// 转换为 `Box<Arc<K>>`，不提供该类型时返回 `None`
    pub fn cast(&self, key: &TypeKey) -> Option<Box<dyn Any>> {
        self.provisions
            .iter()
            .find(|p| p.key() == key)
            .and_then(|p| p.cast(&self.instance))
    }

    /// 转换为 `Arc<T>`，`T` 可以是具体类型或接口
    pub fn downcast<T: ?Sized + 'static>(&self) -> Option<Arc<T>> {
        self.cast(&TypeKey::infer::<T>())
            .and_then(|boxed| boxed.downcast::<Arc<T>>().ok())
            .map(|typed| *typed)
    }

    /// 若组件需要容器句柄，则通知它
    pub fn notify_factory(&self, factory: &SharedFactory) {
        (self.notify)(&self.instance, factory);
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRef")
            .field("key", &self.key.name())
            .field(
                "provides",
                &self.provisions.iter().map(|p| p.key().name()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

fn notify_factory_aware<T: Injectable>(instance: &AnyComponent, factory: &SharedFactory) {
    if let Some(aware) = instance.downcast_ref::<T>().and_then(Injectable::factory_aware) {
        debug!("通知组件容器句柄: {}", std::any::type_name::<T>());
        aware.set_factory(factory.clone());
    }
}
