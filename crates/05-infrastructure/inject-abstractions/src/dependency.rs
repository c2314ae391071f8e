//! 依赖字段抽象
//!
//! [`Inject`] 是组件结构体上的注入槽位，[`Dependency`] 描述一个需要注入的字段。

use crate::component::AnyComponent;
use inject_common::{InjectError, InjectResult, TypeKey};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 注入槽位
///
/// 只能写入一次。组件以共享引用注册后，容器通过它把依赖绑定进来；
/// `T` 可以是具体类型，也可以是 `dyn Trait`。
pub struct Inject<T: ?Sized> {
    cell: OnceCell<Arc<T>>,
}

impl<T: ?Sized> Inject<T> {
    /// 创建空槽位
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// 创建已绑定的槽位
    pub fn bound(value: Arc<T>) -> Self {
        let slot = Self::new();
        let _ = slot.cell.set(value);
        slot
    }

    /// 获取已绑定的依赖
    pub fn get(&self) -> Option<&Arc<T>> {
        self.cell.get()
    }

    /// 是否已绑定
    pub fn is_bound(&self) -> bool {
        self.cell.get().is_some()
    }

    /// 绑定依赖，槽位已被绑定时原样返回传入的值
    pub fn set(&self, value: Arc<T>) -> Result<(), Arc<T>> {
        self.cell.set(value)
    }
}

impl<T: ?Sized> Default for Inject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> fmt::Debug for Inject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_bound() { "bound" } else { "unbound" };
        write!(f, "Inject<{}>({})", TypeKey::infer::<T>().short_name(), state)
    }
}

type BindFn = Box<dyn Fn(&AnyComponent, Box<dyn Any>) -> InjectResult<()> + Send + Sync>;
type BoundFn = Box<dyn Fn(&AnyComponent) -> bool + Send + Sync>;

/// 依赖字段
///
/// 由字段名、声明类型和写入闭包组成。声明类型是查找键，
/// 实际绑定的组件可以是该类型本身，也可以是实现了该接口的组件。
pub struct Dependency {
    owner: TypeKey,
    field: &'static str,
    key: TypeKey,
    bind: BindFn,
    bound: BoundFn,
}

impl Dependency {
    /// 为组件 `T` 上的 `Inject<U>` 字段创建依赖描述
    ///
    /// ```ignore
    /// Dependency::new("sayer", |c: &Holder| &c.sayer)
    /// ```
    pub fn new<T, U>(field: &'static str, slot: fn(&T) -> &Inject<U>) -> Self
    where
        T: Send + Sync + 'static,
        U: ?Sized + 'static,
    {
        let bind: BindFn = Box::new(move |owner, value| {
            let owner = owner.downcast_ref::<T>().ok_or_else(|| {
                InjectError::type_mismatch(std::any::type_name::<T>(), "<unknown owner>")
            })?;
            let value = value.downcast::<Arc<U>>().map_err(|_| {
                InjectError::type_mismatch(std::any::type_name::<Arc<U>>(), "<unknown value>")
            })?;
            slot(owner).set(*value).map_err(|_| {
                InjectError::field_not_writable(std::any::type_name::<T>(), field)
            })
        });

        let bound: BoundFn = Box::new(move |owner| {
            owner
                .downcast_ref::<T>()
                .is_some_and(|owner| slot(owner).is_bound())
        });

        Self {
            owner: TypeKey::of::<T>(),
            field,
            key: TypeKey::infer::<U>(),
            bind,
            bound,
        }
    }

    /// 所属组件类型
    pub fn owner(&self) -> &TypeKey {
        &self.owner
    }

    /// 字段名称
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// 声明类型
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// 把 `value`（`Box<Arc<声明类型>>`）写入 `owner` 的字段
    pub fn bind(&self, owner: &AnyComponent, value: Box<dyn Any>) -> InjectResult<()> {
        (self.bind)(owner, value)
    }

    /// `owner` 的该字段是否已被绑定
    pub fn is_bound(&self, owner: &AnyComponent) -> bool {
        (self.bound)(owner)
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependency")
            .field("owner", &self.owner.name())
            .field("field", &self.field)
            .field("key", &self.key.name())
            .field("bind", &"<function>")
            .field("bound", &"<function>")
            .finish()
    }
}
