//! 类型元数据
//!
//! 提供运行时类型标识，用作依赖分组和组件查找的键

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 类型种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// 具体类型（结构体、枚举等）
    Concrete,
    /// 接口类型（`dyn Trait`）
    Interface,
}

/// 类型键
///
/// 在运行时代表一个具体类型或接口类型。相等性和哈希只由 `TypeId` 决定，
/// 名称仅用于诊断输出。
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
    kind: TypeKind,
}

impl TypeKey {
    /// 具体类型的类型键
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            kind: TypeKind::Concrete,
        }
    }

    /// 接口类型的类型键，`T` 应为 `dyn Trait`
    ///
    /// 种类与 [`TypeKey::infer`] 一样由类型本身决定，
    /// 对具体类型调用得到的仍是 [`TypeKind::Concrete`] 键。
    pub fn interface<T: ?Sized + 'static>() -> Self {
        Self::infer::<T>()
    }

    /// 根据类型名称推断种类的类型键
    ///
    /// 用于泛型参数可能是具体类型也可能是 `dyn Trait` 的场景。
    ///
    /// 种类取自 `std::any::type_name` 的 `dyn ` 前缀，该输出只保证可用于诊断。
    /// 因此种类只用于接口查询的参数校验和诊断输出，匹配和相等性始终只看 `TypeId`。
    pub fn infer<T: ?Sized + 'static>() -> Self {
        let name = std::any::type_name::<T>();
        let kind = if name.starts_with("dyn ") {
            TypeKind::Interface
        } else {
            TypeKind::Concrete
        };
        Self {
            id: TypeId::of::<T>(),
            name,
            kind,
        }
    }

    /// 类型ID
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// 完整类型名称（包含模块路径）
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 类型种类
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// 是否为接口类型
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// 获取简短的类型名称（不包含模块路径）
    ///
    /// `dyn a::b::Sayer` 会得到 `dyn Sayer`。
    pub fn short_name(&self) -> String {
        let (prefix, path) = match self.name.strip_prefix("dyn ") {
            Some(rest) => ("dyn ", rest),
            None => ("", self.name),
        };
        // 泛型参数里的路径保留原样
        let head = path.split('<').next().unwrap_or(path);
        let short = head.rsplit("::").next().unwrap_or(head);
        format!("{}{}{}", prefix, short, &path[head.len()..])
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
