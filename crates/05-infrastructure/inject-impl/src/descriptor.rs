//! 待解析组件描述符
//!
//! 注册时根据组件的依赖字段计算一次依赖分组，之后只会随依赖被满足而移除分组。

use inject_abstractions::{ComponentRef, Dependency, InjectError, InjectResult, Injectable, TypeKey};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// 依赖分组
///
/// 同一组件上声明类型相同的全部字段，它们总是在同一步被绑定。
#[derive(Debug)]
pub struct DependencyGroup {
    key: TypeKey,
    fields: Vec<Dependency>,
}

impl DependencyGroup {
    fn new(key: TypeKey) -> Self {
        Self {
            key,
            fields: Vec::new(),
        }
    }

    /// 声明类型
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// 分组内的字段名称
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(Dependency::field).collect()
    }

    /// 绑定分组内的全部字段
    ///
    /// 写入前先检查每个字段，任一字段不可写时整组都不写入。
    fn bind(&self, owner: &ComponentRef, candidate: &ComponentRef) -> InjectResult<()> {
        if let Some(field) = self.fields.iter().find(|f| f.is_bound(owner.instance())) {
            return Err(InjectError::field_not_writable(owner.key().name(), field.field()));
        }

        for field in &self.fields {
            let value = candidate.cast(&self.key).ok_or_else(|| {
                InjectError::type_mismatch(self.key.name(), candidate.key().name())
            })?;
            field.bind(owner.instance(), value)?;
        }
        Ok(())
    }
}

/// 待解析组件
#[derive(Debug)]
pub struct PendingComponent {
    component: ComponentRef,
    groups: HashMap<TypeKey, DependencyGroup>,
}

impl PendingComponent {
    /// 包装组件实例并计算依赖分组
    pub fn new<T: Injectable>(instance: Arc<T>) -> Self {
        let mut groups: HashMap<TypeKey, DependencyGroup> = HashMap::new();
        for dependency in T::dependencies() {
            let key = *dependency.key();
            groups
                .entry(key)
                .or_insert_with(|| DependencyGroup::new(key))
                .fields
                .push(dependency);
        }

        Self {
            component: ComponentRef::new(instance),
            groups,
        }
    }

    /// 被包装的组件
    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    /// 取出被包装的组件
    pub fn into_component(self) -> ComponentRef {
        self.component
    }

    /// 是否已解析全部依赖
    pub fn is_resolved(&self) -> bool {
        self.groups.is_empty()
    }

    /// 有新组件完成解析时调用
    ///
    /// 把 `candidate` 绑定到它能满足的每个分组的全部字段上并移除这些分组，
    /// 返回描述符此时是否已完全解析。
    pub fn when_new_resolved_component(&mut self, candidate: &ComponentRef) -> InjectResult<bool> {
        let matched: Vec<TypeKey> = self
            .groups
            .keys()
            .filter(|key| candidate.provides(key))
            .copied()
            .collect();

        for key in matched {
            if let Some(group) = self.groups.get(&key) {
                group.bind(&self.component, candidate)?;
                debug!(
                    "绑定依赖: {}.{:?} <- {}",
                    self.component.key(),
                    group.field_names(),
                    candidate.key()
                );
            }
            self.groups.remove(&key);
        }

        Ok(self.is_resolved())
    }

    /// 未解析的依赖分组，按类型名称排序
    pub fn unresolved_dependencies(&self) -> Vec<&DependencyGroup> {
        let mut groups: Vec<&DependencyGroup> = self.groups.values().collect();
        groups.sort_by_key(|group| group.key.name());
        groups
    }

    /// 未解析依赖的简要描述，用于诊断输出
    pub fn describe_unresolved(&self) -> String {
        self.unresolved_dependencies()
            .iter()
            .map(|group| format!("{} ({})", group.key, group.field_names().join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
