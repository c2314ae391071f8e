//! 组件注册表
//!
//! 注册组件并驱动依赖解析直到不动点

use crate::descriptor::PendingComponent;
use crate::factory::ComponentFactoryImpl;
use inject_abstractions::{
    ComponentFactory, ComponentFactoryBuilder, ComponentRef, InjectError, InjectResult, Injectable,
    SharedFactory, TypeKey,
};
use inject_common::{ContainerConfig, DuplicatePolicy};
use std::any::TypeId;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// 注册方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Registration {
    /// 共享引用，之后仍可注入
    Shared,
    /// 按值，注册后无法再注入
    Value,
}

/// 组件注册表
///
/// 组件要么处于待解析状态（还缺少至少一个依赖），要么处于已解析状态。
/// 每次注册都会先用已解析的组件尝试解析新组件；新组件一旦解析完成，
/// 就会以它为起点继续解析其它待解析组件，直到没有组件可以再被解析。
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    /// 容器配置
    config: ContainerConfig,
    /// 待解析组件，按注册顺序排列
    pending: Vec<PendingComponent>,
    /// 已解析组件，按解析顺序排列
    resolved: Vec<ComponentRef>,
    /// 已注册的具体类型
    registered: HashSet<TypeId>,
}

impl ComponentRegistry {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建注册表
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// 待解析组件数量
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// 已解析组件数量
    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    /// 组件 `T` 是否已解析
    pub fn is_resolved<T: 'static>(&self) -> bool {
        let key = TypeKey::of::<T>();
        self.resolved.iter().any(|c| c.key() == &key)
    }

    /// 组件 `T` 是否在等待依赖
    pub fn is_pending<T: 'static>(&self) -> bool {
        let key = TypeKey::of::<T>();
        self.pending.iter().any(|p| p.component().key() == &key)
    }

    /// 待解析组件的具体类型
    pub fn pending_types(&self) -> Vec<TypeKey> {
        self.pending.iter().map(|p| *p.component().key()).collect()
    }

    fn admit(mut self, mut pending: PendingComponent, registration: Registration) -> InjectResult<Self> {
        let key = *pending.component().key();

        if !self.registered.insert(key.id()) {
            return match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    error!("组件重复注册: {}", key);
                    Err(InjectError::DuplicateComponent {
                        type_name: key.name().to_string(),
                    })
                }
                DuplicatePolicy::KeepFirst => {
                    warn!("组件重复注册，保留第一次注册的实例: {}", key);
                    Ok(self)
                }
            };
        }

        debug!("注册组件: {} ({:?})", key, registration);

        // 先到先得：分组被某个组件满足后即被移除，之后的组件不再参与
        if !pending.is_resolved() {
            for candidate in &self.resolved {
                if pending.when_new_resolved_component(candidate)? {
                    break;
                }
            }
        }

        if pending.is_resolved() {
            let component = pending.into_component();
            self.mark_resolved(component.clone());
            self.propagate(component)?;
        } else if registration == Registration::Value {
            let missing = pending.describe_unresolved();
            error!("按值注册的组件 {} 仍有未解析的依赖: [{}]", key, missing);
            return Err(InjectError::UnresolvedValue {
                component: key.name().to_string(),
                missing,
            });
        } else {
            debug!("组件等待依赖: {} 缺少 [{}]", key, pending.describe_unresolved());
            self.pending.push(pending);
        }

        Ok(self)
    }

    fn mark_resolved(&mut self, component: ComponentRef) {
        debug!("组件解析完成: {}", component.key());
        self.resolved.push(component);
    }

    /// 以新解析的组件为起点，逐个尝试解析待解析组件
    fn propagate(&mut self, seed: ComponentRef) -> InjectResult<()> {
        let mut worklist = VecDeque::from([seed]);

        while let Some(candidate) = worklist.pop_front() {
            let mut index = 0;
            while index < self.pending.len() {
                if self.pending[index].when_new_resolved_component(&candidate)? {
                    let component = self.pending.remove(index).into_component();
                    self.mark_resolved(component.clone());
                    worklist.push_back(component);
                } else {
                    index += 1;
                }
            }
        }

        Ok(())
    }

    fn check_resolved(&self) -> InjectResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let mut pending: Vec<&PendingComponent> = self.pending.iter().collect();
        pending.sort_by_key(|p| p.component().key().name());

        let details = pending
            .iter()
            .map(|p| {
                format!(
                    "  {} 未解析的依赖: [{}]",
                    p.component().key(),
                    p.describe_unresolved()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        error!("存在 {} 个未解析的组件:\n{}", pending.len(), details);
        Err(InjectError::UnresolvedDependencies { details })
    }
}

impl ComponentFactoryBuilder for ComponentRegistry {
    type Factory = ComponentFactoryImpl;

    fn register<T: Injectable>(self, instance: Arc<T>) -> InjectResult<Self> {
        let pending = PendingComponent::new(instance);
        self.admit(pending, Registration::Shared)
    }

    fn register_value<T: Injectable>(self, instance: T) -> InjectResult<Self> {
        let pending = PendingComponent::new(Arc::new(instance));
        self.admit(pending, Registration::Value)
    }

    fn build(self) -> InjectResult<Arc<Self::Factory>> {
        self.check_resolved()?;

        let factory = Arc::new(ComponentFactoryImpl::new(self.resolved));

        if self.config.notify_factory_aware {
            let shared: SharedFactory = factory.clone();
            for component in factory.component_refs() {
                component.notify_factory(&shared);
            }
        }

        info!("组件工厂构建完成，共 {} 个组件", factory.len());
        Ok(factory)
    }
}
