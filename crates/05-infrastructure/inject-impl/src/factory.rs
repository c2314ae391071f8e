//! 只读组件工厂

use inject_abstractions::{ComponentFactory, ComponentRef, TypeKey};

/// 构建完成的组件工厂
///
/// 只包含已解析的组件，构建后不再修改，可在多个线程间共享查询。
#[derive(Debug)]
pub struct ComponentFactoryImpl {
    components: Vec<ComponentRef>,
}

impl ComponentFactoryImpl {
    pub(crate) fn new(components: Vec<ComponentRef>) -> Self {
        Self { components }
    }

    /// 全部已解析组件，按解析顺序排列
    pub fn component_refs(&self) -> &[ComponentRef] {
        &self.components
    }
}

impl ComponentFactory for ComponentFactoryImpl {
    fn components_of_type(&self, key: &TypeKey) -> Vec<ComponentRef> {
        self.components
            .iter()
            .filter(|component| component.provides(key))
            .cloned()
            .collect()
    }

    fn component_types(&self) -> Vec<TypeKey> {
        self.components.iter().map(|c| *c.key()).collect()
    }

    fn len(&self) -> usize {
        self.components.len()
    }
}
