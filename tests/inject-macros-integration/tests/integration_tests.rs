//! inject-macros 派生宏集成测试

use inject_abstractions::{
    ComponentRef, FactoryAware, Inject, Injectable, SharedFactory, TypeKey,
};
use inject_macros::Injectable;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub trait Sayer: Send + Sync {
    fn say(&self) -> String;
}

pub trait Walker: Send + Sync {
    fn walk(&self) -> String;
}

#[derive(Debug, Injectable)]
#[injectable(provides(dyn Sayer, dyn Walker))]
pub struct Person {
    name: String,
}

impl Sayer for Person {
    fn say(&self) -> String {
        format!("{} say", self.name)
    }
}

impl Walker for Person {
    fn walk(&self) -> String {
        format!("{} walk", self.name)
    }
}

#[derive(Default, Injectable)]
pub struct Holder {
    #[inject = "tmp"]
    sayer: Inject<dyn Sayer>,
    #[inject]
    walker: Inject<dyn Walker>,
    #[inject]
    person: Inject<Person>,
    // 未标记的字段不参与注入
    label: Inject<Person>,
}

#[derive(Default, Injectable)]
#[injectable(factory_aware)]
pub struct Watcher {
    notified: AtomicUsize,
}

impl FactoryAware for Watcher {
    fn set_factory(&self, _factory: SharedFactory) {
        self.notified.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_marked_fields_become_dependencies() {
    let dependencies = Holder::dependencies();
    let fields: Vec<&str> = dependencies.iter().map(|d| d.field()).collect();

    assert_eq!(fields, vec!["sayer", "walker", "person"]);
    assert_eq!(dependencies[0].key(), &TypeKey::interface::<dyn Sayer>());
    assert_eq!(dependencies[1].key(), &TypeKey::interface::<dyn Walker>());
    assert_eq!(dependencies[2].key(), &TypeKey::of::<Person>());
    assert!(dependencies.iter().all(|d| d.owner() == &TypeKey::of::<Holder>()));
}

#[test]
fn test_provides_declares_interfaces() {
    let interfaces = Person::interfaces();
    let keys: Vec<TypeKey> = interfaces.iter().map(|p| *p.key()).collect();

    assert_eq!(
        keys,
        vec![TypeKey::interface::<dyn Sayer>(), TypeKey::interface::<dyn Walker>()]
    );
    assert!(Holder::interfaces().is_empty());
}

#[test]
fn test_component_ref_casts_through_generated_provisions() {
    let person = ComponentRef::new(Arc::new(Person {
        name: "jack".to_string(),
    }));

    assert!(person.provides(&TypeKey::of::<Person>()));
    assert_eq!(person.downcast::<dyn Sayer>().unwrap().say(), "jack say");
    assert_eq!(person.downcast::<dyn Walker>().unwrap().walk(), "jack walk");
}

#[test]
fn test_generated_dependencies_bind_fields() {
    let holder = ComponentRef::new(Arc::new(Holder::default()));
    let person = ComponentRef::new(Arc::new(Person {
        name: "rose".to_string(),
    }));

    for dependency in Holder::dependencies() {
        let value = person.cast(dependency.key()).unwrap();
        dependency.bind(holder.instance(), value).unwrap();
    }

    let holder = holder.downcast::<Holder>().unwrap();
    assert_eq!(holder.sayer.get().unwrap().say(), "rose say");
    assert_eq!(holder.walker.get().unwrap().walk(), "rose walk");
    assert_eq!(holder.person.get().unwrap().name, "rose");
    assert!(!holder.label.is_bound());
}

#[test]
fn test_factory_aware_only_when_requested() {
    let watcher = Watcher::default();
    let holder = Holder::default();

    assert!(watcher.factory_aware().is_some());
    assert!(holder.factory_aware().is_none());
}
