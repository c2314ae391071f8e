use inject_abstractions::{FactoryAware, Inject, Injectable, SharedFactory};
use inject_macros::Injectable;

trait Sayer: Send + Sync {}

#[derive(Default, Injectable)]
#[injectable(provides(dyn Sayer), factory_aware)]
struct Holder {
    #[inject = "tmp"]
    sayer: Inject<dyn Sayer>,
    label: String,
}

impl Sayer for Holder {}

impl FactoryAware for Holder {
    fn set_factory(&self, _factory: SharedFactory) {}
}

fn main() {
    let holder = Holder::default();
    assert_eq!(Holder::dependencies().len(), 1);
    assert_eq!(Holder::interfaces().len(), 1);
    assert!(holder.factory_aware().is_some());
    assert!(holder.label.is_empty());
}
