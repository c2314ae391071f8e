//! 派生宏与组件注册表的端到端测试

use inject_abstractions::{
    ComponentFactory, ComponentFactoryBuilder, FactoryAware, Inject, InjectError, SharedFactory,
    TypeKey, TypedComponentFactory,
};
use inject_impl::{ComponentRegistry, ContainerConfig, DuplicatePolicy};
use inject_macros::Injectable;
use once_cell::sync::OnceCell;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub trait Sayer: Send + Sync {
    fn say(&self) -> String;
}

pub trait Holding: Send + Sync {
    fn hold(&self) -> String;
}

#[derive(Debug, Default, Injectable)]
#[injectable(provides(dyn Sayer))]
pub struct Person;

impl Sayer for Person {
    fn say(&self) -> String {
        "person say".to_string()
    }
}

#[derive(Debug, Injectable)]
#[injectable(provides(dyn Sayer))]
pub struct Male {
    name: String,
}

impl Sayer for Male {
    fn say(&self) -> String {
        format!("male say -> {}", self.name)
    }
}

#[derive(Default, Injectable)]
#[injectable(provides(dyn Holding))]
pub struct SayerHolder {
    #[inject = "tmp"]
    sayer: Inject<dyn Sayer>,
}

impl Holding for SayerHolder {
    fn hold(&self) -> String {
        match self.sayer.get() {
            Some(sayer) => format!("hold sayer: {}", sayer.say()),
            None => "hold nothing".to_string(),
        }
    }
}

#[derive(Default, Injectable)]
#[injectable(factory_aware)]
pub struct Directory {
    #[inject]
    holder: Inject<dyn Holding>,
    factory: OnceCell<SharedFactory>,
}

impl FactoryAware for Directory {
    fn set_factory(&self, factory: SharedFactory) {
        let _ = self.factory.set(factory);
    }
}

#[test]
fn test_components_of_interface_and_resolve_one() -> anyhow::Result<()> {
    init_tracing();

    let holder = Arc::new(SayerHolder::default());
    let config = ContainerConfig::default().with_duplicate_policy(DuplicatePolicy::KeepFirst);

    let factory = ComponentRegistry::with_config(config)
        .register(holder.clone())?
        .register(Arc::new(Person))?
        .register(Arc::new(Male {
            name: "akun".to_string(),
        }))?
        // 同一具体类型再次注册时保留第一次的实例
        .register_value(Person)?
        .build()?;

    let sayers = factory.components_of_interface(&TypeKey::interface::<dyn Sayer>())?;
    assert_eq!(sayers.len(), 2);
    assert_eq!(sayers[1].downcast::<dyn Sayer>().unwrap().say(), "male say -> akun");

    let mut male: Option<Arc<Male>> = None;
    assert!(factory.resolve_one(&mut male)?);
    assert_eq!(male.unwrap().name, "akun");

    let mut person: Option<Arc<Person>> = None;
    assert!(factory.resolve_one(&mut person)?);

    let mut holding: Option<Arc<dyn Holding>> = None;
    assert!(factory.resolve_one(&mut holding)?);
    assert_eq!(holding.unwrap().hold(), "hold sayer: person say");
    assert!(holder.sayer.is_bound());

    // 接口有两个实现时无法唯一解析
    let mut sayer: Option<Arc<dyn Sayer>> = None;
    let err = factory.resolve_one(&mut sayer).unwrap_err();
    assert!(matches!(err, InjectError::AmbiguousComponent { .. }));
    assert!(sayer.is_none());

    Ok(())
}

#[test]
fn test_unregistered_type_is_not_resolved() -> anyhow::Result<()> {
    init_tracing();

    let factory = ComponentRegistry::new().register_value(Person)?.build()?;

    let mut male: Option<Arc<Male>> = None;
    assert!(!factory.resolve_one(&mut male)?);
    assert!(male.is_none());
    Ok(())
}

#[test]
fn test_components_of_interface_rejects_concrete_key() -> anyhow::Result<()> {
    init_tracing();

    let factory = ComponentRegistry::new().register_value(Person)?.build()?;
    let err = factory
        .components_of_interface(&TypeKey::of::<Person>())
        .unwrap_err();

    assert!(matches!(err, InjectError::NotAnInterface { .. }));
    Ok(())
}

#[test]
fn test_chain_resolves_regardless_of_order() -> anyhow::Result<()> {
    init_tracing();

    let directory = Arc::new(Directory::default());
    let holder = Arc::new(SayerHolder::default());

    let factory = ComponentRegistry::new()
        .register(directory.clone())?
        .register(holder.clone())?
        .register(Arc::new(Male {
            name: "bob".to_string(),
        }))?
        .build()?;

    assert_eq!(factory.len(), 3);
    assert_eq!(
        directory.holder.get().unwrap().hold(),
        "hold sayer: male say -> bob"
    );

    // 构建完成后获得的容器句柄可以继续查询
    let handle = directory.factory.get().unwrap();
    assert_eq!(handle.len(), 3);
    assert_eq!(handle.components::<dyn Holding>().len(), 1);
    Ok(())
}

#[test]
fn test_missing_dependency_fails_build() {
    init_tracing();

    let err = ComponentRegistry::new()
        .register(Arc::new(Directory::default()))
        .and_then(|registry| registry.register(Arc::new(SayerHolder::default())))
        .and_then(ComponentFactoryBuilder::build)
        .unwrap_err();

    match err {
        InjectError::UnresolvedDependencies { details } => {
            assert!(details.contains("SayerHolder"));
            assert!(details.contains("sayer"));
            // 依赖链上游未解析时下游同样列出
            assert!(details.contains("Directory"));
            assert!(details.contains("holder"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_value_with_missing_dependency_rejected() {
    init_tracing();

    let err = ComponentRegistry::new()
        .register_value(SayerHolder::default())
        .unwrap_err();

    assert!(matches!(err, InjectError::UnresolvedValue { .. }));
}

#[test]
fn test_registry_from_toml_config() -> anyhow::Result<()> {
    init_tracing();

    let config = ContainerConfig::from_toml_str(
        r#"
        duplicate_policy = "keep_first"
        notify_factory_aware = false
        "#,
    )?;
    let directory = Arc::new(Directory::default());

    let factory = ComponentRegistry::with_config(config)
        .register_value(Person)?
        .register_value(Person)?
        .register(Arc::new(SayerHolder::default()))?
        .register(directory.clone())?
        .build()?;

    assert_eq!(factory.len(), 3);
    assert!(directory.holder.is_bound());
    assert!(directory.factory.get().is_none());
    Ok(())
}
