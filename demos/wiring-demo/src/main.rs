//! # 字段注入演示应用
//!
//! 按任意顺序注册一组组件，由容器完成字段注入后查询组件。

use clap::Parser;
use inject_abstractions::{
    ComponentFactory, ComponentFactoryBuilder, FactoryAware, Inject, SharedFactory, TypeKey,
    TypedComponentFactory,
};
use inject_impl::{ComponentRegistry, ContainerConfig};
use inject_macros::Injectable;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "wiring-demo")]
#[command(about = "字段注入容器演示")]
struct Args {
    /// 容器配置文件路径（.toml 或 .json）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别，未设置 RUST_LOG 时生效
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// 数据源
trait Storage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
}

/// 问候服务
trait Greeter: Send + Sync {
    fn greet(&self, user: &str) -> String;
}

#[derive(Debug, Injectable)]
#[injectable(provides(dyn Storage))]
struct MemoryStorage {
    greeting: String,
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        (key == "greeting").then(|| self.greeting.clone())
    }
}

#[derive(Default, Injectable)]
#[injectable(provides(dyn Greeter))]
struct GreetingService {
    #[inject]
    storage: Inject<dyn Storage>,
}

impl Greeter for GreetingService {
    fn greet(&self, user: &str) -> String {
        let greeting = self
            .storage
            .get()
            .and_then(|storage| storage.load("greeting"))
            .unwrap_or_else(|| "hello".to_string());
        format!("{greeting}, {user}")
    }
}

#[derive(Default, Injectable)]
#[injectable(factory_aware)]
struct Frontend {
    #[inject]
    greeter: Inject<dyn Greeter>,
    #[inject]
    storage: Inject<dyn Storage>,
    factory: OnceCell<SharedFactory>,
}

impl FactoryAware for Frontend {
    fn set_factory(&self, factory: SharedFactory) {
        let _ = self.factory.set(factory);
    }
}

impl Frontend {
    fn handle(&self, user: &str) -> String {
        self.greeter
            .get()
            .map_or_else(|| "未就绪".to_string(), |greeter| greeter.greet(user))
    }

    fn component_count(&self) -> usize {
        self.factory.get().map_or(0, |factory| factory.len())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(&args.log_level);
    info!("启动字段注入演示应用");

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ContainerConfig::default(),
    };
    info!("容器配置: {:?}", config);

    let frontend = Arc::new(Frontend::default());

    // 注册顺序与依赖顺序相反，由容器在注册过程中完成解析
    let factory = ComponentRegistry::with_config(config)
        .register(frontend.clone())?
        .register(Arc::new(GreetingService::default()))?
        .register_value(MemoryStorage {
            greeting: "你好".to_string(),
        })?
        .build()?;

    info!("{}", frontend.handle("lorn"));
    info!(
        "Frontend 共享存储: {}",
        frontend.storage.get().and_then(|s| s.load("greeting")).is_some()
    );
    info!("Frontend 持有的容器共 {} 个组件", frontend.component_count());

    for key in factory.component_types() {
        info!("已注册组件: {}", key.short_name());
    }

    let storages = factory.components_of_interface(&TypeKey::interface::<dyn Storage>())?;
    info!("Storage 实现数量: {}", storages.len());

    if let Some(greeter) = factory.resolve::<dyn Greeter>()? {
        info!("直接查询: {}", greeter.greet("demo"));
    }

    info!("演示完成");
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(path: &Path) -> anyhow::Result<ContainerConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => ContainerConfig::from_json_str(&content)?,
        _ => ContainerConfig::from_toml_str(&content)?,
    };
    info!("从 {} 加载容器配置", path.display());
    Ok(config)
}
