//! # Inject Macros
//!
//! 这个 crate 提供了在编译时扫描依赖字段的过程宏。
//!
//! ## 核心宏
//!
//! - [`Injectable`](derive@Injectable) - 为结构体实现 `Injectable` trait
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use inject_abstractions::Inject;
//! use inject_macros::Injectable;
//!
//! pub trait Sayer: Send + Sync {
//!     fn say(&self) -> String;
//! }
//!
//! #[derive(Default, Injectable)]
//! pub struct Holder {
//!     #[inject = "sayer"]
//!     sayer: Inject<dyn Sayer>,
//! }
//!
//! #[derive(Injectable)]
//! #[injectable(provides(dyn Sayer))]
//! pub struct Person;
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod utils;

/// 可注入组件派生宏
///
/// 扫描带有 `#[inject]` 标记的字段并生成 `Injectable` 实现。
/// 标记的值（`#[inject = "..."]` 或 `#[inject("...")]`）只作说明用途，匹配只看字段的声明类型。
///
/// # 结构体参数
///
/// - `provides(dyn A, dyn B)` - 组件实现的接口，可以被绑定到声明为这些接口的字段
/// - `factory_aware` - 组件实现了 `FactoryAware`，构建完成后接收容器句柄
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Injectable)]
/// #[injectable(provides(dyn Sayer), factory_aware)]
/// pub struct Greeter {
///     #[inject]
///     repository: Inject<dyn Repository>,
/// }
/// ```
#[proc_macro_derive(Injectable, attributes(inject, injectable))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
