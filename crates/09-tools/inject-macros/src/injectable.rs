//! 可注入组件派生宏实现

use crate::utils::{extract_generic_type, field_has_attribute, is_inject_type};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parenthesized, punctuated::Punctuated, spanned::Spanned, Data, DeriveInput, Error, Fields,
    Ident, Result, Token, Type,
};

/// 结构体级参数
#[derive(Default)]
pub struct InjectableArgs {
    /// 组件实现的接口
    pub provides: Vec<Type>,
    /// 是否需要容器句柄
    pub factory_aware: bool,
}

impl InjectableArgs {
    /// 从 `#[injectable(...)]` 属性解析参数
    pub fn from_input(input: &DeriveInput) -> Result<Self> {
        let mut args = Self::default();

        for attr in &input.attrs {
            if !attr.path().is_ident("injectable") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("provides") {
                    let content;
                    parenthesized!(content in meta.input);
                    let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                    args.provides.extend(types);
                    Ok(())
                } else if meta.path.is_ident("factory_aware") {
                    args.factory_aware = true;
                    Ok(())
                } else {
                    Err(meta.error("未知的 injectable 参数，支持 provides(...) 和 factory_aware"))
                }
            })?;
        }

        Ok(args)
    }
}

/// 带有 `#[inject]` 标记的字段
pub struct InjectField {
    /// 字段名
    pub ident: Ident,
    /// 声明类型（`Inject<T>` 中的 `T`）
    pub target: Type,
}

/// 收集带有 `#[inject]` 标记的字段
pub fn collect_inject_fields(input: &DeriveInput) -> Result<Vec<InjectField>> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new(
            input.ident.span(),
            "Injectable 只能用于结构体",
        ));
    };

    let named = match &data.fields {
        Fields::Named(named) => named,
        Fields::Unit => return Ok(Vec::new()),
        Fields::Unnamed(unnamed) => {
            if unnamed.unnamed.iter().any(|f| field_has_attribute(f, "inject")) {
                return Err(Error::new(
                    unnamed.span(),
                    "#[inject] 只能用于具名字段",
                ));
            }
            return Ok(Vec::new());
        }
    };

    let mut fields = Vec::new();
    for field in &named.named {
        if !field_has_attribute(field, "inject") {
            continue;
        }
        let target = if is_inject_type(&field.ty) {
            extract_generic_type(&field.ty)
        } else {
            None
        };
        let Some(target) = target else {
            return Err(Error::new(
                field.ty.span(),
                "#[inject] 字段必须是 Inject<T> 类型",
            ));
        };
        if let Some(ident) = &field.ident {
            fields.push(InjectField {
                ident: ident.clone(),
                target: target.clone(),
            });
        }
    }

    Ok(fields)
}

/// 实现 #[derive(Injectable)] 宏
pub fn derive_injectable_impl(input: &DeriveInput) -> Result<TokenStream> {
    let args = InjectableArgs::from_input(input)?;
    let fields = collect_inject_fields(input)?;

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let dependencies = fields.iter().map(|field| {
        let ident = &field.ident;
        let target = &field.target;
        let name = ident.to_string();
        quote! {
            ::inject_abstractions::Dependency::new::<Self, #target>(#name, |c: &Self| &c.#ident)
        }
    });

    let interfaces = args.provides.iter().map(|ty| {
        quote! {
            ::inject_abstractions::Provision::interface::<Self, #ty>(
                |c| -> ::std::sync::Arc<#ty> { c }
            )
        }
    });

    let factory_aware = if args.factory_aware {
        quote! {
            fn factory_aware(&self) -> ::std::option::Option<&dyn ::inject_abstractions::FactoryAware> {
                ::std::option::Option::Some(self)
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl #impl_generics ::inject_abstractions::Injectable for #struct_name #ty_generics #where_clause {
            fn dependencies() -> ::std::vec::Vec<::inject_abstractions::Dependency> {
                ::std::vec![#(#dependencies),*]
            }

            fn interfaces() -> ::std::vec::Vec<::inject_abstractions::Provision> {
                ::std::vec![#(#interfaces),*]
            }

            #factory_aware
        }
    })
}
