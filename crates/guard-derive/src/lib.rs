//! Derive macro for `dto_guard::Inspect`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, GenericArgument, Ident, LitInt, LitStr, Path,
    PathArguments, Type,
};

/// Derive `dto_guard::Inspect` with `#[rule(...)]` field attachments.
///
/// Generates the field table the validator scans: one binding per named
/// field, in declaration order, carrying the field's rules in attribute
/// order.
#[proc_macro_derive(Inspect, attributes(rule))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand_inspect(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_inspect(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let Data::Struct(struct_data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Inspect can only be derived for structs",
        ));
    };

    let fields = match &struct_data.fields {
        Fields::Named(fields) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &struct_data.fields,
                "Inspect requires named fields",
            ));
        },
    };

    let mut bindings = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let (field_name, specs) = parse_field_rules(&field.attrs, ident)?;
        let (is_option, inner_ty) = unwrap_option(&field.ty);
        let mut rule_exprs = Vec::new();
        for spec in &specs {
            rule_exprs.push(expand_rule(spec, inner_ty, is_option)?);
        }
        let field_name = LitStr::new(&field_name, ident.span());
        bindings.push(quote! {
            ::dto_guard::FieldBinding::new(
                #field_name,
                &self.#ident,
                ::std::vec![#(#rule_exprs),*],
            )
        });
    }

    let name = &input.ident;
    Ok(quote! {
        impl ::dto_guard::Inspect for #name {
            fn fields(&self) -> ::std::vec::Vec<::dto_guard::FieldBinding<'_>> {
                ::std::vec![#(#bindings),*]
            }
        }
    })
}

fn parse_field_rules(
    attrs: &[Attribute],
    ident: &Ident,
) -> Result<(String, Vec<RuleSpec>), syn::Error> {
    let mut specs = Vec::new();
    let mut name_override: Option<String> = None;
    for attr in attrs {
        if !attr.path().is_ident("rule") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                if name_override.is_some() {
                    return Err(meta.error("duplicate rule(name = ...)"));
                }
                name_override = Some(value.value());
                return Ok(());
            }
            if meta.path.is_ident("required") {
                specs.push(RuleSpec::Required);
                return Ok(());
            }
            if meta.path.is_ident("not_empty") {
                specs.push(RuleSpec::NotEmpty);
                return Ok(());
            }
            if meta.path.is_ident("min_length") {
                let value: LitInt = meta.value()?.parse()?;
                specs.push(RuleSpec::MinLength(value));
                return Ok(());
            }
            if meta.path.is_ident("max_length") {
                let value: LitInt = meta.value()?.parse()?;
                specs.push(RuleSpec::MaxLength(value));
                return Ok(());
            }
            if meta.path.is_ident("matches") {
                let value: LitStr = meta.value()?.parse()?;
                if let Err(parse_error) = regex::Regex::new(&value.value()) {
                    return Err(syn::Error::new(
                        value.span(),
                        format!("invalid pattern: {parse_error}"),
                    ));
                }
                specs.push(RuleSpec::Matches(value));
                return Ok(());
            }
            if meta.path.is_ident("email") {
                specs.push(RuleSpec::Email);
                return Ok(());
            }
            if meta.path.is_ident("positive") {
                specs.push(RuleSpec::Positive);
                return Ok(());
            }
            if meta.path.is_ident("range") {
                let mut min: Option<Expr> = None;
                let mut max: Option<Expr> = None;
                meta.parse_nested_meta(|nested| {
                    if nested.path.is_ident("min") {
                        min = Some(nested.value()?.parse()?);
                        return Ok(());
                    }
                    if nested.path.is_ident("max") {
                        max = Some(nested.value()?.parse()?);
                        return Ok(());
                    }
                    Err(nested.error("unsupported range attribute"))
                })?;
                let Some(min) = min else {
                    return Err(meta.error("range requires min"));
                };
                let Some(max) = max else {
                    return Err(meta.error("range requires max"));
                };
                specs.push(RuleSpec::Range { min, max });
                return Ok(());
            }
            if meta.path.is_ident("custom") {
                let value: LitStr = meta.value()?.parse()?;
                let path: Path = value.parse()?;
                specs.push(RuleSpec::Custom(path));
                return Ok(());
            }
            Err(meta.error("unsupported rule attribute"))
        })?;
    }
    let name = name_override.unwrap_or_else(|| ident.to_string());
    Ok((name, specs))
}

#[derive(Debug)]
enum RuleSpec {
    Required,
    NotEmpty,
    MinLength(LitInt),
    MaxLength(LitInt),
    Matches(LitStr),
    Email,
    Positive,
    Range { min: Expr, max: Expr },
    Custom(Path),
}

fn expand_rule(
    spec: &RuleSpec,
    inner_ty: &Type,
    is_option: bool,
) -> Result<proc_macro2::TokenStream, syn::Error> {
    let expr = match spec {
        RuleSpec::Required => {
            if !is_option {
                return Err(syn::Error::new_spanned(
                    inner_ty,
                    "required can only be used on Option fields",
                ));
            }
            boxed(quote! { ::dto_guard::rules::Required })
        },
        RuleSpec::NotEmpty => {
            require_string(inner_ty, "not_empty")?;
            boxed(quote! { ::dto_guard::rules::NotEmpty })
        },
        RuleSpec::MinLength(min) => {
            require_string(inner_ty, "min_length")?;
            boxed(quote! { ::dto_guard::rules::MinLength::new(#min) })
        },
        RuleSpec::MaxLength(max) => {
            require_string(inner_ty, "max_length")?;
            boxed(quote! { ::dto_guard::rules::MaxLength::new(#max) })
        },
        RuleSpec::Matches(pattern) => {
            require_string(inner_ty, "matches")?;
            boxed(quote! { ::dto_guard::rules::Matches::new(#pattern) })
        },
        RuleSpec::Email => {
            require_string(inner_ty, "email")?;
            boxed(quote! { ::dto_guard::rules::Email })
        },
        RuleSpec::Positive => {
            require_numeric(inner_ty, "positive")?;
            boxed(quote! { ::dto_guard::rules::Positive })
        },
        RuleSpec::Range { min, max } => {
            require_numeric(inner_ty, "range")?;
            boxed(quote! { ::dto_guard::rules::Range::new((#min) as f64, (#max) as f64) })
        },
        RuleSpec::Custom(path) => quote! { #path() },
    };
    Ok(expr)
}

fn boxed(rule: proc_macro2::TokenStream) -> proc_macro2::TokenStream {
    quote! {
        ::std::boxed::Box::new(#rule) as ::std::boxed::Box<dyn ::dto_guard::Rule>
    }
}

fn require_string(ty: &Type, rule: &str) -> Result<(), syn::Error> {
    if is_string_like(ty) {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            ty,
            format!("{rule} can only be used on string-like fields"),
        ))
    }
}

fn require_numeric(ty: &Type, rule: &str) -> Result<(), syn::Error> {
    if is_numeric(ty) {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            ty,
            format!("{rule} can only be used on numeric fields"),
        ))
    }
}

fn unwrap_option(ty: &Type) -> (bool, &Type) {
    option_inner(ty).map_or((false, ty), |inner| (true, inner))
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    let mut type_arg = None;
    for arg in &args.args {
        if let GenericArgument::Type(inner) = arg {
            type_arg = Some(inner);
            break;
        }
    }
    type_arg
}

fn is_string_like(ty: &Type) -> bool {
    match ty {
        Type::Reference(reference) => is_string_like(&reference.elem),
        Type::Path(type_path) => {
            let Some(segment) = type_path.path.segments.last() else {
                return false;
            };
            if segment.ident == "String" || segment.ident == "str" {
                return true;
            }
            if segment.ident == "Box" {
                let PathArguments::AngleBracketed(args) = &segment.arguments else {
                    return false;
                };
                let mut inner = None;
                for arg in &args.args {
                    if let GenericArgument::Type(inner_ty) = arg {
                        inner = Some(inner_ty);
                        break;
                    }
                }
                if let Some(inner_ty) = inner {
                    return is_str_type(inner_ty);
                }
            }
            false
        },
        _ => false,
    }
}

fn is_str_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "str"),
        Type::Reference(reference) => is_str_type(&reference.elem),
        _ => false,
    }
}

fn is_numeric(ty: &Type) -> bool {
    match ty {
        Type::Reference(reference) => is_numeric(&reference.elem),
        Type::Path(type_path) => type_path.path.segments.last().is_some_and(|segment| {
            matches!(
                segment.ident.to_string().as_str(),
                "f32"
                    | "f64"
                    | "u8"
                    | "u16"
                    | "u32"
                    | "u64"
                    | "usize"
                    | "i8"
                    | "i16"
                    | "i32"
                    | "i64"
                    | "isize"
            )
        }),
        _ => false,
    }
}
