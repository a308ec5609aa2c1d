//! Field planning for the `DataCli` derive macro.
//!
//! Each struct field is classified (plain value, optional value or switch),
//! its flags are validated against the other fields, and the result feeds
//! the descriptor and constructor emitters.

use syn::ext::IdentExt;
use syn::{Expr, Ident, LitStr, Type};

use crate::derive::parse::{FieldAttrs, is_bool, option_inner};

mod descriptors;
mod flags;
mod values;

pub(crate) use descriptors::field_descriptor;
pub(crate) use values::field_initializer;

/// How a field's type shapes parsing and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    /// A value of the declared type.
    Plain,
    /// `Option<T>`: coerced as `T`, `None` when absent.
    Optional,
    /// `bool`: set by the flag's presence, `false` when absent.
    Switch,
}

/// Validated description of one field.
pub(crate) struct FieldPlan {
    pub ident: Ident,
    pub name: String,
    pub ty: Type,
    pub coerced: Type,
    pub kind: FieldKind,
    pub short: Option<char>,
    pub long: Option<String>,
    pub help: Option<String>,
    pub default: Option<Expr>,
    pub env: Option<LitStr>,
    pub env_fallback: Option<LitStr>,
    pub arg_type: Option<Expr>,
}

impl FieldPlan {
    /// Whether the record supplies its own value for an absent flag.
    pub(crate) const fn has_static_default(&self) -> bool {
        self.default.is_some() || !matches!(self.kind, FieldKind::Plain)
    }

    /// Long flag as the runtime derives it.
    pub(crate) fn long_flag(&self) -> String {
        self.long
            .clone()
            .unwrap_or_else(|| self.name.replace('_', "-"))
    }
}

fn classify(ty: &Type) -> (FieldKind, Type) {
    if let Some(inner) = option_inner(ty) {
        return (FieldKind::Optional, inner.clone());
    }
    if is_bool(ty) {
        return (FieldKind::Switch, ty.clone());
    }
    (FieldKind::Plain, ty.clone())
}

fn plan_field(
    field: &syn::Field,
    attrs: &FieldAttrs,
    registry: &mut flags::FlagRegistry,
) -> syn::Result<FieldPlan> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(
            field,
            "unnamed (tuple) fields are not supported",
        ));
    };
    let (kind, coerced) = classify(&field.ty);
    let plan = FieldPlan {
        name: ident.unraw().to_string(),
        ident,
        ty: field.ty.clone(),
        coerced,
        kind,
        short: attrs.cli_short,
        long: attrs.cli_long.clone(),
        help: attrs.help.clone(),
        default: attrs.default.clone(),
        env: attrs.env.clone(),
        env_fallback: attrs.env_fallback.clone(),
        arg_type: attrs.arg_type.clone(),
    };
    registry.claim_long(&plan.ident, &plan.long_flag())?;
    if let Some(short) = plan.short {
        registry.claim_short(&plan.ident, short)?;
    }
    Ok(plan)
}

/// Plans every field in declaration order, rejecting invalid or colliding
/// flags.
pub(crate) fn plan_fields(
    fields: &[syn::Field],
    field_attrs: &[FieldAttrs],
) -> syn::Result<Vec<FieldPlan>> {
    let mut registry = flags::FlagRegistry::default();
    fields
        .iter()
        .zip(field_attrs)
        .map(|(field, attrs)| plan_field(field, attrs, &mut registry))
        .collect()
}
