use crate::imports::ImportTable;
use crate::scope::ScopeChain;
use wrapgen_reflect::TypeRef;

/// Renders one type reference to Java source syntax.
///
/// Recursive dispatch on the descriptor kind. The renderer is total: any
/// well-formed `TypeRef` produces text. The scope chain tracks which
/// type-variable identifiers already carry their bound clause; the import
/// table is shared across every fragment of the output file.
pub fn render_type(ty: &TypeRef, scope: &mut ScopeChain<'_>, imports: &mut ImportTable) -> String {
    match ty {
        TypeRef::Plain { name } => imports.resolve(name),
        TypeRef::Array { element } => {
            format!("{}[]", render_type(element, scope, imports))
        }
        TypeRef::Parameterized { name, arguments } => {
            let mut out = imports.resolve(name);
            // Type arguments share the enclosing scope.
            out.push_str(&render_type_list(arguments, scope, imports));
            out
        }
        TypeRef::Variable {
            id,
            super_bound,
            extends_bound,
        } => {
            let mut out = id.clone();
            if !scope.is_declared(id) {
                scope.declare(id.clone());
                out.push_str(&render_bounds(
                    super_bound.as_deref(),
                    extends_bound.as_deref(),
                    scope,
                    imports,
                ));
            }
            out
        }
        TypeRef::Wildcard {
            super_bound,
            extends_bound,
        } => {
            let mut out = String::from("?");
            out.push_str(&render_bounds(
                super_bound.as_deref(),
                extends_bound.as_deref(),
                scope,
                imports,
            ));
            out
        }
        TypeRef::Compound { base, interfaces } => {
            let mut parts = Vec::with_capacity(interfaces.len() + 1);
            if let Some(base) = base {
                if !base.is_object() {
                    let mut nested = scope.child();
                    parts.push(render_type(base, &mut nested, imports));
                }
            }
            for interface in interfaces {
                let mut nested = scope.child();
                parts.push(render_type(interface, &mut nested, imports));
            }
            parts.join(" & ")
        }
    }
}

/// Renders `<a, b, c>` for a non-empty type list, in the given scope.
pub fn render_type_list(
    types: &[TypeRef],
    scope: &mut ScopeChain<'_>,
    imports: &mut ImportTable,
) -> String {
    let mut rendered = Vec::with_capacity(types.len());
    for ty in types {
        rendered.push(render_type(ty, scope, imports));
    }
    format!("<{}>", rendered.join(", "))
}

/// ` super X`/` extends X` clauses; bounds against `Object` are dropped.
///
/// Each bound opens a fresh child scope so a bound's own type variables do
/// not leak into the enclosing declaration.
fn render_bounds(
    super_bound: Option<&TypeRef>,
    extends_bound: Option<&TypeRef>,
    scope: &mut ScopeChain<'_>,
    imports: &mut ImportTable,
) -> String {
    let mut out = String::new();
    if let Some(bound) = super_bound {
        if !bound.is_object() {
            let mut nested = scope.child();
            out.push_str(" super ");
            out.push_str(&render_type(bound, &mut nested, imports));
        }
    }
    if let Some(bound) = extends_bound {
        if !bound.is_object() {
            let mut nested = scope.child();
            out.push_str(" extends ");
            out.push_str(&render_type(bound, &mut nested, imports));
        }
    }
    out
}
