// wrapgen_reflect - structural descriptors for Java types and methods
//
// This crate is the metadata surface consumed by the code generator. A
// `TypeDescriptor` captures the public shape of one class or interface the
// way a reflection facility would report it; `TypeRef` is the recursive
// structural view of a single type usage (arrays, parameterized generics,
// type variables with bounds, wildcards, intersection types).

mod error;
mod index;

pub use error::ReflectError;
pub use index::TypeIndex;

use serde::{Deserialize, Serialize};

/// The universal top type; bounds against it are never rendered.
pub const OBJECT: &str = "java.lang.Object";

/// Structural reference to a type as it appears in a signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeRef {
    /// Ordinary class or interface, identified by its fully-qualified name.
    /// Primitives and `void` use their keyword as the name.
    Plain { name: String },
    /// Array of some element type.
    Array { element: Box<TypeRef> },
    /// Generic type applied to arguments, e.g. `Map<K, V>`.
    #[serde(rename_all = "camelCase")]
    Parameterized {
        name: String,
        arguments: Vec<TypeRef>,
    },
    /// Declared type variable, optionally bounded.
    #[serde(rename_all = "camelCase")]
    Variable {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        super_bound: Option<Box<TypeRef>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extends_bound: Option<Box<TypeRef>>,
    },
    /// `?`, optionally bounded.
    #[serde(rename_all = "camelCase")]
    Wildcard {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        super_bound: Option<Box<TypeRef>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extends_bound: Option<Box<TypeRef>>,
    },
    /// Intersection type, e.g. the `A & B` in `T extends A & B`.
    #[serde(rename_all = "camelCase")]
    Compound {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base: Option<Box<TypeRef>>,
        #[serde(default)]
        interfaces: Vec<TypeRef>,
    },
}

impl TypeRef {
    pub fn plain(name: impl Into<String>) -> Self {
        TypeRef::Plain { name: name.into() }
    }

    pub fn object() -> Self {
        TypeRef::plain(OBJECT)
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
        }
    }

    pub fn parameterized(name: impl Into<String>, arguments: Vec<TypeRef>) -> Self {
        TypeRef::Parameterized {
            name: name.into(),
            arguments,
        }
    }

    /// Unbounded type variable.
    pub fn variable(id: impl Into<String>) -> Self {
        TypeRef::Variable {
            id: id.into(),
            super_bound: None,
            extends_bound: None,
        }
    }

    /// Type variable with an upper bound.
    pub fn bounded_variable(id: impl Into<String>, extends_bound: TypeRef) -> Self {
        TypeRef::Variable {
            id: id.into(),
            super_bound: None,
            extends_bound: Some(Box::new(extends_bound)),
        }
    }

    pub fn wildcard() -> Self {
        TypeRef::Wildcard {
            super_bound: None,
            extends_bound: None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, TypeRef::Plain { name } if name == OBJECT)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Plain { name } if name == "void")
    }
}

/// Splits a fully-qualified name into its simple-name tail.
pub fn simple_name(full_name: &str) -> &str {
    match full_name.rfind('.') {
        Some(index) => &full_name[index + 1..],
        None => full_name,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    Class,
    Interface,
}

/// Public shape of one class or interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub full_name: String,
    pub kind: TypeKind,
    /// Declared type parameters, each a `TypeRef::Variable`.
    #[serde(default)]
    pub type_variables: Vec<TypeRef>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    pub fn simple_name(&self) -> &str {
        simple_name(&self.full_name)
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// The type as used in a signature: the raw name applied to its own
    /// type variables, or a plain reference when it declares none.
    pub fn as_type_ref(&self) -> TypeRef {
        if self.type_variables.is_empty() {
            TypeRef::plain(&self.full_name)
        } else {
            let arguments = self
                .type_variables
                .iter()
                .map(|variable| match variable {
                    TypeRef::Variable { id, .. } => TypeRef::variable(id.clone()),
                    other => other.clone(),
                })
                .collect();
            TypeRef::parameterized(&self.full_name, arguments)
        }
    }
}

/// One member method as declared by its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_deprecated: bool,
    /// Type parameters declared by the method itself.
    #[serde(default)]
    pub type_variables: Vec<TypeRef>,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Declared checked exception types, in declaration order.
    #[serde(default)]
    pub throws: Vec<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub name: String,
}

impl Parameter {
    pub fn new(ty: TypeRef, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests;
