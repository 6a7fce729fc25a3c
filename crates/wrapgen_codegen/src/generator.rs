use crate::builder::{JavaSourceFile, SourceBuilder};
use crate::config::CodeGenConfig;
use crate::error::WrapperError;
use crate::imports::ImportTable;
use crate::render::{render_type, render_type_list};
use crate::scope::ScopeChain;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use wrapgen_reflect::{MethodDescriptor, TypeDescriptor};

const FIELD_NAME: &str = "wrappedObject";
const SOURCE_EXTENSION: &str = "java";

/// Generates the wrapper class for one class or interface.
///
/// The wrapper declares the wrappee's type parameters, implements or
/// extends the wrappee, holds a single `wrappedObject` field assigned in
/// the constructor, and forwards every non-final, non-static method.
/// Generation is deterministic: the same descriptor always produces
/// byte-identical output.
pub struct WrapperGenerator {
    descriptor: TypeDescriptor,
    package: String,
    class_name: String,
    config: CodeGenConfig,
}

impl WrapperGenerator {
    /// Wrapper named `Wrapped<SimpleName>` in the given package.
    pub fn new(descriptor: TypeDescriptor, package: impl Into<String>) -> Self {
        let class_name = format!("Wrapped{}", descriptor.simple_name());
        Self::with_class_name(descriptor, package, class_name)
    }

    pub fn with_class_name(
        descriptor: TypeDescriptor,
        package: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            descriptor,
            package: package.into(),
            class_name: class_name.into(),
            config: CodeGenConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CodeGenConfig) -> Self {
        self.config = config;
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Generates the wrapper source text.
    pub fn generate(&self) -> String {
        let mut imports = ImportTable::new();
        let mut class_scope = ScopeChain::root();

        // Class header. Declaring the type parameters here marks them in
        // the class scope, so the wrappee reference below renders them as
        // bare identifiers.
        let mut header = format!("public class {}", self.class_name);
        if !self.descriptor.type_variables.is_empty() {
            header.push_str(&render_type_list(
                &self.descriptor.type_variables,
                &mut class_scope,
                &mut imports,
            ));
        }
        header.push_str(if self.descriptor.is_interface() {
            " implements "
        } else {
            " extends "
        });
        let wrappee = render_type(&self.descriptor.as_type_ref(), &mut class_scope, &mut imports);
        header.push_str(&wrappee);
        header.push_str(" {");

        let mut body = SourceBuilder::new(self.config.indent.clone());
        body.push_line(&header);
        body.indent();

        // Field
        body.push_line(&format!("private final {} {};", wrappee, FIELD_NAME));
        body.blank_line();

        // Constructor
        body.push_line(&format!(
            "public {}(final {} {}) {{",
            self.class_name, wrappee, FIELD_NAME
        ));
        body.indent();
        body.push_line(&format!("this.{} = {};", FIELD_NAME, FIELD_NAME));
        body.dedent();
        body.push_line("}");

        // Methods, bucketed by name; groups emit in ascending name order,
        // overloads within a group by rendered length, ties keeping
        // declaration order.
        let mut groups: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for method in &self.descriptor.methods {
            if method.is_final || method.is_static {
                continue;
            }
            let mut method_scope = class_scope.child();
            let rendered = self.render_method(method, &mut method_scope, &mut imports);
            groups.entry(method.name.as_str()).or_default().push(rendered);
        }
        for (_, mut overloads) in groups {
            overloads.sort_by_key(String::len);
            for rendered in overloads {
                body.blank_line();
                body.push(&rendered);
            }
        }

        body.dedent();
        body.push_line("}");

        let file = JavaSourceFile {
            package: self.package.clone(),
            imports,
            type_declaration: body.build(),
        };
        file.to_source(&self.config)
    }

    fn render_method(
        &self,
        method: &MethodDescriptor,
        scope: &mut ScopeChain<'_>,
        imports: &mut ImportTable,
    ) -> String {
        let mut writer = SourceBuilder::new(self.config.indent.clone());
        writer.indent();

        writer.push_line("@Override");
        if method.is_deprecated {
            writer.push_line("@Deprecated");
        }

        let mut signature = String::from("public ");
        if !method.type_variables.is_empty() {
            signature.push_str(&render_type_list(&method.type_variables, scope, imports));
            signature.push(' ');
        }
        let return_type = render_type(&method.return_type, scope, imports);
        signature.push_str(&return_type);
        signature.push(' ');
        signature.push_str(&method.name);
        signature.push('(');
        let mut declarations = Vec::with_capacity(method.parameters.len());
        let mut names = Vec::with_capacity(method.parameters.len());
        for parameter in &method.parameters {
            declarations.push(format!(
                "final {} {}",
                render_type(&parameter.ty, scope, imports),
                parameter.name
            ));
            names.push(parameter.name.as_str());
        }
        signature.push_str(&declarations.join(", "));
        signature.push(')');
        if !method.throws.is_empty() {
            let thrown: Vec<String> = method
                .throws
                .iter()
                .map(|ty| render_type(ty, scope, imports))
                .collect();
            signature.push_str(" throws ");
            signature.push_str(&thrown.join(", "));
        }
        signature.push_str(" {");
        writer.push_line(&signature);

        writer.indent();
        let mut call = String::new();
        if return_type != "void" {
            call.push_str("return ");
        }
        call.push_str(FIELD_NAME);
        call.push('.');
        call.push_str(&method.name);
        call.push('(');
        call.push_str(&names.join(", "));
        call.push_str(");");
        writer.push_line(&call);
        writer.dedent();

        writer.push_line("}");
        writer.build()
    }

    /// Writes the wrapper under `output_dir`, converting the package name
    /// into path segments; returns the written file path.
    pub fn write_to_dir(
        &self,
        output_dir: &Path,
        create_package_dirs: bool,
    ) -> Result<PathBuf, WrapperError> {
        let mut package_dir = output_dir.to_path_buf();
        for segment in self.package.split('.').filter(|segment| !segment.is_empty()) {
            package_dir.push(segment);
        }
        if create_package_dirs {
            fs::create_dir_all(&package_dir).map_err(|source| WrapperError::CreateDir {
                path: package_dir.clone(),
                source,
            })?;
        }
        let path = package_dir.join(format!("{}.{}", self.class_name, SOURCE_EXTENSION));
        self.write_to_path(&path)?;
        Ok(path)
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), WrapperError> {
        fs::write(path, self.generate()).map_err(|source| WrapperError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write_to(&self, output: &mut dyn Write) -> Result<(), WrapperError> {
        output
            .write_all(self.generate().as_bytes())
            .map_err(|source| WrapperError::Stream { source })
    }
}
