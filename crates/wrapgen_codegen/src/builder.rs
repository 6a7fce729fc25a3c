use crate::config::CodeGenConfig;
use crate::imports::ImportTable;

/// Utility that incrementally constructs Java source code with indentation
/// handling.
///
/// Fragments of the output file (class header, constructor, each method)
/// are built in independent builders and concatenated at the end; the
/// import table is kept outside the builder so every fragment shares it.
#[derive(Debug, Default, Clone)]
pub struct SourceBuilder {
    content: String,
    indent_level: usize,
    indent: String,
}

impl SourceBuilder {
    pub fn new(indent: String) -> Self {
        Self {
            content: String::new(),
            indent_level: 0,
            indent,
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.push_indent();
        self.content.push_str(line);
        self.content.push('\n');
    }

    pub fn push(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn push_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.content.push_str(&self.indent);
        }
    }

    pub fn blank_line(&mut self) {
        self.content.push('\n');
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn build(self) -> String {
        self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Fully-rendered Java source file: package declaration, import section and
/// one top-level type declaration.
#[derive(Debug, Default, Clone)]
pub struct JavaSourceFile {
    /// Package name; empty means the default package.
    pub package: String,
    pub imports: ImportTable,
    pub type_declaration: String,
}

impl JavaSourceFile {
    pub fn to_source(&self, config: &CodeGenConfig) -> String {
        let mut builder = SourceBuilder::new(config.indent.clone());

        if config.include_generator_note {
            builder.push_line("// Generated by wrapgen. Do not edit.");
        }
        if !self.package.is_empty() {
            builder.push_line(&format!("package {};", self.package));
            builder.blank_line();
        }

        let import_lines = self.imports.import_lines();
        if !import_lines.is_empty() {
            for line in &import_lines {
                if line.is_empty() {
                    builder.blank_line();
                } else {
                    builder.push_line(line);
                }
            }
            builder.blank_line();
        }

        builder.push(&self.type_declaration);
        builder.build()
    }
}
