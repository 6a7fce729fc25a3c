// wrapgen_cli - CLI functionality (library interface for testing)
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wrapgen_codegen::WrapperGenerator;
use wrapgen_reflect::TypeIndex;

#[derive(Parser)]
#[command(name = "wrapgen")]
#[command(about = "Generates delegating wrapper classes for Java types")]
pub struct Cli {
    /// Directory receiving generated sources, excluding the package path
    #[arg(long)]
    pub output_directory: PathBuf,

    /// JSON type metadata files used to resolve wrappee names
    #[arg(long, required = true, num_args = 1..)]
    pub metadata: Vec<PathBuf>,

    /// One or more WRAPPEE:WRAPPER mappings, e.g.
    /// java.util.Map:com.example.WrappedMap
    #[arg(long, required = true, num_args = 1..)]
    pub class_mappings: Vec<String>,
}

/// A parsed `wrappee:wrapper` mapping token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMapping {
    pub wrappee: String,
    pub wrapper_package: String,
    pub wrapper_class: String,
}

/// Splits a mapping token on its single `:` and the wrapper name on its
/// last `.`; a wrapper name without a dot lands in the default package.
pub fn parse_mapping(token: &str) -> Result<ClassMapping> {
    let mut parts = token.split(':');
    let (wrappee, wrapper) = match (parts.next(), parts.next(), parts.next()) {
        (Some(wrappee), Some(wrapper), None) if !wrappee.is_empty() && !wrapper.is_empty() => {
            (wrappee, wrapper)
        }
        _ => bail!("invalid class mapping format \"{token}\""),
    };
    let (wrapper_package, wrapper_class) = match wrapper.rfind('.') {
        Some(index) => (&wrapper[..index], &wrapper[index + 1..]),
        None => ("", wrapper),
    };
    Ok(ClassMapping {
        wrappee: wrappee.to_string(),
        wrapper_package: wrapper_package.to_string(),
        wrapper_class: wrapper_class.to_string(),
    })
}

pub fn run(cli: &Cli) -> Result<()> {
    let mut index = TypeIndex::new();
    for path in &cli.metadata {
        index
            .load_file(path)
            .with_context(|| format!("loading metadata from {}", path.display()))?;
    }

    for token in &cli.class_mappings {
        let mapping = parse_mapping(token)?;
        let descriptor = index
            .resolve(&mapping.wrappee)
            .with_context(|| format!("resolving wrappee type for mapping \"{token}\""))?;

        println!("Generating wrapper class for {}...", mapping.wrappee);
        let generator = WrapperGenerator::with_class_name(
            descriptor.clone(),
            mapping.wrapper_package,
            mapping.wrapper_class,
        );
        generator
            .write_to_dir(&cli.output_directory, true)
            .with_context(|| format!("writing wrapper for {}", mapping.wrappee))?;
    }

    println!("Done");
    Ok(())
}
