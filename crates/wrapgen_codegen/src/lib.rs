// wrapgen_codegen - delegating wrapper class synthesis
//
// Inspects the public shape of a Java class or interface (via
// `wrapgen_reflect` descriptors) and emits the source of a wrapper type
// that holds one instance of the wrappee and forwards every non-final,
// non-static method to it unchanged.

mod builder;
mod config;
mod error;
mod generator;
mod imports;
mod render;
mod scope;

pub use builder::{JavaSourceFile, SourceBuilder};
pub use config::CodeGenConfig;
pub use error::WrapperError;
pub use generator::WrapperGenerator;
pub use imports::ImportTable;
pub use render::{render_type, render_type_list};
pub use scope::ScopeChain;
