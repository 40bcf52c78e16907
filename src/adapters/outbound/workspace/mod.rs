/// Workspace adapters resolving warnings to source files
mod source_tree_resolver;

pub use source_tree_resolver::SourceTreeResolver;
