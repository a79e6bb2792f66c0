/// SCSS source scanning.
///
/// Sub-modules:
/// - [`use_statements`]: `@use` declaration extraction
///
/// Only the declarations needed for namespace completion are extracted;
/// there is no stylesheet AST.
pub mod use_statements;

pub use use_statements::extract_imports;
