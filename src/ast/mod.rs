/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node sum type, programs and tree printing
/// - expressions: Payloads of the compound node kinds
pub mod ast;
pub mod expressions;

#[cfg(test)]
mod tests;
