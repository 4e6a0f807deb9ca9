use crate::ast::{Function, Module, Parameter};
use crate::schema::Schema;

use super::names;

/// Entry points for the schema's root operations. Everything past building
/// the root node (encoding, transport, response decoding) lives in the
/// hand-written runtime.
pub(super) fn generate(schema: &Schema, network: &mut Module) {
    if let Some(name) = &schema.query_type {
        push_root_operation(network, "query", name);
    }
    if let Some(name) = &schema.mutation_type {
        push_root_operation(network, "mutation", name);
    }
}

fn push_root_operation(module: &mut Module, operation: &str, type_name: &str) {
    let builder = names::query_builder(type_name);
    let function = Function::new(operation)
        .public()
        .parameter(Parameter::new("buildOn", format!("({builder}) -> Void")))
        .returns(builder.clone());
    let node = module.push_root(function);
    module.line(node, format!("let root = {builder}(name: \"{operation}\")"));
    module.line(node, "buildOn(root)");
    module.line(node, "return root");
}
