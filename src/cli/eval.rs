//! Compile and evaluate filter expressions against JSON data

use super::{flatten_json, CliError};
use crate::{compile, Store};

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// The filter expression to compile
    pub expression: String,
    /// JSON data document
    pub data: Option<String>,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of an eval operation
#[derive(Debug, PartialEq)]
pub enum EvalOutcome {
    /// Syntax validation passed
    SyntaxValid,
    /// The expression evaluated against the data
    Evaluated(bool),
}

/// Compiles the expression, and unless `syntax_only` is set, flattens
/// the JSON data into a store and evaluates against it.
pub fn execute_eval(options: &EvalOptions) -> Result<EvalOutcome, CliError> {
    let filter = compile(&options.expression)?;

    if options.syntax_only {
        return Ok(EvalOutcome::SyntaxValid);
    }

    let data = options.data.as_ref().ok_or(CliError::NoData)?;
    let document: serde_json::Value = serde_json::from_str(data)?;

    let mut store = Store::new();
    store.insert_many(flatten_json(&document)?);

    Ok(EvalOutcome::Evaluated(filter.evaluate(&store)?))
}
