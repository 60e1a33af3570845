//! Interactive search query assembly
//!
//! `QueryBuilder` asks which filters to use, then for each filter either a
//! value selection (enum fields), a set of operators plus one value per
//! operator (operator-capable fields), or a single value (everything else).
//! Any required prompt left empty aborts the whole command.

use super::fields::{EnumField, FilterCatalog};
use super::operators::Operator;
use super::types::{QueryValue, SearchQuery};
use super::validate::{cast_value, split_list, validator_for};
use crate::ui::{TextValidator, UserInput};
use crate::{Result, WizardError, require_answer, require_selection};
use log::debug;

/// Prompt for the filter selection
pub const FILTER_PROMPT: &str = "What are you looking for today?";

const NO_FILTER_MESSAGE: &str = "Please select at least one search condition";
const NO_OPERATOR_MESSAGE: &str = "Please select at least one search operator";
const NO_VALUE_MESSAGE: &str = "Please select at least one value";

/// Field whose operators collapse into a single value or interval
const DATETIME_FIELD: &str = "datetime";

/// Builds a `SearchQuery` from a sequence of prompts
pub struct QueryBuilder<'a> {
    input: &'a dyn UserInput,
    catalog: &'a FilterCatalog,
    default_limit: u32,
}

impl<'a> QueryBuilder<'a> {
    /// Create a builder prompting through `input`
    #[must_use]
    pub const fn new(input: &'a dyn UserInput, catalog: &'a FilterCatalog, default_limit: u32) -> Self {
        Self {
            input,
            catalog,
            default_limit,
        }
    }

    /// Run every prompt and return the assembled query
    ///
    /// The result always contains `limit`.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Aborted` if a required selection is left empty,
    /// `WizardError::InvalidInput` if `datetime` operators cannot form one
    /// value or interval, or an input error if a prompt fails.
    pub fn prompt(&self) -> Result<SearchQuery> {
        let fields = self.prompt_fields()?;
        let mut query = SearchQuery::new();

        for field in &fields {
            if let Some(enum_field) = EnumField::from_field(field) {
                let (key, value) = self.prompt_enum_choices(enum_field)?;
                query.insert(key, value);
                continue;
            }

            if self.catalog.supports_operators(field) {
                for op in self.prompt_operators(field)? {
                    let (key, value) = self.prompt_operator_value(field, Some(op))?;
                    query.insert(key, value);
                }
            } else {
                let (key, value) = self.prompt_operator_value(field, None)?;
                query.insert(key, value);
            }
        }

        query.ensure_limit(self.default_limit);
        debug!("assembled search query: {query}");
        Ok(query)
    }

    fn prompt_fields(&self) -> Result<Vec<String>> {
        let picked = self
            .input
            .prompt_multi_select(FILTER_PROMPT, &self.catalog.supported, &[])?;
        let picked = require_selection(picked, NO_FILTER_MESSAGE)?;
        Ok(picked
            .into_iter()
            .filter_map(|i| self.catalog.supported.get(i).cloned())
            .collect())
    }

    fn prompt_enum_choices(&self, field: EnumField) -> Result<(String, QueryValue)> {
        let name = field.name();
        let choices: Vec<String> = field.values().iter().map(ToString::to_string).collect();

        let picked = self
            .input
            .prompt_multi_select(&format!("{name}:"), &choices, &[])?;
        let picked = require_selection(picked, NO_VALUE_MESSAGE)?;

        let values = picked
            .into_iter()
            .filter_map(|i| choices.get(i))
            .map(|choice| cast_value(name, choice))
            .collect();
        Ok((name.to_string(), QueryValue::List(values)))
    }

    fn prompt_operators(&self, field: &str) -> Result<Vec<Operator>> {
        let symbols = Operator::symbols();
        let picked = self
            .input
            .prompt_multi_select(&format!("{field}:"), &symbols, &[])?;
        let picked = require_selection(picked, NO_OPERATOR_MESSAGE)?;

        let operators: Vec<Operator> = picked
            .into_iter()
            .filter_map(|i| symbols.get(i))
            .filter_map(|symbol| Operator::from_symbol(symbol))
            .collect();

        if field == DATETIME_FIELD
            && operators.len() > 1
            && operators.iter().any(|op| matches!(op, Operator::Eq | Operator::In))
        {
            return Err(WizardError::InvalidInput(
                "datetime '=' and 'in' cannot be combined with other operators".to_string(),
            ));
        }
        Ok(operators)
    }

    fn prompt_operator_value(&self, field: &str, op: Option<Operator>) -> Result<(String, QueryValue)> {
        let validate = validator_for(field);

        let (message, key) = match op {
            Some(op) => (format!("{field} [{}]:", op.symbol()), op.descriptor(field)),
            None => (format!("{field}:"), field.to_string()),
        };

        let value = if op == Some(Operator::In) {
            let validate_each = |text: &str| -> std::result::Result<(), String> {
                let mut parts = split_list(text).peekable();
                if parts.peek().is_none() {
                    return Err("Please provide comma separated values".to_string());
                }
                if field == DATETIME_FIELD && split_list(text).count() != 2 {
                    return Err("Please provide a start and an end datetime".to_string());
                }
                parts.try_for_each(validate)
            };
            let check: TextValidator<'_> = &validate_each;
            let text = self.input.prompt_text(&message, None, Some(check))?;
            let text = require_answer(text, "Please provide a value")?;
            QueryValue::List(split_list(&text).map(|part| cast_value(field, part)).collect())
        } else {
            let check: TextValidator<'_> = &validate;
            let text = self.input.prompt_text(&message, None, Some(check))?;
            let text = require_answer(text, "Please provide a value")?;
            cast_value(field, &text)
        };

        Ok((key, value))
    }
}
