//! Comparison operators offered for operator-capable filter fields

use strum::{EnumIter, IntoEnumIterator};

/// A comparison relation between a field and a value
///
/// The symbol is what the user picks, the token is what the search API
/// understands and what ends up in the query descriptor (`field__gte`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Operator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl Operator {
    /// Symbol shown in prompts
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::In => "in",
        }
    }

    /// Token used in query descriptors and API requests
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::In => "in",
        }
    }

    /// Look up an operator by its prompt symbol
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::iter().find(|op| op.symbol() == symbol)
    }

    /// Prompt symbols of every operator, in menu order
    #[must_use]
    pub fn symbols() -> Vec<String> {
        Self::iter().map(|op| op.symbol().to_string()).collect()
    }

    /// Build the query descriptor for `field` compared with this operator
    #[must_use]
    pub fn descriptor(self, field: &str) -> String {
        format!("{field}{}{}", super::types::OPERATOR_SEPARATOR, self.token())
    }
}
