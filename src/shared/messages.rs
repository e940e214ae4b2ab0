use std::collections::BTreeMap;
use std::str::FromStr;

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

use crate::shared::validation::{RULE_BOOLEAN, RULE_MAX, RULE_REQUIRED, RULE_STRING};

/// Locale used to render validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "en" | "en_us" | "en_gb" => Ok(Self::En),
            "pt_br" | "pt" => Ok(Self::PtBr),
            other => Err(format!("Unsupported APP_LOCALE '{}'", other)),
        }
    }
}

impl Locale {
    /// Top-level message of a 422 response
    pub fn invalid_data(&self) -> &'static str {
        match self {
            Locale::En => "The given data was invalid.",
            Locale::PtBr => "Os dados fornecidos são inválidos.",
        }
    }

    /// Message template for a validation rule. Placeholders are `:attribute`
    /// plus one `:<param>` per error parameter.
    pub fn template(&self, rule: &str) -> &'static str {
        match (self, rule) {
            (Locale::En, RULE_REQUIRED) => "The :attribute field is required.",
            (Locale::En, RULE_MAX) => "The :attribute may not be greater than :max characters.",
            (Locale::En, RULE_BOOLEAN) => "The :attribute field must be true or false.",
            (Locale::En, RULE_STRING) => "The :attribute must be a string.",
            (Locale::En, _) => "The :attribute is invalid.",

            (Locale::PtBr, RULE_REQUIRED) => "O campo :attribute é obrigatório.",
            (Locale::PtBr, RULE_MAX) => {
                "O campo :attribute não pode ser superior a :max caracteres."
            }
            (Locale::PtBr, RULE_BOOLEAN) => "O campo :attribute deve ser verdadeiro ou falso.",
            (Locale::PtBr, RULE_STRING) => "O campo :attribute deve ser uma string.",
            (Locale::PtBr, _) => "O campo :attribute é inválido.",
        }
    }

    /// Render a single rule failure for `field`
    pub fn message(&self, field: &str, error: &ValidationError) -> String {
        if let Some(ref message) = error.message {
            return message.to_string();
        }

        let mut rendered = self
            .template(error.code.as_ref())
            .replace(":attribute", &display_name(field));

        for (name, value) in &error.params {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            rendered = rendered.replace(&format!(":{}", name), &value);
        }

        rendered
    }

    /// Render every field error, keyed by field name
    pub fn render(&self, errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
        errors
            .field_errors()
            .into_iter()
            .map(|(field, field_errors)| {
                let field = field.to_string();
                let messages = field_errors
                    .iter()
                    .map(|error| self.message(&field, error))
                    .collect();
                (field, messages)
            })
            .collect()
    }
}

/// Human-readable attribute name: `is_active` becomes `is active`
pub fn display_name(field: &str) -> String {
    field.replace('_', " ")
}
