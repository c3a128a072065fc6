use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{dto::products::UpdateDescriptionRequest, version::ApiVersion};

/// Request bodies whose rules depend on the API version they arrive on.
pub trait ValidateVersioned {
    fn validate_for(&self, version: ApiVersion) -> Result<(), ValidationErrors>;
}

pub fn validate_positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::ZERO {
        return Ok(());
    }
    Err(ValidationError::new("positive")
        .with_message(Cow::Borrowed("The Price must be positive number.")))
}

impl ValidateVersioned for UpdateDescriptionRequest {
    fn validate_for(&self, version: ApiVersion) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        // v3 has no availability field.
        if version == ApiVersion::V1 && self.available.is_none() {
            errors.add(
                "available",
                ValidationError::new("required")
                    .with_message(Cow::Borrowed("The Available is required.")),
            );
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// `img_uri` -> `ImgUri`, the key shape used in problem bodies.
pub fn problem_key(field: &str) -> String {
    field
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// All messages, sorted by field, for log lines.
pub fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .map(|err| {
            err.message
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| err.code.to_string())
        })
        .collect()
}
