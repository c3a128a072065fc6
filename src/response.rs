use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use validator::ValidationErrors;

use crate::validation::problem_key;

pub const VALIDATION_TITLE: &str = "One or more validation errors occurred.";

/// Body of a 400 caused by an invalid request object.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationProblem {
    pub title: String,
    pub status: u16,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&ValidationErrors> for ValidationProblem {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            title: VALIDATION_TITLE.to_string(),
            status: 400,
            errors: errors
                .field_errors()
                .into_iter()
                .map(|(field, errs)| {
                    let messages = errs
                        .iter()
                        .map(|err| {
                            err.message
                                .as_ref()
                                .map(ToString::to_string)
                                .unwrap_or_else(|| err.code.to_string())
                        })
                        .collect();
                    (problem_key(&field), messages)
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Body of a 400 for requests no route or version accepts.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}
