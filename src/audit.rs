use std::fmt::Display;

use chrono::Utc;

use crate::version::ApiVersion;

const CONTROLLER: &str = "ProductController";

/// A call argument together with the short name of its type.
pub struct Param<'a> {
    type_name: &'static str,
    value: &'a dyn Display,
}

pub fn param<T: Display>(value: &T) -> Param<'_> {
    let full = std::any::type_name::<T>();
    Param {
        type_name: full.rsplit("::").next().unwrap_or(full),
        value,
    }
}

/// Record an incoming API call before it runs.
pub fn log_call(action: &str, version: ApiVersion, params: &[Param<'_>]) {
    let params = format_params(params);
    tracing::info!(
        controller = CONTROLLER,
        action,
        api_version = %version,
        params = %params,
        at = %Utc::now().to_rfc3339(),
        "api call"
    );
}

fn format_params(params: &[Param<'_>]) -> String {
    params
        .iter()
        .map(|p| format!("({}) '{}'", p.type_name, p.value))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_are_tagged_with_their_type() {
        let id = 7;
        let description = "text".to_string();
        assert_eq!(
            format_params(&[param(&id), param(&description)]),
            "(i32) '7'; (String) 'text'"
        );
    }

    #[test]
    fn request_objects_use_their_short_type_name() {
        let request = crate::dto::products::UpdateDescriptionRequest {
            id: 1,
            ..Default::default()
        };
        assert!(format_params(&[param(&request)]).starts_with("(UpdateDescriptionRequest) 'Id: '1'"));
    }

    #[test]
    fn no_params_formats_empty() {
        assert_eq!(format_params(&[]), "");
    }
}
