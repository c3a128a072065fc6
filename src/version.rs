use std::fmt;

/// API versions served by the router. `V3` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    V1,
    #[default]
    V3,
}

impl ApiVersion {
    pub const SUPPORTED: [ApiVersion; 2] = [ApiVersion::V1, ApiVersion::V3];

    pub fn number(self) -> u8 {
        match self {
            ApiVersion::V1 => 1,
            ApiVersion::V3 => 3,
        }
    }

    /// Route prefix, e.g. `/v3`.
    pub fn prefix(self) -> String {
        format!("/v{}", self.number())
    }

    /// Group name used for the OpenAPI document, e.g. `v3`.
    pub fn group_name(self) -> String {
        format!("v{}", self.number())
    }

    /// Value of the `api-supported-versions` response header.
    pub fn supported_header() -> String {
        Self::SUPPORTED
            .iter()
            .map(|v| v.number().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_version_is_v3() {
        assert_eq!(ApiVersion::default(), ApiVersion::V3);
        assert_eq!(ApiVersion::default().prefix(), "/v3");
    }

    #[test]
    fn supported_header_lists_all_versions() {
        assert_eq!(ApiVersion::supported_header(), "1, 3");
    }
}
