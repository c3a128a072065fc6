use utoipa::{
    OpenApi,
    openapi::{OpenApi as OpenApiSpec, PathItem},
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        products::{ProductResponse, UpdateDescriptionRequest},
        v1, v3,
    },
    response::{ErrorBody, ErrorDetail, ValidationProblem},
    routes::{health, products},
    version::ApiVersion,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Product Catalog API"),
    paths(
        health::health_check,
        products::get_product,
        products::get_available_products,
        products::update_description_by_id,
        products::update_description
    ),
    components(
        schemas(
            v1::Product,
            v3::Product,
            ProductResponse,
            UpdateDescriptionRequest,
            ValidationProblem,
            ErrorBody,
            ErrorDetail,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Product", description = "Product endpoints"),
    )
)]
pub struct ApiDoc;

/// OpenAPI document for one API version, with the version substituted into
/// every route path.
pub fn versioned_doc(version: ApiVersion) -> OpenApiSpec {
    let mut doc = ApiDoc::openapi();
    doc.info.version = version.group_name();
    doc.info.description = Some("Supported version".to_string());

    let number = version.to_string();
    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, mut item)| {
            drop_version_param(&mut item);
            (path.replace("{version}", &number), item)
        })
        .collect();
    doc
}

fn drop_version_param(item: &mut PathItem) {
    for operation in [&mut item.get, &mut item.patch].into_iter().flatten() {
        if let Some(params) = operation.parameters.as_mut() {
            params.retain(|p| p.name != "version");
        }
    }
}

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", versioned_doc(ApiVersion::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versioned_doc_substitutes_version_into_paths() {
        let doc = versioned_doc(ApiVersion::V3);
        assert_eq!(doc.info.version, "v3");

        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/v3/Product/{id}"));
        assert!(paths.iter().all(|p| !p.contains("{version}")));
        assert!(paths.iter().all(|p| !p.contains("AllProducts")));
    }

    #[test]
    fn version_parameter_is_removed_from_operations() {
        let doc = versioned_doc(ApiVersion::V1);
        let item = &doc.paths.paths["/v1/Product/{id}"];
        let params = item
            .get
            .as_ref()
            .and_then(|op| op.parameters.as_ref())
            .expect("parameters");
        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id"]);
    }

    #[test]
    fn image_uri_is_documented_as_a_string() {
        let doc = serde_json::to_value(versioned_doc(ApiVersion::V1)).expect("doc serializes");
        let schemas = &doc["components"]["schemas"];
        for name in ["v1.Product", "v3.Product"] {
            assert_eq!(schemas[name]["properties"]["imgUri"]["type"], "string", "{name}");
        }
    }
}
