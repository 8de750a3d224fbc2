//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every user endpoint along with request, response
//! and error schemas. The document is served on `/api-docs/openapi.json`
//! and browsable through Swagger UI on `/swagger-ui`.

use utoipa::OpenApi;
use utoipa::openapi::server::Server;

use crate::config::Configuration;
use crate::error::{FieldError, ResponseError};
use crate::model::body::UserBody;
use crate::model::response::UserResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Business API",
        version = "1.0.0",
        description = "This API handles users registration, lookup and update.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        crate::router::users::create::handler,
        crate::router::users::get::by_email,
        crate::router::users::get::by_id,
        crate::router::users::update::handler,
    ),
    components(schemas(UserBody, UserResponse, ResponseError, FieldError)),
    tags(
        (name = "User", description = "User management API")
    )
)]
pub struct ApiDoc;

/// Build the document, pointing it at the configured public URL.
pub fn openapi(config: &Configuration) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(config.url.clone())]);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = openapi(&Configuration::default());

        let users = doc.paths.paths.get("/api/users").unwrap();
        assert!(users.post.is_some());

        let by_email = doc.paths.paths.get("/api/users/email").unwrap();
        assert!(by_email.get.is_some());

        let by_id = doc.paths.paths.get("/api/users/{id}").unwrap();
        assert!(by_id.get.is_some());
        assert!(by_id.put.is_some());
    }

    #[test]
    fn test_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.unwrap().schemas;

        for name in ["UserBody", "UserResponse", "ResponseError", "FieldError"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }

    #[test]
    fn test_server_url() {
        let doc = openapi(&Configuration::default());
        assert_eq!(
            doc.servers.unwrap()[0].url,
            Configuration::default().url
        );
    }
}
