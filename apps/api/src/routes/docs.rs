//! API documentation routes. Mounted only in development mode.

use axum::{response::Html, Json};
use serde_json::{json, Value};

pub const OPENAPI_PATH: &str = "/openapi.json";

const TITLE: &str = "Interview Question Generator API";

/// GET /openapi.json
pub async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}

/// GET /docs
pub async fn swagger_ui_handler() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{TITLE} - Swagger UI</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>SwaggerUIBundle({{ url: '{OPENAPI_PATH}', dom_id: '#swagger-ui' }});</script>
</body>
</html>"#
    ))
}

/// GET /redoc
pub async fn redoc_handler() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{TITLE} - ReDoc</title>
</head>
<body>
<redoc spec-url="{OPENAPI_PATH}"></redoc>
<script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>"#
    ))
}

fn detail_schema() -> Value {
    json!({
        "type": "object",
        "properties": { "detail": { "type": "string" } },
        "required": ["detail"]
    })
}

fn openapi_document() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": TITLE,
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/generate": {
                "post": {
                    "summary": "Generate interview questions",
                    "operationId": "generate_questions",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/PromptRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Questions grouped as Easy / Medium / Hard",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/QuestionsResponse" }
                                }
                            }
                        },
                        "422": {
                            "description": "Invalid request body",
                            "content": { "application/json": { "schema": detail_schema() } }
                        },
                        "429": {
                            "description": "Quota exceeded or API error",
                            "content": { "application/json": { "schema": detail_schema() } }
                        },
                        "500": {
                            "description": "No questions generated",
                            "content": { "application/json": { "schema": detail_schema() } }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "PromptRequest": {
                    "type": "object",
                    "properties": { "role": { "type": "string" } },
                    "required": ["role"]
                },
                "QuestionsResponse": {
                    "type": "object",
                    "properties": { "questions": { "type": "string" } },
                    "required": ["questions"]
                }
            }
        }
    })
}
