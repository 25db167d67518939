//! OpenAPI document synthesis for one credential definition.
//!
//! Builds a complete OpenAPI 3.0.1 JSON document describing how a client
//! submits the given kind of credential: one `POST /xpanse/credentials`
//! operation plus the result envelope, request body and variable item
//! schemas. Synthesis never touches the filesystem or the network.
//!
//! The request-body schema carries an example for the variables array,
//! serialized from a purely local projection of the definition's variable
//! templates with each description standing in as the example value. The
//! canonical definition is never written to.

use serde_json::{json, Value};
use tracing::error;

use credoc_core::{CredentialVariable, CredentialVariables};

/// Synthesize the OpenAPI document for `definition` as a JSON string.
pub fn credential_openapi_json(
    definition: &CredentialVariables,
    service_url: &str,
    app_version: &str,
) -> String {
    let doc = credential_openapi_doc(definition, service_url, app_version);
    match serde_json::to_string_pretty(&doc) {
        Ok(json) => json,
        Err(err) => {
            error!(%err, "failed to serialize credential openapi document");
            String::new()
        }
    }
}

/// Synthesize the OpenAPI document for `definition` as a JSON value.
pub fn credential_openapi_doc(
    definition: &CredentialVariables,
    service_url: &str,
    app_version: &str,
) -> Value {
    let csp = definition.csp.to_value();
    let credential_type = definition.credential_type.to_value();

    json!({
        "openapi": "3.0.1",
        "info": {
            "title": "OpenAPI definition",
            "description": format!(
                "OpenAPI for users adding credential to connect the cloud service provider {csp}"
            ),
            "version": app_version
        },
        "servers": [
            {
                "url": service_url,
                "description": "Generated server url"
            }
        ],
        "tags": [
            {
                "name": "Credentials Management",
                "description": "APIs to manage credentials for authentication."
            }
        ],
        "paths": {
            "/xpanse/credentials": {
                "post": {
                    "tags": [
                        "Credentials Management"
                    ],
                    "description": format!(
                        "Add credential with type {credential_type} of the cloud service provider {csp}."
                    ),
                    "operationId": "addCredential",
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": {
                                    "$ref": "#/components/schemas/CreateCredential"
                                }
                            }
                        },
                        "required": true
                    },
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "boolean"
                                    }
                                }
                            }
                        },
                        "400": {
                            "description": "Bad Request",
                            "content": {
                                "*/*": {
                                    "schema": {
                                        "$ref": "#/components/schemas/Response"
                                    }
                                }
                            }
                        },
                        "404": {
                            "description": "Not Found",
                            "content": {
                                "*/*": {
                                    "schema": {
                                        "$ref": "#/components/schemas/Response"
                                    }
                                }
                            }
                        },
                        "422": {
                            "description": "Unprocessable Entity",
                            "content": {
                                "*/*": {
                                    "schema": {
                                        "$ref": "#/components/schemas/Response"
                                    }
                                }
                            }
                        },
                        "500": {
                            "description": "Internal Server Error",
                            "content": {
                                "*/*": {
                                    "schema": {
                                        "$ref": "#/components/schemas/Response"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Response": {
                    "required": [
                        "details",
                        "resultType",
                        "success"
                    ],
                    "type": "object",
                    "properties": {
                        "resultType": {
                            "type": "string",
                            "description": "The result code of response.",
                            "enum": [
                                "Success",
                                "Runtime Failure",
                                "Parameters Invalid",
                                "Terraform Script Invalid",
                                "Unprocessable Entity",
                                "Response Not Valid"
                            ]
                        },
                        "details": {
                            "type": "array",
                            "description": "Details of the errors occurred",
                            "items": {
                                "type": "string",
                                "description": "Details of the errors occurred"
                            }
                        },
                        "success": {
                            "type": "boolean",
                            "description": "Describes if the request is successful"
                        }
                    }
                },
                "CreateCredential": {
                    "required": [
                        "csp",
                        "name",
                        "timeToLive",
                        "type",
                        "variables"
                    ],
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "example": definition.name,
                            "description": "The name of the credential"
                        },
                        "csp": {
                            "type": "string",
                            "example": csp,
                            "description": "The cloud service provider of the credential.",
                            "enum": [
                                "aws",
                                "azure",
                                "alicloud",
                                "huawei",
                                "openstack",
                                "flexibleEngine"
                            ]
                        },
                        "description": {
                            "type": "string",
                            "example": definition.description,
                            "description": "The description of the credential"
                        },
                        "type": {
                            "type": "string",
                            "example": credential_type,
                            "description": "The type of the credential",
                            "enum": [
                                "variables",
                                "http_authentication",
                                "api_key",
                                "oauth2"
                            ]
                        },
                        "variables": {
                            "type": "array",
                            "example": variables_example(&definition.variables),
                            "description": "The variables list of the credential",
                            "items": {
                                "$ref": "#/components/schemas/CredentialVariable"
                            }
                        },
                        "timeToLive": {
                            "type": "integer",
                            "description": "The time in seconds to live of the credential",
                            "format": "int32",
                            "example": 3600
                        }
                    }
                },
                "CredentialVariable": {
                    "required": [
                        "description",
                        "name",
                        "value"
                    ],
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "The name of the CredentialVariable, this field is provided by the plugin of the cloud service provider."
                        },
                        "description": {
                            "type": "string",
                            "description": "The description of the CredentialVariable, this field is provided by the plugin of the cloud service provider."
                        },
                        "value": {
                            "type": "string",
                            "description": "The value of the CredentialVariable, this field is filled by the user."
                        }
                    },
                    "description": "The variables list of the credential"
                }
            }
        }
    })
}

/// The example payload for the variables array: each variable with its
/// description standing in as the value.
///
/// Works on a local projection of the templates; the canonical definition
/// stays untouched. Serialization failure degrades the example to an empty
/// string instead of aborting document synthesis.
fn variables_example(variables: &[CredentialVariable]) -> Value {
    let projected: Vec<CredentialVariable> = variables
        .iter()
        .map(|v| CredentialVariable {
            name: v.name.clone(),
            description: v.description.clone(),
            value: v.description.clone(),
        })
        .collect();
    match serde_json::to_value(&projected) {
        Ok(example) => example,
        Err(err) => {
            error!(%err, "failed to serialize credential variables example");
            Value::String(String::new())
        }
    }
}
