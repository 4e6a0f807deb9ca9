#![forbid(unsafe_code)]

//! Fetches the introspection document from a running GraphQL endpoint.
//! This is the only networked piece of the pipeline; it returns the raw
//! JSON body so the compiler core stays transport-free.

use std::collections::HashMap;

use reqwest::header::USER_AGENT;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("could not reach `{url}`: {source}")]
    Transport { url: String, source: reqwest::Error },
    #[error("`{url}` answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("could not read the response body from `{url}`: {source}")]
    Body { url: String, source: reqwest::Error },
    #[error("`{url}` returned GraphQL errors: {message}")]
    GraphQl { url: String, message: String },
}

#[derive(Debug, serde::Serialize)]
struct Request {
    query: &'static str,
    variables: HashMap<&'static str, String>,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorProbe {
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, serde::Deserialize)]
struct GraphQlError {
    message: String,
}

/// The standard introspection query: every type with its fields, arguments,
/// enum values and possible types, with type references nested deep enough
/// for the wrapper chains real schemas produce.
pub const INTROSPECTION_QUERY: &str = indoc::indoc! {r"
    query IntrospectionQuery {
      __schema {
        queryType { name }
        mutationType { name }
        types {
          ...FullType
        }
        directives {
          name
          description
          args { ...InputValue }
        }
      }
    }

    fragment FullType on __Type {
      kind
      name
      description
      fields(includeDeprecated: true) {
        name
        description
        args { ...InputValue }
        type { ...TypeRef }
        isDeprecated
        deprecationReason
      }
      inputFields { ...InputValue }
      interfaces { ...TypeRef }
      enumValues(includeDeprecated: true) {
        name
        description
        isDeprecated
        deprecationReason
      }
      possibleTypes { ...TypeRef }
    }

    fragment InputValue on __InputValue {
      name
      description
      type { ...TypeRef }
    }

    fragment TypeRef on __Type {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
                ofType {
                  kind
                  name
                  ofType {
                    kind
                    name
                  }
                }
              }
            }
          }
        }
      }
    }
"};

/// POSTs the introspection query to `url` and returns the raw JSON response
/// body. The body is handed to the schema parser untouched so a transport
/// failure can never leave a half-built schema behind.
pub async fn introspect(
    url: &Url,
    headers: &[(String, String)],
) -> Result<String, IntrospectionError> {
    let request = Request {
        query: INTROSPECTION_QUERY,
        variables: HashMap::default(),
    };

    let mut request_builder = reqwest::Client::new()
        .post(url.clone())
        .header(USER_AGENT, "swiftgraph")
        .header("Accept", "application/json")
        .json(&request);

    for (name, value) in headers {
        request_builder = request_builder.header(name.as_str(), value.as_str());
    }

    tracing::debug!(%url, "requesting introspection schema");

    let response = request_builder
        .send()
        .await
        .map_err(|source| IntrospectionError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IntrospectionError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| IntrospectionError::Body {
            url: url.to_string(),
            source,
        })?;

    // Endpoints report execution failures in-band with a 200; surface them
    // instead of letting the schema parser trip over a missing __schema.
    if let Ok(probe) = serde_json::from_str::<ErrorProbe>(&body) {
        if !probe.errors.is_empty() {
            let message = probe
                .errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(IntrospectionError::GraphQl {
                url: url.to_string(),
                message,
            });
        }
    }

    Ok(body)
}
