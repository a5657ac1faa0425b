//! API Client
//!
//! Builds requests from queries and resource paths, hands them to a
//! [`Transport`], and classifies the replies.

use ds_core::config::ClientConfig;
use ds_core::{ApiRequest, DsError, DsResult, Transport};
use ds_queries::Query;

use crate::response::Response;

/// Document store client over a pluggable transport
pub struct Client<T: Transport> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run a query, returning a collection of documents
    pub async fn documents(&self, query: &Query) -> DsResult<Response> {
        let body = query.with_order_format(self.config.order_format).to_value();
        let request = ApiRequest::post(self.url("query/")?, body);
        self.execute(request, "document").await
    }

    /// Fetch a single document by id
    pub async fn document(&self, schema: &str, id: &str) -> DsResult<Response> {
        ensure_schema(schema)?;
        let url = self.config.segments_endpoint(&["schemas", schema, id])?;
        let request = ApiRequest::get(url.to_string());
        self.execute(request, "document").await
    }

    /// Fetch one schema definition
    pub async fn schema(&self, name: &str) -> DsResult<Response> {
        ensure_schema(name)?;
        let request = ApiRequest::get(self.url(&format!("schemas/{}/", name))?);
        self.execute(request, "schema").await
    }

    /// List all schema definitions
    pub async fn schemas(&self) -> DsResult<Response> {
        let request = ApiRequest::get(self.url("schemas/")?);
        self.execute(request, "schema").await
    }

    /// Send a request and classify the reply under `resource_name`
    pub async fn execute(&self, request: ApiRequest, resource_name: &str) -> DsResult<Response> {
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            resource = resource_name,
            "Sending request"
        );
        let raw = self.transport.send(request).await?;
        let response = Response::from_raw(raw, resource_name)?;
        if !response.is_success() {
            tracing::warn!(
                status = response.status(),
                resource = resource_name,
                "Request failed"
            );
        }
        Ok(response)
    }

    fn url(&self, path: &str) -> DsResult<String> {
        Ok(self.config.endpoint(path)?.to_string())
    }
}

fn ensure_schema(schema: &str) -> DsResult<()> {
    if Query::schema_valid(schema) {
        Ok(())
    } else {
        Err(DsError::invalid_schema(schema))
    }
}
