/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::marshall::JsonMarshaller;
use crate::operation::{JsonOperation, JsonService, OperationError};
use crate::response::{JsonResponseHandler, ResponseFailure};
use crate::transport::Transport;
use http::Uri;
use smithy_http::response::ParseStrictResponse;
use smithy_http::result::{BoxError, SdkError, SdkSuccess};
use std::sync::Arc;
use tracing::{debug, info_span};

/// Result of calling operation `O`.
pub type CallResult<O> =
    Result<<O as JsonOperation>::Output, SdkError<OperationError<O>>>;

/// Client for any AWS JSON service.
///
/// The client is cheap to clone; clones share the configuration and the transport.
/// ```rust,ignore
/// let client = Client::new(Config::from_env(), transport);
/// let output = client.call::<CreateTrail>(&CreateTrailInput::default().name("t1"))?;
/// ```
#[derive(Debug)]
pub struct Client<T> {
    config: Arc<Config>,
    transport: Arc<T>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Client {
            config: self.config.clone(),
            transport: self.transport.clone(),
        }
    }
}

impl<T: Transport> Client<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Client {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs operation `O` and keeps the raw response alongside the parsed output.
    ///
    /// `None` input is rejected before anything is sent.
    pub fn call_raw<O: JsonOperation>(
        &self,
        input: Option<&O::Input>,
    ) -> Result<SdkSuccess<O::Output>, SdkError<OperationError<O>>> {
        let service = <O::Service as JsonService>::METADATA;
        let span = info_span!(
            "call",
            service = service.service_name,
            operation = O::NAME
        );
        let _enter = span.enter();

        let request = JsonMarshaller::<O>::new()
            .marshall(input)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        let endpoint = self
            .config
            .endpoint_for(&service)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        let request = request
            .augment(|mut request| {
                let uri = apply_endpoint(&endpoint, request.uri())?;
                *request.uri_mut() = uri;
                Ok::<_, BoxError>(request)
            })
            .map_err(SdkError::ConstructionFailure)?;
        if let Some(metadata) = request.metadata() {
            debug!(
                operation = metadata.name(),
                service = metadata.service(),
                uri = %request.http().uri(),
                "dispatching request"
            );
        }

        let (request, _) = request.into_parts();
        let response = self
            .transport
            .send(request)
            .map_err(SdkError::DispatchFailure)?;
        debug!(status = %response.status(), "received response");

        match JsonResponseHandler::<O>::new().parse(&response) {
            Ok(parsed) => Ok(SdkSuccess {
                raw: response,
                parsed,
            }),
            Err(ResponseFailure::Service(err)) => {
                Err(SdkError::ServiceError { raw: response, err })
            }
            Err(ResponseFailure::Unparseable(err)) => Err(SdkError::ResponseError {
                raw: response,
                err: Box::new(err),
            }),
        }
    }

    /// Runs operation `O` on the calling thread.
    pub fn call<O: JsonOperation>(&self, input: &O::Input) -> CallResult<O> {
        self.call_raw::<O>(Some(input)).map(|success| success.parsed)
    }
}

impl<T: Transport + 'static> Client<T> {
    /// Runs operation `O` on Tokio's blocking pool.
    ///
    /// Dropping the returned future does not cancel a call that has already started.
    pub async fn call_async<O>(&self, input: O::Input) -> CallResult<O>
    where
        O: JsonOperation + 'static,
        O::Input: Send + 'static,
        O::Output: Send + 'static,
    {
        let client = self.clone();
        match tokio::task::spawn_blocking(move || client.call::<O>(&input)).await {
            Ok(result) => result,
            Err(err) => Err(SdkError::DispatchFailure(err.into())),
        }
    }
}

/// Joins the endpoint with the request's path: scheme and authority come from the endpoint.
fn apply_endpoint(endpoint: &Uri, request: &Uri) -> Result<Uri, http::Error> {
    let mut builder = Uri::builder();
    if let Some(scheme) = endpoint.scheme() {
        builder = builder.scheme(scheme.clone());
    }
    if let Some(authority) = endpoint.authority() {
        builder = builder.authority(authority.clone());
    }
    let path = format!(
        "{}{}",
        endpoint.path().trim_end_matches('/'),
        request
            .path_and_query()
            .map(|path| path.as_str())
            .unwrap_or("/")
    );
    builder.path_and_query(path).build()
}
