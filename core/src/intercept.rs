// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;

use bytes::Bytes;
use http::uri::PathAndQuery;
use http::Uri;
use log::debug;

use crate::{Context, Error, Result};

/// Intercept is the hook invoked on every outgoing request right before it
/// is sent.
///
/// An interceptor receives the in-flight request, the base url of the API,
/// the id of the operation being performed and the rest of the chain as
/// `next`. It may rewrite the request and must hand it on through
/// [`Next::run`]. `Next` is consumed by `run`, so the continuation can be
/// called at most once.
///
/// ```
/// use async_trait::async_trait;
/// use bytes::Bytes;
/// use http::Uri;
/// use marvelsign_core::{Intercept, Next, Result};
///
/// #[derive(Debug)]
/// struct UserAgent;
///
/// #[async_trait]
/// impl Intercept for UserAgent {
///     async fn intercept(
///         &self,
///         mut req: http::Request<Bytes>,
///         base_url: &Uri,
///         _operation_id: &str,
///         next: Next<'_>,
///     ) -> Result<http::Response<Bytes>> {
///         req.headers_mut()
///             .insert(http::header::USER_AGENT, http::HeaderValue::from_static("marvelsign"));
///         next.run(req, base_url).await
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait Intercept: Debug + Send + Sync + 'static {
    /// Intercept the request and forward it to `next`.
    async fn intercept(
        &self,
        req: http::Request<Bytes>,
        base_url: &Uri,
        operation_id: &str,
        next: Next<'_>,
    ) -> Result<http::Response<Bytes>>;
}

/// Next is the remainder of an interception chain.
#[derive(Debug)]
pub struct Next<'a> {
    ctx: &'a Context,
    interceptors: &'a [Arc<dyn Intercept>],
    operation_id: &'a str,
}

impl<'a> Next<'a> {
    /// Create a chain remainder that runs `interceptors` in order and then
    /// sends the request through the transport held by `ctx`.
    pub fn new(
        ctx: &'a Context,
        interceptors: &'a [Arc<dyn Intercept>],
        operation_id: &'a str,
    ) -> Self {
        Self {
            ctx,
            interceptors,
            operation_id,
        }
    }

    /// Forward the request to the next interceptor, or to the transport if
    /// none is left.
    ///
    /// Errors from the transport are returned as is.
    pub async fn run(
        self,
        req: http::Request<Bytes>,
        base_url: &Uri,
    ) -> Result<http::Response<Bytes>> {
        match self.interceptors.split_first() {
            Some((current, rest)) => {
                let next = Next {
                    ctx: self.ctx,
                    interceptors: rest,
                    operation_id: self.operation_id,
                };
                current
                    .intercept(req, base_url, self.operation_id, next)
                    .await
            }
            None => {
                let (mut parts, body) = req.into_parts();
                parts.uri = resolve_uri(base_url, &parts.uri)?;
                debug!(
                    "sending {} {} for operation {}",
                    parts.method,
                    parts.uri.path(),
                    self.operation_id
                );

                self.ctx
                    .http_send(http::Request::from_parts(parts, body))
                    .await
            }
        }
    }
}

/// Resolve a request uri against the base url of the API.
///
/// - Absolute uris are returned unchanged.
/// - Otherwise scheme and authority come from `base_url`, and the request's
///   path and query is appended to the base path.
/// - A request without a path is sent to `base_url` itself.
pub fn resolve_uri(base_url: &Uri, uri: &Uri) -> Result<Uri> {
    if uri.scheme().is_some() {
        return Ok(uri.clone());
    }

    let Some(paq) = uri.path_and_query() else {
        return Ok(base_url.clone());
    };

    let mut parts = base_url.clone().into_parts();
    if parts.scheme.is_none() || parts.authority.is_none() {
        return Err(Error::request_invalid(format!(
            "base url {base_url} must be absolute"
        )));
    }

    let base_path = base_url.path().trim_end_matches('/');
    let joined = if paq.as_str().starts_with('/') {
        format!("{base_path}{paq}")
    } else {
        format!("{base_path}/{paq}")
    };
    parts.path_and_query = Some(PathAndQuery::from_str(&joined)?);

    Ok(Uri::from_parts(parts)?)
}

/// Chain runs registered interceptors in order and then sends the request
/// through the context's transport.
///
/// This is the seam a generated API client drives: every operation goes
/// through [`Chain::send`].
#[derive(Debug, Clone)]
pub struct Chain {
    ctx: Context,
    base_url: Uri,
    interceptors: Vec<Arc<dyn Intercept>>,
}

impl Chain {
    /// Create a new chain without interceptors.
    pub fn new(ctx: Context, base_url: Uri) -> Self {
        Self {
            ctx,
            base_url,
            interceptors: Vec::new(),
        }
    }

    /// Register an interceptor. Interceptors run in registration order.
    pub fn with_intercept(mut self, interceptor: impl Intercept) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Run the request through every interceptor and send it.
    pub async fn send(
        &self,
        req: http::Request<Bytes>,
        operation_id: &str,
    ) -> Result<http::Response<Bytes>> {
        Next::new(&self.ctx, &self.interceptors, operation_id)
            .run(req, &self.base_url)
            .await
    }
}
