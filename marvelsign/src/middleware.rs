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

use crate::constants::*;
use crate::{generate_hash, Config, Credential};
use async_trait::async_trait;
use bytes::Bytes;
use http::Uri;
use log::{debug, warn};
use marvelsign_core::time::Timestamp;
use marvelsign_core::{Intercept, Next, Result, SigningPath};

/// AuthMiddleware attaches the Marvel API authentication parameters to the
/// query of every request it intercepts.
///
/// Only the path and query of the request change. Method, scheme,
/// authority, headers and body are forwarded as they are, and so is the
/// response or error coming back from the rest of the chain.
///
/// - [Marvel API Authorization](https://developer.marvel.com/documentation/authorization)
#[derive(Debug, Clone)]
pub struct AuthMiddleware {
    credential: Credential,
}

impl AuthMiddleware {
    /// Create a middleware from a credential.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// Create a middleware in public key mode.
    ///
    /// Only `apikey` is attached. Use this for client-side applications.
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self::new(Credential::ApiKey {
            api_key: api_key.into(),
        })
    }

    /// Create a middleware in key pair mode.
    ///
    /// `apikey`, `hash` and `ts` are attached. Use this for server-side
    /// applications.
    pub fn from_key_pair(private_key: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self::new(Credential::KeyPair {
            private_key: private_key.into(),
            public_key: public_key.into(),
        })
    }

    /// Create a middleware from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.credential()?))
    }

    /// The credential this middleware signs with.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Append the authentication parameters to `path`.
    ///
    /// In key pair mode the current time is sampled once and used both for
    /// the hash and for the `ts` parameter.
    pub fn authenticate(&self, path: &mut SigningPath) {
        path.query_push(PARAM_API_KEY, self.credential.public_key());

        if let Credential::KeyPair {
            private_key,
            public_key,
        } = &self.credential
        {
            let now = Timestamp::now();
            let hash = generate_hash(&now, private_key, public_key);

            path.query_push(PARAM_HASH, &hash);
            path.query_push(PARAM_TIMESTAMP, &now.to_string());
        }
    }

    /// Return `uri` with the authentication parameters appended.
    ///
    /// Returns `None` if `uri` has no path, or if the rewritten uri can't be
    /// built. Callers are expected to use `uri` unchanged in that case.
    pub fn authenticated_uri(&self, uri: &Uri) -> Option<Uri> {
        let mut path = SigningPath::build(uri)?;
        self.authenticate(&mut path);

        let mut uri = uri.clone();
        match path.apply(&mut uri) {
            Ok(()) => Some(uri),
            Err(err) => {
                warn!("failed to attach authentication parameters: {err}");
                None
            }
        }
    }
}

#[async_trait]
impl Intercept for AuthMiddleware {
    async fn intercept(
        &self,
        mut req: http::Request<Bytes>,
        base_url: &Uri,
        operation_id: &str,
        next: Next<'_>,
    ) -> Result<http::Response<Bytes>> {
        if req.uri().path_and_query().is_none() {
            debug!("request for operation {operation_id} has no path, forwarding it unsigned");
            return next.run(req, base_url).await;
        }

        if let Some(uri) = self.authenticated_uri(req.uri()) {
            debug!(
                "authenticated {} for operation {operation_id} with {:?}",
                uri.path(),
                self.credential
            );
            *req.uri_mut() = uri;
        }

        next.run(req, base_url).await
    }
}
