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
use crate::Credential;
use log::warn;
use marvelsign_core::utils::Redact;
use marvelsign_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config carries the keys used to build an [`AuthMiddleware`](crate::AuthMiddleware).
///
/// Fields left as `None` can be filled from the environment with
/// [`Config::from_env`]. Empty values are treated as unset.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_key` used in public key mode.
    ///
    /// - this field if it's `is_some`
    /// - env value: `MARVEL_API_KEY`
    pub api_key: Option<String>,
    /// `private_key` used in key pair mode.
    ///
    /// - this field if it's `is_some`
    /// - env value: `MARVEL_PRIVATE_KEY`
    pub private_key: Option<String>,
    /// `public_key` used in key pair mode.
    ///
    /// - this field if it's `is_some`
    /// - env value: `MARVEL_PUBLIC_KEY`
    pub public_key: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(Redact::from))
            .field("private_key", &self.private_key.as_ref().map(Redact::from))
            .field("public_key", &self.public_key.as_ref().map(Redact::from))
            .finish()
    }
}

impl Config {
    /// Load config from env, keeping values that are already set.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        if self.api_key.is_none() {
            self.api_key = envs.get(MARVEL_API_KEY).cloned();
        }
        if self.private_key.is_none() {
            self.private_key = envs.get(MARVEL_PRIVATE_KEY).cloned();
        }
        if self.public_key.is_none() {
            self.public_key = envs.get(MARVEL_PUBLIC_KEY).cloned();
        }

        self
    }

    /// Decide which credential this config describes.
    ///
    /// - private and public key set: key pair mode.
    /// - otherwise `api_key`, or a lone `public_key`: public key mode.
    /// - a private key without a public key is rejected.
    pub fn credential(&self) -> Result<Credential> {
        let api_key = non_empty(&self.api_key);
        let private_key = non_empty(&self.private_key);
        let public_key = non_empty(&self.public_key);

        match (private_key, public_key, api_key) {
            (Some(private_key), Some(public_key), _) => Ok(Credential::KeyPair {
                private_key: private_key.to_string(),
                public_key: public_key.to_string(),
            }),
            (Some(_), None, _) => Err(Error::credential_invalid(format!(
                "private key is set but {MARVEL_PUBLIC_KEY} is missing"
            ))),
            (None, public_key, Some(api_key)) => {
                if public_key.is_some_and(|v| v != api_key) {
                    warn!("both api key and public key are set, using the api key");
                }
                Ok(Credential::ApiKey {
                    api_key: api_key.to_string(),
                })
            }
            (None, Some(public_key), None) => Ok(Credential::ApiKey {
                api_key: public_key.to_string(),
            }),
            (None, None, None) => Err(Error::config_invalid(format!(
                "no credential configured, set {MARVEL_API_KEY} or {MARVEL_PRIVATE_KEY} and {MARVEL_PUBLIC_KEY}"
            ))),
        }
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|v| !v.is_empty())
}
