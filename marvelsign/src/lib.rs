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

//! Marvel Comics API request authentication.
//!
//! The Marvel API expects every request to carry its credentials in the
//! query string. [`AuthMiddleware`] is an [`Intercept`](marvelsign_core::Intercept)
//! that attaches them right before a request is sent:
//!
//! - public key mode: `apikey`
//! - key pair mode: `apikey`, `hash` and `ts`, where `hash` is
//!   `md5(ts + private_key + public_key)`
//!
//! ## Example
//!
//! ```no_run
//! use bytes::Bytes;
//! use http::Uri;
//! use marvelsign::{AuthMiddleware, MARVEL_BASE_URL};
//! use marvelsign_core::{Chain, Context, Result};
//!
//! # async fn example() -> Result<()> {
//! let chain = Chain::new(Context::new(), Uri::from_static(MARVEL_BASE_URL))
//!     .with_intercept(AuthMiddleware::from_key_pair("private", "public"));
//!
//! let req = http::Request::get("/characters?name=Hulk").body(Bytes::new())?;
//! let _resp = chain.send(req, "getCharacterCollection").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::MARVEL_BASE_URL;

mod credential;
pub use credential::Credential;

mod config;
pub use config::Config;

mod hash;
pub use hash::generate_hash;

mod middleware;
pub use middleware::AuthMiddleware;
