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

//! Core components for authenticating Marvel Comics API requests.
//!
//! This crate provides the foundational types the marvelsign ecosystem is
//! built on.
//!
//! ## Overview
//!
//! - **Intercept**: the hook run on every outgoing request before it is sent,
//!   together with [`Next`], the continuation that forwards the request.
//! - **Chain**: runs registered interceptors in order and ends with the
//!   transport.
//! - **Context**: holds the transport ([`HttpSend`]) and environment
//!   ([`Env`]) implementations.
//! - **SigningPath**: splits a request's path and query so parameters can be
//!   appended without touching the ones already present.
//!
//! ## Example
//!
//! ```no_run
//! use marvelsign_core::{Chain, Context, Result};
//! use bytes::Bytes;
//! use http::Uri;
//!
//! # async fn example() -> Result<()> {
//! let chain = Chain::new(
//!     Context::new(),
//!     Uri::from_static("https://gateway.marvel.com/v1/public"),
//! );
//!
//! let req = http::Request::get("/characters").body(Bytes::new())?;
//! let _resp = chain.send(req, "getCharacterCollection").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: MD5 hex digests
//! - [`time`]: wall clock and [`time::Timestamp`]
//! - [`utils`]: redaction of secrets in debug output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod context;
pub use context::Context;
mod env;
pub use env::{Env, NoopEnv, OsEnv, StaticEnv};
mod http_send;
pub use http_send::{HttpSend, NoopHttpSend};
mod intercept;
pub use intercept::{resolve_uri, Chain, Intercept, Next};
mod request;
pub use request::SigningPath;
