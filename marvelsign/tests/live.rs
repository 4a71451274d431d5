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

//! Tests against the real Marvel API.
//!
//! Skipped unless `MARVELSIGN_TEST=on`. Keys are read from
//! `MARVEL_PRIVATE_KEY` / `MARVEL_PUBLIC_KEY` or `MARVEL_API_KEY`, a `.env`
//! file is honoured.

use std::env;

use anyhow::Result;
use bytes::Bytes;
use http::{StatusCode, Uri};
use log::warn;
use marvelsign::{AuthMiddleware, Config, MARVEL_BASE_URL};
use marvelsign_core::{Chain, Context, OsEnv};
use marvelsign_http_send_reqwest::ReqwestHttpSend;

fn init_chain() -> Option<Chain> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("MARVELSIGN_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());
    let config = Config::default().from_env(&ctx);
    let middleware =
        AuthMiddleware::from_config(&config).expect("marvel credentials must be configured");

    Some(Chain::new(ctx, Uri::from_static(MARVEL_BASE_URL)).with_intercept(middleware))
}

#[tokio::test]
async fn test_list_characters() -> Result<()> {
    let Some(chain) = init_chain() else {
        warn!("MARVELSIGN_TEST is not set, skipped");
        return Ok(());
    };

    let req = http::Request::get("/characters?limit=1").body(Bytes::new())?;
    let resp = chain.send(req, "getCharacterCollection").await?;

    assert_eq!(
        resp.status(),
        StatusCode::OK,
        "{}",
        String::from_utf8_lossy(resp.body())
    );
    Ok(())
}
