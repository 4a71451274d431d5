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

use anyhow::Result;
use bytes::Bytes;
use http::Uri;
use marvelsign::{AuthMiddleware, Config, MARVEL_BASE_URL};
use marvelsign_core::{Chain, Context, OsEnv};
use marvelsign_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();
    let _ = dotenv::dotenv();

    // Keys come from MARVEL_PRIVATE_KEY + MARVEL_PUBLIC_KEY, or MARVEL_API_KEY.
    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());
    let config = Config::default().from_env(&ctx);
    println!("Loaded config: {config:?}");

    let chain = Chain::new(ctx, Uri::from_static(MARVEL_BASE_URL))
        .with_intercept(AuthMiddleware::from_config(&config)?);

    let name = std::env::args().nth(1).unwrap_or_else(|| "Hulk".to_string());
    let req = http::Request::get(format!("/characters?name={name}")).body(Bytes::new())?;

    match chain.send(req, "getCharacterCollection").await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("{}", String::from_utf8_lossy(resp.body()));
        }
        Err(e) => eprintln!("Request failed: {e}"),
    }

    Ok(())
}
