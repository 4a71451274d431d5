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

use std::str::FromStr;

use http::uri::PathAndQuery;
use http::Uri;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

use crate::Result;

/// Everything except RFC 3986 unreserved characters gets encoded in
/// appended query keys and values.
static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// SigningPath is the path and query of a request split apart so query
/// parameters can be appended.
///
/// Query segments that were already present are kept as raw text: their
/// order and their encoding survive a build/apply round unchanged. Only
/// pairs pushed through [`SigningPath::query_push`] are encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningPath {
    /// Path without the query, as found in the request.
    pub path: String,
    /// Raw query segments, in order, without the `&` separators.
    ///
    /// Empty segments (`a&&b`) are kept so the query joins back to the
    /// same text.
    pub query: Vec<String>,
}

impl SigningPath {
    /// Split the path and query of `uri`.
    ///
    /// Returns `None` when the uri carries no path at all, for example an
    /// authority-form uri like `example.com:443`.
    pub fn build(uri: &Uri) -> Option<Self> {
        let paq = uri.path_and_query()?;

        Some(SigningPath {
            path: paq.path().to_string(),
            query: paq
                .query()
                .filter(|q| !q.is_empty())
                .map(|q| q.split('&').map(str::to_string).collect())
                .unwrap_or_default(),
        })
    }

    /// Push a new query pair after the existing ones.
    ///
    /// Both key and value are percent encoded.
    pub fn query_push(&mut self, key: &str, value: &str) {
        let mut s = String::with_capacity(key.len() + value.len() + 1);
        s.extend(utf8_percent_encode(key, &QUERY_ENCODE_SET));
        s.push('=');
        s.extend(utf8_percent_encode(value, &QUERY_ENCODE_SET));
        self.query.push(s);
    }

    /// Get query size.
    #[inline]
    pub fn query_size(&self) -> usize {
        self.query.iter().map(String::len).sum::<usize>()
    }

    /// Serialize back into a single path and query.
    ///
    /// ```shell
    /// ("/a", ["b=c", "d"]) => "/a?b=c&d"
    /// ("/a", [])           => "/a"
    /// ```
    pub fn to_path_and_query(&self) -> Result<PathAndQuery> {
        if self.query.is_empty() {
            return Ok(PathAndQuery::from_str(&self.path)?);
        }

        let mut s = String::with_capacity(self.path.len() + self.query_size() + self.query.len());
        s.push_str(&self.path);
        s.push('?');
        for (i, seg) in self.query.iter().enumerate() {
            if i > 0 {
                s.push('&');
            }
            s.push_str(seg);
        }

        Ok(PathAndQuery::from_str(&s)?)
    }

    /// Apply the path and query back to `uri`.
    ///
    /// Scheme and authority are kept. `uri` is left untouched on error.
    pub fn apply(&self, uri: &mut Uri) -> Result<()> {
        let mut parts = uri.clone().into_parts();
        parts.path_and_query = Some(self.to_path_and_query()?);
        *uri = Uri::from_parts(parts)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("/path/to/resource", "/path/to/resource", &[]; "no query")]
    #[test_case("/path/to/resource?", "/path/to/resource", &[]; "empty query")]
    #[test_case("/path/to/resource?boolean", "/path/to/resource", &["boolean"]; "flag")]
    #[test_case(
        "/path/to/resource?query=value&anotherQuery=anotherValue",
        "/path/to/resource",
        &["query=value", "anotherQuery=anotherValue"];
        "pairs"
    )]
    #[test_case(
        "https://gateway.marvel.com/v1/public/characters?name=Spider%2DMan&a=b+c",
        "/v1/public/characters",
        &["name=Spider%2DMan", "a=b+c"];
        "absolute keeps encoding"
    )]
    #[test_case("/p?a=1&&b=2", "/p", &["a=1", "", "b=2"]; "empty segment")]
    #[test_case("/p?&a=1", "/p", &["", "a=1"]; "leading separator")]
    fn test_build(input: &str, path: &str, query: &[&str]) {
        let uri: Uri = input.parse().expect("uri must be valid");
        let sp = SigningPath::build(&uri).expect("path must exist");

        assert_eq!(sp.path, path);
        assert_eq!(sp.query, query);
    }

    #[test_case("/p?a=1&&b=2"; "empty segment")]
    #[test_case("/p?&a=1&"; "outer separators")]
    #[test_case("/p?x=%20y&flag"; "encoded and flag")]
    fn test_build_apply_keeps_query(input: &str) {
        let mut uri: Uri = input.parse().expect("uri must be valid");
        let sp = SigningPath::build(&uri).expect("path must exist");
        sp.apply(&mut uri).expect("apply must succeed");

        assert_eq!(uri.to_string(), input);
    }

    #[test]
    fn test_build_without_path() {
        let uri: Uri = "gateway.marvel.com:443".parse().expect("uri must be valid");
        assert!(SigningPath::build(&uri).is_none());
    }

    #[test]
    fn test_query_push_encodes() {
        let mut sp = SigningPath {
            path: "/".to_string(),
            query: vec!["a=1".to_string()],
        };
        sp.query_push("apikey", "pub key/+=");
        sp.query_push("ts", "1000.000000");

        assert_eq!(
            sp.to_path_and_query().expect("must be valid").as_str(),
            "/?a=1&apikey=pub%20key%2F%2B%3D&ts=1000.000000"
        );
    }

    #[test]
    fn test_apply_keeps_authority() {
        let mut uri: Uri = "https://gateway.marvel.com/v1/public/comics?limit=10"
            .parse()
            .expect("uri must be valid");
        let mut sp = SigningPath::build(&uri).expect("path must exist");
        sp.query_push("apikey", "abc");
        sp.apply(&mut uri).expect("apply must succeed");

        assert_eq!(
            uri.to_string(),
            "https://gateway.marvel.com/v1/public/comics?limit=10&apikey=abc"
        );
    }

    #[test]
    fn test_apply_relative() {
        let mut uri: Uri = "/v1/public/comics".parse().expect("uri must be valid");
        let mut sp = SigningPath::build(&uri).expect("path must exist");
        sp.query_push("apikey", "abc");
        sp.apply(&mut uri).expect("apply must succeed");

        assert_eq!(uri.to_string(), "/v1/public/comics?apikey=abc");
        assert!(uri.authority().is_none());
    }
}
