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

//! Utility functions and types.

use std::fmt::Debug;

/// Redact hides a secret when it is printed with `{:?}`.
///
/// Only the last four characters of values of at least 16 characters stay
/// visible so keys can still be told apart in logs. Anything shorter is
/// masked completely.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chars = self.0.chars().count();
        if chars == 0 {
            return f.write_str("EMPTY");
        }
        if chars < 16 {
            return f.write_str("****");
        }

        let tail: String = self.0.chars().skip(chars - 4).collect();
        write!(f, "****{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "EMPTY")]
    #[test_case("SomePublicKey", "****")]
    #[test_case("0123456789abcdef", "****cdef")]
    #[test_case("ef9ca6f930e56fb4f8a109a9003580fe", "****80fe")]
    #[test_case("ключ-ключ-ключ-ключ", "****ключ")]
    fn test_redact(input: &str, expected: &str) {
        assert_eq!(format!("{:?}", Redact::from(input)), expected);
    }
}
