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

use marvelsign_core::hash::hex_md5;
use marvelsign_core::time::Timestamp;

/// Generate the `hash` parameter for a request made at `timestamp`.
///
/// The value is the lowercase hex MD5 digest of the timestamp rendered with
/// six decimals, followed by the private key and then the public key:
///
/// ```
/// use marvelsign::generate_hash;
/// use marvelsign_core::time::Timestamp;
///
/// let hash = generate_hash(
///     &Timestamp::from_secs_f64(0.0),
///     "SomePrivateKey",
///     "SomePublicKey",
/// );
/// assert_eq!(hash, "ef9ca6f930e56fb4f8a109a9003580fe");
/// ```
///
/// - [Marvel API Authorization](https://developer.marvel.com/documentation/authorization)
pub fn generate_hash(timestamp: &Timestamp, private_key: &str, public_key: &str) -> String {
    let string_to_sign = format!("{timestamp}{private_key}{public_key}");
    hex_md5(string_to_sign.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, "ef9ca6f930e56fb4f8a109a9003580fe")]
    #[test_case(1_000.0, "b500748e9f0aabc67ffc640ae9b87695")]
    #[test_case(1_000_000.0, "b537f18579112902b7ce046dddad558a")]
    #[test_case(1_000_000_000.0, "00fec88a254d42e3a439d49e14cd60d1")]
    fn test_generate_hash(secs: f64, expected: &str) {
        let ts = Timestamp::from_secs_f64(secs);
        assert_eq!(
            generate_hash(&ts, "SomePrivateKey", "SomePublicKey"),
            expected
        );
    }

    #[test]
    fn test_generate_hash_is_deterministic() {
        let ts = Timestamp::now();
        let first = generate_hash(&ts, "SomePrivateKey", "SomePublicKey");
        let second = generate_hash(&ts, "SomePrivateKey", "SomePublicKey");

        assert_eq!(first, second);
        assert_eq!(first.len(), 32);
    }

    #[test]
    fn test_generate_hash_depends_on_key_order() {
        let ts = Timestamp::from_secs_f64(1_000.0);
        assert_ne!(
            generate_hash(&ts, "SomePrivateKey", "SomePublicKey"),
            generate_hash(&ts, "SomePublicKey", "SomePrivateKey")
        );
    }
}
