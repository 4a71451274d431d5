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

//! Hash related utils.

use md5::Digest;
use md5::Md5;

/// Hex encoded MD5 hash.
///
/// The output is always 32 lowercase hex characters. Use this function
/// instead of `hex::encode(md5(content))` can reduce extra copy.
pub fn hex_md5(content: &[u8]) -> String {
    hex::encode(Md5::digest(content).as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b"", "d41d8cd98f00b204e9800998ecf8427e"; "empty")]
    #[test_case(b"abc", "900150983cd24fb0d6963f7d28e17f72"; "abc")]
    #[test_case(
        b"The quick brown fox jumps over the lazy dog",
        "9e107d9d372bb6826bd81d3542a419d6";
        "fox"
    )]
    fn test_hex_md5(input: &[u8], expected: &str) {
        assert_eq!(hex_md5(input), expected);
    }

    #[test]
    fn test_hex_md5_is_lowercase_fixed_width() {
        let out = hex_md5(b"SomePublicKey");
        assert_eq!(out.len(), 32);
        assert!(out
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
