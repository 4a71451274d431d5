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

use marvelsign_core::utils::Redact;
use std::fmt::{Debug, Formatter};

/// Credential used to authenticate Marvel API requests.
///
/// Exactly one of the two modes is active for a credential, and it can't
/// change once built.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Public key only.
    ///
    /// For client-side applications whose requests come from an allowed
    /// referrer: only `apikey` is attached.
    ApiKey {
        /// The public API key.
        api_key: String,
    },
    /// Private and public key pair.
    ///
    /// For server-side applications: `apikey`, `hash` and `ts` are attached
    /// and the hash proves possession of the private key.
    KeyPair {
        /// The private API key. Never leaves the process.
        private_key: String,
        /// The public API key.
        public_key: String,
    },
}

impl Credential {
    /// The key sent as the `apikey` parameter.
    pub fn public_key(&self) -> &str {
        match self {
            Credential::ApiKey { api_key } => api_key,
            Credential::KeyPair { public_key, .. } => public_key,
        }
    }

    /// Whether requests signed with this credential carry a hash.
    pub fn is_key_pair(&self) -> bool {
        matches!(self, Credential::KeyPair { .. })
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::ApiKey { api_key } => f
                .debug_struct("ApiKey")
                .field("api_key", &Redact::from(api_key))
                .finish(),
            Credential::KeyPair {
                private_key,
                public_key,
            } => f
                .debug_struct("KeyPair")
                .field("private_key", &Redact::from(private_key))
                .field("public_key", &Redact::from(public_key))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key() {
        let cred = Credential::ApiKey {
            api_key: "SomeAPIKey".to_string(),
        };
        assert_eq!(cred.public_key(), "SomeAPIKey");
        assert!(!cred.is_key_pair());

        let cred = Credential::KeyPair {
            private_key: "SomePrivateKey".to_string(),
            public_key: "SomePublicKey".to_string(),
        };
        assert_eq!(cred.public_key(), "SomePublicKey");
        assert!(cred.is_key_pair());
    }

    #[test]
    fn test_debug_hides_keys() {
        let cred = Credential::KeyPair {
            private_key: "a-very-long-private-key-1234".to_string(),
            public_key: "SomePublicKey".to_string(),
        };
        let out = format!("{cred:?}");

        assert_eq!(
            out,
            r#"KeyPair { private_key: ****1234, public_key: **** }"#
        );
        assert!(!out.contains("private-key"));
    }
}
