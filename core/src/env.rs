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

use std::collections::HashMap;
use std::fmt::Debug;

/// Env abstracts environment variable access so configuration can be
/// loaded from the process or from a fixed map in tests.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns a hashmap of (variable, value) pairs of strings, for all the
    /// environment variables visible through this env.
    fn vars(&self) -> HashMap<String, String>;
}

/// Implements Env for the OS process environment.
#[derive(Debug, Copy, Clone, Default)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }

    fn vars(&self) -> HashMap<String, String> {
        std::env::vars().collect()
    }
}

/// StaticEnv provides a fixed set of variables.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }

    fn vars(&self) -> HashMap<String, String> {
        self.envs.clone()
    }
}

/// NoopEnv sees no variables at all.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }

    fn vars(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_env() {
        temp_env::with_var("MARVELSIGN_CORE_TEST_VAR", Some("value"), || {
            assert_eq!(
                OsEnv.var("MARVELSIGN_CORE_TEST_VAR").as_deref(),
                Some("value")
            );
            assert_eq!(
                OsEnv.vars().get("MARVELSIGN_CORE_TEST_VAR").map(String::as_str),
                Some("value")
            );
        });

        temp_env::with_var_unset("MARVELSIGN_CORE_TEST_VAR", || {
            assert!(OsEnv.var("MARVELSIGN_CORE_TEST_VAR").is_none());
        });
    }

    #[test]
    fn test_static_env() {
        let env = StaticEnv {
            envs: HashMap::from([("KEY".to_string(), "value".to_string())]),
        };

        assert_eq!(env.var("KEY").as_deref(), Some("value"));
        assert!(env.var("MISSING").is_none());
        assert_eq!(env.vars().len(), 1);
    }

    #[test]
    fn test_noop_env() {
        assert!(NoopEnv.var("PATH").is_none());
        assert!(NoopEnv.vars().is_empty());
    }
}
