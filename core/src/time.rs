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

//! Time related utils.

use std::fmt;

use chrono::DateTime;
use chrono::Utc;

/// Get the current wall clock time in UTC.
#[inline]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Timestamp is a point in time expressed as seconds since the Unix epoch,
/// keeping the fractional part.
///
/// It renders with exactly six digits after the decimal point, so
/// `Timestamp::from_secs_f64(1000.0)` displays as `1000.000000`. The same
/// rendering is used everywhere a timestamp goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Timestamp(f64);

impl Timestamp {
    /// Sample the current time.
    pub fn now() -> Self {
        Self::from(now())
    }

    /// Build a timestamp from seconds since the Unix epoch.
    pub fn from_secs_f64(secs: f64) -> Self {
        Self(secs)
    }

    /// Seconds since the Unix epoch.
    pub fn as_secs_f64(&self) -> f64 {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(t: DateTime<Utc>) -> Self {
        let secs = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) / 1e9;
        Self(secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
