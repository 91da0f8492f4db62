/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Protocol buffer definitions and generated code
//!
//! Bindings are generated by `build.rs` from `proto/*.proto` into this
//! directory, one file per protobuf package. Modules nest the same way the
//! package names do.

// proto/test.proto
pub mod ws {
    pub mod antonov {
        pub mod protobuf {
            pub mod test {
                include!("ws.antonov.protobuf.test.rs");
            }
        }
    }
}

// proto/sample.proto
pub mod com {
    pub mod example {
        pub mod tutorial {
            include!("com.example.tutorial.rs");
        }
    }
}

// proto/fixtures.proto - used by tests, never registered
pub mod testing {
    include!("testing.rs");
}
