// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Encoding errors.

use thiserror::Error;

/// Error raised while encoding a value.
///
/// Resolution itself never fails; these only come from a serializer
/// receiving a value it cannot express.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializeError {
    #[error("{serializer} serializer cannot encode a {found} value")]
    TypeMismatch {
        serializer: &'static str,
        found: &'static str,
    },

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl SerializeError {
    pub(crate) fn mismatch(serializer: &'static str, value: &crate::value::Value) -> Self {
        Self::TypeMismatch {
            serializer,
            found: value.variant_name(),
        }
    }
}
