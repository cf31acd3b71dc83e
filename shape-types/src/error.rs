/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error metadata.
//!
//! Service error responses carry an error code, a human-readable message, and
//! a request id. A transport layer parses those three out of the structured
//! error response and hands them to the service crate, which maps the code
//! onto a modeled exception where it knows one.

use std::fmt;

/// Generic error metadata: code, message, and request id.
///
/// Errors the service model does not know by name still surface through this
/// type, so a newer service error never becomes unreadable.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`Error`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the request id this error was returned for.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Creates the error.
    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    /// Returns a builder for `Error`.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The error code, if the response carried one.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The error message, if the response carried one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The request id, if the response carried one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn builder_sets_all_fields() {
        let err = Error::builder()
            .code("NoSuchEntity")
            .message("The user with name bob cannot be found.")
            .request_id("01234567-89ab-cdef-0123-456789abcdef")
            .build();
        assert_eq!(err.code(), Some("NoSuchEntity"));
        assert_eq!(err.message(), Some("The user with name bob cannot be found."));
        assert_eq!(
            err.request_id(),
            Some("01234567-89ab-cdef-0123-456789abcdef")
        );
    }

    #[test]
    fn display_skips_absent_parts() {
        let err = Error::builder().code("Throttling").build();
        assert_eq!(err.to_string(), r#"Error { code: "Throttling" }"#);
    }
}
