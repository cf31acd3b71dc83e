/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Successful outcome of one dispatched operation.
///
/// Transport implementations will typically type alias this, plugging in a
/// concrete body implementation:
/// ```rust
/// # mod transport {
/// #    pub struct Body;
/// # }
/// type SdkSuccess<O> = shape_http::result::SdkSuccess<O, transport::Body>;
/// ```
#[derive(Debug)]
pub struct SdkSuccess<O, B> {
    /// The raw response as received off the wire.
    pub raw: http::Response<B>,
    /// The parsed output shape.
    pub parsed: O,
}

/// Failed outcome of one dispatched operation.
///
/// `E` is the modeled service error for the operation (or a service-wide
/// error union); `B` is the transport's body type.
#[derive(Debug)]
pub enum SdkError<E, B> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according to the protocol (for example
    /// the server hung up while the body was being read).
    ResponseError {
        /// The raw response, as far as it was received.
        raw: http::Response<B>,
        /// What went wrong while interpreting it.
        err: BoxError,
    },

    /// An error response was received from the service.
    ServiceError {
        /// The raw error response.
        raw: http::Response<B>,
        /// The modeled service error parsed out of it.
        err: E,
    },
}

impl<E, B> SdkError<E, B> {
    /// Constructs a failure that occurred before the request left the client.
    pub fn construction_failure(err: impl Into<BoxError>) -> Self {
        SdkError::ConstructionFailure(err.into())
    }

    /// Constructs a failure where no response was received.
    pub fn dispatch_failure(err: impl Into<BoxError>) -> Self {
        SdkError::DispatchFailure(err.into())
    }

    /// Constructs a failure carrying a modeled service error.
    pub fn service_error(raw: http::Response<B>, err: E) -> Self {
        SdkError::ServiceError { raw, err }
    }

    /// Returns the modeled service error, discarding the raw response, if this
    /// failure carries one.
    pub fn into_service_error(self) -> Result<E, Self> {
        match self {
            SdkError::ServiceError { err, .. } => Ok(err),
            other => Err(other),
        }
    }
}

impl<E, B> Display for SdkError<E, B>
where
    E: Error,
    B: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(_) => write!(f, "failed to construct request"),
            SdkError::DispatchFailure(_) => write!(f, "failed to dispatch request"),
            SdkError::ResponseError { .. } => write!(f, "failed to interpret response"),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {err}"),
        }
    }
}

impl<E, B> Error for SdkError<E, B>
where
    E: Error + 'static,
    B: Debug,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::SdkError;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct FakeServiceError;

    impl fmt::Display for FakeServiceError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("entity not found")
        }
    }

    impl std::error::Error for FakeServiceError {}

    #[test]
    fn service_error_unwraps() {
        let response = http::Response::new("<ErrorResponse/>");
        let err: SdkError<FakeServiceError, &str> =
            SdkError::service_error(response, FakeServiceError);
        assert_eq!(err.to_string(), "service error: entity not found");
        assert_eq!(err.into_service_error().ok(), Some(FakeServiceError));
    }

    #[test]
    fn dispatch_failure_has_no_service_error() {
        let err: SdkError<FakeServiceError, &str> = SdkError::dispatch_failure("connection reset");
        assert!(err.into_service_error().is_err());
    }
}
