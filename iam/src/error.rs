/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled service errors.
//!
//! Shape accessors never fail; everything the service rejects comes back
//! through the transport as an error response carrying a code, a message, and
//! a request id. The exceptions here model the codes this service defines,
//! and [`Error`] unions them for callers that match on outcome. Codes this
//! model does not know fall through to [`Error::Unhandled`] with their
//! metadata intact.

use shape_types::shape;

macro_rules! modeled_exception {
    (
        $(#[$meta:meta])*
        $name:ident => $builder:ident, code $code:literal
    ) => {
        shape! {
            $(#[$meta])*
            pub struct $name => $builder {
                /// A human-readable description of the rejection.
                message["message"]: string,
            }
        }

        impl $name {
            /// The wire error code identifying this exception.
            pub const CODE: &'static str = $code;
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(Self::CODE)?;
                if let Some(message) = &self.message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
        }

        impl ::std::error::Error for $name {}

        impl ::std::convert::From<$name> for Error {
            fn from(err: $name) -> Self {
                Error::$name(err)
            }
        }
    };
}

modeled_exception! {
    /// The request was rejected because multiple requests tried to modify
    /// the same resource at once. Retryable.
    ConcurrentModificationException => ConcurrentModificationExceptionBuilder,
    code "ConcurrentModification"
}

modeled_exception! {
    /// The most recent credential report is more than four days old and must
    /// be regenerated.
    CredentialReportExpiredException => CredentialReportExpiredExceptionBuilder,
    code "ReportExpired"
}

modeled_exception! {
    /// No credential report exists for the account.
    CredentialReportNotPresentException => CredentialReportNotPresentExceptionBuilder,
    code "ReportNotPresent"
}

modeled_exception! {
    /// The credential report is still being generated.
    CredentialReportNotReadyException => CredentialReportNotReadyExceptionBuilder,
    code "ReportInProgress"
}

modeled_exception! {
    /// The entity still has attached resources that must be deleted first.
    DeleteConflictException => DeleteConflictExceptionBuilder,
    code "DeleteConflict"
}

modeled_exception! {
    /// An entity with the requested name already exists.
    EntityAlreadyExistsException => EntityAlreadyExistsExceptionBuilder,
    code "EntityAlreadyExists"
}

modeled_exception! {
    /// The entity was recently deleted or modified and cannot be changed
    /// again yet.
    EntityTemporarilyUnmodifiableException => EntityTemporarilyUnmodifiableExceptionBuilder,
    code "EntityTemporarilyUnmodifiable"
}

modeled_exception! {
    /// An MFA authentication code was incorrect or out of sync.
    InvalidAuthenticationCodeException => InvalidAuthenticationCodeExceptionBuilder,
    code "InvalidAuthenticationCode"
}

modeled_exception! {
    /// A supplied value failed validation.
    InvalidInputException => InvalidInputExceptionBuilder,
    code "InvalidInput"
}

modeled_exception! {
    /// The operation does not apply to this kind of user.
    InvalidUserTypeException => InvalidUserTypeExceptionBuilder,
    code "InvalidUserType"
}

modeled_exception! {
    /// An account limit was reached.
    LimitExceededException => LimitExceededExceptionBuilder,
    code "LimitExceeded"
}

modeled_exception! {
    /// A policy document failed to parse or validate.
    MalformedPolicyDocumentException => MalformedPolicyDocumentExceptionBuilder,
    code "MalformedPolicyDocument"
}

modeled_exception! {
    /// The request referenced an entity that does not exist.
    NoSuchEntityException => NoSuchEntityExceptionBuilder,
    code "NoSuchEntity"
}

modeled_exception! {
    /// A password did not satisfy the account password policy.
    PasswordPolicyViolationException => PasswordPolicyViolationExceptionBuilder,
    code "PasswordPolicyViolation"
}

modeled_exception! {
    /// Policy evaluation failed inside the service. Retryable.
    PolicyEvaluationException => PolicyEvaluationExceptionBuilder,
    code "PolicyEvaluation"
}

modeled_exception! {
    /// The policy cannot be attached to an identity, such as a service-owned
    /// policy.
    PolicyNotAttachableException => PolicyNotAttachableExceptionBuilder,
    code "PolicyNotAttachable"
}

modeled_exception! {
    /// Too many concurrent report generation requests.
    ReportGenerationLimitExceededException => ReportGenerationLimitExceededExceptionBuilder,
    code "ReportGenerationLimitExceeded"
}

modeled_exception! {
    /// The service failed internally. Retryable.
    ServiceFailureException => ServiceFailureExceptionBuilder,
    code "ServiceFailure"
}

modeled_exception! {
    /// The named service does not support service-last-accessed reporting.
    ServiceNotSupportedException => ServiceNotSupportedExceptionBuilder,
    code "NotSupportedService"
}

modeled_exception! {
    /// The entity is service-controlled and cannot be modified directly,
    /// such as a service-linked role's trust policy.
    UnmodifiableEntityException => UnmodifiableEntityExceptionBuilder,
    code "UnmodifiableEntity"
}

/// All errors this service can return.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// See [`ConcurrentModificationException`].
    ConcurrentModificationException(ConcurrentModificationException),
    /// See [`CredentialReportExpiredException`].
    CredentialReportExpiredException(CredentialReportExpiredException),
    /// See [`CredentialReportNotPresentException`].
    CredentialReportNotPresentException(CredentialReportNotPresentException),
    /// See [`CredentialReportNotReadyException`].
    CredentialReportNotReadyException(CredentialReportNotReadyException),
    /// See [`DeleteConflictException`].
    DeleteConflictException(DeleteConflictException),
    /// See [`EntityAlreadyExistsException`].
    EntityAlreadyExistsException(EntityAlreadyExistsException),
    /// See [`EntityTemporarilyUnmodifiableException`].
    EntityTemporarilyUnmodifiableException(EntityTemporarilyUnmodifiableException),
    /// See [`InvalidAuthenticationCodeException`].
    InvalidAuthenticationCodeException(InvalidAuthenticationCodeException),
    /// See [`InvalidInputException`].
    InvalidInputException(InvalidInputException),
    /// See [`InvalidUserTypeException`].
    InvalidUserTypeException(InvalidUserTypeException),
    /// See [`LimitExceededException`].
    LimitExceededException(LimitExceededException),
    /// See [`MalformedPolicyDocumentException`].
    MalformedPolicyDocumentException(MalformedPolicyDocumentException),
    /// See [`NoSuchEntityException`].
    NoSuchEntityException(NoSuchEntityException),
    /// See [`PasswordPolicyViolationException`].
    PasswordPolicyViolationException(PasswordPolicyViolationException),
    /// See [`PolicyEvaluationException`].
    PolicyEvaluationException(PolicyEvaluationException),
    /// See [`PolicyNotAttachableException`].
    PolicyNotAttachableException(PolicyNotAttachableException),
    /// See [`ReportGenerationLimitExceededException`].
    ReportGenerationLimitExceededException(ReportGenerationLimitExceededException),
    /// See [`ServiceFailureException`].
    ServiceFailureException(ServiceFailureException),
    /// See [`ServiceNotSupportedException`].
    ServiceNotSupportedException(ServiceNotSupportedException),
    /// See [`UnmodifiableEntityException`].
    UnmodifiableEntityException(UnmodifiableEntityException),
    /// An error whose code this model does not know, with its metadata
    /// preserved.
    Unhandled(shape_types::error::Error),
}

impl Error {
    /// The wire error code, where one is known.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::ConcurrentModificationException(_) => {
                Some(ConcurrentModificationException::CODE)
            }
            Error::CredentialReportExpiredException(_) => {
                Some(CredentialReportExpiredException::CODE)
            }
            Error::CredentialReportNotPresentException(_) => {
                Some(CredentialReportNotPresentException::CODE)
            }
            Error::CredentialReportNotReadyException(_) => {
                Some(CredentialReportNotReadyException::CODE)
            }
            Error::DeleteConflictException(_) => Some(DeleteConflictException::CODE),
            Error::EntityAlreadyExistsException(_) => Some(EntityAlreadyExistsException::CODE),
            Error::EntityTemporarilyUnmodifiableException(_) => {
                Some(EntityTemporarilyUnmodifiableException::CODE)
            }
            Error::InvalidAuthenticationCodeException(_) => {
                Some(InvalidAuthenticationCodeException::CODE)
            }
            Error::InvalidInputException(_) => Some(InvalidInputException::CODE),
            Error::InvalidUserTypeException(_) => Some(InvalidUserTypeException::CODE),
            Error::LimitExceededException(_) => Some(LimitExceededException::CODE),
            Error::MalformedPolicyDocumentException(_) => {
                Some(MalformedPolicyDocumentException::CODE)
            }
            Error::NoSuchEntityException(_) => Some(NoSuchEntityException::CODE),
            Error::PasswordPolicyViolationException(_) => {
                Some(PasswordPolicyViolationException::CODE)
            }
            Error::PolicyEvaluationException(_) => Some(PolicyEvaluationException::CODE),
            Error::PolicyNotAttachableException(_) => Some(PolicyNotAttachableException::CODE),
            Error::ReportGenerationLimitExceededException(_) => {
                Some(ReportGenerationLimitExceededException::CODE)
            }
            Error::ServiceFailureException(_) => Some(ServiceFailureException::CODE),
            Error::ServiceNotSupportedException(_) => Some(ServiceNotSupportedException::CODE),
            Error::UnmodifiableEntityException(_) => Some(UnmodifiableEntityException::CODE),
            Error::Unhandled(meta) => meta.code(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ConcurrentModificationException(inner) => inner.fmt(f),
            Error::CredentialReportExpiredException(inner) => inner.fmt(f),
            Error::CredentialReportNotPresentException(inner) => inner.fmt(f),
            Error::CredentialReportNotReadyException(inner) => inner.fmt(f),
            Error::DeleteConflictException(inner) => inner.fmt(f),
            Error::EntityAlreadyExistsException(inner) => inner.fmt(f),
            Error::EntityTemporarilyUnmodifiableException(inner) => inner.fmt(f),
            Error::InvalidAuthenticationCodeException(inner) => inner.fmt(f),
            Error::InvalidInputException(inner) => inner.fmt(f),
            Error::InvalidUserTypeException(inner) => inner.fmt(f),
            Error::LimitExceededException(inner) => inner.fmt(f),
            Error::MalformedPolicyDocumentException(inner) => inner.fmt(f),
            Error::NoSuchEntityException(inner) => inner.fmt(f),
            Error::PasswordPolicyViolationException(inner) => inner.fmt(f),
            Error::PolicyEvaluationException(inner) => inner.fmt(f),
            Error::PolicyNotAttachableException(inner) => inner.fmt(f),
            Error::ReportGenerationLimitExceededException(inner) => inner.fmt(f),
            Error::ServiceFailureException(inner) => inner.fmt(f),
            Error::ServiceNotSupportedException(inner) => inner.fmt(f),
            Error::UnmodifiableEntityException(inner) => inner.fmt(f),
            Error::Unhandled(meta) => meta.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<shape_types::error::Error> for Error {
    fn from(meta: shape_types::error::Error) -> Self {
        let message = meta.message().map(str::to_owned);
        let code = meta.code().map(str::to_owned);
        match code.as_deref() {
            Some(ConcurrentModificationException::CODE) => ConcurrentModificationException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(CredentialReportExpiredException::CODE) => CredentialReportExpiredException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(CredentialReportNotPresentException::CODE) => {
                CredentialReportNotPresentException::builder()
                    .set_message(message)
                    .build()
                    .into()
            }
            Some(CredentialReportNotReadyException::CODE) => {
                CredentialReportNotReadyException::builder()
                    .set_message(message)
                    .build()
                    .into()
            }
            Some(DeleteConflictException::CODE) => DeleteConflictException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(EntityAlreadyExistsException::CODE) => EntityAlreadyExistsException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(EntityTemporarilyUnmodifiableException::CODE) => {
                EntityTemporarilyUnmodifiableException::builder()
                    .set_message(message)
                    .build()
                    .into()
            }
            Some(InvalidAuthenticationCodeException::CODE) => {
                InvalidAuthenticationCodeException::builder()
                    .set_message(message)
                    .build()
                    .into()
            }
            Some(InvalidInputException::CODE) => InvalidInputException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(InvalidUserTypeException::CODE) => InvalidUserTypeException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(LimitExceededException::CODE) => LimitExceededException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(MalformedPolicyDocumentException::CODE) => {
                MalformedPolicyDocumentException::builder()
                    .set_message(message)
                    .build()
                    .into()
            }
            Some(NoSuchEntityException::CODE) => NoSuchEntityException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(PasswordPolicyViolationException::CODE) => {
                PasswordPolicyViolationException::builder()
                    .set_message(message)
                    .build()
                    .into()
            }
            Some(PolicyEvaluationException::CODE) => PolicyEvaluationException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(PolicyNotAttachableException::CODE) => PolicyNotAttachableException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(ReportGenerationLimitExceededException::CODE) => {
                ReportGenerationLimitExceededException::builder()
                    .set_message(message)
                    .build()
                    .into()
            }
            Some(ServiceFailureException::CODE) => ServiceFailureException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(ServiceNotSupportedException::CODE) => ServiceNotSupportedException::builder()
                .set_message(message)
                .build()
                .into(),
            Some(UnmodifiableEntityException::CODE) => UnmodifiableEntityException::builder()
                .set_message(message)
                .build()
                .into(),
            _ => Error::Unhandled(meta),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Error, LimitExceededException, NoSuchEntityException};

    #[test]
    fn known_codes_map_to_modeled_exceptions() {
        let meta = shape_types::error::Error::builder()
            .code("NoSuchEntity")
            .message("The user with name bob cannot be found.")
            .build();
        let err = Error::from(meta);
        assert_eq!(
            err,
            Error::NoSuchEntityException(
                NoSuchEntityException::builder()
                    .message("The user with name bob cannot be found.")
                    .build()
            )
        );
        assert_eq!(err.code(), Some("NoSuchEntity"));
        assert_eq!(
            err.to_string(),
            "NoSuchEntity: The user with name bob cannot be found."
        );
    }

    #[test]
    fn unknown_codes_stay_unhandled_with_metadata() {
        let meta = shape_types::error::Error::builder()
            .code("Throttling")
            .request_id("11111111-2222-3333-4444-555555555555")
            .build();
        let err = Error::from(meta.clone());
        assert_eq!(err, Error::Unhandled(meta));
        assert_eq!(err.code(), Some("Throttling"));
    }

    #[test]
    fn exceptions_render_code_without_message() {
        let err = LimitExceededException::builder().build();
        assert_eq!(err.to_string(), "LimitExceeded");
    }
}
