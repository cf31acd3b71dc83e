/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Value shapes shared between operations, and the known wire values of
//! string-constrained fields.
//!
//! Enum types here are writer-side conveniences: the corresponding shape
//! fields store and return plain strings so that values added by the service
//! after this model was produced still flow through unchanged.

use shape_types::{shape, string_enum};

string_enum! {
    /// Whether an access key or signing resource is active.
    pub enum StatusType {
        Active => "Active",
        Inactive => "Inactive",
    }
}

string_enum! {
    /// Assignment filter for listing virtual MFA devices.
    pub enum AssignmentStatusType {
        Assigned => "Assigned",
        Unassigned => "Unassigned",
        Any => "Any",
    }
}

string_enum! {
    /// Entity kinds for filtering account authorization details.
    pub enum EntityType {
        User => "User",
        Role => "Role",
        Group => "Group",
        LocalManagedPolicy => "LocalManagedPolicy",
        AwsManagedPolicy => "AWSManagedPolicy",
    }
}

string_enum! {
    /// Scope filter for listing managed policies.
    pub enum PolicyScopeType {
        All => "All",
        Aws => "AWS",
        Local => "Local",
    }
}

string_enum! {
    /// How an attached policy is being used.
    pub enum PolicyUsageType {
        PermissionsPolicy => "PermissionsPolicy",
        PermissionsBoundary => "PermissionsBoundary",
    }
}

string_enum! {
    /// Whether a policy is inline or managed.
    pub enum PolicyType {
        Inline => "INLINE",
        Managed => "MANAGED",
    }
}

string_enum! {
    /// The kind of identity a policy grant belongs to.
    pub enum PolicyOwnerEntityType {
        User => "USER",
        Role => "ROLE",
        Group => "GROUP",
    }
}

string_enum! {
    /// Progress of a credential report generation.
    pub enum ReportStateType {
        Started => "STARTED",
        Inprogress => "INPROGRESS",
        Complete => "COMPLETE",
    }
}

string_enum! {
    /// Format of a generated credential report.
    pub enum ReportFormatType {
        TextCsv => "text/csv",
    }
}

string_enum! {
    /// Progress of a service-last-accessed report job.
    pub enum JobStatusType {
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Failed => "FAILED",
    }
}

string_enum! {
    /// Progress of a service-linked role deletion task.
    pub enum DeletionTaskStatusType {
        Succeeded => "SUCCEEDED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        NotStarted => "NOT_STARTED",
    }
}

string_enum! {
    /// How a permissions boundary is attached. Only one attachment kind exists today.
    pub enum PermissionsBoundaryAttachmentType {
        Policy => "PermissionsBoundaryPolicy",
    }
}

string_enum! {
    /// Level of detail for a service-last-accessed report.
    pub enum AccessAdvisorUsageGranularityType {
        ServiceLevel => "SERVICE_LEVEL",
        ActionLevel => "ACTION_LEVEL",
    }
}

shape! {
    /// A key-value label attached to an IAM resource.
    pub struct Tag => TagBuilder {
        /// The key name. Between 1 and 128 characters.
        key["Key"]: string,
        /// The value. Up to 256 characters; may be empty.
        value["Value"]: string,
    }
}

shape! {
    /// The policy acting as a permissions boundary for an identity.
    pub struct AttachedPermissionsBoundary => AttachedPermissionsBoundaryBuilder {
        /// The kind of attachment. Valid values: those of
        /// [`PermissionsBoundaryAttachmentType`].
        permissions_boundary_type["PermissionsBoundaryType"]: string,
        /// The ARN of the policy set as the boundary.
        permissions_boundary_arn["PermissionsBoundaryArn"]: string,
    }
}

shape! {
    /// An IAM user.
    pub struct User => UserBuilder {
        /// The path to the user, such as `/division_abc/subdivision_xyz/`.
        path["Path"]: string,
        /// The friendly name identifying the user.
        user_name["UserName"]: string,
        /// The stable, unique identifier for the user.
        user_id["UserId"]: string,
        /// The Amazon Resource Name identifying the user.
        arn["Arn"]: string,
        /// When the user was created.
        create_date["CreateDate"]: timestamp,
        /// When the user's password was last used to sign in. Absent if the
        /// user has no password or has never signed in.
        password_last_used["PasswordLastUsed"]: timestamp,
        /// The permissions boundary, if one is set for the user.
        permissions_boundary["PermissionsBoundary"]: structure(AttachedPermissionsBoundary),
        /// Tags attached to the user.
        tags["Tags"]: list(Tag),
    }
}

shape! {
    /// An IAM group.
    pub struct Group => GroupBuilder {
        /// The path to the group.
        path["Path"]: string,
        /// The friendly name identifying the group.
        group_name["GroupName"]: string,
        /// The stable, unique identifier for the group.
        group_id["GroupId"]: string,
        /// The Amazon Resource Name identifying the group.
        arn["Arn"]: string,
        /// When the group was created.
        create_date["CreateDate"]: timestamp,
    }
}

shape! {
    /// When and where a role was last used to make a request.
    pub struct RoleLastUsed => RoleLastUsedBuilder {
        /// When the role was last used, within the service's tracking period.
        last_used_date["LastUsedDate"]: timestamp,
        /// The region the role was last used in.
        region["Region"]: string,
    }
}

shape! {
    /// An IAM role.
    pub struct Role => RoleBuilder {
        /// The path to the role.
        path["Path"]: string,
        /// The friendly name identifying the role.
        role_name["RoleName"]: string,
        /// The stable, unique identifier for the role.
        role_id["RoleId"]: string,
        /// The Amazon Resource Name identifying the role.
        arn["Arn"]: string,
        /// When the role was created.
        create_date["CreateDate"]: timestamp,
        /// The trust policy that grants permission to assume the role,
        /// URL-encoded per RFC 3986.
        assume_role_policy_document["AssumeRolePolicyDocument"]: string,
        /// A description of the role.
        description["Description"]: string,
        /// Maximum session duration in seconds for the role, between 3600
        /// and 43200.
        max_session_duration["MaxSessionDuration"]: integer,
        /// The permissions boundary, if one is set for the role.
        permissions_boundary["PermissionsBoundary"]: structure(AttachedPermissionsBoundary),
        /// Tags attached to the role.
        tags["Tags"]: list(Tag),
        /// Last-use tracking for the role.
        role_last_used["RoleLastUsed"]: structure(RoleLastUsed),
    }
}

shape! {
    /// A managed policy.
    ///
    /// Managed policies have their own ARN and version history and can be
    /// attached to multiple identities; inline policies are embedded in a
    /// single identity and appear elsewhere as bare documents.
    pub struct Policy => PolicyBuilder {
        /// The friendly name of the policy.
        policy_name["PolicyName"]: string,
        /// The stable, unique identifier for the policy.
        policy_id["PolicyId"]: string,
        arn["Arn"]: string,
        /// The path to the policy.
        path["Path"]: string,
        /// The identifier of the default version of the policy.
        default_version_id["DefaultVersionId"]: string,
        /// How many identities the policy is attached to.
        attachment_count["AttachmentCount"]: integer,
        /// How many identities use the policy as a permissions boundary.
        permissions_boundary_usage_count["PermissionsBoundaryUsageCount"]: integer,
        /// Whether the policy can be attached to an identity.
        is_attachable["IsAttachable"]: boolean,
        /// A description of the policy.
        description["Description"]: string,
        /// When the policy was created.
        create_date["CreateDate"]: timestamp,
        /// When the policy was last updated. This refreshes when the default
        /// version changes.
        update_date["UpdateDate"]: timestamp,
        /// Tags attached to the policy.
        tags["Tags"]: list(Tag),
    }
}

shape! {
    /// One version of a managed policy.
    pub struct PolicyVersion => PolicyVersionBuilder {
        /// The policy document, URL-encoded per RFC 3986. Returned only by
        /// operations that fetch a specific version.
        document["Document"]: string,
        /// The version identifier, such as `v1`.
        version_id["VersionId"]: string,
        /// Whether this version is the policy's default.
        is_default_version["IsDefaultVersion"]: boolean,
        /// When this version was created.
        create_date["CreateDate"]: timestamp,
    }
}

shape! {
    /// A managed policy attached to an identity, by name and ARN only.
    pub struct AttachedPolicy => AttachedPolicyBuilder {
        policy_name["PolicyName"]: string,
        policy_arn["PolicyArn"]: string,
    }
}

shape! {
    /// An access key, including its secret. The secret is only available at
    /// creation time.
    pub struct AccessKey => AccessKeyBuilder {
        /// The user the key belongs to.
        user_name["UserName"]: string,
        /// The key's identifier.
        access_key_id["AccessKeyId"]: string,
        /// Whether the key is usable. Valid values: those of [`StatusType`].
        status["Status"]: string,
        /// The secret half of the key.
        secret_access_key["SecretAccessKey"]: string,
        /// When the key was created.
        create_date["CreateDate"]: timestamp,
    }
}

shape! {
    /// An access key as returned by list operations, without the secret.
    pub struct AccessKeyMetadata => AccessKeyMetadataBuilder {
        user_name["UserName"]: string,
        access_key_id["AccessKeyId"]: string,
        /// Whether the key is usable. Valid values: those of [`StatusType`].
        status["Status"]: string,
        create_date["CreateDate"]: timestamp,
    }
}

shape! {
    /// When and where an access key was last used.
    pub struct AccessKeyLastUsed => AccessKeyLastUsedBuilder {
        /// When the key was last used to make a request.
        last_used_date["LastUsedDate"]: timestamp,
        /// The service the key was last used against, by namespace.
        service_name["ServiceName"]: string,
        /// The region the last request was made in.
        region["Region"]: string,
    }
}

shape! {
    /// An MFA device enabled for a user.
    pub struct MfaDevice => MfaDeviceBuilder {
        /// The user the device is enabled for.
        user_name["UserName"]: string,
        /// The serial number uniquely identifying the device. For virtual
        /// devices this is the device ARN.
        serial_number["SerialNumber"]: string,
        /// When the device was enabled for the user.
        enable_date["EnableDate"]: timestamp,
    }
}

shape! {
    /// A virtual MFA device.
    ///
    /// The seed and QR code are returned only when the device is created and
    /// are never available again.
    pub struct VirtualMfaDevice => VirtualMfaDeviceBuilder {
        /// The device ARN.
        serial_number["SerialNumber"]: string,
        /// The base32-encoded secret key, for seeding an authenticator
        /// manually.
        base32_string_seed["Base32StringSeed"]: blob,
        /// A QR code PNG encoding the enrollment URI for the device.
        qr_code_png["QRCodePNG"]: blob,
        /// The user the device is assigned to, if any.
        user["User"]: structure(User),
        /// When the device was enabled.
        enable_date["EnableDate"]: timestamp,
    }
}

shape! {
    /// A user's console sign-in profile.
    pub struct LoginProfile => LoginProfileBuilder {
        /// The user the profile belongs to.
        user_name["UserName"]: string,
        /// When the profile was created.
        create_date["CreateDate"]: timestamp,
        /// Whether the user must set a new password on next sign-in.
        password_reset_required["PasswordResetRequired"]: boolean,
    }
}

shape! {
    /// The account's password policy for console users.
    pub struct PasswordPolicy => PasswordPolicyBuilder {
        /// Minimum password length, between 6 and 128.
        minimum_password_length["MinimumPasswordLength"]: integer,
        require_symbols["RequireSymbols"]: boolean,
        require_numbers["RequireNumbers"]: boolean,
        require_uppercase_characters["RequireUppercaseCharacters"]: boolean,
        require_lowercase_characters["RequireLowercaseCharacters"]: boolean,
        /// Whether users may change their own passwords.
        allow_users_to_change_password["AllowUsersToChangePassword"]: boolean,
        /// Whether passwords expire at all.
        expire_passwords["ExpirePasswords"]: boolean,
        /// Days a password stays valid, between 1 and 1095.
        max_password_age["MaxPasswordAge"]: integer,
        /// How many previous passwords cannot be reused, between 1 and 24.
        password_reuse_prevention["PasswordReusePrevention"]: integer,
        /// Whether an expired password blocks sign-in until an administrator
        /// resets it.
        hard_expiry["HardExpiry"]: boolean,
    }
}

shape! {
    /// An instance profile, carrying the roles an EC2 instance can assume.
    pub struct InstanceProfile => InstanceProfileBuilder {
        path["Path"]: string,
        instance_profile_name["InstanceProfileName"]: string,
        instance_profile_id["InstanceProfileId"]: string,
        arn["Arn"]: string,
        create_date["CreateDate"]: timestamp,
        /// The roles associated with the instance profile.
        roles["Roles"]: list(Role),
        tags["Tags"]: list(Tag),
    }
}

shape! {
    /// An inline policy embedded in an identity, as name plus document.
    pub struct PolicyDetail => PolicyDetailBuilder {
        policy_name["PolicyName"]: string,
        /// The policy document, URL-encoded per RFC 3986.
        policy_document["PolicyDocument"]: string,
    }
}

shape! {
    /// A group a managed policy is attached to.
    pub struct PolicyGroup => PolicyGroupBuilder {
        group_name["GroupName"]: string,
        group_id["GroupId"]: string,
    }
}

shape! {
    /// A user a managed policy is attached to.
    pub struct PolicyUser => PolicyUserBuilder {
        user_name["UserName"]: string,
        user_id["UserId"]: string,
    }
}

shape! {
    /// A role a managed policy is attached to.
    pub struct PolicyRole => PolicyRoleBuilder {
        role_name["RoleName"]: string,
        role_id["RoleId"]: string,
    }
}

shape! {
    /// A user together with its policies and group memberships, as reported
    /// by the account authorization details.
    pub struct UserDetail => UserDetailBuilder {
        path["Path"]: string,
        user_name["UserName"]: string,
        user_id["UserId"]: string,
        arn["Arn"]: string,
        create_date["CreateDate"]: timestamp,
        /// The user's inline policies.
        user_policy_list["UserPolicyList"]: list(PolicyDetail),
        /// Names of the groups the user belongs to.
        group_list["GroupList"]: list(::std::string::String),
        /// The managed policies attached to the user.
        attached_managed_policies["AttachedManagedPolicies"]: list(AttachedPolicy),
        permissions_boundary["PermissionsBoundary"]: structure(AttachedPermissionsBoundary),
        tags["Tags"]: list(Tag),
    }
}

shape! {
    /// A group together with its policies, as reported by the account
    /// authorization details.
    pub struct GroupDetail => GroupDetailBuilder {
        path["Path"]: string,
        group_name["GroupName"]: string,
        group_id["GroupId"]: string,
        arn["Arn"]: string,
        create_date["CreateDate"]: timestamp,
        /// The group's inline policies.
        group_policy_list["GroupPolicyList"]: list(PolicyDetail),
        /// The managed policies attached to the group.
        attached_managed_policies["AttachedManagedPolicies"]: list(AttachedPolicy),
    }
}

shape! {
    /// A role together with its policies and instance profiles, as reported
    /// by the account authorization details.
    pub struct RoleDetail => RoleDetailBuilder {
        path["Path"]: string,
        role_name["RoleName"]: string,
        role_id["RoleId"]: string,
        arn["Arn"]: string,
        create_date["CreateDate"]: timestamp,
        /// The trust policy, URL-encoded per RFC 3986.
        assume_role_policy_document["AssumeRolePolicyDocument"]: string,
        /// Instance profiles that carry the role.
        instance_profile_list["InstanceProfileList"]: list(InstanceProfile),
        /// The role's inline policies.
        role_policy_list["RolePolicyList"]: list(PolicyDetail),
        /// The managed policies attached to the role.
        attached_managed_policies["AttachedManagedPolicies"]: list(AttachedPolicy),
        permissions_boundary["PermissionsBoundary"]: structure(AttachedPermissionsBoundary),
        tags["Tags"]: list(Tag),
        role_last_used["RoleLastUsed"]: structure(RoleLastUsed),
    }
}

shape! {
    /// A managed policy with its full version history, as reported by the
    /// account authorization details.
    pub struct ManagedPolicyDetail => ManagedPolicyDetailBuilder {
        policy_name["PolicyName"]: string,
        policy_id["PolicyId"]: string,
        arn["Arn"]: string,
        path["Path"]: string,
        default_version_id["DefaultVersionId"]: string,
        attachment_count["AttachmentCount"]: integer,
        permissions_boundary_usage_count["PermissionsBoundaryUsageCount"]: integer,
        is_attachable["IsAttachable"]: boolean,
        description["Description"]: string,
        create_date["CreateDate"]: timestamp,
        update_date["UpdateDate"]: timestamp,
        /// Every version of the policy, including the default.
        policy_version_list["PolicyVersionList"]: list(PolicyVersion),
    }
}

shape! {
    /// Where a role is in use, reported when a service-linked role cannot be
    /// deleted.
    pub struct RoleUsageType => RoleUsageTypeBuilder {
        /// The region the role is used in.
        region["Region"]: string,
        /// Resources still using the role.
        resources["Resources"]: list(::std::string::String),
    }
}

shape! {
    /// Why a service-linked role deletion failed.
    pub struct DeletionTaskFailureReasonType => DeletionTaskFailureReasonTypeBuilder {
        /// A short explanation of the failure.
        reason["Reason"]: string,
        /// Regions and resources where the role is still in use. The role
        /// must stop being used there before deletion can succeed.
        role_usage_list["RoleUsageList"]: list(RoleUsageType),
    }
}

shape! {
    /// When a service was last accessed by an identity covered by a
    /// service-last-accessed report.
    pub struct ServiceLastAccessed => ServiceLastAccessedBuilder {
        /// The friendly name of the service.
        service_name["ServiceName"]: string,
        /// The most recent authenticated request to the service within the
        /// tracking period. Absent if no identity covered by the report has
        /// accessed the service.
        last_authenticated["LastAuthenticated"]: timestamp,
        /// The namespace used in policy actions for the service, such as
        /// `iam` in `iam:ListUsers`.
        service_namespace["ServiceNamespace"]: string,
        /// The ARN of the identity that most recently accessed the service.
        last_authenticated_entity["LastAuthenticatedEntity"]: string,
        /// The region of the most recent authenticated request.
        last_authenticated_region["LastAuthenticatedRegion"]: string,
        /// How many covered identities have accessed the service.
        total_authenticated_entities["TotalAuthenticatedEntities"]: integer,
    }
}

shape! {
    /// A policy that grants an identity access to a service.
    pub struct PolicyGrantingServiceAccess => PolicyGrantingServiceAccessBuilder {
        policy_name["PolicyName"]: string,
        /// Whether the policy is inline or managed. Valid values: those of
        /// [`PolicyType`].
        policy_type["PolicyType"]: string,
        /// The policy ARN. Present only for managed policies.
        policy_arn["PolicyArn"]: string,
        /// The kind of identity an inline policy is embedded in. Valid
        /// values: those of [`PolicyOwnerEntityType`].
        entity_type["EntityType"]: string,
        /// The name of the identity an inline policy is embedded in.
        entity_name["EntityName"]: string,
    }
}

shape! {
    /// The policies granting an identity access to one service namespace.
    pub struct ListPoliciesGrantingServiceAccessEntry => ListPoliciesGrantingServiceAccessEntryBuilder {
        /// The namespace the policies grant access to.
        service_namespace["ServiceNamespace"]: string,
        /// The granting policies.
        policies["Policies"]: list(PolicyGrantingServiceAccess),
    }
}

shape! {
    /// Details of an error that halted report generation.
    pub struct ErrorDetails => ErrorDetailsBuilder {
        /// A human-readable description of the error.
        message["Message"]: string,
        /// The error code.
        code["Code"]: string,
    }
}

#[cfg(test)]
mod test {
    use super::{AccessKey, StatusType, Tag, User};
    use shape_types::DateTime;

    #[test]
    fn status_accepts_enum_and_raw_string_identically() {
        let typed = AccessKey::builder().status(StatusType::Active).build();
        let raw = AccessKey::builder().status("Active").build();
        assert_eq!(typed, raw);
        assert_eq!(typed.status(), Some("Active"));
    }

    #[test]
    fn unknown_status_values_stay_readable() {
        let key = AccessKey::builder().status("Suspended").build();
        assert_eq!(key.status(), Some("Suspended"));
        assert!("Suspended".parse::<StatusType>().is_err());
    }

    #[test]
    fn nested_shapes_render_recursively() {
        let user = User::builder()
            .user_name("alice")
            .create_date(DateTime::from_epoch_seconds(1576540098))
            .tags(Tag::builder().key("Dept").value("accounting").build())
            .build();
        assert_eq!(
            format!("{user:?}"),
            "{UserName: alice, CreateDate: 2019-12-16T23:48:18Z, Tags: [{Key: Dept, Value: accounting}]}"
        );
    }
}
