/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request shapes, one per operation.
//!
//! Inputs are built with `Operation Input::builder()`, populated fluently,
//! and handed to a transport for dispatch. Paginated inputs additionally
//! offer `into_paginator` (see [`crate::paginate`]). `Marker` is always an
//! opaque, service-issued token echoed back unmodified; `MaxItems` is a page
//! size hint between 1 and 1000 that the service may round down.

use crate::model::Tag;
use shape_types::shape;

shape! {
    /// Creates a new IAM user in the account.
    pub struct CreateUserInput => CreateUserInputBuilder {
        /// The path for the user. Defaults to `/`. Must begin and end with
        /// `/` when present.
        path["Path"]: string,
        /// The name of the user to create. Names are case-insensitive on
        /// collision and limited to alphanumerics plus `+=,.@_-`.
        user_name["UserName"]: string,
        /// The ARN of the managed policy to set as the user's permissions
        /// boundary.
        permissions_boundary["PermissionsBoundary"]: string,
        /// Tags to attach to the user. Creation fails if any tag is invalid
        /// or the tag limit is exceeded.
        tags["Tags"]: list(Tag),
    }
}

shape! {
    /// Retrieves details about an IAM user.
    pub struct GetUserInput => GetUserInputBuilder {
        /// The name of the user. Defaults to the identity making the request.
        user_name["UserName"]: string,
    }
}

shape! {
    /// Renames an IAM user or moves it to a different path.
    pub struct UpdateUserInput => UpdateUserInputBuilder {
        /// The name of the user to update.
        user_name["UserName"]: string,
        /// The new path. Omit to keep the current path.
        new_path["NewPath"]: string,
        /// The new name. Omit to keep the current name.
        new_user_name["NewUserName"]: string,
    }
}

shape! {
    /// Deletes an IAM user. The user's attached resources must be removed
    /// first.
    pub struct DeleteUserInput => DeleteUserInputBuilder {
        /// The name of the user to delete.
        user_name["UserName"]: string,
    }
}

shape! {
    /// Lists the users in the account, optionally under a path prefix.
    pub struct ListUsersInput => ListUsersInputBuilder {
        /// Only list users whose path starts with this prefix, such as
        /// `/division_abc/`. Defaults to `/`.
        path_prefix["PathPrefix"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Adds tags to an IAM user.
    pub struct TagUserInput => TagUserInputBuilder {
        /// The name of the user to tag.
        user_name["UserName"]: string,
        /// The tags to attach. An existing key has its value replaced.
        tags["Tags"]: list(Tag),
    }
}

shape! {
    /// Removes tags from an IAM user.
    pub struct UntagUserInput => UntagUserInputBuilder {
        /// The name of the user to untag.
        user_name["UserName"]: string,
        /// Keys of the tags to remove.
        tag_keys["TagKeys"]: list(::std::string::String),
    }
}

shape! {
    /// Lists the tags attached to an IAM user.
    pub struct ListUserTagsInput => ListUserTagsInputBuilder {
        /// The name of the user.
        user_name["UserName"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Creates a new IAM group.
    pub struct CreateGroupInput => CreateGroupInputBuilder {
        /// The path for the group. Defaults to `/`.
        path["Path"]: string,
        /// The name of the group to create.
        group_name["GroupName"]: string,
    }
}

shape! {
    /// Retrieves a group together with the users in it.
    pub struct GetGroupInput => GetGroupInputBuilder {
        /// The name of the group.
        group_name["GroupName"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Renames an IAM group or moves it to a different path.
    pub struct UpdateGroupInput => UpdateGroupInputBuilder {
        /// The name of the group to update.
        group_name["GroupName"]: string,
        new_path["NewPath"]: string,
        new_group_name["NewGroupName"]: string,
    }
}

shape! {
    /// Deletes an IAM group. The group must be empty.
    pub struct DeleteGroupInput => DeleteGroupInputBuilder {
        /// The name of the group to delete.
        group_name["GroupName"]: string,
    }
}

shape! {
    /// Lists the groups in the account, optionally under a path prefix.
    pub struct ListGroupsInput => ListGroupsInputBuilder {
        /// Only list groups whose path starts with this prefix.
        path_prefix["PathPrefix"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Lists the groups a user belongs to.
    pub struct ListGroupsForUserInput => ListGroupsForUserInputBuilder {
        /// The name of the user.
        user_name["UserName"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Adds a user to a group.
    pub struct AddUserToGroupInput => AddUserToGroupInputBuilder {
        group_name["GroupName"]: string,
        user_name["UserName"]: string,
    }
}

shape! {
    /// Removes a user from a group.
    pub struct RemoveUserFromGroupInput => RemoveUserFromGroupInputBuilder {
        group_name["GroupName"]: string,
        user_name["UserName"]: string,
    }
}

shape! {
    /// Creates a new IAM role.
    pub struct CreateRoleInput => CreateRoleInputBuilder {
        /// The path for the role. Defaults to `/`.
        path["Path"]: string,
        /// The name of the role to create.
        role_name["RoleName"]: string,
        /// The trust policy granting permission to assume the role, in JSON.
        /// Up to 2048 characters before URL encoding.
        assume_role_policy_document["AssumeRolePolicyDocument"]: string,
        /// A description of the role. Up to 1000 characters.
        description["Description"]: string,
        /// Maximum session duration in seconds, between 3600 and 43200.
        /// Defaults to 3600.
        max_session_duration["MaxSessionDuration"]: integer,
        /// The ARN of the managed policy to set as the role's permissions
        /// boundary.
        permissions_boundary["PermissionsBoundary"]: string,
        /// Tags to attach to the role.
        tags["Tags"]: list(Tag),
    }
}

shape! {
    /// Retrieves details about an IAM role.
    pub struct GetRoleInput => GetRoleInputBuilder {
        /// The name of the role.
        role_name["RoleName"]: string,
    }
}

shape! {
    /// Updates a role's description or session duration.
    pub struct UpdateRoleInput => UpdateRoleInputBuilder {
        /// The name of the role to update.
        role_name["RoleName"]: string,
        /// The new description. Omit to keep the current description.
        description["Description"]: string,
        /// The new maximum session duration in seconds, between 3600 and
        /// 43200.
        max_session_duration["MaxSessionDuration"]: integer,
    }
}

shape! {
    /// Deletes an IAM role. The role's attached resources must be removed
    /// first.
    pub struct DeleteRoleInput => DeleteRoleInputBuilder {
        /// The name of the role to delete.
        role_name["RoleName"]: string,
    }
}

shape! {
    /// Lists the roles in the account, optionally under a path prefix.
    pub struct ListRolesInput => ListRolesInputBuilder {
        path_prefix["PathPrefix"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Replaces the trust policy of a role.
    pub struct UpdateAssumeRolePolicyInput => UpdateAssumeRolePolicyInputBuilder {
        /// The name of the role.
        role_name["RoleName"]: string,
        /// The new trust policy, in JSON.
        policy_document["PolicyDocument"]: string,
    }
}

shape! {
    /// Adds tags to an IAM role.
    pub struct TagRoleInput => TagRoleInputBuilder {
        role_name["RoleName"]: string,
        tags["Tags"]: list(Tag),
    }
}

shape! {
    /// Removes tags from an IAM role.
    pub struct UntagRoleInput => UntagRoleInputBuilder {
        role_name["RoleName"]: string,
        tag_keys["TagKeys"]: list(::std::string::String),
    }
}

shape! {
    /// Lists the tags attached to an IAM role.
    pub struct ListRoleTagsInput => ListRoleTagsInputBuilder {
        role_name["RoleName"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Creates a role whose lifecycle is controlled by an AWS service.
    ///
    /// The owning service defines the role's trust and permissions policies;
    /// only that service can assume or modify the role.
    pub struct CreateServiceLinkedRoleInput => CreateServiceLinkedRoleInputBuilder {
        /// The service principal the role is linked to, such as
        /// `elasticbeanstalk.amazonaws.com`.
        aws_service_name["AWSServiceName"]: string,
        /// A description of the role.
        description["Description"]: string,
        /// A suffix appended to the role name. Some services require one to
        /// allow multiple linked roles; others forbid it.
        custom_suffix["CustomSuffix"]: string,
    }
}

shape! {
    /// Submits a deletion request for a service-linked role.
    pub struct DeleteServiceLinkedRoleInput => DeleteServiceLinkedRoleInputBuilder {
        /// The name of the service-linked role to delete.
        role_name["RoleName"]: string,
    }
}

shape! {
    /// Checks the status of a service-linked role deletion task.
    pub struct GetServiceLinkedRoleDeletionStatusInput => GetServiceLinkedRoleDeletionStatusInputBuilder {
        /// The task identifier returned by the deletion request, in the
        /// format `task/aws-service-role/<service>/<role>/<id>`.
        deletion_task_id["DeletionTaskId"]: string,
    }
}

shape! {
    /// Creates a new managed policy.
    pub struct CreatePolicyInput => CreatePolicyInputBuilder {
        /// The name of the policy to create.
        policy_name["PolicyName"]: string,
        /// The path for the policy. Defaults to `/`.
        path["Path"]: string,
        /// The policy document, in JSON. Up to 6144 characters before URL
        /// encoding.
        policy_document["PolicyDocument"]: string,
        /// A description of the policy. Immutable after creation.
        description["Description"]: string,
        /// Tags to attach to the policy.
        tags["Tags"]: list(Tag),
    }
}

shape! {
    /// Retrieves a managed policy's metadata. Use
    /// [`GetPolicyVersionInput`] for the document itself.
    pub struct GetPolicyInput => GetPolicyInputBuilder {
        /// The ARN of the policy.
        policy_arn["PolicyArn"]: string,
    }
}

shape! {
    /// Deletes a managed policy. Detach it everywhere and delete its
    /// non-default versions first.
    pub struct DeletePolicyInput => DeletePolicyInputBuilder {
        /// The ARN of the policy to delete.
        policy_arn["PolicyArn"]: string,
    }
}

shape! {
    /// Lists managed policies.
    pub struct ListPoliciesInput => ListPoliciesInputBuilder {
        /// Which policies to list. Valid values: those of
        /// [`crate::model::PolicyScopeType`]. Defaults to `All`.
        scope["Scope"]: string,
        /// Only list policies attached to at least one identity.
        only_attached["OnlyAttached"]: boolean,
        /// Only list policies whose path starts with this prefix.
        path_prefix["PathPrefix"]: string,
        /// Only list policies used this way. Valid values: those of
        /// [`crate::model::PolicyUsageType`].
        policy_usage_filter["PolicyUsageFilter"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Creates a new version of a managed policy.
    ///
    /// A policy holds at most five versions; delete one before adding more.
    pub struct CreatePolicyVersionInput => CreatePolicyVersionInputBuilder {
        /// The ARN of the policy.
        policy_arn["PolicyArn"]: string,
        /// The policy document for the new version, in JSON.
        policy_document["PolicyDocument"]: string,
        /// Whether to make this version the default immediately.
        set_as_default["SetAsDefault"]: boolean,
    }
}

shape! {
    /// Retrieves one version of a managed policy, including its document.
    pub struct GetPolicyVersionInput => GetPolicyVersionInputBuilder {
        policy_arn["PolicyArn"]: string,
        /// The version to fetch, such as `v1`.
        version_id["VersionId"]: string,
    }
}

shape! {
    /// Deletes one version of a managed policy. The default version cannot
    /// be deleted.
    pub struct DeletePolicyVersionInput => DeletePolicyVersionInputBuilder {
        policy_arn["PolicyArn"]: string,
        version_id["VersionId"]: string,
    }
}

shape! {
    /// Lists the versions of a managed policy.
    pub struct ListPolicyVersionsInput => ListPolicyVersionsInputBuilder {
        policy_arn["PolicyArn"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Makes an existing version of a managed policy the default.
    pub struct SetDefaultPolicyVersionInput => SetDefaultPolicyVersionInputBuilder {
        policy_arn["PolicyArn"]: string,
        /// The version to promote.
        version_id["VersionId"]: string,
    }
}

shape! {
    /// Lists the users, groups, and roles a managed policy is attached to.
    pub struct ListEntitiesForPolicyInput => ListEntitiesForPolicyInputBuilder {
        policy_arn["PolicyArn"]: string,
        /// Only list entities of this kind. Valid values: those of
        /// [`crate::model::EntityType`].
        entity_filter["EntityFilter"]: string,
        path_prefix["PathPrefix"]: string,
        /// Only list entities using the policy this way. Valid values: those
        /// of [`crate::model::PolicyUsageType`].
        policy_usage_filter["PolicyUsageFilter"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Attaches a managed policy to a user.
    pub struct AttachUserPolicyInput => AttachUserPolicyInputBuilder {
        user_name["UserName"]: string,
        policy_arn["PolicyArn"]: string,
    }
}

shape! {
    /// Detaches a managed policy from a user.
    pub struct DetachUserPolicyInput => DetachUserPolicyInputBuilder {
        user_name["UserName"]: string,
        policy_arn["PolicyArn"]: string,
    }
}

shape! {
    /// Attaches a managed policy to a group.
    pub struct AttachGroupPolicyInput => AttachGroupPolicyInputBuilder {
        group_name["GroupName"]: string,
        policy_arn["PolicyArn"]: string,
    }
}

shape! {
    /// Detaches a managed policy from a group.
    pub struct DetachGroupPolicyInput => DetachGroupPolicyInputBuilder {
        group_name["GroupName"]: string,
        policy_arn["PolicyArn"]: string,
    }
}

shape! {
    /// Attaches a managed policy to a role.
    pub struct AttachRolePolicyInput => AttachRolePolicyInputBuilder {
        role_name["RoleName"]: string,
        policy_arn["PolicyArn"]: string,
    }
}

shape! {
    /// Detaches a managed policy from a role.
    pub struct DetachRolePolicyInput => DetachRolePolicyInputBuilder {
        role_name["RoleName"]: string,
        policy_arn["PolicyArn"]: string,
    }
}

shape! {
    /// Lists the managed policies attached to a user.
    pub struct ListAttachedUserPoliciesInput => ListAttachedUserPoliciesInputBuilder {
        user_name["UserName"]: string,
        path_prefix["PathPrefix"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Lists the managed policies attached to a group.
    pub struct ListAttachedGroupPoliciesInput => ListAttachedGroupPoliciesInputBuilder {
        group_name["GroupName"]: string,
        path_prefix["PathPrefix"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Lists the managed policies attached to a role.
    pub struct ListAttachedRolePoliciesInput => ListAttachedRolePoliciesInputBuilder {
        role_name["RoleName"]: string,
        path_prefix["PathPrefix"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Embeds an inline policy in a user, replacing any existing policy of
    /// the same name.
    pub struct PutUserPolicyInput => PutUserPolicyInputBuilder {
        user_name["UserName"]: string,
        /// The name of the inline policy.
        policy_name["PolicyName"]: string,
        /// The policy document, in JSON.
        policy_document["PolicyDocument"]: string,
    }
}

shape! {
    /// Retrieves an inline policy embedded in a user.
    pub struct GetUserPolicyInput => GetUserPolicyInputBuilder {
        user_name["UserName"]: string,
        policy_name["PolicyName"]: string,
    }
}

shape! {
    /// Deletes an inline policy embedded in a user.
    pub struct DeleteUserPolicyInput => DeleteUserPolicyInputBuilder {
        user_name["UserName"]: string,
        policy_name["PolicyName"]: string,
    }
}

shape! {
    /// Lists the names of the inline policies embedded in a user.
    pub struct ListUserPoliciesInput => ListUserPoliciesInputBuilder {
        user_name["UserName"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Embeds an inline policy in a group, replacing any existing policy of
    /// the same name.
    pub struct PutGroupPolicyInput => PutGroupPolicyInputBuilder {
        group_name["GroupName"]: string,
        policy_name["PolicyName"]: string,
        policy_document["PolicyDocument"]: string,
    }
}

shape! {
    /// Retrieves an inline policy embedded in a group.
    pub struct GetGroupPolicyInput => GetGroupPolicyInputBuilder {
        group_name["GroupName"]: string,
        policy_name["PolicyName"]: string,
    }
}

shape! {
    /// Deletes an inline policy embedded in a group.
    pub struct DeleteGroupPolicyInput => DeleteGroupPolicyInputBuilder {
        group_name["GroupName"]: string,
        policy_name["PolicyName"]: string,
    }
}

shape! {
    /// Lists the names of the inline policies embedded in a group.
    pub struct ListGroupPoliciesInput => ListGroupPoliciesInputBuilder {
        group_name["GroupName"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Embeds an inline policy in a role, replacing any existing policy of
    /// the same name.
    pub struct PutRolePolicyInput => PutRolePolicyInputBuilder {
        role_name["RoleName"]: string,
        policy_name["PolicyName"]: string,
        policy_document["PolicyDocument"]: string,
    }
}

shape! {
    /// Retrieves an inline policy embedded in a role.
    pub struct GetRolePolicyInput => GetRolePolicyInputBuilder {
        role_name["RoleName"]: string,
        policy_name["PolicyName"]: string,
    }
}

shape! {
    /// Deletes an inline policy embedded in a role.
    pub struct DeleteRolePolicyInput => DeleteRolePolicyInputBuilder {
        role_name["RoleName"]: string,
        policy_name["PolicyName"]: string,
    }
}

shape! {
    /// Lists the names of the inline policies embedded in a role.
    pub struct ListRolePoliciesInput => ListRolePoliciesInputBuilder {
        role_name["RoleName"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Creates an access key for a user. The secret is only returned here.
    pub struct CreateAccessKeyInput => CreateAccessKeyInputBuilder {
        /// The name of the user. Defaults to the identity making the request.
        user_name["UserName"]: string,
    }
}

shape! {
    /// Activates or deactivates an access key.
    pub struct UpdateAccessKeyInput => UpdateAccessKeyInputBuilder {
        user_name["UserName"]: string,
        /// The identifier of the key to update.
        access_key_id["AccessKeyId"]: string,
        /// The new status. Valid values: those of
        /// [`crate::model::StatusType`].
        status["Status"]: string,
    }
}

shape! {
    /// Deletes an access key.
    pub struct DeleteAccessKeyInput => DeleteAccessKeyInputBuilder {
        user_name["UserName"]: string,
        access_key_id["AccessKeyId"]: string,
    }
}

shape! {
    /// Lists a user's access keys, without their secrets.
    pub struct ListAccessKeysInput => ListAccessKeysInputBuilder {
        /// The name of the user. Defaults to the identity making the request.
        user_name["UserName"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Reports when an access key was last used.
    pub struct GetAccessKeyLastUsedInput => GetAccessKeyLastUsedInputBuilder {
        /// The identifier of the key.
        access_key_id["AccessKeyId"]: string,
    }
}

shape! {
    /// Creates a virtual MFA device. Enable it for a user with
    /// [`EnableMfaDeviceInput`] afterwards.
    pub struct CreateVirtualMfaDeviceInput => CreateVirtualMfaDeviceInputBuilder {
        /// The path for the device. Defaults to `/`.
        path["Path"]: string,
        /// The name of the device.
        virtual_mfa_device_name["VirtualMFADeviceName"]: string,
        /// Tags to attach to the device.
        tags["Tags"]: list(Tag),
    }
}

shape! {
    /// Deletes a virtual MFA device. It must be deactivated first.
    pub struct DeleteVirtualMfaDeviceInput => DeleteVirtualMfaDeviceInputBuilder {
        /// The serial number (device ARN) of the device to delete.
        serial_number["SerialNumber"]: string,
    }
}

shape! {
    /// Enables an MFA device for a user, requiring it on sign-in.
    pub struct EnableMfaDeviceInput => EnableMfaDeviceInputBuilder {
        user_name["UserName"]: string,
        /// The serial number of the device. For virtual devices, the device
        /// ARN.
        serial_number["SerialNumber"]: string,
        /// A current authentication code from the device.
        authentication_code1["AuthenticationCode1"]: string,
        /// The following authentication code from the device. Codes expire;
        /// resync the device if enabling fails repeatedly.
        authentication_code2["AuthenticationCode2"]: string,
    }
}

shape! {
    /// Deactivates an MFA device for a user.
    pub struct DeactivateMfaDeviceInput => DeactivateMfaDeviceInputBuilder {
        user_name["UserName"]: string,
        serial_number["SerialNumber"]: string,
    }
}

shape! {
    /// Resynchronizes an MFA device with the server.
    pub struct ResyncMfaDeviceInput => ResyncMfaDeviceInputBuilder {
        user_name["UserName"]: string,
        serial_number["SerialNumber"]: string,
        authentication_code1["AuthenticationCode1"]: string,
        authentication_code2["AuthenticationCode2"]: string,
    }
}

shape! {
    /// Lists the MFA devices enabled for a user.
    pub struct ListMfaDevicesInput => ListMfaDevicesInputBuilder {
        /// The name of the user. Defaults to the identity making the request.
        user_name["UserName"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Lists the account's virtual MFA devices.
    pub struct ListVirtualMfaDevicesInput => ListVirtualMfaDevicesInputBuilder {
        /// Only list devices in this assignment state. Valid values: those of
        /// [`crate::model::AssignmentStatusType`]. Defaults to `Any`.
        assignment_status["AssignmentStatus"]: string,
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Creates a console password for a user.
    pub struct CreateLoginProfileInput => CreateLoginProfileInputBuilder {
        user_name["UserName"]: string,
        /// The new password. Must satisfy the account password policy.
        password["Password"]: string,
        /// Whether the user must set a new password on next sign-in.
        password_reset_required["PasswordResetRequired"]: boolean,
    }
}

shape! {
    /// Retrieves a user's console sign-in profile. The password itself is
    /// never returned.
    pub struct GetLoginProfileInput => GetLoginProfileInputBuilder {
        user_name["UserName"]: string,
    }
}

shape! {
    /// Changes a user's console password.
    pub struct UpdateLoginProfileInput => UpdateLoginProfileInputBuilder {
        user_name["UserName"]: string,
        password["Password"]: string,
        password_reset_required["PasswordResetRequired"]: boolean,
    }
}

shape! {
    /// Removes a user's console password, preventing console sign-in.
    pub struct DeleteLoginProfileInput => DeleteLoginProfileInputBuilder {
        user_name["UserName"]: string,
    }
}

shape! {
    /// Changes the password of the calling user.
    pub struct ChangePasswordInput => ChangePasswordInputBuilder {
        /// The current password.
        old_password["OldPassword"]: string,
        /// The new password. Must satisfy the account password policy.
        new_password["NewPassword"]: string,
    }
}

shape! {
    /// Replaces the account's password policy. Omitted fields reset to their
    /// defaults.
    pub struct UpdateAccountPasswordPolicyInput => UpdateAccountPasswordPolicyInputBuilder {
        /// Minimum password length, between 6 and 128. Defaults to 6.
        minimum_password_length["MinimumPasswordLength"]: integer,
        require_symbols["RequireSymbols"]: boolean,
        require_numbers["RequireNumbers"]: boolean,
        require_uppercase_characters["RequireUppercaseCharacters"]: boolean,
        require_lowercase_characters["RequireLowercaseCharacters"]: boolean,
        allow_users_to_change_password["AllowUsersToChangePassword"]: boolean,
        /// Days a password stays valid, between 1 and 1095. Zero or absent
        /// disables expiry.
        max_password_age["MaxPasswordAge"]: integer,
        /// How many previous passwords cannot be reused, between 1 and 24.
        password_reuse_prevention["PasswordReusePrevention"]: integer,
        hard_expiry["HardExpiry"]: boolean,
    }
}

shape! {
    /// Retrieves the account's password policy.
    pub struct GetAccountPasswordPolicyInput => GetAccountPasswordPolicyInputBuilder {}
}

shape! {
    /// Deletes the account's password policy.
    pub struct DeleteAccountPasswordPolicyInput => DeleteAccountPasswordPolicyInputBuilder {}
}

shape! {
    /// Creates an alias for the account, usable in sign-in URLs.
    pub struct CreateAccountAliasInput => CreateAccountAliasInputBuilder {
        /// The alias. Lowercase alphanumerics and hyphens, 3 to 63
        /// characters.
        account_alias["AccountAlias"]: string,
    }
}

shape! {
    /// Deletes an account alias.
    pub struct DeleteAccountAliasInput => DeleteAccountAliasInputBuilder {
        account_alias["AccountAlias"]: string,
    }
}

shape! {
    /// Lists the account's aliases. At most one alias exists today.
    pub struct ListAccountAliasesInput => ListAccountAliasesInputBuilder {
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Retrieves a snapshot of every user, group, role, and managed policy
    /// in the account, with their relationships.
    pub struct GetAccountAuthorizationDetailsInput => GetAccountAuthorizationDetailsInputBuilder {
        /// Only include entities of these kinds. Valid values: those of
        /// [`crate::model::EntityType`]. Defaults to all kinds.
        filter["Filter"]: list(::std::string::String),
        marker["Marker"]: string,
        max_items["MaxItems"]: integer,
    }
}

shape! {
    /// Starts generation of the account's credential report.
    pub struct GenerateCredentialReportInput => GenerateCredentialReportInputBuilder {}
}

shape! {
    /// Downloads the most recent credential report. Reports stay available
    /// for four days after generation.
    pub struct GetCredentialReportInput => GetCredentialReportInputBuilder {}
}

shape! {
    /// Starts a report of when the given identity last accessed each
    /// service its policies allow.
    pub struct GenerateServiceLastAccessedDetailsInput => GenerateServiceLastAccessedDetailsInputBuilder {
        /// The ARN of the user, group, role, or policy to report on.
        arn["Arn"]: string,
        /// Level of detail to generate. Valid values: those of
        /// [`crate::model::AccessAdvisorUsageGranularityType`]. Defaults to
        /// service-level.
        granularity["Granularity"]: string,
    }
}

shape! {
    /// Fetches a service-last-accessed report started earlier.
    pub struct GetServiceLastAccessedDetailsInput => GetServiceLastAccessedDetailsInputBuilder {
        /// The job identifier returned when the report was started.
        job_id["JobId"]: string,
        max_items["MaxItems"]: integer,
        marker["Marker"]: string,
    }
}

shape! {
    /// Lists the policies that grant an identity access to the given
    /// services.
    pub struct ListPoliciesGrantingServiceAccessInput => ListPoliciesGrantingServiceAccessInputBuilder {
        marker["Marker"]: string,
        /// The ARN of the user, group, or role to report on.
        arn["Arn"]: string,
        /// Namespaces of the services to report on, such as `iam` or `s3`.
        /// Up to 200 per request.
        service_namespaces["ServiceNamespaces"]: list(::std::string::String),
    }
}
