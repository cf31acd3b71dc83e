/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Result shapes, one per operation.
//!
//! Outputs are produced by the transport layer from service responses; the
//! builders exist for that layer (and for tests) to populate. On paginated
//! results, absent `IsTruncated` reads as false — the final page — and
//! `Marker` is only meaningful while `IsTruncated` is true.

use crate::model::{
    AccessKey, AccessKeyLastUsed, AccessKeyMetadata, AttachedPolicy, DeletionTaskFailureReasonType,
    ErrorDetails, Group, GroupDetail, ListPoliciesGrantingServiceAccessEntry, LoginProfile,
    ManagedPolicyDetail, MfaDevice, PasswordPolicy, Policy, PolicyGroup, PolicyRole, PolicyUser,
    PolicyVersion, Role, RoleDetail, ServiceLastAccessed, Tag, User, UserDetail, VirtualMfaDevice,
};
use shape_types::shape;

shape! {
    /// Result of creating a user.
    pub struct CreateUserOutput => CreateUserOutputBuilder {
        /// The new user.
        user["User"]: structure(User),
    }
}

shape! {
    /// Result of retrieving a user.
    pub struct GetUserOutput => GetUserOutputBuilder {
        /// The user.
        user["User"]: structure(User),
    }
}

shape! {
    /// Result of updating a user.
    pub struct UpdateUserOutput => UpdateUserOutputBuilder {}
}

shape! {
    /// Result of deleting a user.
    pub struct DeleteUserOutput => DeleteUserOutputBuilder {}
}

shape! {
    /// One page of users.
    pub struct ListUsersOutput => ListUsersOutputBuilder {
        /// The users on this page.
        users["Users"]: list(User),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of tagging a user.
    pub struct TagUserOutput => TagUserOutputBuilder {}
}

shape! {
    /// Result of untagging a user.
    pub struct UntagUserOutput => UntagUserOutputBuilder {}
}

shape! {
    /// One page of a user's tags.
    pub struct ListUserTagsOutput => ListUserTagsOutputBuilder {
        /// The tags on this page.
        tags["Tags"]: list(Tag),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of creating a group.
    pub struct CreateGroupOutput => CreateGroupOutputBuilder {
        /// The new group.
        group["Group"]: structure(Group),
    }
}

shape! {
    /// A group and one page of its members.
    pub struct GetGroupOutput => GetGroupOutputBuilder {
        /// The group.
        group["Group"]: structure(Group),
        /// The members on this page.
        users["Users"]: list(User),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of updating a group.
    pub struct UpdateGroupOutput => UpdateGroupOutputBuilder {}
}

shape! {
    /// Result of deleting a group.
    pub struct DeleteGroupOutput => DeleteGroupOutputBuilder {}
}

shape! {
    /// One page of groups.
    pub struct ListGroupsOutput => ListGroupsOutputBuilder {
        /// The groups on this page.
        groups["Groups"]: list(Group),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// One page of the groups a user belongs to.
    pub struct ListGroupsForUserOutput => ListGroupsForUserOutputBuilder {
        /// The groups on this page.
        groups["Groups"]: list(Group),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of adding a user to a group.
    pub struct AddUserToGroupOutput => AddUserToGroupOutputBuilder {}
}

shape! {
    /// Result of removing a user from a group.
    pub struct RemoveUserFromGroupOutput => RemoveUserFromGroupOutputBuilder {}
}

shape! {
    /// Result of creating a role.
    pub struct CreateRoleOutput => CreateRoleOutputBuilder {
        /// The new role.
        role["Role"]: structure(Role),
    }
}

shape! {
    /// Result of retrieving a role.
    pub struct GetRoleOutput => GetRoleOutputBuilder {
        /// The role.
        role["Role"]: structure(Role),
    }
}

shape! {
    /// Result of updating a role.
    pub struct UpdateRoleOutput => UpdateRoleOutputBuilder {}
}

shape! {
    /// Result of deleting a role.
    pub struct DeleteRoleOutput => DeleteRoleOutputBuilder {}
}

shape! {
    /// One page of roles.
    pub struct ListRolesOutput => ListRolesOutputBuilder {
        /// The roles on this page.
        roles["Roles"]: list(Role),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of replacing a role's trust policy.
    pub struct UpdateAssumeRolePolicyOutput => UpdateAssumeRolePolicyOutputBuilder {}
}

shape! {
    /// Result of tagging a role.
    pub struct TagRoleOutput => TagRoleOutputBuilder {}
}

shape! {
    /// Result of untagging a role.
    pub struct UntagRoleOutput => UntagRoleOutputBuilder {}
}

shape! {
    /// One page of a role's tags.
    pub struct ListRoleTagsOutput => ListRoleTagsOutputBuilder {
        /// The tags on this page.
        tags["Tags"]: list(Tag),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of creating a service-linked role.
    pub struct CreateServiceLinkedRoleOutput => CreateServiceLinkedRoleOutputBuilder {
        /// The new role.
        role["Role"]: structure(Role),
    }
}

shape! {
    /// Result of submitting a service-linked role deletion.
    pub struct DeleteServiceLinkedRoleOutput => DeleteServiceLinkedRoleOutputBuilder {
        /// The task identifier to poll deletion status with.
        deletion_task_id["DeletionTaskId"]: string,
    }
}

shape! {
    /// Status of a service-linked role deletion task.
    pub struct GetServiceLinkedRoleDeletionStatusOutput => GetServiceLinkedRoleDeletionStatusOutputBuilder {
        /// The task status. Valid values: those of
        /// [`crate::model::DeletionTaskStatusType`].
        status["Status"]: string,
        /// Why the task failed, when it did.
        reason["Reason"]: structure(DeletionTaskFailureReasonType),
    }
}

shape! {
    /// Result of creating a managed policy.
    pub struct CreatePolicyOutput => CreatePolicyOutputBuilder {
        /// The new policy.
        policy["Policy"]: structure(Policy),
    }
}

shape! {
    /// Result of retrieving a managed policy's metadata.
    pub struct GetPolicyOutput => GetPolicyOutputBuilder {
        /// The policy.
        policy["Policy"]: structure(Policy),
    }
}

shape! {
    /// Result of deleting a managed policy.
    pub struct DeletePolicyOutput => DeletePolicyOutputBuilder {}
}

shape! {
    /// One page of managed policies.
    pub struct ListPoliciesOutput => ListPoliciesOutputBuilder {
        /// The policies on this page.
        policies["Policies"]: list(Policy),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of creating a policy version.
    pub struct CreatePolicyVersionOutput => CreatePolicyVersionOutputBuilder {
        /// The new version.
        policy_version["PolicyVersion"]: structure(PolicyVersion),
    }
}

shape! {
    /// Result of retrieving a policy version.
    pub struct GetPolicyVersionOutput => GetPolicyVersionOutputBuilder {
        /// The version, including its document.
        policy_version["PolicyVersion"]: structure(PolicyVersion),
    }
}

shape! {
    /// Result of deleting a policy version.
    pub struct DeletePolicyVersionOutput => DeletePolicyVersionOutputBuilder {}
}

shape! {
    /// One page of a managed policy's versions.
    pub struct ListPolicyVersionsOutput => ListPolicyVersionsOutputBuilder {
        /// The versions on this page, without documents.
        versions["Versions"]: list(PolicyVersion),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of promoting a policy version to default.
    pub struct SetDefaultPolicyVersionOutput => SetDefaultPolicyVersionOutputBuilder {}
}

shape! {
    /// One page of the identities a managed policy is attached to.
    pub struct ListEntitiesForPolicyOutput => ListEntitiesForPolicyOutputBuilder {
        /// Groups the policy is attached to.
        policy_groups["PolicyGroups"]: list(PolicyGroup),
        /// Users the policy is attached to.
        policy_users["PolicyUsers"]: list(PolicyUser),
        /// Roles the policy is attached to.
        policy_roles["PolicyRoles"]: list(PolicyRole),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of attaching a managed policy to a user.
    pub struct AttachUserPolicyOutput => AttachUserPolicyOutputBuilder {}
}

shape! {
    /// Result of detaching a managed policy from a user.
    pub struct DetachUserPolicyOutput => DetachUserPolicyOutputBuilder {}
}

shape! {
    /// Result of attaching a managed policy to a group.
    pub struct AttachGroupPolicyOutput => AttachGroupPolicyOutputBuilder {}
}

shape! {
    /// Result of detaching a managed policy from a group.
    pub struct DetachGroupPolicyOutput => DetachGroupPolicyOutputBuilder {}
}

shape! {
    /// Result of attaching a managed policy to a role.
    pub struct AttachRolePolicyOutput => AttachRolePolicyOutputBuilder {}
}

shape! {
    /// Result of detaching a managed policy from a role.
    pub struct DetachRolePolicyOutput => DetachRolePolicyOutputBuilder {}
}

shape! {
    /// One page of the managed policies attached to a user.
    pub struct ListAttachedUserPoliciesOutput => ListAttachedUserPoliciesOutputBuilder {
        /// The attached policies on this page.
        attached_policies["AttachedPolicies"]: list(AttachedPolicy),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// One page of the managed policies attached to a group.
    pub struct ListAttachedGroupPoliciesOutput => ListAttachedGroupPoliciesOutputBuilder {
        /// The attached policies on this page.
        attached_policies["AttachedPolicies"]: list(AttachedPolicy),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// One page of the managed policies attached to a role.
    pub struct ListAttachedRolePoliciesOutput => ListAttachedRolePoliciesOutputBuilder {
        /// The attached policies on this page.
        attached_policies["AttachedPolicies"]: list(AttachedPolicy),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of embedding an inline policy in a user.
    pub struct PutUserPolicyOutput => PutUserPolicyOutputBuilder {}
}

shape! {
    /// An inline policy embedded in a user.
    pub struct GetUserPolicyOutput => GetUserPolicyOutputBuilder {
        /// The user the policy is embedded in.
        user_name["UserName"]: string,
        /// The name of the policy.
        policy_name["PolicyName"]: string,
        /// The policy document, URL-encoded per RFC 3986.
        policy_document["PolicyDocument"]: string,
    }
}

shape! {
    /// Result of deleting an inline policy from a user.
    pub struct DeleteUserPolicyOutput => DeleteUserPolicyOutputBuilder {}
}

shape! {
    /// One page of the names of a user's inline policies.
    pub struct ListUserPoliciesOutput => ListUserPoliciesOutputBuilder {
        /// The policy names on this page.
        policy_names["PolicyNames"]: list(::std::string::String),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of embedding an inline policy in a group.
    pub struct PutGroupPolicyOutput => PutGroupPolicyOutputBuilder {}
}

shape! {
    /// An inline policy embedded in a group.
    pub struct GetGroupPolicyOutput => GetGroupPolicyOutputBuilder {
        /// The group the policy is embedded in.
        group_name["GroupName"]: string,
        policy_name["PolicyName"]: string,
        /// The policy document, URL-encoded per RFC 3986.
        policy_document["PolicyDocument"]: string,
    }
}

shape! {
    /// Result of deleting an inline policy from a group.
    pub struct DeleteGroupPolicyOutput => DeleteGroupPolicyOutputBuilder {}
}

shape! {
    /// One page of the names of a group's inline policies.
    pub struct ListGroupPoliciesOutput => ListGroupPoliciesOutputBuilder {
        /// The policy names on this page.
        policy_names["PolicyNames"]: list(::std::string::String),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of embedding an inline policy in a role.
    pub struct PutRolePolicyOutput => PutRolePolicyOutputBuilder {}
}

shape! {
    /// An inline policy embedded in a role.
    pub struct GetRolePolicyOutput => GetRolePolicyOutputBuilder {
        /// The role the policy is embedded in.
        role_name["RoleName"]: string,
        policy_name["PolicyName"]: string,
        /// The policy document, URL-encoded per RFC 3986.
        policy_document["PolicyDocument"]: string,
    }
}

shape! {
    /// Result of deleting an inline policy from a role.
    pub struct DeleteRolePolicyOutput => DeleteRolePolicyOutputBuilder {}
}

shape! {
    /// One page of the names of a role's inline policies.
    pub struct ListRolePoliciesOutput => ListRolePoliciesOutputBuilder {
        /// The policy names on this page.
        policy_names["PolicyNames"]: list(::std::string::String),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of creating an access key.
    pub struct CreateAccessKeyOutput => CreateAccessKeyOutputBuilder {
        /// The new key, including its secret. The secret cannot be retrieved
        /// again later.
        access_key["AccessKey"]: structure(AccessKey),
    }
}

shape! {
    /// Result of updating an access key.
    pub struct UpdateAccessKeyOutput => UpdateAccessKeyOutputBuilder {}
}

shape! {
    /// Result of deleting an access key.
    pub struct DeleteAccessKeyOutput => DeleteAccessKeyOutputBuilder {}
}

shape! {
    /// One page of a user's access keys.
    pub struct ListAccessKeysOutput => ListAccessKeysOutputBuilder {
        /// The keys on this page, without secrets.
        access_key_metadata["AccessKeyMetadata"]: list(AccessKeyMetadata),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// When an access key was last used, and by whom.
    pub struct GetAccessKeyLastUsedOutput => GetAccessKeyLastUsedOutputBuilder {
        /// The user the key belongs to.
        user_name["UserName"]: string,
        /// Last-use details for the key.
        access_key_last_used["AccessKeyLastUsed"]: structure(AccessKeyLastUsed),
    }
}

shape! {
    /// Result of creating a virtual MFA device.
    pub struct CreateVirtualMfaDeviceOutput => CreateVirtualMfaDeviceOutputBuilder {
        /// The new device, including its seed material. The seed cannot be
        /// retrieved again later.
        virtual_mfa_device["VirtualMFADevice"]: structure(VirtualMfaDevice),
    }
}

shape! {
    /// Result of deleting a virtual MFA device.
    pub struct DeleteVirtualMfaDeviceOutput => DeleteVirtualMfaDeviceOutputBuilder {}
}

shape! {
    /// Result of enabling an MFA device.
    pub struct EnableMfaDeviceOutput => EnableMfaDeviceOutputBuilder {}
}

shape! {
    /// Result of deactivating an MFA device.
    pub struct DeactivateMfaDeviceOutput => DeactivateMfaDeviceOutputBuilder {}
}

shape! {
    /// Result of resynchronizing an MFA device.
    pub struct ResyncMfaDeviceOutput => ResyncMfaDeviceOutputBuilder {}
}

shape! {
    /// One page of the MFA devices enabled for a user.
    pub struct ListMfaDevicesOutput => ListMfaDevicesOutputBuilder {
        /// The devices on this page.
        mfa_devices["MFADevices"]: list(MfaDevice),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// One page of the account's virtual MFA devices.
    pub struct ListVirtualMfaDevicesOutput => ListVirtualMfaDevicesOutputBuilder {
        /// The devices on this page.
        virtual_mfa_devices["VirtualMFADevices"]: list(VirtualMfaDevice),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// Result of creating a console password.
    pub struct CreateLoginProfileOutput => CreateLoginProfileOutputBuilder {
        /// The new sign-in profile.
        login_profile["LoginProfile"]: structure(LoginProfile),
    }
}

shape! {
    /// Result of retrieving a console sign-in profile.
    pub struct GetLoginProfileOutput => GetLoginProfileOutputBuilder {
        /// The sign-in profile.
        login_profile["LoginProfile"]: structure(LoginProfile),
    }
}

shape! {
    /// Result of changing a console password.
    pub struct UpdateLoginProfileOutput => UpdateLoginProfileOutputBuilder {}
}

shape! {
    /// Result of removing a console password.
    pub struct DeleteLoginProfileOutput => DeleteLoginProfileOutputBuilder {}
}

shape! {
    /// Result of a user changing their own password.
    pub struct ChangePasswordOutput => ChangePasswordOutputBuilder {}
}

shape! {
    /// Result of replacing the account password policy.
    pub struct UpdateAccountPasswordPolicyOutput => UpdateAccountPasswordPolicyOutputBuilder {}
}

shape! {
    /// The account's password policy.
    pub struct GetAccountPasswordPolicyOutput => GetAccountPasswordPolicyOutputBuilder {
        /// The policy.
        password_policy["PasswordPolicy"]: structure(PasswordPolicy),
    }
}

shape! {
    /// Result of deleting the account password policy.
    pub struct DeleteAccountPasswordPolicyOutput => DeleteAccountPasswordPolicyOutputBuilder {}
}

shape! {
    /// Result of creating an account alias.
    pub struct CreateAccountAliasOutput => CreateAccountAliasOutputBuilder {}
}

shape! {
    /// Result of deleting an account alias.
    pub struct DeleteAccountAliasOutput => DeleteAccountAliasOutputBuilder {}
}

shape! {
    /// One page of the account's aliases.
    pub struct ListAccountAliasesOutput => ListAccountAliasesOutputBuilder {
        /// The aliases on this page.
        account_aliases["AccountAliases"]: list(::std::string::String),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// One page of the account authorization details snapshot.
    pub struct GetAccountAuthorizationDetailsOutput => GetAccountAuthorizationDetailsOutputBuilder {
        /// Users, with their policies and memberships.
        user_detail_list["UserDetailList"]: list(UserDetail),
        /// Groups, with their policies.
        group_detail_list["GroupDetailList"]: list(GroupDetail),
        /// Roles, with their policies and instance profiles.
        role_detail_list["RoleDetailList"]: list(RoleDetail),
        /// Managed policies, with their version histories.
        policies["Policies"]: list(ManagedPolicyDetail),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}

shape! {
    /// State of credential report generation.
    pub struct GenerateCredentialReportOutput => GenerateCredentialReportOutputBuilder {
        /// Where generation stands. Valid values: those of
        /// [`crate::model::ReportStateType`].
        state["State"]: string,
        /// Additional detail about the state.
        description["Description"]: string,
    }
}

shape! {
    /// The account's credential report.
    pub struct GetCredentialReportOutput => GetCredentialReportOutputBuilder {
        /// The report content.
        content["Content"]: blob,
        /// The report format. Valid values: those of
        /// [`crate::model::ReportFormatType`].
        report_format["ReportFormat"]: string,
        /// When the report was generated.
        generated_time["GeneratedTime"]: timestamp,
    }
}

shape! {
    /// Handle for a service-last-accessed report job.
    pub struct GenerateServiceLastAccessedDetailsOutput => GenerateServiceLastAccessedDetailsOutputBuilder {
        /// The job identifier to fetch the report with. Valid for seven
        /// days.
        job_id["JobId"]: string,
    }
}

shape! {
    /// One page of a service-last-accessed report.
    pub struct GetServiceLastAccessedDetailsOutput => GetServiceLastAccessedDetailsOutputBuilder {
        /// Where the job stands. Valid values: those of
        /// [`crate::model::JobStatusType`].
        job_status["JobStatus"]: string,
        /// The report's level of detail. Valid values: those of
        /// [`crate::model::AccessAdvisorUsageGranularityType`].
        job_type["JobType"]: string,
        /// When the job was started.
        job_creation_date["JobCreationDate"]: timestamp,
        /// Per-service access records on this page.
        services_last_accessed["ServicesLastAccessed"]: list(ServiceLastAccessed),
        /// When the job finished, for completed jobs.
        job_completion_date["JobCompletionDate"]: timestamp,
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
        /// Why the job failed, for failed jobs.
        error["Error"]: structure(ErrorDetails),
    }
}

shape! {
    /// One page of policies granting service access, grouped by namespace.
    pub struct ListPoliciesGrantingServiceAccessOutput => ListPoliciesGrantingServiceAccessOutputBuilder {
        /// The per-namespace policy groups on this page.
        policies_granting_service_access["PoliciesGrantingServiceAccess"]: list(ListPoliciesGrantingServiceAccessEntry),
        is_truncated["IsTruncated"]: boolean,
        marker["Marker"]: string,
    }
}
