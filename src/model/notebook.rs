//! Purpose: Notebook instance lifecycle records.
//! Exports: Create/Describe/Update/Start/Stop/Delete notebook instance shapes.
//! Notes: `Disassociate*` flags on updates clear a setting; they are sent only when set.

use super::common::Tag;
use crate::core::shape::shape;
use crate::core::timestamp::Timestamp;

shape! {
    pub struct CreateNotebookInstanceRequest {
        "NotebookInstanceName" => notebook_instance_name: String,
        "InstanceType" => instance_type: String,
        "SubnetId" => subnet_id: String,
        "SecurityGroupIds" => security_group_ids: Vec<String>,
        "RoleArn" => role_arn: String,
        "KmsKeyId" => kms_key_id: String,
        "Tags" => tags: Vec<Tag>,
        "LifecycleConfigName" => lifecycle_config_name: String,
        "DirectInternetAccess" => direct_internet_access: String,
        "VolumeSizeInGB" => volume_size_in_gb: i32,
        "AcceleratorTypes" => accelerator_types: Vec<String>,
        "DefaultCodeRepository" => default_code_repository: String,
        "AdditionalCodeRepositories" => additional_code_repositories: Vec<String>,
        "RootAccess" => root_access: String,
    }
}

shape! {
    pub struct CreateNotebookInstanceResult {
        "NotebookInstanceArn" => notebook_instance_arn: String,
    }
}

shape! {
    /// Names a notebook instance; the request for Describe, Start, Stop and Delete.
    pub struct NotebookInstanceNameRequest {
        "NotebookInstanceName" => notebook_instance_name: String,
    }
}

shape! {
    pub struct DescribeNotebookInstanceResult {
        "NotebookInstanceArn" => notebook_instance_arn: String,
        "NotebookInstanceName" => notebook_instance_name: String,
        "NotebookInstanceStatus" => notebook_instance_status: String,
        "FailureReason" => failure_reason: String,
        "Url" => url: String,
        "InstanceType" => instance_type: String,
        "SubnetId" => subnet_id: String,
        "SecurityGroups" => security_groups: Vec<String>,
        "RoleArn" => role_arn: String,
        "KmsKeyId" => kms_key_id: String,
        "NetworkInterfaceId" => network_interface_id: String,
        "LastModifiedTime" => last_modified_time: Timestamp,
        "CreationTime" => creation_time: Timestamp,
        "NotebookInstanceLifecycleConfigName" => notebook_instance_lifecycle_config_name: String,
        "DirectInternetAccess" => direct_internet_access: String,
        "VolumeSizeInGB" => volume_size_in_gb: i32,
        "AcceleratorTypes" => accelerator_types: Vec<String>,
        "DefaultCodeRepository" => default_code_repository: String,
        "AdditionalCodeRepositories" => additional_code_repositories: Vec<String>,
        "RootAccess" => root_access: String,
    }
}

shape! {
    pub struct UpdateNotebookInstanceRequest {
        "NotebookInstanceName" => notebook_instance_name: String,
        "InstanceType" => instance_type: String,
        "RoleArn" => role_arn: String,
        "LifecycleConfigName" => lifecycle_config_name: String,
        "DisassociateLifecycleConfig" => disassociate_lifecycle_config: bool,
        "VolumeSizeInGB" => volume_size_in_gb: i32,
        "DefaultCodeRepository" => default_code_repository: String,
        "AdditionalCodeRepositories" => additional_code_repositories: Vec<String>,
        "AcceleratorTypes" => accelerator_types: Vec<String>,
        "DisassociateAcceleratorTypes" => disassociate_accelerator_types: bool,
        "DisassociateDefaultCodeRepository" => disassociate_default_code_repository: bool,
        "DisassociateAdditionalCodeRepositories" => disassociate_additional_code_repositories: bool,
        "RootAccess" => root_access: String,
    }
}

impl NotebookInstanceNameRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            notebook_instance_name: Some(name.into()),
        }
    }
}
