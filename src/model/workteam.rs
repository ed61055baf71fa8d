//! Purpose: Private workteam records, including the one-of member definition.
//! Exports: `MemberDefinition` (union), Cognito/OIDC members, Create/Describe workteam shapes.

use super::common::Tag;
use crate::core::shape::{shape, union_shape};
use crate::core::timestamp::Timestamp;

shape! {
    pub struct CognitoMemberDefinition {
        "UserPool" => user_pool: String,
        "UserGroup" => user_group: String,
        "ClientId" => client_id: String,
    }
}

shape! {
    pub struct OidcMemberDefinition {
        "Groups" => groups: Vec<String>,
    }
}

union_shape! {
    /// Workers come from exactly one identity source.
    pub enum MemberDefinition {
        "CognitoMemberDefinition" => Cognito(CognitoMemberDefinition),
        "OidcMemberDefinition" => Oidc(OidcMemberDefinition),
    }
}

shape! {
    pub struct NotificationConfiguration {
        "NotificationTopicArn" => notification_topic_arn: String,
    }
}

shape! {
    pub struct CreateWorkteamRequest {
        "WorkteamName" => workteam_name: String,
        "MemberDefinitions" => member_definitions: Vec<MemberDefinition>,
        "Description" => description: String,
        "NotificationConfiguration" => notification_configuration: NotificationConfiguration,
        "Tags" => tags: Vec<Tag>,
    }
}

shape! {
    pub struct CreateWorkteamResult {
        "WorkteamArn" => workteam_arn: String,
    }
}

shape! {
    pub struct Workteam {
        "WorkteamName" => workteam_name: String,
        "MemberDefinitions" => member_definitions: Vec<MemberDefinition>,
        "WorkteamArn" => workteam_arn: String,
        "ProductListingIds" => product_listing_ids: Vec<String>,
        "Description" => description: String,
        "SubDomain" => sub_domain: String,
        "CreateDate" => create_date: Timestamp,
        "LastUpdatedDate" => last_updated_date: Timestamp,
        "NotificationConfiguration" => notification_configuration: NotificationConfiguration,
    }
}

shape! {
    pub struct DescribeWorkteamRequest {
        "WorkteamName" => workteam_name: String,
    }
}

shape! {
    pub struct DescribeWorkteamResult {
        "Workteam" => workteam: Workteam,
    }
}
