//! Student profile, settings and group data.

use serde::{Deserialize, Serialize};

/// Profile summary from `settings/user-info`.
///
/// `current_group_id` is what homework listings are filtered by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub student_id: i64,
    pub current_group_id: i64,
    #[serde(default)]
    pub current_group_status: Option<i64>,
    #[serde(default)]
    pub stream_id: Option<i64>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub achieves_count: Option<i64>,
    pub full_name: String,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub stream_name: Option<String>,
    #[serde(default)]
    pub groups: Option<serde_json::Value>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub gaming_points: Vec<GamingPoint>,
}

/// Feature flags attached to a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub is_birthday: bool,
    pub is_debtor: bool,
    pub is_design: bool,
    pub is_dz_group_issue: bool,
    pub is_email_verified: bool,
    pub is_news_popup: bool,
    pub is_only_profile: bool,
    pub is_phone_verified: bool,
    pub is_promo: bool,
    pub is_quizzes_expired: bool,
    pub is_referral_program: bool,
    pub is_school: bool,
    pub is_signal: bool,
    pub is_tehnotable_news: bool,
    pub is_test: bool,
    pub is_vacancy: bool,
}

/// Balance of one reward currency (1 = gems, 2 = coins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamingPoint {
    #[serde(rename = "new_gaming_point_types__id")]
    pub kind: i64,
    pub points: i64,
}

impl GamingPoint {
    pub const GEMS: i64 = 1;
    pub const COINS: i64 = 2;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub group_status: i64,
    pub name: String,
    pub is_primary: bool,
}

/// Entry of `homework/settings/group-history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub id: i64,
    pub specs: Vec<GroupSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub id: i64,
    pub name: String,
    pub short_name: String,
}

/// Account settings from `profile/operations/settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub id: i64,
    #[serde(default)]
    pub fill_percentage: Option<i64>,
    #[serde(default)]
    pub form_type: Option<i64>,
    #[serde(default)]
    pub last_approving_status: Option<i64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub azure_login: Option<String>,
    #[serde(default)]
    pub date_birth: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub ful_name: String,
    #[serde(default)]
    pub photo_path: Option<String>,
    #[serde(default)]
    pub study: Option<String>,
    #[serde(default)]
    pub decline_comment: Option<String>,
    #[serde(default)]
    pub has_not_approved_data: bool,
    #[serde(default)]
    pub has_not_approved_photo: bool,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default)]
    pub is_phone_verified: bool,
    #[serde(default)]
    pub azure: Option<AzureAccount>,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
    #[serde(default)]
    pub phones: Vec<Phone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureAccount {
    pub has_azure: bool,
    pub has_office: bool,
    pub login: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub id: i64,
    pub required_type: i64,
    pub name: String,
    pub reg: Option<String>,
    pub is_required: bool,
    pub show_link: bool,
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub phone_type: i64,
    pub phone_number: String,
}

/// City/branch metadata returned by the login call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityData {
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub timezone_name: Option<String>,
    #[serde(default)]
    pub translate_key: Option<String>,
    #[serde(default)]
    pub id_city: Option<i64>,
    #[serde(default)]
    pub market_status: Option<i64>,
}
