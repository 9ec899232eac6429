//! Announcements.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsEntry {
    pub id_bbs: i64,
    pub theme: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsDetails {
    pub id_bbs: i64,
    pub is_viewed: bool,
    pub text_bbs: String,
    pub theme: String,
    pub time: String,
}
