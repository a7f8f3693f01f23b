use serde::{Deserialize, Serialize};

/// Contact and identity fields. A field that was not found is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub field: String,
    pub graduation_year: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: String,
    pub category: String,
    pub skills: Vec<String>,
}

/// Structured fields inferred from raw resume text.
///
/// Everything here is advisory pre-fill: empty strings and empty lists mean
/// "not found", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedResume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillCategory>,
}

impl ExtractedResume {
    /// True when no field at all was recovered.
    pub fn is_empty(&self) -> bool {
        *self == ExtractedResume::default()
    }
}
