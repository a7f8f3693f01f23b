//! The live resume record and the shallow merge used to import extracted data.

use crate::error::VitaeError;
use crate::model::{Education, ExtractedResume, PersonalInfo, SkillCategory, WorkExperience};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Minimalist,
    #[default]
    Professional,
    Creative,
    Modern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customization {
    pub font_family: String,
    pub font_size: f32,
    pub color_theme: String,
    pub line_spacing: f32,
}

impl Default for Customization {
    fn default() -> Self {
        Customization {
            font_family: "Inter".to_string(),
            font_size: 12.0,
            color_theme: "blue".to_string(),
            line_spacing: 1.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub template: Template,
    #[serde(default)]
    pub customization: Customization,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resume {
    /// A blank record with a fresh id.
    pub fn new() -> Self {
        let now = Utc::now();
        Resume {
            id: uuid::Uuid::new_v4().simple().to_string(),
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            work_experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            template: Template::default(),
            customization: Customization::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Load a record from a JSON file.
    pub fn load(path: &Path) -> Result<Resume, VitaeError> {
        let content = std::fs::read_to_string(path).map_err(|e| VitaeError::RecordLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| VitaeError::RecordLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Replace every top-level field present in `patch` wholesale and leave
    /// the rest untouched. Bumps `updated_at`.
    pub fn apply(&mut self, patch: ResumePatch) {
        if let Some(personal_info) = patch.personal_info {
            self.personal_info = personal_info;
        }
        if let Some(summary) = patch.summary {
            self.summary = summary;
        }
        if let Some(work_experience) = patch.work_experience {
            self.work_experience = work_experience;
        }
        if let Some(education) = patch.education {
            self.education = education;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        self.updated_at = Utc::now();
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self::new()
    }
}

/// A partial record: only the keys that are `Some` are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillCategory>>,
}

impl From<ExtractedResume> for ResumePatch {
    /// An extraction always carries all five keys, empty or not.
    fn from(extracted: ExtractedResume) -> Self {
        ResumePatch {
            personal_info: Some(extracted.personal_info),
            summary: Some(extracted.summary),
            work_experience: Some(extracted.work_experience),
            education: Some(extracted.education),
            skills: Some(extracted.skills),
        }
    }
}
