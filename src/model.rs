// File: src/model.rs
// The CV data record and the panel-selection state machine.
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// One external profile link (repository host, portfolio, ...).
/// Links with an empty URL are kept in the record but suppressed at
/// composition time, so a hand-authored file may leave placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub firstname: String,
    pub surname: String,
    pub city: String,
    pub email: String,
    pub birth_date: String,
    pub phone: String,
    /// Photo by URI reference only; fetching/decoding is not this crate's job.
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.surname)
    }
}

/// One free-text "about me" line. Sequence order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutItem {
    pub info: String,
}

/// Reverse-chronological by authoring convention; not enforced here.
/// `date` is a free-form label ("2022", "Currently"), never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub name: String,
    pub date: String,
    pub institution: String,
    pub summary: String,
    #[serde(default)]
    pub skills: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub name: String,
    pub date: String,
    pub institution: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub language: String,
    pub written: String,
    pub spoken: String,
}

/// The whole record. Immutable after load; the composer only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvData {
    pub profile: Profile,
    #[serde(default)]
    pub about: Vec<AboutItem>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl CvData {
    /// Load-time assertion over the hand-authored record. A failure here is
    /// an authoring error to be reported before the terminal enters raw
    /// mode, not a runtime-recoverable condition.
    pub fn validate(&self) -> Result<()> {
        if self.profile.email.trim().is_empty() {
            bail!("CV record invalid: profile.email must not be empty");
        }
        if self.profile.firstname.trim().is_empty() && self.profile.surname.trim().is_empty() {
            bail!("CV record invalid: profile has no name at all");
        }
        Ok(())
    }
}

/// Which of the two panels the page shows. The two user triggers are
/// forced-sets: pressing "education" while already on Education is a no-op,
/// there is no XOR flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelSelection {
    #[default]
    Education,
    Experience,
}

impl PanelSelection {
    pub fn select_education(self) -> Self {
        PanelSelection::Education
    }

    pub fn select_experience(self) -> Self {
        PanelSelection::Experience
    }

    pub fn is_education(self) -> bool {
        self == PanelSelection::Education
    }
}
