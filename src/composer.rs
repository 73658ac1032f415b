// File: src/composer.rs
// Pure view composition: (CV record, panel selection) -> document.
// No I/O, no validation, total over empty lists.
use crate::document::{Document, Node, Region, RegionKind};
use crate::model::{
    AboutItem, CvData, EducationEntry, ExperienceEntry, LanguageEntry, PanelSelection, Profile,
};

pub const HEADING_ABOUT: &str = "About";
pub const HEADING_EDUCATION: &str = "Education";
pub const HEADING_EXPERIENCE: &str = "Experience";
pub const HEADING_LANGUAGES: &str = "Languages";
pub const HEADING_SKILLS: &str = "Other skills";

pub const LABEL_EDUCATION: &str = "Education";
pub const LABEL_EXPERIENCE: &str = "Experience";

/// Hero block: photo reference, identity lines, mailto contact, then one
/// link per profile link with a non-empty URL. Empty URLs are suppressed
/// entirely rather than rendered as broken links.
pub fn hero(profile: &Profile) -> Region {
    let mut region = Region::new(RegionKind::Hero);
    if !profile.photo.is_empty() {
        region.nodes.push(Node::Image {
            uri: profile.photo.clone(),
        });
    }
    region.nodes.push(Node::Heading(profile.full_name()));
    region.nodes.push(Node::Text(profile.city.clone()));
    region.nodes.push(Node::Text(profile.birth_date.clone()));
    region.nodes.push(Node::Link {
        label: profile.email.clone(),
        url: format!("mailto:{}", profile.email),
    });
    region.nodes.push(Node::Text(profile.phone.clone()));
    for link in &profile.links {
        if link.url.is_empty() {
            continue;
        }
        region.nodes.push(Node::Link {
            label: link.label.clone(),
            url: link.url.clone(),
        });
    }
    region
}

/// Heading plus one line per item, in input order. An empty list yields the
/// heading alone.
pub fn about(items: &[AboutItem]) -> Region {
    let mut region = Region::new(RegionKind::About);
    region.nodes.push(Node::Heading(HEADING_ABOUT.to_string()));
    for item in items {
        region.nodes.push(Node::Text(item.info.clone()));
    }
    region
}

/// The two trigger labels, with the active panel emphasized.
pub fn panel_toggle(selection: PanelSelection) -> Region {
    let mut region = Region::new(RegionKind::Toggle);
    if selection.is_education() {
        region.nodes.push(Node::Emphasis(LABEL_EDUCATION.to_string()));
        region.nodes.push(Node::Text(LABEL_EXPERIENCE.to_string()));
    } else {
        region.nodes.push(Node::Text(LABEL_EDUCATION.to_string()));
        region.nodes.push(Node::Emphasis(LABEL_EXPERIENCE.to_string()));
    }
    region
}

fn push_education_card(region: &mut Region, entry: &EducationEntry) {
    region.nodes.push(Node::Separator);
    region.nodes.push(Node::Heading(entry.name.clone()));
    region.nodes.push(Node::Text(entry.institution.clone()));
    region.nodes.push(Node::Text(entry.date.clone()));
    region.nodes.push(Node::Text(entry.summary.clone()));
    region
        .nodes
        .push(Node::Text(format!("Acquired skills: {}", entry.skills)));
}

fn push_experience_card(region: &mut Region, entry: &ExperienceEntry) {
    region.nodes.push(Node::Separator);
    region.nodes.push(Node::Heading(entry.name.clone()));
    region.nodes.push(Node::Emphasis(entry.institution.clone()));
    region.nodes.push(Node::Text(entry.date.clone()));
    region.nodes.push(Node::Text(entry.summary.clone()));
}

/// Exactly one of the two lists is composed, chosen solely by `selection`.
/// The other list never contributes nodes, whatever its contents.
pub fn selected_panel(
    selection: PanelSelection,
    education: &[EducationEntry],
    experience: &[ExperienceEntry],
) -> Region {
    let mut region = Region::new(RegionKind::SelectedList);
    match selection {
        PanelSelection::Education => {
            region
                .nodes
                .push(Node::Heading(HEADING_EDUCATION.to_string()));
            for entry in education {
                push_education_card(&mut region, entry);
            }
        }
        PanelSelection::Experience => {
            region
                .nodes
                .push(Node::Heading(HEADING_EXPERIENCE.to_string()));
            for entry in experience {
                push_experience_card(&mut region, entry);
            }
        }
    }
    region
}

/// Languages first, then the bare skill labels. Order preserved from the
/// source lists; no sorting, dedup, or filtering. An empty skills list still
/// yields both headings.
pub fn languages_and_skills(languages: &[LanguageEntry], skills: &[String]) -> Region {
    let mut region = Region::new(RegionKind::LanguagesAndSkills);
    region
        .nodes
        .push(Node::Heading(HEADING_LANGUAGES.to_string()));
    for lang in languages {
        region.nodes.push(Node::Separator);
        region.nodes.push(Node::Emphasis(lang.language.clone()));
        region
            .nodes
            .push(Node::Text(format!("Written: {}", lang.written)));
        region
            .nodes
            .push(Node::Text(format!("Spoken: {}", lang.spoken)));
    }
    region.nodes.push(Node::Heading(HEADING_SKILLS.to_string()));
    for skill in skills {
        region.nodes.push(Node::Text(skill.clone()));
    }
    region
}

/// The whole page, regions in display order. Deterministic: identical
/// inputs compose an identical document.
pub fn compose(cv: &CvData, selection: PanelSelection) -> Document {
    Document {
        regions: vec![
            hero(&cv.profile),
            about(&cv.about),
            panel_toggle(selection),
            selected_panel(selection, &cv.education, &cv.experience),
            languages_and_skills(&cv.languages, &cv.skills),
        ],
    }
}
