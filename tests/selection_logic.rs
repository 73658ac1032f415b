// Tests for the two-state panel selection: forced-set triggers, not an XOR
// toggle.
use vitae::composer;
use vitae::model::{CvData, EducationEntry, PanelSelection, Profile};

fn minimal_cv() -> CvData {
    CvData {
        profile: Profile {
            firstname: "A".to_string(),
            surname: "B".to_string(),
            city: String::new(),
            email: "a@b.c".to_string(),
            birth_date: String::new(),
            phone: String::new(),
            photo: String::new(),
            links: vec![],
        },
        about: vec![],
        education: vec![EducationEntry {
            name: "X".to_string(),
            date: "2020".to_string(),
            institution: "Y".to_string(),
            summary: "Z".to_string(),
            skills: "S".to_string(),
        }],
        experience: vec![],
        languages: vec![],
        skills: vec![],
    }
}

#[test]
fn initial_selection_is_education() {
    assert_eq!(PanelSelection::default(), PanelSelection::Education);
}

#[test]
fn triggers_are_forced_sets() {
    let s = PanelSelection::Education;
    assert_eq!(s.select_experience(), PanelSelection::Experience);
    assert_eq!(s.select_education(), PanelSelection::Education);

    let s = PanelSelection::Experience;
    assert_eq!(s.select_education(), PanelSelection::Education);
    assert_eq!(s.select_experience(), PanelSelection::Experience);
}

#[test]
fn repeated_trigger_is_idempotent_on_state_and_output() {
    let cv = minimal_cv();

    let once = PanelSelection::Education.select_education();
    let twice = once.select_education();
    assert_eq!(once, twice);

    // Rendered output is unchanged too.
    let doc_once = composer::compose(&cv, once);
    let doc_twice = composer::compose(&cv, twice);
    assert_eq!(doc_once.to_plain_text(), doc_twice.to_plain_text());
}

#[test]
fn selection_round_trip_restores_the_same_output() {
    let cv = minimal_cv();
    let original = composer::compose(&cv, PanelSelection::Education);

    let away = PanelSelection::Education.select_experience();
    let back = away.select_education();
    let restored = composer::compose(&cv, back);

    assert_eq!(original.to_plain_text(), restored.to_plain_text());
}
