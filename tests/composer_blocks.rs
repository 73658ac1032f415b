// Tests for the about and languages/skills regions.
use vitae::composer;
use vitae::document::{Node, RegionKind};
use vitae::model::{AboutItem, LanguageEntry};

fn about_item(info: &str) -> AboutItem {
    AboutItem {
        info: info.to_string(),
    }
}

#[test]
fn about_emits_one_line_per_item_in_order() {
    let items = vec![about_item("one"), about_item("two"), about_item("three")];
    let region = composer::about(&items);

    assert_eq!(region.kind, RegionKind::About);
    assert_eq!(
        region.nodes,
        vec![
            Node::Heading("About".to_string()),
            Node::Text("one".to_string()),
            Node::Text("two".to_string()),
            Node::Text("three".to_string()),
        ]
    );
}

#[test]
fn empty_about_list_still_yields_the_heading() {
    let region = composer::about(&[]);
    assert_eq!(region.nodes, vec![Node::Heading("About".to_string())]);
}

#[test]
fn languages_block_carries_both_proficiency_levels() {
    let langs = vec![LanguageEntry {
        language: "Español".to_string(),
        written: "Nativo".to_string(),
        spoken: "Nativo".to_string(),
    }];
    let region = composer::languages_and_skills(&langs, &[]);

    assert_eq!(region.kind, RegionKind::LanguagesAndSkills);
    assert!(region.nodes.contains(&Node::Emphasis("Español".to_string())));
    assert!(
        region
            .nodes
            .contains(&Node::Text("Written: Nativo".to_string()))
    );
    assert!(
        region
            .nodes
            .contains(&Node::Text("Spoken: Nativo".to_string()))
    );
}

#[test]
fn empty_skills_still_renders_both_blocks() {
    // Boundary from the spec: no skills at all must not drop the skills
    // heading or raise an error.
    let langs = vec![LanguageEntry {
        language: "English".to_string(),
        written: "High".to_string(),
        spoken: "High".to_string(),
    }];
    let region = composer::languages_and_skills(&langs, &[]);

    assert!(
        region
            .nodes
            .contains(&Node::Heading("Languages".to_string()))
    );
    assert_eq!(
        region.nodes.last(),
        Some(&Node::Heading("Other skills".to_string()))
    );
}

#[test]
fn skills_render_in_sequence_order_without_dedup() {
    let skills = vec![
        "Teamwork".to_string(),
        "JIRA".to_string(),
        "Teamwork".to_string(),
    ];
    let region = composer::languages_and_skills(&[], &skills);

    let rendered: Vec<&str> = region
        .nodes
        .iter()
        .filter_map(|n| match n {
            Node::Text(s) => Some(s.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(rendered, vec!["Teamwork", "JIRA", "Teamwork"]);
}
