// Tests for hero-region composition.
use vitae::composer;
use vitae::document::{Node, RegionKind};
use vitae::model::{Profile, ProfileLink};

fn profile() -> Profile {
    Profile {
        firstname: "Ada".to_string(),
        surname: "Lovelace".to_string(),
        city: "London".to_string(),
        email: "ada@example.org".to_string(),
        birth_date: "10/12/1815".to_string(),
        phone: "(+44) 1234567".to_string(),
        photo: "https://example.org/ada.png".to_string(),
        links: vec![
            ProfileLink {
                label: "GitHub".to_string(),
                url: "https://github.com/ada".to_string(),
            },
            ProfileLink {
                label: "LinkedIn".to_string(),
                url: "https://linkedin.com/in/ada".to_string(),
            },
        ],
    }
}

#[test]
fn hero_contains_identity_and_contact() {
    let region = composer::hero(&profile());
    assert_eq!(region.kind, RegionKind::Hero);

    assert!(
        region
            .nodes
            .contains(&Node::Heading("Ada Lovelace".to_string()))
    );
    assert!(region.nodes.contains(&Node::Text("London".to_string())));
    assert!(region.nodes.contains(&Node::Text("10/12/1815".to_string())));
    assert!(
        region
            .nodes
            .contains(&Node::Text("(+44) 1234567".to_string()))
    );
}

#[test]
fn hero_email_is_a_mailto_link() {
    let region = composer::hero(&profile());
    assert!(region.nodes.contains(&Node::Link {
        label: "ada@example.org".to_string(),
        url: "mailto:ada@example.org".to_string(),
    }));
}

#[test]
fn hero_photo_is_a_reference_node() {
    let region = composer::hero(&profile());
    assert_eq!(
        region.nodes[0],
        Node::Image {
            uri: "https://example.org/ada.png".to_string()
        }
    );
}

#[test]
fn hero_profile_links_preserve_order() {
    let region = composer::hero(&profile());
    let labels: Vec<&str> = region
        .nodes
        .iter()
        .filter_map(|n| match n {
            Node::Link { label, url } if !url.starts_with("mailto:") => Some(label.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["GitHub", "LinkedIn"]);
}

#[test]
fn hero_suppresses_links_with_empty_urls() {
    // Empty URI fields are suppressed entirely, never shown as broken links.
    let mut p = profile();
    p.links[0].url = String::new();

    let region = composer::hero(&p);
    let labels: Vec<&str> = region
        .nodes
        .iter()
        .filter_map(|n| match n {
            Node::Link { label, url } if !url.starts_with("mailto:") => Some(label.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["LinkedIn"]);
}

#[test]
fn hero_without_photo_omits_the_image_node() {
    let mut p = profile();
    p.photo = String::new();

    let region = composer::hero(&p);
    assert!(!region.nodes.iter().any(|n| matches!(n, Node::Image { .. })));
    // The name heading moves to the front.
    assert_eq!(region.nodes[0], Node::Heading("Ada Lovelace".to_string()));
}
