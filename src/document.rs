// File: src/document.rs
// Renderer-agnostic output model: what the composer emits and the
// TUI / plain-text exporter consume.

/// The five page regions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Hero,
    About,
    Toggle,
    SelectedList,
    LanguagesAndSkills,
}

/// One display unit. `Separator` marks a card boundary inside list regions;
/// cards are addressed by position, never by content-derived identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading(String),
    Text(String),
    Emphasis(String),
    Link { label: String, url: String },
    Image { uri: String },
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub nodes: Vec<Node>,
}

impl Region {
    pub fn new(kind: RegionKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
        }
    }

    /// Number of cards in a list region (one `Separator` opens each card).
    pub fn card_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Separator))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub regions: Vec<Region>,
}

impl Document {
    pub fn region(&self, kind: RegionKind) -> Option<&Region> {
        self.regions.iter().find(|r| r.kind == kind)
    }

    /// Deterministic flattening used by `vitae export` and by tests.
    /// Identical documents always yield byte-identical text.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for (i, region) in self.regions.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for node in &region.nodes {
                match node {
                    Node::Heading(text) => {
                        out.push_str(text);
                        out.push('\n');
                        for _ in 0..text.chars().count() {
                            out.push('=');
                        }
                        out.push('\n');
                    }
                    Node::Text(text) => {
                        out.push_str(text);
                        out.push('\n');
                    }
                    Node::Emphasis(text) => {
                        out.push('*');
                        out.push_str(text);
                        out.push('*');
                        out.push('\n');
                    }
                    Node::Link { label, url } => {
                        out.push_str(label);
                        out.push_str(": ");
                        out.push_str(url);
                        out.push('\n');
                    }
                    Node::Image { uri } => {
                        out.push_str("[photo] ");
                        out.push_str(uri);
                        out.push('\n');
                    }
                    Node::Separator => {
                        out.push_str("---\n");
                    }
                }
            }
        }
        out
    }
}
