// File: src/tui/view.rs
use crate::config::AppTheme;
use crate::document::{Node, RegionKind};
use crate::tui::state::AppState;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// Resolved colors for one theme. Exact values are incidental; the mapping
/// from node kind to role is what the view relies on.
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub heading: Color,
    pub accent: Color,
    pub link: Color,
    pub muted: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

pub fn palette(theme: AppTheme) -> Palette {
    match theme {
        AppTheme::RustyDark => Palette {
            bg: Color::Rgb(24, 20, 18),
            fg: Color::Rgb(222, 214, 202),
            heading: Color::Rgb(222, 120, 60),
            accent: Color::Rgb(240, 160, 90),
            link: Color::Rgb(120, 170, 220),
            muted: Color::Rgb(130, 120, 110),
            highlight_fg: Color::Rgb(24, 20, 18),
            highlight_bg: Color::Rgb(222, 120, 60),
        },
        AppTheme::Light => Palette {
            bg: Color::White,
            fg: Color::Black,
            heading: Color::Blue,
            accent: Color::Magenta,
            link: Color::Blue,
            muted: Color::DarkGray,
            highlight_fg: Color::White,
            highlight_bg: Color::Blue,
        },
        AppTheme::Dark => Palette {
            bg: Color::Black,
            fg: Color::Gray,
            heading: Color::Cyan,
            accent: Color::Yellow,
            link: Color::LightBlue,
            muted: Color::DarkGray,
            highlight_fg: Color::Black,
            highlight_bg: Color::Cyan,
        },
        AppTheme::Dracula => Palette {
            bg: Color::Rgb(40, 42, 54),
            fg: Color::Rgb(248, 248, 242),
            heading: Color::Rgb(189, 147, 249),
            accent: Color::Rgb(255, 121, 198),
            link: Color::Rgb(139, 233, 253),
            muted: Color::Rgb(98, 114, 164),
            highlight_fg: Color::Rgb(40, 42, 54),
            highlight_bg: Color::Rgb(189, 147, 249),
        },
        AppTheme::Nord => Palette {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(216, 222, 233),
            heading: Color::Rgb(136, 192, 208),
            accent: Color::Rgb(235, 203, 139),
            link: Color::Rgb(129, 161, 193),
            muted: Color::Rgb(76, 86, 106),
            highlight_fg: Color::Rgb(46, 52, 64),
            highlight_bg: Color::Rgb(136, 192, 208),
        },
        AppTheme::SolarizedDark => Palette {
            bg: Color::Rgb(0, 43, 54),
            fg: Color::Rgb(131, 148, 150),
            heading: Color::Rgb(38, 139, 210),
            accent: Color::Rgb(181, 137, 0),
            link: Color::Rgb(42, 161, 152),
            muted: Color::Rgb(88, 110, 117),
            highlight_fg: Color::Rgb(0, 43, 54),
            highlight_bg: Color::Rgb(38, 139, 210),
        },
        AppTheme::GruvboxDark => Palette {
            bg: Color::Rgb(40, 40, 40),
            fg: Color::Rgb(235, 219, 178),
            heading: Color::Rgb(250, 189, 47),
            accent: Color::Rgb(254, 128, 25),
            link: Color::Rgb(131, 165, 152),
            muted: Color::Rgb(146, 131, 116),
            highlight_fg: Color::Rgb(40, 40, 40),
            highlight_bg: Color::Rgb(250, 189, 47),
        },
    }
}

const SEPARATOR_RULE: &str = "──────────";

/// Flattens the composed document into styled lines. Pure with respect to
/// the document; the same document and palette always yield the same lines.
fn document_lines(state: &AppState, pal: &Palette) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for region in &state.document.regions {
        if region.kind == RegionKind::Toggle {
            // The two triggers on one centered row, active one highlighted.
            let mut spans: Vec<Span> = Vec::new();
            for node in &region.nodes {
                match node {
                    Node::Emphasis(label) => spans.push(Span::styled(
                        format!(" [ {} ] ", label),
                        Style::default()
                            .fg(pal.highlight_fg)
                            .bg(pal.highlight_bg)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Node::Text(label) => spans.push(Span::styled(
                        format!("   {}   ", label),
                        Style::default().fg(pal.muted),
                    )),
                    _ => {}
                }
            }
            lines.push(Line::from(spans).centered());
            lines.push(Line::raw(""));
            continue;
        }

        for node in &region.nodes {
            match node {
                Node::Heading(text) => {
                    if !lines.is_empty() {
                        lines.push(Line::raw(""));
                    }
                    let line = Line::from(Span::styled(
                        text.clone(),
                        Style::default()
                            .fg(pal.heading)
                            .add_modifier(Modifier::BOLD),
                    ));
                    // The hero name doubles as the page title; center it.
                    if region.kind == RegionKind::Hero {
                        lines.push(line.centered());
                    } else {
                        lines.push(line);
                    }
                }
                Node::Text(text) => {
                    let line = Line::from(Span::styled(
                        text.clone(),
                        Style::default().fg(pal.fg),
                    ));
                    if region.kind == RegionKind::Hero {
                        lines.push(line.centered());
                    } else {
                        lines.push(line);
                    }
                }
                Node::Emphasis(text) => lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(pal.accent).add_modifier(Modifier::BOLD),
                ))),
                Node::Link { label, url } => {
                    let line = Line::from(vec![
                        Span::styled(
                            format!("{}: ", label),
                            Style::default().fg(pal.fg).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            url.clone(),
                            Style::default()
                                .fg(pal.link)
                                .add_modifier(Modifier::UNDERLINED),
                        ),
                    ]);
                    if region.kind == RegionKind::Hero {
                        lines.push(line.centered());
                    } else {
                        lines.push(line);
                    }
                }
                Node::Image { uri } => {
                    let line = Line::from(Span::styled(
                        format!("[photo] {}", uri),
                        Style::default().fg(pal.muted),
                    ));
                    if region.kind == RegionKind::Hero {
                        lines.push(line.centered());
                    } else {
                        lines.push(line);
                    }
                }
                Node::Separator => {
                    lines.push(Line::raw(""));
                    lines.push(Line::from(Span::styled(
                        SEPARATOR_RULE,
                        Style::default().fg(pal.muted),
                    )));
                }
            }
        }
        lines.push(Line::raw(""));
    }

    lines
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let pal = palette(state.theme);

    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " PANELS ",
                Style::default()
                    .fg(pal.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" e/Left:Education  x/Right:Experience"),
        ]),
        Line::from(vec![
            Span::styled(
                " NAVIGATION ",
                Style::default()
                    .fg(pal.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" j/k:Up/Down  PgUp/PgDn:Scroll  g/G:Top/Bottom"),
        ]),
        Line::from(vec![
            Span::styled(
                " VIEW ",
                Style::default().fg(pal.link).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" t:Cycle Theme  ?:Toggle Help  q:Quit"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), footer_height])
        .split(f.area());

    let body = v_chunks[0];
    let inner_width = body.width.saturating_sub(2).max(1);
    let lines = document_lines(state, &pal);

    // Measure the wrapped height so scrolling can be clamped to content.
    let mut total_lines: u16 = 0;
    for line in &lines {
        let width: usize = line
            .spans
            .iter()
            .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
            .sum();
        if width == 0 {
            total_lines += 1;
        } else {
            total_lines += (width as u16).div_ceil(inner_width);
        }
    }

    let viewport = body.height.saturating_sub(2);
    state.viewport_height = viewport;
    state.max_scroll = total_lines.saturating_sub(viewport);
    if state.scroll > state.max_scroll {
        state.scroll = state.max_scroll;
    }

    let title = format!(" {} ", state.cv.profile.full_name());
    let page = Paragraph::new(lines)
        .style(Style::default().fg(pal.fg).bg(pal.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(pal.muted)),
        )
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(page, body);

    // --- Footer ---
    if state.show_full_help {
        let help = Paragraph::new(full_help_text)
            .style(Style::default().fg(pal.fg).bg(pal.bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .border_style(Style::default().fg(pal.muted)),
            );
        f.render_widget(help, v_chunks[1]);
    } else {
        let status = if state.message.is_empty() {
            "e:Education  x:Experience  j/k:Scroll  t:Theme  ?:Help  q:Quit".to_string()
        } else {
            state.message.clone()
        };
        let footer = Paragraph::new(Line::from(Span::styled(
            status,
            Style::default().fg(pal.muted),
        )))
        .style(Style::default().bg(pal.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(pal.muted)),
        );
        f.render_widget(footer, v_chunks[1]);
    }
}
