use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::path::Path;

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("↑/↓", "Navigate snippets"),
    ("Enter", "Copy the selected snippet"),
    ("a-z, A-Z", "Copy the snippet with that index"),
    ("/", "Filter by name or content"),
    ("Ctrl+O", "Open the snippets folder"),
    ("?", "Show this help"),
    ("Esc", "Quit (or leave filter mode)"),
];

pub fn help_lines(snippets_dir: Option<&Path>) -> Vec<Line<'static>> {
    let key_style = Style::default().fg(Color::Yellow);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Snape v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Handle your snippets with Severus precision."),
        Line::from(""),
    ];

    for (keys, action) in KEY_BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", keys), key_style),
            Span::raw(*action),
        ]));
    }

    let location = snippets_dir
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "unavailable (no home directory)".to_string());
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Snippets: "),
        Span::styled(location, Style::default().fg(Color::Cyan)),
    ]));
    lines.push(Line::from("Each file there is a snippet named after the file."));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}
