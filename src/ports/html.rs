// src/ports/html.rs
use crate::application::BoardEntry;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render_card(&self, entry: &BoardEntry<'_>) -> String {
        let note = entry.note;
        let pin_class = if entry.pinned { "pin pinned" } else { "pin" };
        format!(
            r#"        <div class="card" data-note-id="{id}">
            <h4>{title}</h4>
            <div class="meta">
                <span>{date}</span>
                <span class="{pin_class}">&#128204;</span>
            </div>
            <p>{content}</p>
            <div class="tags">#{tags}</div>
        </div>
"#,
            id = encode_double_quoted_attribute(&note.id.to_string()),
            title = encode_text(&note.title),
            date = encode_text(&note.date),
            content = encode_text(&note.content),
            tags = encode_text(&note.tags),
        )
    }

    #[instrument(level = "debug", skip(self, entries), fields(count = entries.len()))]
    pub fn render(&self, entries: &[BoardEntry<'_>], search: &str) -> String {
        let cards = if entries.is_empty() {
            r#"        <p class="empty">No notes</p>
"#
            .to_string()
        } else {
            entries.iter().map(|e| self.render_card(e)).collect()
        };
        let heading = if search.is_empty() {
            "Notes".to_string()
        } else {
            format!("Notes matching \"{}\"", encode_text(search))
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{heading}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 1000px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .grid {{
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.25rem;
        }}
        .card {{
            background: white;
            border-radius: 6px;
            padding: 0.75rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .card h4 {{
            font-size: 18px;
            margin: 0;
        }}
        .meta {{
            display: flex;
            justify-content: space-between;
            font-size: 14px;
            color: #666;
        }}
        .pin {{
            opacity: 0.3;
        }}
        .pin.pinned {{
            opacity: 1;
            color: #3b82f6;
        }}
        .tags {{
            font-weight: 600;
        }}
    </style>
</head>
<body>
    <h1>{heading}</h1>
    <div class="grid">
{cards}    </div>
</body>
</html>"#,
        )
    }
}
