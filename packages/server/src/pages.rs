//! Server-side rendering of the gallery page.

use crate::error::AppError;
use crate::models::artwork::{ArtworkResponse, GalleryResponse};
use crate::utils::upload::ALLOWED_EXTENSIONS;

const GRID_COLUMNS: usize = 3;

const PAGE_STYLE: &str = "\
:root { color-scheme: light dark; }
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1100px; padding: 1.5rem; }
h1 { margin-bottom: 1rem; }
.layout { display: flex; gap: 2rem; align-items: flex-start; }
.gallery { flex: 3; }
.upload { flex: 1; border: 1px solid #8884; border-radius: 8px; padding: 1rem; }
.grid { display: flex; gap: 1rem; }
.grid .column { flex: 1; display: flex; flex-direction: column; gap: 1rem; }
.card { margin: 0; }
.card img { width: 100%; border-radius: 6px; }
.card figcaption { padding: 0.25rem 0; }
.card a { font-size: 0.85rem; }
.upload label { display: block; margin: 0.5rem 0 0.25rem; }
.upload input { width: 100%; }
.upload button { margin-top: 1rem; }
.notice { color: #888; }
.error { color: #b00020; }
";

const UPLOAD_SCRIPT: &str = "\
const form = document.getElementById('upload-form');
if (form) {
  form.addEventListener('submit', async (event) => {
    event.preventDefault();
    const note = document.getElementById('upload-note');
    note.textContent = 'Uploading...';
    const response = await fetch('/api/v1/artworks', { method: 'POST', body: new FormData(form) });
    if (response.ok) { location.reload(); return; }
    const body = await response.json().catch(() => null);
    note.textContent = body && body.message ? body.message : 'Upload failed';
  });
}
";

/// Render the whole page: gallery grid left, upload form right.
pub fn render_gallery_page(
    uploads_enabled: bool,
    gallery: &Result<GalleryResponse, AppError>,
) -> String {
    let gallery_html = match gallery {
        Ok(gallery) if gallery.artworks.is_empty() => {
            r#"<p class="notice">No artworks found.</p>"#.to_string()
        }
        Ok(gallery) => render_grid(&gallery.artworks),
        Err(err) => format!(
            r#"<p class="error">Error fetching artworks: {}</p>"#,
            escape_html(&err.user_message())
        ),
    };

    let upload_html = if uploads_enabled {
        render_upload_form()
    } else {
        r#"<p class="notice">Uploads are disabled: no service-role key is configured.</p>"#
            .to_string()
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Creative Showcase</title>
<style>{PAGE_STYLE}</style>
</head>
<body>
<h1>Creative Showcase</h1>
<div class="layout">
<section class="gallery">
<h2>Gallery</h2>
{gallery_html}
</section>
<aside class="upload">
<h2>Upload</h2>
{upload_html}
<button type="button" onclick="location.reload()">Refresh gallery</button>
</aside>
</div>
<script>{UPLOAD_SCRIPT}</script>
</body>
</html>"#
    )
}

/// Distribute artworks over the grid: artwork `i` goes to column
/// `i % 3`.
fn grid_columns(artworks: &[ArtworkResponse]) -> Vec<Vec<&ArtworkResponse>> {
    let mut columns = vec![Vec::new(); GRID_COLUMNS];
    for (i, artwork) in artworks.iter().enumerate() {
        columns[i % GRID_COLUMNS].push(artwork);
    }
    columns
}

fn render_grid(artworks: &[ArtworkResponse]) -> String {
    let columns: String = grid_columns(artworks)
        .iter()
        .map(|column| {
            let cards: String = column.iter().map(|artwork| render_card(artwork)).collect();
            format!(r#"<div class="column">{cards}</div>"#)
        })
        .collect();
    format!(r#"<div class="grid">{columns}</div>"#)
}

fn render_card(artwork: &ArtworkResponse) -> String {
    let url = escape_html(&artwork.image_url);
    let title = escape_html(&artwork.title);
    format!(
        r#"<figure class="card"><img src="{url}" alt="{title}"><figcaption>{title}</figcaption><a href="{url}">Open full image</a></figure>"#
    )
}

fn render_upload_form() -> String {
    let accept: String = ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<String>>()
        .join(",");

    format!(
        r#"<form id="upload-form">
<label for="title">Title</label>
<input type="text" id="title" name="title" placeholder="e.g. Summer Vacation" required>
<label for="user_id">User id</label>
<input type="text" id="user_id" name="user_id" placeholder="public">
<label for="file">Image</label>
<input type="file" id="file" name="file" accept="{accept}" required>
<button type="submit">Upload</button>
<p id="upload-note" class="notice"></p>
</form>"#
    )
}

/// Minimal escaping for text and attribute positions.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
