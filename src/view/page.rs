//! HTML rendering for the dashboard page
//!
//! The page is self-contained: plotly.js draws the figure in the browser and
//! a small script calls the update endpoint on load and on every dropdown
//! change.

use super::layout::Layout;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<script src="{{plotly}}"></script>
</head>
<body>
<h1 style="text-align: center">{{title}}</h1>
<select id="{{select_id}}" style="width: {{width}}">
{{options}}</select>
<div id="{{status_id}}"></div>
<br>
<div id="{{map_id}}"></div>
<script>
const select = document.getElementById({{select_id_js}});
async function refresh(year) {
  const response = await fetch({{update_path_js}} + "?year=" + encodeURIComponent(year));
  if (!response.ok) {
    return;
  }
  const update = await response.json();
  document.getElementById({{status_id_js}}).textContent = update.status_text;
  Plotly.react({{map_id_js}}, update.figure.data, update.figure.layout);
}
select.addEventListener("change", () => refresh(select.value));
refresh(select.value);
</script>
</body>
</html>
"#;

/// Render the layout as a complete HTML document.
///
/// `update_path` is the endpoint the page calls with `?year=<value>`.
pub fn render_page(layout: &Layout, update_path: &str) -> String {
    let options: String = layout
        .dropdown
        .options
        .iter()
        .map(|opt| {
            let selected = if opt.value == layout.dropdown.value {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{}\"{}>{}</option>\n",
                opt.value,
                selected,
                escape_html(&opt.label)
            )
        })
        .collect();

    PAGE_TEMPLATE
        .replace("{{plotly}}", PLOTLY_CDN)
        .replace("{{title}}", &escape_html(&layout.title))
        .replace("{{select_id}}", &escape_html(&layout.dropdown.id))
        .replace("{{width}}", &escape_html(&layout.dropdown.width))
        .replace("{{options}}", &options)
        .replace("{{status_id}}", &escape_html(&layout.status_id))
        .replace("{{map_id}}", &escape_html(&layout.map_id))
        .replace("{{select_id_js}}", &js_string(&layout.dropdown.id))
        .replace("{{status_id_js}}", &js_string(&layout.status_id))
        .replace("{{map_id_js}}", &js_string(&layout.map_id))
        .replace("{{update_path_js}}", &js_string(update_path))
}

/// Quote text as a JavaScript string literal safe to embed in `<script>`
fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string().replace("</", "<\\/")
}

/// Escape text for use inside HTML content or a quoted attribute
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
