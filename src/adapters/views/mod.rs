pub mod charts;
pub mod dashboard;
pub mod login;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f4f6fb; color: #1d2433; }
main { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
.card { background: #fff; border-radius: 8px; padding: 1.5rem; margin-bottom: 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
form.login { max-width: 360px; margin: 4rem auto; display: flex; flex-direction: column; gap: .75rem; }
input { padding: .6rem; border: 1px solid #c9d1e0; border-radius: 4px; }
button { padding: .6rem 1rem; border: 0; border-radius: 4px; background: #166fe5; color: #fff; cursor: pointer; }
.error { color: #b42318; }
.charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(480px, 1fr)); gap: 1.5rem; }
header { display: flex; justify-content: space-between; align-items: center; }
"#;

pub(crate) fn layout(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
{head_extra}
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        style = STYLE,
        head_extra = head_extra,
        body = body,
    )
}

pub(crate) fn escape_html(raw: &str) -> String {
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

/// JSON safe to place inside a `<script>` element.
pub(crate) fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}
