// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use html_escape::encode_text;

/// 表单提交后的展示结果
#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    Warning(&'a str),
    Summary { summary: &'a str, word_count: usize },
    Error(&'a str),
}

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 720px; margin: 48px auto; padding: 0 16px; }
textarea { width: 100%; height: 200px; box-sizing: border-box; }
button { margin-top: 12px; padding: 8px 24px; }
.warning { background: #fff4e5; border: 1px solid #f0b35b; padding: 12px; margin-top: 16px; }
.error { background: #fdecea; border: 1px solid #e57373; padding: 12px; margin-top: 16px; }
.summary { margin-top: 24px; }
.meta { color: #666; font-size: 0.9em; }
"#;

/// 渲染整页 HTML
///
/// 用户输入回填到文本框，所有动态内容均经过转义
pub fn render(text: &str, outcome: Option<Outcome<'_>>) -> String {
    let result = match outcome {
        None => String::new(),
        Some(Outcome::Warning(message)) => {
            format!(r#"<div class="warning">{}</div>"#, encode_text(message))
        }
        Some(Outcome::Summary {
            summary,
            word_count,
        }) => format!(
            r#"<section class="summary"><h2>Summary:</h2><p>{}</p><p class="meta">Word Count: {}</p></section>"#,
            encode_text(summary),
            word_count
        ),
        Some(Outcome::Error(message)) => {
            format!(r#"<div class="error">{}</div>"#, encode_text(message))
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>AI Text Summarizer</title>
<style>{style}</style>
</head>
<body>
<h1>AI Text Summarizer 📝</h1>
<p>Paste text below and get a short summary using AI.</p>
<form method="post" action="/">
<label for="text">Enter your text here</label>
<textarea id="text" name="text">{text}</textarea>
<button type="submit">Summarize</button>
</form>
{result}
</body>
</html>
"#,
        style = STYLE,
        text = encode_text(text),
        result = result
    )
}
