use serde_json::Value;

use crate::services::api::RawResponse;

pub const BODY_PREVIEW_CHARS: usize = 500;
const RULE_WIDTH: usize = 50;

/// How a response body is shown in a report block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Json(String),
    Raw(String),
}

impl BodyView {
    /// Pretty JSON when the body parses, raw text otherwise. Both truncated.
    pub fn of(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => match serde_json::to_string_pretty(&value) {
                Ok(pretty) => BodyView::Json(preview(&pretty)),
                Err(_) => BodyView::Raw(preview(body)),
            },
            Err(_) => BodyView::Raw(preview(body)),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            BodyView::Json(text) | BodyView::Raw(text) => text,
        }
    }
}

/// First `BODY_PREVIEW_CHARS` characters, no ellipsis.
pub fn preview(text: &str) -> String {
    text.chars().take(BODY_PREVIEW_CHARS).collect()
}

pub fn render_report(label: &str, response: &RawResponse) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let view = BodyView::of(&response.body);
    format!(
        "\n{rule}\nTEST: {label}\nStatus: {status}\nResponse: {body}\n{rule}\n",
        status = response.status,
        body = view.text(),
    )
}
