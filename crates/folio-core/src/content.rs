//! Content shapes shared with the page renderer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Article metadata from the content collection.
///
/// Every field is optional because drafts and index pages carry partial frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Route path of the article (`_path` in the collection).
    #[serde(rename = "_path", default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Publication date as written in frontmatter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// A chat widget message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Display name of the sender.
    pub name: String,

    /// Plain-text body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Pre-rendered HTML body, used instead of `text` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Avatar image URL.
    pub avatar: String,

    /// Render the bubble on the right-hand side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<bool>,

    /// Extra properties forwarded to the rendering component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Map<String, Value>>,

    /// Show a typing indicator instead of the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_typing: Option<bool>,
}
