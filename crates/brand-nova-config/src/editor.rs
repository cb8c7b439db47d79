use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Toolbar buttons, grouped the way the toolbar lays them out. Names are the
/// mark, block type, alignment or action each button triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    pub formatting: Vec<String>,
    pub headings: Vec<String>,
    pub alignment: Vec<String>,
    pub blocks: Vec<String>,
    pub actions: Vec<String>,
    pub fullscreen: Vec<String>,
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ToolbarConfig {
    /// Every group populated; what a full editor shows.
    fn default() -> Self {
        Self {
            formatting: names(&["bold", "italic", "underline", "strikethrough"]),
            headings: names(&["heading-one", "heading-two", "heading-three", "paragraph"]),
            alignment: names(&["left", "center", "right", "justify"]),
            blocks: names(&["block-quote", "bulleted-list", "numbered-list"]),
            actions: names(&["undo", "redo"]),
            fullscreen: names(&["fullscreen"]),
        }
    }
}

impl ToolbarConfig {
    fn empty() -> Self {
        Self {
            formatting: vec![],
            headings: vec![],
            alignment: vec![],
            blocks: vec![],
            actions: vec![],
            fullscreen: vec![],
        }
    }

    /// Every button name across groups, in layout order.
    pub fn tools(&self) -> impl Iterator<Item = &str> {
        [
            &self.formatting,
            &self.headings,
            &self.alignment,
            &self.blocks,
            &self.actions,
            &self.fullscreen,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolbarPreset {
    Minimal,
    Standard,
    Full,
}

impl ToolbarPreset {
    pub fn toolbar(self) -> ToolbarConfig {
        let formatting = names(&["bold", "italic", "underline", "strikethrough"]);
        match self {
            ToolbarPreset::Minimal => ToolbarConfig {
                formatting,
                headings: names(&["heading-one", "paragraph"]),
                ..ToolbarConfig::empty()
            },
            ToolbarPreset::Standard => ToolbarConfig {
                formatting,
                headings: names(&["heading-one", "heading-two", "heading-three", "paragraph"]),
                blocks: names(&["bulleted-list", "numbered-list"]),
                ..ToolbarConfig::empty()
            },
            ToolbarPreset::Full => ToolbarConfig {
                formatting: names(&["bold", "italic", "underline", "strikethrough", "code"]),
                headings: names(&["heading-one", "heading-two", "heading-three", "paragraph"]),
                alignment: names(&["left", "center", "right", "justify"]),
                blocks: names(&[
                    "bulleted-list",
                    "numbered-list",
                    "block-quote",
                    "horizontal-rule",
                ]),
                ..ToolbarConfig::empty()
            },
        }
    }
}

/// A named preset (`toolbar = "minimal"`) or explicit groups
/// (`[editor.toolbar]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Toolbar {
    Preset(ToolbarPreset),
    Custom(ToolbarConfig),
}

impl Default for Toolbar {
    fn default() -> Self {
        Toolbar::Custom(ToolbarConfig::default())
    }
}

impl Toolbar {
    pub fn resolve(&self) -> ToolbarConfig {
        match self {
            Toolbar::Preset(p) => p.toolbar(),
            Toolbar::Custom(c) => c.clone(),
        }
    }
}

/// Settings handed to the host editing surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub theme: Theme,
    pub placeholder: String,
    pub show_word_count: bool,
    /// Ignored while `max_height` is set.
    pub sticky_toolbar: bool,
    /// Editor height in pixels; content scrolls beyond it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
    /// Show every toolbar group regardless of `toolbar`.
    pub full_editor: bool,
    pub toolbar: Toolbar,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            placeholder: "Start writing your content...".to_string(),
            show_word_count: true,
            sticky_toolbar: true,
            max_height: None,
            full_editor: true,
            toolbar: Toolbar::default(),
        }
    }
}

impl EditorSettings {
    pub fn effective_toolbar(&self) -> ToolbarConfig {
        if self.full_editor {
            ToolbarConfig::default()
        } else {
            self.toolbar.resolve()
        }
    }

    pub fn uses_sticky_toolbar(&self) -> bool {
        self.sticky_toolbar && self.max_height.is_none()
    }
}
