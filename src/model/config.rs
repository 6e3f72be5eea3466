use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Built-in configurations matching the three shipped editor variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Add and edit only; the dialog has no delete button
    Classic,
    /// Adds a delete button to the edit dialog
    Deletable,
    /// Delete button plus Enter-to-save inside the dialog
    #[default]
    Keyboard,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Classic, Preset::Deletable, Preset::Keyboard];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Deletable => "deletable",
            Preset::Keyboard => "keyboard",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown preset '{}' (expected one of: classic, deletable, keyboard)",
                    s
                )
            })
    }
}

/// Editor configuration (quotelist.toml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// The preset this configuration was derived from
    #[serde(default)]
    pub preset: Preset,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub behavior: Behavior,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig::preset(Preset::default())
    }
}

impl EditorConfig {
    pub fn preset(preset: Preset) -> Self {
        let (delete_enabled, submit_on_enter, item_style) = match preset {
            Preset::Classic => (false, false, ItemStyle::Filled),
            Preset::Deletable => (true, false, ItemStyle::Filled),
            Preset::Keyboard => (true, true, ItemStyle::Outlined),
        };
        EditorConfig {
            preset,
            labels: Labels::default(),
            behavior: Behavior {
                delete_enabled,
                submit_on_enter,
            },
            list: ListConfig::default(),
            ui: UiConfig {
                item_style,
                ..UiConfig::default()
            },
        }
    }
}

/// User-visible text for buttons, dialog title and input placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub add_button: String,
    pub edit_button: String,
    pub save_button: String,
    pub cancel_button: String,
    pub delete_button: String,
    pub dialog_title: String,
    pub placeholder: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            add_button: "Add".into(),
            edit_button: "Edit".into(),
            save_button: "Save".into(),
            cancel_button: "Cancel".into(),
            delete_button: "Delete".into(),
            dialog_title: "Edit".into(),
            placeholder: "New item...".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Behavior {
    /// Whether the edit dialog offers a delete action
    #[serde(default = "default_true")]
    pub delete_enabled: bool,
    /// Whether Enter inside the edit dialog saves
    #[serde(default = "default_true")]
    pub submit_on_enter: bool,
}

impl Default for Behavior {
    fn default() -> Self {
        Behavior {
            delete_enabled: true,
            submit_on_enter: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Contents the editor starts with. Empty by default.
    #[serde(default)]
    pub initial_items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStyle {
    /// Rows drawn on a filled background
    #[default]
    Filled,
    /// Rows drawn inside a border
    Outlined,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub item_style: ItemStyle,
    /// Theme overrides, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}
