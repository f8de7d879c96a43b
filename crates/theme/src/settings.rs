use serde::{Deserialize, Serialize};

/// Name of the built-in light theme.
pub const DEFAULT_THEME_NAME: &str = "nimbus-light";
/// Styling plugin enabled by default.
pub const DEFAULT_PLUGIN: &str = "daisyui";

/// Color palette consumed by the styling layer.
///
/// Field names follow the styling layer's kebab-case token names on the
/// wire; values are `#RRGGBB` hex strings. This is a declarative artifact
/// with no interaction with store logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemePalette {
    pub primary: String,
    pub primary_content: String,
    pub secondary: String,
    pub secondary_content: String,
    pub accent: String,
    pub accent_content: String,
    pub neutral: String,
    pub neutral_content: String,
    pub base_100: String,
    pub base_200: String,
    pub base_300: String,
    pub base_content: String,
    pub info: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            primary: "#005AC1".to_string(),
            primary_content: "#FFFFFF".to_string(),
            secondary: "#D8E2FF".to_string(),
            secondary_content: "#001A41".to_string(),
            accent: "#5F52A7".to_string(),
            accent_content: "#E5DEFF".to_string(),
            neutral: "#FFFFFF".to_string(),
            neutral_content: "#1B1B1F".to_string(),
            base_100: "#FFFFFF".to_string(),
            base_200: "#F9FAFB".to_string(),
            base_300: "#F4F5F7".to_string(),
            base_content: "#1B1B1F".to_string(),
            info: "#1A73E8".to_string(),
            success: "#34A853".to_string(),
            warning: "#F9AB00".to_string(),
            error: "#EA4335".to_string(),
        }
    }
}

/// One named palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub name: String,
    pub palette: ThemePalette,
}

impl Default for ThemeDefinition {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME_NAME.to_string(),
            palette: ThemePalette::default(),
        }
    }
}

impl ThemeDefinition {
    fn normalized(mut self) -> Option<Self> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return None;
        }

        Some(self)
    }
}

/// Complete theme configuration: enabled styling plugins plus the set of
/// named palettes and which one is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default = "default_plugins")]
    pub plugins: Vec<String>,
    #[serde(default = "default_theme_name")]
    pub active_theme: String,
    #[serde(default = "default_themes")]
    pub themes: Vec<ThemeDefinition>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            plugins: default_plugins(),
            active_theme: default_theme_name(),
            themes: default_themes(),
        }
    }
}

impl ThemeSettings {
    /// Returns the palette selected by `active_theme`, falling back to the
    /// first defined theme when the name matches nothing.
    pub fn active_palette(&self) -> Option<&ThemePalette> {
        self.themes
            .iter()
            .find(|theme| theme.name == self.active_theme)
            .or_else(|| self.themes.first())
            .map(|theme| &theme.palette)
    }

    /// Looks up a palette by theme name.
    pub fn palette(&self, name: &str) -> Option<&ThemePalette> {
        self.themes
            .iter()
            .find(|theme| theme.name == name)
            .map(|theme| &theme.palette)
    }

    /// Drops blank plugin and theme rows; restores defaults when everything
    /// was filtered away so the styling layer always has one usable theme.
    pub fn normalized(mut self) -> Self {
        self.plugins = self
            .plugins
            .into_iter()
            .map(|plugin| plugin.trim().to_string())
            .filter(|plugin| !plugin.is_empty())
            .collect();
        if self.plugins.is_empty() {
            self.plugins = default_plugins();
        }

        self.themes = self
            .themes
            .into_iter()
            .filter_map(ThemeDefinition::normalized)
            .collect();
        if self.themes.is_empty() {
            self.themes = default_themes();
        }

        self.active_theme = self.active_theme.trim().to_string();
        if self.active_theme.is_empty() {
            self.active_theme = default_theme_name();
        }

        self
    }
}

fn default_plugins() -> Vec<String> {
    vec![DEFAULT_PLUGIN.to_string()]
}

fn default_theme_name() -> String {
    DEFAULT_THEME_NAME.to_string()
}

fn default_themes() -> Vec<ThemeDefinition> {
    vec![ThemeDefinition::default()]
}
