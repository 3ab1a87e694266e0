use serde::Deserialize;

/// Symbolic keys for user-visible labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    /// Prompt above the name field.
    EnterItem,
    /// Label of the button that adds the draft to the roster.
    ButtonClick,
    /// Label of the button that opens the result screen.
    ButtonNavigate,
    /// Title of the home screen.
    HomeTitle,
    /// Title of the result screen.
    ResultTitle,
}

/// Label table. Every key has a built-in default; the `[strings]` table of
/// the config file may override any subset of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Strings {
    pub enter_item: String,
    pub button_click: String,
    pub button_navigate: String,
    pub home_title: String,
    pub result_title: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            enter_item: "Enter Item".to_string(),
            button_click: "Submit".to_string(),
            button_navigate: "Finish".to_string(),
            home_title: "Roster".to_string(),
            result_title: "Result".to_string(),
        }
    }
}

impl Strings {
    /// Returns the label for `key`.
    pub fn lookup(&self, key: StringKey) -> &str {
        match key {
            StringKey::EnterItem => &self.enter_item,
            StringKey::ButtonClick => &self.button_click,
            StringKey::ButtonNavigate => &self.button_navigate,
            StringKey::HomeTitle => &self.home_title,
            StringKey::ResultTitle => &self.result_title,
        }
    }
}
