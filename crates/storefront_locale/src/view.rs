//! Toolkit-neutral description of what the switcher shows.
//!
//! A host maps these onto its own popover, select and button widgets; the
//! models carry controlled-component state only (current value plus options).

use std::fmt;

use serde::Serialize;

/// Translation namespace for the switcher's strings.
pub const HEADER_NAMESPACE: &str = "Header";
/// Heading above the two selects.
pub const CHOOSE_COUNTRY_AND_LANGUAGE: &str = "chooseCountryAndLanguage";
/// Submit button label.
pub const GO_TO_SITE: &str = "goToSite";

/// Alignment of the popover relative to the trigger
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PopoverAlign {
    /// Align to start of trigger
    #[default]
    Start,
    /// Center with trigger
    Center,
    /// Align to end of trigger
    End,
}

/// An option in a select dropdown
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// The value reported back on change
    pub value: String,
    /// The display label shown in UI
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A controlled select: the value it shows and the options it offers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectModel {
    pub value: String,
    pub options: Vec<SelectOption>,
}

impl SelectModel {
    /// The option matching `value`, if any.
    pub fn selected(&self) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.value == self.value)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.value.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonModel {
    pub label: String,
    pub kind: ButtonType,
}

/// The always-visible part: a button showing the active locale's flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TriggerModel {
    pub glyph: String,
}

/// The form inside the popover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PopoverContent {
    pub heading: String,
    pub region: SelectModel,
    pub language: SelectModel,
    pub submit: ButtonModel,
}

/// Everything a host needs to draw the switcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SwitcherView {
    pub trigger: TriggerModel,
    pub align: PopoverAlign,
    pub open: bool,
    pub content: PopoverContent,
}

fn write_select(f: &mut fmt::Formatter<'_>, name: &str, select: &SelectModel) -> fmt::Result {
    for (i, option) in select.options.iter().enumerate() {
        let head = if i == 0 { name } else { "" };
        let mark = if option.value == select.value { '>' } else { ' ' };
        writeln!(f, "  {head:<10}{mark} {}", option.label)?;
    }
    if select.options.is_empty() {
        writeln!(f, "  {name:<10}  (none)")?;
    }
    Ok(())
}

/// Plain-text rendering, used by terminal hosts.
///
/// ```text
/// [🇺🇸]
///   Choose your country and language
///   region:   > 🇺🇸 US
///               🇨🇦 CA
///   language: > English
///   [ Go to site ]
/// ```
impl fmt::Display for SwitcherView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.trigger.glyph)?;
        if !self.open {
            return Ok(());
        }
        let content = &self.content;
        writeln!(f, "  {}", content.heading)?;
        write_select(f, "region:", &content.region)?;
        write_select(f, "language:", &content.language)?;
        writeln!(f, "  [ {} ]", content.submit.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn view(open: bool) -> SwitcherView {
        SwitcherView {
            trigger: TriggerModel {
                glyph: "🇺🇸".to_string(),
            },
            align: PopoverAlign::End,
            open,
            content: PopoverContent {
                heading: "Choose".to_string(),
                region: SelectModel {
                    value: "US".to_string(),
                    options: vec![
                        SelectOption::new("EU", "🇫🇷 EU"),
                        SelectOption::new("US", "🇺🇸 US"),
                    ],
                },
                language: SelectModel {
                    value: "en".to_string(),
                    options: vec![SelectOption::new("en", "en")],
                },
                submit: ButtonModel {
                    label: "Go".to_string(),
                    kind: ButtonType::Submit,
                },
            },
        }
    }

    #[test]
    fn closed_view_renders_trigger_only() {
        assert_eq!(view(false).to_string(), "[🇺🇸]\n");
    }

    #[test]
    fn open_view_marks_selected_options() {
        let expected = "\
[🇺🇸]
  Choose
  region:     🇫🇷 EU
            > 🇺🇸 US
  language: > en
  [ Go ]
";
        assert_eq!(view(true).to_string(), expected);
    }

    #[test]
    fn selected_option_lookup() {
        let v = view(true);
        assert_eq!(v.content.region.selected().map(|o| o.label.as_str()), Some("🇺🇸 US"));
        assert_eq!(v.content.region.values().collect::<Vec<_>>(), vec!["EU", "US"]);
    }
}
