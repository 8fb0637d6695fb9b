// SPDX-License-Identifier: GPL-3.0-only

//! Button descriptions for single keys.

use crate::app_settings;
use crate::keys::{KeyCode, KeyDefinition, ModifierState};
use crate::renderer::sizing::DisplayMetrics;
use crate::renderer::theme::{Color, PanelStyle};

/// Everything a sink needs to instantiate one pressable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    /// Key to pass back to the panel when the control is activated
    pub code: KeyCode,
    /// Label, drawn exactly as given
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Margin on every side in pixels
    pub margin: u32,
    /// Whether the label is centered in the control
    pub centered: bool,
    /// Whether the sink may upper-case the label
    pub all_caps: bool,
    /// Label color
    pub text_color: Color,
    /// Label typeface; `None` for the platform default
    pub typeface: Option<String>,
    /// Whether the control repeats while held
    pub repeatable: bool,
    /// Pressed state for toggle keys, `None` for other keys
    pub checked: Option<bool>,
}

/// Describes the control for `key`.
pub fn render_key(
    key: &KeyDefinition,
    modifiers: &ModifierState,
    style: &PanelStyle,
    metrics: &DisplayMetrics,
) -> ButtonSpec {
    ButtonSpec {
        code: key.code().clone(),
        label: key.label().to_string(),
        width: metrics.button_width(app_settings::MAX_KEYS_PER_ROW),
        height: metrics.key_height_px,
        margin: 0,
        centered: true,
        all_caps: false,
        text_color: style.text_color,
        typeface: style.typeface.clone(),
        repeatable: key.is_repeatable(),
        checked: key.modifier().map(|m| modifiers.is_active(m)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Modifier;

    #[test]
    fn test_render_plain_key() {
        let key = KeyDefinition::shortcut("gIt", "git ", false);
        let style = PanelStyle {
            text_color: Color(0xFF11_2233),
            typeface: Some("mono".to_string()),
        };
        let spec = render_key(
            &key,
            &ModifierState::new(),
            &style,
            &DisplayMetrics::new(700, 40),
        );

        assert_eq!(spec.label, "gIt");
        assert!(!spec.all_caps);
        assert_eq!(spec.width, 100);
        assert_eq!(spec.height, 40);
        assert_eq!(spec.margin, 0);
        assert!(spec.centered);
        assert_eq!(spec.text_color, Color(0xFF11_2233));
        assert_eq!(spec.typeface.as_deref(), Some("mono"));
        assert_eq!(spec.checked, None);
    }

    #[test]
    fn test_render_toggle_key_checked() {
        let mut modifiers = ModifierState::new();
        let key = KeyDefinition::stated(Modifier::Alt);
        let metrics = DisplayMetrics::default();
        let style = PanelStyle::default();

        assert_eq!(render_key(&key, &modifiers, &style, &metrics).checked, Some(false));
        modifiers.toggle(Modifier::Alt);
        assert_eq!(render_key(&key, &modifiers, &style, &metrics).checked, Some(true));
    }
}
