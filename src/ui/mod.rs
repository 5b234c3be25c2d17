mod button;

pub use button::RuleButton;

use macroquad::prelude::{screen_height, screen_width};

use crate::domain::RuleTable;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_SPACING: f32 = 50.0;
pub const BUTTONS_TOP: f32 = 20.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Size of the area the canvas is shown in
pub fn viewport_size() -> (f32, f32) {
    ((screen_width() - PANEL_WIDTH).max(0.0), screen_height())
}

/// Label shown on a rule's button, e.g. "Rule 110"
pub fn rule_label(rule: &RuleTable) -> String {
    format!("Rule {}", rule.number())
}

/// One button per rule, stacked at the top of the panel
pub fn layout_rule_buttons(panel_x: f32, rules: &[(&'static str, RuleTable)]) -> Vec<RuleButton> {
    rules
        .iter()
        .enumerate()
        .map(|(idx, (_, rule))| {
            RuleButton::new(
                panel_x,
                BUTTONS_TOP + idx as f32 * BUTTON_SPACING,
                PANEL_WIDTH,
                BUTTON_HEIGHT,
                rule_label(rule),
                idx,
            )
        })
        .collect()
}

/// Y coordinate just below the rule buttons
pub fn below_buttons(rule_count: usize) -> f32 {
    BUTTONS_TOP + rule_count as f32 * BUTTON_SPACING + 20.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::all_rules;

    #[test]
    fn test_one_button_per_rule() {
        let rules = all_rules();
        let buttons = layout_rule_buttons(500.0, &rules);

        let labels: Vec<_> = buttons.iter().map(|b| b.label().to_owned()).collect();
        assert_eq!(labels, ["Rule 18", "Rule 30", "Rule 110", "Rule 86"]);
        assert!(buttons.iter().enumerate().all(|(i, b)| b.rule_index == i));
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let rules = all_rules();
        let buttons = layout_rule_buttons(0.0, &rules);
        // bottom edge of the first button belongs to it alone
        let y = BUTTONS_TOP + BUTTON_HEIGHT;
        let hits = buttons.iter().filter(|b| b.is_hovered((10.0, y))).count();
        assert_eq!(hits, 1);
    }
}
