use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub disabled: Style,
    pub dot_active: Style,
    pub dot_inactive: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().cyan(),
            disabled: Style::default().dark_gray().dim(),
            dot_active: Style::default().cyan().bold(),
            dot_inactive: Style::default().dark_gray(),
        }
    }
}
