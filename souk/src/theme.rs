//! Styles shared by the built-in widgets.

use soukdom::{Border, Rgb, Style};

/// Named styles for tables, filters and the language list.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub surface: Style,
    pub title: Style,
    pub hint: Style,
    pub header: Style,
    pub header_sorted: Style,
    pub header_focused: Style,
    pub filter: Style,
    pub filter_focused: Style,
    pub row: Style,
    pub row_alt: Style,
    pub empty: Style,
    pub panel: Style,
    pub option: Style,
    pub option_active: Style,
    pub option_focused: Style,
}

impl Theme {
    pub fn dark() -> Self {
        let bg = Rgb::new(24, 26, 33);
        let fg = Rgb::new(212, 216, 224);
        let accent = Rgb::new(97, 175, 239);
        let muted = Rgb::new(110, 118, 135);
        let header_bg = Rgb::new(40, 44, 56);
        let alt_bg = Rgb::new(30, 33, 41);
        let focus_bg = Rgb::new(62, 68, 88);

        Self {
            surface: Style::new().background(bg).foreground(fg),
            title: Style::new().foreground(accent).bold(),
            hint: Style::new().foreground(muted).dim(),
            header: Style::new().background(header_bg).foreground(fg).bold(),
            header_sorted: Style::new().background(header_bg).foreground(accent).bold(),
            header_focused: Style::new().background(focus_bg).foreground(Rgb::WHITE).bold(),
            filter: Style::new().background(alt_bg).foreground(fg),
            filter_focused: Style::new().background(focus_bg).foreground(Rgb::WHITE),
            row: Style::new().background(bg).foreground(fg),
            row_alt: Style::new().background(alt_bg).foreground(fg),
            empty: Style::new().foreground(muted),
            panel: Style::new()
                .background(header_bg)
                .foreground(fg)
                .border(Border::Rounded),
            option: Style::new().foreground(fg),
            option_active: Style::new().foreground(accent).bold(),
            option_focused: Style::new().background(focus_bg).foreground(Rgb::WHITE),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
