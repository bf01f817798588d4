use fltk::{app, enums::Color};

use crate::app::domain::verdict::Severity;

/// Background tint for the verdict badge.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Negative => Color::from_rgb(220, 53, 69),
        Severity::Positive => Color::from_rgb(40, 167, 69),
        Severity::Neutral => Color::from_rgb(230, 162, 20),
    }
}

/// Text drawn on top of `severity_color`.
pub fn severity_label_color(severity: Severity) -> Color {
    match severity {
        Severity::Negative | Severity::Positive => Color::White,
        Severity::Neutral => Color::Black,
    }
}

/// Factor text tint. Palette entries only, so `@C` codes stay small
/// enough for a 32-bit `long`.
pub fn factor_text_color(severity: Severity) -> Color {
    match severity {
        Severity::Negative => Color::DarkRed,
        Severity::Positive => Color::DarkGreen,
        Severity::Neutral => Color::DarkYellow,
    }
}

pub fn error_text_color() -> Color {
    Color::from_rgb(176, 32, 48)
}

pub fn muted_text_color() -> Color {
    Color::from_rgb(100, 100, 100)
}

/// One-shot styling bootstrap. Nothing is rendered into the result area
/// until it has been opened.
pub struct StyleGate {
    ready: bool,
}

impl StyleGate {
    pub fn new() -> Self {
        Self { ready: false }
    }

    pub fn open(&mut self) {
        if self.ready {
            return;
        }
        app::set_scheme(app::Scheme::Gtk);
        app::background(245, 246, 248);
        app::set_visible_focus(false);
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

impl Default for StyleGate {
    fn default() -> Self {
        Self::new()
    }
}
