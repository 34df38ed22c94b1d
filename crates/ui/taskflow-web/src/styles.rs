//! Shared classes and the accent palette.

use once_cell::sync::Lazy;
use taskflow_core::{Accent, Icon};

const FONT_STACK: &str = "Inter, system-ui, -apple-system, sans-serif";
const BORDER: &str = "1px solid #e2e8f0";

pub fn install_global_styles() {
    stylesheet!("body", {
        .style("margin", "0")
        .style("font-family", FONT_STACK)
        .style("background", "#f8fafc")
        .style("color", "#0f172a")
    });

    stylesheet!("*", {
        .style("box-sizing", "border-box")
    });
}

pub fn accent_color(accent: Accent) -> &'static str {
    match accent {
        Accent::Primary => "#6366f1",
        Accent::Warning => "#d97706",
        Accent::Info => "#2563eb",
        Accent::Success => "#16a34a",
        Accent::Muted => "#64748b",
        Accent::Destructive => "#dc2626",
    }
}

pub fn accent_background(accent: Accent) -> &'static str {
    match accent {
        Accent::Primary => "rgba(99, 102, 241, 0.1)",
        Accent::Warning => "rgba(217, 119, 6, 0.1)",
        Accent::Info => "rgba(37, 99, 235, 0.1)",
        Accent::Success => "rgba(22, 163, 74, 0.1)",
        Accent::Muted => "rgba(100, 116, 139, 0.1)",
        Accent::Destructive => "rgba(220, 38, 38, 0.1)",
    }
}

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Clock => "\u{23F1}",
        Icon::AlertCircle => "\u{26A0}",
        Icon::CheckCircle => "\u{2714}",
        Icon::ListTodo => "\u{2630}",
        Icon::Shield => "\u{1F6E1}",
        Icon::Lock => "\u{1F512}",
        Icon::Users => "\u{1F465}",
        Icon::Database => "\u{1F5C4}",
        Icon::Plus => "+",
        Icon::LogOut => "\u{21AA}",
        Icon::User => "\u{1F464}",
        Icon::ChevronDown => "\u{25BE}",
        Icon::Trash => "\u{1F5D1}",
        Icon::ArrowRight => "\u{2192}",
        Icon::Spinner => "\u{21BB}",
    }
}

pub static PAGE: Lazy<String> = Lazy::new(|| {
    class! {
        .style("min-height", "100vh")
    }
});

pub static CONTAINER: Lazy<String> = Lazy::new(|| {
    class! {
        .style("max-width", "1200px")
        .style("margin", "0 auto")
        .style("padding", "0 24px")
    }
});

pub static CENTERED: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("min-height", "100vh")
        .style("align-items", "center")
        .style("justify-content", "center")
    }
});

pub static SPINNER: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "inline-block")
        .style("font-size", "32px")
        .style("color", accent_color(Accent::Primary))
    }
});

pub static CARD: Lazy<String> = Lazy::new(|| {
    class! {
        .style("background", "#ffffff")
        .style("border", BORDER)
        .style("border-radius", "12px")
        .style("padding", "20px")
    }
});

pub static ROW: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("align-items", "center")
        .style("gap", "12px")
    }
});

pub static SPREAD: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("align-items", "center")
        .style("justify-content", "space-between")
        .style("gap", "12px")
    }
});

pub static GRID: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "grid")
        .style("grid-template-columns", "repeat(auto-fit, minmax(220px, 1fr))")
        .style("gap", "16px")
    }
});

pub static BADGE: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "inline-flex")
        .style("align-items", "center")
        .style("gap", "4px")
        .style("padding", "2px 10px")
        .style("border-radius", "9999px")
        .style("font-size", "12px")
        .style("font-weight", "500")
    }
});

pub static BUTTON: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "inline-flex")
        .style("align-items", "center")
        .style("gap", "8px")
        .style("padding", "8px 16px")
        .style("border", "none")
        .style("border-radius", "8px")
        .style("background", accent_color(Accent::Primary))
        .style("color", "#ffffff")
        .style("font-size", "14px")
        .style("cursor", "pointer")
    }
});

pub static BUTTON_OUTLINE: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "inline-flex")
        .style("align-items", "center")
        .style("gap", "8px")
        .style("padding", "8px 16px")
        .style("border", BORDER)
        .style("border-radius", "8px")
        .style("background", "transparent")
        .style("color", "inherit")
        .style("font-size", "14px")
        .style("cursor", "pointer")
    }
});

pub static BUTTON_DANGER: Lazy<String> = Lazy::new(|| {
    class! {
        .style("background", accent_color(Accent::Destructive))
    }
});

pub static BUTTON_GHOST: Lazy<String> = Lazy::new(|| {
    class! {
        .style("padding", "6px")
        .style("border", "none")
        .style("background", "transparent")
        .style("color", accent_color(Accent::Muted))
        .style("cursor", "pointer")
    }
});

pub static INPUT: Lazy<String> = Lazy::new(|| {
    class! {
        .style("width", "100%")
        .style("padding", "8px 12px")
        .style("border", BORDER)
        .style("border-radius", "8px")
        .style("font-size", "14px")
        .style("font-family", "inherit")
    }
});

pub static LABEL: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "block")
        .style("margin-bottom", "6px")
        .style("font-size", "14px")
        .style("font-weight", "500")
    }
});

pub static FIELD: Lazy<String> = Lazy::new(|| {
    class! {
        .style("margin-bottom", "16px")
    }
});

pub static MUTED: Lazy<String> = Lazy::new(|| {
    class! {
        .style("color", accent_color(Accent::Muted))
        .style("font-size", "14px")
    }
});

pub static ERROR_TEXT: Lazy<String> = Lazy::new(|| {
    class! {
        .style("color", accent_color(Accent::Destructive))
        .style("font-size", "13px")
        .style("margin", "4px 0 0")
    }
});

pub static OVERLAY: Lazy<String> = Lazy::new(|| {
    class! {
        .style("position", "fixed")
        .style("inset", "0")
        .style("display", "flex")
        .style("align-items", "center")
        .style("justify-content", "center")
        .style("background", "rgba(15, 23, 42, 0.5)")
        .style("z-index", "50")
    }
});

pub static MODAL: Lazy<String> = Lazy::new(|| {
    class! {
        .style("width", "100%")
        .style("max-width", "480px")
        .style("background", "#ffffff")
        .style("border-radius", "12px")
        .style("padding", "24px")
    }
});

pub static MODAL_ACTIONS: Lazy<String> = Lazy::new(|| {
    class! {
        .style("display", "flex")
        .style("justify-content", "flex-end")
        .style("gap", "8px")
        .style("margin-top", "20px")
    }
});

pub static DROPDOWN: Lazy<String> = Lazy::new(|| {
    class! {
        .style("position", "absolute")
        .style("right", "0")
        .style("top", "calc(100% + 4px)")
        .style("min-width", "220px")
        .style("background", "#ffffff")
        .style("border", BORDER)
        .style("border-radius", "8px")
        .style("padding", "8px")
        .style("z-index", "40")
    }
});

pub static TOASTS: Lazy<String> = Lazy::new(|| {
    class! {
        .style("position", "fixed")
        .style("right", "16px")
        .style("bottom", "16px")
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("gap", "8px")
        .style("z-index", "60")
    }
});

pub static TOAST: Lazy<String> = Lazy::new(|| {
    class! {
        .style("min-width", "280px")
        .style("max-width", "380px")
        .style("background", "#ffffff")
        .style("border", BORDER)
        .style("border-radius", "8px")
        .style("padding", "12px 16px")
        .style("cursor", "pointer")
    }
});
