pub mod create_task_dialog;
pub mod dashboard_header;
pub mod notices;
pub mod task_card;
pub mod task_list;
pub mod task_stats;

use dominator::Dom;
use taskflow_core::{Accent, Icon};

use crate::styles;

pub fn icon(icon: Icon, accent: Option<Accent>) -> Dom {
    html!("span", {
        .attr("aria-hidden", "true")
        .apply(|dom| match accent {
            Some(accent) => dom.style("color", styles::accent_color(accent)),
            None => dom,
        })
        .text(styles::icon_glyph(icon))
    })
}

pub fn spinner() -> Dom {
    html!("span", {
        .class(&*styles::SPINNER)
        .attr("role", "status")
        .attr("aria-label", "Loading")
        .text(styles::icon_glyph(Icon::Spinner))
    })
}

/// Full-page spinner shown while auth resolves.
pub fn page_spinner() -> Dom {
    html!("div", {
        .class(&*styles::CENTERED)
        .child(spinner())
    })
}

pub fn badge(text: &str, accent: Accent) -> Dom {
    html!("span", {
        .class(&*styles::BADGE)
        .style("color", styles::accent_color(accent))
        .style("background", styles::accent_background(accent))
        .text(text)
    })
}
