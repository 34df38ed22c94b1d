use dominator::Dom;
use futures_signals::signal::{Signal, SignalExt};
use taskflow_core::{Accent, Icon, TaskStats};

use crate::components::icon;
use crate::styles;

struct Tile {
    label: &'static str,
    icon: Icon,
    accent: Accent,
    value: fn(&TaskStats) -> usize,
}

const TILES: [Tile; 4] = [
    Tile {
        label: "Total Tasks",
        icon: Icon::ListTodo,
        accent: Accent::Primary,
        value: |stats| stats.total,
    },
    Tile {
        label: "Pending",
        icon: Icon::Clock,
        accent: Accent::Warning,
        value: |stats| stats.pending,
    },
    Tile {
        label: "In Progress",
        icon: Icon::AlertCircle,
        accent: Accent::Info,
        value: |stats| stats.in_progress,
    },
    Tile {
        label: "Completed",
        icon: Icon::CheckCircle,
        accent: Accent::Success,
        value: |stats| stats.completed,
    },
];

pub fn render<S>(stats: S) -> Dom
where
    S: Signal<Item = TaskStats> + 'static,
{
    let stats = stats.broadcast();

    html!("section", {
        .attr("aria-label", "Task statistics")
        .child(html!("div", {
            .class(&*styles::GRID)
            .children(TILES.iter().map(|tile| {
                let value = tile.value;
                html!("div", {
                    .class(&*styles::CARD)
                    .attr("data-stat", tile.label)
                    .child(html!("div", {
                        .class(&*styles::ROW)
                        .child(html!("div", {
                            .style("padding", "8px")
                            .style("border-radius", "8px")
                            .style("background", styles::accent_background(tile.accent))
                            .child(icon(tile.icon, Some(tile.accent)))
                        }))
                        .child(html!("div", {
                            .child(html!("p", {
                                .style("margin", "0")
                                .style("font-size", "24px")
                                .style("font-weight", "700")
                                .text_signal(stats.signal().map(move |stats| value(&stats).to_string()))
                            }))
                            .child(html!("p", {
                                .class(&*styles::MUTED)
                                .style("margin", "0")
                                .text(tile.label)
                            }))
                        }))
                    }))
                })
            }))
        }))
        .child_signal(stats.signal().map(|stats| {
            (stats.high_priority_open > 0).then(|| {
                html!("p", {
                    .class(&*styles::MUTED)
                    .attr("data-stat", "high-priority-open")
                    .style("margin", "12px 0 0")
                    .child(icon(Icon::AlertCircle, Some(Accent::Destructive)))
                    .text(&format!(" {} high priority open", stats.high_priority_open))
                })
            })
        }))
    })
}
