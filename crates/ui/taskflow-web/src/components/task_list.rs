use std::rc::Rc;

use dominator::Dom;
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;
use taskflow_app::{TaskCardState, TaskIntents, TaskListView, TaskStore, Viewer};
use taskflow_core::{Accent, Icon};

use crate::components::{icon, spinner, task_card};
use crate::styles;

pub fn render(store: Rc<TaskStore>, viewer: Viewer, intents: Rc<dyn TaskIntents>) -> Dom {
    html!("section", {
        .class(&*styles::CARD)
        .attr("aria-label", "Tasks")
        .child_signal(store.list_view_signal().map(clone!(store => move |view| {
            Some(match view {
                TaskListView::Loading => loading(),
                TaskListView::Empty => html!("div", {
                    .child(title(&store))
                    .child(empty())
                }),
                TaskListView::Tasks => html!("div", {
                    .child(title(&store))
                    .child(cards(&store, &viewer, &intents))
                }),
            })
        })))
    })
}

fn loading() -> Dom {
    html!("div", {
        .attr("data-state", "loading")
        .style("display", "flex")
        .style("justify-content", "center")
        .style("padding", "48px 0")
        .child(spinner())
    })
}

fn title(store: &TaskStore) -> Dom {
    html!("h2", {
        .class(&*styles::ROW)
        .style("margin", "0 0 16px")
        .style("font-size", "18px")
        .child(icon(Icon::ListTodo, Some(Accent::Primary)))
        .text("Tasks")
        .child(html!("span", {
            .class(&*styles::MUTED)
            .attr("data-role", "task-count")
            .style("font-weight", "400")
            .text_signal(store.count_signal().map(|count| format!("({count})")))
        }))
    })
}

fn empty() -> Dom {
    html!("div", {
        .attr("data-state", "empty")
        .style("text-align", "center")
        .style("padding", "48px 0")
        .child(html!("div", {
            .style("font-size", "32px")
            .child(icon(Icon::ListTodo, Some(Accent::Muted)))
        }))
        .child(html!("h3", {
            .style("margin", "12px 0 4px")
            .text("No tasks yet")
        }))
        .child(html!("p", {
            .class(&*styles::MUTED)
            .style("margin", "0")
            .text("Create your first task to get started")
        }))
    })
}

/// One card per entry. Entries keep their identity across refetches, so the
/// card state created here survives them too.
fn cards(store: &TaskStore, viewer: &Viewer, intents: &Rc<dyn TaskIntents>) -> Dom {
    html!("div", {
        .attr("data-state", "tasks")
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("gap", "12px")
        .children_signal_vec(store.entries_signal_vec().map(clone!(viewer, intents => move |entry| {
            task_card::render(TaskCardState::new(entry, viewer.clone()), intents.clone())
        })))
    })
}
