use std::rc::Rc;

use dominator::{Dom, events};
use futures_signals::signal::SignalExt;
use taskflow_app::{TaskCardState, TaskIntents};
use taskflow_core::{Accent, Icon, Task, TaskStatus};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;

use crate::components::{badge, icon};
use crate::styles;

pub fn render(state: Rc<TaskCardState>, intents: Rc<dyn TaskIntents>) -> Dom {
    let task = &state.entry.task;

    html!("article", {
        .class(&*styles::CARD)
        .attr("data-task-id", &state.entry.id)
        .child(html!("div", {
            .class(&*styles::SPREAD)
            .style("align-items", "flex-start")
            .child(html!("div", {
                .style("flex", "1")
                .style("min-width", "0")
                .child(html!("div", {
                    .class(&*styles::ROW)
                    .style("margin-bottom", "4px")
                    .child(html!("h3", {
                        .style("margin", "0")
                        .style("font-size", "16px")
                        .style("font-weight", "500")
                        .text_signal(task.signal_ref(|task| task.title.clone()))
                    }))
                    .child_signal(task.signal_ref(|task| task.priority).dedupe().map(|priority| {
                        let display = priority.display();
                        Some(badge(display.label, display.accent))
                    }))
                }))
                .child_signal(task.signal_ref(|task| task.description.clone()).map(|description| {
                    description.map(|description| {
                        html!("p", {
                            .class(&*styles::MUTED)
                            .style("margin", "0 0 8px")
                            .text(&description)
                        })
                    })
                }))
                .child(html!("div", {
                    .class(&*styles::ROW)
                    .child(html!("span", {
                        .class(&*styles::MUTED)
                        .style("font-size", "12px")
                        .text_signal(task.signal_ref(Task::created_label))
                    }))
                    .child_signal(state.access_signal().map(|access| {
                        access
                            .show_admin_badge
                            .then(|| badge("Admin View", Accent::Primary))
                    }))
                }))
            }))
            .child(html!("div", {
                .class(&*styles::ROW)
                .child(status_select(state.clone(), intents.clone()))
                .child_signal(state.access_signal().map(clone!(state => move |access| {
                    access.delete_visible().then(|| delete_button(state.clone()))
                })))
            }))
        }))
        .child_signal(state.confirm_open.signal().map(clone!(state, intents => move |open| {
            open.then(|| confirm_dialog(state.clone(), intents.clone()))
        })))
    })
}

fn status_select(state: Rc<TaskCardState>, intents: Rc<dyn TaskIntents>) -> Dom {
    html!("select" => HtmlSelectElement, {
        .class(&*styles::INPUT)
        .style("width", "150px")
        .attr("aria-label", "Task status")
        .prop_signal("disabled", state.access_signal().map(|access| !access.status_control_enabled()))
        .children(TaskStatus::ALL.iter().map(|&status| {
            let display = status.display();
            html!("option", {
                .attr("value", status.as_str())
                .prop_signal("selected", state.entry.task.signal_ref(move |task| task.status == status))
                .text(&format!("{} {}", styles::icon_glyph(display.icon), display.label))
            })
        }))
        .with_node!(select => {
            .event(clone!(state, intents => move |_: events::Change| {
                let Ok(status) = select.value().parse::<TaskStatus>() else {
                    return;
                };
                spawn_local(clone!(state, intents, select => async move {
                    state.change_status(&*intents, status).await;
                    // Show the stored status again if the update was refused.
                    select.set_value(state.entry.task.lock_ref().status.as_str());
                }));
            }))
        })
    })
}

fn delete_button(state: Rc<TaskCardState>) -> Dom {
    html!("button", {
        .class(&*styles::BUTTON_GHOST)
        .attr("type", "button")
        .attr("aria-label", "Delete task")
        .attr("data-action", "delete")
        .child(icon(Icon::Trash, None))
        .event(clone!(state => move |_: events::Click| {
            state.request_delete();
        }))
    })
}

fn confirm_dialog(state: Rc<TaskCardState>, intents: Rc<dyn TaskIntents>) -> Dom {
    html!("div", {
        .class(&*styles::OVERLAY)
        .attr("role", "alertdialog")
        .attr("aria-modal", "true")
        .child(html!("div", {
            .class(&*styles::MODAL)
            .child(html!("h2", {
                .style("margin", "0 0 8px")
                .style("font-size", "18px")
                .text("Delete Task")
            }))
            .child(html!("p", {
                .class(&*styles::MUTED)
                .text_signal(state.entry.task.signal_ref(|task| {
                    format!(
                        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                        task.title
                    )
                }))
            }))
            .child(html!("div", {
                .class(&*styles::MODAL_ACTIONS)
                .child(html!("button", {
                    .class(&*styles::BUTTON_OUTLINE)
                    .attr("type", "button")
                    .attr("data-action", "cancel-delete")
                    .prop_signal("disabled", state.deleting.signal())
                    .text("Cancel")
                    .event(clone!(state => move |_: events::Click| {
                        state.cancel_delete();
                    }))
                }))
                .child(html!("button", {
                    .class(&*styles::BUTTON)
                    .class(&*styles::BUTTON_DANGER)
                    .attr("type", "button")
                    .attr("data-action", "confirm-delete")
                    .prop_signal("disabled", state.deleting.signal())
                    .text_signal(state.deleting.signal().map(|deleting| {
                        if deleting { "Deleting..." } else { "Delete" }
                    }))
                    .event(clone!(state, intents => move |_: events::Click| {
                        spawn_local(clone!(state, intents => async move {
                            // Failures are reported through the notices.
                            let _ = state.confirm_delete(&*intents).await;
                        }));
                    }))
                }))
            }))
        }))
    })
}
