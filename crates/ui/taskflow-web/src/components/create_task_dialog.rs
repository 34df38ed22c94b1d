use std::rc::Rc;

use dominator::{Dom, events};
use futures_signals::map_ref;
use futures_signals::signal::SignalExt;
use taskflow_app::DashboardState;
use taskflow_core::TaskPriority;
use taskflow_core::form::{DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::styles;

pub fn render(dashboard: Rc<DashboardState>) -> Dom {
    html!("div", {
        .child_signal(dashboard.create_dialog_open.signal().map(clone!(dashboard => move |open| {
            open.then(|| dialog(dashboard.clone()))
        })))
    })
}

fn dialog(dashboard: Rc<DashboardState>) -> Dom {
    let form = dashboard.create_form.clone();
    let creating = dashboard.tasks.creating.clone();

    html!("div", {
        .class(&*styles::OVERLAY)
        .attr("role", "dialog")
        .attr("aria-modal", "true")
        .attr("aria-labelledby", "create-task-title")
        .child(html!("div", {
            .class(&*styles::MODAL)
            .child(html!("h2", {
                .attr("id", "create-task-title")
                .style("margin", "0 0 4px")
                .style("font-size", "18px")
                .text("Create New Task")
            }))
            .child(html!("p", {
                .class(&*styles::MUTED)
                .style("margin", "0 0 16px")
                .text("Add a new task to your list.")
            }))
            .child(field("task-title", "Title", html!("input" => HtmlInputElement, {
                .class(&*styles::INPUT)
                .attr("id", "task-title")
                .attr("type", "text")
                .attr("placeholder", "Enter task title")
                .attr("maxlength", &TITLE_MAX_LEN.to_string())
                .prop_signal("value", form.title.signal_cloned())
                .with_node!(input => {
                    .event(clone!(form => move |_: events::Input| {
                        form.title.set(input.value());
                    }))
                })
            })))
            .child(field("task-description", "Description", html!("textarea" => HtmlTextAreaElement, {
                .class(&*styles::INPUT)
                .attr("id", "task-description")
                .attr("rows", "3")
                .attr("placeholder", "Optional details")
                .attr("maxlength", &DESCRIPTION_MAX_LEN.to_string())
                .prop_signal("value", form.description.signal_cloned())
                .with_node!(textarea => {
                    .event(clone!(form => move |_: events::Input| {
                        form.description.set(textarea.value());
                    }))
                })
            })))
            .child(field("task-priority", "Priority", html!("select" => HtmlSelectElement, {
                .class(&*styles::INPUT)
                .attr("id", "task-priority")
                .children(TaskPriority::ALL.iter().map(|&priority| {
                    html!("option", {
                        .attr("value", priority.as_str())
                        .prop_signal("selected", form.priority.signal().map(move |current| current == priority))
                        .text(priority.display().label)
                    })
                }))
                .with_node!(select => {
                    .event(clone!(form => move |_: events::Change| {
                        if let Ok(priority) = select.value().parse::<TaskPriority>() {
                            form.priority.set(priority);
                        }
                    }))
                })
            })))
            .child_signal(form.error.signal_cloned().map(|error| {
                error.map(|error| {
                    html!("p", {
                        .class(&*styles::ERROR_TEXT)
                        .attr("role", "alert")
                        .text(&error.to_string())
                    })
                })
            }))
            .child(html!("div", {
                .class(&*styles::MODAL_ACTIONS)
                .child(html!("button", {
                    .class(&*styles::BUTTON_OUTLINE)
                    .attr("type", "button")
                    .prop_signal("disabled", creating.signal())
                    .text("Cancel")
                    .event(clone!(dashboard => move |_: events::Click| {
                        dashboard.close_create_dialog();
                    }))
                }))
                .child(html!("button", {
                    .class(&*styles::BUTTON)
                    .attr("type", "button")
                    .attr("data-action", "create-task")
                    .prop_signal("disabled", map_ref! {
                        let creating = creating.signal(),
                        let has_title = form.has_title_signal() =>
                        *creating || !*has_title
                    })
                    .text_signal(creating.signal().map(|creating| {
                        if creating { "Creating..." } else { "Create Task" }
                    }))
                    .event(clone!(dashboard => move |_: events::Click| {
                        spawn_local(clone!(dashboard => async move {
                            // Failures stay in the open dialog and the notices.
                            let _ = dashboard.submit_create().await;
                        }));
                    }))
                }))
            }))
        }))
    })
}

fn field(id: &str, label: &str, control: Dom) -> Dom {
    html!("div", {
        .class(&*styles::FIELD)
        .child(html!("label", {
            .class(&*styles::LABEL)
            .attr("for", id)
            .text(label)
        }))
        .child(control)
    })
}
