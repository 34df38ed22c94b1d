use std::rc::Rc;

use dominator::{Dom, events};
use futures_signals::signal::SignalExt;
use taskflow_app::{AccountMenu, DashboardState, HeaderView};
use taskflow_core::{Accent, Icon};
use wasm_bindgen_futures::spawn_local;

use crate::components::{badge, icon};
use crate::styles;

pub fn render(dashboard: Rc<DashboardState>) -> Dom {
    let view = Rc::new(HeaderView::for_session(&dashboard.session));
    let menu = Rc::new(AccountMenu::default());

    html!("header", {
        .style("position", "sticky")
        .style("top", "0")
        .style("z-index", "30")
        .style("background", "rgba(255, 255, 255, 0.8)")
        .style("border-bottom", "1px solid #e2e8f0")
        .child(html!("div", {
            .class(&*styles::CONTAINER)
            .class(&*styles::SPREAD)
            .style("height", "64px")
            .child(brand())
            .child(html!("div", {
                .class(&*styles::ROW)
                .child(html!("button", {
                    .class(&*styles::BUTTON)
                    .attr("type", "button")
                    .attr("data-action", "new-task")
                    .child(icon(Icon::Plus, None))
                    .text("New Task")
                    .event(clone!(dashboard => move |_: events::Click| {
                        dashboard.open_create_dialog();
                    }))
                }))
                .child(account(dashboard, view, menu))
            }))
        }))
    })
}

fn brand() -> Dom {
    html!("div", {
        .class(&*styles::ROW)
        .child(html!("div", {
            .style("padding", "8px")
            .style("border-radius", "12px")
            .style("background", styles::accent_background(Accent::Primary))
            .child(icon(Icon::Shield, Some(Accent::Primary)))
        }))
        .child(html!("div", {
            .child(html!("h1", {
                .style("margin", "0")
                .style("font-size", "16px")
                .text("TaskFlow")
            }))
            .child(html!("p", {
                .class(&*styles::MUTED)
                .style("margin", "0")
                .style("font-size", "12px")
                .text("RBAC System")
            }))
        }))
    })
}

fn role_accent(view: &HeaderView) -> Accent {
    if view.is_admin { Accent::Primary } else { Accent::Muted }
}

fn account(dashboard: Rc<DashboardState>, view: Rc<HeaderView>, menu: Rc<AccountMenu>) -> Dom {
    html!("div", {
        .style("position", "relative")
        .child(html!("button", {
            .class(&*styles::BUTTON_OUTLINE)
            .style("border", "none")
            .attr("type", "button")
            .attr("aria-haspopup", "menu")
            .attr("data-action", "account-menu")
            .attr_signal("aria-expanded", menu.open.signal().map(|open| if open { "true" } else { "false" }))
            .child(icon(Icon::User, Some(Accent::Primary)))
            .child(html!("div", {
                .style("text-align", "left")
                .child(html!("p", {
                    .attr("data-role", "display-name")
                    .style("margin", "0")
                    .style("font-weight", "500")
                    .text(&view.display_name)
                }))
                .child(badge(view.role_label, role_accent(&view)))
            }))
            .child(icon(Icon::ChevronDown, Some(Accent::Muted)))
            .event(clone!(menu => move |_: events::Click| {
                menu.toggle();
            }))
        }))
        .child_signal(menu.open.signal().map(clone!(dashboard, view, menu => move |open| {
            open.then(|| account_menu(dashboard.clone(), &view, menu.clone()))
        })))
    })
}

fn account_menu(dashboard: Rc<DashboardState>, view: &HeaderView, menu: Rc<AccountMenu>) -> Dom {
    html!("div", {
        .class(&*styles::DROPDOWN)
        .attr("role", "menu")
        .child(html!("div", {
            .style("padding", "4px 8px 8px")
            .style("border-bottom", "1px solid #e2e8f0")
            .child(html!("p", {
                .style("margin", "0")
                .style("font-weight", "500")
                .text(&view.email)
            }))
            .child(html!("p", {
                .class(&*styles::MUTED)
                .style("margin", "0")
                .style("font-size", "12px")
                .text(&format!("Role: {}", view.role_label))
            }))
        }))
        .child(html!("button", {
            .class(&*styles::BUTTON_GHOST)
            .style("width", "100%")
            .style("text-align", "left")
            .style("color", styles::accent_color(Accent::Destructive))
            .attr("type", "button")
            .attr("role", "menuitem")
            .attr("data-action", "sign-out")
            .child(icon(Icon::LogOut, None))
            .text(" Sign Out")
            .event(clone!(dashboard, menu => move |_: events::Click| {
                menu.close();
                spawn_local(clone!(dashboard => async move {
                    dashboard.sign_out().await;
                }));
            }))
        }))
    })
}
