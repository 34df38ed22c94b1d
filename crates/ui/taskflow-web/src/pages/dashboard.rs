use std::rc::Rc;

use dominator::Dom;
use futures_signals::signal::SignalExt;
use taskflow_app::{App, DashboardPhase, DashboardState, Route, TaskIntents};

use crate::components::{
    create_task_dialog, dashboard_header, page_spinner, task_list, task_stats,
};
use crate::router::redirect;
use crate::styles;

pub fn render(app: Rc<App>) -> Dom {
    html!("div", {
        .child_signal(app.auth.state_signal()
            .map(|state| DashboardPhase::from(&state))
            .dedupe_cloned()
            .map(clone!(app => move |phase| Some(match phase {
                DashboardPhase::AuthLoading => page_spinner(),
                DashboardPhase::Unauthenticated => redirect(Route::Auth),
                DashboardPhase::Authenticated(session) => authenticated(app.dashboard_for(&session)),
            }))))
    })
}

fn authenticated(dashboard: Rc<DashboardState>) -> Dom {
    let intents: Rc<dyn TaskIntents> = dashboard.clone();

    html!("div", {
        .attr("data-page", "dashboard")
        .future(clone!(dashboard => async move {
            dashboard.load().await;
        }))
        .child(dashboard_header::render(dashboard.clone()))
        .child(html!("main", {
            .class(&*styles::CONTAINER)
            .style("padding-top", "32px")
            .style("padding-bottom", "32px")
            .child(task_stats::render(dashboard.tasks.stats_signal()))
            .child(html!("div", {
                .style("margin-top", "32px")
                .child(task_list::render(dashboard.tasks.clone(), dashboard.viewer(), intents))
            }))
        }))
        .child(create_task_dialog::render(dashboard))
    })
}
