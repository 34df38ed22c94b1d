use std::rc::Rc;

use dominator::{Dom, routing};
use futures_signals::signal::{Signal, SignalExt};
use taskflow_app::{App, Route, RouteDecision};
use web_sys::Url;

use crate::components::{notices, page_spinner};
use crate::pages;
use crate::styles;

fn route_for_url(url: &str) -> Route {
    match Url::new(url) {
        Ok(url) => Route::from_path(&url.pathname()),
        Err(_) => Route::NotFound,
    }
}

fn current_route() -> impl Signal<Item = Route> {
    routing::url().signal_ref(|url| route_for_url(url)).dedupe()
}

/// Root of the UI: the routed page plus the toast stack.
pub fn render_app(app: Rc<App>) -> Dom {
    html!("div", {
        .class(&*styles::PAGE)
        .child_signal(current_route().map(clone!(app => move |route| {
            Some(render_route(&app, route))
        })))
        .child(notices::render(app.notices.clone(), app.config.notice_timeout_ms))
    })
}

fn render_route(app: &Rc<App>, route: Route) -> Dom {
    match route {
        Route::Index => guarded(app, route, clone!(app => move || pages::index::render(&app))),
        Route::Auth => guarded(app, route, clone!(app => move || pages::auth::render(app.clone()))),
        Route::Dashboard => pages::dashboard::render(app.clone()),
        Route::NotFound => pages::not_found::render(),
    }
}

/// Renders a page once the auth guard lets it through.
fn guarded<F>(app: &App, route: Route, render: F) -> Dom
where
    F: Fn() -> Dom + 'static,
{
    html!("div", {
        .child_signal(app.auth.state_signal()
            .map(move |state| route.guard(&state))
            .dedupe()
            .map(move |decision| Some(match decision {
                RouteDecision::Loading => page_spinner(),
                RouteDecision::Redirect(target) => redirect(target),
                RouteDecision::Render => render(),
            })))
    })
}

/// Navigates to `target` as soon as it is mounted and renders nothing.
pub fn redirect(target: Route) -> Dom {
    html!("div", {
        .attr("data-redirect", target.url())
        .after_inserted(move |_| {
            routing::go_to_url(target.url());
        })
    })
}
