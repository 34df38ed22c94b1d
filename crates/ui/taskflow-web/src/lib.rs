#[macro_use]
extern crate dominator;

mod components;
mod pages;
mod router;
mod styles;

use std::rc::Rc;

use dominator::{Dom, DomHandle};
use taskflow_app::{App, AppConfig, TaskApiFactory};
use taskflow_auth_core::Session;
use taskflow_core::TaskApi;
use taskflow_rest_client::{AuthServiceClientBuilder, TaskServiceClientBuilder};
use tracing::{error, info, warn};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

pub use router::render_app;

/// Id of the element the app is mounted into.
pub const MOUNT_ID: &str = "taskflow";

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let Some(root) = mount_point() else {
        warn!(id = MOUNT_ID, "No mount element on the page, not starting");
        return;
    };

    match build_app() {
        Ok(app) => {
            info!(api = %app.config.api_base_url, "TaskFlow starting");
            start(app, &root);
        }
        Err(message) => {
            error!(%message, "TaskFlow failed to start");
            dominator::append_dom(&root, startup_error(message));
        }
    }
}

/// Resolves the session and mounts the UI under `root`.
pub fn start(app: Rc<App>, root: &Element) -> DomHandle {
    styles::install_global_styles();

    let auth = app.auth.clone();
    wasm_bindgen_futures::spawn_local(async move {
        auth.initialize().await;
    });

    dominator::append_dom(root, render_app(app))
}

fn mount_point() -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(MOUNT_ID)
}

fn build_app() -> Result<Rc<App>, String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;

    let auth_api = AuthServiceClientBuilder::new(&config.auth_base_url)
        .with_timeout(config.request_timeout())
        .build()
        .map_err(|e| e.to_string())?;

    let task_client = TaskServiceClientBuilder::new(&config.api_base_url)
        .base_path(&config.api_base_path)
        .with_timeout(config.request_timeout())
        .build()
        .map_err(|e| e.to_string())?;

    let task_api: TaskApiFactory = Box::new(move |session: &Session| {
        let mut client = task_client.clone();
        client.set_bearer_token(Some(&session.token));
        Rc::new(client) as Rc<dyn TaskApi>
    });

    Ok(App::new(config, Rc::new(auth_api), task_api))
}

fn startup_error(message: String) -> Dom {
    html!("div", {
        .class(&*styles::CENTERED)
        .child(html!("p", {
            .class(&*styles::ERROR_TEXT)
            .text(&message)
        }))
    })
}
