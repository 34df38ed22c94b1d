use std::rc::Rc;

use dominator::{Dom, events};
use futures_signals::signal::{Mutable, SignalExt};
use taskflow_app::App;
use taskflow_auth_core::Credentials;
use taskflow_core::{Accent, Icon};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::components::icon;
use crate::styles;

#[derive(Default)]
struct SignInForm {
    email: Mutable<String>,
    password: Mutable<String>,
}

impl SignInForm {
    fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.get_cloned().trim().to_string(),
            password: self.password.get_cloned(),
        }
    }
}

pub fn render(app: Rc<App>) -> Dom {
    let form = Rc::new(SignInForm::default());
    let auth = app.auth.clone();

    html!("div", {
        .class(&*styles::CENTERED)
        .attr("data-page", "auth")
        .child(html!("div", {
            .class(&*styles::CARD)
            .style("width", "100%")
            .style("max-width", "400px")
            .child(html!("div", {
                .style("text-align", "center")
                .style("margin-bottom", "24px")
                .child(html!("div", {
                    .style("font-size", "32px")
                    .child(icon(Icon::Shield, Some(Accent::Primary)))
                }))
                .child(html!("h1", {
                    .style("font-size", "24px")
                    .style("margin", "8px 0 4px")
                    .text("Welcome to TaskFlow")
                }))
                .child(html!("p", {
                    .class(&*styles::MUTED)
                    .style("margin", "0")
                    .text("Sign in to manage your tasks")
                }))
            }))
            .child(html!("div", {
                .child(input_field("sign-in-email", "Email", "email", "you@example.com", form.email.clone()))
                .child(input_field("sign-in-password", "Password", "password", "", form.password.clone()))
                .child_signal(auth.sign_in_error.signal_cloned().map(|error| {
                    error.map(|error| {
                        html!("p", {
                            .class(&*styles::ERROR_TEXT)
                            .attr("role", "alert")
                            .style("margin-bottom", "12px")
                            .text(&error)
                        })
                    })
                }))
                .child(html!("button", {
                    .class(&*styles::BUTTON)
                    .style("width", "100%")
                    .style("justify-content", "center")
                    .attr("type", "button")
                    .attr("data-action", "sign-in")
                    .prop_signal("disabled", auth.signing_in.signal())
                    .text_signal(auth.signing_in.signal().map(|signing_in| {
                        if signing_in { "Signing in..." } else { "Sign In" }
                    }))
                    .event(clone!(auth, form => move |_: events::Click| {
                        let credentials = form.credentials();
                        spawn_local(clone!(auth => async move {
                            // Failures are shown under the form.
                            let _ = auth.sign_in(credentials).await;
                        }));
                    }))
                }))
            }))
        }))
    })
}

fn input_field(
    id: &str,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: Mutable<String>,
) -> Dom {
    html!("div", {
        .class(&*styles::FIELD)
        .child(html!("label", {
            .class(&*styles::LABEL)
            .attr("for", id)
            .text(label)
        }))
        .child(html!("input" => HtmlInputElement, {
            .class(&*styles::INPUT)
            .attr("id", id)
            .attr("type", input_type)
            .attr("placeholder", placeholder)
            .attr("required", "")
            .prop_signal("value", value.signal_cloned())
            .with_node!(input => {
                .event(move |_: events::Input| {
                    value.set(input.value());
                })
            })
        }))
    })
}
