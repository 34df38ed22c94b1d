use dominator::Dom;
use taskflow_app::content::{self, Feature};
use taskflow_app::{App, Route};
use taskflow_core::{Accent, Icon};

use crate::components::icon;
use crate::styles;

pub fn render(app: &App) -> Dom {
    html!("div", {
        .attr("data-page", "index")
        .child(hero(app.config.docs_url.as_deref()))
        .child(features())
        .child(tech_stack())
        .child(html!("footer", {
            .style("border-top", "1px solid #e2e8f0")
            .style("padding", "32px 0")
            .style("text-align", "center")
            .child(html!("p", {
                .class(&*styles::MUTED)
                .text(content::FOOTER)
            }))
        }))
    })
}

fn hero(docs_url: Option<&str>) -> Dom {
    html!("section", {
        .style("background", "linear-gradient(135deg, #312e81 0%, #4f46e5 100%)")
        .style("color", "#ffffff")
        .style("padding", "96px 0")
        .style("text-align", "center")
        .child(html!("div", {
            .class(&*styles::CONTAINER)
            .style("max-width", "768px")
            .child(html!("div", {
                .style("font-size", "40px")
                .style("margin-bottom", "32px")
                .child(icon(Icon::Shield, None))
            }))
            .child(html!("h1", {
                .style("font-size", "48px")
                .style("margin", "0 0 24px")
                .text(content::PRODUCT_NAME)
            }))
            .child(html!("p", {
                .style("font-size", "18px")
                .style("opacity", "0.8")
                .style("margin", "0 0 32px")
                .text(content::HERO_TAGLINE)
            }))
            .child(html!("div", {
                .class(&*styles::ROW)
                .style("justify-content", "center")
                .child(link!(Route::Auth.url(), {
                    .class(&*styles::BUTTON)
                    .attr("data-action", "get-started")
                    .style("text-decoration", "none")
                    .text("Get Started ")
                    .child(icon(Icon::ArrowRight, None))
                }))
                .apply(|dom| match docs_url {
                    Some(url) => dom.child(html!("a", {
                        .class(&*styles::BUTTON_OUTLINE)
                        .style("color", "#ffffff")
                        .style("text-decoration", "none")
                        .attr("href", url)
                        .attr("target", "_blank")
                        .attr("rel", "noopener noreferrer")
                        .text("View Documentation")
                    })),
                    None => dom,
                })
            }))
        }))
    })
}

fn features() -> Dom {
    html!("section", {
        .class(&*styles::CONTAINER)
        .style("padding-top", "80px")
        .style("padding-bottom", "80px")
        .child(html!("div", {
            .style("text-align", "center")
            .style("margin-bottom", "48px")
            .child(html!("h2", {
                .style("font-size", "30px")
                .style("margin", "0 0 16px")
                .text(content::FEATURES_TITLE)
            }))
            .child(html!("p", {
                .class(&*styles::MUTED)
                .text(content::FEATURES_SUBTITLE)
            }))
        }))
        .child(html!("div", {
            .class(&*styles::GRID)
            .children(content::FEATURES.iter().map(feature_card))
        }))
    })
}

fn feature_card(feature: &Feature) -> Dom {
    html!("div", {
        .class(&*styles::CARD)
        .attr("data-feature", feature.title)
        .child(html!("div", {
            .style("display", "inline-flex")
            .style("padding", "12px")
            .style("border-radius", "8px")
            .style("margin-bottom", "16px")
            .style("background", styles::accent_background(Accent::Primary))
            .child(icon(feature.icon, Some(Accent::Primary)))
        }))
        .child(html!("h3", {
            .style("margin", "0 0 8px")
            .style("font-size", "18px")
            .text(feature.title)
        }))
        .child(html!("p", {
            .class(&*styles::MUTED)
            .style("margin", "0")
            .text(feature.description)
        }))
    })
}

fn tech_stack() -> Dom {
    html!("section", {
        .style("background", "rgba(241, 245, 249, 0.5)")
        .style("padding", "64px 0")
        .child(html!("div", {
            .class(&*styles::CONTAINER)
            .style("text-align", "center")
            .child(html!("h2", {
                .style("font-size", "24px")
                .style("margin", "0 0 8px")
                .text(content::TECH_TITLE)
            }))
            .child(html!("p", {
                .class(&*styles::MUTED)
                .style("margin", "0 0 32px")
                .text(content::TECH_SUBTITLE)
            }))
            .child(html!("div", {
                .class(&*styles::ROW)
                .style("flex-wrap", "wrap")
                .style("justify-content", "center")
                .children(content::TECH_STACK.iter().map(|tech| {
                    html!("span", {
                        .class(&*styles::BADGE)
                        .style("border", "1px solid #e2e8f0")
                        .style("background", "#ffffff")
                        .style("font-size", "14px")
                        .style("padding", "8px 16px")
                        .text(tech)
                    })
                }))
            }))
        }))
    })
}
