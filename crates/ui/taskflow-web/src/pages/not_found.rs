use dominator::Dom;
use taskflow_app::Route;

use crate::styles;

pub fn render() -> Dom {
    html!("div", {
        .class(&*styles::CENTERED)
        .attr("data-page", "not-found")
        .child(html!("div", {
            .style("text-align", "center")
            .child(html!("h1", {
                .style("font-size", "48px")
                .style("margin", "0 0 8px")
                .text("404")
            }))
            .child(html!("p", {
                .class(&*styles::MUTED)
                .text("Oops! Page not found")
            }))
            .child(link!(Route::Index.url(), {
                .class(&*styles::BUTTON)
                .style("text-decoration", "none")
                .text("Return to Home")
            }))
        }))
    })
}
