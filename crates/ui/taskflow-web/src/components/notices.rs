use std::rc::Rc;

use dominator::{Dom, events};
use futures_signals::signal_vec::SignalVecExt;
use gloo_timers::future::TimeoutFuture;
use taskflow_app::{Notice, NoticeKind, Notices};
use taskflow_core::Accent;

use crate::styles;

/// Toast stack. Each toast removes itself after `timeout_ms` or on click.
pub fn render(notices: Rc<Notices>, timeout_ms: u32) -> Dom {
    html!("div", {
        .class(&*styles::TOASTS)
        .attr("aria-live", "polite")
        .children_signal_vec(notices.signal_vec().map(clone!(notices => move |notice| {
            toast(notices.clone(), notice, timeout_ms)
        })))
    })
}

fn toast(notices: Rc<Notices>, notice: Rc<Notice>, timeout_ms: u32) -> Dom {
    let accent = match notice.kind {
        NoticeKind::Success => Accent::Success,
        NoticeKind::Error => Accent::Destructive,
    };
    let id = notice.id;

    html!("div", {
        .class(&*styles::TOAST)
        .attr("role", if notice.kind == NoticeKind::Error { "alert" } else { "status" })
        .style("border-left", &format!("4px solid {}", styles::accent_color(accent)))
        .child(html!("p", {
            .style("margin", "0")
            .style("font-weight", "600")
            .text(&notice.title)
        }))
        .apply(|dom| match &notice.detail {
            Some(detail) => dom.child(html!("p", {
                .class(&*styles::MUTED)
                .style("margin", "4px 0 0")
                .text(detail)
            })),
            None => dom,
        })
        .event(clone!(notices => move |_: events::Click| {
            notices.dismiss(id);
        }))
        .future(async move {
            TimeoutFuture::new(timeout_ms).await;
            notices.dismiss(id);
        })
    })
}
