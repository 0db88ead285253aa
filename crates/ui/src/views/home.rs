use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{HomeVm, map_home};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let vm = map_home(ctx.question_count());
    let can_start = vm.question_count > 0;

    rsx! {
        div { class: "page home fade-in",
            HomeCard { vm: vm.clone() }
            button {
                class: "btn btn--primary",
                id: "home-start",
                r#type: "button",
                disabled: !can_start,
                onclick: move |_| {
                    let _ = navigator.push(Route::Quiz {});
                },
                "{vm.start_label}"
            }
            p { class: "home__footer", "{vm.footer}" }
        }
    }
}

#[component]
fn HomeCard(vm: HomeVm) -> Element {
    rsx! {
        header { class: "home__header",
            h1 { class: "home__title", "{vm.title}" }
            p { class: "home__subtitle", "{vm.subtitle}" }
        }
        div { class: "home__count",
            span { class: "home__count-value", "{vm.question_count}" }
            span { class: "home__count-label", "{vm.question_label}" }
        }
        ul { class: "home__features",
            for feature in vm.features.iter() {
                li { class: "home__feature", "{feature}" }
            }
        }
    }
}
