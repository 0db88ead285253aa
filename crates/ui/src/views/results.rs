use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::vm::{ResultsVm, map_results};

#[component]
pub fn ResultsView(correct: usize, total: usize) -> Element {
    let navigator = use_navigator();
    let vm = map_results(correct, total);

    rsx! {
        div { class: "page results fade-in",
            match vm {
                Ok(vm) => rsx! { ScoreCard { vm } },
                Err(err) => rsx! {
                    p { class: "results__error", "{err.message()}" }
                },
            }
            div { class: "results__actions",
                button {
                    class: "btn btn--primary",
                    id: "results-retry",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.replace(Route::Quiz {});
                    },
                    "Try Again"
                }
                button {
                    class: "btn btn--secondary",
                    id: "results-home",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "Back to Home"
                }
            }
        }
    }
}

#[component]
fn ScoreCard(vm: ResultsVm) -> Element {
    rsx! {
        div { class: "score-card",
            div { class: "score-card__emoji", "{vm.emoji}" }
            h1 { class: "score-card__title", "{vm.title}" }
            div { class: "score-card__percentage", "{vm.percentage_label}" }
            p { class: "score-card__message", "{vm.message}" }
            dl { class: "score-card__stats",
                div { class: "stat stat--correct",
                    dt { "Correct" }
                    dd { "{vm.correct}" }
                }
                div { class: "stat stat--wrong",
                    dt { "Wrong" }
                    dd { "{vm.wrong}" }
                }
                div { class: "stat",
                    dt { "Total" }
                    dd { "{vm.total}" }
                }
            }
        }
    }
}
