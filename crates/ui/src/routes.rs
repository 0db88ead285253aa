use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{HomeView, QuizView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/results/:correct/:total", ResultsView)] Results { correct: usize, total: usize },
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "container",
            Outlet::<Route> {}
        }
    }
}
