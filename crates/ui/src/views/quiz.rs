use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::QuestionKind;
use services::{ChoiceView, QuestionView};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{PrimaryAction, QuizIntent, QuizOutcome, QuizVm, start_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<QuizVm>);

    let resource = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        let mut error = error;
        let mut vm = vm;

        async move {
            let started = start_quiz(&quiz_loop).await?;
            vm.set(Some(started));
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut error = error;
        let mut vm = vm;

        let result = match vm.write().as_mut() {
            Some(vm) => vm.apply(intent),
            None => Err(ViewError::Unknown),
        };
        match result {
            Ok(QuizOutcome::Continue) => error.set(None),
            Ok(QuizOutcome::Completed(score)) => {
                let _ = navigator.replace(Route::Results {
                    correct: score.correct(),
                    total: score.total(),
                });
            }
            Err(err) => error.set(Some(err)),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let current = vm.read().clone();

    rsx! {
        div { class: "page quiz",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "quiz__loading", "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "quiz__error",
                        p { "{err.message()}" }
                        button {
                            class: "btn btn--secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::Home {});
                            },
                            "Back to Home"
                        }
                    }
                },
                ViewState::Ready(()) => match current {
                    Some(vm) => rsx! {
                        QuizHeader {
                            label: vm.progress_label(),
                            percent: vm.progress_percent(),
                        }
                        QuestionCard {
                            question: vm.question(),
                            badge: vm.badge(),
                            on_intent: dispatch_intent,
                        }
                        QuizNav {
                            can_go_back: vm.can_go_back(),
                            primary: vm.primary_action(),
                            on_intent: dispatch_intent,
                        }
                    },
                    None => rsx! {
                        p { class: "quiz__loading", "Loading questions..." }
                    },
                },
            }
            if let Some(err) = error() {
                p { class: "quiz__error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn QuizHeader(label: String, percent: u32) -> Element {
    rsx! {
        div { class: "quiz__header",
            span { class: "quiz__progress-label", "{label}" }
            span { class: "quiz__progress-percent", "{percent}%" }
        }
        div { class: "progress",
            div { class: "progress__bar", style: "width: {percent}%;" }
        }
    }
}

#[component]
fn QuestionCard(
    question: QuestionView,
    badge: Option<&'static str>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let multiple = question.kind == QuestionKind::Multiple;
    // Alternating animation names restart the fade on every step.
    let fade = if question.index % 2 == 0 {
        "fade-in"
    } else {
        "fade-in-alt"
    };

    rsx! {
        div { class: "question-card {fade}",
            if let Some(badge) = badge {
                span { class: "question-card__badge", "{badge}" }
            }
            h2 { class: "question-card__prompt", "{question.prompt}" }
            div { class: "choices",
                for choice in question.choices.iter() {
                    ChoiceButton {
                        key: "{choice.key}",
                        choice: choice.clone(),
                        multiple,
                        on_intent,
                    }
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: ChoiceView, multiple: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = if choice.selected {
        "choice choice--selected"
    } else {
        "choice"
    };
    let marker = match (multiple, choice.selected) {
        (true, true) => "☑",
        (true, false) => "☐",
        (false, true) => "●",
        (false, false) => "○",
    };
    let key = choice.key.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::Select(key.clone())),
            span { class: "choice__marker", "{marker}" }
            span { class: "choice__key", "{choice.key}" }
            span { class: "choice__text", "{choice.text}" }
        }
    }
}

#[component]
fn QuizNav(can_go_back: bool, primary: PrimaryAction, on_intent: EventHandler<QuizIntent>) -> Element {
    let (label, intent) = match primary {
        PrimaryAction::Next => ("Next", QuizIntent::Next),
        PrimaryAction::Finish => ("Finish", QuizIntent::Finish),
    };

    rsx! {
        div { class: "quiz__nav",
            button {
                class: "btn btn--secondary",
                id: "quiz-previous",
                r#type: "button",
                disabled: !can_go_back,
                onclick: move |_| on_intent.call(QuizIntent::Previous),
                "Previous"
            }
            button {
                class: "btn btn--primary",
                id: "quiz-primary",
                r#type: "button",
                onclick: move |_| on_intent.call(intent.clone()),
                "{label}"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
