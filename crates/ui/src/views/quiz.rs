use dioxus::prelude::*;
use tracing::warn;

use crate::app::{use_controller, use_locale};
use crate::views::ViewError;
use crate::vm::{QuizOptionVm, QuizQuestionVm, QuizResultVm, QuizVm, map_quiz};

#[component]
pub fn QuizView() -> Element {
    let controller = use_controller();
    let lang = *use_locale().read();
    let error = use_signal(|| None::<ViewError>);
    let busy = use_signal(|| false);

    let vm = controller.read().quiz().map(|session| map_quiz(session, lang));

    let on_select = use_callback(move |index: usize| {
        let mut controller = controller;
        let mut error = error;
        match controller.write().select_answer(index) {
            Ok(()) => error.set(None),
            Err(err) => error.set(Some(ViewError::from(&err))),
        }
    });

    let on_advance = use_callback(move |()| {
        let mut controller = controller;
        let mut error = error;
        let mut busy = busy;
        if busy() {
            return;
        }
        let pending = match controller.read().begin_advance() {
            Ok(pending) => pending,
            Err(err) => {
                error.set(Some(ViewError::from(&err)));
                return;
            }
        };
        busy.set(true);
        spawn(async move {
            match pending.run().await {
                Ok(advanced) => {
                    controller.write().apply_advance(advanced);
                    error.set(None);
                }
                Err(err) => {
                    warn!(error = %err, "quiz advance failed");
                    error.set(Some(ViewError::from(&err)));
                }
            }
            busy.set(false);
        });
    });

    let on_retreat = use_callback(move |()| {
        let mut controller = controller;
        let mut error = error;
        if let Err(err) = controller.write().retreat() {
            error.set(Some(ViewError::from(&err)));
        }
    });

    let on_restart = use_callback(move |()| {
        let mut controller = controller;
        let mut error = error;
        match controller.write().restart() {
            Ok(()) => error.set(None),
            Err(err) => error.set(Some(ViewError::from(&err))),
        }
    });

    let on_back = use_callback(move |()| {
        let mut controller = controller;
        controller.write().back();
    });

    rsx! {
        section { class: "quiz",
            match vm {
                None => rsx! {
                    p { class: "muted", "No quiz in progress." }
                },
                Some(QuizVm::Question(question)) => rsx! {
                    QuestionCard {
                        question,
                        busy: busy(),
                        on_select,
                        on_advance,
                        on_retreat,
                        on_back,
                    }
                },
                Some(QuizVm::Result(result)) => rsx! {
                    ResultCard { result, on_restart, on_back }
                },
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn QuestionCard(
    question: QuizQuestionVm,
    busy: bool,
    on_select: Callback<usize>,
    on_advance: Callback<()>,
    on_retreat: Callback<()>,
    on_back: Callback<()>,
) -> Element {
    rsx! {
        button {
            class: "btn btn-ghost back",
            onclick: move |_| on_back.call(()),
            "← Back to Subject"
        }
        div { class: "quiz-header",
            h1 { class: "page-title", "{question.title}" }
            span { class: "quiz-position", "{question.position_label}" }
        }
        div { class: "progress",
            div { class: "progress-bar", style: "width: {question.progress_percent}%" }
        }
        div { class: "card quiz-card",
            h2 { class: "quiz-prompt", "{question.prompt}" }
            div { class: "quiz-options",
                for (index, option) in question.options.iter().cloned().enumerate() {
                    OptionButton { key: "{index}", option, on_select }
                }
            }
        }
        div { class: "quiz-nav",
            button {
                class: "btn btn-outline",
                disabled: !question.can_go_back,
                onclick: move |_| on_retreat.call(()),
                "Previous"
            }
            button {
                class: "btn btn-primary",
                disabled: !question.can_advance || busy,
                onclick: move |_| on_advance.call(()),
                "{question.advance_label}"
            }
        }
    }
}

#[component]
fn OptionButton(option: QuizOptionVm, on_select: Callback<usize>) -> Element {
    let index = option.index;
    rsx! {
        button {
            class: if option.selected { "quiz-option selected" } else { "quiz-option" },
            onclick: move |_| on_select.call(index),
            span { class: "option-letter", "{option.letter}" }
            span { class: "option-text", "{option.text}" }
        }
    }
}

#[component]
fn ResultCard(result: QuizResultVm, on_restart: Callback<()>, on_back: Callback<()>) -> Element {
    let tone = if result.passed { "success" } else { "warning" };
    rsx! {
        div { class: "card quiz-result result-{tone}",
            h1 { class: "page-title", "{result.heading}" }
            p { class: "page-subtitle", "{result.subject_name}" }
            div { class: "result-percentage", "{result.percentage}%" }
            p { class: "muted", "{result.summary}" }
            dl { class: "result-breakdown",
                dt { "Correct Answers:" }
                dd { class: "success", "{result.correct}" }
                dt { "Incorrect Answers:" }
                dd { class: "danger", "{result.incorrect}" }
                dt { "Accuracy:" }
                dd { "{result.percentage}%" }
            }
            div { class: "quiz-nav",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_restart.call(()),
                    "Retake Quiz"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_back.call(()),
                    "Back to Subject"
                }
            }
        }
    }
}
