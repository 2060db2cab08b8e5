use apex_core::i18n::translate;
use apex_core::model::Subject;
use dioxus::prelude::*;

use crate::app::{use_controller, use_locale};
use crate::context::AppContext;

const CARD_ACCENTS: [&str; 4] = ["primary", "secondary", "accent", "success"];

#[component]
pub fn SubjectsView() -> Element {
    let mut controller = use_controller();
    let lang = *use_locale().read();
    let mut opened = use_signal(|| None::<Subject>);

    let (core, extras, class_info) = {
        let snapshot = controller.read();
        let state = snapshot.state();
        let choice = state.selected_stream();
        (
            choice.map(|c| c.subjects().to_vec()).unwrap_or_default(),
            choice.map(|c| c.extra_subjects().to_vec()).unwrap_or_default(),
            state.class_info().unwrap_or_default(),
        )
    };

    let current = *opened.read();
    if let Some(subject) = current {
        return rsx! {
            SubjectDetail {
                subject,
                class_info,
                on_close: move |()| opened.set(None),
            }
        };
    }

    let title = translate(lang, "subjects");
    let extras_title = translate(lang, "extraSubjects");

    rsx! {
        section { class: "subjects",
            button {
                class: "btn btn-ghost back",
                onclick: move |_| controller.write().back(),
                "← Back"
            }
            h1 { class: "page-title", "{title}" }
            p { class: "page-subtitle", "{class_info}" }

            h2 { class: "section-title", "Core Subjects" }
            div { class: "card-grid",
                for (index, subject) in core.into_iter().enumerate() {
                    SubjectCard {
                        key: "{subject.id()}",
                        subject,
                        accent: CARD_ACCENTS[index % CARD_ACCENTS.len()],
                        optional: false,
                        on_open: move |subject: Subject| opened.set(Some(subject)),
                    }
                }
            }

            if !extras.is_empty() {
                h2 { class: "section-title", "{extras_title}" }
                div { class: "card-grid",
                    for (index, subject) in extras.into_iter().enumerate() {
                        SubjectCard {
                            key: "{subject.id()}",
                            subject,
                            accent: CARD_ACCENTS[(index + 2) % CARD_ACCENTS.len()],
                            optional: true,
                            on_open: move |subject: Subject| opened.set(Some(subject)),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SubjectCard(
    subject: Subject,
    accent: &'static str,
    optional: bool,
    on_open: EventHandler<Subject>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut controller = use_controller();
    let lang = *use_locale().read();
    // Decorative only; drawn once per mounted card.
    let demo_percent = use_hook(|| ctx.demo_progress().percent());
    let name = subject.localized_name(lang);
    let take_quiz = translate(lang, "takeQuiz");

    rsx! {
        div {
            class: "card subject-card accent-{accent}",
            onclick: move |_| on_open.call(subject),
            h3 { "{name}" }
            if optional {
                p { class: "muted", "Optional Subject" }
            } else {
                p { class: "muted", "{demo_percent}% Complete" }
                div { class: "progress",
                    div { class: "progress-bar", style: "width: {demo_percent}%" }
                }
            }
            button {
                class: "btn btn-{accent} btn-sm",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    controller.write().take_quiz(subject);
                },
                if optional { "{take_quiz}" } else { "Quick Quiz" }
            }
        }
    }
}

#[component]
fn SubjectDetail(subject: Subject, class_info: String, on_close: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut controller = use_controller();
    let lang = *use_locale().read();
    let (completion, average_score) = use_hook(|| {
        let demo = ctx.demo_progress();
        (demo.percent(), demo.percent())
    });
    let name = subject.localized_name(lang);
    let progress_title = translate(lang, "progress");
    let take_quiz = translate(lang, "takeQuiz");

    rsx! {
        section { class: "subject-detail",
            button {
                class: "btn btn-ghost back",
                onclick: move |_| on_close.call(()),
                "← Back to Subjects"
            }
            h1 { class: "page-title", "{name}" }
            p { class: "page-subtitle", "{class_info}" }
            div { class: "card-grid two",
                div { class: "card",
                    h3 { "{progress_title}" }
                    div { class: "stat-row",
                        span { "Course Completion" }
                        span { "{completion}%" }
                    }
                    div { class: "progress",
                        div { class: "progress-bar", style: "width: {completion}%" }
                    }
                    div { class: "stat-row",
                        span { "Lessons Completed" }
                        span { "12/20" }
                    }
                }
                div { class: "card",
                    h3 { "Quiz Performance" }
                    div { class: "stat",
                        div { class: "stat-value success", "{average_score}%" }
                        p { class: "muted", "Average Score" }
                    }
                    div { class: "stat",
                        div { class: "stat-value", "8" }
                        p { class: "muted", "Quizzes Completed" }
                    }
                }
            }
            button {
                class: "btn btn-primary btn-lg",
                onclick: move |_| controller.write().take_quiz(subject),
                "{take_quiz}"
            }
        }
    }
}
