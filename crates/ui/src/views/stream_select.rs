use apex_core::catalog;
use apex_core::i18n::translate;
use apex_core::model::{Stream, SubStream};
use dioxus::prelude::*;

use crate::app::{use_controller, use_locale};

#[component]
pub fn StreamSelectView() -> Element {
    let mut controller = use_controller();
    let lang = *use_locale().read();

    let (class_name, streams, pending) = {
        let snapshot = controller.read();
        let state = snapshot.state();
        (
            state.selected_class().map(|c| c.name().to_owned()).unwrap_or_default(),
            state
                .selected_class()
                .map(|c| c.streams().to_vec())
                .unwrap_or_default(),
            state.pending_sub_stream().cloned(),
        )
    };

    if let Some(stream) = pending {
        let stream_name = stream.localized_name(lang);
        return rsx! {
            section { class: "stream-select sub-streams",
                button {
                    class: "btn btn-ghost back",
                    onclick: move |_| controller.write().back(),
                    "← Back to Stream Selection"
                }
                h1 { class: "page-title", "Choose Science Sub-Stream" }
                p { class: "page-subtitle", "{class_name} - {stream_name}" }
                div { class: "card-grid",
                    for sub in catalog::science_sub_streams() {
                        SubStreamCard { key: "{sub.id()}", sub: sub.clone() }
                    }
                }
            }
        };
    }

    let title = translate(lang, "selectStream");
    rsx! {
        section { class: "stream-select",
            button {
                class: "btn btn-ghost back",
                onclick: move |_| controller.write().back(),
                "← Back"
            }
            h1 { class: "page-title", "{class_name} - {title}" }
            div { class: "card-grid",
                for (id, stream) in streams.into_iter().map(|s| (s.id(), s)) {
                    StreamCard { key: "{id}", stream }
                }
            }
        }
    }
}

#[component]
fn StreamCard(stream: Stream) -> Element {
    let mut controller = use_controller();
    let lang = *use_locale().read();
    let name = stream.localized_name(lang);
    let subject_names: Vec<&str> = stream
        .subjects()
        .iter()
        .chain(stream.extra_subjects())
        .map(|s| s.localized_name(lang))
        .collect();
    let subjects = subject_names.join(", ");
    let hint = if stream.requires_sub_stream() {
        "PCM · PCB · PCMB"
    } else {
        ""
    };

    rsx! {
        button {
            class: "card stream-card",
            onclick: move |_| controller.write().select_stream(stream.clone(), None),
            h3 { "{name}" }
            if !subjects.is_empty() {
                p { class: "muted", "{subjects}" }
            }
            if !hint.is_empty() {
                p { class: "hint", "{hint}" }
            }
        }
    }
}

#[component]
fn SubStreamCard(sub: SubStream) -> Element {
    let mut controller = use_controller();
    let lang = *use_locale().read();
    let name = sub.localized_name(lang);
    let subject_names: Vec<&str> = sub.subjects().iter().map(|s| s.localized_name(lang)).collect();
    let subjects = subject_names.join(", ");

    rsx! {
        button {
            class: "card stream-card sub-stream-card",
            onclick: move |_| controller.write().select_sub_stream(sub.clone()),
            h3 { "{name}" }
            p { class: "muted", "{subjects}" }
        }
    }
}
