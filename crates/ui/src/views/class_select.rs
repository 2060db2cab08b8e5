use apex_core::catalog;
use apex_core::i18n::translate;
use apex_core::model::ClassLevel;
use dioxus::prelude::*;

use crate::app::{use_controller, use_locale};

#[component]
pub fn ClassSelectView() -> Element {
    let mut controller = use_controller();
    let lang = *use_locale().read();
    let title = translate(lang, "selectClass");

    rsx! {
        section { class: "class-select",
            button {
                class: "btn btn-ghost back",
                onclick: move |_| controller.write().back(),
                "← Back"
            }
            h1 { class: "page-title", "{title}" }
            div { class: "card-grid",
                for class in catalog::class_levels() {
                    ClassCard { key: "{class.id()}", class: class.clone() }
                }
            }
        }
    }
}

#[component]
fn ClassCard(class: ClassLevel) -> Element {
    let mut controller = use_controller();
    let detail = if class.has_streams() {
        format!("{} Streams Available", class.streams().len())
    } else {
        format!("{} Subjects", class.subjects().len())
    };
    let name = class.name().to_owned();

    rsx! {
        button {
            class: "card class-card",
            onclick: move |_| controller.write().select_class(class.clone()),
            h3 { "{name}" }
            p { class: "muted", "{detail}" }
        }
    }
}
