use apex_core::i18n::translate;
use dioxus::prelude::*;

use crate::app::{use_controller, use_locale};
use crate::views::LanguageSelector;

const FEATURES: [&str; 4] = ["Quality Content", "For Everyone", "Offline First", "Multi-Language"];
const STEPS: [&str; 4] = ["step1", "step2", "step3", "step4"];

#[component]
pub fn WelcomeView() -> Element {
    let mut controller = use_controller();
    let lang = *use_locale().read();

    let title = translate(lang, "welcome");
    let subtitle = translate(lang, "subtitle");
    let description = translate(lang, "description");
    let how_to_use = translate(lang, "howToUse");
    let get_started = translate(lang, "getStarted");
    let steps: Vec<&str> = STEPS.iter().map(|key| translate(lang, *key)).collect();

    rsx! {
        section { class: "welcome",
            div { class: "welcome-language",
                LanguageSelector {}
            }
            div { class: "hero",
                h1 { class: "hero-title", "{title}" }
                p { class: "hero-subtitle", "{subtitle}" }
                p { class: "hero-description", "{description}" }
            }
            ul { class: "feature-grid",
                for feature in FEATURES {
                    li { key: "{feature}", class: "card feature-card", "{feature}" }
                }
            }
            div { class: "card how-to-use",
                h2 { "{how_to_use}" }
                ol { class: "steps",
                    for (number, text) in (1..).zip(steps) {
                        li { key: "{number}", class: "step",
                            span { class: "step-number", "{number}" }
                            span { class: "step-text", "{text}" }
                        }
                    }
                }
            }
            button {
                class: "btn btn-primary btn-lg",
                onclick: move |_| controller.write().get_started(),
                "{get_started}"
            }
        }
    }
}
