use apex_core::Locale;
use dioxus::prelude::*;

use crate::app::{use_controller, use_locale};

#[component]
pub fn Header() -> Element {
    let mut controller = use_controller();
    let has_role = controller.read().state().role().is_some();

    rsx! {
        header { class: "app-header",
            button {
                class: "brand",
                onclick: move |_| controller.write().reset(),
                span { class: "brand-mark", "🎓" }
                span { class: "brand-name", "ApexMind" }
            }
            div { class: "header-actions",
                LanguageSelector {}
                if has_role {
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| controller.write().reset(),
                        "Reset"
                    }
                }
            }
        }
    }
}

/// Switches the display language. Navigation state is untouched.
#[component]
pub fn LanguageSelector() -> Element {
    let mut locale = use_locale();
    let current = *locale.read();

    rsx! {
        div { class: "language-selector",
            for option in Locale::ALL {
                button {
                    key: "{option.code()}",
                    class: if option == current { "lang-btn active" } else { "lang-btn" },
                    onclick: move |_| locale.set(option),
                    "{option.native_name()}"
                }
            }
        }
    }
}
