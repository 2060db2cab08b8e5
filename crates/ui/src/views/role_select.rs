use apex_core::i18n::translate;
use apex_core::navigation::Role;
use dioxus::prelude::*;

use crate::app::{use_controller, use_locale};

#[component]
pub fn RoleSelectView() -> Element {
    let mut controller = use_controller();
    let lang = *use_locale().read();
    let student = translate(lang, "studentView");
    let teacher = translate(lang, "teacherView");

    rsx! {
        section { class: "role-select",
            h1 { class: "page-title", "Choose Your Role" }
            p { class: "page-subtitle", "Select how you want to use ApexMind" }
            div { class: "card-grid two",
                button {
                    class: "card role-card role-student",
                    onclick: move |_| controller.write().select_role(Role::Student),
                    h2 { "{student}" }
                    p { "Access learning materials, take quizzes, and track your progress" }
                }
                button {
                    class: "card role-card role-teacher",
                    onclick: move |_| controller.write().select_role(Role::Teacher),
                    h2 { "{teacher}" }
                    p { "Monitor student progress and view performance analytics" }
                }
            }
        }
    }
}
