use apex_core::Locale;
use apex_core::navigation::Screen;
use dioxus::prelude::*;
use services::AppController;

use crate::context::AppContext;
use crate::views::{
    ClassSelectView, Header, QuizView, RoleSelectView, StreamSelectView, SubjectsView,
    TeacherView, WelcomeView,
};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_app_state(|| ctx.new_controller(), || ctx.initial_locale());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Screens render their own headings.
        document::Title { "ApexMind" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Screens {}
            }
        }
    }
}

/// Install the controller and locale signals shared by every screen.
pub fn use_app_state(
    controller: impl FnOnce() -> AppController,
    locale: impl FnOnce() -> Locale,
) {
    use_context_provider(|| Signal::new(controller()));
    use_context_provider(|| Signal::new(locale()));
}

#[must_use]
pub fn use_controller() -> Signal<AppController> {
    use_context::<Signal<AppController>>()
}

#[must_use]
pub fn use_locale() -> Signal<Locale> {
    use_context::<Signal<Locale>>()
}

/// Renders the header plus whichever screen the controller is on.
#[component]
pub fn Screens() -> Element {
    let controller = use_controller();
    let screen = controller.read().screen();

    rsx! {
        if screen != Screen::Welcome {
            Header {}
        }
        main { class: "screen screen-{screen}",
            match screen {
                Screen::Welcome => rsx! { WelcomeView {} },
                Screen::RoleSelect => rsx! { RoleSelectView {} },
                Screen::ClassSelect => rsx! { ClassSelectView {} },
                Screen::StreamSelect => rsx! { StreamSelectView {} },
                Screen::Subjects => rsx! { SubjectsView {} },
                Screen::Quiz => rsx! { QuizView {} },
                Screen::Teacher => rsx! { TeacherView {} },
            }
        }
    }
}
