use std::sync::Arc;

use apex_core::Locale;
use apex_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AppController, AppServices, DemoProgress, QuizService, TeacherDashboardService};
use storage::repository::Storage;

use crate::app::{Screens, use_app_state};
use crate::context::{UiApp, build_app_context};

struct TestApp {
    services: AppServices,
    locale: Locale,
}

impl UiApp for TestApp {
    fn initial_locale(&self) -> Locale {
        self.locale
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn teacher_dashboard(&self) -> Arc<TeacherDashboardService> {
        self.services.teacher()
    }

    fn demo_progress(&self) -> Arc<DemoProgress> {
        self.services.demo()
    }
}

#[derive(Props, Clone)]
struct ScreenHarnessProps {
    app: Arc<TestApp>,
    controller: AppController,
}

impl PartialEq for ScreenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreensUnderTest(props: ScreenHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_app_state(|| props.controller.clone(), || ctx.initial_locale());
    rsx! { Screens {} }
}

pub struct ScreenHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ScreenHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// In-memory services with a fixed clock and seeded demo values.
pub fn test_services(storage: &Storage) -> AppServices {
    AppServices::from_storage(storage, fixed_clock(), DemoProgress::seeded(7))
}

/// Mount the screens over in-memory storage with the controller already
/// moved along by `prepare`.
pub fn setup_screen_harness(
    locale: Locale,
    prepare: impl FnOnce(&mut AppController),
) -> ScreenHarness {
    let services = test_services(&Storage::in_memory());
    let mut controller = services.controller();
    prepare(&mut controller);
    mount_screens(services, controller, locale)
}

pub fn mount_screens(
    services: AppServices,
    controller: AppController,
    locale: Locale,
) -> ScreenHarness {
    let app = Arc::new(TestApp {
        services: services.clone(),
        locale,
    });
    let dom = VirtualDom::new_with_props(ScreensUnderTest, ScreenHarnessProps { app, controller });

    ScreenHarness { dom, services }
}
