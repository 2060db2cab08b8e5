use apex_core::Locale;
use apex_core::catalog::{self, subjects};
use apex_core::model::{ClassLevelId, StreamId};
use apex_core::navigation::Role;
use services::AppController;
use storage::repository::Storage;

use super::test_harness::{mount_screens, setup_screen_harness, test_services};

fn class(grade: u8) -> apex_core::model::ClassLevel {
    catalog::find_class(ClassLevelId::new(grade))
        .expect("class exists")
        .clone()
}

fn student_on_class_select(controller: &mut AppController) {
    controller.get_started();
    controller.select_role(Role::Student);
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_renders_without_header() {
    let mut harness = setup_screen_harness(Locale::English, |_| {});
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to ApexMind"), "missing title in {html}");
    assert!(html.contains("Get Started"), "missing cta in {html}");
    assert!(html.contains("Offline First"), "missing feature in {html}");
    assert!(!html.contains("app-header"), "unexpected header in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_follows_initial_locale() {
    let mut harness = setup_screen_harness(Locale::Hindi, |_| {});
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("ApexMind में आपका स्वागत है"), "missing hindi title in {html}");
    assert!(html.contains("शुरू करें"), "missing hindi cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn role_select_has_header_without_reset() {
    let mut harness = setup_screen_harness(Locale::English, AppController::get_started);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Choose Your Role"), "missing heading in {html}");
    assert!(html.contains("Student View"), "missing student card in {html}");
    assert!(html.contains("app-header"), "missing header in {html}");
    assert!(!html.contains("Reset"), "reset shown before a role in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn class_select_lists_every_class() {
    let mut harness = setup_screen_harness(Locale::English, student_on_class_select);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Select Your Class"), "missing heading in {html}");
    assert!(html.contains("Class 9"), "missing class 9 in {html}");
    assert!(html.contains("Class 12"), "missing class 12 in {html}");
    assert!(html.contains("5 Subjects"), "missing subject count in {html}");
    assert!(html.contains("3 Streams Available"), "missing stream count in {html}");
    assert!(html.contains("Reset"), "missing reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stream_select_lists_class_streams() {
    let mut harness = setup_screen_harness(Locale::English, |controller| {
        student_on_class_select(controller);
        controller.select_class(class(11));
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Class 11 - Select Stream"), "missing heading in {html}");
    for name in ["Science", "Commerce", "Humanities"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn senior_science_asks_for_a_sub_stream() {
    let mut harness = setup_screen_harness(Locale::English, |controller| {
        student_on_class_select(controller);
        let class = class(11);
        let science = class.find_stream(StreamId::new("science11")).unwrap().clone();
        controller.select_class(class);
        controller.select_stream(science, None);
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Choose Science Sub-Stream"), "missing heading in {html}");
    assert!(
        html.contains("PCMB (Physics, Chemistry, Mathematics, Biology)"),
        "missing pcmb in {html}"
    );
    assert!(html.contains("Back to Stream Selection"), "missing back in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subjects_show_core_and_extra_sections() {
    let mut harness = setup_screen_harness(Locale::English, |controller| {
        student_on_class_select(controller);
        let class = class(12);
        let science = class.find_stream(StreamId::new("science12")).unwrap().clone();
        let pcb = catalog::science_sub_streams()[1].clone();
        controller.select_class(class);
        controller.select_stream(science, Some(pcb));
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Core Subjects"), "missing core section in {html}");
    assert!(html.contains("Biology"), "missing pcb subject in {html}");
    assert!(html.contains("Extra Subjects"), "missing extra section in {html}");
    assert!(html.contains("Optional Subject"), "missing optional label in {html}");
    assert!(html.contains("% Complete"), "missing demo progress in {html}");
    assert!(
        html.contains("Class 12 - Science (PCB (Physics, Chemistry, Biology))"),
        "missing class info in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn junior_class_has_no_extra_section() {
    let mut harness = setup_screen_harness(Locale::English, |controller| {
        student_on_class_select(controller);
        controller.select_class(class(4));
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Social Science"), "missing subject in {html}");
    assert!(html.contains("Quick Quiz"), "missing quick quiz in {html}");
    assert!(!html.contains("Extra Subjects"), "unexpected extras in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_renders_first_question() {
    let mut harness = setup_screen_harness(Locale::English, |controller| {
        student_on_class_select(controller);
        controller.select_class(class(4));
        controller.take_quiz(subjects::MATHEMATICS);
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Mathematics Quiz"), "missing title in {html}");
    assert!(html.contains("1 / 5"), "missing position in {html}");
    assert!(html.contains("What is 15 + 27?"), "missing prompt in {html}");
    assert!(html.contains("Previous"), "missing previous in {html}");
    assert!(html.contains("Next"), "missing next in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finished_quiz_renders_results() {
    let services = test_services(&Storage::in_memory());
    let mut controller = services.controller();
    student_on_class_select(&mut controller);
    controller.select_class(class(4));
    controller.take_quiz(subjects::MATHEMATICS);
    for answer in [1, 2, 1, 2, 0] {
        controller.select_answer(answer).unwrap();
        controller.advance().await.unwrap();
    }

    let mut harness = mount_screens(services, controller, Locale::English);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quiz Completed!"), "missing heading in {html}");
    assert!(html.contains("5 out of 5 correct"), "missing summary in {html}");
    assert!(html.contains("Retake Quiz"), "missing retake in {html}");

    let history = harness.services.quiz().history().await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn teacher_dashboard_renders_overview() {
    let mut harness = setup_screen_harness(Locale::English, |controller| {
        controller.get_started();
        controller.select_role(Role::Teacher);
    });
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Teacher Dashboard"), "missing heading in {html}");
    assert!(html.contains("Total Students"), "missing overview in {html}");
    assert!(html.contains("61%"), "missing average progress in {html}");
    assert!(html.contains("Arjun Singh"), "missing student in {html}");
    assert!(html.contains("In Progress"), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn teacher_dashboard_localizes_status() {
    let mut harness = setup_screen_harness(Locale::Punjabi, |controller| {
        controller.get_started();
        controller.select_role(Role::Teacher);
    });
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("ਪ੍ਰਗਤੀ ਵਿੱਚ"), "missing punjabi status in {html}");
}
