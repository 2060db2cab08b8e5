use apex_core::catalog::{self, subjects};
use apex_core::model::{ClassLevelId, StreamId, SubStreamId};
use apex_core::navigation::{Role, Screen};
use apex_core::time::fixed_clock;
use services::{AppServices, DemoProgress};
use storage::repository::Storage;

#[tokio::test]
async fn senior_science_student_finishes_a_physics_quiz() {
    let services = AppServices::from_storage(&Storage::in_memory(), fixed_clock(), DemoProgress::seeded(1));
    let mut controller = services.controller();

    controller.get_started();
    controller.select_role(Role::Student);

    let class = catalog::find_class(ClassLevelId::new(12)).unwrap().clone();
    let science = class.find_stream(StreamId::new("science12")).unwrap().clone();
    controller.select_class(class);
    controller.select_stream(science, None);
    assert_eq!(controller.screen(), Screen::StreamSelect);

    let pcm = catalog::find_sub_stream(SubStreamId::new("pcm")).unwrap().clone();
    controller.select_sub_stream(pcm);
    assert_eq!(controller.screen(), Screen::Subjects);
    assert_eq!(
        controller.state().class_info().as_deref(),
        Some("Class 12 - Science (PCM (Physics, Chemistry, Mathematics))")
    );

    controller.take_quiz(subjects::PHYSICS);
    let mut outcome = None;
    for _ in 0..5 {
        controller.select_answer(1).unwrap();
        outcome = controller.advance().await.unwrap();
    }
    let outcome = outcome.expect("quiz completed");
    assert_eq!(outcome.score, 1);
    assert_eq!(outcome.percentage, 20);
    assert!(!outcome.passed);

    controller.back();
    assert_eq!(controller.screen(), Screen::Subjects);

    let history = services.quiz().history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].subject, "Physics");
}

#[tokio::test]
async fn sqlite_backed_services_keep_results() {
    let url = "sqlite:file:memdb_services_smoke?mode=memory&cache=shared";
    let services = AppServices::new_sqlite(url, fixed_clock()).await.unwrap();
    let mut controller = services.controller();

    controller.get_started();
    controller.select_role(Role::Student);
    controller.select_class(catalog::find_class(ClassLevelId::new(4)).unwrap().clone());
    controller.take_quiz(subjects::MATHEMATICS);
    for answer in [1, 2, 1, 2, 0] {
        controller.select_answer(answer).unwrap();
        controller.advance().await.unwrap();
    }

    let reopened = AppServices::new_sqlite(url, fixed_clock()).await.unwrap();
    let history = reopened.quiz().history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].percentage, 100);
    drop(services);
}

#[tokio::test]
async fn teacher_dashboard_reads_the_fixture() {
    let services = AppServices::in_memory(fixed_clock());
    let overview = services.teacher().overview().await.unwrap();
    assert_eq!(overview.total_students, 6);
    assert_eq!(overview.completed, 1);
    assert_eq!(overview.average_progress, 61);
}
