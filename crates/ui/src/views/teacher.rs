use apex_core::i18n::translate;
use apex_core::model::StudentId;
use dioxus::prelude::*;
use services::DashboardOverview;

use crate::app::{use_controller, use_locale};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{StudentDetailVm, StudentRowVm, map_student_detail, map_student_rows};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    overview: DashboardOverview,
    rows: Vec<StudentRowVm>,
}

#[component]
pub fn TeacherView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut controller = use_controller();
    let locale = use_locale();
    let mut selected = use_signal(|| None::<StudentId>);
    let dashboard = ctx.teacher_dashboard();

    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        let lang = *locale.read();
        async move {
            let overview = dashboard
                .overview()
                .await
                .map_err(|err| ViewError::from(&err))?;
            let students = dashboard
                .students()
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok(DashboardData {
                overview,
                rows: map_student_rows(&students, lang),
            })
        }
    });

    let current = *selected.read();
    if let Some(student_id) = current {
        return rsx! {
            StudentDetailView {
                key: "{student_id}",
                student_id,
                on_close: move |()| selected.set(None),
            }
        };
    }

    let state = view_state_from_resource(&resource);

    rsx! {
        section { class: "teacher",
            button {
                class: "btn btn-ghost back",
                onclick: move |_| controller.write().back(),
                "← Back"
            }
            h1 { class: "page-title", "Teacher Dashboard" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    OverviewCards { overview: data.overview }
                    div { class: "card student-list",
                        h2 { "Student List" }
                        if data.rows.is_empty() {
                            p { class: "muted", "No students yet." }
                        } else {
                            ul {
                                for (id, row) in data.rows.into_iter().map(|row| (row.id, row)) {
                                    StudentRow {
                                        key: "{id}",
                                        row,
                                        on_open: move |id: StudentId| selected.set(Some(id)),
                                    }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn OverviewCards(overview: DashboardOverview) -> Element {
    rsx! {
        div { class: "card-grid three overview",
            div { class: "card stat",
                div { class: "stat-value", "{overview.total_students}" }
                p { class: "muted", "Total Students" }
            }
            div { class: "card stat",
                div { class: "stat-value", "{overview.completed}" }
                p { class: "muted", "Completed Courses" }
            }
            div { class: "card stat",
                div { class: "stat-value", "{overview.average_progress}%" }
                p { class: "muted", "Average Progress" }
            }
        }
    }
}

#[component]
fn StudentRow(row: StudentRowVm, on_open: EventHandler<StudentId>) -> Element {
    let id = row.id;
    rsx! {
        li {
            class: "student-row",
            onclick: move |_| on_open.call(id),
            div { class: "student-info",
                h3 { "{row.name}" }
                p { class: "muted", "{row.class_label}" }
            }
            div { class: "student-progress",
                span { "{row.progress}% Complete" }
                div { class: "progress small",
                    div { class: "progress-bar", style: "width: {row.progress}%" }
                }
            }
            span { class: "badge {row.status_class}", "{row.status_label}" }
        }
    }
}

#[component]
fn StudentDetailView(student_id: StudentId, on_close: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let locale = use_locale();
    let dashboard = ctx.teacher_dashboard();

    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        let lang = *locale.read();
        async move {
            let summary = dashboard
                .student_summary(student_id)
                .await
                .map_err(|err| ViewError::from(&err))?
                .ok_or(ViewError::NotFound)?;
            Ok(map_student_detail(&summary, lang))
        }
    });

    let state = view_state_from_resource(&resource);
    let progress_title = translate(*locale.read(), "progress");

    rsx! {
        section { class: "student-detail",
            button {
                class: "btn btn-ghost back",
                onclick: move |_| on_close.call(()),
                "← Back to Students"
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(detail) => rsx! {
                    StudentDetailBody { detail, progress_title }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn StudentDetailBody(detail: StudentDetailVm, progress_title: &'static str) -> Element {
    rsx! {
        div { class: "detail-header",
            h1 { class: "page-title", "{detail.name}" }
            p { class: "page-subtitle", "{detail.class_label}" }
            span { class: "badge {detail.status_class}", "{detail.status_label}" }
        }
        div { class: "card-grid two",
            div { class: "card",
                h3 { "{progress_title}" }
                div { class: "stat-row",
                    span { "Course Completion" }
                    span { "{detail.progress}%" }
                }
                div { class: "progress",
                    div { class: "progress-bar", style: "width: {detail.progress}%" }
                }
                div { class: "stat",
                    div { class: "stat-value", "{detail.progress}%" }
                    p { class: "muted", "Overall Progress" }
                }
            }
            div { class: "card",
                h3 { "Quiz Performance" }
                div { class: "stat",
                    div { class: "stat-value success", "{detail.average_percentage}%" }
                    p { class: "muted", "Average Score" }
                }
                div { class: "stat",
                    div { class: "stat-value", "{detail.quiz_count}" }
                    p { class: "muted", "Quizzes Completed" }
                }
            }
        }
        div { class: "card recent-results",
            h3 { "Recent Quiz Results" }
            if detail.results.is_empty() {
                p { class: "muted", "No quiz results available yet." }
            } else {
                ul {
                    for result in detail.results.clone() {
                        li { class: "result-row",
                            div {
                                h4 { "{result.subject}" }
                                p { class: "muted", "{result.date_str}" }
                            }
                            div { class: "result-score",
                                span { "{result.score_str}" }
                                span { class: "muted", "{result.percentage}%" }
                            }
                        }
                    }
                }
            }
        }
    }
}
