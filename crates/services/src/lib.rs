#![forbid(unsafe_code)]

pub mod app_services;
pub mod controller;
pub mod demo;
pub mod error;
pub mod quiz_service;
pub mod teacher_service;

pub use apex_core::Clock;

pub use app_services::AppServices;
pub use controller::{AdvancedQuiz, AppController, PendingAdvance};
pub use demo::DemoProgress;
pub use error::{AppServicesError, DashboardError, QuizError};
pub use quiz_service::QuizService;
pub use teacher_service::{DashboardOverview, StudentSummary, TeacherDashboardService};
