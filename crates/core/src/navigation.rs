//! Screen flow and the user's accumulated selections.
//!
//! `AppState` is mutated only through its action methods (or `apply`). An
//! action that does not belong to the current screen is ignored; debug builds
//! assert on it so caller bugs surface early.

use std::fmt;

use tracing::trace;

use crate::model::{ClassLevel, Stream, StreamChoice, SubStream, Subject};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Welcome,
    RoleSelect,
    ClassSelect,
    StreamSelect,
    Subjects,
    Quiz,
    Teacher,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Welcome => "welcome",
            Self::RoleSelect => "roleSelect",
            Self::ClassSelect => "classSelect",
            Self::StreamSelect => "streamSelect",
            Self::Subjects => "subjects",
            Self::Quiz => "quiz",
            Self::Teacher => "teacher",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Teacher,
}

/// A user input the state machine understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    GetStarted,
    SelectRole(Role),
    SelectClass(ClassLevel),
    SelectStream(Stream, Option<SubStream>),
    SelectSubStream(SubStream),
    TakeQuiz(Subject),
    Back,
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    screen: Screen,
    role: Option<Role>,
    selected_class: Option<ClassLevel>,
    selected_stream: Option<StreamChoice>,
    pending_sub_stream: Option<Stream>,
    selected_subject: Option<Subject>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    #[must_use]
    pub fn selected_class(&self) -> Option<&ClassLevel> {
        self.selected_class.as_ref()
    }

    #[must_use]
    pub fn selected_stream(&self) -> Option<&StreamChoice> {
        self.selected_stream.as_ref()
    }

    /// Kept for display only; derived from the resolved stream choice.
    #[must_use]
    pub fn selected_sub_stream(&self) -> Option<&SubStream> {
        self.selected_stream.as_ref().and_then(StreamChoice::sub_stream)
    }

    /// Stream waiting on a sub-stream choice, if the nested sub-state is active.
    #[must_use]
    pub fn pending_sub_stream(&self) -> Option<&Stream> {
        self.pending_sub_stream.as_ref()
    }

    #[must_use]
    pub fn selected_subject(&self) -> Option<&Subject> {
        self.selected_subject.as_ref()
    }

    /// Header label such as `Class 11 - Science (PCM (Physics, Chemistry, Mathematics))`.
    #[must_use]
    pub fn class_info(&self) -> Option<String> {
        let class = self.selected_class.as_ref()?;
        let mut label = class.name().to_owned();
        if let Some(choice) = &self.selected_stream {
            let stream = choice.stream();
            if !stream.is_default() {
                label.push_str(" - ");
                label.push_str(stream.name());
            }
            if let Some(sub) = choice.sub_stream() {
                label.push_str(" (");
                label.push_str(sub.name());
                label.push(')');
            }
        }
        Some(label)
    }

    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::GetStarted => self.get_started(),
            NavAction::SelectRole(role) => self.select_role(role),
            NavAction::SelectClass(class) => self.select_class(class),
            NavAction::SelectStream(stream, sub) => self.select_stream(stream, sub),
            NavAction::SelectSubStream(sub) => self.select_sub_stream(sub),
            NavAction::TakeQuiz(subject) => self.take_quiz(subject),
            NavAction::Back => self.back(),
            NavAction::Reset => self.reset(),
        }
    }

    pub fn get_started(&mut self) {
        if self.expect(Screen::Welcome, "getStarted") {
            self.go(Screen::RoleSelect);
        }
    }

    pub fn select_role(&mut self, role: Role) {
        if !self.expect(Screen::RoleSelect, "selectRole") {
            return;
        }
        self.role = Some(role);
        self.go(match role {
            Role::Student => Screen::ClassSelect,
            Role::Teacher => Screen::Teacher,
        });
    }

    pub fn select_class(&mut self, class: ClassLevel) {
        if !self.expect(Screen::ClassSelect, "selectClass") {
            return;
        }
        if class.has_streams() {
            self.selected_stream = None;
            self.selected_class = Some(class);
            self.go(Screen::StreamSelect);
        } else {
            let stream = Stream::default_wrapping(class.subjects().to_vec());
            self.selected_stream = Some(StreamChoice::Direct(stream));
            self.selected_class = Some(class);
            self.go(Screen::Subjects);
        }
    }

    /// Picks a stream. A stream without core subjects and no `sub` enters the
    /// nested sub-stream choice instead of reaching `subjects`.
    pub fn select_stream(&mut self, stream: Stream, sub: Option<SubStream>) {
        if !self.expect(Screen::StreamSelect, "selectStream") {
            return;
        }
        debug_assert!(
            sub.is_none() || stream.requires_sub_stream(),
            "stream {} takes no sub-stream",
            stream.id()
        );
        let choice = match sub {
            Some(sub) => StreamChoice::WithSubStream(stream, sub),
            None if stream.requires_sub_stream() => {
                trace!(stream = %stream.id(), "awaiting sub-stream");
                self.pending_sub_stream = Some(stream);
                return;
            }
            None => StreamChoice::Direct(stream),
        };
        self.pending_sub_stream = None;
        self.selected_stream = Some(choice);
        self.go(Screen::Subjects);
    }

    pub fn select_sub_stream(&mut self, sub: SubStream) {
        if !self.expect(Screen::StreamSelect, "selectSubStream") {
            return;
        }
        match self.pending_sub_stream.take() {
            Some(stream) => {
                self.selected_stream = Some(StreamChoice::WithSubStream(stream, sub));
                self.go(Screen::Subjects);
            }
            None => contract_violation("selectSubStream", self.screen),
        }
    }

    pub fn take_quiz(&mut self, subject: Subject) {
        if !self.expect(Screen::Subjects, "takeQuiz") {
            return;
        }
        debug_assert!(
            self.selected_stream
                .as_ref()
                .is_some_and(|choice| choice.contains(&subject)),
            "subject {} is not in the active stream",
            subject.id()
        );
        self.selected_subject = Some(subject);
        self.go(Screen::Quiz);
    }

    pub fn back(&mut self) {
        let next = match self.screen {
            Screen::Welcome => return,
            Screen::RoleSelect => Screen::Welcome,
            Screen::ClassSelect | Screen::Teacher => Screen::RoleSelect,
            Screen::StreamSelect => {
                if self.pending_sub_stream.take().is_some() {
                    trace!("sub-stream choice dismissed");
                    return;
                }
                Screen::ClassSelect
            }
            Screen::Subjects => {
                if self.selected_class.as_ref().is_some_and(ClassLevel::has_streams) {
                    Screen::StreamSelect
                } else {
                    Screen::ClassSelect
                }
            }
            Screen::Quiz => Screen::Subjects,
        };
        self.go(next);
    }

    pub fn reset(&mut self) {
        trace!(from = %self.screen, "reset");
        *self = Self::default();
    }

    fn go(&mut self, next: Screen) {
        trace!(from = %self.screen, to = %next, "navigate");
        self.screen = next;
    }

    fn expect(&self, screen: Screen, action: &'static str) -> bool {
        if self.screen == screen {
            true
        } else {
            contract_violation(action, self.screen);
            false
        }
    }
}

fn contract_violation(action: &'static str, screen: Screen) {
    if cfg!(debug_assertions) {
        panic!("{action} is not valid on {screen}");
    }
    trace!(action, %screen, "ignored action");
}
