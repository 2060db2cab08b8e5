use crate::i18n::Locale;
use crate::model::ids::{ClassLevelId, StreamId, SubStreamId, SubjectId};

/// Id of the stream synthesized for classes that list subjects directly.
pub const DEFAULT_STREAM_ID: &str = "default";

//
// ─── NAMES ─────────────────────────────────────────────────────────────────────
//

/// A display name in every supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalizedName {
    pub english: &'static str,
    pub hindi: &'static str,
    pub punjabi: &'static str,
}

impl LocalizedName {
    #[must_use]
    pub const fn new(english: &'static str, hindi: &'static str, punjabi: &'static str) -> Self {
        Self {
            english,
            hindi,
            punjabi,
        }
    }

    #[must_use]
    pub const fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.english,
            Locale::Hindi => self.hindi,
            Locale::Punjabi => self.punjabi,
        }
    }
}

//
// ─── SUBJECT ───────────────────────────────────────────────────────────────────
//

/// Leaf course entity. Defined at process start and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subject {
    id: SubjectId,
    names: LocalizedName,
}

impl Subject {
    #[must_use]
    pub const fn new(id: &'static str, names: LocalizedName) -> Self {
        Self {
            id: SubjectId::new(id),
            names,
        }
    }

    #[must_use]
    pub const fn id(&self) -> SubjectId {
        self.id
    }

    /// English display name. This is the name stored in quiz results.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.names.english
    }

    #[must_use]
    pub const fn localized_name(&self, locale: Locale) -> &'static str {
        self.names.get(locale)
    }

    #[must_use]
    pub const fn names(&self) -> LocalizedName {
        self.names
    }
}

//
// ─── STREAM ────────────────────────────────────────────────────────────────────
//

/// A track within a class level bundling core and optional subjects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    id: StreamId,
    names: LocalizedName,
    subjects: Vec<Subject>,
    extra_subjects: Vec<Subject>,
}

impl Stream {
    #[must_use]
    pub fn new(id: &'static str, names: LocalizedName, subjects: Vec<Subject>) -> Self {
        Self {
            id: StreamId::new(id),
            names,
            subjects,
            extra_subjects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_extras(mut self, extra_subjects: Vec<Subject>) -> Self {
        self.extra_subjects = extra_subjects;
        self
    }

    /// The stream shown for classes without stream choice.
    #[must_use]
    pub fn default_wrapping(subjects: Vec<Subject>) -> Self {
        Self::new(
            DEFAULT_STREAM_ID,
            LocalizedName::new("Default", "मुख्य", "ਮੁੱਖ"),
            subjects,
        )
    }

    #[must_use]
    pub fn id(&self) -> StreamId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.names.english
    }

    #[must_use]
    pub fn localized_name(&self, locale: Locale) -> &'static str {
        self.names.get(locale)
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    #[must_use]
    pub fn extra_subjects(&self) -> &[Subject] {
        &self.extra_subjects
    }

    /// True when the stream only gets subjects from a sub-stream choice.
    #[must_use]
    pub fn requires_sub_stream(&self) -> bool {
        self.subjects.is_empty()
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.id.as_str() == DEFAULT_STREAM_ID
    }
}

//
// ─── SUB-STREAM ────────────────────────────────────────────────────────────────
//

/// Refinement of a Science stream (PCM, PCB, PCMB).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubStream {
    id: SubStreamId,
    names: LocalizedName,
    subjects: Vec<Subject>,
}

impl SubStream {
    #[must_use]
    pub fn new(id: &'static str, names: LocalizedName, subjects: Vec<Subject>) -> Self {
        Self {
            id: SubStreamId::new(id),
            names,
            subjects,
        }
    }

    #[must_use]
    pub fn id(&self) -> SubStreamId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.names.english
    }

    #[must_use]
    pub fn localized_name(&self, locale: Locale) -> &'static str {
        self.names.get(locale)
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }
}

//
// ─── STREAM CHOICE ─────────────────────────────────────────────────────────────
//

/// A resolved stream selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamChoice {
    Direct(Stream),
    WithSubStream(Stream, SubStream),
}

impl StreamChoice {
    #[must_use]
    pub fn stream(&self) -> &Stream {
        match self {
            Self::Direct(stream) | Self::WithSubStream(stream, _) => stream,
        }
    }

    #[must_use]
    pub fn sub_stream(&self) -> Option<&SubStream> {
        match self {
            Self::Direct(_) => None,
            Self::WithSubStream(_, sub) => Some(sub),
        }
    }

    /// Effective core subjects: the sub-stream's list overrides the stream's.
    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        match self {
            Self::Direct(stream) => stream.subjects(),
            Self::WithSubStream(_, sub) => sub.subjects(),
        }
    }

    #[must_use]
    pub fn extra_subjects(&self) -> &[Subject] {
        self.stream().extra_subjects()
    }

    #[must_use]
    pub fn contains(&self, subject: &Subject) -> bool {
        self.subjects()
            .iter()
            .chain(self.extra_subjects())
            .any(|s| s.id() == subject.id())
    }
}

//
// ─── CLASS LEVEL ───────────────────────────────────────────────────────────────
//

/// Either a stream choice or a direct subject list, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassContent {
    Streams(Vec<Stream>),
    Subjects(Vec<Subject>),
}

/// A grade in the curriculum hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLevel {
    id: ClassLevelId,
    name: String,
    content: ClassContent,
}

impl ClassLevel {
    #[must_use]
    pub fn with_subjects(grade: u8, subjects: Vec<Subject>) -> Self {
        debug_assert!(!subjects.is_empty(), "class {grade} has no subjects");
        Self::new(grade, ClassContent::Subjects(subjects))
    }

    #[must_use]
    pub fn with_streams(grade: u8, streams: Vec<Stream>) -> Self {
        debug_assert!(!streams.is_empty(), "class {grade} has no streams");
        Self::new(grade, ClassContent::Streams(streams))
    }

    fn new(grade: u8, content: ClassContent) -> Self {
        Self {
            id: ClassLevelId::new(grade),
            name: format!("Class {grade}"),
            content,
        }
    }

    #[must_use]
    pub fn id(&self) -> ClassLevelId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn content(&self) -> &ClassContent {
        &self.content
    }

    /// Streams offered by this class; empty for classes with direct subjects.
    #[must_use]
    pub fn streams(&self) -> &[Stream] {
        match &self.content {
            ClassContent::Streams(streams) => streams,
            ClassContent::Subjects(_) => &[],
        }
    }

    /// Direct subjects of this class; empty for classes with streams.
    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        match &self.content {
            ClassContent::Streams(_) => &[],
            ClassContent::Subjects(subjects) => subjects,
        }
    }

    #[must_use]
    pub fn has_streams(&self) -> bool {
        matches!(self.content, ClassContent::Streams(_))
    }

    #[must_use]
    pub fn find_stream(&self, id: StreamId) -> Option<&Stream> {
        self.streams().iter().find(|s| s.id() == id)
    }
}
