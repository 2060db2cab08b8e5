//! The static curriculum: classes 1-12, their streams, and the Science
//! sub-streams offered at classes 11 and 12.

use std::sync::LazyLock;

use crate::model::{ClassLevel, ClassLevelId, LocalizedName, Stream, SubStream, SubStreamId};

/// Subjects shared across classes and streams.
pub mod subjects {
    use crate::model::{LocalizedName, Subject};

    pub const ENGLISH: Subject = Subject::new(
        "english",
        LocalizedName::new("English", "अंग्रेजी", "ਅੰਗਰੇਜ਼ੀ"),
    );
    pub const MATHEMATICS: Subject = Subject::new(
        "mathematics",
        LocalizedName::new("Mathematics", "गणित", "ਗਣਿਤ"),
    );
    pub const SCIENCE: Subject = Subject::new(
        "science",
        LocalizedName::new("Science", "विज्ञान", "ਵਿਗਿਆਨ"),
    );
    pub const SOCIAL_SCIENCE: Subject = Subject::new(
        "socialScience",
        LocalizedName::new("Social Science", "सामाजिक विज्ञान", "ਸਮਾਜਿਕ ਵਿਗਿਆਨ"),
    );
    pub const HINDI: Subject = Subject::new(
        "hindi",
        LocalizedName::new("Hindi", "हिंदी", "ਹਿੰਦੀ"),
    );
    pub const PUNJABI: Subject = Subject::new(
        "punjabi",
        LocalizedName::new("Punjabi", "पंजाबी", "ਪੰਜਾਬੀ"),
    );
    pub const PHYSICS: Subject = Subject::new(
        "physics",
        LocalizedName::new("Physics", "भौतिकी", "ਭੌਤਿਕ ਵਿਗਿਆਨ"),
    );
    pub const CHEMISTRY: Subject = Subject::new(
        "chemistry",
        LocalizedName::new("Chemistry", "रसायन विज्ञान", "ਰਸਾਇਣ ਵਿਗਿਆਨ"),
    );
    pub const BIOLOGY: Subject = Subject::new(
        "biology",
        LocalizedName::new("Biology", "जीव विज्ञान", "ਜੀਵ ਵਿਗਿਆਨ"),
    );
    pub const ECONOMICS: Subject = Subject::new(
        "economics",
        LocalizedName::new("Economics", "अर्थशास्त्र", "ਆਰਥਿਕ ਵਿਗਿਆਨ"),
    );
    pub const ACCOUNTANCY: Subject = Subject::new(
        "accountancy",
        LocalizedName::new("Accountancy", "लेखांकन", "ਲੇਖਾ-ਜੋਖਾ"),
    );
    pub const BUSINESS_STUDIES: Subject = Subject::new(
        "businessStudies",
        LocalizedName::new("Business Studies", "व्यावसायिक अध्ययन", "ਵਪਾਰਿਕ ਅਧਿਐਨ"),
    );
    pub const HISTORY: Subject = Subject::new(
        "history",
        LocalizedName::new("History", "इतिहास", "ਇਤਿਹਾਸ"),
    );
    pub const GEOGRAPHY: Subject = Subject::new(
        "geography",
        LocalizedName::new("Geography", "भूगोल", "ਭੂਗੋਲ"),
    );
    pub const POLITICAL_SCIENCE: Subject = Subject::new(
        "politicalScience",
        LocalizedName::new("Political Science", "राजनीति विज्ञान", "ਰਾਜਨੀਤੀ ਸ਼ਾਸਤਰ"),
    );
    pub const PSYCHOLOGY: Subject = Subject::new(
        "psychology",
        LocalizedName::new("Psychology", "मनोविज्ञान", "ਮਨੋਵਿਗਿਆਨ"),
    );
    pub const SOCIOLOGY: Subject = Subject::new(
        "sociology",
        LocalizedName::new("Sociology", "समाजशास्त्र", "ਸਮਾਜ ਸ਼ਾਸਤਰ"),
    );
    pub const PHILOSOPHY: Subject = Subject::new(
        "philosophy",
        LocalizedName::new("Philosophy", "दर्शनशास्त्र", "ਦਰਸ਼ਨ ਸ਼ਾਸਤਰ"),
    );
    pub const PHYSICAL_EDUCATION: Subject = Subject::new(
        "physicalEducation",
        LocalizedName::new("Physical Education", "शारीरिक शिक्षा", "ਸਰੀਰਕ ਸਿੱਖਿਆ"),
    );
    pub const COMPUTER: Subject = Subject::new(
        "computer",
        LocalizedName::new("Computer", "कंप्यूटर", "ਕੰਪਿਊਟਰ"),
    );
    pub const GENERAL_KNOWLEDGE: Subject = Subject::new(
        "generalKnowledge",
        LocalizedName::new("General Knowledge", "सामान्य ज्ञान", "ਆਮ ਗਿਆਨ"),
    );
    pub const C_PROGRAMMING: Subject = Subject::new(
        "cProgramming",
        LocalizedName::new("C Programming", "सी प्रोग्रामिंग", "ਸੀ ਪ੍ਰੋਗਰਾਮਿੰਗ"),
    );
}

use subjects::*;

const SCIENCE_NAMES: LocalizedName = LocalizedName::new("Science", "विज्ञान", "ਵਿਗਿਆਨ");
const COMMERCE_NAMES: LocalizedName = LocalizedName::new("Commerce", "वाणिज्य", "ਵਪਾਰ");
const HUMANITIES_NAMES: LocalizedName = LocalizedName::new("Humanities", "मानविकी", "ਮਾਨਵਿਕੀ");

static CLASS_LEVELS: LazyLock<Vec<ClassLevel>> = LazyLock::new(build_class_levels);
static SCIENCE_SUB_STREAMS: LazyLock<Vec<SubStream>> = LazyLock::new(build_sub_streams);

/// All class levels in display order (Class 1 through Class 12).
#[must_use]
pub fn class_levels() -> &'static [ClassLevel] {
    &CLASS_LEVELS
}

#[must_use]
pub fn find_class(id: ClassLevelId) -> Option<&'static ClassLevel> {
    CLASS_LEVELS.iter().find(|c| c.id() == id)
}

/// Science sub-streams in display order (PCM, PCB, PCMB).
#[must_use]
pub fn science_sub_streams() -> &'static [SubStream] {
    &SCIENCE_SUB_STREAMS
}

#[must_use]
pub fn find_sub_stream(id: SubStreamId) -> Option<&'static SubStream> {
    SCIENCE_SUB_STREAMS.iter().find(|s| s.id() == id)
}

fn commerce(id: &'static str) -> Stream {
    Stream::new(
        id,
        COMMERCE_NAMES,
        vec![
            ENGLISH,
            ECONOMICS,
            BUSINESS_STUDIES,
            ACCOUNTANCY,
            GENERAL_KNOWLEDGE,
            PHYSICAL_EDUCATION,
        ],
    )
}

fn secondary_science(id: &'static str) -> Stream {
    Stream::new(
        id,
        SCIENCE_NAMES,
        vec![
            ENGLISH,
            PHYSICS,
            CHEMISTRY,
            MATHEMATICS,
            BIOLOGY,
            GENERAL_KNOWLEDGE,
            GEOGRAPHY,
            HISTORY,
            COMPUTER,
            PHYSICAL_EDUCATION,
        ],
    )
}

// Core subjects come from the sub-stream choice.
fn senior_science(id: &'static str) -> Stream {
    Stream::new(id, SCIENCE_NAMES, Vec::new())
        .with_extras(vec![C_PROGRAMMING, PHYSICAL_EDUCATION])
}

fn humanities(id: &'static str) -> Stream {
    Stream::new(
        id,
        HUMANITIES_NAMES,
        vec![
            ENGLISH,
            HISTORY,
            GEOGRAPHY,
            ECONOMICS,
            POLITICAL_SCIENCE,
            PSYCHOLOGY,
            SOCIOLOGY,
            PHILOSOPHY,
        ],
    )
    .with_extras(vec![PHYSICAL_EDUCATION])
}

fn build_class_levels() -> Vec<ClassLevel> {
    let mut levels: Vec<ClassLevel> = (1..=8)
        .map(|grade| {
            ClassLevel::with_subjects(
                grade,
                vec![ENGLISH, MATHEMATICS, SCIENCE, SOCIAL_SCIENCE, HINDI],
            )
        })
        .collect();

    levels.push(ClassLevel::with_streams(
        9,
        vec![commerce("commerce9"), secondary_science("science9")],
    ));
    levels.push(ClassLevel::with_streams(
        10,
        vec![commerce("commerce10"), secondary_science("science10")],
    ));
    levels.push(ClassLevel::with_streams(
        11,
        vec![
            senior_science("science11"),
            commerce("commerce11"),
            humanities("humanities11"),
        ],
    ));
    levels.push(ClassLevel::with_streams(
        12,
        vec![
            senior_science("science12"),
            commerce("commerce12"),
            humanities("humanities12"),
        ],
    ));

    levels
}

fn build_sub_streams() -> Vec<SubStream> {
    vec![
        SubStream::new(
            "pcm",
            LocalizedName::new(
                "PCM (Physics, Chemistry, Mathematics)",
                "PCM (भौतिकी, रसायन, गणित)",
                "PCM (ਭੌਤਿਕ ਵਿਗਿਆਨ, ਰਸਾਇਣ, ਗਣਿਤ)",
            ),
            vec![PHYSICS, CHEMISTRY, MATHEMATICS, ENGLISH],
        ),
        SubStream::new(
            "pcb",
            LocalizedName::new(
                "PCB (Physics, Chemistry, Biology)",
                "PCB (भौतिकी, रसायन, जीव विज्ञान)",
                "PCB (ਭੌਤਿਕ ਵਿਗਿਆਨ, ਰਸਾਇਣ, ਜੀਵ ਵਿਗਿਆਨ)",
            ),
            vec![PHYSICS, CHEMISTRY, BIOLOGY, ENGLISH],
        ),
        SubStream::new(
            "pcmb",
            LocalizedName::new(
                "PCMB (Physics, Chemistry, Mathematics, Biology)",
                "PCMB (भौतिकी, रसायन, गणित, जीव विज्ञान)",
                "PCMB (ਭੌਤਿਕ ਵਿਗਿਆਨ, ਰਸਾਇਣ, ਗਣਿਤ, ਜੀਵ ਵਿਗਿਆਨ)",
            ),
            vec![PHYSICS, CHEMISTRY, MATHEMATICS, BIOLOGY, ENGLISH],
        ),
    ]
}
