//! Static string table for the three supported locales.
//!
//! Lookups never fail: an unmapped key is returned unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Hindi,
    Punjabi,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::English, Locale::Hindi, Locale::Punjabi];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Punjabi => "punjabi",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिंदी",
            Self::Punjabi => "ਪੰਜਾਬੀ",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale: {0} (expected english, hindi or punjabi)")]
pub struct ParseLocaleError(String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "hindi" | "hi" => Ok(Self::Hindi),
            "punjabi" | "pa" => Ok(Self::Punjabi),
            _ => Err(ParseLocaleError(s.to_string())),
        }
    }
}

/// Look up `key` for `locale`, falling back to the key itself.
#[must_use]
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    table(locale)
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, v)| *v)
}

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::English => ENGLISH,
        Locale::Hindi => HINDI,
        Locale::Punjabi => PUNJABI,
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("welcome", "Welcome to ApexMind"),
    ("subtitle", "Digital Learning Platform for Rural Students and Teachers"),
    (
        "description",
        "ApexMind empowers rural students with quality education through offline-first technology. Access comprehensive lessons, interactive quizzes, and track your progress - all without reliable internet connection.",
    ),
    ("howToUse", "How to Use ApexMind"),
    ("step1", "Choose your preferred language"),
    ("step2", "Select Student or Teacher view"),
    ("step3", "Pick your class (1-12)"),
    ("step4", "Choose your subjects and start learning"),
    ("getStarted", "Get Started"),
    ("studentView", "Student View"),
    ("teacherView", "Teacher View"),
    ("selectClass", "Select Your Class"),
    ("subjects", "Subjects"),
    ("selectStream", "Select Stream"),
    ("science", "Science"),
    ("commerce", "Commerce"),
    ("humanities", "Humanities"),
    ("pcm", "PCM (Physics, Chemistry, Mathematics)"),
    ("pcb", "PCB (Physics, Chemistry, Biology)"),
    ("pcmb", "PCMB (Physics, Chemistry, Mathematics, Biology)"),
    ("extraSubjects", "Extra Subjects"),
    ("computerProgramming", "Computer Programming (C Language)"),
    ("physicalEducation", "Physical Education"),
    ("takeQuiz", "Take Quiz"),
    ("progress", "Progress"),
    ("completed", "Completed"),
    ("inProgress", "In Progress"),
    ("notStarted", "Not Started"),
];

const HINDI: &[(&str, &str)] = &[
    ("welcome", "ApexMind में आपका स्वागत है"),
    ("subtitle", "ग्रामीण छात्रों और शिक्षकों के लिए डिजिटल लर्निंग प्लेटफॉर्म"),
    (
        "description",
        "ApexMind ऑफलाइन-फर्स्ट तकनीक के माध्यम से ग्रामीण छात्रों को गुणवत्तापूर्ण शिक्षा प्रदान करता है। व्यापक पाठ, इंटरैक्टिव क्विज़ का उपयोग करें और अपनी प्रगति को ट्रैक करें - सभी बिना विश्वसनीय इंटरनेट कनेक्शन के।",
    ),
    ("howToUse", "ApexMind का उपयोग कैसे करें"),
    ("step1", "अपनी पसंदीदा भाषा चुनें"),
    ("step2", "छात्र या शिक्षक दृश्य चुनें"),
    ("step3", "अपनी कक्षा चुनें (1-12)"),
    ("step4", "अपने विषय चुनें और सीखना शुरू करें"),
    ("getStarted", "शुरू करें"),
    ("studentView", "छात्र दृश्य"),
    ("teacherView", "शिक्षक दृश्य"),
    ("selectClass", "अपनी कक्षा चुनें"),
    ("subjects", "विषय"),
    ("selectStream", "स्ट्रीम चुनें"),
    ("science", "विज्ञान"),
    ("commerce", "वाणिज्य"),
    ("humanities", "मानविकी"),
    ("pcm", "PCM (भौतिकी, रसायन, गणित)"),
    ("pcb", "PCB (भौतिकी, रसायन, जीव विज्ञान)"),
    ("pcmb", "PCMB (भौतिकी, रसायन, गणित, जीव विज्ञान)"),
    ("extraSubjects", "अतिरिक्त विषय"),
    ("computerProgramming", "कंप्यूटर प्रोग्रामिंग (C भाषा)"),
    ("physicalEducation", "शारीरिक शिक्षा"),
    ("takeQuiz", "क्विज़ लें"),
    ("progress", "प्रगति"),
    ("completed", "पूर्ण"),
    ("inProgress", "प्रगति में"),
    ("notStarted", "शुरू नहीं हुआ"),
];

const PUNJABI: &[(&str, &str)] = &[
    ("welcome", "ApexMind ਵਿੱਚ ਤੁਹਾਡਾ ਸੁਆਗਤ ਹੈ"),
    ("subtitle", "ਪੇਂਡੂ ਵਿਦਿਆਰਥੀਆਂ ਅਤੇ ਅਧਿਆਪਕਾਂ ਲਈ ਡਿਜੀਟਲ ਸਿੱਖਿਆ ਪਲੇਟਫਾਰਮ"),
    (
        "description",
        "ApexMind ਆਫਲਾਈਨ-ਫਰਸਟ ਤਕਨਾਲੋਜੀ ਰਾਹੀਂ ਪੇਂਡੂ ਵਿਦਿਆਰਥੀਆਂ ਨੂੰ ਗੁਣਵੱਤਾ ਵਾਲੀ ਸਿੱਖਿਆ ਪ੍ਰਦਾਨ ਕਰਦਾ ਹੈ। ਵਿਆਪਕ ਪਾਠ, ਇੰਟਰਐਕਟਿਵ ਕਵਿਜ਼ਾਂ ਤੱਕ ਪਹੁੰਚ ਕਰੋ ਅਤੇ ਆਪਣੀ ਪ੍ਰਗਤੀ ਨੂੰ ਟਰੈਕ ਕਰੋ - ਸਭ ਕੁਝ ਭਰੋਸੇਮੰਦ ਇੰਟਰਨੈੱਟ ਕਨੈਕਸ਼ਨ ਤੋਂ ਬਿਨਾਂ।",
    ),
    ("howToUse", "ApexMind ਦੀ ਵਰਤੋਂ ਕਿਵੇਂ ਕਰੀਏ"),
    ("step1", "ਆਪਣੀ ਪਸੰਦੀਦਾ ਭਾਸ਼ਾ ਚੁਣੋ"),
    ("step2", "ਵਿਦਿਆਰਥੀ ਜਾਂ ਅਧਿਆਪਕ ਦਰਸ਼ਨ ਚੁਣੋ"),
    ("step3", "ਆਪਣੀ ਜਮਾਤ ਚੁਣੋ (1-12)"),
    ("step4", "ਆਪਣੇ ਵਿਸ਼ੇ ਚੁਣੋ ਅਤੇ ਸਿੱਖਣਾ ਸ਼ੁਰੂ ਕਰੋ"),
    ("getStarted", "ਸ਼ੁਰੂ ਕਰੋ"),
    ("studentView", "ਵਿਦਿਆਰਥੀ ਦਰਸ਼ਨ"),
    ("teacherView", "ਅਧਿਆਪਕ ਦਰਸ਼ਨ"),
    ("selectClass", "ਆਪਣੀ ਜਮਾਤ ਚੁਣੋ"),
    ("subjects", "ਵਿਸ਼ੇ"),
    ("selectStream", "ਸਟਰੀਮ ਚੁਣੋ"),
    ("science", "ਵਿਗਿਆਨ"),
    ("commerce", "ਵਪਾਰ"),
    ("humanities", "ਮਾਨਵਿਕੀ"),
    ("pcm", "PCM (ਭੌਤਿਕ ਵਿਗਿਆਨ, ਰਸਾਇਣ, ਗਣਿਤ)"),
    ("pcb", "PCB (ਭੌਤਿਕ ਵਿਗਿਆਨ, ਰਸਾਇਣ, ਜੀਵ ਵਿਗਿਆਨ)"),
    ("pcmb", "PCMB (ਭੌਤਿਕ ਵਿਗਿਆਨ, ਰਸਾਇਣ, ਗਣਿਤ, ਜੀਵ ਵਿਗਿਆਨ)"),
    ("extraSubjects", "ਵਾਧੂ ਵਿਸ਼ੇ"),
    ("computerProgramming", "ਕੰਪਿਊਟਰ ਪ੍ਰੋਗਰਾਮਿੰਗ (C ਭਾਸ਼ਾ)"),
    ("physicalEducation", "ਸਰੀਰਕ ਸਿੱਖਿਆ"),
    ("takeQuiz", "ਕਵਿਜ਼ ਲਓ"),
    ("progress", "ਪ੍ਰਗਤੀ"),
    ("completed", "ਪੂਰਾ"),
    ("inProgress", "ਪ੍ਰਗਤੀ ਵਿੱਚ"),
    ("notStarted", "ਸ਼ੁਰੂ ਨਹੀਂ ਹੋਇਆ"),
];
