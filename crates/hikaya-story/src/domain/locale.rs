//! Localized interface text for the story form.

use serde::{Deserialize, Serialize};

/// Language the interface is displayed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiLanguage {
    /// Left-to-right English interface.
    #[default]
    English,
    /// Right-to-left Arabic interface.
    Arabic,
}

impl UiLanguage {
    /// Parses the hint a client sends alongside a story request.
    /// Accepts `"english"`/`"en"` and `"arabic"`/`"ar"`, case-insensitively.
    #[must_use]
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Some(Self::English),
            "arabic" | "ar" => Some(Self::Arabic),
            _ => None,
        }
    }

    /// The language matching a story's `is_arabic` flag.
    #[must_use]
    pub fn from_is_arabic(is_arabic: bool) -> Self {
        if is_arabic { Self::Arabic } else { Self::English }
    }

    /// The other language.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::English => Self::Arabic,
            Self::Arabic => Self::English,
        }
    }

    /// HTML `dir` attribute value.
    #[must_use]
    pub fn direction(self) -> &'static str {
        match self {
            Self::English => "ltr",
            Self::Arabic => "rtl",
        }
    }

    /// The localized text catalog.
    #[must_use]
    pub fn text(self) -> &'static UiText {
        match self {
            Self::English => &ENGLISH_TEXT,
            Self::Arabic => &ARABIC_TEXT,
        }
    }
}

/// Every user-visible string on the story page.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct UiText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form_title: &'static str,
    pub child_name: &'static str,
    pub child_placeholder: &'static str,
    pub animal: &'static str,
    pub animal_placeholder: &'static str,
    pub topic: &'static str,
    pub topic_placeholder: &'static str,
    pub generating: &'static str,
    pub create: &'static str,
    pub story_title: &'static str,
    pub new_story: &'static str,
    pub share: &'static str,
    /// Alert shown when generation fails.
    pub error: &'static str,
    /// Label of the toggle button, naming the language it switches to.
    pub toggle_label: &'static str,
}

static ENGLISH_TEXT: UiText = UiText {
    title: "Story Magic",
    subtitle: "Create magical personalized stories for your child in minutes",
    form_title: "Create Your Story",
    child_name: "Child's Name",
    child_placeholder: "Enter your child's name",
    animal: "Favorite Animal",
    animal_placeholder: "e.g., lion, giraffe, dolphin",
    topic: "Topic or Value",
    topic_placeholder: "e.g., honesty, courage, kindness",
    generating: "Creating Magic...",
    create: "Create Story",
    story_title: "Your Beautiful Story",
    new_story: "New",
    share: "Share",
    error: "Failed to generate story. Please try again.",
    toggle_label: "العربية",
};

static ARABIC_TEXT: UiText = UiText {
    title: "حكاية",
    subtitle: "اصنع قصصًا سحرية مخصصة لطفلك في دقائق",
    form_title: "اصنع قصتك",
    child_name: "اسم الطفل",
    child_placeholder: "أدخل اسم طفلك",
    animal: "الحيوان المفضل",
    animal_placeholder: "مثل أسد، زرافة، دلفين",
    topic: "الموضوع أو القيمة",
    topic_placeholder: "مثل الصدق، الشجاعة، اللطف",
    generating: "جاري الإنشاء...",
    create: "اصنع القصة",
    story_title: "قصتك الجميلة",
    new_story: "جديد",
    share: "مشاركة",
    error: "فشل إنشاء القصة. الرجاء المحاولة مرة أخرى.",
    toggle_label: "English",
};
