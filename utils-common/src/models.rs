use serde::{Deserialize, Serialize};

/// Newspaper section - the fixed set of categories an article can belong to.
///
/// The serialized form is the Arabic section label; that is what the page
/// markup, the stored data and the admin form all exchange.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Faculty news
    #[serde(rename = "أخبار الكلية")]
    News,
    /// Academic essays
    #[serde(rename = "مقالات أكاديمية")]
    Essays,
    /// Interviews
    #[serde(rename = "مقابلات")]
    Interviews,
    /// Cultural section
    #[serde(rename = "قسم ثقافي")]
    Culture,
    /// Administrative announcements
    #[serde(rename = "إعلانات")]
    Announcements,
}

impl Category {
    /// All categories, in navigation order.
    pub const ALL: [Category; 5] = [
        Category::News,
        Category::Essays,
        Category::Interviews,
        Category::Culture,
        Category::Announcements,
    ];

    /// Arabic section label (the canonical serialized form).
    pub fn label_ar(&self) -> &'static str {
        match self {
            Category::News => "أخبار الكلية",
            Category::Essays => "مقالات أكاديمية",
            Category::Interviews => "مقابلات",
            Category::Culture => "قسم ثقافي",
            Category::Announcements => "إعلانات",
        }
    }

    /// English section label for the bilingual navigation.
    pub fn label_en(&self) -> &'static str {
        match self {
            Category::News => "News",
            Category::Essays => "Articles",
            Category::Interviews => "Interviews",
            Category::Culture => "Culture",
            Category::Announcements => "Announcements",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label_ar())
    }
}

/// A catalog entry - one published item of the newspaper.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Article {
    /// Unique identifier, assigned at creation and never changed.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short summary shown on the card.
    pub excerpt: String,
    /// Full body text.
    pub content: String,
    /// Section the article belongs to.
    pub category: Category,
    /// Author display name.
    pub author: String,
    /// Publication date, ISO 8601 (`YYYY-MM-DD`). Assigned at creation
    /// and never changed by updates.
    pub date: String,
    /// Cover image URL.
    pub image: String,
    /// Free-text tags.
    pub tags: Vec<String>,
}

/// Urgency of an announcement.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnnouncementKind {
    #[serde(rename = "urgent")]
    Urgent,
    #[serde(rename = "normal")]
    Normal,
}

/// An academic announcement. Read-only; supplied with the seed dataset
/// and never mutated by the admin surface.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Announcement {
    /// Unique identifier.
    pub id: String,
    /// Announcement text.
    pub title: String,
    /// Display date string; not necessarily parseable.
    pub date: String,
    /// Urgency, drives the breaking-news ticker.
    #[serde(rename = "type")]
    pub kind: AnnouncementKind,
}

impl Announcement {
    pub fn is_urgent(&self) -> bool {
        self.kind == AnnouncementKind::Urgent
    }
}
