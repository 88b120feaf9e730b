use thiserror::Error;

/// The error taxonomy shared by the newspaper modules.
///
/// None of these is fatal: validation and not-found are recovered at the
/// admin surface, storage and malformed-data degrade to in-memory defaults,
/// and external-service failures resolve to a fallback string before they
/// reach the page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A draft failed the admin validation gate. No mutation was performed.
    #[error("التحقق من الحقول فشل: {0}")]
    Validation(String),

    /// An update or lookup referenced an id that is not in the catalog.
    #[error("لا توجد مادة بالمعرف {0}")]
    NotFound(String),

    /// Device storage refused a read or write. In-memory state stays
    /// authoritative for the session.
    #[error("تعذر الوصول إلى التخزين المحلي: {0}")]
    Storage(String),

    /// Persisted data did not decode. The caller falls back to defaults.
    #[error("بيانات محفوظة تالفة: {0}")]
    MalformedData(String),

    /// The external summary service failed or returned an unusable response.
    #[error("فشل الاتصال بالخدمة الخارجية: {0}")]
    External(String),
}
