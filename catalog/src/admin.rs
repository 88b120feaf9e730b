//! The admin surface: draft records, the List/Edit state machine, the
//! validation gate and the credential check.

use serde::{Deserialize, Serialize};

use utils_common::models::{Article, Category};
use utils_common::Error;

use crate::Catalog;

/// Fixed admin credential pair. This gate only hides the panel from casual
/// visitors; it is not a security boundary, anyone reading the module can
/// extract it.
pub const ADMIN_EMAIL: &str = "admin@daawa.ly";
pub const ADMIN_PASSWORD: &str = "daawa2024";

/// Cover image used when the draft leaves the field blank.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/800/450";

/// Check the credential pair. Returns only pass/fail; the rejection never
/// says which half was wrong.
pub fn verify_credentials(email: &str, password: &str) -> bool {
    email == ADMIN_EMAIL && password == ADMIN_PASSWORD
}

/// The editable fields of a draft record. Everything an admin types into
/// the form; id and date are never part of it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DraftFields {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub author: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl Default for DraftFields {
    /// The empty form: blank required fields, default section, no image.
    fn default() -> Self {
        DraftFields {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: Category::News,
            author: String::new(),
            image: String::new(),
            tags: Vec::new(),
        }
    }
}

impl DraftFields {
    /// The validation gate: title, excerpt, content and author must be
    /// non-empty after trimming. Nothing is coerced; a failing draft is
    /// rejected before any catalog mutation.
    pub fn validate(&self) -> Result<(), Error> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("العنوان");
        }
        if self.excerpt.trim().is_empty() {
            missing.push("الموجز");
        }
        if self.content.trim().is_empty() {
            missing.push("المحتوى");
        }
        if self.author.trim().is_empty() {
            missing.push("الكاتب");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(missing.join("، ")))
        }
    }

    /// Apply the defaults a submit fills in: a blank image becomes the
    /// placeholder URL.
    pub fn normalized(mut self) -> DraftFields {
        if self.image.trim().is_empty() {
            self.image = PLACEHOLDER_IMAGE.to_string();
        }
        self
    }
}

/// An in-progress admin record. The create-vs-update branch is carried in
/// the variant, not inferred from a missing id; `Editing` keeps the
/// immutable id and date next to the editable fields.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Draft {
    New(DraftFields),
    Editing {
        id: String,
        date: String,
        fields: DraftFields,
    },
}

impl Draft {
    /// Start editing an existing catalog entry.
    pub fn from_article(article: &Article) -> Draft {
        Draft::Editing {
            id: article.id.clone(),
            date: article.date.clone(),
            fields: DraftFields {
                title: article.title.clone(),
                excerpt: article.excerpt.clone(),
                content: article.content.clone(),
                category: article.category,
                author: article.author.clone(),
                image: article.image.clone(),
                tags: article.tags.clone(),
            },
        }
    }

    pub fn fields(&self) -> &DraftFields {
        match self {
            Draft::New(fields) => fields,
            Draft::Editing { fields, .. } => fields,
        }
    }

    pub fn fields_mut(&mut self) -> &mut DraftFields {
        match self {
            Draft::New(fields) => fields,
            Draft::Editing { fields, .. } => fields,
        }
    }
}

/// The two modes of the admin surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Browsing the catalog list.
    List,
    /// A draft is open in the form.
    Edit(Draft),
}

/// The admin panel state machine. It owns the draft; the catalog is passed
/// in explicitly for the transitions that touch it.
#[derive(Debug)]
pub struct AdminPanel {
    mode: Mode,
}

impl AdminPanel {
    pub fn new() -> AdminPanel {
        AdminPanel { mode: Mode::List }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The draft currently open in the form, if any.
    pub fn draft(&self) -> Option<&Draft> {
        match &self.mode {
            Mode::List => None,
            Mode::Edit(draft) => Some(draft),
        }
    }

    /// List -> Edit with an empty create form.
    pub fn open_new(&mut self) {
        self.mode = Mode::Edit(Draft::New(DraftFields::default()));
    }

    /// List -> Edit with a copy of an existing entry.
    pub fn open_edit(&mut self, catalog: &Catalog, id: &str) -> Result<(), Error> {
        let article = catalog
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        self.mode = Mode::Edit(Draft::from_article(article));
        Ok(())
    }

    /// Replace the fields of the open draft with what the form holds now.
    /// Returns `false` (and changes nothing) when no draft is open.
    pub fn edit_draft(&mut self, fields: DraftFields) -> bool {
        match &mut self.mode {
            Mode::List => false,
            Mode::Edit(draft) => {
                *draft.fields_mut() = fields;
                true
            }
        }
    }

    /// Edit -> List on submit. Validates first; a rejected draft stays
    /// open and the catalog is untouched. On success the committed article
    /// is returned. Submitting with no open draft is a no-op.
    pub fn submit(&mut self, catalog: &mut Catalog) -> Result<Option<Article>, Error> {
        let draft = match &self.mode {
            Mode::List => return Ok(None),
            Mode::Edit(draft) => draft.clone(),
        };

        draft.fields().validate()?;

        let committed = match draft {
            Draft::New(fields) => catalog.add(fields.normalized(), None),
            Draft::Editing { id, date, fields } => {
                let fields = fields.normalized();
                let article = Article {
                    id,
                    date,
                    title: fields.title,
                    excerpt: fields.excerpt,
                    content: fields.content,
                    category: fields.category,
                    author: fields.author,
                    image: fields.image,
                    tags: fields.tags,
                };
                catalog.update(article.clone())?;
                article
            }
        };

        self.mode = Mode::List;
        Ok(Some(committed))
    }

    /// Edit -> List on cancel: the draft is discarded unconditionally.
    pub fn cancel(&mut self) {
        self.mode = Mode::List;
    }
}

impl Default for AdminPanel {
    fn default() -> Self {
        AdminPanel::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_fields() -> DraftFields {
        DraftFields {
            title: "افتتاح المعرض السنوي للكتاب".to_string(),
            excerpt: "انطلاق فعاليات المعرض بمشاركة واسعة".to_string(),
            content: "شهدت قاعة الكلية انطلاق فعاليات المعرض السنوي للكتاب.".to_string(),
            category: Category::Culture,
            author: "أ. فاطمة بن عامر".to_string(),
            image: String::new(),
            tags: vec!["معرض".to_string()],
        }
    }

    #[test]
    fn credentials_require_both_halves() {
        assert!(verify_credentials(ADMIN_EMAIL, ADMIN_PASSWORD));
        assert!(!verify_credentials(ADMIN_EMAIL, "wrong"));
        assert!(!verify_credentials("wrong@daawa.ly", ADMIN_PASSWORD));
        assert!(!verify_credentials("", ""));
    }

    #[test]
    fn validation_rejects_blank_required_fields() {
        let mut fields = filled_fields();
        fields.title = "   ".to_string();
        assert!(matches!(fields.validate(), Err(Error::Validation(_))));

        assert!(filled_fields().validate().is_ok());
    }

    #[test]
    fn rejected_submit_never_touches_the_catalog() {
        let mut catalog = Catalog::new(Vec::new());
        let mut panel = AdminPanel::new();

        panel.open_new();
        let mut fields = filled_fields();
        fields.title = String::new();
        panel.edit_draft(fields);

        let err = panel.submit(&mut catalog).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(catalog.len(), 0);
        // The draft stays open for correction.
        assert!(panel.draft().is_some());
    }

    #[test]
    fn submitting_a_new_draft_prepends_with_minted_id_and_date() {
        let mut catalog = Catalog::seeded();
        let before = catalog.len();
        let mut panel = AdminPanel::new();

        panel.open_new();
        panel.edit_draft(filled_fields());
        let committed = panel.submit(&mut catalog).unwrap().unwrap();

        assert_eq!(catalog.len(), before + 1);
        assert_eq!(catalog.list()[0].id, committed.id);
        assert!(!committed.id.is_empty());
        assert_eq!(committed.image, PLACEHOLDER_IMAGE);
        // Back to the list after a successful submit.
        assert_eq!(*panel.mode(), Mode::List);
    }

    #[test]
    fn editing_preserves_id_date_and_position() {
        let mut catalog = Catalog::seeded();
        let target = catalog.list()[1].clone();
        let mut panel = AdminPanel::new();

        panel.open_edit(&catalog, &target.id).unwrap();
        let mut fields = filled_fields();
        fields.title = "عنوان معدل".to_string();
        panel.edit_draft(fields);
        let committed = panel.submit(&mut catalog).unwrap().unwrap();

        assert_eq!(committed.id, target.id);
        assert_eq!(committed.date, target.date);
        let listed = catalog.list();
        assert_eq!(listed[1].id, target.id);
        assert_eq!(listed[1].title, "عنوان معدل");
    }

    #[test]
    fn open_edit_of_a_missing_id_is_rejected() {
        let catalog = Catalog::seeded();
        let mut panel = AdminPanel::new();
        assert!(matches!(
            panel.open_edit(&catalog, "no-such-id"),
            Err(Error::NotFound(_))
        ));
        assert_eq!(*panel.mode(), Mode::List);
    }

    #[test]
    fn cancel_discards_the_draft_without_mutation() {
        let mut catalog = Catalog::seeded();
        let before = catalog.list();
        let mut panel = AdminPanel::new();

        panel.open_new();
        panel.edit_draft(filled_fields());
        panel.cancel();

        assert_eq!(*panel.mode(), Mode::List);
        assert_eq!(catalog.list(), before);
    }

    #[test]
    fn submit_with_no_open_draft_is_a_no_op() {
        let mut catalog = Catalog::seeded();
        let before = catalog.list();
        let mut panel = AdminPanel::new();

        assert_eq!(panel.submit(&mut catalog).unwrap(), None);
        assert_eq!(catalog.list(), before);
    }

    #[test]
    fn edit_draft_without_an_open_form_changes_nothing() {
        let mut panel = AdminPanel::new();
        assert!(!panel.edit_draft(filled_fields()));
        assert_eq!(*panel.mode(), Mode::List);
    }
}
