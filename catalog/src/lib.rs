use chrono::Utc;
use wasm_bindgen::prelude::*;
use web_sys::console;

use utils_common::models::Article;
use utils_common::Error;

pub mod admin;
mod ids;
pub mod seed;

use crate::admin::{AdminPanel, DraftFields};

/// Set up the panic hook when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Module version.
#[wasm_bindgen]
pub fn version() -> String {
    "1.2.0".to_string()
}

//===== Catalog =====

/// The live article collection, newest first. The admin surface is the
/// only writer; everything else reads snapshots.
#[derive(Debug, Clone)]
pub struct Catalog {
    articles: Vec<Article>,
    nonce: u32,
}

impl Catalog {
    /// A catalog over an explicit initial collection.
    pub fn new(articles: Vec<Article>) -> Catalog {
        Catalog { articles, nonce: 0 }
    }

    /// The catalog as it boots on the public site, filled from the seed
    /// dataset.
    pub fn seeded() -> Catalog {
        Catalog::new(seed::articles())
    }

    /// Snapshot of the full ordered collection. The caller owns the copy;
    /// mutating it never touches the catalog.
    pub fn list(&self) -> Vec<Article> {
        self.articles.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Insert a new entry at the front. The id is minted here and the
    /// date stamped with the current day unless the caller supplies one.
    pub fn add(&mut self, fields: DraftFields, date: Option<String>) -> Article {
        let id = self.mint_id();
        let date = date
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());

        let article = Article {
            id,
            title: fields.title,
            excerpt: fields.excerpt,
            content: fields.content,
            category: fields.category,
            author: fields.author,
            date,
            image: fields.image,
            tags: fields.tags,
        };

        self.articles.insert(0, article.clone());
        article
    }

    /// Replace the entry with the same id, keeping its position. The
    /// stored id and date win over whatever the incoming record carries.
    pub fn update(&mut self, article: Article) -> Result<(), Error> {
        match self.articles.iter_mut().find(|a| a.id == article.id) {
            Some(existing) => {
                *existing = Article {
                    id: existing.id.clone(),
                    date: existing.date.clone(),
                    ..article
                };
                Ok(())
            }
            None => Err(Error::NotFound(article.id)),
        }
    }

    /// Remove the entry with this id. Deleting an absent id is a no-op;
    /// the return value says whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.articles.len();
        self.articles.retain(|a| a.id != id);
        self.articles.len() != before
    }

    /// Mint an id no live entry uses: base36 of the current millisecond
    /// plus a session counter, re-rolled on the (unlikely) collision.
    fn mint_id(&mut self) -> String {
        loop {
            self.nonce = self.nonce.wrapping_add(1);
            let millis = Utc::now().timestamp_millis().unsigned_abs();
            let candidate = format!("{}{}", ids::base36(millis), ids::base36(self.nonce as u64));
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

//===== JS interface =====

/// The catalog and its admin surface as one stateful object held by the
/// page. All state is explicit in the instance; the module keeps no
/// globals.
#[wasm_bindgen]
pub struct CatalogJS {
    catalog: Catalog,
    panel: AdminPanel,
    authenticated: bool,
}

#[wasm_bindgen]
impl CatalogJS {
    /// Boot the catalog from the seed dataset.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CatalogJS {
        console_error_panic_hook::set_once();
        CatalogJS {
            catalog: Catalog::seeded(),
            panel: AdminPanel::new(),
            authenticated: false,
        }
    }

    /// The full ordered catalog, for rendering and for the filter module.
    pub fn articles(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.catalog.list())
            .map_err(|e| JsValue::from_str(&format!("failed to serialize catalog: {}", e)))
    }

    /// The academic announcements (read-only).
    pub fn announcements() -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&seed::announcements())
            .map_err(|e| JsValue::from_str(&format!("failed to serialize announcements: {}", e)))
    }

    /// The urgent announcements for the breaking-news ticker.
    pub fn urgent_announcements() -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&seed::urgent_announcements())
            .map_err(|e| JsValue::from_str(&format!("failed to serialize announcements: {}", e)))
    }

    /// Check the admin credential pair. The result is pass/fail only; the
    /// page shows its own generic rejection message.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        self.authenticated = admin::verify_credentials(email, password);
        if !self.authenticated {
            console::log_1(&JsValue::from_str("admin login rejected"));
        }
        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        self.panel.cancel();
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Open the create form.
    pub fn begin_create(&mut self) -> Result<(), JsValue> {
        self.require_admin()?;
        self.panel.open_new();
        Ok(())
    }

    /// Open an existing entry in the form.
    pub fn begin_edit(&mut self, id: &str) -> Result<(), JsValue> {
        self.require_admin()?;
        self.panel
            .open_edit(&self.catalog, id)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The open draft (tagged `new` / `editing`), or `null` in list mode.
    pub fn draft(&self) -> Result<JsValue, JsValue> {
        match self.panel.draft() {
            None => Ok(JsValue::NULL),
            Some(draft) => serde_wasm_bindgen::to_value(draft)
                .map_err(|e| JsValue::from_str(&format!("failed to serialize draft: {}", e))),
        }
    }

    /// Push the form contents into the open draft.
    pub fn edit_draft(&mut self, fields_json: &str) -> Result<(), JsValue> {
        self.require_admin()?;
        let fields: DraftFields = serde_json::from_str(fields_json)
            .map_err(|e| JsValue::from_str(&format!("failed to parse draft fields: {}", e)))?;
        if !self.panel.edit_draft(fields) {
            return Err(JsValue::from_str("لا توجد مسودة مفتوحة"));
        }
        Ok(())
    }

    /// Submit the open draft. Returns the committed article, or `null`
    /// when no draft was open; a validation failure is returned as an
    /// error for inline feedback and leaves the catalog untouched.
    pub fn submit(&mut self) -> Result<JsValue, JsValue> {
        self.require_admin()?;
        match self.panel.submit(&mut self.catalog) {
            Ok(None) => Ok(JsValue::NULL),
            Ok(Some(article)) => serde_wasm_bindgen::to_value(&article)
                .map_err(|e| JsValue::from_str(&format!("failed to serialize article: {}", e))),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    /// Discard the open draft.
    pub fn cancel(&mut self) -> Result<(), JsValue> {
        self.require_admin()?;
        self.panel.cancel();
        Ok(())
    }

    /// Delete an entry. Idempotent: deleting an absent id succeeds and
    /// reports `false`.
    pub fn delete(&mut self, id: &str) -> Result<bool, JsValue> {
        self.require_admin()?;
        Ok(self.catalog.delete(id))
    }

    fn require_admin(&self) -> Result<(), JsValue> {
        if self.authenticated {
            Ok(())
        } else {
            Err(JsValue::from_str("يجب تسجيل الدخول أولاً"))
        }
    }
}

impl Default for CatalogJS {
    fn default() -> Self {
        CatalogJS::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utils_common::models::Category;

    fn fields(title: &str) -> DraftFields {
        DraftFields {
            title: title.to_string(),
            excerpt: "موجز".to_string(),
            content: "محتوى".to_string(),
            category: Category::News,
            author: "هيئة التحرير".to_string(),
            image: "https://example.com/a.png".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn add_prepends_and_mints_a_fresh_id() {
        let mut catalog = Catalog::seeded();
        let seen: Vec<String> = catalog.list().into_iter().map(|a| a.id).collect();

        let added = catalog.add(fields("جديد"), None);

        assert_eq!(catalog.list()[0].id, added.id);
        assert!(!seen.contains(&added.id));
        assert_eq!(catalog.len(), seen.len() + 1);
        // The stamped date is a well-formed ISO day.
        assert!(chrono::NaiveDate::parse_from_str(&added.date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn add_respects_a_supplied_date() {
        let mut catalog = Catalog::new(Vec::new());
        let added = catalog.add(fields("مؤرخ"), Some("2023-02-01".to_string()));
        assert_eq!(added.date, "2023-02-01");
    }

    #[test]
    fn minted_ids_stay_unique_within_a_burst() {
        let mut catalog = Catalog::new(Vec::new());
        for i in 0..50 {
            catalog.add(fields(&format!("مادة {}", i)), None);
        }
        let mut ids: Vec<String> = catalog.list().into_iter().map(|a| a.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn update_replaces_in_place_and_pins_id_and_date() {
        let mut catalog = Catalog::seeded();
        let original = catalog.list()[2].clone();

        let mut incoming = original.clone();
        incoming.title = "بعد التعديل".to_string();
        incoming.date = "1999-01-01".to_string(); // must not stick

        catalog.update(incoming).unwrap();

        let updated = catalog.list()[2].clone();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.date, original.date);
        assert_eq!(updated.title, "بعد التعديل");
    }

    #[test]
    fn update_of_a_missing_id_is_rejected_without_mutation() {
        let mut catalog = Catalog::seeded();
        let before = catalog.list();

        let mut ghost = before[0].clone();
        ghost.id = "no-such-id".to_string();

        assert!(matches!(catalog.update(ghost), Err(Error::NotFound(_))));
        assert_eq!(catalog.list(), before);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut catalog = Catalog::seeded();
        let victim = catalog.list()[0].id.clone();

        assert!(catalog.delete(&victim));
        let after = catalog.list();

        // Second delete: no-op, collection untouched.
        assert!(!catalog.delete(&victim));
        assert_eq!(catalog.list(), after);
    }

    #[test]
    fn list_returns_an_independent_snapshot() {
        let catalog = Catalog::seeded();
        let mut snapshot = catalog.list();
        snapshot.clear();
        assert!(!catalog.is_empty());
    }
}
