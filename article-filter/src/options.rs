use utils_common::models::Article;

use crate::models::FilterOptions;

impl FilterOptions {
    /// Walk the catalog once and collect the values the filter controls
    /// offer: every distinct author and every distinct tag, each in the
    /// order it first appears.
    pub fn derive(articles: &[Article]) -> FilterOptions {
        let mut options = FilterOptions::default();

        for article in articles {
            if !options.authors.iter().any(|a| a == &article.author) {
                options.authors.push(article.author.clone());
            }
            for tag in &article.tags {
                if !options.tags.iter().any(|t| t == tag) {
                    options.tags.push(tag.clone());
                }
            }
        }

        options
    }
}
