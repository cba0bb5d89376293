use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::{
    db::SearchHit,
    include_res,
    res::{self, escape},
};

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl SearchResults {
    pub fn new(search_term: String, data: Vec<SearchHit>) -> Self {
        Self { search_term, count: data.len(), data }
    }

    /// `kind` is the path segment the hits link under, `venues` or `artists`.
    pub fn render(&self, kind: &str, flashes: &[String]) -> Response {
        let results: String = self.data.iter()
            .map(|hit| {
                include_res!(str, "/pages/search_item.html")
                    .replace("{kind}", kind)
                    .replace("{id}", &hit.id.to_string())
                    .replace("{name}", &escape(&hit.name))
            })
            .collect();

        let content = include_res!(str, "/pages/search.html")
            .replace("{search_term}", &escape(&self.search_term))
            .replace("{count}", &self.count.to_string())
            .replace("{results}", &results);

        Html(res::page("Search", &content, flashes)).into_response()
    }
}
