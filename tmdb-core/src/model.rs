use serde::Deserialize;

/// Caller-side parameters shared by the popular/upcoming listings.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub page: u32,
    pub language: Option<String>,
    pub region: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, language: None, region: None }
    }
}

/// One entry of a `results` array from the list-style endpoints.
///
/// `id` and `title` must be present; a row without them is a decode error.
/// Everything else the API may omit, and the renderer substitutes defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// Response body of `/movie/{id}`. Every field is optional from our side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieDetail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub overview: Option<String>,
}

/// One page of a paginated listing. An absent `results` key means no matches.
#[derive(Debug, Clone, Deserialize)]
pub struct MoviePage {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
}

fn default_page() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_when_results_absent() {
        let page: MoviePage = serde_json::from_str("{}").expect("empty object must decode");
        assert_eq!(page.page, 1);
        assert!(page.results.is_empty());
    }

    #[test]
    fn summary_tolerates_missing_optional_fields() {
        let json = r#"{"results":[{"id":27205,"title":"Inception"}]}"#;
        let page: MoviePage = serde_json::from_str(json).expect("row must decode");

        let movie = &page.results[0];
        assert_eq!(movie.id, 27205);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.vote_average, None);
    }

    #[test]
    fn summary_without_title_is_a_decode_error() {
        let json = r#"{"results":[{"id":27205}]}"#;
        let err = serde_json::from_str::<MoviePage>(json).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn summary_keeps_release_date_and_rating() {
        let json = r#"{"id":27205,"title":"Inception","release_date":"2010-07-15","vote_average":8.364}"#;
        let movie: MovieSummary = serde_json::from_str(json).expect("row must decode");
        assert_eq!(movie.release_date.as_deref(), Some("2010-07-15"));
        assert_eq!(movie.vote_average, Some(8.364));
    }

    #[test]
    fn detail_defaults_every_field() {
        let movie: MovieDetail = serde_json::from_str("{}").expect("empty object must decode");
        assert_eq!(movie.title, None);
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.vote_average, None);
        assert_eq!(movie.vote_count, 0);
        assert_eq!(movie.overview, None);
    }
}
