//! Films endpoint response types and their mapping to movie records.
//!
//! The endpoint answers with `{"results": [{...}, ...], ...}` where each
//! result carries far more fields than the page uses. Only the four the
//! page shows are deserialized; everything else is ignored.

use serde::Deserialize;

use filmreel_core::movie::MovieRecord;
use filmreel_core::types::EpisodeId;

/// Top-level body of the films-listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct FilmsResponse {
    pub results: Vec<FilmData>,
}

/// One film as returned by the endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FilmData {
    pub episode_id: EpisodeId,
    pub title: String,
    pub opening_crawl: String,
    /// `YYYY-MM-DD`, passed through untouched.
    pub release_date: String,
}

impl From<FilmData> for MovieRecord {
    fn from(film: FilmData) -> Self {
        MovieRecord {
            id: film.episode_id,
            title: film.title,
            opening_text: film.opening_crawl,
            release_date: film.release_date,
        }
    }
}

impl FilmsResponse {
    /// Map every result, in response order, into a [`MovieRecord`].
    pub fn into_records(self) -> Vec<MovieRecord> {
        self.results.into_iter().map(MovieRecord::from).collect()
    }
}

/// Parse a raw films response body.
pub fn parse_films(text: &str) -> Result<FilmsResponse, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_FILMS: &str = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {
                "title": "A New Hope",
                "episode_id": 4,
                "opening_crawl": "It is a period of civil war.\r\nRebel spaceships...",
                "director": "George Lucas",
                "producer": "Gary Kurtz, Rick McCallum",
                "release_date": "1977-05-25",
                "characters": ["https://swapi.dev/api/people/1/"],
                "url": "https://swapi.dev/api/films/1/"
            },
            {
                "title": "The Empire Strikes Back",
                "episode_id": 5,
                "opening_crawl": "It is a dark time for the\r\nRebellion.",
                "director": "Irvin Kershner",
                "release_date": "1980-05-17"
            }
        ]
    }"#;

    #[test]
    fn parse_two_films_in_order() {
        let records = parse_films(TWO_FILMS).unwrap().into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 4);
        assert_eq!(records[0].title, "A New Hope");
        assert_eq!(records[1].id, 5);
        assert_eq!(records[1].title, "The Empire Strikes Back");
    }

    #[test]
    fn crawl_and_date_are_verbatim() {
        let records = parse_films(TWO_FILMS).unwrap().into_records();
        assert_eq!(
            records[0].opening_text,
            "It is a period of civil war.\r\nRebel spaceships..."
        );
        assert_eq!(records[0].release_date, "1977-05-25");
        assert_eq!(records[1].release_date, "1980-05-17");
    }

    #[test]
    fn empty_results_is_empty_list() {
        let records = parse_films(r#"{"results":[]}"#).unwrap().into_records();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_results_is_an_error() {
        assert!(parse_films(r#"{"detail":"Not found"}"#).is_err());
    }

    #[test]
    fn missing_film_field_is_an_error() {
        let json = r#"{"results":[{"title":"A New Hope","episode_id":4,"release_date":"1977-05-25"}]}"#;
        assert!(parse_films(json).is_err());
    }

    #[test]
    fn parse_invalid_json_returns_error() {
        assert!(parse_films("<html>502 Bad Gateway</html>").is_err());
    }
}
