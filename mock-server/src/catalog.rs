//! Seed data served by the mock.
//!
//! The fixture titles the scenarios reference are always present. Filler
//! titles pad the catalog past one page so pagination has something to
//! split.

use serde::Serialize;
use serde_json::{json, Value};

pub const ACCOUNT_ID: u64 = 22_644_815;
pub const PAGE_SIZE: usize = 20;
const FILLER_TITLES: u64 = 40;

#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub release_date: String,
    pub vote_average: f64,
    pub vote_count: u64,
    pub popularity: f64,
    pub genre_ids: Vec<u64>,
    pub adult: bool,
    pub poster_path: Option<String>,
}

impl Movie {
    fn new(id: u64, title: &str, release_date: &str, vote_average: f64, popularity: f64, genre_ids: &[u64]) -> Self {
        Self {
            id,
            title: title.to_string(),
            original_title: title.to_string(),
            overview: format!("Overview of {title}."),
            release_date: release_date.to_string(),
            vote_average,
            vote_count: (vote_average * 1000.0) as u64,
            popularity,
            genre_ids: genre_ids.to_vec(),
            adult: false,
            poster_path: Some(format!("/{id}.jpg")),
        }
    }

    /// List representation, as used inside paginated `results`.
    pub fn summary(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// `/movie/{id}` representation: genre ids expanded to objects.
    pub fn details(&self, genres: &[Genre]) -> Value {
        let mut value = self.summary();
        let expanded: Vec<&Genre> = genres
            .iter()
            .filter(|g| self.genre_ids.contains(&g.id))
            .collect();
        value["genres"] = json!(expanded);
        value["runtime"] = json!(120);
        value["status"] = json!("Released");
        value
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TvShow {
    pub id: u64,
    pub name: String,
    pub original_name: String,
    pub overview: String,
    pub first_air_date: String,
    pub vote_average: f64,
    pub vote_count: u64,
    pub popularity: f64,
}

impl TvShow {
    fn new(id: u64, name: &str, first_air_date: &str, vote_average: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            original_name: name.to_string(),
            overview: format!("Overview of {name}."),
            first_air_date: first_air_date.to_string(),
            vote_average,
            vote_count: (vote_average * 500.0) as u64,
            popularity: vote_average * 10.0,
        }
    }

    pub fn summary(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Everything the mock knows that never changes.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub tv: Vec<TvShow>,
    pub people: Vec<Value>,
    pub collections: Vec<Value>,
    pub keywords: Vec<Value>,
    pub companies: Vec<Value>,
    pub movie_genres: Vec<Genre>,
    pub tv_genres: Vec<Genre>,
}

impl Catalog {
    pub fn seeded() -> Self {
        let mut movies = vec![
            Movie::new(278, "The Shawshank Redemption", "1994-09-23", 8.7, 120.5, &[18, 80]),
            Movie::new(238, "The Godfather", "1972-03-14", 8.7, 110.1, &[18, 80]),
            Movie::new(155, "The Dark Knight", "2008-07-16", 8.5, 130.9, &[18, 28, 80, 53]),
            Movie::new(27205, "Inception", "2010-07-15", 8.4, 140.2, &[28, 878, 12]),
            Movie::new(680, "Pulp Fiction", "1994-09-10", 8.5, 90.7, &[53, 80]),
            Movie::new(13, "Forrest Gump", "1994-06-23", 8.5, 85.3, &[35, 18, 10749]),
            Movie::new(603, "The Matrix", "1999-03-31", 8.2, 95.4, &[28, 878]),
            Movie::new(11, "Star Wars", "1977-05-25", 8.2, 100.8, &[12, 28, 878]),
        ];
        for i in 0..FILLER_TITLES {
            let vote = 7.9 - (i as f64) * 0.1;
            movies.push(Movie::new(
                900_000 + i,
                &format!("Catalog Feature {}", i + 1),
                &format!("20{:02}-01-{:02}", 10 + i % 15, 1 + i % 28),
                vote.max(1.0),
                50.0 - i as f64,
                &[18],
            ));
        }

        let tv = vec![
            TvShow::new(1399, "Game of Thrones", "2011-04-17", 8.4),
            TvShow::new(1396, "Breaking Bad", "2008-01-20", 8.9),
            TvShow::new(1855, "Star Trek: Voyager", "1995-01-16", 7.9),
        ];

        let people = vec![
            json!({"id": 31, "name": "Tom Hanks", "known_for_department": "Acting", "popularity": 60.1}),
            json!({"id": 6193, "name": "Leonardo DiCaprio", "known_for_department": "Acting", "popularity": 55.2}),
            json!({"id": 4, "name": "Carrie Fisher", "known_for_department": "Acting", "popularity": 20.4}),
            json!({"id": 1, "name": "Ringo Starr", "known_for_department": "Sound", "popularity": 5.2}),
        ];

        let collections = vec![
            json!({"id": 10, "name": "Star Wars Collection", "overview": "An epic space saga."}),
            json!({"id": 263, "name": "The Dark Knight Collection", "overview": "Batman in Gotham."}),
        ];
        let keywords = vec![
            json!({"id": 9882, "name": "space"}),
            json!({"id": 4565, "name": "dystopia"}),
            json!({"id": 3737, "name": "dream"}),
        ];
        let companies = vec![
            json!({"id": 1, "name": "Lucasfilm Ltd.", "origin_country": "US"}),
            json!({"id": 923, "name": "Legendary Pictures", "origin_country": "US"}),
            json!({"id": 174, "name": "Warner Bros. Pictures", "origin_country": "US"}),
        ];

        let movie_genres = [
            (28, "Action"),
            (12, "Adventure"),
            (16, "Animation"),
            (35, "Comedy"),
            (80, "Crime"),
            (99, "Documentary"),
            (18, "Drama"),
            (10751, "Family"),
            (14, "Fantasy"),
            (27, "Horror"),
            (10749, "Romance"),
            (878, "Science Fiction"),
            (53, "Thriller"),
        ]
        .into_iter()
        .map(|(id, name)| Genre { id, name: name.to_string() })
        .collect();

        let tv_genres = [
            (10759, "Action & Adventure"),
            (16, "Animation"),
            (35, "Comedy"),
            (80, "Crime"),
            (18, "Drama"),
            (10765, "Sci-Fi & Fantasy"),
        ]
        .into_iter()
        .map(|(id, name)| Genre { id, name: name.to_string() })
        .collect();

        Self {
            movies,
            tv,
            people,
            collections,
            keywords,
            companies,
            movie_genres,
            tv_genres,
        }
    }

    pub fn movie(&self, id: u64) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn tv_show(&self, id: u64) -> Option<&TvShow> {
        self.tv.iter().find(|t| t.id == id)
    }

    pub fn credits(&self, movie: &Movie) -> Value {
        let cast: Vec<Value> = ["Lead", "Partner", "Rival"]
            .iter()
            .enumerate()
            .map(|(order, role)| {
                json!({
                    "id": movie.id * 10 + order as u64,
                    "name": format!("{role} Actor of {}", movie.title),
                    "character": format!("The {role}"),
                    "order": order,
                    "known_for_department": "Acting"
                })
            })
            .collect();
        json!({
            "id": movie.id,
            "cast": cast,
            "crew": [
                {"id": movie.id * 10 + 7, "name": "Director Person", "job": "Director", "department": "Directing"},
                {"id": movie.id * 10 + 8, "name": "Writer Person", "job": "Screenplay", "department": "Writing"}
            ]
        })
    }

    pub fn account(&self) -> Value {
        json!({
            "avatar": {
                "gravatar": {"hash": "c9e9fc152ee756a900db85757c29815d"},
                "tmdb": {"avatar_path": null}
            },
            "id": ACCOUNT_ID,
            "iso_639_1": "en",
            "iso_3166_1": "US",
            "name": "",
            "include_adult": false,
            "username": "contract-tester"
        })
    }
}

/// Slice `items` into TMDB's page envelope. `page` is already validated.
pub fn paginate(items: Vec<Value>, page: usize) -> Value {
    let total_results = items.len();
    let total_pages = total_results.div_ceil(PAGE_SIZE).max(1);
    let results: Vec<Value> = items
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();
    json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": total_results
    })
}
