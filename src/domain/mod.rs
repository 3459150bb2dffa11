//! Domain types for the film catalog.

pub mod film;

pub use film::{
    Film, FilmValidationError, NewFilm, DIRECTOR_MAX_LEN, GENRE_MAX_LEN, TITLE_MAX_LEN,
};
