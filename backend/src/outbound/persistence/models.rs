//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions to and from the domain records
//! live next to each row type.

use diesel::prelude::*;

use crate::domain::{Movie, ResourceId, Stored, User};

use super::schema::{movies, users};

/// Row struct for reading from the movies table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MovieRow {
    pub id: i32,
    pub title: String,
    pub director: String,
    pub year: String,
    pub color: String,
    pub duration: i32,
}

impl From<MovieRow> for Stored<Movie> {
    fn from(row: MovieRow) -> Self {
        Stored::new(
            ResourceId::new(row.id),
            Movie {
                title: row.title,
                director: row.director,
                year: row.year,
                color: row.color,
                duration: row.duration,
            },
        )
    }
}

/// Insertable and changeset struct for movie writes.
///
/// Every column is written, so a replace never leaves stale fields behind.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = movies)]
pub(crate) struct MovieWrite<'a> {
    pub title: &'a str,
    pub director: &'a str,
    pub year: &'a str,
    pub color: &'a str,
    pub duration: i32,
}

impl<'a> From<&'a Movie> for MovieWrite<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            title: &movie.title,
            director: &movie.director,
            year: &movie.year,
            color: &movie.color,
            duration: movie.duration,
        }
    }
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub city: String,
    pub language: String,
}

impl From<UserRow> for Stored<User> {
    fn from(row: UserRow) -> Self {
        Stored::new(
            ResourceId::new(row.id),
            User {
                firstname: row.firstname,
                lastname: row.lastname,
                email: row.email,
                city: row.city,
                language: row.language,
            },
        )
    }
}

/// Insertable and changeset struct for user writes.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserWrite<'a> {
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub email: &'a str,
    pub city: &'a str,
    pub language: &'a str,
}

impl<'a> From<&'a User> for UserWrite<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            firstname: &user.firstname,
            lastname: &user.lastname,
            email: &user.email,
            city: &user.city,
            language: &user.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_row_converts_to_stored_record() {
        let stored = Stored::<Movie>::from(MovieRow {
            id: 4,
            title: "Alien".to_owned(),
            director: "Ridley Scott".to_owned(),
            year: "1979".to_owned(),
            color: "1".to_owned(),
            duration: 117,
        });
        assert_eq!(stored.id, ResourceId::new(4));
        assert_eq!(stored.record.director, "Ridley Scott");
    }

    #[test]
    fn user_write_borrows_every_field() {
        let user = User {
            firstname: "Marie".to_owned(),
            lastname: "Martin".to_owned(),
            email: "marie@example.com".to_owned(),
            city: "Paris".to_owned(),
            language: "French".to_owned(),
        };
        let write = UserWrite::from(&user);
        assert_eq!(write.email, "marie@example.com");
        assert_eq!(write.language, "French");
    }
}
