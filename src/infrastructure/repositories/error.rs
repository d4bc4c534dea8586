use crate::domain::errors::DomainError;

pub(super) const CNT_TITLE_SLUG: &str = "titles_slug_key";
pub(super) const CNT_CONTENT_KEY: &str = "content_units_title_ordinal_session_key";
pub(super) const CNT_CONTENT_TITLE: &str = "content_units_title_id_fkey";
const CNT_CONTENT_LINKS: &str = "content_units_links_count_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_TITLE_SLUG => DomainError::SlugTaken("slug already exists".into()),
                    CNT_CONTENT_KEY => {
                        DomainError::Conflict("ordinal already exists in session".into())
                    }
                    CNT_CONTENT_TITLE => DomainError::NotFound("title not found".into()),
                    CNT_CONTENT_LINKS => {
                        DomainError::Validation("between 1 and 5 download links required".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Name of the violated constraint, if the error carries one.
pub(super) fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}
