//! Pure slug derivation: text normalisation and the "does this write need a
//! new slug" decision. Uniqueness probing lives in
//! [`crate::domain::title::services::TitleSlugAllocator`].

use crate::domain::title::entity::Title;
use crate::domain::title::value_objects::{TitleId, TitleName};
use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("static slug regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static slug regex"));
static HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("static slug regex"));

/// Lowercase, drop everything outside `[a-z0-9\s-]`, turn whitespace runs into
/// a hyphen, squash hyphen runs and trim hyphens at both ends.
///
/// Returns `None` when nothing sluggable is left.
pub fn normalize_slug(input: &str) -> Option<String> {
    let lowered = input.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");
    let squashed = HYPHENS.replace_all(&hyphenated, "-");
    let slug = squashed.trim_matches('-');
    (!slug.is_empty()).then(|| slug.to_string())
}

/// Request to allocate a slug for `title`, ignoring the record `exclude`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSlugRequest {
    pub title: TitleName,
    pub exclude: Option<TitleId>,
}

/// Decide whether a create or edit needs a fresh slug.
///
/// A create always does. An edit does only when the title text changed or the
/// stored record never got a slug.
pub fn compute_slug_if_needed(
    existing: Option<&Title>,
    new_title: &TitleName,
) -> Option<NewSlugRequest> {
    match existing {
        None => Some(NewSlugRequest {
            title: new_title.clone(),
            exclude: None,
        }),
        Some(current) if current.title != *new_title || current.slug.is_none() => {
            Some(NewSlugRequest {
                title: new_title.clone(),
                exclude: Some(current.id),
            })
        }
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::title::entity::SeoMetadata;
    use crate::domain::title::value_objects::{ContentType, SubDubStatus, TitleSlug};
    use chrono::Utc;

    fn stored(title: &str, slug: Option<&str>) -> Title {
        let now = Utc::now();
        Title {
            id: TitleId::new(3).unwrap(),
            title: TitleName::new(title).unwrap(),
            slug: slug.map(|s| TitleSlug::new(s).unwrap()),
            content_type: ContentType::Anime,
            sub_dub: SubDubStatus::Sub,
            description: None,
            thumbnail_url: None,
            genres: vec![],
            release_year: None,
            seo: SeoMetadata::default(),
            last_content_added: now,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn normalizes_plain_titles() {
        assert_eq!(normalize_slug("Attack on Titan").as_deref(), Some("attack-on-titan"));
        assert_eq!(
            normalize_slug("  Re:Zero -- Starting   Life  ").as_deref(),
            Some("rezero-starting-life")
        );
        assert_eq!(normalize_slug("Mob Psycho 100").as_deref(), Some("mob-psycho-100"));
        assert_eq!(normalize_slug("--Spy x Family!!--").as_deref(), Some("spy-x-family"));
    }

    #[test]
    fn non_ascii_only_titles_have_no_slug() {
        assert_eq!(normalize_slug("进撃の巨人???"), None);
        assert_eq!(normalize_slug("   "), None);
        assert_eq!(normalize_slug("---"), None);
    }

    #[test]
    fn mixed_scripts_keep_the_ascii_part() {
        assert_eq!(normalize_slug("Naruto 疾風伝").as_deref(), Some("naruto"));
        assert_eq!(normalize_slug("Café Terrace").as_deref(), Some("caf-terrace"));
    }

    #[test]
    fn create_always_requests_a_slug() {
        let name = TitleName::new("Bleach").unwrap();
        let request = compute_slug_if_needed(None, &name).unwrap();
        assert_eq!(request.exclude, None);
        assert_eq!(request.title, name);
    }

    #[test]
    fn unchanged_title_keeps_slug() {
        let current = stored("Bleach", Some("bleach"));
        let name = TitleName::new("Bleach").unwrap();
        assert_eq!(compute_slug_if_needed(Some(&current), &name), None);
    }

    #[test]
    fn renamed_title_requests_slug_excluding_itself() {
        let current = stored("Bleach", Some("bleach"));
        let name = TitleName::new("Bleach: Thousand-Year Blood War").unwrap();
        let request = compute_slug_if_needed(Some(&current), &name).unwrap();
        assert_eq!(request.exclude, Some(current.id));
    }

    #[test]
    fn missing_slug_is_backfilled() {
        let current = stored("Bleach", None);
        let name = TitleName::new("Bleach").unwrap();
        assert!(compute_slug_if_needed(Some(&current), &name).is_some());
    }
}
