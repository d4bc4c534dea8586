// tests/support/mocks/titles.rs
use anidex_core::domain::errors::{DomainError, DomainResult};
use anidex_core::domain::title::{
    ContentType, NewTitle, Title, TitleId, TitleListCursor, TitleReadRepository, TitleSlug,
    TitleUpdate, TitleWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
struct Store {
    titles: BTreeMap<i64, Title>,
    next_id: i64,
    /// Slugs a concurrent writer will grab right before our next write.
    racing: HashSet<String>,
    /// Slugs held by rows this repo never returns (the racing writer's).
    foreign: HashSet<String>,
}

/// Title storage with the same slug and freshness rules as the Postgres
/// tables: a unique slug index and a strictly increasing stamp.
#[derive(Default)]
pub struct InMemoryTitleRepo {
    store: Mutex<Store>,
    fail_touch: AtomicBool,
    slug_probes: AtomicUsize,
}

impl InMemoryTitleRepo {
    /// The next insert or update that writes `slug` fails with `SlugTaken`,
    /// as if another request committed it between probe and write.
    pub fn race_for_slug(&self, slug: &str) {
        self.store.lock().unwrap().racing.insert(slug.to_string());
    }

    /// Occupy `slug` without a visible title.
    pub fn occupy_slug(&self, slug: &str) {
        self.store.lock().unwrap().foreign.insert(slug.to_string());
    }

    pub fn fail_touches(&self) {
        self.fail_touch.store(true, Ordering::SeqCst);
    }

    pub fn slug_probes(&self) -> usize {
        self.slug_probes.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: TitleId) -> Option<Title> {
        self.store.lock().unwrap().titles.get(&id.0).cloned()
    }

    /// Seed a title whose slug column is still empty.
    pub fn insert_legacy_without_slug(&self, mut title: Title) -> Title {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        title.id = TitleId(store.next_id);
        title.slug = None;
        store.titles.insert(title.id.0, title.clone());
        title
    }
}

fn claim_slug(store: &mut Store, slug: &str, owner: Option<i64>) -> DomainResult<()> {
    if store.racing.remove(slug) {
        store.foreign.insert(slug.to_string());
        return Err(DomainError::SlugTaken(slug.to_string()));
    }
    let held_by_other = store.foreign.contains(slug)
        || store.titles.values().any(|t| {
            t.slug.as_ref().is_some_and(|s| s.as_str() == slug) && Some(t.id.0) != owner
        });
    if held_by_other {
        return Err(DomainError::SlugTaken(slug.to_string()));
    }
    Ok(())
}

#[async_trait]
impl TitleWriteRepository for InMemoryTitleRepo {
    async fn insert(&self, title: NewTitle) -> DomainResult<Title> {
        let mut store = self.store.lock().unwrap();
        claim_slug(&mut store, title.slug.as_str(), None)?;

        store.next_id += 1;
        let created = Title {
            id: TitleId(store.next_id),
            title: title.title,
            slug: Some(title.slug),
            content_type: title.content_type,
            sub_dub: title.sub_dub,
            description: title.description,
            thumbnail_url: title.thumbnail_url,
            genres: title.genres,
            release_year: title.release_year,
            seo: title.seo,
            last_content_added: title.created_at,
            created_at: title.created_at,
            updated_at: title.created_at,
        };
        store.titles.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: TitleUpdate) -> DomainResult<Title> {
        let mut store = self.store.lock().unwrap();
        if !store.titles.contains_key(&update.id.0) {
            return Err(DomainError::NotFound("title not found".into()));
        }
        if let Some(slug) = &update.slug {
            claim_slug(&mut store, slug.as_str(), Some(update.id.0))?;
        }

        let Some(title) = store.titles.get_mut(&update.id.0) else {
            return Err(DomainError::NotFound("title not found".into()));
        };
        if let Some(name) = update.title {
            title.title = name;
        }
        if let Some(slug) = update.slug {
            title.slug = Some(slug);
        }
        if let Some(content_type) = update.content_type {
            title.content_type = content_type;
        }
        if let Some(sub_dub) = update.sub_dub {
            title.sub_dub = sub_dub;
        }
        if let Some(description) = update.description {
            title.description = description;
        }
        if let Some(thumbnail_url) = update.thumbnail_url {
            title.thumbnail_url = thumbnail_url;
        }
        if let Some(genres) = update.genres {
            title.genres = genres;
        }
        if let Some(release_year) = update.release_year {
            title.release_year = release_year;
        }
        if let Some(seo) = update.seo {
            title.seo = seo;
        }
        title.updated_at = update.updated_at;
        Ok(title.clone())
    }

    async fn delete(&self, id: TitleId) -> DomainResult<()> {
        self.store
            .lock()
            .unwrap()
            .titles
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("title not found".into()))
    }

    async fn touch_last_content_added(
        &self,
        id: TitleId,
        at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        if self.fail_touch.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let mut store = self.store.lock().unwrap();
        match store.titles.get_mut(&id.0) {
            Some(title) => {
                title.last_content_added =
                    at.max(title.last_content_added + Duration::microseconds(1));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl TitleReadRepository for InMemoryTitleRepo {
    async fn find_by_id(&self, id: TitleId) -> DomainResult<Option<Title>> {
        Ok(self.get(id))
    }

    async fn find_by_slug(&self, slug: &TitleSlug) -> DomainResult<Option<Title>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .titles
            .values()
            .find(|t| t.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn slug_exists(&self, slug: &TitleSlug, exclude: Option<TitleId>) -> DomainResult<bool> {
        self.slug_probes.fetch_add(1, Ordering::SeqCst);
        let store = self.store.lock().unwrap();
        Ok(store.foreign.contains(slug.as_str())
            || store
                .titles
                .values()
                .any(|t| t.slug.as_ref() == Some(slug) && Some(t.id) != exclude))
    }

    async fn list_page(
        &self,
        content_type: Option<ContentType>,
        limit: u32,
        cursor: Option<TitleListCursor>,
    ) -> DomainResult<(Vec<Title>, Option<TitleListCursor>)> {
        let limit = limit.clamp(1, 100) as usize;
        let store = self.store.lock().unwrap();
        let mut titles: Vec<Title> = store
            .titles
            .values()
            .filter(|t| content_type.is_none_or(|ct| t.content_type == ct))
            .filter(|t| {
                cursor.as_ref().is_none_or(|c| {
                    (t.last_content_added, t.id.0) < (c.last_content_added, c.title_id.0)
                })
            })
            .cloned()
            .collect();
        titles.sort_by(|a, b| {
            (b.last_content_added, b.id.0).cmp(&(a.last_content_added, a.id.0))
        });
        titles.truncate(limit + 1);

        let mut next = None;
        if titles.len() > limit {
            titles.pop();
            next = titles
                .last()
                .map(|t| TitleListCursor::from_parts(t.last_content_added, t.id));
        }
        Ok((titles, next))
    }
}
