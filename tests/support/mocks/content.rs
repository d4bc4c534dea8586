// tests/support/mocks/content.rs
use anidex_core::domain::content::{
    ContentId, ContentKey, ContentRepository, ContentUnit, ContentUpdate, NewContentUnit,
};
use anidex_core::domain::errors::{DomainError, DomainResult};
use anidex_core::domain::title::TitleId;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
struct Store {
    units: Vec<ContentUnit>,
    next_id: i64,
}

/// Episode/chapter storage enforcing the `(title, ordinal, session)` key.
#[derive(Default)]
pub struct InMemoryContentRepo {
    store: Mutex<Store>,
}

impl InMemoryContentRepo {
    pub fn count_for(&self, title_id: TitleId) -> usize {
        self.store
            .lock()
            .unwrap()
            .units
            .iter()
            .filter(|u| u.key.title_id == title_id)
            .count()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepo {
    async fn find_by_key(&self, key: &ContentKey) -> DomainResult<Option<ContentUnit>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .units
            .iter()
            .find(|u| u.key == *key)
            .cloned())
    }

    async fn list_by_title(
        &self,
        title_id: TitleId,
        session: Option<i32>,
    ) -> DomainResult<Vec<ContentUnit>> {
        let mut units: Vec<ContentUnit> = self
            .store
            .lock()
            .unwrap()
            .units
            .iter()
            .filter(|u| u.key.title_id == title_id)
            .filter(|u| session.is_none_or(|s| u.key.session == s))
            .cloned()
            .collect();
        units.sort_by_key(|u| (u.key.session, u.key.ordinal));
        Ok(units)
    }

    async fn has_any(&self, title_id: TitleId) -> DomainResult<bool> {
        Ok(self.count_for(title_id) > 0)
    }

    async fn key_exists(&self, key: &ContentKey, exclude: Option<ContentId>) -> DomainResult<bool> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .units
            .iter()
            .any(|u| u.key == *key && Some(u.id) != exclude))
    }

    async fn insert(&self, unit: NewContentUnit) -> DomainResult<ContentUnit> {
        let mut store = self.store.lock().unwrap();
        if store.units.iter().any(|u| u.key == unit.key) {
            return Err(DomainError::DuplicateOrdinal {
                ordinal: unit.key.ordinal,
                session: unit.key.session,
            });
        }
        store.next_id += 1;
        let created = ContentUnit {
            id: ContentId(store.next_id),
            key: unit.key,
            kind: unit.kind,
            name: unit.name,
            download_links: unit.download_links,
            created_at: unit.created_at,
            updated_at: unit.created_at,
        };
        store.units.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentUnit> {
        let mut store = self.store.lock().unwrap();
        let unit = store
            .units
            .iter_mut()
            .find(|u| u.key == update.key)
            .ok_or_else(|| DomainError::NotFound("content not found".into()))?;
        if let Some(name) = update.name {
            unit.name = name;
        }
        if let Some(links) = update.download_links {
            unit.download_links = links;
        }
        unit.updated_at = update.updated_at;
        Ok(unit.clone())
    }

    async fn delete(&self, key: &ContentKey) -> DomainResult<()> {
        let mut store = self.store.lock().unwrap();
        let before = store.units.len();
        store.units.retain(|u| u.key != *key);
        if store.units.len() == before {
            return Err(DomainError::NotFound("content not found".into()));
        }
        Ok(())
    }
}
