// tests/support/mocks/social.rs
use anidex_core::domain::errors::DomainResult;
use anidex_core::domain::social::{SocialLink, SocialLinkRepository, SocialPlatform};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemorySocialRepo {
    links: Mutex<BTreeMap<String, String>>,
}

impl InMemorySocialRepo {
    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl SocialLinkRepository for InMemorySocialRepo {
    async fn list(&self) -> DomainResult<Vec<SocialLink>> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .map(|(platform, url)| {
                Ok(SocialLink {
                    platform: SocialPlatform::new(platform.clone())?,
                    url: url.clone(),
                })
            })
            .collect()
    }

    async fn insert_if_missing(&self, link: SocialLink) -> DomainResult<bool> {
        let mut links = self.links.lock().unwrap();
        if links.contains_key(link.platform.as_str()) {
            return Ok(false);
        }
        links.insert(link.platform.as_str().to_string(), link.url);
        Ok(true)
    }

    async fn update_url(
        &self,
        platform: &SocialPlatform,
        url: &str,
    ) -> DomainResult<Option<SocialLink>> {
        let mut links = self.links.lock().unwrap();
        Ok(links.get_mut(platform.as_str()).map(|stored| {
            *stored = url.to_string();
            SocialLink {
                platform: platform.clone(),
                url: url.to_string(),
            }
        }))
    }
}
