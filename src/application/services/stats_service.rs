//! Public statistics lookup.

use std::sync::Arc;

use crate::domain::ShortenerGateway;
use crate::domain::entities::LinkStats;
use crate::error::AppError;
use crate::utils::slug::extract_slug;
use crate::utils::validators::FieldError;

/// Service behind the statistics page. No session needed.
pub struct StatsService<G: ShortenerGateway> {
    gateway: Arc<G>,
}

impl<G: ShortenerGateway> StatsService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Fetches click statistics for a slug or short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Field`] for blank input and [`AppError::Api`]
    /// (`Link not found`) for unknown slugs.
    pub async fn stats(&self, input: &str) -> Result<LinkStats, AppError> {
        let slug = extract_slug(input).ok_or(AppError::field("slug", FieldError::Required))?;
        self.gateway.link_stats(&slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockShortenerGateway;
    use crate::error::KnownDetail;
    use chrono::Utc;

    #[tokio::test]
    async fn test_stats_by_short_url() {
        let mut mock_gateway = MockShortenerGateway::new();
        mock_gateway
            .expect_link_stats()
            .withf(|slug| slug == "demo")
            .times(1)
            .returning(|slug| {
                Ok(LinkStats {
                    original_url: "https://example.com".to_string(),
                    slug: slug.to_string(),
                    clicks: 235,
                    created_at: Utc::now(),
                })
            });

        let service = StatsService::new(Arc::new(mock_gateway));
        let stats = service.stats("encurtar.link/demo").await.unwrap();
        assert_eq!(stats.clicks, 235);
    }

    #[tokio::test]
    async fn test_stats_not_found() {
        let mut mock_gateway = MockShortenerGateway::new();
        mock_gateway
            .expect_link_stats()
            .returning(|_| Err(AppError::api(404, Some("Link not found".into()))));

        let service = StatsService::new(Arc::new(mock_gateway));
        let err = service.stats("nope").await.unwrap_err();
        assert_eq!(err.known_detail(), Some(KnownDetail::LinkNotFound));
    }

    #[tokio::test]
    async fn test_stats_blank_input() {
        let mut mock_gateway = MockShortenerGateway::new();
        mock_gateway.expect_link_stats().times(0);

        let service = StatsService::new(Arc::new(mock_gateway));
        assert!(service.stats("").await.is_err());
    }
}
