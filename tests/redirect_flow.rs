mod common;

use shortener_client::error::KnownDetail;
use shortener_client::prelude::*;

#[tokio::test]
async fn test_resolve_and_follow_counts_click() {
    let api = common::spawn_api().await;
    api.add_link(None, "promo", "https://example.com/destino", None);
    let redirect = RedirectService::new(api.gateway());

    let Resolution::Ready(link) = redirect.resolve("encurtar.link/promo", None).await.unwrap() else {
        panic!("expected a resolved link");
    };
    assert_eq!(link.slug, "promo");
    assert!(link.created_at.is_some());
    assert_eq!(api.link("promo").unwrap().clicks, 0);

    let destination = redirect.follow(&link).await;
    assert_eq!(destination, "https://example.com/destino");
    assert_eq!(api.link("promo").unwrap().clicks, 1);

    let stats = StatsService::new(api.gateway()).stats("promo").await.unwrap();
    assert_eq!(stats.clicks, 1);
    assert_eq!(stats.original_url, "https://example.com/destino");
}

#[tokio::test]
async fn test_protected_link_asks_for_password() {
    let api = common::spawn_api().await;
    api.add_link(None, "secret", "https://example.com/hidden", Some("pw"));
    let redirect = RedirectService::new(api.gateway());

    let resolution = redirect.resolve("secret", None).await.unwrap();
    assert_eq!(
        resolution,
        Resolution::PasswordRequired {
            slug: "secret".to_string()
        }
    );

    let err = redirect
        .resolve("secret", Some("nope".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err.known_detail(), Some(KnownDetail::InvalidLinkPassword));

    let resolution = redirect
        .resolve("secret", Some("pw".to_string()))
        .await
        .unwrap();
    assert!(matches!(resolution, Resolution::Ready(link) if link.original_url == "https://example.com/hidden"));
}

#[tokio::test]
async fn test_unknown_link() {
    let api = common::spawn_api().await;

    let err = RedirectService::new(api.gateway())
        .resolve("missing", None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.known_detail(), Some(KnownDetail::LinkNotFound));

    let err = StatsService::new(api.gateway())
        .stats("missing")
        .await
        .unwrap_err();
    assert_eq!(err.known_detail(), Some(KnownDetail::LinkNotFound));
}

#[tokio::test]
async fn test_follow_survives_failed_click() {
    let api = common::spawn_api().await;
    api.add_link(None, "gone", "https://example.com/gone", None);
    let redirect = RedirectService::new(api.gateway());

    let Resolution::Ready(link) = redirect.resolve("gone", None).await.unwrap() else {
        panic!("expected a resolved link");
    };
    api.store.lock().unwrap().links.clear();

    assert_eq!(redirect.follow(&link).await, "https://example.com/gone");
}

#[tokio::test]
async fn test_unreachable_api_is_a_network_error() {
    let gateway = std::sync::Arc::new(HttpGateway::new("http://127.0.0.1:9").unwrap());

    let err = StatsService::new(gateway).stats("promo").await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
}
