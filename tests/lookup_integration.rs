use std::fs;

use profile_scout::{
    FetchError, Fetcher, IdentifierStore, Lookup, Profile, ProfileId,
    Visibility,
};
use tempdir::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

const STEAM_ID: &str = "76561197960287930";

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{}", name))
        .expect("Could not read fixture")
}

/// Answer a single HTTP request with `status` and `body`, returning the
/// request head that was received.
async fn serve_once(
    status: &'static str,
    body: String,
) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.unwrap();
            if read == 0 {
                break;
            }
            head.extend_from_slice(&buf[..read]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });
    let base = Url::parse(&format!("http://{}", addr)).unwrap();
    (base, handle)
}

/// A base url nothing listens on.
async fn dead_base() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}", addr)).unwrap()
}

fn fetcher(base: Url) -> Fetcher {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    Fetcher::with_client(client, base).unwrap()
}

fn lookup(base: Url, dir: &TempDir) -> Lookup {
    let _ = env_logger::builder().is_test(true).try_init();
    let store =
        IdentifierStore::open(dir.path().join("preferences.json")).unwrap();
    Lookup::new(fetcher(base), store)
}

#[tokio::test]
async fn public_profile_is_fully_visible() {
    let (base, server) = serve_once("200 OK", fixture("public.html")).await;
    let id = ProfileId::from(STEAM_ID);

    let snapshot = fetcher(base).fetch(&id).await.unwrap();
    let head = server.await.unwrap();

    assert!(head.starts_with(&format!("GET /profiles/{} HTTP/1.1", STEAM_ID)));
    assert_eq!(snapshot.visibility(), Visibility::FullyVisible);
    assert_eq!(snapshot.source.path(), format!("/profiles/{}", STEAM_ID));
    match snapshot.profile {
        Profile::FullyVisible {
            name,
            friends,
            level,
            games,
            groups,
            badges,
            ..
        } => {
            assert_eq!(name, "Rabscuttle");
            assert_eq!(friends, "15");
            assert_eq!(level, "42");
            assert_eq!(games, "128");
            assert_eq!(groups, "4");
            assert_eq!(badges, "31");
        }
        other => panic!("unexpected profile {:?}", other),
    }
}

#[tokio::test]
async fn private_profile_is_hidden() {
    let (base, server) = serve_once("200 OK", fixture("private.html")).await;

    let snapshot = fetcher(base)
        .fetch(&ProfileId::from(STEAM_ID))
        .await
        .unwrap();
    server.await.unwrap();

    assert_eq!(snapshot.visibility(), Visibility::Hidden);
    assert_eq!(snapshot.fields().name, "Quiet One (hidden profile)");
}

#[tokio::test]
async fn friends_hidden_profile_is_partially_hidden() {
    let (base, server) =
        serve_once("200 OK", fixture("friends_hidden.html")).await;

    let snapshot = fetcher(base)
        .fetch(&ProfileId::from(STEAM_ID))
        .await
        .unwrap();
    server.await.unwrap();

    assert_eq!(snapshot.visibility(), Visibility::PartiallyHidden);
}

#[tokio::test]
async fn network_failure_matches_unrecognized_page() {
    let id = ProfileId::from(STEAM_ID);

    let (base, server) = serve_once("200 OK", fixture("not_found.html")).await;
    let unrecognized = fetcher(base).fetch(&id).await;
    server.await.unwrap();

    let unreachable = fetcher(dead_base().await).fetch(&id).await;

    assert_eq!(unrecognized, Err(FetchError::FetchFailed));
    assert_eq!(unreachable, unrecognized);
}

#[tokio::test]
async fn dot_ids_never_reach_the_profiles_index() {
    for raw in [".", ".."] {
        // Would classify as a public profile if `/profiles` were requested.
        let (base, server) =
            serve_once("200 OK", fixture("public.html")).await;

        let outcome = fetcher(base).fetch(&ProfileId::from(raw)).await;
        server.abort();

        assert_eq!(outcome, Err(FetchError::FetchFailed));
    }
}

#[tokio::test]
async fn error_status_is_a_failure() {
    let (base, server) =
        serve_once("404 Not Found", fixture("public.html")).await;

    let outcome = fetcher(base).fetch(&ProfileId::from(STEAM_ID)).await;
    server.await.unwrap();

    assert_eq!(outcome, Err(FetchError::FetchFailed));
}

#[tokio::test]
async fn declined_id_is_fetched_but_not_stored() {
    let dir = TempDir::new("lookup_declined").unwrap();
    let (base, server) = serve_once("200 OK", fixture("public.html")).await;
    let mut lookup = lookup(base, &dir);

    let mut asked = Vec::new();
    let report = lookup
        .submit(STEAM_ID, &mut |id: &ProfileId| {
            asked.push(id.clone());
            false
        })
        .await
        .unwrap();
    server.await.unwrap();

    assert_eq!(asked, vec![ProfileId::from(STEAM_ID)]);
    assert!(report.outcome.is_ok());
    assert!(!report.remembered);
    assert!(!lookup.store().contains(&report.id));

    let reopened =
        IdentifierStore::open(dir.path().join("preferences.json")).unwrap();
    assert!(!reopened.contains(&report.id));
}

#[tokio::test]
async fn accepted_id_is_stored_after_fetch() {
    let dir = TempDir::new("lookup_accepted").unwrap();
    let (base, server) = serve_once("200 OK", fixture("public.html")).await;
    let mut lookup = lookup(base, &dir);

    let report = lookup
        .submit(STEAM_ID, &mut |_: &ProfileId| true)
        .await
        .unwrap();
    server.await.unwrap();

    assert!(report.remembered);
    assert_eq!(lookup.suggestions(), &[ProfileId::from(STEAM_ID)]);

    let reopened =
        IdentifierStore::open(dir.path().join("preferences.json")).unwrap();
    assert!(reopened.contains(&ProfileId::from(STEAM_ID)));
}

#[tokio::test]
async fn accepted_id_is_stored_even_when_fetch_fails() {
    let dir = TempDir::new("lookup_failed").unwrap();
    let mut lookup = lookup(dead_base().await, &dir);

    let report = lookup
        .submit(STEAM_ID, &mut |_: &ProfileId| true)
        .await
        .unwrap();

    assert_eq!(report.outcome, Err(FetchError::FetchFailed));
    assert!(report.remembered);
}

#[tokio::test]
async fn known_id_is_not_confirmed_again() {
    let dir = TempDir::new("lookup_known").unwrap();
    let (base, server) = serve_once("200 OK", fixture("private.html")).await;
    {
        let mut store =
            IdentifierStore::open(dir.path().join("preferences.json"))
                .unwrap();
        store.add(ProfileId::from(STEAM_ID)).unwrap();
    }
    let mut lookup = lookup(base, &dir);

    let report = lookup
        .submit(STEAM_ID, &mut |_: &ProfileId| -> bool {
            panic!("known ids must not be confirmed")
        })
        .await
        .unwrap();
    server.await.unwrap();

    assert!(!report.remembered);
    assert_eq!(lookup.store().len(), 1);
}

#[tokio::test]
async fn blank_input_does_nothing() {
    let dir = TempDir::new("lookup_blank").unwrap();
    let mut lookup = lookup(dead_base().await, &dir);

    let report = lookup
        .submit("   ", &mut |_: &ProfileId| -> bool {
            panic!("blank input must not be confirmed")
        })
        .await;

    assert!(report.is_none());
    assert!(lookup.store().is_empty());
}

#[tokio::test]
async fn clear_forgets_everything() {
    let dir = TempDir::new("lookup_clear").unwrap();
    let mut lookup = lookup(dead_base().await, &dir);
    lookup
        .submit("alice", &mut |_: &ProfileId| true)
        .await
        .unwrap();
    assert_eq!(lookup.suggestions().len(), 1);

    lookup.clear().unwrap();
    assert!(lookup.suggestions().is_empty());

    let reopened =
        IdentifierStore::open(dir.path().join("preferences.json")).unwrap();
    assert!(reopened.is_empty());
}

#[test]
fn blocking_fetch_reports_failure() {
    let base = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        Url::parse(&format!("http://{}", addr)).unwrap()
    };
    let outcome = fetcher(base).fetch_blocking(&ProfileId::from(STEAM_ID));
    assert_eq!(outcome, Err(FetchError::FetchFailed));
}
