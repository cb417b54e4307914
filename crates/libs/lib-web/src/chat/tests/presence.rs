//! Registry contents and presence broadcasts.

use super::*;

#[tokio::test]
async fn test_anonymous_connection_never_listed() {
    let chat = new_chat();
    let mut named = TestClient::connect(&chat).await;
    let mut anonymous = TestClient::connect(&chat).await;
    named.choose_name("Alice").await;

    assert_eq!(chat.online_nicknames().await, vec!["Alice".to_string()]);
    assert_eq!(chat.connection_count().await, 2);
    assert_eq!(anonymous.session.phase(), &ConnectionPhase::Anonymous);

    for event in anonymous.drain() {
        if let ServerEvent::UpdateUserList(names) = event {
            assert!(names.iter().all(|name| name == "Alice"));
        }
    }
}

#[tokio::test]
async fn test_anonymous_disconnect_updates_list_without_farewell() {
    let chat = new_chat();
    let mut alice = TestClient::connect(&chat).await;
    alice.choose_name("Alice").await;
    let ghost = TestClient::connect(&chat).await;
    alice.drain();

    ghost.session.close().await;

    assert_eq!(alice.drain(), vec![user_list(&["Alice"])]);
}

#[tokio::test]
async fn test_rename_replaces_entry_and_rebroadcasts() {
    let chat = new_chat();
    let mut a = TestClient::connect(&chat).await;
    let mut b = TestClient::connect(&chat).await;
    a.choose_name("Alice").await;
    a.drain();
    b.drain();

    a.choose_name("Alicia").await;

    assert_eq!(chat.online_nicknames().await, vec!["Alicia".to_string()]);
    assert_eq!(
        a.session.phase(),
        &ConnectionPhase::Named("Alicia".to_string())
    );
    assert_eq!(a.drain(), vec![user_list(&["Alicia"])]);
    assert_eq!(b.drain(), vec![joined("Alicia"), user_list(&["Alicia"])]);
}

#[tokio::test]
async fn test_duplicate_nicknames_are_allowed() {
    let chat = new_chat();
    let mut first = TestClient::connect(&chat).await;
    let mut second = TestClient::connect(&chat).await;
    first.choose_name("Sam").await;
    second.choose_name("Sam").await;

    assert_eq!(
        chat.online_nicknames().await,
        vec!["Sam".to_string(), "Sam".to_string()]
    );

    first.session.close().await;
    assert_eq!(chat.online_nicknames().await, vec!["Sam".to_string()]);
}

/// Nicknames of the still-open, named clients.
fn expected(clients: &[TestClient]) -> Vec<String> {
    let mut names: Vec<String> = clients
        .iter()
        .filter_map(|c| match c.session.phase() {
            ConnectionPhase::Named(name) => Some(name.clone()),
            ConnectionPhase::Anonymous => None,
        })
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_user_list_tracks_named_open_connections() {
    let chat = new_chat();
    let mut clients: Vec<TestClient> = Vec::new();
    for _ in 0..5 {
        clients.push(TestClient::connect(&chat).await);
    }

    clients[0].choose_name("Ann").await;
    clients[1].choose_name("Ben").await;
    clients[3].choose_name("Ann").await;
    clients[1].choose_name("Bea").await;

    let mut online = chat.online_nicknames().await;
    online.sort();
    assert_eq!(online, expected(&clients));

    let closed = clients.remove(0);
    closed.session.close().await;
    let closed = clients.remove(1);
    closed.session.close().await;

    let mut online = chat.online_nicknames().await;
    online.sort();
    assert_eq!(online, expected(&clients));
    assert_eq!(online, vec!["Ann".to_string(), "Bea".to_string()]);
    assert_eq!(chat.connection_count().await, 3);
}

#[tokio::test]
async fn test_empty_nickname_is_listed_but_not_announced_on_leave() {
    let chat = new_chat();
    let mut blank = TestClient::connect(&chat).await;
    let mut watcher = TestClient::connect(&chat).await;
    blank.session.dispatch(ClientEvent::ChooseName(None)).await;

    assert_eq!(chat.online_nicknames().await, vec![String::new()]);
    watcher.drain();

    blank.session.close().await;
    assert_eq!(watcher.drain(), vec![ServerEvent::UpdateUserList(vec![])]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_joins_and_leaves_keep_list_consistent() {
    let chat = new_chat();

    let mut tasks = Vec::new();
    for i in 0..24 {
        let chat = Arc::clone(&chat);
        tasks.push(tokio::spawn(async move {
            let mut client = TestClient::connect(&chat).await;
            let nickname = format!("user-{}", i % 7);
            client.choose_name(&nickname).await;

            if i % 2 == 0 {
                client.session.close().await;
                None
            } else {
                Some((nickname, client))
            }
        }));
    }

    let mut survivors = Vec::new();
    for task in tasks {
        if let Some(survivor) = task.await.unwrap() {
            survivors.push(survivor);
        }
    }

    let mut remaining: Vec<String> = survivors.iter().map(|(name, _)| name.clone()).collect();
    remaining.sort();

    let mut online = chat.online_nicknames().await;
    online.sort();
    assert_eq!(online, remaining);
    assert_eq!(chat.connection_count().await, survivors.len());

    // Every mutation broadcasts under the lock, so each survivor's last list is the final one.
    for (name, mut client) in survivors {
        let last = client
            .drain()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                ServerEvent::UpdateUserList(mut names) => {
                    names.sort();
                    Some(names)
                }
                _ => None,
            });
        assert_eq!(last.as_ref(), Some(&remaining), "stale list for {}", name);
    }
}
