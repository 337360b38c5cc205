//! End-to-end scenarios across both stores.

use std::sync::{Arc, Mutex};

use atelier_domain::{Client, ClientId, ClientStatus, MeetingId, MeetingStatus, RecordId};

use crate::infrastructure::event_bus::Snapshot;
use crate::stores::{ClientStore, MeetingStore};
use crate::test_fixtures::{client_draft, clock_on, date, meeting_draft};

fn id(raw: u64) -> ClientId {
    ClientId::new(raw).expect("valid id")
}

#[test]
fn add_add_delete_keeps_the_survivor_intact() {
    let mut store = ClientStore::new();

    let first =
        store.add(client_draft("Acme Corp", "a@acme.com").with_status(ClientStatus::Prospect));
    assert_eq!(first, id(1));
    assert_eq!(store.list().len(), 1);

    let second = store.add(client_draft("Birch Studio", "hello@birch.studio"));
    assert_eq!(second, id(2));
    let survivor = store.get_by_id(second).cloned().expect("stored");

    store.delete(first);

    let remaining = store.list();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0], survivor);
}

#[test]
fn assigned_ids_strictly_increase() {
    let mut store = ClientStore::new();
    let assigned: Vec<u64> = (0..20)
        .map(|n| store.add(client_draft(&format!("Client {n}"), "c@x.com")).get())
        .collect();
    assert_eq!(assigned, (1..=20).collect::<Vec<_>>());
}

#[test]
fn deleting_an_older_record_does_not_lower_the_next_id() {
    let mut store = ClientStore::new();
    store.add(client_draft("A", "a@x.com"));
    store.add(client_draft("B", "b@x.com"));
    store.delete(ClientId::FIRST);
    assert_eq!(store.add(client_draft("C", "c@x.com")), id(3));
}

#[test]
fn delete_then_get_is_always_absent() {
    let mut store = ClientStore::new();
    store.add(client_draft("A", "a@x.com"));
    store.add(client_draft("B", "b@x.com"));

    for raw in [1, 2, 3, 1000] {
        store.delete(id(raw));
        assert!(store.get_by_id(id(raw)).is_none());
    }
    assert!(store.is_empty());
}

#[test]
fn update_with_unknown_id_publishes_an_unchanged_snapshot() {
    let mut store = ClientStore::new();
    store.add(client_draft("A", "a@x.com"));

    let received: Arc<Mutex<Vec<Snapshot<Client>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    store.subscribe(move |snapshot| sink.lock().expect("lock").push(snapshot));

    let mut ghost = store.list()[0].clone();
    ghost.id = id(77);
    ghost.name = "Ghost".into();
    assert!(!store.update(ghost));

    let received = received.lock().expect("lock");
    assert_eq!(received.len(), 2);
    assert_eq!(received[0], received[1]);
    assert_eq!(received[1][0].name, "A");
}

#[test]
fn every_observer_sees_every_snapshot() {
    let mut store = ClientStore::new();
    let logs: Vec<Arc<Mutex<Vec<usize>>>> =
        (0..3).map(|_| Arc::new(Mutex::new(Vec::new()))).collect();
    for log in &logs {
        let sink = Arc::clone(log);
        store.subscribe(move |snapshot| sink.lock().expect("lock").push(snapshot.len()));
    }

    let a = store.add(client_draft("A", "a@x.com"));
    store.add(client_draft("B", "b@x.com"));
    store.delete(a);

    for log in &logs {
        assert_eq!(*log.lock().expect("lock"), vec![0, 1, 2, 1]);
    }
}

#[test]
fn late_subscriber_starts_from_current_state() {
    let mut store = ClientStore::new();
    store.add(client_draft("A", "a@x.com"));
    store.add(client_draft("B", "b@x.com"));

    let first_seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&first_seen);
    store.subscribe(move |snapshot| {
        sink.lock().expect("lock").get_or_insert(snapshot.len());
    });

    assert_eq!(*first_seen.lock().expect("lock"), Some(2));
}

#[test]
fn meeting_lifecycle_against_today_and_upcoming() {
    let today = date(2024, 6, 10);
    let mut meetings = MeetingStore::new(clock_on(today));

    meetings.add(meeting_draft(ClientId::FIRST, "Yesterday", date(2024, 6, 9)));
    assert!(meetings.upcoming().is_empty());

    let todays = meetings.add(meeting_draft(ClientId::FIRST, "Today", today));
    assert_eq!(todays, MeetingId::FIRST.next());
    assert_eq!(meetings.upcoming().len(), 1);
    assert_eq!(meetings.today().len(), 1);

    let completed = meetings
        .get_by_id(todays)
        .expect("stored")
        .with_status(MeetingStatus::Completed);
    assert!(meetings.update(completed));

    assert!(meetings.upcoming().is_empty());
    assert!(meetings.today().is_empty());
    assert_eq!(meetings.in_range(today, today).len(), 1);
}

#[test]
fn meeting_keeps_dangling_client_reference() {
    let mut clients = ClientStore::new();
    let client = clients.add(client_draft("Jane Doe", "jane@x.com"));
    let mut meetings = MeetingStore::new(clock_on(date(2024, 6, 10)));
    meetings.add(meeting_draft(client, "Review", date(2024, 6, 11)));

    clients.delete(client);

    let theirs = meetings.by_client(client);
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0].client_name, "Jane Doe");
}
