mod common;
use boardchamp::db::log::{audit, load_log};
use boardchamp::db::migrate::run_pending_migrations;
use boardchamp::db::pool::DbPool;
use boardchamp::db::store::{
    GAMES_KEY, GameRepository, KeyValueStore, SESSIONS_KEY, SessionRepository,
};
use common::session;

#[test]
fn sqlite_store_round_trips_history() {
    let mut pool = DbPool::in_memory().unwrap();
    assert!(pool.load_sessions().unwrap().is_empty());

    let sessions = vec![
        session(1, "Azul", "2025-04-02", "18:00", "19:00"),
        session(2, "Go", "2025-04-03", "23:30", "00:10"),
    ];
    pool.save_sessions(&sessions).unwrap();
    assert_eq!(pool.load_sessions().unwrap(), sessions);

    // the second save overwrites the first
    pool.save_sessions(&sessions[1..]).unwrap();
    assert_eq!(pool.load_sessions().unwrap(), sessions[1..].to_vec());
}

#[test]
fn history_and_games_use_separate_keys() {
    let mut pool = DbPool::in_memory().unwrap();
    pool.save_games(&["Catan".to_string(), "Azul".to_string()])
        .unwrap();

    assert_eq!(
        pool.get(GAMES_KEY).unwrap().as_deref(),
        Some(r#"["Catan","Azul"]"#)
    );
    assert_eq!(pool.get(SESSIONS_KEY).unwrap(), None);
}

#[test]
fn damaged_blob_loads_as_empty_history() {
    let mut pool = DbPool::in_memory().unwrap();
    pool.put(SESSIONS_KEY, "this is not json").unwrap();
    pool.put(GAMES_KEY, "{").unwrap();

    assert!(pool.load_sessions().unwrap().is_empty());
    assert!(pool.load_games().unwrap().is_empty());
}

#[test]
fn migrations_run_once() {
    let pool = DbPool::in_memory().unwrap();
    run_pending_migrations(&pool.conn).unwrap();
    run_pending_migrations(&pool.conn).unwrap();

    let applied = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation == "migration_applied")
        .count();
    assert_eq!(applied, 1);
}

#[test]
fn audit_rows_are_appended_in_order() {
    let pool = DbPool::in_memory().unwrap();
    audit(&pool.conn, "add", "1", "Session of 'Azul' saved");
    audit(&pool.conn, "del", "1", "Session of 'Azul' deleted");

    let ops: Vec<String> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation != "migration_applied")
        .map(|e| format!("{} {}", e.operation, e.target))
        .collect();
    assert_eq!(ops, vec!["add 1", "del 1"]);
}
