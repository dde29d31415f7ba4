use std::io::Cursor;

use projects::{Hours, NewProject, ProjectDb, Session};

/// Creates a ProjectDb backed by a file in a temporary directory.
/// Returns both the database and the temp directory (which must be kept alive).
pub async fn create_test_db() -> (ProjectDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test.db");
    let db = ProjectDb::new(&path)
        .await
        .expect("Failed to create test database");
    (db, dir)
}

pub fn hours(text: &str) -> Hours {
    text.parse().expect("test hours literal should parse")
}

/// Creates a NewProject with every field populated.
pub fn make_new_project(name: &str) -> NewProject {
    NewProject {
        name: Some(name.to_string()),
        estimated_hours: Some(hours("4")),
        actual_hours: Some(hours("3.5")),
        difficulty: Some(2),
        notes: Some(format!("notes for {}", name)),
    }
}

pub type ScriptedSession = Session<ProjectDb, Cursor<Vec<u8>>, Vec<u8>>;

/// Builds a session that reads the given lines, one answer per line.
pub fn scripted_session(db: &ProjectDb, lines: &[&str]) -> ScriptedSession {
    let mut script = lines.join("\n");
    if !lines.is_empty() {
        script.push('\n');
    }
    Session::new(db.clone(), Cursor::new(script.into_bytes()), Vec::new())
}

/// Builds a session over raw input bytes, for input that is not valid text.
pub fn raw_session(db: &ProjectDb, bytes: &[u8]) -> ScriptedSession {
    Session::new(db.clone(), Cursor::new(bytes.to_vec()), Vec::new())
}

/// Everything the session wrote to its output.
pub fn printed(session: ScriptedSession) -> String {
    String::from_utf8(session.into_output()).expect("session output should be UTF-8")
}
