use std::io;
use std::path::Path;

use clap::Parser;
use todo::application::todo_service::TodoServiceImpl;
use todo::cli::{self, Cli, prompt::DescriptionPrompt};
use todo::domain::error::TodoError;
use todo::domain::repository::CleanupPolicy;
use todo::infrastructure::json_repo::JsonTodoRepository;

struct ScriptedPrompt {
    answer: Option<String>,
    seen: Vec<String>,
}

impl DescriptionPrompt for ScriptedPrompt {
    fn edit_description(&mut self, current: &str) -> io::Result<Option<String>> {
        self.seen.push(current.to_string());
        Ok(self.answer.clone())
    }
}

fn no_prompt() -> ScriptedPrompt { ScriptedPrompt { answer: None, seen: Vec::new() } }

fn todo_with(path: &Path, policy: CleanupPolicy, args: &[&str], prompt: &mut ScriptedPrompt) -> anyhow::Result<String> {
    let argv: Vec<&str> = std::iter::once("todo").chain(args.iter().copied()).collect();
    let command = Cli::try_parse_from(argv)?.into_command();
    // A fresh repository per call, like a fresh process.
    let repo = JsonTodoRepository::open_with_policy(path, policy)?;
    let mut service = TodoServiceImpl::new(repo);
    let mut out = Vec::new();
    cli::run(command, &mut service, prompt, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn todo(path: &Path, args: &[&str]) -> anyhow::Result<String> {
    todo_with(path, CleanupPolicy::PreserveIds, args, &mut no_prompt())
}

#[test]
fn acceptance_add_complete_list_cleanup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.json");

    assert_eq!(todo(&path, &[]).unwrap(), "Your to-do list is empty!\n");
    assert_eq!(todo(&path, &["add", "buy", "milk"]).unwrap(), "Added →   0: ❌  buy milk\n");
    assert_eq!(todo(&path, &["a", "walk dog"]).unwrap(), "Added →   1: ❌  walk dog\n");
    assert_eq!(todo(&path, &["complete", "0"]).unwrap(), "Completed →   0: ✅  buy milk\n");
    assert_eq!(todo(&path, &["list"]).unwrap(), "  0: ✅  buy milk\n  1: ❌  walk dog\n");

    assert_eq!(todo(&path, &["cleanup"]).unwrap(), "Removing all completed items...\nCleanup complete!\n");
    assert_eq!(todo(&path, &["l"]).unwrap(), "  1: ❌  walk dog\n");

    let stored: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored["last_id"], 1);
    assert_eq!(stored["items"]["1"]["id"], 1);
    assert_eq!(stored["items"]["1"]["complete"], false);
    assert_eq!(stored["items"]["1"]["description"], "walk dog");
}

#[test]
fn acceptance_edit_uncomplete_remove_purge() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.json");
    todo(&path, &["add", "draft"]).unwrap();

    assert_eq!(todo(&path, &["edit", "0", "final", "copy"]).unwrap(), "Updated →   0: ❌  final copy\n");

    let mut prompt = ScriptedPrompt { answer: Some("from prompt".into()), seen: Vec::new() };
    let out = todo_with(&path, CleanupPolicy::PreserveIds, &["e", "0"], &mut prompt).unwrap();
    assert_eq!(out, "Updated →   0: ❌  from prompt\n");
    assert_eq!(prompt.seen, vec!["final copy".to_string()]);

    todo(&path, &["c", "0"]).unwrap();
    assert_eq!(todo(&path, &["incomplete", "0"]).unwrap(), "Incompleted →   0: ❌  from prompt\n");
    assert_eq!(todo(&path, &["remove", "0"]).unwrap(), "Removed →   0: ❌  from prompt\n");

    todo(&path, &["add", "x"]).unwrap();
    assert_eq!(todo(&path, &["purge"]).unwrap(), "Removed all items from to-do list!\n");
    assert_eq!(todo(&path, &["add", "y"]).unwrap(), "Added →   2: ❌  y\n");
}

#[test]
fn acceptance_cancelled_edit_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.json");
    todo(&path, &["add", "keep me"]).unwrap();
    let before = std::fs::read(&path).unwrap();

    let err = todo_with(&path, CleanupPolicy::PreserveIds, &["edit", "0"], &mut no_prompt()).unwrap_err();
    assert_eq!(err.to_string(), "edit of item 0 cancelled");
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn acceptance_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.json");

    let err = todo(&path, &["complete", "two"]).unwrap_err();
    assert_eq!(err.to_string(), "unable to complete item");
    assert!(matches!(err.downcast_ref::<TodoError>(), Some(TodoError::Parse(_))));

    let err = todo(&path, &["edit", "5", "new text"]).unwrap_err();
    assert_eq!(err.to_string(), "unable to edit item 5");
    assert!(err.downcast_ref::<TodoError>().is_some_and(TodoError::is_not_found));

    let err = todo(&path, &["remove", "-1"]).unwrap_err();
    assert_eq!(err.to_string(), "unable to remove item -1");
    assert!(err.downcast_ref::<TodoError>().is_some_and(TodoError::is_not_found));

    let err = todo(&path, &["remove", "99"]).unwrap_err();
    assert_eq!(err.to_string(), "unable to remove item 99");
    assert_eq!(todo(&path, &[]).unwrap(), "Your to-do list is empty!\n");
}

#[test]
fn acceptance_corrupt_list_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.json");
    std::fs::write(&path, "[1, 2").unwrap();
    let err = todo(&path, &["list"]).unwrap_err();
    assert!(err.to_string().starts_with("unable to decode list at"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2");
}

#[test]
fn acceptance_reindex_cleanup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.json");
    let mut prompt = no_prompt();
    for word in ["a", "b", "c"] {
        todo_with(&path, CleanupPolicy::Reindex, &["add", word], &mut prompt).unwrap();
    }
    todo_with(&path, CleanupPolicy::Reindex, &["complete", "0"], &mut prompt).unwrap();
    todo_with(&path, CleanupPolicy::Reindex, &["cleanup"], &mut prompt).unwrap();
    let out = todo_with(&path, CleanupPolicy::Reindex, &["list"], &mut prompt).unwrap();
    assert_eq!(out, "  0: ❌  b\n  1: ❌  c\n");
}
