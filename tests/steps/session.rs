//! Step definitions for mounting and running

use crate::common::world::PlaygroundWorld;
use cucumber::{given, then, when};
use jsonnet_playground::{ExecutionOutcome, SessionError, SessionPhase};
use std::time::Duration;
use tracing::debug;

// === SETUP ===

#[given(regex = r#"^the page location is "([^"]*)"$"#)]
async fn given_page_location(world: &mut PlaygroundWorld, href: String) {
    world.open_session(&href);
}

#[given(regex = r#"^the store holds snippet "([^"]*)" with contents "([^"]*)"$"#)]
async fn given_stored_snippet(world: &mut PlaygroundWorld, id: String, contents: String) {
    world.store.insert(&id, &contents);
}

#[given(regex = r#"^the execution of "([^"]*)" fails with "([^"]*)"$"#)]
async fn given_execution_fails(world: &mut PlaygroundWorld, code: String, message: String) {
    world
        .execution
        .respond_to(&code, ExecutionOutcome::Failure { message });
}

#[given(regex = r#"^the execution of "([^"]*)" answers "([^"]*)" after (\d+) milliseconds$"#)]
async fn given_execution_delayed(
    world: &mut PlaygroundWorld,
    code: String,
    output: String,
    millis: u64,
) {
    world.execution.respond_after(
        &code,
        ExecutionOutcome::Success { output },
        Duration::from_millis(millis),
    );
}

// === ACTIONS ===

#[given(regex = r#"^the editor mounts with buffer "([^"]*)"$"#)]
#[when(regex = r#"^the editor mounts with buffer "([^"]*)"$"#)]
async fn when_editor_mounts(world: &mut PlaygroundWorld, text: String) {
    world.mount(&text).await;
}

#[when("the editor mounts with an empty buffer")]
async fn when_editor_mounts_empty(world: &mut PlaygroundWorld) {
    world.mount("").await;
}

#[when("the user runs")]
async fn when_user_runs(world: &mut PlaygroundWorld) {
    match world.controller.run() {
        Ok(seq) => debug!("Issued run {seq}"),
        Err(e) => world.last_error = Some(e),
    }
}

#[when(regex = r#"^the user replaces the buffer with "([^"]*)"$"#)]
async fn when_user_edits(world: &mut PlaygroundWorld, text: String) {
    world.buffer.replace(&text);
}

#[when("the session settles")]
async fn when_session_settles(world: &mut PlaygroundWorld) {
    world.controller.settle().await;
}

// === ASSERTIONS ===

#[then(regex = r#"^the buffer contains "([^"]*)"$"#)]
async fn then_buffer_contains(world: &mut PlaygroundWorld, text: String) {
    assert_eq!(world.buffer.contents(), text);
}

#[then(regex = r#"^exactly (\d+) executions? (?:was|were) issued$"#)]
async fn then_execution_count(world: &mut PlaygroundWorld, count: usize) {
    assert_eq!(world.execution.calls().len(), count);
}

#[then(regex = r#"^the last execution ran "([^"]*)"$"#)]
async fn then_last_execution(world: &mut PlaygroundWorld, code: String) {
    assert_eq!(world.execution.calls().last(), Some(&code));
}

#[then(regex = r#"^the output shows "([^"]*)"$"#)]
async fn then_output_shows(world: &mut PlaygroundWorld, output: String) {
    let state = world.controller.state();
    assert_eq!(state.output_text().trim_end(), output);
    assert_eq!(state.error_text(), "");
}

#[then(regex = r#"^the error shows "([^"]*)"$"#)]
async fn then_error_shows(world: &mut PlaygroundWorld, message: String) {
    let state = world.controller.state();
    assert_eq!(state.error_text(), message);
    assert_eq!(state.output_text(), "");
}

#[then(regex = r#"^the error mentions "([^"]*)"$"#)]
async fn then_error_mentions(world: &mut PlaygroundWorld, fragment: String) {
    let error = world.controller.state().error_text().to_string();
    assert!(error.contains(&fragment), "error text was {error:?}");
    assert_eq!(world.controller.state().output_text(), "");
}

#[then("the session is idle")]
async fn then_session_idle(world: &mut PlaygroundWorld) {
    assert_eq!(world.controller.phase(), SessionPhase::Idle);
    assert!(!world.controller.has_pending());
}

#[then("no entry point failed")]
async fn then_no_entry_point_failed(world: &mut PlaygroundWorld) {
    assert!(world.last_error.is_none(), "got {:?}", world.last_error);
}

#[then("the entry point is refused as not mounted")]
async fn then_refused_not_mounted(world: &mut PlaygroundWorld) {
    assert!(matches!(world.last_error, Some(SessionError::NotMounted)));
    assert_eq!(world.controller.phase(), SessionPhase::Unmounted);
}
