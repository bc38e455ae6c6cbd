//! Step definitions for sharing and reopening snippets

use crate::common::world::PlaygroundWorld;
use cucumber::{then, when};

#[when("the user shares")]
async fn when_user_shares(world: &mut PlaygroundWorld) {
    if let Err(e) = world.controller.share() {
        world.last_error = Some(e);
    }
}

#[when("the snippet store goes down")]
async fn when_store_down(world: &mut PlaygroundWorld) {
    world.store.set_unavailable(true);
}

#[when("a fresh session is opened at the shared location")]
async fn when_reopened(world: &mut PlaygroundWorld) {
    let href = world.controller.location().href().to_string();
    world.open_session(&href);
    world.mount("").await;
    world.controller.settle().await;
}

#[then("the location carries a snippet identifier")]
async fn then_location_has_identifier(world: &mut PlaygroundWorld) {
    let id = world
        .controller
        .location()
        .deep_link()
        .expect("location should carry an identifier after sharing");
    assert!(world.store.get(&id).is_some());
}

#[then("the location carries no snippet identifier")]
async fn then_location_has_no_identifier(world: &mut PlaygroundWorld) {
    assert_eq!(world.controller.location().deep_link(), None);
}
