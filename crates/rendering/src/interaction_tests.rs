//! Headless invariant tests for selection, hologram, and placement.
//!
//! These assemble a minimal App with the interaction systems and hand-fed
//! input/asset resources instead of the full plugin, which needs a window
//! and an egui context.

use bevy::app::App;
use bevy::input::ButtonInput;
use bevy::prelude::*;

use simulation::catalog::{PlaceableCatalog, PlaceableDef};
use simulation::events::{ObjectPlaced, SelectPlaceable};

use crate::egui_input_guard::EguiBlocksPointer;
use crate::hologram::{sync_hologram_selection, update_hologram, Hologram};
use crate::input::{
    apply_selection_events, handle_placement_click, toggle_build_mode, BuildMode, CursorGround,
    PlacedObject, PlacementRoot, Selection,
};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(Assets::<Mesh>::default());
    app.insert_resource(Assets::<StandardMaterial>::default());
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.init_resource::<BuildMode>();
    app.init_resource::<Selection>();
    app.init_resource::<CursorGround>();
    app.init_resource::<EguiBlocksPointer>();
    app.init_resource::<PlaceableCatalog>();
    app.add_event::<SelectPlaceable>();
    app.add_event::<ObjectPlaced>();
    let root = app.world_mut().spawn(Transform::default()).id();
    app.world_mut().insert_resource(PlacementRoot(root));
    app.add_systems(
        Update,
        (
            toggle_build_mode,
            apply_selection_events,
            handle_placement_click,
            sync_hologram_selection,
            update_hologram,
        )
            .chain(),
    );
    app
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn enable_build_mode(app: &mut App) {
    app.world_mut().resource_mut::<BuildMode>().enabled = true;
    app.update();
}

fn press_key(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .reset(key);
    app.update();
}

fn click(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .reset(MouseButton::Left);
    app.update();
}

fn point_cursor(app: &mut App, pos: Vec3, on_ground: bool) {
    let mut cursor = app.world_mut().resource_mut::<CursorGround>();
    cursor.world_pos = pos;
    cursor.hit = true;
    cursor.on_ground = on_ground;
    app.update();
}

fn select(app: &mut App, category: usize, index: usize) {
    app.world_mut()
        .send_event(SelectPlaceable { category, index });
    app.update();
}

fn holograms(app: &mut App) -> Vec<String> {
    app.world_mut()
        .query::<&Hologram>()
        .iter(app.world())
        .map(|h| h.name.clone())
        .collect()
}

fn placed_objects(app: &mut App) -> Vec<(String, Vec3, Quat)> {
    app.world_mut()
        .query::<(&PlacedObject, &Transform)>()
        .iter(app.world())
        .map(|(p, t)| (p.name.clone(), t.translation, t.rotation))
        .collect()
}

fn catalog_def(app: &App, category: usize, index: usize) -> PlaceableDef {
    app.world().resource::<PlaceableCatalog>().categories[category].items[index].clone()
}

// ---------------------------------------------------------------------------
// Selection / hologram invariants
// ---------------------------------------------------------------------------

#[test]
fn reselection_leaves_exactly_one_hologram_for_the_new_item() {
    let mut app = test_app();
    enable_build_mode(&mut app);

    select(&mut app, 0, 0);
    select(&mut app, 0, 1);
    app.update();

    let names = holograms(&mut app);
    let expected = catalog_def(&app, 0, 1).name;
    assert_eq!(names, vec![expected]);
}

#[test]
fn toggling_build_mode_off_clears_selection_and_hologram() {
    let mut app = test_app();
    press_key(&mut app, KeyCode::KeyE); // on
    select(&mut app, 0, 0);
    assert_eq!(holograms(&mut app).len(), 1);

    press_key(&mut app, KeyCode::KeyE); // off
    assert!(app.world().resource::<Selection>().active().is_none());
    assert!(holograms(&mut app).is_empty());

    // Repeated off/on/off cycles stay consistent with no preview left over.
    press_key(&mut app, KeyCode::KeyE);
    press_key(&mut app, KeyCode::KeyE);
    assert!(app.world().resource::<Selection>().active().is_none());
    assert!(holograms(&mut app).is_empty());
}

#[test]
fn selecting_while_mode_off_keeps_the_preview_hidden_until_reenabled() {
    let mut app = test_app();
    select(&mut app, 2, 0);
    app.update();

    // The selection is live but produces no visible preview.
    assert!(app.world().resource::<Selection>().active().is_some());
    let vis = app
        .world_mut()
        .query_filtered::<&Visibility, With<Hologram>>()
        .single(app.world());
    assert_eq!(*vis, Visibility::Hidden);

    point_cursor(&mut app, Vec3::new(5.0, 0.0, 5.0), true);
    enable_build_mode(&mut app);
    let vis = app
        .world_mut()
        .query_filtered::<&Visibility, With<Hologram>>()
        .single(app.world());
    assert_eq!(*vis, Visibility::Visible);
}

// ---------------------------------------------------------------------------
// Placement committer
// ---------------------------------------------------------------------------

#[test]
fn click_without_selection_changes_nothing() {
    let mut app = test_app();
    enable_build_mode(&mut app);
    point_cursor(&mut app, Vec3::ZERO, true);

    click(&mut app);

    assert!(placed_objects(&mut app).is_empty());
    let events: Vec<ObjectPlaced> = app
        .world_mut()
        .resource_mut::<Events<ObjectPlaced>>()
        .drain()
        .collect();
    assert!(events.is_empty());
}

#[test]
fn click_with_ray_miss_drops_the_click_and_keeps_the_selection() {
    let mut app = test_app();
    enable_build_mode(&mut app);
    select(&mut app, 0, 0);
    // cursor.hit stays false: the ray missed the plane this frame.

    click(&mut app);

    assert!(placed_objects(&mut app).is_empty());
    assert!(app.world().resource::<Selection>().active().is_some());
}

#[test]
fn click_while_egui_owns_the_pointer_is_ignored() {
    let mut app = test_app();
    enable_build_mode(&mut app);
    select(&mut app, 0, 0);
    point_cursor(&mut app, Vec3::ZERO, true);
    app.world_mut().resource_mut::<EguiBlocksPointer>().0 = true;

    click(&mut app);

    assert!(placed_objects(&mut app).is_empty());
    assert!(app.world().resource::<Selection>().active().is_some());
}

#[test]
fn placing_a_building_commits_with_authored_orientation_and_clears_state() {
    let mut app = test_app();
    enable_build_mode(&mut app);

    let spot = Vec3::new(12.0, 0.0, -8.0);
    point_cursor(&mut app, spot, true);
    select(&mut app, 0, 2);
    let def = catalog_def(&app, 0, 2);

    // Preview tracks the cursor with the building's own facing.
    let (transform, vis) = app
        .world_mut()
        .query_filtered::<(&Transform, &Visibility), With<Hologram>>()
        .single(app.world());
    assert_eq!(*vis, Visibility::Visible);
    assert_eq!(transform.translation, spot + Vec3::Y * def.half_height());
    assert_eq!(transform.rotation, def.rotation());

    click(&mut app);

    let placed = placed_objects(&mut app);
    assert_eq!(placed.len(), 1);
    let (name, translation, rotation) = &placed[0];
    assert_eq!(*name, def.name);
    assert_eq!(*translation, spot + Vec3::Y * def.half_height());
    assert_eq!(*rotation, def.rotation());

    assert!(app.world().resource::<Selection>().active().is_none());
    assert!(holograms(&mut app).is_empty());
}

#[test]
fn placed_copies_accumulate_under_the_placement_root() {
    let mut app = test_app();
    enable_build_mode(&mut app);
    point_cursor(&mut app, Vec3::new(1.0, 0.0, 1.0), true);

    select(&mut app, 1, 0);
    click(&mut app);
    select(&mut app, 2, 1);
    click(&mut app);

    let root = app.world().resource::<PlacementRoot>().0;
    let placed: Vec<Entity> = app
        .world_mut()
        .query_filtered::<Entity, With<PlacedObject>>()
        .iter(app.world())
        .collect();
    assert_eq!(placed.len(), 2);
    for entity in placed {
        let parent = app.world().get::<Parent>(entity).expect("parented");
        assert_eq!(parent.get(), root);
    }
}
