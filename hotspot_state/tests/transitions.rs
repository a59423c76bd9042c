// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for [`MapState::apply`] used directly, without a controller.

use hotspot_region::{LayoutVariant, Region, Shape, VariantSet};
use hotspot_state::{DeviceKind, Effect, HotspotConfig, MapEvent, MapState};
use hotspot_view::{ImageBox, RenderState};
use kurbo::{Point, Size};

fn variants() -> VariantSet {
    let square = |id: &str, x: f64| {
        Region::new(
            id,
            id,
            Shape::rect(x, 10.0, x + 20.0, 30.0).unwrap(),
            String::new(),
        )
    };
    VariantSet::desktop_mobile(
        768.0,
        LayoutVariant::new("mobile", 0.0, (200.0, 200.0), vec![square("a", 10.0)]),
        LayoutVariant::new(
            "desktop",
            0.0,
            (400.0, 400.0),
            vec![square("a", 10.0), square("b", 100.0)],
        ),
    )
    .unwrap()
}

fn loaded(variants: &VariantSet, config: &HotspotConfig) -> MapState {
    let render = RenderState::new((400.0, 400.0), ImageBox::new(0.0, 0.0, 400.0, 400.0));
    MapState::initial(variants, Size::new(1024.0, 768.0))
        .apply(variants, config, MapEvent::LoadComplete(render))
        .state
}

#[test]
fn apply_leaves_the_previous_snapshot_untouched() {
    let variants = variants();
    let config = HotspotConfig::default();
    let before = loaded(&variants, &config);
    let copy = before.clone();

    let after = before.apply(
        &variants,
        &config,
        MapEvent::Activate {
            point: Point::new(110.0, 20.0),
            device: DeviceKind::Pointer,
        },
    );
    assert_eq!(before, copy);
    assert!(before.popup().is_none());
    assert_eq!(after.state.popup().map(|p| p.id.as_str()), Some("b"));
}

#[test]
fn load_is_idempotent() {
    let variants = variants();
    let config = HotspotConfig::default();
    let state = loaded(&variants, &config);
    let render = *state.render().unwrap();
    let again = state.apply(&variants, &config, MapEvent::LoadComplete(render));
    assert!(again.effects.is_empty());
    assert_eq!(again.state, state);
}

#[test]
fn resize_within_a_variant_keeps_render_unless_replaced() {
    let variants = variants();
    let config = HotspotConfig::default();
    let state = loaded(&variants, &config);

    let kept = state.apply(
        &variants,
        &config,
        MapEvent::Resize {
            viewport: Size::new(900.0, 700.0),
            render: None,
        },
    );
    assert_eq!(kept.effects, vec![Effect::OverlaysInvalidated]);
    assert_eq!(kept.state.render(), state.render());

    let smaller = RenderState::new((400.0, 400.0), ImageBox::new(0.0, 0.0, 300.0, 300.0));
    let replaced = state.apply(
        &variants,
        &config,
        MapEvent::Resize {
            viewport: Size::new(900.0, 700.0),
            render: Some(smaller),
        },
    );
    assert_eq!(replaced.state.render(), Some(&smaller));
    let transform = replaced.state.transform(&variants, &config).unwrap();
    assert_eq!(transform.scale().sx, 0.75);
}

#[test]
fn resize_closes_popup_even_without_variant_change() {
    let variants = variants();
    let config = HotspotConfig::default();
    let open = loaded(&variants, &config)
        .apply(
            &variants,
            &config,
            MapEvent::Activate {
                point: Point::new(20.0, 20.0),
                device: DeviceKind::Touch,
            },
        )
        .state;
    assert!(open.popup().is_some());

    let t = open.apply(
        &variants,
        &config,
        MapEvent::Resize {
            viewport: Size::new(1000.0, 768.0),
            render: None,
        },
    );
    assert_eq!(
        t.effects,
        vec![Effect::PopupClosed, Effect::OverlaysInvalidated]
    );
    assert!(t.state.popup().is_none());
    assert_eq!(t.state.variant(), 1);
}

#[test]
fn narrowing_drops_render_until_next_load() {
    let variants = variants();
    let config = HotspotConfig::default();
    let t = loaded(&variants, &config).apply(
        &variants,
        &config,
        MapEvent::Resize {
            viewport: Size::new(500.0, 800.0),
            render: Some(RenderState::new(
                (200.0, 200.0),
                ImageBox::new(0.0, 0.0, 200.0, 200.0),
            )),
        },
    );
    assert_eq!(t.state.variant(), 0);
    assert!(!t.state.loaded());
    assert!(t.state.transform(&variants, &config).is_err());
    assert!(t.state.hit_index(&variants, &config).is_none());
}

#[test]
fn activation_uses_declared_natural_size() {
    let variants = variants();
    let config = HotspotConfig::default();
    // The image reports a different intrinsic size than the dataset declares.
    let render = RenderState::new((800.0, 800.0), ImageBox::new(0.0, 0.0, 200.0, 200.0));
    let state = MapState::initial(&variants, Size::new(1024.0, 768.0))
        .apply(&variants, &config, MapEvent::LoadComplete(render))
        .state;
    let transform = state.transform(&variants, &config).unwrap();
    assert_eq!(transform.scale().sx, 0.5);

    // Region `b` spans natural x 100..120, i.e. 50..60 on screen.
    let t = state.apply(
        &variants,
        &config,
        MapEvent::Activate {
            point: Point::new(55.0, 10.0),
            device: DeviceKind::Pointer,
        },
    );
    assert_eq!(t.state.popup().map(|p| p.id.as_str()), Some("b"));
}

#[test]
fn dismiss_without_popup_is_silent() {
    let variants = variants();
    let config = HotspotConfig::default();
    let state = loaded(&variants, &config);
    let t = state.apply(&variants, &config, MapEvent::Dismiss);
    assert!(t.effects.is_empty());
    let t = state.apply(
        &variants,
        &config,
        MapEvent::OutsidePress {
            point: Point::new(1.0, 1.0),
        },
    );
    assert!(t.effects.is_empty());
}
