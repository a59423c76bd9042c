// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable map state and its event-driven transitions.

use alloc::vec::Vec;

use hotspot_hit::HitIndex;
use hotspot_popup::PopupPlacement;
use hotspot_region::{LayoutVariant, RegionId, VariantSet};
use hotspot_view::{ImageTransform, RenderState, TransformUnavailable};
use kurbo::{Point, Size};

use crate::HotspotConfig;

/// Kind of device that produced an activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DeviceKind {
    /// Mouse or pen.
    #[default]
    Pointer,
    /// Touch screen.
    Touch,
}

/// Something that happened to the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapEvent {
    /// The image finished loading; carries the first reported render state.
    LoadComplete(RenderState),
    /// The viewport changed size. `render` is the image's new render state if
    /// the surface already knows it.
    Resize {
        /// New viewport size.
        viewport: Size,
        /// Updated render state, if available.
        render: Option<RenderState>,
    },
    /// The image box moved or resized without a viewport resize (reflow).
    LayoutChanged(RenderState),
    /// A click or tap at an absolute viewport point.
    Activate {
        /// Viewport coordinates of the activation.
        point: Point,
        /// Source device.
        device: DeviceKind,
    },
    /// Explicit close (close button, backdrop, escape key).
    Dismiss,
    /// A press anywhere on the page; closes the popup when it lands outside it.
    OutsidePress {
        /// Viewport coordinates of the press.
        point: Point,
    },
}

/// Observable consequence of a transition, for the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// The active layout variant switched.
    VariantChanged {
        /// Previous variant index.
        from: usize,
        /// New variant index.
        to: usize,
    },
    /// Hit targets must be re-derived before the next render.
    OverlaysInvalidated,
    /// A popup opened for a region.
    PopupOpened {
        /// Region index in the active variant.
        region: usize,
        /// Region id.
        id: RegionId,
    },
    /// The open popup closed.
    PopupClosed,
}

/// A popup currently shown for a region.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenPopup {
    /// Region index in the active variant.
    pub region: usize,
    /// Region id.
    pub id: RegionId,
    /// Anchor in viewport coordinates.
    pub anchor: Point,
    /// Computed placement.
    pub placement: PopupPlacement,
    /// Device that opened it.
    pub device: DeviceKind,
}

/// Snapshot of everything that changes while a map is on screen.
///
/// A snapshot is never mutated. [`MapState::apply`] returns the next snapshot
/// together with the effects the change produced.
#[derive(Clone, Debug, PartialEq)]
pub struct MapState {
    viewport: Size,
    variant: usize,
    render: Option<RenderState>,
    popup: Option<OpenPopup>,
}

/// Result of [`MapState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Next snapshot.
    pub state: MapState,
    /// Effects, in the order they happened.
    pub effects: Vec<Effect>,
}

impl MapState {
    /// Initial state for a viewport, before the image has loaded.
    #[must_use]
    pub fn initial<D>(variants: &VariantSet<D>, viewport: Size) -> Self {
        Self {
            viewport,
            variant: variants.select(viewport.width),
            render: None,
            popup: None,
        }
    }

    /// Current viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Index of the active variant.
    #[must_use]
    pub fn variant(&self) -> usize {
        self.variant
    }

    /// The active variant.
    ///
    /// # Panics
    ///
    /// Panics if `variants` is not the set this state was created from.
    #[must_use]
    pub fn active_variant<'a, D>(&self, variants: &'a VariantSet<D>) -> &'a LayoutVariant<D> {
        &variants.variants()[self.variant]
    }

    /// Last reported render state of the active variant's image.
    #[must_use]
    pub fn render(&self) -> Option<&RenderState> {
        self.render.as_ref()
    }

    /// Whether the active image has loaded and reported a render state.
    #[must_use]
    pub fn loaded(&self) -> bool {
        self.render.is_some()
    }

    /// The open popup, if any.
    #[must_use]
    pub fn popup(&self) -> Option<&OpenPopup> {
        self.popup.as_ref()
    }

    /// Natural-to-screen transform for the active variant.
    ///
    /// Region coordinates are authored in the variant's declared natural
    /// space, so that size drives the scale. The reported natural size only
    /// has to be valid, proving the image has decoded.
    pub fn transform<D>(
        &self,
        variants: &VariantSet<D>,
        config: &HotspotConfig,
    ) -> Result<ImageTransform, TransformUnavailable> {
        let render = self.render.ok_or(TransformUnavailable::NaturalSizeUnknown)?;
        let reported = render.natural_size();
        if !(reported.width > 0.0 && reported.height > 0.0) {
            return Err(TransformUnavailable::NaturalSizeUnknown);
        }
        let declared = self.active_variant(variants).natural_size();
        if reported != declared {
            log::debug!(
                "reported natural size {}x{} differs from declared {}x{}; using declared",
                reported.width,
                reported.height,
                declared.width,
                declared.height,
            );
        }
        Ok(ImageTransform::new(declared, render.image_box)?.with_min_size(config.min_hit_size))
    }

    /// Hit targets for the active variant, or `None` while the transform is unavailable.
    #[must_use]
    pub fn hit_index<D>(
        &self,
        variants: &VariantSet<D>,
        config: &HotspotConfig,
    ) -> Option<HitIndex> {
        let transform = self.transform(variants, config).ok()?;
        Some(HitIndex::build(
            self.active_variant(variants),
            &transform,
            config.hit_mode,
        ))
    }

    /// Computes the next state for `event`.
    #[must_use]
    pub fn apply<D>(
        &self,
        variants: &VariantSet<D>,
        config: &HotspotConfig,
        event: MapEvent,
    ) -> Transition {
        let mut next = self.clone();
        let mut effects = Vec::new();
        log::trace!("map event {event:?}");

        match event {
            MapEvent::LoadComplete(render) => {
                if next.render != Some(render) {
                    next.close_popup(&mut effects);
                    next.render = Some(render);
                    effects.push(Effect::OverlaysInvalidated);
                }
            }
            MapEvent::Resize { viewport, render } => {
                // Anchors were computed against the old box; close rather than reposition.
                next.close_popup(&mut effects);
                next.viewport = viewport;
                let variant = variants.select(viewport.width);
                if variant != next.variant {
                    log::debug!(
                        "viewport width {} switches variant {:?} -> {:?}",
                        viewport.width,
                        variants.variants()[next.variant].name,
                        variants.variants()[variant].name,
                    );
                    effects.push(Effect::VariantChanged {
                        from: next.variant,
                        to: variant,
                    });
                    next.variant = variant;
                    // The new variant's image has to load before overlays return.
                    next.render = None;
                } else if render.is_some() {
                    next.render = render;
                }
                effects.push(Effect::OverlaysInvalidated);
            }
            MapEvent::LayoutChanged(render) => {
                if next.render != Some(render) {
                    next.close_popup(&mut effects);
                    next.render = Some(render);
                    effects.push(Effect::OverlaysInvalidated);
                }
            }
            MapEvent::Activate { point, device } => {
                next.activate(variants, config, point, device, &mut effects);
            }
            MapEvent::Dismiss => next.close_popup(&mut effects),
            MapEvent::OutsidePress { point } => {
                if next
                    .popup
                    .as_ref()
                    .is_some_and(|p| !p.placement.contains(point))
                {
                    next.close_popup(&mut effects);
                }
            }
        }

        Transition {
            state: next,
            effects,
        }
    }

    fn close_popup(&mut self, effects: &mut Vec<Effect>) {
        if let Some(popup) = self.popup.take() {
            log::debug!("closing popup for region {}", popup.id);
            effects.push(Effect::PopupClosed);
        }
    }

    fn activate<D>(
        &mut self,
        variants: &VariantSet<D>,
        config: &HotspotConfig,
        point: Point,
        device: DeviceKind,
        effects: &mut Vec<Effect>,
    ) {
        let transform = match self.transform(variants, config) {
            Ok(t) => t,
            Err(why) => {
                log::debug!("ignoring activation at ({}, {}): {why}", point.x, point.y);
                return;
            }
        };
        let variant = self.active_variant(variants);
        let index = HitIndex::build(variant, &transform, config.hit_mode);
        let Some(target) = index.resolve_screen(point) else {
            return;
        };
        let region = &variant.regions[target.index];
        let anchor = transform.natural_to_screen(region.anchor());
        let placement = hotspot_popup::place(&config.popup.request(anchor, self.viewport));

        self.close_popup(effects);
        log::debug!(
            "opening popup for region {} ({device:?}) at ({}, {})",
            region.id,
            placement.left,
            placement.top,
        );
        effects.push(Effect::PopupOpened {
            region: target.index,
            id: region.id.clone(),
        });
        self.popup = Some(OpenPopup {
            region: target.index,
            id: region.id.clone(),
            anchor,
            placement,
            device,
        });
    }
}
