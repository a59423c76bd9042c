// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter between a host UI runtime and the pure map state.
//!
//! The host owns event registration (resize listeners, image load callbacks,
//! layout observers, pointer handlers) and forwards each notification to the
//! matching `on_*` method. The controller keeps the current [`MapState`], a
//! cached [`HitIndex`] for rendering overlays, and the resize debouncer.

use alloc::vec::Vec;

use hotspot_hit::{HitIndex, HitTarget};
use hotspot_region::{DatasetError, LayoutVariant, Region, VariantSet};
use hotspot_view::RenderState;
use kurbo::{Point, Size};

use crate::{DeviceKind, Effect, HotspotConfig, MapEvent, MapState, OpenPopup, ResizeDebouncer};

/// Owns a dataset, its configuration, and the live state of one map.
#[derive(Debug)]
pub struct HotspotController<D = alloc::string::String> {
    variants: VariantSet<D>,
    config: HotspotConfig,
    state: MapState,
    hits: Option<HitIndex>,
    debouncer: ResizeDebouncer,
    pending_render: Option<RenderState>,
}

impl<D> HotspotController<D> {
    /// Creates a controller for a viewport of the given size.
    #[must_use]
    pub fn new(variants: VariantSet<D>, config: HotspotConfig, viewport: Size) -> Self {
        let state = MapState::initial(&variants, viewport);
        Self {
            variants,
            debouncer: ResizeDebouncer::new(config.resize_debounce_ms),
            config,
            state,
            hits: None,
            pending_render: None,
        }
    }

    /// Builds the common two-breakpoint layout split at `config.breakpoint`.
    ///
    /// `narrow` covers widths below the breakpoint and `wide` the rest; their
    /// `min_viewport_width` fields are overwritten.
    pub fn desktop_mobile(
        narrow: LayoutVariant<D>,
        wide: LayoutVariant<D>,
        config: HotspotConfig,
        viewport: Size,
    ) -> Result<Self, DatasetError> {
        let variants = VariantSet::desktop_mobile(config.breakpoint, narrow, wide)?;
        Ok(Self::new(variants, config, viewport))
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &MapState {
        &self.state
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &HotspotConfig {
        &self.config
    }

    /// The dataset.
    #[must_use]
    pub fn variants(&self) -> &VariantSet<D> {
        &self.variants
    }

    /// The active layout variant.
    #[must_use]
    pub fn active_variant(&self) -> &LayoutVariant<D> {
        self.state.active_variant(&self.variants)
    }

    /// Hit targets to render as overlays.
    ///
    /// `None` while the image is not ready and while a resize is settling.
    #[must_use]
    pub fn hit_targets(&self) -> Option<&[HitTarget]> {
        self.hits.as_ref().map(HitIndex::targets)
    }

    /// The open popup and the region it shows.
    #[must_use]
    pub fn popup(&self) -> Option<(&OpenPopup, &Region<D>)> {
        let popup = self.state.popup()?;
        let region = self.active_variant().regions.get(popup.region)?;
        Some((popup, region))
    }

    /// Image finished loading.
    pub fn on_load(&mut self, render: RenderState) -> Vec<Effect> {
        self.dispatch(MapEvent::LoadComplete(render))
    }

    /// Raw viewport resize notification at `now_ms`.
    ///
    /// An open popup closes immediately and overlays are withdrawn. Layout is
    /// re-resolved by [`Self::tick`] once resizing settles; until then
    /// activations are ignored.
    pub fn on_resize(
        &mut self,
        viewport: Size,
        render: Option<RenderState>,
        now_ms: u64,
    ) -> Vec<Effect> {
        self.debouncer.push(viewport, now_ms);
        if render.is_some() {
            self.pending_render = render;
        }
        self.hits = None;
        if self.state.popup().is_some() {
            self.dispatch(MapEvent::Dismiss)
        } else {
            Vec::new()
        }
    }

    /// Returns `true` while a resize is waiting for the debounce interval.
    #[must_use]
    pub fn resize_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Applies a settled resize, if the debounce interval has elapsed.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Effect> {
        match self.debouncer.poll(now_ms) {
            Some(viewport) => self.apply_resize(viewport),
            None => Vec::new(),
        }
    }

    /// Applies any pending resize right away.
    pub fn flush_resize(&mut self) -> Vec<Effect> {
        match self.debouncer.flush() {
            Some(viewport) => self.apply_resize(viewport),
            None => Vec::new(),
        }
    }

    /// Image box moved or resized without a viewport resize.
    pub fn on_layout(&mut self, render: RenderState) -> Vec<Effect> {
        self.dispatch(MapEvent::LayoutChanged(render))
    }

    /// Click or tap at an absolute viewport point.
    ///
    /// Ignored while a resize is settling: the popup would be placed against
    /// a viewport that is about to change.
    pub fn on_activate(&mut self, point: Point, device: DeviceKind) -> Vec<Effect> {
        if self.debouncer.is_pending() {
            log::debug!("ignoring activation during resize");
            return Vec::new();
        }
        self.dispatch(MapEvent::Activate { point, device })
    }

    /// Explicit close.
    pub fn on_dismiss(&mut self) -> Vec<Effect> {
        self.dispatch(MapEvent::Dismiss)
    }

    /// Press anywhere on the page; closes the popup if outside it.
    pub fn on_press(&mut self, point: Point) -> Vec<Effect> {
        self.dispatch(MapEvent::OutsidePress { point })
    }

    fn apply_resize(&mut self, viewport: Size) -> Vec<Effect> {
        let render = self.pending_render.take();
        self.dispatch(MapEvent::Resize { viewport, render })
    }

    fn dispatch(&mut self, event: MapEvent) -> Vec<Effect> {
        let transition = self.state.apply(&self.variants, &self.config, event);
        self.state = transition.state;
        if self.debouncer.is_pending() {
            self.hits = None;
        } else if transition.effects.iter().any(|e| {
            matches!(e, Effect::OverlaysInvalidated | Effect::VariantChanged { .. })
        }) {
            self.hits = self.state.hit_index(&self.variants, &self.config);
        }
        transition.effects
    }
}
