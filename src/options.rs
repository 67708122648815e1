//! Option resolution
//!
//! Panels are configured in two tiers: per-panel overrides (`SwipeBarOptions`,
//! every field optional) layered over process-wide defaults (`DefaultOptions`).
//! `resolve` merges the two into an `EffectiveOptions` with every field
//! populated. Downstream code never sees an optional option again.

use serde::{Deserialize, Serialize};

use crate::panel::PanelSide;

pub const TRANSITION_MS: u32 = 200;
pub const PANE_WIDTH_PX: f32 = 320.0;
pub const PANE_HEIGHT_PX: f32 = 400.0;
pub const EDGE_ACTIVATION_REGION_PX: f32 = 40.0;
pub const DRAG_ACTIVATION_DELTA_PX: f32 = 20.0;
pub const SHOW_OVERLAY: bool = true;
pub const CLOSE_ON_OVERLAY_CLICK: bool = true;
pub const DEFAULT_OVERLAY_BACKGROUND_COLOR: &str = "rgba(0, 0, 0, 0.5)";
pub const SHOW_TOGGLE: bool = true;
pub const DEFAULT_TOGGLE_ICON_SIZE_PX: f32 = 40.0;
pub const DEFAULT_TOGGLE_ICON_COLOR: &str = "white";
pub const DEFAULT_TOGGLE_ICON_EDGE_DISTANCE_PX: f32 = 40.0;
pub const MEDIA_QUERY_WIDTH: f32 = 640.0;
pub const DEFAULT_SWIPEBAR_Z_INDEX: i32 = 30;
pub const DEFAULT_TOGGLE_Z_INDEX: i32 = 20;
pub const DEFAULT_OVERLAY_Z_INDEX: i32 = 15;
pub const FADE_CONTENT: bool = true;
pub const FADE_CONTENT_TRANSITION_MS: u32 = 100;
pub const SWIPE_TO_OPEN: bool = true;
pub const SWIPE_TO_CLOSE: bool = true;
pub const MID_ANCHOR_POINT: bool = false;
pub const IS_ABSOLUTE: bool = false;

/// Partial panel options - anything left as `None` falls back to the defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwipeBarOptions {
    pub transition_ms: Option<u32>,
    pub sidebar_width_px: Option<f32>,
    pub sidebar_height_px: Option<f32>,
    pub is_absolute: Option<bool>,
    pub edge_activation_width_px: Option<f32>,
    pub drag_activation_delta_px: Option<f32>,
    pub show_overlay: Option<bool>,
    pub close_on_overlay_click: Option<bool>,
    pub overlay_background_color: Option<String>,
    pub show_toggle: Option<bool>,
    pub toggle_icon_size_px: Option<f32>,
    pub toggle_icon_color: Option<String>,
    pub toggle_icon_edge_distance_px: Option<f32>,
    pub media_query_width: Option<f32>,
    pub swipe_bar_z_index: Option<i32>,
    pub toggle_z_index: Option<i32>,
    pub overlay_z_index: Option<i32>,
    pub fade_content: Option<bool>,
    pub fade_content_transition_ms: Option<u32>,
    pub swipe_to_open: Option<bool>,
    pub swipe_to_close: Option<bool>,
    pub mid_anchor_point: Option<bool>,
    pub mid_anchor_point_px: Option<f32>,
    pub disabled: Option<bool>,
}

impl SwipeBarOptions {
    /// Field-wise merge where values set in `newer` win
    pub fn merge(&self, newer: &SwipeBarOptions) -> SwipeBarOptions {
        SwipeBarOptions {
            transition_ms: newer.transition_ms.or(self.transition_ms),
            sidebar_width_px: newer.sidebar_width_px.or(self.sidebar_width_px),
            sidebar_height_px: newer.sidebar_height_px.or(self.sidebar_height_px),
            is_absolute: newer.is_absolute.or(self.is_absolute),
            edge_activation_width_px: newer
                .edge_activation_width_px
                .or(self.edge_activation_width_px),
            drag_activation_delta_px: newer
                .drag_activation_delta_px
                .or(self.drag_activation_delta_px),
            show_overlay: newer.show_overlay.or(self.show_overlay),
            close_on_overlay_click: newer.close_on_overlay_click.or(self.close_on_overlay_click),
            overlay_background_color: newer
                .overlay_background_color
                .clone()
                .or_else(|| self.overlay_background_color.clone()),
            show_toggle: newer.show_toggle.or(self.show_toggle),
            toggle_icon_size_px: newer.toggle_icon_size_px.or(self.toggle_icon_size_px),
            toggle_icon_color: newer
                .toggle_icon_color
                .clone()
                .or_else(|| self.toggle_icon_color.clone()),
            toggle_icon_edge_distance_px: newer
                .toggle_icon_edge_distance_px
                .or(self.toggle_icon_edge_distance_px),
            media_query_width: newer.media_query_width.or(self.media_query_width),
            swipe_bar_z_index: newer.swipe_bar_z_index.or(self.swipe_bar_z_index),
            toggle_z_index: newer.toggle_z_index.or(self.toggle_z_index),
            overlay_z_index: newer.overlay_z_index.or(self.overlay_z_index),
            fade_content: newer.fade_content.or(self.fade_content),
            fade_content_transition_ms: newer
                .fade_content_transition_ms
                .or(self.fade_content_transition_ms),
            swipe_to_open: newer.swipe_to_open.or(self.swipe_to_open),
            swipe_to_close: newer.swipe_to_close.or(self.swipe_to_close),
            mid_anchor_point: newer.mid_anchor_point.or(self.mid_anchor_point),
            mid_anchor_point_px: newer.mid_anchor_point_px.or(self.mid_anchor_point_px),
            disabled: newer.disabled.or(self.disabled),
        }
    }
}

/// Process-wide defaults shared by every panel
///
/// Fully populated except for `mid_anchor_point_px`: when unset it is derived
/// from each panel's resolved height.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultOptions {
    pub transition_ms: u32,
    pub sidebar_width_px: f32,
    pub sidebar_height_px: f32,
    pub is_absolute: bool,
    pub edge_activation_width_px: f32,
    pub drag_activation_delta_px: f32,
    pub show_overlay: bool,
    pub close_on_overlay_click: bool,
    pub overlay_background_color: String,
    pub show_toggle: bool,
    pub toggle_icon_size_px: f32,
    pub toggle_icon_color: String,
    pub toggle_icon_edge_distance_px: f32,
    pub media_query_width: f32,
    pub swipe_bar_z_index: i32,
    pub toggle_z_index: i32,
    pub overlay_z_index: i32,
    pub fade_content: bool,
    pub fade_content_transition_ms: u32,
    pub swipe_to_open: bool,
    pub swipe_to_close: bool,
    pub mid_anchor_point: bool,
    pub mid_anchor_point_px: Option<f32>,
    pub disabled: bool,
}

impl Default for DefaultOptions {
    fn default() -> Self {
        Self {
            transition_ms: TRANSITION_MS,
            sidebar_width_px: PANE_WIDTH_PX,
            sidebar_height_px: PANE_HEIGHT_PX,
            is_absolute: IS_ABSOLUTE,
            edge_activation_width_px: EDGE_ACTIVATION_REGION_PX,
            drag_activation_delta_px: DRAG_ACTIVATION_DELTA_PX,
            show_overlay: SHOW_OVERLAY,
            close_on_overlay_click: CLOSE_ON_OVERLAY_CLICK,
            overlay_background_color: DEFAULT_OVERLAY_BACKGROUND_COLOR.to_string(),
            show_toggle: SHOW_TOGGLE,
            toggle_icon_size_px: DEFAULT_TOGGLE_ICON_SIZE_PX,
            toggle_icon_color: DEFAULT_TOGGLE_ICON_COLOR.to_string(),
            toggle_icon_edge_distance_px: DEFAULT_TOGGLE_ICON_EDGE_DISTANCE_PX,
            media_query_width: MEDIA_QUERY_WIDTH,
            swipe_bar_z_index: DEFAULT_SWIPEBAR_Z_INDEX,
            toggle_z_index: DEFAULT_TOGGLE_Z_INDEX,
            overlay_z_index: DEFAULT_OVERLAY_Z_INDEX,
            fade_content: FADE_CONTENT,
            fade_content_transition_ms: FADE_CONTENT_TRANSITION_MS,
            swipe_to_open: SWIPE_TO_OPEN,
            swipe_to_close: SWIPE_TO_CLOSE,
            mid_anchor_point: MID_ANCHOR_POINT,
            mid_anchor_point_px: None,
            disabled: false,
        }
    }
}

impl DefaultOptions {
    /// Provider-level defaults: `overrides` over the built-in constants
    pub fn from_overrides(overrides: &SwipeBarOptions) -> Self {
        let base = Self::default();
        Self {
            transition_ms: overrides.transition_ms.unwrap_or(base.transition_ms),
            sidebar_width_px: overrides.sidebar_width_px.unwrap_or(base.sidebar_width_px),
            sidebar_height_px: overrides.sidebar_height_px.unwrap_or(base.sidebar_height_px),
            is_absolute: overrides.is_absolute.unwrap_or(base.is_absolute),
            edge_activation_width_px: overrides
                .edge_activation_width_px
                .unwrap_or(base.edge_activation_width_px),
            drag_activation_delta_px: overrides
                .drag_activation_delta_px
                .unwrap_or(base.drag_activation_delta_px),
            show_overlay: overrides.show_overlay.unwrap_or(base.show_overlay),
            close_on_overlay_click: overrides
                .close_on_overlay_click
                .unwrap_or(base.close_on_overlay_click),
            overlay_background_color: overrides
                .overlay_background_color
                .clone()
                .unwrap_or(base.overlay_background_color),
            show_toggle: overrides.show_toggle.unwrap_or(base.show_toggle),
            toggle_icon_size_px: overrides
                .toggle_icon_size_px
                .unwrap_or(base.toggle_icon_size_px),
            toggle_icon_color: overrides
                .toggle_icon_color
                .clone()
                .unwrap_or(base.toggle_icon_color),
            toggle_icon_edge_distance_px: overrides
                .toggle_icon_edge_distance_px
                .unwrap_or(base.toggle_icon_edge_distance_px),
            media_query_width: overrides.media_query_width.unwrap_or(base.media_query_width),
            swipe_bar_z_index: overrides.swipe_bar_z_index.unwrap_or(base.swipe_bar_z_index),
            toggle_z_index: overrides.toggle_z_index.unwrap_or(base.toggle_z_index),
            overlay_z_index: overrides.overlay_z_index.unwrap_or(base.overlay_z_index),
            fade_content: overrides.fade_content.unwrap_or(base.fade_content),
            fade_content_transition_ms: overrides
                .fade_content_transition_ms
                .unwrap_or(base.fade_content_transition_ms),
            swipe_to_open: overrides.swipe_to_open.unwrap_or(base.swipe_to_open),
            swipe_to_close: overrides.swipe_to_close.unwrap_or(base.swipe_to_close),
            mid_anchor_point: overrides.mid_anchor_point.unwrap_or(base.mid_anchor_point),
            mid_anchor_point_px: overrides.mid_anchor_point_px,
            disabled: overrides.disabled.unwrap_or(base.disabled),
        }
    }
}

/// Fully resolved options for one panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveOptions {
    pub transition_ms: u32,
    pub sidebar_width_px: f32,
    pub sidebar_height_px: f32,
    pub is_absolute: bool,
    pub edge_activation_width_px: f32,
    pub drag_activation_delta_px: f32,
    pub show_overlay: bool,
    pub close_on_overlay_click: bool,
    pub overlay_background_color: String,
    pub show_toggle: bool,
    pub toggle_icon_size_px: f32,
    pub toggle_icon_color: String,
    pub toggle_icon_edge_distance_px: f32,
    pub media_query_width: f32,
    pub swipe_bar_z_index: i32,
    pub toggle_z_index: i32,
    pub overlay_z_index: i32,
    pub fade_content: bool,
    pub fade_content_transition_ms: u32,
    pub swipe_to_open: bool,
    pub swipe_to_close: bool,
    pub mid_anchor_point: bool,
    pub mid_anchor_point_px: f32,
    pub disabled: bool,
}

impl Default for EffectiveOptions {
    fn default() -> Self {
        resolve(
            PanelSide::Left,
            &SwipeBarOptions::default(),
            &DefaultOptions::default(),
        )
    }
}

impl EffectiveOptions {
    /// Panel size along its axis: width for left/right, height for bottom
    pub fn extent_px(&self, side: PanelSide) -> f32 {
        match side {
            PanelSide::Left | PanelSide::Right => self.sidebar_width_px,
            PanelSide::Bottom => self.sidebar_height_px,
        }
    }

    /// Whether the bottom panel uses its three-state behavior
    ///
    /// Requires mid-anchor enabled, swipe-to-open disabled, and an anchor
    /// strictly inside the panel height.
    pub fn mid_anchor_active(&self) -> bool {
        self.mid_anchor_point
            && !self.swipe_to_open
            && self.mid_anchor_point_px < self.sidebar_height_px
    }
}

/// Merge per-panel overrides over the process defaults
///
/// Pure: identical inputs always produce identical output.
pub fn resolve(
    side: PanelSide,
    overrides: &SwipeBarOptions,
    defaults: &DefaultOptions,
) -> EffectiveOptions {
    let sidebar_width_px = overrides.sidebar_width_px.unwrap_or(defaults.sidebar_width_px);
    let sidebar_height_px = overrides
        .sidebar_height_px
        .unwrap_or(defaults.sidebar_height_px);

    let extent = match side {
        PanelSide::Left | PanelSide::Right => sidebar_width_px,
        PanelSide::Bottom => sidebar_height_px,
    };
    let mid_anchor_point_px = overrides
        .mid_anchor_point_px
        .or(defaults.mid_anchor_point_px)
        .unwrap_or(extent / 3.0);

    EffectiveOptions {
        transition_ms: overrides.transition_ms.unwrap_or(defaults.transition_ms),
        sidebar_width_px,
        sidebar_height_px,
        is_absolute: overrides.is_absolute.unwrap_or(defaults.is_absolute),
        edge_activation_width_px: overrides
            .edge_activation_width_px
            .unwrap_or(defaults.edge_activation_width_px),
        drag_activation_delta_px: overrides
            .drag_activation_delta_px
            .unwrap_or(defaults.drag_activation_delta_px),
        show_overlay: overrides.show_overlay.unwrap_or(defaults.show_overlay),
        close_on_overlay_click: overrides
            .close_on_overlay_click
            .unwrap_or(defaults.close_on_overlay_click),
        overlay_background_color: overrides
            .overlay_background_color
            .clone()
            .unwrap_or_else(|| defaults.overlay_background_color.clone()),
        show_toggle: overrides.show_toggle.unwrap_or(defaults.show_toggle),
        toggle_icon_size_px: overrides
            .toggle_icon_size_px
            .unwrap_or(defaults.toggle_icon_size_px),
        toggle_icon_color: overrides
            .toggle_icon_color
            .clone()
            .unwrap_or_else(|| defaults.toggle_icon_color.clone()),
        toggle_icon_edge_distance_px: overrides
            .toggle_icon_edge_distance_px
            .unwrap_or(defaults.toggle_icon_edge_distance_px),
        media_query_width: overrides
            .media_query_width
            .unwrap_or(defaults.media_query_width),
        swipe_bar_z_index: overrides
            .swipe_bar_z_index
            .unwrap_or(defaults.swipe_bar_z_index),
        toggle_z_index: overrides.toggle_z_index.unwrap_or(defaults.toggle_z_index),
        overlay_z_index: overrides.overlay_z_index.unwrap_or(defaults.overlay_z_index),
        fade_content: overrides.fade_content.unwrap_or(defaults.fade_content),
        fade_content_transition_ms: overrides
            .fade_content_transition_ms
            .unwrap_or(defaults.fade_content_transition_ms),
        swipe_to_open: overrides.swipe_to_open.unwrap_or(defaults.swipe_to_open),
        swipe_to_close: overrides.swipe_to_close.unwrap_or(defaults.swipe_to_close),
        mid_anchor_point: overrides
            .mid_anchor_point
            .unwrap_or(defaults.mid_anchor_point),
        mid_anchor_point_px,
        disabled: overrides.disabled.unwrap_or(defaults.disabled),
    }
}
