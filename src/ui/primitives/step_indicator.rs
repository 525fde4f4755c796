//! Horizontal step progress indicator
//!
//! Places one circular marker per step evenly across the canvas width, joins
//! neighbours with connector lines, and overlays a number, a done badge or a
//! tinted step icon depending on the display mode and the current step.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program`. Geometry
//! is cached in a `canvas::Cache` that every setter clears; iced also redraws
//! it when the canvas size changes. Tinted icons are kept per step index and
//! only rebuilt when that step's icon changes.

pub mod layout;

use std::cell::{RefCell, RefMut};
use std::collections::{BTreeMap, HashMap};

use iced::widget::canvas::{self, Canvas, Frame, Path, Program, Stroke, Text};
use iced::widget::image::Handle;
use iced::{Color, Element, Fill, Font, Pixels, Point, Rectangle, Renderer, Size, Theme, mouse};
use image::RgbaImage;
use serde::Deserialize;

use crate::ui::effects::tint::tint_to_handle;
use crate::ui::theme;
use layout::{Foreground, IconTint, StepLayout, StepVisual};

/// Smallest number of steps the layout can spread across a width
pub const MIN_POINTS: usize = 2;

/// What is drawn inside markers that are not completed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Step numbers
    #[default]
    Numeric,
    /// Per-step icons
    Icon,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Numeric => DisplayMode::Icon,
            DisplayMode::Icon => DisplayMode::Numeric,
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayMode::Numeric => write!(f, "Numeric"),
            DisplayMode::Icon => write!(f, "Icon"),
        }
    }
}

/// Visual parameters of the indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepStyle {
    /// Marker radius; 0 means derive it from the view height
    pub radius: f32,
    /// Connector thickness; 0 means derive it from the view height
    pub line_height: f32,
    pub font: Font,
    pub font_size: f32,
    pub background: Color,
    pub selected_background: Color,
    pub selected_text: Color,
    pub unselected_text: Color,
    pub pending_icon_background: Color,
    pub icon_checked: Color,
    pub icon_unchecked: Color,
    pub done_badge: Color,
}

impl Default for StepStyle {
    fn default() -> Self {
        Self {
            radius: 40.0,
            line_height: 1.0,
            font: Font::DEFAULT,
            font_size: 22.0,
            background: theme::STEP_BACKGROUND,
            selected_background: theme::STEP_SELECTED_BACKGROUND,
            selected_text: theme::STEP_SELECTED_TEXT,
            unselected_text: theme::STEP_UNSELECTED_TEXT,
            pending_icon_background: theme::STEP_PENDING_ICON_BACKGROUND,
            icon_checked: theme::STEP_ICON_CHECKED,
            icon_unchecked: theme::STEP_ICON_UNCHECKED,
            done_badge: theme::STEP_DONE_BADGE,
        }
    }
}

impl StepStyle {
    fn tint_color(&self, tint: IconTint) -> Color {
        match tint {
            IconTint::Checked => self.icon_checked,
            IconTint::Unchecked => self.icon_unchecked,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepperError {
    /// Fewer than [`MIN_POINTS`] steps were requested
    TooFewPoints(usize),
}

impl std::fmt::Display for StepperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepperError::TooFewPoints(n) => {
                write!(f, "a step indicator needs at least {} points, got {}", MIN_POINTS, n)
            }
        }
    }
}

impl std::error::Error for StepperError {}

/// Cached drawing resources of one step
#[derive(Default)]
struct StepLayers {
    /// Tinted icon per tint; `None` once resolution failed or found nothing
    tinted: HashMap<IconTint, Option<Handle>>,
}

/// Step progress indicator state and canvas program
pub struct StepIndicator {
    point_count: usize,
    current_index: i32,
    mode: DisplayMode,
    icons: BTreeMap<usize, String>,
    sources: HashMap<String, RgbaImage>,
    style: StepStyle,
    layers: RefCell<BTreeMap<usize, StepLayers>>,
    cache: canvas::Cache,
}

impl Default for StepIndicator {
    fn default() -> Self {
        Self {
            point_count: 3,
            current_index: 1,
            mode: DisplayMode::default(),
            icons: BTreeMap::new(),
            sources: HashMap::new(),
            style: StepStyle::default(),
            layers: RefCell::new(BTreeMap::new()),
            cache: canvas::Cache::new(),
        }
    }
}

impl StepIndicator {
    pub fn new(point_count: usize) -> Result<Self, StepperError> {
        let mut indicator = Self::default();
        indicator.set_point_count(point_count)?;
        Ok(indicator)
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn current_index(&self) -> i32 {
        self.current_index
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn style(&self) -> &StepStyle {
        &self.style
    }

    pub fn step_icon(&self, index: usize) -> Option<&str> {
        self.icons.get(&index).map(String::as_str)
    }

    /// Set the number of steps; rejects counts below [`MIN_POINTS`]
    pub fn set_point_count(&mut self, point_count: usize) -> Result<(), StepperError> {
        if point_count < MIN_POINTS {
            return Err(StepperError::TooFewPoints(point_count));
        }
        if point_count != self.point_count {
            tracing::debug!("Step count {} -> {}", self.point_count, point_count);
            self.point_count = point_count;
            self.cache.clear();
        }
        Ok(())
    }

    /// Any value is accepted; out-of-range indices render every step as
    /// pending or every step as completed.
    pub fn set_current_index(&mut self, index: i32) {
        if index != self.current_index {
            tracing::debug!("Current step {} -> {}", self.current_index, index);
            self.current_index = index;
            self.cache.clear();
        }
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if mode != self.mode {
            tracing::debug!("Display mode {} -> {}", self.mode, mode);
            self.mode = mode;
            self.cache.clear();
        }
    }

    /// Choose the icon shown for `index` in icon mode
    pub fn set_step_icon(&mut self, index: usize, identifier: impl Into<String>) {
        let identifier = identifier.into();
        if self.icons.get(&index) == Some(&identifier) {
            return;
        }
        self.icons.insert(index, identifier);
        self.layers.get_mut().remove(&index);
        self.cache.clear();
    }

    /// Supply the raster behind an icon identifier
    pub fn register_icon(&mut self, identifier: impl Into<String>, raster: RgbaImage) {
        let identifier = identifier.into();
        let icons = &self.icons;
        self.layers
            .get_mut()
            .retain(|index, _| icons.get(index) != Some(&identifier));
        self.sources.insert(identifier, raster);
        self.cache.clear();
    }

    pub fn set_style(&mut self, style: StepStyle) {
        if style != self.style {
            self.style = style;
            self.layers.get_mut().clear();
            self.cache.clear();
        }
    }

    /// Layout and per-step visuals for a canvas of `size`
    pub fn plan(&self, size: Size) -> (StepLayout, Vec<StepVisual>) {
        let layout = StepLayout::compute(self.point_count, &self.style, size);
        let visuals = layout.visuals(self.mode, self.current_index, &self.style);
        (layout, visuals)
    }

    fn layer(&self, index: usize) -> RefMut<'_, StepLayers> {
        RefMut::map(self.layers.borrow_mut(), |layers| {
            layers.entry(index).or_default()
        })
    }

    /// Tinted icon for `index`, built on first use and cached afterwards
    pub fn tinted_icon(&self, index: usize, tint: IconTint) -> Option<Handle> {
        let mut layer = self.layer(index);
        layer
            .tinted
            .entry(tint)
            .or_insert_with(|| self.build_tinted_icon(index, tint))
            .clone()
    }

    fn build_tinted_icon(&self, index: usize, tint: IconTint) -> Option<Handle> {
        let identifier = self.icons.get(&index)?;
        let Some(source) = self.sources.get(identifier) else {
            tracing::debug!("No raster for step icon '{}'", identifier);
            return None;
        };

        match tint_to_handle(source, self.style.tint_color(tint)) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!("Failed to tint step icon '{}': {}", identifier, e);
                None
            }
        }
    }

    /// Connectors share the marker background color
    fn connector_stroke(&self, layout: &StepLayout) -> Stroke<'static> {
        Stroke::default()
            .with_width(layout.line_height)
            .with_color(self.style.background)
    }

    fn paint(&self, frame: &mut Frame, size: Size) {
        if size.width <= 0.0 || size.height <= 0.0 {
            return;
        }

        let (layout, visuals) = self.plan(size);
        let diameter = 2.0 * layout.radius;

        for visual in &visuals {
            let marker = Path::rounded_rectangle(
                layout.marker_origin(visual.index),
                Size::new(diameter, diameter),
                layout.radius.into(),
            );
            frame.fill(&marker, visual.fill);

            if let Some((from, to)) = visual.connector {
                frame.stroke(&Path::line(from, to), self.connector_stroke(&layout));
            }

            match &visual.foreground {
                Foreground::Label(label) => {
                    if label.text.is_empty() {
                        continue;
                    }
                    frame.fill_text(Text {
                        content: label.text.clone(),
                        position: label.position,
                        color: label.color,
                        size: Pixels(self.style.font_size),
                        font: self.style.font,
                        align_x: iced::alignment::Horizontal::Center.into(),
                        align_y: iced::alignment::Vertical::Center,
                        ..Text::default()
                    });
                }
                Foreground::DoneBadge(bounds) => {
                    draw_done_badge(frame, *bounds, self.style.done_badge);
                }
                Foreground::StepIcon { tint, bounds } => {
                    if let Some(handle) = self.tinted_icon(visual.index, *tint) {
                        frame.draw_image(*bounds, canvas::Image::new(handle));
                    }
                }
            }
        }
    }
}

/// Built-in checkmark badge
fn draw_done_badge(frame: &mut Frame, bounds: Rectangle, color: Color) {
    let center = bounds.center();
    let radius = bounds.width.min(bounds.height) / 2.0;
    frame.fill(&Path::circle(center, radius), color);

    let unit = radius / 10.0;
    let check = Path::new(|builder| {
        builder.move_to(Point::new(center.x - 5.0 * unit, center.y));
        builder.line_to(Point::new(center.x - 1.5 * unit, center.y + 3.5 * unit));
        builder.line_to(Point::new(center.x + 5.0 * unit, center.y - 4.0 * unit));
    });
    frame.stroke(
        &check,
        Stroke::default()
            .with_width(2.0 * unit)
            .with_color(Color::WHITE)
            .with_line_cap(canvas::LineCap::Round)
            .with_line_join(canvas::LineJoin::Round),
    );
}

impl<Message> Program<Message> for StepIndicator {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame| self.paint(frame, bounds.size()));
        vec![geometry]
    }
}

/// Create a full-width step indicator element
pub fn view<'a, Message: 'a>(indicator: &'a StepIndicator, height: f32) -> Element<'a, Message> {
    Canvas::new(indicator).width(Fill).height(height).into()
}
