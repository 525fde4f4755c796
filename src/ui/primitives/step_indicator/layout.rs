//! Step indicator geometry and per-step styling
//!
//! Everything here is pure: given a configuration and the canvas size it
//! returns where each marker goes and how it looks. The canvas program only
//! paints the result.

use iced::{Color, Point, Rectangle, Size};

use super::{DisplayMode, StepStyle};

/// Gap kept between a marker's edge and its connector
pub const CONNECTOR_INSET: f32 = 10.0;

/// Fraction of the view height used when radius or line height is unusable
const FALLBACK_RATIO: f32 = 0.4;

/// Size of the built-in done badge and of regular step icons
pub const ICON_SIZE: Size = Size {
    width: 21.0,
    height: 21.0,
};

/// Size of the last step's icon
pub const LAST_ICON_SIZE: Size = Size {
    width: 18.0,
    height: 20.24,
};

/// Progress state of one step relative to the current index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Selected,
    Pending,
}

impl StepState {
    pub fn of(index: usize, current: i32) -> Self {
        let index = index as i64;
        let current = current as i64;
        if index < current {
            StepState::Completed
        } else if index == current {
            StepState::Selected
        } else {
            StepState::Pending
        }
    }

    /// Reached steps: completed or selected
    pub fn is_visited(self) -> bool {
        !matches!(self, StepState::Pending)
    }
}

/// Which tint a custom step icon is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconTint {
    Checked,
    Unchecked,
}

/// A numeric label centered on a marker
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point,
    pub color: Color,
}

/// What is drawn on top of a marker
#[derive(Debug, Clone, PartialEq)]
pub enum Foreground {
    Label(Label),
    DoneBadge(Rectangle),
    StepIcon { tint: IconTint, bounds: Rectangle },
}

/// Everything needed to paint one step
#[derive(Debug, Clone, PartialEq)]
pub struct StepVisual {
    pub index: usize,
    pub state: StepState,
    pub center: Point,
    pub fill: Color,
    /// Trailing connector, absent on the last step
    pub connector: Option<(Point, Point)>,
    pub foreground: Foreground,
}

/// Resolved layout of the whole indicator
#[derive(Debug, Clone, PartialEq)]
pub struct StepLayout {
    pub radius: f32,
    pub line_height: f32,
    pub centers: Vec<Point>,
}

/// Configured radius unless it is not positive or does not fit the view height
pub fn resolve_radius(radius: f32, height: f32) -> f32 {
    if radius <= 0.0 || radius > height / 2.0 {
        height * FALLBACK_RATIO
    } else {
        radius
    }
}

/// Configured line height unless it is not positive or taller than the view
pub fn resolve_line_height(line_height: f32, height: f32) -> f32 {
    if line_height <= 0.0 || line_height > height {
        height * FALLBACK_RATIO
    } else {
        line_height
    }
}

/// Marker centers spread evenly across `size.width`
///
/// `point_count` must be at least 2.
pub fn marker_centers(point_count: usize, radius: f32, size: Size) -> Vec<Point> {
    debug_assert!(point_count >= 2);

    let n = point_count as f32;
    let gap = (size.width - n * 2.0 * radius) / (n - 1.0);
    let y = size.height / 2.0;

    (0..point_count)
        .map(|i| Point::new(radius + i as f32 * (2.0 * radius + gap), y))
        .collect()
}

impl StepLayout {
    pub fn compute(point_count: usize, style: &StepStyle, size: Size) -> Self {
        let radius = resolve_radius(style.radius, size.height);
        let line_height = resolve_line_height(style.line_height, size.height);
        let centers = marker_centers(point_count, radius, size);

        Self {
            radius,
            line_height,
            centers,
        }
    }

    /// Connector from marker `index` to the next one
    pub fn connector(&self, index: usize) -> Option<(Point, Point)> {
        let from = self.centers.get(index)?;
        let to = self.centers.get(index + 1)?;

        Some((
            Point::new(from.x + self.radius + CONNECTOR_INSET, from.y),
            Point::new(to.x - self.radius - CONNECTOR_INSET, to.y),
        ))
    }

    /// Top-left corner of the marker square at `index`
    pub fn marker_origin(&self, index: usize) -> Point {
        let center = self.centers[index];
        Point::new(center.x - self.radius, center.y - self.radius)
    }

    /// Full visual plan for every step
    pub fn visuals(&self, mode: DisplayMode, current: i32, style: &StepStyle) -> Vec<StepVisual> {
        let last = self.centers.len().saturating_sub(1);

        self.centers
            .iter()
            .enumerate()
            .map(|(index, &center)| {
                let state = StepState::of(index, current);

                StepVisual {
                    index,
                    state,
                    center,
                    fill: marker_fill(mode, state, style),
                    connector: self.connector(index),
                    foreground: foreground(mode, index, state, index == last, center, style),
                }
            })
            .collect()
    }
}

/// Marker fill color
///
/// Numeric mode singles out the selected step; icon mode fills every
/// reached step.
pub fn marker_fill(mode: DisplayMode, state: StepState, style: &StepStyle) -> Color {
    match mode {
        DisplayMode::Numeric => match state {
            StepState::Selected => style.selected_background,
            _ => style.background,
        },
        DisplayMode::Icon => {
            if state.is_visited() {
                style.background
            } else {
                style.pending_icon_background
            }
        }
    }
}

/// Label text: the 1-based step number, empty once the step is completed
pub fn label_text(index: usize, state: StepState) -> String {
    match state {
        StepState::Completed => String::new(),
        _ => (index + 1).to_string(),
    }
}

fn centered(center: Point, size: Size) -> Rectangle {
    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

// Completed steps show the done badge in both modes. Custom icons cover the
// selected and pending steps, while their tint treats the selected step as
// reached.
fn foreground(
    mode: DisplayMode,
    index: usize,
    state: StepState,
    is_last: bool,
    center: Point,
    style: &StepStyle,
) -> Foreground {
    if state == StepState::Completed {
        return Foreground::DoneBadge(centered(center, ICON_SIZE));
    }

    match mode {
        DisplayMode::Numeric => Foreground::Label(Label {
            text: label_text(index, state),
            position: center,
            color: if state == StepState::Selected {
                style.selected_text
            } else {
                style.unselected_text
            },
        }),
        DisplayMode::Icon => {
            let size = if is_last { LAST_ICON_SIZE } else { ICON_SIZE };
            let tint = if state.is_visited() {
                IconTint::Checked
            } else {
                IconTint::Unchecked
            };
            Foreground::StepIcon {
                tint,
                bounds: centered(center, size),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(point_count: usize, size: Size) -> StepLayout {
        StepLayout::compute(point_count, &StepStyle::default(), size)
    }

    #[test]
    fn test_centers_evenly_spaced() {
        for point_count in 2..=8 {
            let l = layout(point_count, Size::new(800.0, 100.0));
            assert_eq!(l.centers.len(), point_count);

            let step = l.centers[1].x - l.centers[0].x;
            assert!(step > 0.0);
            for pair in l.centers.windows(2) {
                assert!(pair[1].x > pair[0].x);
                assert!((pair[1].x - pair[0].x - step).abs() < 1e-3);
                assert_eq!(pair[0].y, 50.0);
            }
        }
    }

    #[test]
    fn test_markers_touch_both_edges() {
        let l = layout(4, Size::new(600.0, 100.0));
        assert_eq!(l.centers[0].x, l.radius);
        let last = l.centers.last().unwrap();
        assert!((last.x + l.radius - 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_radius_fallback() {
        assert_eq!(resolve_radius(0.0, 100.0), 40.0);
        assert_eq!(resolve_radius(51.0, 100.0), 40.0);
        assert_eq!(resolve_radius(50.0, 100.0), 50.0);
        assert_eq!(resolve_radius(12.0, 100.0), 12.0);
        assert_eq!(resolve_radius(-10.0, 100.0), 40.0);
        assert_eq!(resolve_radius(-0.5, 100.0), 40.0);
    }

    #[test]
    fn test_line_height_fallback() {
        assert_eq!(resolve_line_height(0.0, 100.0), 40.0);
        assert_eq!(resolve_line_height(101.0, 100.0), 40.0);
        // Compared against the full height, not half of it
        assert_eq!(resolve_line_height(80.0, 100.0), 80.0);
        assert_eq!(resolve_line_height(1.0, 100.0), 1.0);
        assert_eq!(resolve_line_height(-3.0, 100.0), 40.0);
    }

    #[test]
    fn test_negative_radius_keeps_markers_in_view() {
        let style = StepStyle {
            radius: -10.0,
            line_height: -3.0,
            ..StepStyle::default()
        };
        let l = StepLayout::compute(3, &style, Size::new(300.0, 100.0));

        assert_eq!(l.radius, 40.0);
        assert_eq!(l.line_height, 40.0);
        assert_eq!(l.centers[0].x, 40.0);
    }

    #[test]
    fn test_connectors_inset_from_markers() {
        let l = layout(3, Size::new(300.0, 100.0));
        let (from, to) = l.connector(0).unwrap();

        assert_eq!(from.x, l.centers[0].x + l.radius + CONNECTOR_INSET);
        assert_eq!(to.x, l.centers[1].x - l.radius - CONNECTOR_INSET);
        assert_eq!(from.y, to.y);
        assert!(l.connector(2).is_none());
    }

    #[test]
    fn test_step_states() {
        for current in -2..6 {
            for index in 0..4usize {
                let state = StepState::of(index, current);
                let expected = if (index as i32) < current {
                    StepState::Completed
                } else if index as i32 == current {
                    StepState::Selected
                } else {
                    StepState::Pending
                };
                assert_eq!(state, expected);
            }
        }
    }

    #[test]
    fn test_label_text() {
        assert_eq!(label_text(0, StepState::Completed), "");
        assert_eq!(label_text(1, StepState::Selected), "2");
        assert_eq!(label_text(4, StepState::Pending), "5");
    }

    #[test]
    fn test_numeric_scenario() {
        let style = StepStyle::default();
        let visuals = layout(3, Size::new(300.0, 100.0)).visuals(DisplayMode::Numeric, 1, &style);

        assert_eq!(visuals[0].state, StepState::Completed);
        assert_eq!(visuals[0].fill, style.background);
        assert!(matches!(visuals[0].foreground, Foreground::DoneBadge(_)));

        assert_eq!(visuals[1].state, StepState::Selected);
        assert_eq!(visuals[1].fill, style.selected_background);
        match &visuals[1].foreground {
            Foreground::Label(label) => {
                assert_eq!(label.text, "2");
                assert_eq!(label.color, style.selected_text);
                assert_eq!(label.position, visuals[1].center);
            }
            other => panic!("expected label, got {:?}", other),
        }

        assert_eq!(visuals[2].state, StepState::Pending);
        assert_eq!(visuals[2].fill, style.background);
        match &visuals[2].foreground {
            Foreground::Label(label) => {
                assert_eq!(label.text, "3");
                assert_eq!(label.color, style.unselected_text);
            }
            other => panic!("expected label, got {:?}", other),
        }

        assert!(visuals[1].connector.is_some());
        assert!(visuals[2].connector.is_none());
    }

    #[test]
    fn test_icon_mode_fills_and_tints() {
        let style = StepStyle::default();
        let visuals = layout(4, Size::new(400.0, 100.0)).visuals(DisplayMode::Icon, 1, &style);

        assert_eq!(visuals[0].fill, style.background);
        assert_eq!(visuals[1].fill, style.background);
        assert_eq!(visuals[2].fill, style.pending_icon_background);
        assert_eq!(visuals[3].fill, style.pending_icon_background);

        assert!(matches!(visuals[0].foreground, Foreground::DoneBadge(_)));
        assert!(matches!(
            visuals[1].foreground,
            Foreground::StepIcon {
                tint: IconTint::Checked,
                ..
            }
        ));
        assert!(matches!(
            visuals[2].foreground,
            Foreground::StepIcon {
                tint: IconTint::Unchecked,
                ..
            }
        ));
    }

    #[test]
    fn test_last_icon_uses_its_own_size() {
        let visuals = layout(3, Size::new(300.0, 100.0)).visuals(
            DisplayMode::Icon,
            0,
            &StepStyle::default(),
        );

        let size_of = |visual: &StepVisual| match visual.foreground {
            Foreground::StepIcon { bounds, .. } => bounds.size(),
            _ => panic!("expected step icon"),
        };
        assert_eq!(size_of(&visuals[1]), ICON_SIZE);
        assert_eq!(size_of(&visuals[2]), LAST_ICON_SIZE);

        let bounds = match visuals[2].foreground {
            Foreground::StepIcon { bounds, .. } => bounds,
            _ => unreachable!(),
        };
        let center = bounds.center();
        assert!((center.x - visuals[2].center.x).abs() < 1e-3);
        assert!((center.y - visuals[2].center.y).abs() < 1e-3);
    }

    #[test]
    fn test_out_of_range_current_index() {
        let style = StepStyle::default();
        let l = layout(3, Size::new(300.0, 100.0));

        let before = l.visuals(DisplayMode::Numeric, -1, &style);
        assert!(before.iter().all(|v| v.state == StepState::Pending));

        let after = l.visuals(DisplayMode::Numeric, 7, &style);
        assert!(after.iter().all(|v| v.state == StepState::Completed));
        assert!(after.iter().all(|v| v.fill == style.background));
    }
}
