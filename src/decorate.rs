//! Pure per-bin decoration for downstream renderers
//!
//! Color and label callbacks are plain functions of a bin record, stored as
//! boxed closures and evaluated at query time. Nothing is cached on the
//! record, so swapping decoration logic never requires re-aggregation.

use std::fmt;

use crate::types::HistogramItem;

/// 8-bit RGBA color handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const STEEL_BLUE: Color = Color::rgb(70, 130, 180);
    pub const DARK_RED: Color = Color::rgb(139, 0, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

/// Function type mapping a bin record to its fill color
pub type ColorMapping = Box<dyn Fn(&HistogramItem) -> Color>;

/// Function type formatting a bin record's label text
pub type LabelFormatter = Box<dyn Fn(&HistogramItem) -> String>;

/// Where the renderer places a bin label.
///
/// Consumed only by the renderer; carries no aggregation semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPlacement {
    /// Just inside the top of the bar
    Inside,
    /// Centered within the bar
    Middle,
    /// Just outside the top of the bar
    #[default]
    Outside,
}

/// Per-bin color and label resolution.
///
/// The default decorator paints every bin with the configured fill color
/// and produces no labels. Custom mappings commonly branch on
/// [`HistogramItem::center`], e.g. to recolor tails beyond a confidence
/// bound.
pub struct ItemDecorator {
    fill: Color,
    color_mapping: Option<ColorMapping>,
    label_formatter: Option<LabelFormatter>,
    label_placement: LabelPlacement,
}

impl ItemDecorator {
    /// A decorator that fills every bin with `fill`
    pub fn new(fill: Color) -> Self {
        Self {
            fill,
            color_mapping: None,
            label_formatter: None,
            label_placement: LabelPlacement::default(),
        }
    }

    /// Replace the per-bin color logic.
    ///
    /// The mapping must be a pure function of the record; it is re-invoked
    /// on every query.
    pub fn with_color_mapping<F>(mut self, mapping: F) -> Self
    where
        F: Fn(&HistogramItem) -> Color + 'static,
    {
        self.color_mapping = Some(Box::new(mapping));
        self
    }

    /// Attach a label formatter
    pub fn with_label<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&HistogramItem) -> String + 'static,
    {
        self.label_formatter = Some(Box::new(formatter));
        self
    }

    /// Set where the renderer places labels
    pub fn with_label_placement(mut self, placement: LabelPlacement) -> Self {
        self.label_placement = placement;
        self
    }

    /// The configured fill color
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// The configured label placement
    pub fn label_placement(&self) -> LabelPlacement {
        self.label_placement
    }

    /// Resolve the fill color for one bin
    pub fn color(&self, item: &HistogramItem) -> Color {
        match &self.color_mapping {
            Some(mapping) => mapping(item),
            None => self.fill,
        }
    }

    /// Resolve the label for one bin, `None` when no formatter is set
    pub fn label(&self, item: &HistogramItem) -> Option<String> {
        self.label_formatter.as_ref().map(|format| format(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(start: f64, end: f64, count: usize) -> HistogramItem {
        HistogramItem::new(start, end, count).unwrap()
    }

    #[test]
    fn test_default_decorator_single_fill() {
        let decorator = ItemDecorator::new(Color::STEEL_BLUE);
        assert_eq!(decorator.color(&item(0.0, 1.0, 3)), Color::STEEL_BLUE);
        assert_eq!(decorator.color(&item(4.0, 5.0, 0)), Color::STEEL_BLUE);
        assert_eq!(decorator.label(&item(0.0, 1.0, 3)), None);
        assert_eq!(decorator.label_placement(), LabelPlacement::Outside);
    }

    #[test]
    fn test_confidence_tail_recoloring() {
        // Recolor bins past +/- 1.96 sigma, as when overlaying a normal fit
        let hi = 1.96;
        let lo = -1.96;
        let decorator =
            ItemDecorator::new(Color::STEEL_BLUE).with_color_mapping(move |item| {
                if item.center() > hi || item.center() < lo {
                    Color::DARK_RED
                } else {
                    Color::STEEL_BLUE
                }
            });

        assert_eq!(decorator.color(&item(2.0, 2.5, 1)), Color::DARK_RED);
        assert_eq!(decorator.color(&item(-3.0, -2.5, 1)), Color::DARK_RED);
        assert_eq!(decorator.color(&item(-0.5, 0.5, 9)), Color::STEEL_BLUE);
    }

    #[test]
    fn test_label_formatting_and_placement() {
        let decorator = ItemDecorator::new(Color::PURPLE)
            .with_label(|item| format!("{:.2}", item.area))
            .with_label_placement(LabelPlacement::Middle);

        let bin = item(0.0, 0.5, 10);
        assert_eq!(decorator.label(&bin), Some("10.00".to_string()));
        assert_eq!(decorator.label_placement(), LabelPlacement::Middle);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::rgb(139, 0, 0).to_string(), "#FF8B0000");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#04010203");
    }
}
