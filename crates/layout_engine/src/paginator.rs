//! Pagination
//!
//! Flows layout units onto pages before anything is drawn, so the total page
//! count is known when headers are stamped.
//!
//! Coordinates are millimetres from the top-left page corner. The vertical
//! cursor starts at `top + TITLE_OFFSET` on the first page, leaving room for
//! the document title, and at `top` on every later page. Before a line is
//! placed, a line whose bottom would pass `height - bottom` opens a new page.
//! Paragraph spacing only moves the cursor and never opens a page by itself.

use crate::{LayoutError, LayoutUnit, Result};
use serde::{Deserialize, Serialize};

/// A4 portrait width in millimetres
pub const A4_WIDTH_MM: f32 = 210.0;
/// A4 portrait height in millimetres
pub const A4_HEIGHT_MM: f32 = 297.0;
/// Extra space below the top margin on the first page, reserved for the title
pub const TITLE_OFFSET: f32 = 10.0;

/// Page insets in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            bottom: 30.0,
            left: 20.0,
            right: 20.0,
        }
    }
}

impl Margins {
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Same inset on every side
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Page size and margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4(Margins::default())
    }
}

impl PageGeometry {
    /// A4 portrait with the given margins
    pub fn a4(margins: Margins) -> Self {
        Self {
            width: A4_WIDTH_MM,
            height: A4_HEIGHT_MM,
            margins,
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Width available for body text
    pub fn printable_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }

    /// Height available for body text
    pub fn printable_height(&self) -> f32 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// Lowest y a line may reach
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margins.bottom
    }

    /// Check that the printable area is not empty.
    pub fn validate(&self) -> Result<()> {
        if !(self.printable_width() > 0.0) {
            return Err(LayoutError::InvalidPageSetup(format!(
                "printable width must be positive, got {} (page {} - margins {} + {})",
                self.printable_width(),
                self.width,
                self.margins.left,
                self.margins.right
            )));
        }
        if !(self.printable_height() > 0.0) {
            return Err(LayoutError::InvalidPageSetup(format!(
                "printable height must be positive, got {} (page {} - margins {} + {})",
                self.printable_height(),
                self.height,
                self.margins.top,
                self.margins.bottom
            )));
        }
        Ok(())
    }
}

/// A line placed on a page. `y` is the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub advance: f32,
}

impl PlacedLine {
    /// Where the cursor sits after this line
    pub fn bottom(&self) -> f32 {
        self.y + self.advance
    }
}

/// One page of placed lines
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageLayout {
    /// 1-based page number
    pub number: usize,
    pub lines: Vec<PlacedLine>,
}

impl PageLayout {
    fn new(number: usize) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }

    pub fn is_first(&self) -> bool {
        self.number == 1
    }
}

/// Result of pagination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePlan {
    pub geometry: PageGeometry,
    pub pages: Vec<PageLayout>,
}

impl PagePlan {
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }

    /// All placed lines, in document order
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }
}

/// Page cursor during pagination
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cursor {
    page_index: usize,
    y: f32,
}

/// Flows layout units onto pages
#[derive(Debug, Clone)]
pub struct Paginator {
    geometry: PageGeometry,
}

impl Paginator {
    pub fn new(geometry: PageGeometry) -> Result<Self> {
        geometry.validate()?;
        Ok(Self { geometry })
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Where body text starts on a page
    pub fn content_top(&self, page_number: usize) -> f32 {
        if page_number <= 1 {
            self.geometry.margins.top + TITLE_OFFSET
        } else {
            self.geometry.margins.top
        }
    }

    /// Place every unit. Always yields at least one page.
    pub fn paginate(&self, units: &[LayoutUnit]) -> PagePlan {
        let bottom = self.geometry.content_bottom();
        let left = self.geometry.margins.left;

        let mut pages = vec![PageLayout::new(1)];
        let mut cursor = Cursor {
            page_index: 0,
            y: self.content_top(1),
        };

        for unit in units {
            match unit {
                LayoutUnit::Line { text, advance } => {
                    if cursor.y + advance > bottom {
                        let number = pages.len() + 1;
                        pages.push(PageLayout::new(number));
                        cursor = Cursor {
                            page_index: number - 1,
                            y: self.content_top(number),
                        };
                    }
                    pages[cursor.page_index].lines.push(PlacedLine {
                        text: text.clone(),
                        x: left,
                        y: cursor.y,
                        advance: *advance,
                    });
                    cursor.y += advance;
                }
                LayoutUnit::Spacing { advance } => cursor.y += advance,
            }
        }

        tracing::debug!(
            pages = pages.len(),
            units = units.len(),
            "pagination complete"
        );

        PagePlan {
            geometry: self.geometry,
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layout_document, FixedWidthMeasurer, LineBreakConfig, LineBreaker};
    use proptest::prelude::*;

    fn lines(n: usize, advance: f32) -> Vec<LayoutUnit> {
        (0..n)
            .map(|i| LayoutUnit::Line {
                text: format!("line {}", i),
                advance,
            })
            .collect()
    }

    #[test]
    fn test_default_geometry() {
        let g = PageGeometry::default();
        assert_eq!(g.printable_width(), 170.0);
        assert_eq!(g.printable_height(), 227.0);
        assert_eq!(g.content_bottom(), 267.0);
    }

    #[test]
    fn test_empty_document_has_one_page() {
        let plan = Paginator::new(PageGeometry::default()).unwrap().paginate(&[]);
        assert_eq!(plan.total_pages(), 1);
        assert_eq!(plan.line_count(), 0);
        assert!(plan.pages[0].is_first());
    }

    #[test]
    fn test_first_line_below_title_offset() {
        let plan = Paginator::new(PageGeometry::default())
            .unwrap()
            .paginate(&lines(1, 7.0));
        assert_eq!(plan.pages[0].lines[0].y, 50.0);
        assert_eq!(plan.pages[0].lines[0].x, 20.0);
    }

    #[test]
    fn test_break_moves_to_top_margin() {
        // Page 1: 50..267 fits 31 lines of 7mm (50 + 31*7 = 267)
        let plan = Paginator::new(PageGeometry::default())
            .unwrap()
            .paginate(&lines(32, 7.0));
        assert_eq!(plan.total_pages(), 2);
        assert_eq!(plan.pages[0].lines.len(), 31);
        assert_eq!(plan.pages[1].lines.len(), 1);
        assert_eq!(plan.pages[1].lines[0].y, 40.0);
        assert_eq!(plan.pages[1].number, 2);
    }

    #[test]
    fn test_spacing_never_opens_page() {
        let mut units = lines(31, 7.0);
        units.push(LayoutUnit::Spacing { advance: 7.0 });
        let plan = Paginator::new(PageGeometry::default()).unwrap().paginate(&units);
        assert_eq!(plan.total_pages(), 1);
    }

    #[test]
    fn test_two_paragraph_document_fits_one_page() {
        let breaker = LineBreaker::new(
            FixedWidthMeasurer::infinite_width(),
            LineBreakConfig::new(170.0, 12.0),
        )
        .unwrap();
        let units = layout_document("Hello world.\n\nSecond paragraph.", &breaker, 7.0).unwrap();
        let plan = Paginator::new(PageGeometry::default()).unwrap().paginate(&units);
        assert_eq!(plan.total_pages(), 1);
        assert_eq!(plan.line_count(), 2);
        let ys: Vec<f32> = plan.lines().map(|l| l.y).collect();
        assert_eq!(ys, vec![50.0, 64.0]);
    }

    #[test]
    fn test_invalid_geometry() {
        let g = PageGeometry::a4(Margins::new(10.0, 10.0, 120.0, 120.0));
        assert!(matches!(Paginator::new(g), Err(LayoutError::InvalidPageSetup(_))));
        let g = PageGeometry::a4(Margins::new(200.0, 100.0, 20.0, 20.0));
        assert!(Paginator::new(g).is_err());
    }

    proptest! {
        #[test]
        fn prop_lines_never_cross_bottom_margin(
            shapes in proptest::collection::vec((any::<bool>(), 1u32..12), 0..200),
            bottom in 10.0f32..80.0,
        ) {
            let geometry = PageGeometry::a4(Margins::new(40.0, bottom, 20.0, 20.0));
            let units: Vec<LayoutUnit> = shapes
                .iter()
                .map(|(is_line, adv)| {
                    let advance = *adv as f32;
                    if *is_line {
                        LayoutUnit::Line { text: "x".into(), advance }
                    } else {
                        LayoutUnit::Spacing { advance }
                    }
                })
                .collect();
            let plan = Paginator::new(geometry).unwrap().paginate(&units);

            prop_assert!(plan.total_pages() >= 1);
            prop_assert_eq!(plan.line_count(), units.iter().filter(|u| u.is_line()).count());
            for line in plan.lines() {
                prop_assert!(line.bottom() <= geometry.content_bottom());
            }
            for (i, page) in plan.pages.iter().enumerate() {
                prop_assert_eq!(page.number, i + 1);
                if i > 0 {
                    prop_assert!(!page.lines.is_empty());
                }
            }
        }
    }
}
