use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub blurb: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    #[serde(default)]
    pub links: Vec<MenuLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuLayoutConfig {
    pub max_rows_per_column: usize,
    pub max_columns: usize,
    pub column_width_px: u32,
    pub gutter_px: u32,
    pub padding_px: u32,
    /// Minimum gap kept between the dropdown and the viewport edges.
    pub edge_margin_px: u32,
}

impl Default for MenuLayoutConfig {
    fn default() -> Self {
        Self {
            max_rows_per_column: 5,
            max_columns: 4,
            column_width_px: 240,
            gutter_px: 32,
            padding_px: 24,
            edge_margin_px: 16,
        }
    }
}

/// Splits `items` into columns filled top to bottom.
///
/// Columns hold at most `max_rows` items unless that would need more than
/// `max_columns` columns, in which case the rows grow so nothing is dropped.
pub fn chunk_columns<T>(items: &[T], max_rows: usize, max_columns: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }
    let max_columns = max_columns.max(1);
    let mut rows = max_rows.max(1);
    if items.len().div_ceil(rows) > max_columns {
        rows = items.len().div_ceil(max_columns);
    }
    items.chunks(rows).collect()
}

pub fn menu_width(columns: usize, config: &MenuLayoutConfig) -> u32 {
    let columns = columns as u32;
    let gutters = columns.saturating_sub(1);
    columns * config.column_width_px + gutters * config.gutter_px + 2 * config.padding_px
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAlign {
    Center,
    Left,
    Right,
}

impl MenuAlign {
    pub fn class(self) -> &'static str {
        match self {
            MenuAlign::Center => "align-center",
            MenuAlign::Left => "align-left",
            MenuAlign::Right => "align-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPlacement {
    /// Offset of the dropdown from the viewport's left edge, in px.
    pub left: f64,
    pub align: MenuAlign,
}

/// Centers the dropdown under its trigger, then clamps it inside the viewport.
pub fn align_menu(
    trigger_left: f64,
    trigger_width: f64,
    menu_width: f64,
    viewport_width: f64,
    edge_margin: f64,
) -> MenuPlacement {
    let centered = trigger_left + trigger_width / 2.0 - menu_width / 2.0;
    let max_left = viewport_width - edge_margin - menu_width;

    if max_left < edge_margin || centered < edge_margin {
        MenuPlacement {
            left: edge_margin,
            align: MenuAlign::Left,
        }
    } else if centered > max_left {
        MenuPlacement {
            left: max_left,
            align: MenuAlign::Right,
        }
    } else {
        MenuPlacement {
            left: centered,
            align: MenuAlign::Center,
        }
    }
}

/// Everything the header needs to render one open dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct MegaMenuLayout<'a> {
    pub columns: Vec<&'a [MenuLink]>,
    pub width: u32,
    pub placement: MenuPlacement,
}

impl<'a> MegaMenuLayout<'a> {
    pub fn compute(
        section: &'a MenuSection,
        config: &MenuLayoutConfig,
        trigger_left: f64,
        trigger_width: f64,
        viewport_width: f64,
    ) -> Self {
        let columns = chunk_columns(&section.links, config.max_rows_per_column, config.max_columns);
        let width = menu_width(columns.len(), config);
        let placement = align_menu(
            trigger_left,
            trigger_width,
            f64::from(width),
            viewport_width,
            f64::from(config.edge_margin_px),
        );
        Self {
            columns,
            width,
            placement,
        }
    }
}
