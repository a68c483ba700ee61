use fltk::enums::{Color, Font};
use serde::{Deserialize, Serialize};

/// Font families offered in the Edit > Font Style menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Arial,
    #[serde(rename = "Courier New")]
    CourierNew,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Verdana,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        Self::Helvetica,
        Self::Arial,
        Self::CourierNew,
        Self::TimesNewRoman,
        Self::Verdana,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::Arial => "Arial",
            Self::CourierNew => "Courier New",
            Self::TimesNewRoman => "Times New Roman",
            Self::Verdana => "Verdana",
        }
    }

    /// Map to an FLTK font.
    ///
    /// Helvetica, Courier and Times are FLTK built-ins. Arial and Verdana are
    /// looked up among the system fonts (loaded at startup) and fall back to
    /// Helvetica when the platform doesn't have them.
    pub fn to_fltk(&self) -> Font {
        match self {
            Self::Helvetica => Font::Helvetica,
            Self::CourierNew => Font::Courier,
            Self::TimesNewRoman => Font::Times,
            Self::Arial | Self::Verdana => Font::by_name(self.name()),
        }
    }
}

/// Font size in points.
///
/// The menu offers a fixed list, but any size in `1..=MAX_POINTS` is accepted
/// so a settings file can ask for something in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FontSize(u32);

impl FontSize {
    pub const MENU_POINTS: [u32; 11] = [8, 10, 12, 14, 16, 18, 20, 24, 28, 36, 48];

    pub const MAX_POINTS: u32 = 1000;

    pub fn new(points: u32) -> Option<Self> {
        (1..=Self::MAX_POINTS).contains(&points).then_some(Self(points))
    }

    pub fn points(self) -> u32 {
        self.0
    }

    /// Sizes listed in the Edit > Font Size menu, smallest first.
    pub fn menu_sizes() -> impl Iterator<Item = FontSize> {
        Self::MENU_POINTS.into_iter().map(FontSize)
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(12)
    }
}

impl TryFrom<u32> for FontSize {
    type Error = String;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        Self::new(points).ok_or_else(|| {
            format!("font size must be between 1 and {}, got {}", Self::MAX_POINTS, points)
        })
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> u32 {
        size.0
    }
}

/// Colors offered in the Edit > Text Color menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Gray,
}

impl TextColor {
    pub const ALL: [TextColor; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
        Self::Gray,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }

    /// X11 color names, matching what desktop toolkits resolve these names to.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::Red => (255, 0, 0),
            Self::Green => (0, 255, 0),
            Self::Blue => (0, 0, 255),
            Self::Yellow => (255, 255, 0),
            Self::Orange => (255, 165, 0),
            Self::Purple => (160, 32, 240),
            Self::Gray => (190, 190, 190),
        }
    }

    pub fn to_fltk(&self) -> Color {
        let (r, g, b) = self.rgb();
        Color::from_rgb(r, g, b)
    }
}

/// One menu selection that changes a single style field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleOption {
    Family(FontFamily),
    Size(FontSize),
    Color(TextColor),
}

impl StyleOption {
    /// Text shown for this option in its submenu.
    pub fn label(&self) -> String {
        match self {
            Self::Family(family) => family.name().to_string(),
            Self::Size(size) => size.points().to_string(),
            Self::Color(color) => color.name().to_string(),
        }
    }

    /// Name of the Edit submenu this option lives in.
    pub fn submenu(&self) -> &'static str {
        match self {
            Self::Family(_) => "Font Style",
            Self::Size(_) => "Font Size",
            Self::Color(_) => "Text Color",
        }
    }

    /// Every option, in menu order: families, then sizes, then colors.
    pub fn all() -> Vec<StyleOption> {
        FontFamily::ALL
            .into_iter()
            .map(Self::Family)
            .chain(FontSize::menu_sizes().map(Self::Size))
            .chain(TextColor::ALL.into_iter().map(Self::Color))
            .collect()
    }
}

/// The style applied uniformly to the whole document.
///
/// A plain value: selecting an option produces a new `TextStyle`, which the
/// view re-renders in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    pub family: FontFamily,
    pub size: FontSize,
    pub color: TextColor,
}

impl TextStyle {
    pub fn new(family: FontFamily, size: FontSize, color: TextColor) -> Self {
        Self { family, size, color }
    }

    pub fn with_option(self, option: StyleOption) -> Self {
        match option {
            StyleOption::Family(family) => Self { family, ..self },
            StyleOption::Size(size) => Self { size, ..self },
            StyleOption::Color(color) => Self { color, ..self },
        }
    }
}
