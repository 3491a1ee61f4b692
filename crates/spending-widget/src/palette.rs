//! Deterministic category colors.

use crate::model::CategoryRecord;
use spending_widget_core::Color;

/// Fixed colors for well-known category names, in Vietnamese and English.
const NAMED: [(&str, &str, u32); 17] = [
    ("Ăn uống", "Food & Drink", 0xFFFF_8A65),
    ("Di chuyển", "Transport", 0xFF4E_CDC4),
    ("Mua sắm", "Shopping", 0xFFFF_C857),
    ("Hóa đơn", "Bills", 0xFF4E_CDC4),
    ("Giải trí", "Entertainment", 0xFFFF_9800),
    ("Y tế", "Health", 0xFFE9_1E63),
    ("Giáo dục", "Education", 0xFF9C_27B0),
    ("Nhà cửa", "Housing", 0xFF79_5548),
    ("Xe cộ", "Vehicle", 0xFF60_7D8B),
    ("Điện thoại", "Phone", 0xFF3F_51B5),
    ("Điện", "Electricity", 0xFFFF_EB3B),
    ("Nước", "Water", 0xFF21_96F3),
    ("Lương", "Salary", 0xFF4C_AF50),
    ("Thưởng", "Bonus", 0xFF8B_C34A),
    ("Đầu tư", "Investment", 0xFF00_9688),
    ("Kinh doanh", "Business", 0xFF03_A9F4),
    ("Khác", "Other", 0xFFFF_9800),
];

/// Ordered fallback palette, indexed by category id.
const PALETTE: [u32; 30] = [
    0xFF64_B5F6, 0xFF4F_C3F7, 0xFF4D_D0E1, 0xFF4D_B6AC, 0xFF81_C784,
    0xFFAE_D581, 0xFFFF_D54F, 0xFFFF_B74D, 0xFFE5_7373, 0xFFBA_68C8,
    0xFF95_75CD, 0xFF79_86CB, 0xFF90_A4AE, 0xFFEF_5350, 0xFFAB_47BC,
    0xFF7E_57C2, 0xFF5C_6BC0, 0xFF42_A5F5, 0xFF29_B6F6, 0xFF26_C6DA,
    0xFF26_A69A, 0xFF66_BB6A, 0xFF9C_CC65, 0xFFFF_CA28, 0xFFFF_A726,
    0xFF8D_6E63, 0xFF78_909C, 0xFFEC_407A, 0xFFF0_6292, 0xFFA1_887F,
];

/// Maps a category to a stable color.
///
/// Exact name matches use the named table; everything else indexes the
/// fallback palette by `category_id`, wrapping negative ids with Euclidean
/// remainder so `-1` lands on the last palette entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorAssigner;

impl ColorAssigner {
    /// Number of fallback palette entries.
    pub const PALETTE_LEN: usize = PALETTE.len();

    /// Create an assigner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Color for a category record.
    #[must_use]
    pub fn assign(&self, category: &CategoryRecord) -> Color {
        self.color_for(&category.name, category.category_id)
    }

    /// Color for a name/id pair.
    #[must_use]
    pub fn color_for(&self, name: &str, category_id: i32) -> Color {
        Self::named(name).unwrap_or_else(|| Self::fallback(category_id))
    }

    /// Named-table color, if `name` is a known category.
    #[must_use]
    pub fn named(name: &str) -> Option<Color> {
        NAMED
            .iter()
            .find(|(vi, en, _)| *vi == name || *en == name)
            .map(|&(_, _, argb)| Color::from_argb(argb))
    }

    /// Palette color for a category id.
    #[must_use]
    pub fn fallback(category_id: i32) -> Color {
        let index = i64::from(category_id).rem_euclid(PALETTE.len() as i64) as usize;
        Color::from_argb(PALETTE[index])
    }
}
