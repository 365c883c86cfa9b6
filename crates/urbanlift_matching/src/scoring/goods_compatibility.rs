use fxhash::FxHashMap;

use crate::problem::goods_category::GoodsCategory;

/// Which goods may share a vehicle with which.
///
/// Rows are read as given and are not required to be symmetric: electronics list documents
/// as compatible while documents have no row of their own.
#[derive(Debug, Clone)]
pub struct GoodsCompatibilityTable {
    rows: FxHashMap<GoodsCategory, Vec<GoodsCategory>>,
}

impl Default for GoodsCompatibilityTable {
    fn default() -> Self {
        use GoodsCategory::*;

        Self::from_rows([
            (Electronics, vec![Electronics, Documents, Textiles]),
            (Textiles, vec![Textiles, Electronics, Documents]),
            (FoodItems, vec![FoodItems]),
            (Chemicals, vec![Chemicals]),
            (Machinery, vec![Machinery, Electronics]),
        ])
    }
}

impl GoodsCompatibilityTable {
    pub fn from_rows(rows: impl IntoIterator<Item = (GoodsCategory, Vec<GoodsCategory>)>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Symmetric closure of the table: `a` is compatible with `b` if either row lists the other.
    pub fn symmetric(&self) -> Self {
        let mut rows = self.rows.clone();
        for (&category, compatible) in &self.rows {
            for &other in compatible {
                let row = rows.entry(other).or_default();
                if !row.contains(&category) {
                    row.push(category);
                }
            }
        }

        Self { rows }
    }

    pub fn compatible_with(&self, category: GoodsCategory) -> &[GoodsCategory] {
        self.rows.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_compatible(&self, category: GoodsCategory, other: GoodsCategory) -> bool {
        self.compatible_with(category).contains(&other)
    }

    /// 0.8 for categories that can travel with something other than themselves, 0.4 otherwise.
    pub fn score(&self, category: GoodsCategory) -> f64 {
        if self.compatible_with(category).len() > 1 {
            0.8
        } else {
            0.4
        }
    }
}
