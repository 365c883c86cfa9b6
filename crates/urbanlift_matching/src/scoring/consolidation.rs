use crate::problem::{goods_category::GoodsCategory, shipment::ShipmentRecord};

/// How well a set of shipments combines into one delivery run, from 0 to 100.
///
/// Grows with the number of shipments and drops when food travels with anything else.
pub fn consolidation_score(shipments: &[ShipmentRecord]) -> u8 {
    let n = shipments.len() as u64;
    let weight_score = (n * 15).min(100);
    let location_score = (n * 20).min(100);

    let has_food = shipments
        .iter()
        .any(|s| s.goods_type() == GoodsCategory::FoodItems);
    let all_food = shipments
        .iter()
        .all(|s| s.goods_type() == GoodsCategory::FoodItems);
    let goods_score = if has_food && !all_food { 75 } else { 100 };

    ((weight_score + location_score + goods_score) / 3) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ShipmentFixture;

    fn shipments(goods: &[GoodsCategory]) -> Vec<ShipmentRecord> {
        goods
            .iter()
            .enumerate()
            .map(|(index, &goods)| ShipmentFixture::new(&index.to_string()).goods(goods).build())
            .collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(consolidation_score(&[]), 33);
    }

    #[test]
    fn test_grows_with_size() {
        let two = shipments(&[GoodsCategory::Electronics, GoodsCategory::Textiles]);
        let three = shipments(&[
            GoodsCategory::Electronics,
            GoodsCategory::Textiles,
            GoodsCategory::Documents,
        ]);

        // (30 + 40 + 100) / 3
        assert_eq!(consolidation_score(&two), 56);
        // (45 + 60 + 100) / 3
        assert_eq!(consolidation_score(&three), 68);
    }

    #[test]
    fn test_saturates() {
        let many = shipments(&[GoodsCategory::Other; 12]);
        assert_eq!(consolidation_score(&many), 100);
    }

    #[test]
    fn test_mixed_food_is_penalized() {
        let mixed = shipments(&[GoodsCategory::FoodItems, GoodsCategory::Electronics]);
        let food_only = shipments(&[GoodsCategory::FoodItems, GoodsCategory::FoodItems]);

        // (30 + 40 + 75) / 3
        assert_eq!(consolidation_score(&mixed), 48);
        assert_eq!(consolidation_score(&food_only), 56);
    }
}
