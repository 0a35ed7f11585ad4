// src/models/menu.rs
use serde::{Deserialize, Serialize};

/// How a category takes part in the derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryRole {
    Standard,
    /// Quantities are also summed into the add-ons-per-order ratio.
    AddOn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub qty: u32,
}

impl MenuItem {
    pub fn new(id: &str, name: &str, price: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            qty: 0,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub role: CategoryRole,
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    fn new(name: &str, role: CategoryRole, items: &[(&str, &str, f64)]) -> Self {
        Self {
            name: name.to_string(),
            role,
            items: items
                .iter()
                .map(|(id, name, price)| MenuItem::new(id, name, *price))
                .collect(),
        }
    }
}

// ==================== Store Catalog ====================

const MAIN_DISHES: &[(&str, &str, f64)] = &[
    ("f1", "짜장면", 7.0),
    ("f2", "짬뽕", 7.0),
    ("f3", "짬뽕밥", 8.0),
    ("f4", "백짬뽕", 7.0),
    ("f5", "백짬뽕밥", 8.0),
    ("f6", "볶음짬뽕", 9.0),
    ("f7", "고추짜장", 9.0),
    ("f8", "고추짬뽕", 10.0),
    ("f9", "고추짬뽕밥", 12.0),
    ("f10", "짜장밥", 5.0),
    ("f11", "잡채밥", 10.0),
    ("f12", "야채볶음밥", 5.0),
    ("f13", "소고기볶음밥", 7.0),
    ("f14", "마파두부", 12.0),
    ("f15", "마파두부덮밥", 9.0),
    ("f16", "깐풍기", 15.0),
    ("f17", "고추유린기", 15.0),
    ("f18", "쟁반짜장", 18.0),
    ("f19", "돌짜장", 18.0),
    ("f20", "해물육교자", 5.5),
];

const TANGSUYUK: &[(&str, &str, f64)] = &[
    ("t1", "탕수육 S", 12.0),
    ("t2", "탕수육 M", 15.0),
    ("t3", "탕수육 L", 18.0),
];

const ADD_ONS: &[(&str, &str, f64)] = &[
    ("a1", "토핑 해시브라운", 2.0),
    ("a2", "토핑 계란프라이", 1.0),
    ("a3", "토핑 슬라이스치즈", 1.0),
];

const BEVERAGES: &[(&str, &str, f64)] = &[
    ("b1", "참이슬 프레쉬 360ml", 5.0),
    ("b2", "처음처럼 360ml", 5.0),
    ("b3", "진로이즈백 360ml", 5.0),
    ("b4", "막걸리", 6.0),
    ("b5", "앙코르 맥주 S 330ml", 2.5),
    ("b6", "앙코르 맥주 L 640ml", 4.5),
    ("b7", "앙코르 생맥주 250ml", 2.0),
    ("b8", "앙코르 생맥주 500ml", 3.0),
    ("b9", "하이네켄 생맥주 250ml", 2.5),
    ("b10", "콜라 330ml", 1.0),
    ("b11", "스프라이트 330ml", 1.0),
    ("b12", "소다 330ml", 1.0),
    ("b13", "봉봉 238ml", 2.0),
    ("b14", "쌕쌕 238ml", 2.0),
    ("b15", "쿨피스 250ml", 2.0),
    ("b16", "밀키스 250ml", 2.0),
];

const LIQUORS: &[(&str, &str, f64)] = &[
    ("l1", "이과두주 100ml", 4.0),
    ("l2", "이과두주 500ml", 8.0),
    ("l3", "보건주 125ml", 6.0),
    ("l4", "보건주 520ml", 18.0),
    ("l5", "노주교 500ml", 60.0),
];

/// The fixed menu the form starts from, every quantity at zero.
pub fn default_catalog() -> Vec<MenuCategory> {
    vec![
        MenuCategory::new("음식 메뉴 (Main Dishes)", CategoryRole::Standard, MAIN_DISHES),
        MenuCategory::new("탕수육 (Tangsuyuk)", CategoryRole::Standard, TANGSUYUK),
        MenuCategory::new("토핑 (Add-ons)", CategoryRole::AddOn, ADD_ONS),
        MenuCategory::new("음료 및 주류 (Beverages)", CategoryRole::Standard, BEVERAGES),
        MenuCategory::new("고량주 (Liquors)", CategoryRole::Standard, LIQUORS),
    ]
}
