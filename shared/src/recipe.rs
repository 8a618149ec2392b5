//! 菜谱模型
//!
//! 服务端以 `strIngredient1..20` / `strMeasure1..20` 的编号字段返回配料，
//! 这里在反序列化边界把它们折叠成有序的 `Vec<Ingredient>`，其余代码不再关心编号约定。

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// 服务端最多提供的配料编号
pub const MAX_INGREDIENTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// 用量，可能为空字符串
    pub measure: String,
}

/// 菜谱
///
/// `filter.php` 只返回 id / 名称 / 缩略图，其余字段此时为空。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMeal")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub source: Option<String>,
    pub video: Option<String>,
}

impl Recipe {
    /// 按行拆分后的烹饪步骤
    pub fn steps(&self) -> Vec<&str> {
        self.instructions
            .as_deref()
            .map(instruction_steps)
            .unwrap_or_default()
    }
}

// =========================================================
// 原始结构 (Wire Shape)
// =========================================================

#[derive(Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    #[serde(rename = "strYoutube", default)]
    video: Option<String>,
    /// 编号配料字段以及其他未声明的字段
    #[serde(flatten)]
    numbered: HashMap<String, Value>,
}

impl From<RawMeal> for Recipe {
    fn from(raw: RawMeal) -> Self {
        let ingredients = fold_ingredients(&raw.numbered);
        Recipe {
            id: raw.id,
            name: raw.name,
            thumbnail: raw.thumbnail.unwrap_or_default(),
            category: non_blank(raw.category),
            area: non_blank(raw.area),
            instructions: non_blank(raw.instructions),
            ingredients,
            source: non_blank(raw.source),
            video: non_blank(raw.video),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn text_field(fields: &HashMap<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)?
        .as_str()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// 在第一个空白配料处停止
fn fold_ingredients(fields: &HashMap<String, Value>) -> Vec<Ingredient> {
    (1..=MAX_INGREDIENTS)
        .map_while(|n| {
            let name = text_field(fields, &format!("strIngredient{n}"))?;
            let measure = text_field(fields, &format!("strMeasure{n}")).unwrap_or_default();
            Some(Ingredient { name, measure })
        })
        .collect()
}

// =========================================================
// 步骤解析 (Instruction Steps)
// =========================================================

/// 将说明文本拆分为步骤：去掉空行和 `STEP 3` 这类纯编号行
pub fn instruction_steps(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_step_marker(line))
        .collect()
}

fn is_step_marker(line: &str) -> bool {
    line.strip_prefix("STEP")
        .map(str::trim)
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}
