// =========================================================
// 构建期配置 (Build-time Configuration)
// =========================================================

/// 这些是默认值，构建时未设置对应环境变量则使用它们
pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";
pub const DEFAULT_SPLASH_DELAY_MS: u32 = 500;

/// 应用配置
///
/// 浏览器中没有进程环境变量，因此在编译期通过 `option_env!` 读取：
/// - `RECIPE_API_BASE_URL`
/// - `RECIPE_SPLASH_DELAY_MS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub splash_delay_ms: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("RECIPE_API_BASE_URL"),
            option_env!("RECIPE_SPLASH_DELAY_MS"),
        )
    }

    /// 空值或无法解析的覆盖值回退到默认值
    fn from_overrides(base_url: Option<&str>, splash_delay_ms: Option<&str>) -> Self {
        Self {
            api_base_url: base_url
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),

            splash_delay_ms: splash_delay_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_SPLASH_DELAY_MS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_overrides(None, None)
    }
}
