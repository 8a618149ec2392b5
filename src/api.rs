use crate::error::{RecipeError, RecipeResult};
use crate::request::{HttpClient, HttpRequest};
use recipe_shared::protocol::{
    ApiRequest, FilterByCategory, ListCategories, LookupById, MealsEnvelope, RandomMeal,
    SearchByName,
};
use recipe_shared::{Category, Recipe};

// =========================================================
// 菜谱 API 客户端
// =========================================================

/// 只读菜谱目录客户端
///
/// 不重试、不缓存、不限流；除存在性检查外不校验响应结构。
#[derive(Debug, Clone)]
pub struct RecipeApi<C> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> RecipeApi<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn url<R: ApiRequest>(&self, req: &R) -> String {
        match req.query() {
            Some((name, value)) => format!(
                "{}/{}?{}={}",
                self.base_url,
                R::PATH,
                name,
                urlencoding::encode(value)
            ),
            None => format!("{}/{}", self.base_url, R::PATH),
        }
    }

    // 这里接受任何实现了 ApiRequest 的端点定义
    async fn fetch<R: ApiRequest>(&self, req: R) -> RecipeResult<MealsEnvelope<R::Item>> {
        let url = self.url(&req);
        let http_req = HttpRequest::get(&url).with_header("Accept", "application/json");

        let resp = self
            .client
            .send(http_req)
            .await
            .map_err(|e| e.in_op_with("http.get", R::PATH))?;

        if !resp.is_success() {
            return Err(RecipeError::status(resp.status).in_op_with("http.get", R::PATH));
        }

        resp.json::<MealsEnvelope<R::Item>>()
            .map_err(|e| e.in_op_with("http.decode", R::PATH))
    }

    /// 按名称搜索；`None` 表示无结果（不是错误）
    pub async fn search_by_name(&self, term: &str) -> RecipeResult<Option<Vec<Recipe>>> {
        let envelope = self
            .fetch(SearchByName { term })
            .await
            .map_err(|e| e.in_op("api.search_by_name"))?;
        Ok(envelope.into_meals())
    }

    /// 按分类筛选；缺失的列表视为空列表
    pub async fn filter_by_category(&self, category: &str) -> RecipeResult<Vec<Recipe>> {
        let envelope = self
            .fetch(FilterByCategory { category })
            .await
            .map_err(|e| e.in_op("api.filter_by_category"))?;
        Ok(envelope.into_meals().unwrap_or_default())
    }

    pub async fn lookup_by_id(&self, id: &str) -> RecipeResult<Option<Recipe>> {
        let envelope = self
            .fetch(LookupById { id })
            .await
            .map_err(|e| e.in_op("api.lookup_by_id"))?;
        Ok(envelope.into_first())
    }

    pub async fn fetch_random(&self) -> RecipeResult<Option<Recipe>> {
        let envelope = self
            .fetch(RandomMeal)
            .await
            .map_err(|e| e.in_op("api.fetch_random"))?;
        Ok(envelope.into_first())
    }

    /// 分类列表；任何失败都记录日志并返回空列表
    pub async fn list_categories(&self) -> Vec<Category> {
        match self.fetch(ListCategories).await {
            Ok(envelope) => envelope.into_meals().unwrap_or_default(),
            Err(e) => {
                log_error!("Failed to fetch categories: {}", e.in_op("api.list_categories"));
                Vec::new()
            }
        }
    }
}
