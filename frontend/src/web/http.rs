//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient` 接口。

use recipe_finder::{HttpClient, HttpRequest, HttpResponse, RecipeError, RecipeResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHttpClient;

/// 把 JS 异常转换为网络错误，并记录所处步骤
fn js_error(step: &'static str) -> impl Fn(JsValue) -> RecipeError {
    move |e| RecipeError::network(format!("{:?}", e)).in_op(step)
}

#[async_trait::async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn send(&self, req: HttpRequest) -> RecipeResult<HttpResponse> {
        let headers = Headers::new().map_err(js_error("fetch.headers"))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(js_error("fetch.headers"))?;
        }

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_headers(&headers.into());

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(js_error("fetch.request"))?;

        let window = web_sys::window()
            .ok_or_else(|| RecipeError::network("window is unavailable").in_op("fetch.send"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error("fetch.send"))?;

        let response: Response = resp_value.dyn_into().map_err(js_error("fetch.response"))?;
        let status = response.status();

        let promise = response.text().map_err(js_error("fetch.body"))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(js_error("fetch.body"))?;

        let body = text
            .as_string()
            .ok_or_else(|| RecipeError::parse("response body is not text").in_op("fetch.body"))?;

        Ok(HttpResponse { status, body })
    }
}
