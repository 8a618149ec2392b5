use std::fmt;

// =========================================================
// 错误状态枚举
// =========================================================

/// 错误状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeErrorStatus {
    /// 网络请求失败（连接失败、fetch 被拒绝等）
    Network,
    /// 服务端返回非 2xx 状态码
    Status,
    /// JSON 解析或序列化失败
    Parse,
    /// 本地存储读写失败
    Storage,
}

impl RecipeErrorStatus {
    pub fn error_code(&self) -> &'static str {
        match self {
            RecipeErrorStatus::Network => "NETWORK_ERROR",
            RecipeErrorStatus::Status => "UPSTREAM_STATUS",
            RecipeErrorStatus::Parse => "PARSE_ERROR",
            RecipeErrorStatus::Storage => "STORAGE_ERROR",
        }
    }
}

// =========================================================
// 错误上下文追踪
// =========================================================

/// 结构化的错误追踪片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSpan {
    /// 操作名称，如 "api.search", "storage.write"
    pub operation: String,
    /// 额外的细节信息，如 URL、存储键
    pub detail: Option<String>,
}

// =========================================================
// 核心错误类型
// =========================================================

/// 应用错误
///
/// - status: 错误类型
/// - message: 错误消息
/// - source: 原始错误（可选，用于错误链）
/// - spans: 调用追踪栈
#[derive(Debug)]
pub struct RecipeError {
    pub status: RecipeErrorStatus,
    pub message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
    spans: Vec<ErrorSpan>,
}

impl RecipeError {
    pub fn new(status: RecipeErrorStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            source: None,
            spans: Vec::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(RecipeErrorStatus::Network, message)
    }

    pub fn status(code: u16) -> Self {
        Self::new(
            RecipeErrorStatus::Status,
            format!("unexpected status {code}"),
        )
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(RecipeErrorStatus::Parse, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(RecipeErrorStatus::Storage, message)
    }

    /// 添加操作追踪（无额外细节）
    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan {
            operation: operation.into(),
            detail: None,
        });
        self
    }

    /// 添加操作追踪（带额外细节）
    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan {
            operation: operation.into(),
            detail: Some(detail.into()),
        });
        self
    }

    /// 设置原始错误源
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn error_code(&self) -> &'static str {
        self.status.error_code()
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }
}

impl fmt::Display for RecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)?;

        if !self.spans.is_empty() {
            write!(f, " | trace: ")?;
            for (i, span) in self.spans.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", span.operation)?;
                if let Some(detail) = &span.detail {
                    write!(f, "({})", detail)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for RecipeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<serde_json::Error> for RecipeError {
    fn from(e: serde_json::Error) -> Self {
        RecipeError::parse(e.to_string()).with_source(e)
    }
}

pub type RecipeResult<T> = std::result::Result<T, RecipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_trace() {
        let err = RecipeError::status(503)
            .in_op_with("http.get", "search.php")
            .in_op("api.search");

        assert_eq!(
            err.to_string(),
            "[UPSTREAM_STATUS] unexpected status 503 | trace: http.get(search.php) -> api.search"
        );
        assert_eq!(err.spans().len(), 2);
    }

    #[test]
    fn json_errors_keep_source() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = RecipeError::from(json_err);

        assert_eq!(err.status, RecipeErrorStatus::Parse);
        assert!(std::error::Error::source(&err).is_some());
    }
}
