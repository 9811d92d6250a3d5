// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::application::use_cases::summarize_use_case::SummarizeUseCase;
use crate::domain::models::summarization::SummarizationRequest;
use crate::presentation::views::form_page::{self, Outcome};
use crate::utils::text::word_count;

/// 表单提交内容
#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    #[serde(default)]
    pub text: String,
}

/// 渲染空白表单
pub async fn show_form() -> Html<String> {
    Html(form_page::render("", None))
}

/// 处理表单提交
///
/// 输入为空时只显示警告，不调用模型；否则以固定长度边界（100/30）生成摘要
pub async fn submit_form(
    Extension(use_case): Extension<Arc<SummarizeUseCase>>,
    Form(form): Form<SummarizeForm>,
) -> Response {
    if form.text.trim().is_empty() {
        info!("Empty form submission");
        let page = form_page::render(&form.text, Some(Outcome::Warning("Please enter some text.")));
        return Html(page).into_response();
    }

    match use_case
        .execute(SummarizationRequest::new(form.text.as_str()))
        .await
    {
        Ok(summary) => {
            let outcome = Outcome::Summary {
                summary: &summary,
                word_count: word_count(&form.text),
            };
            Html(form_page::render(&form.text, Some(outcome))).into_response()
        }
        Err(e) => {
            let message = e.to_string();
            let page = form_page::render(&form.text, Some(Outcome::Error(&message)));
            (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
        }
    }
}
