// src/services/coach.rs
use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, instrument};
use crate::models::sales_report::SalesReportData;
use crate::services::metrics::CalculationResult;

pub const COMMUNICATION_ERROR: &str = "통신 오류 발생. 데이터를 다시 확인해주세요.";
pub const EMPTY_REPLY: &str = "리포트를 생성할 수 없습니다.";

const TOP_ITEM_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed model response: {0}")]
    Malformed(String),
}

/// A text-generation backend.
#[async_trait]
pub trait CoachModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, CoachError>;
}

/// `name(qty개)` for the best sellers, highest quantity first, catalog order on ties.
pub fn top_items_text(data: &SalesReportData) -> String {
    let mut sold: Vec<_> = data.items().filter(|i| i.qty > 0).collect();
    sold.sort_by(|a, b| b.qty.cmp(&a.qty));
    sold.iter()
        .take(TOP_ITEM_LIMIT)
        .map(|i| format!("{}({}개)", i.name, i.qty))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn build_prompt(data: &SalesReportData, results: &CalculationResult) -> String {
    let remaining = data.monthly_target - data.mtd_sales - results.calc_sales;
    let note = if data.note.is_empty() { "없음" } else { data.note.as_str() };

    format!(
        r#"
너는 홍콩반점(캄보디아 매장, 통화 USD)의 “매출 코치 AI”다.
아래 데이터를 바탕으로 점주가 바로 행동할 수 있는 “짧고 명확한 데일리 코칭 리포트”를 작성하라.

[데이터 요약]
- 매출: POS ${pos} (계산액 ${calc})
- 오차: ${gap} ({status})
- 지표: 주문 {orders}건, 방문 {visits}명, 객단가 ${aov}, 전환율 {conversion}%
- 토핑: 주문당 {addon}개
- 현황: {top}
- 월 목표: ${target}, 누적: ${mtd}, 잔여: ${remaining}
- 메모: {note}

[중요 규칙]
- 통화 단위는 반드시 USD로 표기.
- 숫자는 반올림하여 간결하게.
- 인사말, 감탄, 서술형 설명 절대 금지.
- 각 섹션 최대 2~3줄.
- “숫자 + 행동 지시” 위주로 작성.

[출력 형식 - 반드시 이 구조만 사용]
1) 오늘 요약 (매출, 객단가, 전환율 위주 성과 요약)
2) 핵심 포인트 (잘한 점/아쉬운 점 중 2개, 각 1줄, 숫자 포함)
3) 월 목표 관점 (남은 목표액 대비 현재 페이스 진단 및 한 줄 조언)
4) 내일 액션 플랜 (객단가/전환율 개선을 위한 메뉴명 + 추가 목표 수량 4~6개)
5) 실행 체크리스트 (3줄, 매우 구체적인 현장 행동 지침)
"#,
        pos = data.pos_sales,
        calc = results.calc_sales,
        gap = results.gap,
        status = results.status.emoji(),
        orders = data.orders,
        visits = data.visit_count,
        aov = results.aov,
        conversion = results.conversion_rate,
        addon = results.addon_per_order,
        top = top_items_text(data),
        target = data.monthly_target,
        mtd = data.mtd_sales,
        remaining = remaining,
        note = note,
    )
}

/// Asks the model for a coaching report. Always returns displayable text;
/// failures are logged and replaced by a fixed message.
#[instrument(skip_all, fields(date = %data.date))]
pub async fn generate_coaching_report(
    model: &dyn CoachModel,
    data: &SalesReportData,
    results: &CalculationResult,
) -> String {
    let prompt = build_prompt(data, results);
    match model.generate(&prompt).await {
        Ok(text) if text.is_empty() => {
            info!("Model returned an empty reply");
            EMPTY_REPLY.to_string()
        }
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "Coaching report generation failed");
            COMMUNICATION_ERROR.to_string()
        }
    }
}
