use rehab_core::responses::ConditionListItem;
use rehab_db::ports::ConditionRepository;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ConditionListResponse {
    conditions: Vec<ConditionListItem>,
}

pub async fn run(
    category: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let conditions = match category {
        Some(category) => ctx.service.list_conditions_by_category(category).await?,
        None => ctx.service.list_conditions().await?,
    };
    let conditions = conditions.into_iter().map(ConditionListItem::from).collect();
    output(&ConditionListResponse { conditions }, flags.format)
}
