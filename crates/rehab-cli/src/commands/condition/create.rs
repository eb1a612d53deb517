use rehab_db::ports::ConditionRepository;
use rehab_db::updates::condition::NewCondition;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    slug: Option<&str>,
    category: &str,
    description: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let condition = ctx
        .service
        .create_condition(NewCondition {
            name: name.to_string(),
            slug: slug.map(str::to_string),
            category: Some(category.to_string()),
            description: description.map(str::to_string),
        })
        .await?;
    output(&condition, flags.format)
}
