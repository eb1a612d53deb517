mod create;
mod list;
mod update;

use rehab_core::enums::ContentKind;
use rehab_db::ports::ConditionRepository;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConditionCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rehab condition`.
pub async fn handle(
    action: &ConditionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ConditionCommands::Create {
            name,
            slug,
            category,
            description,
        } => {
            create::run(
                name,
                slug.as_deref(),
                category,
                description.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        ConditionCommands::Update {
            id,
            name,
            slug,
            category,
            description,
            display_order,
        } => {
            let update = update::condition_update(
                name.as_deref(),
                slug.as_deref(),
                category.as_deref(),
                description.as_deref(),
                *display_order,
            );
            let condition = ctx.service.update_condition(id, update).await?;
            output(&condition, flags.format)
        }
        ConditionCommands::Get { id } => {
            output(&ctx.service.get_condition(id).await?, flags.format)
        }
        ConditionCommands::List { category } => {
            list::run(category.as_deref(), ctx, flags).await
        }
        ConditionCommands::Delete { id } => {
            ctx.service.delete_condition(id).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
        ConditionCommands::Page { slug } => match ctx.service.condition_page(slug).await? {
            Some(page) => output(&page, flags.format),
            None => anyhow::bail!(
                "no detail page at {}/{slug}",
                ContentKind::Condition.route_prefix()
            ),
        },
        ConditionCommands::Categories => {
            let categories = ctx.service.condition_categories().await?;
            output(&json!({ "categories": categories }), flags.format)
        }
    }
}
