mod update;

use rehab_core::enums::ContentKind;
use rehab_core::responses::ServiceListItem;
use rehab_db::ports::ServiceRepository;
use rehab_db::updates::service::NewService;
use serde::Serialize;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ServiceCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ServiceListResponse {
    services: Vec<ServiceListItem>,
}

/// Handle `rehab service`.
pub async fn handle(
    action: &ServiceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ServiceCommands::Create {
            title,
            slug,
            short_description,
            full_description,
        } => {
            let service = ctx
                .service
                .create_service(NewService {
                    title: title.clone(),
                    slug: slug.clone(),
                    short_description: short_description.clone(),
                    full_description: full_description.clone(),
                })
                .await?;
            output(&service, flags.format)
        }
        ServiceCommands::Update {
            id,
            title,
            slug,
            short_description,
            full_description,
            display_order,
        } => {
            let update = update::service_update(
                title.as_deref(),
                slug.as_deref(),
                short_description.as_deref(),
                full_description.as_deref(),
                *display_order,
            );
            output(&ctx.service.update_service(id, update).await?, flags.format)
        }
        ServiceCommands::Get { id } => output(&ctx.service.get_service(id).await?, flags.format),
        ServiceCommands::List => {
            let services = ctx
                .service
                .list_services()
                .await?
                .into_iter()
                .map(ServiceListItem::from)
                .collect();
            output(&ServiceListResponse { services }, flags.format)
        }
        ServiceCommands::Delete { id } => {
            ctx.service.delete_service(id).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
        ServiceCommands::Page { slug } => match ctx.service.service_page(slug).await? {
            Some(page) => output(&page, flags.format),
            None => anyhow::bail!(
                "no detail page at {}/{slug}",
                ContentKind::Service.route_prefix()
            ),
        },
    }
}
