mod submit;

use rehab_db::ports::MessageRepository;
use serde::Serialize;
use serde_json::json;

use rehab_core::entities::ContactMessage;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MessageCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MessageListResponse {
    messages: Vec<ContactMessage>,
}

/// Handle `rehab message`.
pub async fn handle(
    action: &MessageCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MessageCommands::Submit {
            name,
            email,
            phone,
            subject,
            message,
        } => {
            let form = submit::contact_form(
                name.as_deref(),
                email.as_deref(),
                phone.as_deref(),
                subject.as_deref(),
                message.as_deref(),
            );
            submit::run(&form, ctx, flags).await
        }
        MessageCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let messages = ctx.service.list_messages(limit).await?;
            output(&MessageListResponse { messages }, flags.format)
        }
        MessageCommands::Get { id } => output(&ctx.service.get_message(id).await?, flags.format),
        MessageCommands::Delete { id } => {
            ctx.service.delete_message(id).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
    }
}
