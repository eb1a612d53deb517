use rehab_core::contact::ContactInfo;
use rehab_db::resolver::SettingsResolver;
use rehab_db::updates::settings::SettingsUpdate;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{SettingsCommands, SettingsSetArgs};
use crate::commands::shared::parse::clearable;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ContactResponse {
    #[serde(flatten)]
    info: ContactInfo,
    whatsapp_url: String,
    tel_links: Vec<String>,
    mailto: String,
}

/// Handle `rehab settings`.
pub async fn handle(
    action: &SettingsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let resolver = SettingsResolver::new(&ctx.service);
    match action {
        SettingsCommands::Get => output(&resolver.get().await?, flags.format),
        SettingsCommands::Set(args) => {
            let saved = resolver.save(&settings_update(args)).await?;
            output(&saved, flags.format)
        }
        SettingsCommands::Contact => {
            let info = resolver.contact_info().await;
            output(
                &ContactResponse {
                    whatsapp_url: info.whatsapp_url(&ctx.config.site.whatsapp_greeting),
                    tel_links: info.tel_links(),
                    mailto: info.mailto(),
                    info,
                },
                flags.format,
            )
        }
    }
}

fn settings_update(args: &SettingsSetArgs) -> SettingsUpdate {
    SettingsUpdate {
        gallery_enabled: args.gallery_enabled,
        max_gallery_images: args.max_gallery_images,
        address: clearable(args.address.as_deref()),
        phone_primary: clearable(args.phone_primary.as_deref()),
        phone_secondary: clearable(args.phone_secondary.as_deref()),
        phone_tertiary: clearable(args.phone_tertiary.as_deref()),
        email: clearable(args.email.as_deref()),
        whatsapp_number: clearable(args.whatsapp_number.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::settings_update;
    use crate::cli::subcommands::SettingsSetArgs;

    #[test]
    fn only_given_flags_become_updates() {
        let update = settings_update(&SettingsSetArgs {
            gallery_enabled: None,
            max_gallery_images: Some(40),
            address: None,
            phone_primary: Some(String::from("+91 98650 11111")),
            phone_secondary: Some(String::new()),
            phone_tertiary: None,
            email: None,
            whatsapp_number: None,
        });
        assert_eq!(update.max_gallery_images, Some(40));
        assert_eq!(
            update.phone_primary,
            Some(Some(String::from("+91 98650 11111")))
        );
        assert_eq!(update.phone_secondary, Some(None));
        assert_eq!(update.address, None);
        assert!(update.gallery_enabled.is_none());
    }
}
