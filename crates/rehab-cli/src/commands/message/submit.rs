use rehab_core::validation::ContactForm;
use rehab_db::ports::MessageRepository;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Reply shown to the visitor once the message is stored.
const THANK_YOU: &str = "Thank you for your message! We'll get back to you soon.";

pub fn contact_form(
    name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
    subject: Option<&str>,
    message: Option<&str>,
) -> ContactForm {
    ContactForm {
        name: name.map(str::to_string),
        email: email.map(str::to_string),
        phone: phone.map(str::to_string),
        subject: subject.map(str::to_string),
        message: message.map(str::to_string),
    }
}

pub async fn run(form: &ContactForm, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stored = ctx.service.submit_contact(form).await?;
    output(
        &json!({ "message": THANK_YOU, "contact_message": stored }),
        flags.format,
    )
}
