//! Contact message repository. Messages are immutable once stored.

use rehab_core::entities::ContactMessage;
use rehab_core::ids::PREFIX_MESSAGE;
use rehab_core::validation::ContactForm;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, now_utc, parse_datetime, timestamp};
use crate::ports::MessageRepository;
use crate::service::SiteService;

const SELECT_COLS: &str = "id, name, email, phone, subject, message, created_at";

fn row_to_message(row: &libsql::Row) -> Result<ContactMessage, DatabaseError> {
    Ok(ContactMessage {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: get_opt_string(row, 3)?,
        subject: get_opt_string(row, 4)?,
        message: row.get(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl MessageRepository for SiteService {
    async fn submit_contact(&self, form: &ContactForm) -> Result<ContactMessage, DatabaseError> {
        let valid = form.validate()?;
        let now = now_utc();
        let id = self.db().generate_id(PREFIX_MESSAGE).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO contact_messages ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    valid.name.as_str(),
                    valid.email.as_str(),
                    valid.phone.as_deref(),
                    valid.subject.as_deref(),
                    valid.message.as_str(),
                    timestamp(now)
                ],
            )
            .await?;
        tracing::debug!(%id, "contact message stored");

        Ok(ContactMessage {
            id,
            name: valid.name,
            email: valid.email,
            phone: valid.phone,
            subject: valid.subject,
            message: valid.message,
            created_at: now,
        })
    }

    async fn list_messages(&self, limit: u32) -> Result<Vec<ContactMessage>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM contact_messages
                     ORDER BY created_at DESC, id DESC LIMIT ?1"
                ),
                [i64::from(limit)],
            )
            .await?;
        let mut messages = Vec::new();
        while let Some(row) = rows.next().await? {
            messages.push(row_to_message(&row)?);
        }
        Ok(messages)
    }

    async fn get_message(&self, id: &str) -> Result<ContactMessage, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM contact_messages WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_message(&row)
    }

    async fn delete_message(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM contact_messages WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(%id, "contact message deleted");
        Ok(())
    }
}
