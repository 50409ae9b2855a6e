//! Contact messages

use uuid::Uuid;

use super::{
    input::{is_valid_email, present},
    notifier::{NotificationEvent, Notifier},
};
use crate::{
    error::{AppError, AppResult},
    models::message::{CreateMessage, Message, NewMessage},
    repository::Repository,
};

#[derive(Clone)]
pub struct MessagesService {
    repository: Repository,
    notifier: Notifier,
}

impl MessagesService {
    pub fn new(repository: Repository, notifier: Notifier) -> Self {
        Self { repository, notifier }
    }

    pub async fn create(&self, data: &CreateMessage) -> AppResult<Message> {
        let (Some(full_name), Some(email), Some(subject), Some(message)) = (
            present(&data.full_name),
            present(&data.email),
            present(&data.subject),
            present(&data.message),
        ) else {
            return Err(AppError::Validation("All fields are required.".to_string()));
        };
        if !is_valid_email(&email) {
            return Err(AppError::Validation("Invalid email address.".to_string()));
        }

        let message = self
            .repository
            .messages
            .create(&NewMessage {
                full_name,
                email,
                subject,
                message,
            })
            .await?;
        self.notifier.publish(NotificationEvent::NewMessage, &message);
        Ok(message)
    }

    pub async fn list(&self) -> AppResult<Vec<Message>> {
        self.repository.messages.list().await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.messages.delete(id).await
    }
}
