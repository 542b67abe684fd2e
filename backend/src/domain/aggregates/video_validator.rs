use super::video::Video;
use crate::domain::validation::{Notification, ValidationError};

pub const TITLE_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 4000;

/// Field-level checks on a [`Video`], reported in field order.
pub struct VideoValidator<'a> {
    video: &'a Video,
}

impl<'a> VideoValidator<'a> {
    pub fn new(video: &'a Video) -> Self {
        Self { video }
    }

    pub fn validate(&self) -> Notification {
        let mut notification = Notification::new();

        check_text(&mut notification, "title", self.video.title(), TITLE_MAX_LENGTH);
        check_text(
            &mut notification,
            "description",
            self.video.description(),
            DESCRIPTION_MAX_LENGTH,
        );
        if self.video.launched_at().is_none() {
            notification.append(ValidationError::new("'launchedAt' should not be null"));
        }
        if self.video.rating().is_none() {
            notification.append(ValidationError::new("'rating' should not be null"));
        }

        notification
    }
}

fn check_text(notification: &mut Notification, field: &str, value: Option<&str>, max: usize) {
    let Some(value) = value else {
        notification.append(ValidationError::new(format!("'{field}' should not be null")));
        return;
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        notification.append(ValidationError::new(format!("'{field}' should not be empty")));
        return;
    }

    let length = trimmed.chars().count();
    if length > max {
        notification.append(ValidationError::new(format!(
            "'{field}' must be between 1 and {max} characters"
        )));
    }
}
