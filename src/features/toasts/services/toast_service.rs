use chrono::{DateTime, TimeDelta, Utc};
use std::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::toasts::dtos::{ToastDto, DEFAULT_TOAST_DURATION_MS};
use crate::features::toasts::models::{Toast, ToastKind};

/// Queue of on-screen toasts; expired ones are pruned on every access
#[derive(Default)]
pub struct ToastService {
    toasts: RwLock<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, kind: ToastKind, message: &str, duration_ms: Option<u64>) -> Result<ToastDto> {
        self.push_at(kind, message, duration_ms, Utc::now())
    }

    pub fn push_at(
        &self,
        kind: ToastKind,
        message: &str,
        duration_ms: Option<u64>,
        now: DateTime<Utc>,
    ) -> Result<ToastDto> {
        let duration = duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS);
        let toast = Toast {
            id: Uuid::now_v7(),
            kind,
            message: message.to_string(),
            created_at: now,
            expires_at: now + TimeDelta::milliseconds(duration as i64),
        };

        let mut toasts = self.lock_write()?;
        toasts.retain(|t| t.is_active(now));
        toasts.push(toast.clone());

        tracing::debug!("Toast {} ({:?}) shown for {}ms", toast.id, kind, duration);
        Ok(ToastDto::from(&toast))
    }

    /// Toasts still on screen at `now`, oldest first
    pub fn active_at(&self, now: DateTime<Utc>) -> Result<Vec<ToastDto>> {
        let mut toasts = self.lock_write()?;
        toasts.retain(|t| t.is_active(now));
        Ok(toasts.iter().map(ToastDto::from).collect())
    }

    pub fn active(&self) -> Result<Vec<ToastDto>> {
        self.active_at(Utc::now())
    }

    pub fn dismiss(&self, id: Uuid) -> Result<()> {
        let now = Utc::now();
        let mut toasts = self.lock_write()?;
        toasts.retain(|t| t.is_active(now));

        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        if toasts.len() == before {
            return Err(AppError::NotFound(format!("Toast {} not found", id)));
        }
        Ok(())
    }

    fn lock_write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Toast>>> {
        self.toasts
            .write()
            .map_err(|_| AppError::Internal("Toast store lock poisoned".to_string()))
    }
}
